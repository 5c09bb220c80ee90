//! Engine errors.
//!
//! Nothing that happens during play is an error; these only cover the
//! interactive surface failing underneath the loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("interactive surface failed: {0}")]
    Io(#[from] std::io::Error),
}
