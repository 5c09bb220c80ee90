//! Player commands.
//!
//! Commands are recognized by an exact, case-sensitive keyword prefix. The
//! argument is the last whitespace-delimited token of the raw text, so
//! identifiers cannot contain spaces.

mod handlers;

pub use handlers::*;

/// A recognized player command, borrowing its argument from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    DisplayPeople,
    TalkTo(&'a str),
    DisplayLocations,
    TravelTo(&'a str),
    DisplayClue,
    Investigate(&'a str),
    Catch,
}

/// Last whitespace-delimited token, or the empty string.
fn trailing_token(raw: &str) -> &str {
    raw.split_whitespace().last().unwrap_or("")
}

impl<'a> Command<'a> {
    /// Parse free text into a command. Prefixes are tried in a fixed order,
    /// so `display people` wins over any later keyword.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let arg = || trailing_token(raw);

        if raw.starts_with("display people") {
            Some(Command::DisplayPeople)
        } else if raw.starts_with("talk to") {
            Some(Command::TalkTo(arg()))
        } else if raw.starts_with("display locations") {
            Some(Command::DisplayLocations)
        } else if raw.starts_with("go to") || raw.starts_with("travel to") {
            Some(Command::TravelTo(arg()))
        } else if raw.starts_with("display clue") {
            Some(Command::DisplayClue)
        } else if raw.starts_with("investigate the") {
            Some(Command::Investigate(arg()))
        } else if raw.starts_with("catch") {
            Some(Command::Catch)
        } else {
            None
        }
    }
}
