//! Caper - interactive chase game.
//!
//! Usage:
//!   caper [world.json]
//!
//! Without an argument the game file is asked for on stdin. Rules are read
//! from `caper.toml` in the working directory when present.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use caper_engine::GameLoop;
use caper_world::{load_world, GameConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_FILE: &str = "caper.toml";

fn ask_game_file(input: &mut impl BufRead) -> io::Result<String> {
    print!("Which game do you want to play? ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the transcript.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caper_engine=warn,caper_world=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match GameConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let game_file = match std::env::args().nth(1) {
        Some(path) => path,
        None => match ask_game_file(&mut input) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let world = match load_world(&game_file) {
        Ok(world) => world,
        Err(e) => {
            tracing::error!(path = %game_file, error = %e, "could not load world");
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = GameLoop::new(world, config);
    match game.run(input, io::stdout().lock()) {
        Ok(outcome) if outcome.won() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
