mod config;
mod core;
mod repl;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{APP_NAME, BANNER_HINT, BANNER_RULE, BANNER_TAGLINE};
use crate::core::Session;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("{APP_NAME} - {BANNER_TAGLINE}");
    println!("{BANNER_HINT}");
    println!("{BANNER_RULE}");

    let session = match Session::new() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{APP_NAME}: cannot determine working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = repl::run(session) {
        eprintln!("{APP_NAME}: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
