//! `taglog` binary: one log line (plus optional key/value rows) per invocation.
//!
//! Usage:
//!   taglog <kind> <message>... [--tag T]... [--indent N] [--icon done|heart]
//!          [--time] [--blink] [--kv KEY=VALUE]... [--threshold L] [--colors M] [--app NAME]

use clap::Parser;
use std::process::ExitCode;
use taglog::cli::{Cli, run};
use taglog::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives threshold, colours and styles, so it must load before any logger exists
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    run(&cli, &config)
}
