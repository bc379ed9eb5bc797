// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::Write;

use clap::Parser;
use ustrs::Cli;

fn main() {
    let cli = Cli::parse();
    ustrs::logging::setup_logging(cli.debug);

    match ustrs::run(cli) {
        Ok(outcome) => {
            let mut stdout = std::io::stdout().lock();
            for line in &outcome.lines {
                if writeln!(stdout, "{}", line).is_err() {
                    // Reader went away (e.g. piped into head).
                    std::process::exit(0);
                }
            }
            let _ = stdout.flush();
            for warning in &outcome.warnings {
                eprintln!("warning: {}", warning);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
