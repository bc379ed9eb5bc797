// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::help;
use clap::Parser;

pub use args::{ExpirationArgs, ModeArgs, OutputArgs, SnapshotArgs};

/// Parse a string that must not be empty or whitespace-only.
pub(crate) fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "ustriage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Output bugs to triage for the Ubuntu Server team")]
#[command(
    long_about = "Output bugs to triage for the Ubuntu Server team.\n\n\
    Lists bugs last updated in a date range, bugs carrying the triage tag and, optionally, \
    every bug the team is subscribed to, flagging the ones that expired."
)]
#[command(help_template = help::template())]
#[command(before_help = help::modes())]
#[command(after_help = help::examples())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// First day to triage (YYYY-MM-DD), or a weekday keyword such as "mon"
    #[arg(value_name = "START")]
    pub start: Option<String>,

    /// Last day to triage, inclusive (YYYY-MM-DD)
    #[arg(value_name = "END")]
    pub end: Option<String>,

    /// Tracker project to report on [default: ubuntu]
    #[arg(long, value_parser = non_empty_string)]
    pub project: Option<String>,

    /// Team or user whose subscriptions are reported [default: ubuntu-server]
    #[arg(short = 'n', long, value_parser = non_empty_string)]
    pub lpname: Option<String>,

    /// Match direct bug subscriptions instead of structural ones
    #[arg(short = 'b', long)]
    pub bugsubscriber: bool,

    #[command(flatten)]
    pub modes: ModeArgs,

    #[command(flatten)]
    pub expiration: ExpirationArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// JSON export to read bugs from
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Configuration file [default: <config dir>/ustriage/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
