// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ustrs - the library behind the `ustriage` bug-triage reporter.
//!
//! The binary parses [`Cli`], installs logging and hands over to [`run`],
//! which resolves configuration and flags into [`TriageOptions`] and runs
//! [`run_triage`] against real collaborators: a JSON bug export, snapshot
//! files on disk, the system browser and the system clock.
//!
//! ```rust,ignore
//! use ustrs::{run, Cli};
//! use clap::Parser;
//!
//! let outcome = run(Cli::parse())?;
//! for line in &outcome.lines {
//!     println!("{line}");
//! }
//! ```

pub mod browser;
mod cli;
pub mod colors;
pub mod config;
pub mod display;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;
pub mod options;
pub mod triage;

pub use browser::{BrowserOpener, SystemBrowser};
pub use cli::{Cli, ExpirationArgs, ModeArgs, OutputArgs, SnapshotArgs};
pub use config::{Config, ConfigLocation};
pub use display::{LinkStyle, Mode, Report, Section, Style};
pub use error::{Error, Result};
pub use options::{source_path, TriageOptions};
pub use triage::{run_triage, Outcome, Services};

use ust_core::{Clock, FileSnapshotStore, FileSource, SystemClock};

/// Runs the reporter for parsed command-line arguments.
pub fn run(cli: Cli) -> Result<Outcome> {
    let location = config::locate(
        cli.config.as_deref(),
        env::config_path(),
        config::default_config_dir(),
    );
    let config = Config::load_from(location.as_ref())?;

    let clock = SystemClock;
    let options = TriageOptions::resolve(&cli, &config, clock.today())?;
    let source = FileSource::open(&source_path(&cli, &config)?)?;
    let snapshots = FileSnapshotStore;
    let browser = SystemBrowser::from_env();

    let services = Services {
        source: &source,
        snapshots: &snapshots,
        browser: &browser,
        clock: &clock,
    };
    run_triage(&options, &services)
}
