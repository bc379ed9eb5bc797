// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flag groups flattened into [`super::Cli`], one per help section.

use std::path::PathBuf;

use clap::Args;

use super::non_empty_string;

/// Which report sections are produced.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Report Modes")]
pub struct ModeArgs {
    /// Skip bugs updated in the date range
    #[arg(long)]
    pub no_triage: bool,

    /// Skip bugs carrying the triage tag
    #[arg(long)]
    pub no_tagged: bool,

    /// Also list every bug the team is subscribed to
    #[arg(long)]
    pub subscribed: bool,

    /// Tag marking bugs that need attention [default: server-todo]
    #[arg(long, value_parser = non_empty_string)]
    pub tag: Option<String>,

    /// Show only the first and last N subscribed bugs
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_head_tail: Option<u32>,
}

/// Expiration of inactive bugs.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Expiration")]
pub struct ExpirationArgs {
    /// Do not report expired bugs
    #[arg(short = 'e', long)]
    pub no_expiration: bool,

    /// Days until a tagged bug expires [default: 60]
    #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(i64).range(0..))]
    pub expire_tagged: Option<i64>,

    /// Days until any other bug expires [default: 180]
    #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(i64).range(0..))]
    pub expire: Option<i64>,

    /// Tag that keeps a bug out of the expired sections [default: bot-stop-nagging]
    #[arg(long, value_parser = non_empty_string)]
    pub exempt_tag: Option<String>,
}

/// Rendering and browser behavior.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output")]
pub struct OutputArgs {
    /// Print full URLs instead of "LP: #" links
    #[arg(long)]
    pub fullurls: bool,

    /// Add last update, importance and assignee to each line
    #[arg(long)]
    pub extended: bool,

    /// Open the reported bugs in a browser
    #[arg(short = 'o', long)]
    pub open: bool,

    /// Open the expired bugs in a browser
    #[arg(short = 'O', long)]
    pub open_expired: bool,
}

/// Snapshots and recency.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Snapshots")]
pub struct SnapshotArgs {
    /// Save the reported bug numbers to PATH
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Flag bugs not present in the snapshot at PATH
    #[arg(long, value_name = "PATH")]
    pub compare: Option<PathBuf>,

    /// Days a bug counts as recently updated [default: 7]
    #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(i64).range(0..))]
    pub recent_days: Option<i64>,
}
