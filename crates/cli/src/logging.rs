// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging on stderr.
//!
//! Report output goes to stdout; everything logged here goes to stderr so
//! that reports can be piped. `--debug` turns on debug output for both
//! crates, otherwise `USTRIAGE_LOG` takes an `EnvFilter` directive and the
//! default only shows warnings.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "ust_core=debug,ustrs=debug,ustriage=debug";

/// The filter directive for a run.
pub fn filter_directive(debug: bool, env_filter: Option<String>) -> String {
    if debug {
        return DEBUG_FILTER.to_string();
    }
    env_filter.unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber. Later calls are ignored.
pub fn setup_logging(debug: bool) {
    let directive = filter_directive(debug, env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
