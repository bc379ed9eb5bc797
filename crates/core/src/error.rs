// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ust-core operations.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// All possible errors that can occur in ust-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date: '{0}'\n  hint: dates use the YYYY-MM-DD format (e.g. 2016-07-15)")]
    InvalidDate(String),

    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("invalid weekday: '{0}'\n  hint: use a day name such as mon, tue or wednesday")]
    InvalidWeekday(String),

    #[error("no triage range is defined for {0}\n  hint: weekend days are covered by Monday triage")]
    WeekendTriage(String),

    #[error("a weekday keyword ('{0}') cannot be combined with an end date")]
    KeywordWithEndDate(String),

    #[error("invalid status: '{0}'")]
    InvalidStatus(String),

    #[error("invalid importance: '{0}'\n  hint: valid values are: unknown, undecided, critical, high, medium, low, wishlist")]
    InvalidImportance(String),

    #[error("no report mode enabled\n  hint: enable at least one of triage, tagged or subscribed")]
    NoCriteria,

    #[error("{0}")]
    ConflictingOptions(String),

    #[error("bug source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("cannot read snapshot {}: {reason}", path.display())]
    SnapshotRead { path: PathBuf, reason: String },

    #[error("cannot write snapshot {}: {reason}", path.display())]
    SnapshotWrite { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for errors caused by the invocation itself rather than by
    /// the data source or the filesystem.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidDate(_)
                | Error::EndBeforeStart { .. }
                | Error::InvalidWeekday(_)
                | Error::WeekendTriage(_)
                | Error::KeywordWithEndDate(_)
                | Error::InvalidStatus(_)
                | Error::InvalidImportance(_)
                | Error::NoCriteria
                | Error::ConflictingOptions(_)
        )
    }
}

/// A specialized Result type for ust-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
