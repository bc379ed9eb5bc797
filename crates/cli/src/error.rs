// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the ustrs library.
///
/// Pipeline errors from ust-core pass through with their own messages.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] ust_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("no bug source configured\n  hint: pass --source <PATH> or set 'source' in the config file")]
    NoSource,

    #[error("browser error: {0}")]
    Browser(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors caused by the invocation itself.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Core(e) => e.is_invalid_argument(),
            Error::NoSource => true,
            _ => false,
        }
    }
}

/// A specialized Result type for ustrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
