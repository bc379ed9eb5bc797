// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot files.
//!
//! A snapshot is the set of bug numbers a run selected, stored as a JSON
//! array in ascending order with no other metadata. The format is not
//! versioned.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Load/store service for named snapshots.
pub trait SnapshotStore {
    /// Reads a snapshot. Missing or malformed files are
    /// [`Error::SnapshotRead`].
    fn load(&self, path: &Path) -> Result<BTreeSet<u64>>;

    /// Replaces the snapshot at `path`. Failures are [`Error::SnapshotWrite`].
    fn save(&self, path: &Path, ids: &BTreeSet<u64>) -> Result<()>;
}

/// [`SnapshotStore`] on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSnapshotStore;

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, path: &Path) -> Result<BTreeSet<u64>> {
        load_snapshot(path)
    }

    fn save(&self, path: &Path, ids: &BTreeSet<u64>) -> Result<()> {
        save_snapshot(path, ids)
    }
}

/// Reads the bug numbers stored at `path`.
pub fn load_snapshot(path: &Path) -> Result<BTreeSet<u64>> {
    let read_error = |reason: String| Error::SnapshotRead {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
    let ids: Vec<u64> = serde_json::from_str(&content).map_err(|e| read_error(e.to_string()))?;
    Ok(ids.into_iter().collect())
}

/// Writes `ids` to `path` in ascending order, with fsync.
pub fn save_snapshot(path: &Path, ids: &BTreeSet<u64>) -> Result<()> {
    let write_error = |reason: String| Error::SnapshotWrite {
        path: path.to_path_buf(),
        reason,
    };

    let ids: Vec<u64> = ids.iter().copied().collect();
    let json = serde_json::to_string_pretty(&ids).map_err(|e| write_error(e.to_string()))?;

    let mut file = File::create(path).map_err(|e| write_error(e.to_string()))?;
    writeln!(file, "{json}").map_err(|e| write_error(e.to_string()))?;
    file.sync_all().map_err(|e| write_error(e.to_string()))?;

    tracing::debug!("saved {} bug numbers to {}", ids.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
