// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Differencing against a saved snapshot, and recency.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bug::Bug;
use crate::classify::inactive_days;

/// Default recency window, in days.
pub const DEFAULT_RECENT_DAYS: i64 = 7;

/// How a bug relates to the compared snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffFlag {
    /// Not in the snapshot.
    New,
    /// Already in the snapshot.
    Unchanged,
}

/// Set difference between the current and a previous selection.
///
/// Both sets iterate in ascending bug number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub new_ids: BTreeSet<u64>,
    pub gone_ids: BTreeSet<u64>,
}

impl SnapshotDiff {
    /// Flag for a bug of the current selection.
    pub fn flag(&self, id: u64) -> DiffFlag {
        if self.new_ids.contains(&id) {
            DiffFlag::New
        } else {
            DiffFlag::Unchanged
        }
    }
}

/// `new = current - previous`, `gone = previous - current`.
pub fn diff(current: &BTreeSet<u64>, previous: &BTreeSet<u64>) -> SnapshotDiff {
    SnapshotDiff {
        new_ids: current.difference(previous).copied().collect(),
        gone_ids: previous.difference(current).copied().collect(),
    }
}

/// Returns true if the bug was updated within the last `window_days` whole
/// days, inclusive.
pub fn is_recent(bug: &Bug, now: DateTime<Utc>, window_days: i64) -> bool {
    inactive_days(bug, now) <= window_days
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::{Duration, TimeZone};
    use yare::parameterized;

    fn set(ids: &[u64]) -> BTreeSet<u64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn diff_with_itself_is_empty() {
        let x = set(&[1, 2, 3]);
        assert_eq!(diff(&x, &x), SnapshotDiff::default());
    }

    #[test]
    fn diff_against_empty_is_all_new() {
        let x = set(&[4, 1, 9]);
        let d = diff(&x, &BTreeSet::new());
        assert_eq!(d.new_ids, x);
        assert!(d.gone_ids.is_empty());
    }

    #[test]
    fn diff_reports_both_directions() {
        let d = diff(&set(&[1, 2, 3]), &set(&[2, 3, 4, 5]));
        assert_eq!(d.new_ids, set(&[1]));
        assert_eq!(d.gone_ids, set(&[4, 5]));
        assert!(d.new_ids.is_disjoint(&d.gone_ids));
    }

    #[test]
    fn diff_iterates_ascending() {
        let d = diff(&set(&[30, 10, 20]), &set(&[]));
        assert_eq!(d.new_ids.into_iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn flag_marks_new_and_unchanged() {
        let d = diff(&set(&[1, 2]), &set(&[2]));
        assert_eq!(d.flag(1), DiffFlag::New);
        assert_eq!(d.flag(2), DiffFlag::Unchanged);
    }

    #[parameterized(
        today = { 0, true },
        at_window = { 7, true },
        past_window = { 8, false },
    )]
    fn recency_window_is_inclusive(days_ago: i64, expected: bool) {
        let now = Utc.with_ymd_and_hms(2016, 9, 12, 10, 0, 0).unwrap();
        let bug = Bug::new(1, "x", now - Duration::days(30)).updated_at(now - Duration::days(days_ago));
        assert_eq!(is_recent(&bug, now, DEFAULT_RECENT_DAYS), expected);
    }
}
