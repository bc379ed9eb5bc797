// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expiration of inactive bugs.
//!
//! Bugs carrying the policy tag are expected to move quickly and expire
//! after `days_tagged`; every other bug expires after `days_general`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bug::Bug;

const SECONDS_PER_DAY: i64 = 86_400;

/// Default tag marking bugs that should be handled soon.
pub const DEFAULT_TAG: &str = "server-todo";
/// Default expiration for tagged bugs, in days.
pub const DEFAULT_DAYS_TAGGED: i64 = 60;
/// Default expiration for all other bugs, in days.
pub const DEFAULT_DAYS_GENERAL: i64 = 180;

/// Which threshold a bug was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Tagged,
    General,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Tagged => "tagged",
            PolicyKind::General => "general",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiry {
    Active,
    Expired,
}

/// Result of classifying one bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    pub status: Expiry,
    pub inactive_days: i64,
    pub policy: PolicyKind,
}

impl Expiration {
    pub fn is_expired(&self) -> bool {
        self.status == Expiry::Expired
    }
}

/// Thresholds for expiring inactive bugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationPolicy {
    /// Tag selecting the tagged threshold.
    pub tag: String,
    pub days_tagged: i64,
    pub days_general: i64,
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        ExpirationPolicy {
            tag: DEFAULT_TAG.to_string(),
            days_tagged: DEFAULT_DAYS_TAGGED,
            days_general: DEFAULT_DAYS_GENERAL,
        }
    }
}

impl ExpirationPolicy {
    /// The policy that applies to `bug`.
    pub fn kind_for(&self, bug: &Bug) -> PolicyKind {
        if bug.has_tag(&self.tag) {
            PolicyKind::Tagged
        } else {
            PolicyKind::General
        }
    }

    pub fn threshold(&self, kind: PolicyKind) -> i64 {
        match kind {
            PolicyKind::Tagged => self.days_tagged,
            PolicyKind::General => self.days_general,
        }
    }

    /// Classifies `bug` as of `now`.
    ///
    /// A bug is expired once its inactive days reach the threshold, so a bug
    /// exactly `threshold` days old is already expired.
    pub fn classify(&self, bug: &Bug, now: DateTime<Utc>) -> Expiration {
        let policy = self.kind_for(bug);
        let inactive_days = inactive_days(bug, now);
        let status = if inactive_days >= self.threshold(policy) {
            Expiry::Expired
        } else {
            Expiry::Active
        };
        Expiration {
            status,
            inactive_days,
            policy,
        }
    }
}

/// Whole days since the bug was last updated, rounded down.
///
/// A timestamp in the future yields a negative count.
pub fn inactive_days(bug: &Bug, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(bug.date_last_updated)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
