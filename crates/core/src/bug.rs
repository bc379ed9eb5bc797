// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bug record types.
//!
//! A [`Bug`] is one tracker task as fetched from the data source. Status and
//! importance are closed sets; both parse from the tracker's display strings
//! ("Fix Committed") as well as from token spellings ("FIX_COMMITTED").

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowercases and strips punctuation so "Won't Fix", "WONT_FIX" and
/// "wont-fix" all compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '(' | ')' | '\''))
        .map(|c| match c {
            '_' | '-' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Workflow status of a bug task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    New,
    Incomplete,
    IncompleteWithResponse,
    IncompleteWithoutResponse,
    Opinion,
    Invalid,
    WontFix,
    Expired,
    Confirmed,
    Triaged,
    InProgress,
    FixCommitted,
    FixReleased,
    DoesNotExist,
    Unknown,
}

impl Status {
    /// Every status, in tracker workflow order.
    pub const ALL: [Status; 15] = [
        Status::New,
        Status::Incomplete,
        Status::IncompleteWithResponse,
        Status::IncompleteWithoutResponse,
        Status::Opinion,
        Status::Invalid,
        Status::WontFix,
        Status::Expired,
        Status::Confirmed,
        Status::Triaged,
        Status::InProgress,
        Status::FixCommitted,
        Status::FixReleased,
        Status::DoesNotExist,
        Status::Unknown,
    ];

    /// Returns the tracker's display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Incomplete => "Incomplete",
            Status::IncompleteWithResponse => "Incomplete (with response)",
            Status::IncompleteWithoutResponse => "Incomplete (without response)",
            Status::Opinion => "Opinion",
            Status::Invalid => "Invalid",
            Status::WontFix => "Won't Fix",
            Status::Expired => "Expired",
            Status::Confirmed => "Confirmed",
            Status::Triaged => "Triaged",
            Status::InProgress => "In Progress",
            Status::FixCommitted => "Fix Committed",
            Status::FixReleased => "Fix Released",
            Status::DoesNotExist => "Does Not Exist",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Status::ALL
            .into_iter()
            .find(|status| normalize(status.as_str()) == wanted)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

impl TryFrom<String> for Status {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// How much a bug matters, as set by triagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Importance {
    Unknown,
    Undecided,
    Critical,
    High,
    Medium,
    Low,
    Wishlist,
}

impl Importance {
    /// Returns the tracker's display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Unknown => "Unknown",
            Importance::Undecided => "Undecided",
            Importance::Critical => "Critical",
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
            Importance::Wishlist => "Wishlist",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Importance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "unknown" => Ok(Importance::Unknown),
            "undecided" => Ok(Importance::Undecided),
            "critical" => Ok(Importance::Critical),
            "high" => Ok(Importance::High),
            "medium" => Ok(Importance::Medium),
            "low" => Ok(Importance::Low),
            "wishlist" => Ok(Importance::Wishlist),
            _ => Err(Error::InvalidImportance(s.to_string())),
        }
    }
}

impl TryFrom<String> for Importance {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Importance> for String {
    fn from(importance: Importance) -> Self {
        importance.as_str().to_string()
    }
}

/// One tracker task, normalized.
///
/// Source fields are never modified after fetch; derived state lives in
/// [`crate::Annotated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    /// Tracker bug number.
    pub id: u64,
    /// Bug summary.
    pub title: String,
    /// Task status.
    pub status: Status,
    /// Task importance, if the tracker reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// Account name of the assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub date_created: DateTime<Utc>,
    pub date_last_updated: DateTime<Utc>,
    /// Direct subscribers. Empty when the source did not fetch them.
    #[serde(default)]
    pub subscribers: BTreeSet<String>,
}

impl Bug {
    /// Creates a bug with status New, last updated when it was created.
    pub fn new(id: u64, title: impl Into<String>, date_created: DateTime<Utc>) -> Self {
        Bug {
            id,
            title: title.into(),
            status: Status::New,
            importance: None,
            assignee: None,
            tags: BTreeSet::new(),
            date_created,
            date_last_updated: date_created,
            subscribers: BTreeSet::new(),
        }
    }

    /// Sets the last-updated timestamp (builder pattern).
    pub fn updated_at(mut self, date_last_updated: DateTime<Utc>) -> Self {
        self.date_last_updated = date_last_updated;
        self
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the importance (builder pattern).
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Adds a tag (builder pattern).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Adds a direct subscriber (builder pattern).
    pub fn with_subscriber(mut self, identity: impl Into<String>) -> Self {
        self.subscribers.insert(identity.into());
        self
    }

    /// Returns true if the bug carries exactly this tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Returns true if `identity` is a direct subscriber of the bug.
    pub fn is_subscribed(&self, identity: &str) -> bool {
        self.subscribers.contains(identity)
    }
}

#[cfg(test)]
#[path = "bug_tests.rs"]
mod tests;
