// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derived per-bug state attached by the pipeline.

use chrono::{DateTime, Utc};

use crate::bug::Bug;
use crate::classify::{Expiration, ExpirationPolicy};
use crate::diff::{is_recent, DiffFlag, SnapshotDiff};

/// A bug together with everything the pipeline worked out about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated {
    pub bug: Bug,
    /// `None` when expiration reporting is off.
    pub expiration: Option<Expiration>,
    /// `None` when no snapshot was compared.
    pub diff: Option<DiffFlag>,
    /// Updated within the recency window.
    pub recent: bool,
    /// The configured subscriber is directly subscribed to the bug.
    pub subscribed: bool,
}

impl Annotated {
    pub fn is_expired(&self) -> bool {
        self.expiration.is_some_and(|e| e.is_expired())
    }

    pub fn is_new(&self) -> bool {
        self.diff == Some(DiffFlag::New)
    }
}

/// Inputs for [`annotate`] that are the same for every bug of a run.
#[derive(Debug, Clone, Copy)]
pub struct AnnotateContext<'a> {
    pub now: DateTime<Utc>,
    pub policy: Option<&'a ExpirationPolicy>,
    pub diff: Option<&'a SnapshotDiff>,
    pub recent_days: i64,
    pub subscriber: &'a str,
}

/// Attaches derived state to a bug.
///
/// Everything is computed from the bug's own fields, so a bug gets the same
/// annotations whichever view selected it.
pub fn annotate(bug: Bug, ctx: &AnnotateContext<'_>) -> Annotated {
    Annotated {
        expiration: ctx.policy.map(|policy| policy.classify(&bug, ctx.now)),
        diff: ctx.diff.map(|diff| diff.flag(bug.id)),
        recent: is_recent(&bug, ctx.now, ctx.recent_days),
        subscribed: bug.is_subscribed(ctx.subscriber),
        bug,
    }
}
