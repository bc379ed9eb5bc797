// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ust-core: the bug triage pipeline.
//!
//! This crate holds the data model and the pure stages of a triage run:
//! selecting bugs from a [`BugSource`], classifying their expiration,
//! differencing against a saved snapshot, and annotating each bug with the
//! results. Rendering and process concerns live in the `ustriage` crate.

pub mod annotate;
pub mod bug;
pub mod classify;
pub mod clock;
pub mod dates;
pub mod diff;
pub mod error;
pub mod filter;
pub mod snapshot;
pub mod source;

pub use annotate::{annotate, AnnotateContext, Annotated};
pub use bug::{Bug, Importance, Status};
pub use classify::{Expiration, ExpirationPolicy, Expiry, PolicyKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::DateRange;
pub use diff::{diff, DiffFlag, SnapshotDiff};
pub use error::{Error, Result};
pub use filter::{select, Criterion, Selection, View, ViewKind};
pub use snapshot::{FileSnapshotStore, SnapshotStore};
pub use source::{BugSource, FileSource, SourceExport};
