// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bug selection.
//!
//! Each enabled report mode contributes one [`Criterion`]. [`select`] runs
//! them in order against a [`BugSource`], producing one [`View`] per
//! criterion, and deduplicates across views: a bug claimed by an earlier
//! view never shows up in a later one.
//!
//! Within a view bugs are ordered by last update, newest first, with the bug
//! number as tie-break so that repeated runs render identically.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::time::Instant;

use crate::bug::Bug;
use crate::dates::DateRange;
use crate::error::{Error, Result};
use crate::source::BugSource;

/// The report mode a criterion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Bugs updated within the triage date range.
    Triage,
    /// Bugs carrying the active tag.
    Tagged,
    /// Every bug the subscriber follows.
    Subscribed,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Triage => "triage",
            ViewKind::Tagged => "tagged",
            ViewKind::Subscribed => "subscribed",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selection rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Last updated within the range, both ends inclusive.
    DateRange(DateRange),
    /// Subscribed to by `identity`, structurally or directly.
    Subscriber { identity: String, structural: bool },
    /// Carries exactly this tag.
    Tag(String),
}

impl Criterion {
    /// The view this criterion fills.
    pub fn kind(&self) -> ViewKind {
        match self {
            Criterion::DateRange(_) => ViewKind::Triage,
            Criterion::Tag(_) => ViewKind::Tagged,
            Criterion::Subscriber { .. } => ViewKind::Subscribed,
        }
    }

    /// Asks the source for candidate bugs.
    pub fn fetch<S: BugSource + ?Sized>(&self, source: &S, project: &str) -> Result<Vec<Bug>> {
        match self {
            Criterion::DateRange(range) => {
                source.fetch_by_date_range(project, range.window_start(), range.window_end())
            }
            Criterion::Subscriber {
                identity,
                structural,
            } => source.fetch_by_subscriber(project, identity, *structural),
            Criterion::Tag(tag) => source.fetch_by_tag(project, tag),
        }
    }

    /// Re-checks a fetched bug against the criterion.
    ///
    /// Sources may return more than was asked for (a tracker that can only
    /// query "modified since" for instance); strays are dropped here.
    pub fn matches(&self, bug: &Bug) -> bool {
        match self {
            Criterion::DateRange(range) => range.contains(bug.date_last_updated),
            Criterion::Tag(tag) => bug.has_tag(tag),
            Criterion::Subscriber { .. } => true,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::DateRange(range) => write!(f, "updated {}", range.describe()),
            Criterion::Subscriber {
                identity,
                structural: true,
            } => write!(f, "structurally subscribed by '{}'", identity),
            Criterion::Subscriber {
                identity,
                structural: false,
            } => write!(f, "directly subscribed by '{}'", identity),
            Criterion::Tag(tag) => write!(f, "tagged '{}'", tag),
        }
    }
}

/// Bugs selected by one criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub criterion: Criterion,
    pub bugs: Vec<Bug>,
}

impl View {
    pub fn kind(&self) -> ViewKind {
        self.criterion.kind()
    }
}

/// The merged result of all criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub views: Vec<View>,
}

impl Selection {
    /// All selected bugs, view by view.
    pub fn bugs(&self) -> impl Iterator<Item = &Bug> {
        self.views.iter().flat_map(|view| view.bugs.iter())
    }

    /// Identifiers of every selected bug.
    pub fn ids(&self) -> BTreeSet<u64> {
        self.bugs().map(|bug| bug.id).collect()
    }

    pub fn len(&self) -> usize {
        self.views.iter().map(|view| view.bugs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The view filled by `kind`, if that mode was enabled.
    pub fn view(&self, kind: ViewKind) -> Option<&View> {
        self.views.iter().find(|view| view.kind() == kind)
    }
}

/// Sorts newest update first; equal timestamps fall back to bug number.
pub fn sort_by_last_update(bugs: &mut [Bug]) {
    bugs.sort_by(|a, b| {
        b.date_last_updated
            .cmp(&a.date_last_updated)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Runs every criterion against the source and merges the results.
///
/// # Errors
///
/// Returns [`Error::NoCriteria`] for an empty criteria list and passes
/// [`Error::SourceUnavailable`] through from the source untouched.
pub fn select<S: BugSource + ?Sized>(
    source: &S,
    project: &str,
    criteria: &[Criterion],
) -> Result<Selection> {
    if criteria.is_empty() {
        return Err(Error::NoCriteria);
    }

    let mut seen: HashSet<u64> = HashSet::new();
    let mut views = Vec::with_capacity(criteria.len());

    for criterion in criteria {
        let started = Instant::now();
        let mut bugs = criterion.fetch(source, project)?;
        let fetched = bugs.len();
        tracing::debug!(
            view = %criterion.kind(),
            fetched,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched bugs {}",
            criterion
        );

        bugs.retain(|bug| criterion.matches(bug));
        sort_by_last_update(&mut bugs);
        bugs.retain(|bug| seen.insert(bug.id));

        tracing::info!(view = %criterion.kind(), "found {} bugs", bugs.len());
        views.push(View {
            criterion: criterion.clone(),
            bugs,
        });
    }

    Ok(Selection { views })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
