// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A complete triage run.
//!
//! [`run_triage`] selects bugs, classifies and differences them, renders the
//! report and then feeds the side outputs (snapshot file, browser). The
//! expired sections come from a separate fetch of everything the team is
//! subscribed to, so they are filled even when the subscribed view is off.
//! The collaborators come in through [`Services`] so runs can be replayed
//! against fixed data and a fixed clock.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use ust_core::filter::sort_by_last_update;
use ust_core::{
    annotate, diff, select, AnnotateContext, Annotated, Bug, BugSource, Clock, Criterion,
    ExpirationPolicy, PolicyKind, Selection, SnapshotStore, ViewKind,
};

use crate::browser::BrowserOpener;
use crate::display::{self, Report, Section};
use crate::error::Result;
use crate::options::TriageOptions;

/// External collaborators of a run.
pub struct Services<'a> {
    pub source: &'a dyn BugSource,
    pub snapshots: &'a dyn SnapshotStore,
    pub browser: &'a dyn BrowserOpener,
    pub clock: &'a dyn Clock,
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Report lines for stdout.
    pub lines: Vec<String>,
    /// Failures that did not stop the report.
    pub warnings: Vec<String>,
    /// URLs handed to the browser.
    pub opened: Vec<String>,
    /// Bugs the team is directly subscribed to right now.
    pub backlog: usize,
}

/// Runs one triage session.
///
/// # Errors
///
/// Fails before fetching anything when the compared snapshot cannot be read,
/// and fails without a report when the bug source does. Snapshot save and
/// browser failures are returned as warnings.
pub fn run_triage(options: &TriageOptions, services: &Services<'_>) -> Result<Outcome> {
    let started = Instant::now();
    let criteria = options.criteria();

    let previous = options
        .compare
        .as_deref()
        .map(|path| services.snapshots.load(path))
        .transpose()?;

    let backlog = current_backlog(services.source, options)?;

    let selection = select(services.source, &options.project, &criteria)?;
    let ids = selection.ids();
    tracing::info!("selected {} bugs", ids.len());

    let snapshot_diff = previous.as_ref().map(|previous| diff(&ids, previous));
    if let Some(d) = &snapshot_diff {
        tracing::info!("{} new and {} gone since snapshot", d.new_ids.len(), d.gone_ids.len());
    }

    let ctx = AnnotateContext {
        now: services.clock.now(),
        policy: options.policy.as_ref(),
        diff: snapshot_diff.as_ref(),
        recent_days: options.recent_days,
        subscriber: &options.lpname,
    };

    let mut sections = view_sections(&selection, &ctx, options);
    let expired = match options.policy.as_ref() {
        Some(policy) => {
            let candidates = expiration_candidates(services.source, options)?;
            Some(expired_sections(candidates, &ctx, policy, &options.exempt_tag))
        }
        None => None,
    };
    let opened = browser_urls(&selection, expired.as_deref(), options);
    if let Some(expired) = expired {
        sections.extend(expired);
    }

    let report = Report {
        legend: display::legend(&options.lpname, options.recent_days),
        sections,
        gone: snapshot_diff.map(|d| d.gone_ids),
    };
    let lines = report.render(&options.style);

    let mut warnings = Vec::new();
    if let Some(path) = options.save.as_deref() {
        if let Err(e) = save(services.snapshots, path, &ids) {
            warnings.push(e);
        }
    }
    if !opened.is_empty() {
        if let Err(e) = services.browser.open(&opened) {
            tracing::warn!("{}", e);
            warnings.push(e.to_string());
        }
    }

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "triage run finished"
    );
    Ok(Outcome {
        lines,
        warnings,
        opened,
        backlog,
    })
}

/// Header of the section a criterion fills.
pub fn view_title(criterion: &Criterion) -> String {
    match criterion {
        Criterion::DateRange(range) => match range.triage_name() {
            Some(name) => format!("Bugs {criterion} [{name}]"),
            None => format!("Bugs {criterion}"),
        },
        _ => format!("Bugs {criterion}"),
    }
}

/// Counts the bugs the team is directly subscribed to, for tracking how the
/// backlog grows or shrinks between runs.
fn current_backlog(source: &dyn BugSource, options: &TriageOptions) -> Result<usize> {
    let count = source
        .fetch_by_subscriber(&options.project, &options.lpname, false)?
        .len();
    tracing::info!("team '{}' currently subscribed to {} bugs", options.lpname, count);
    Ok(count)
}

fn view_sections(
    selection: &Selection,
    ctx: &AnnotateContext<'_>,
    options: &TriageOptions,
) -> Vec<Section> {
    selection
        .views
        .iter()
        .map(|view| {
            let bugs: Vec<Annotated> = view
                .bugs
                .iter()
                .cloned()
                .map(|bug| annotate(bug, ctx))
                .collect();
            let truncation = match view.kind() {
                ViewKind::Subscribed => options.max_head_and_tail,
                ViewKind::Triage | ViewKind::Tagged => None,
            };
            Section::new(view_title(&view.criterion), bugs).truncated(truncation)
        })
        .collect()
}

/// Every bug the subscriber follows, newest update first.
///
/// Expiration looks at the whole subscription, independently of which
/// views are shown.
fn expiration_candidates(source: &dyn BugSource, options: &TriageOptions) -> Result<Vec<Bug>> {
    let criterion = Criterion::Subscriber {
        identity: options.lpname.clone(),
        structural: options.structural,
    };
    let mut bugs = criterion.fetch(source, &options.project)?;
    sort_by_last_update(&mut bugs);
    let mut seen = BTreeSet::new();
    bugs.retain(|bug| seen.insert(bug.id));
    Ok(bugs)
}

/// The expired-tagged and expired-backlog sections.
fn expired_sections(
    candidates: Vec<Bug>,
    ctx: &AnnotateContext<'_>,
    policy: &ExpirationPolicy,
    exempt_tag: &str,
) -> Vec<Section> {
    let mut tagged = Vec::new();
    let mut backlog = Vec::new();

    for bug in candidates {
        let bug = annotate(bug, ctx);
        let Some(expiration) = bug.expiration.filter(|e| e.is_expired()) else {
            continue;
        };
        if bug.bug.has_tag(exempt_tag) {
            tracing::debug!("bug {} is exempt from expiration", bug.bug.id);
            continue;
        }
        match expiration.policy {
            PolicyKind::Tagged => tagged.push(bug),
            PolicyKind::General => backlog.push(bug),
        }
    }

    vec![
        Section::new(
            format!(
                "Bugs tagged '{}' and not touched in {} days",
                policy.tag, policy.days_tagged
            ),
            tagged,
        ),
        Section::new(
            format!(
                "Bugs in backlog and not touched in {} days",
                policy.days_general
            ),
            backlog,
        ),
    ]
}

/// Links for the browser: the whole triage view with `--open`, the expired
/// sections with `--open-expired`.
fn browser_urls(
    selection: &Selection,
    expired: Option<&[Section]>,
    options: &TriageOptions,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut urls = Vec::new();
    let mut add = |id: u64| {
        if seen.insert(id) {
            urls.push(display::url(id));
        }
    };

    if options.open {
        if let Some(view) = selection.view(ViewKind::Triage) {
            view.bugs.iter().for_each(|bug| add(bug.id));
        }
    }
    if options.open_expired {
        expired
            .unwrap_or_default()
            .iter()
            .flat_map(|section| section.bugs.iter())
            .for_each(|bug| add(bug.bug.id));
    }
    urls
}

fn save(
    snapshots: &dyn SnapshotStore,
    path: &Path,
    ids: &BTreeSet<u64>,
) -> std::result::Result<(), String> {
    snapshots.save(path, ids).map_err(|e| {
        tracing::warn!("{}", e);
        e.to_string()
    })
}

#[cfg(test)]
#[path = "triage_tests.rs"]
mod tests;
