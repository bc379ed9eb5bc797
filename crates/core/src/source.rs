// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bug data sources.
//!
//! [`BugSource`] is the query-and-fetch contract the filter engine consumes.
//! Authentication, pagination and retries belong to the implementation;
//! callers see either a (possibly empty) list of bugs or
//! [`Error::SourceUnavailable`].
//!
//! [`FileSource`] answers the same queries from a JSON export of a project's
//! bugs.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bug::Bug;
use crate::error::{Error, Result};

/// Query interface of an upstream bug tracker.
pub trait BugSource {
    /// Bugs of `project` last updated within `[start, end]`, both inclusive.
    fn fetch_by_date_range(
        &self,
        project: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Bug>>;

    /// Bugs of `project` that `identity` is subscribed to, either
    /// structurally (through the project) or directly on the bug.
    fn fetch_by_subscriber(&self, project: &str, identity: &str, structural: bool)
        -> Result<Vec<Bug>>;

    /// Bugs of `project` carrying exactly `tag`.
    fn fetch_by_tag(&self, project: &str, tag: &str) -> Result<Vec<Bug>>;
}

impl<S: BugSource + ?Sized> BugSource for &S {
    fn fetch_by_date_range(
        &self,
        project: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Bug>> {
        (**self).fetch_by_date_range(project, start, end)
    }

    fn fetch_by_subscriber(
        &self,
        project: &str,
        identity: &str,
        structural: bool,
    ) -> Result<Vec<Bug>> {
        (**self).fetch_by_subscriber(project, identity, structural)
    }

    fn fetch_by_tag(&self, project: &str, tag: &str) -> Result<Vec<Bug>> {
        (**self).fetch_by_tag(project, tag)
    }
}

/// On-disk export of one project's bugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceExport {
    /// Project (distribution or product) the bugs belong to.
    pub project: String,
    /// Identities with a structural subscription to the whole project.
    #[serde(default)]
    pub structural_subscribers: BTreeSet<String>,
    #[serde(default)]
    pub bugs: Vec<Bug>,
}

/// A [`BugSource`] backed by an in-memory export.
#[derive(Debug, Clone)]
pub struct FileSource {
    export: SourceExport,
}

impl FileSource {
    /// Loads an export from a JSON file.
    ///
    /// A missing or malformed file makes the source unavailable, and so
    /// does a bug numbered 0.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::SourceUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let export: SourceExport = serde_json::from_str(&content).map_err(|e| {
            Error::SourceUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;
        if export.bugs.iter().any(|bug| bug.id == 0) {
            return Err(Error::SourceUnavailable(format!(
                "cannot parse {}: bug number 0 is not valid",
                path.display()
            )));
        }
        tracing::debug!(
            project = %export.project,
            bugs = export.bugs.len(),
            "loaded bug export from {}",
            path.display()
        );
        Ok(FileSource { export })
    }

    pub fn from_export(export: SourceExport) -> Self {
        FileSource { export }
    }

    /// Bugs of `project`, or an error if this export covers another project.
    fn project_bugs(&self, project: &str) -> Result<&[Bug]> {
        if self.export.project != project {
            return Err(Error::SourceUnavailable(format!(
                "project '{}' is not in this export (it holds '{}')",
                project, self.export.project
            )));
        }
        Ok(&self.export.bugs)
    }
}

impl BugSource for FileSource {
    fn fetch_by_date_range(
        &self,
        project: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Bug>> {
        Ok(self
            .project_bugs(project)?
            .iter()
            .filter(|bug| bug.date_last_updated >= start && bug.date_last_updated <= end)
            .cloned()
            .collect())
    }

    fn fetch_by_subscriber(
        &self,
        project: &str,
        identity: &str,
        structural: bool,
    ) -> Result<Vec<Bug>> {
        let bugs = self.project_bugs(project)?;
        if structural {
            if !self.export.structural_subscribers.contains(identity) {
                return Ok(Vec::new());
            }
            return Ok(bugs.to_vec());
        }
        Ok(bugs
            .iter()
            .filter(|bug| bug.is_subscribed(identity))
            .cloned()
            .collect())
    }

    fn fetch_by_tag(&self, project: &str, tag: &str) -> Result<Vec<Bug>> {
        Ok(self
            .project_bugs(project)?
            .iter()
            .filter(|bug| bug.has_tag(tag))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
