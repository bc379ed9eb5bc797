// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of command-line flags and configuration into one set of
//! options for a triage run.
//!
//! Flags win over the config file, which wins over built-in defaults.
//! Everything that can be rejected without talking to the bug source is
//! rejected here.

use std::path::PathBuf;

use chrono::NaiveDate;
use ust_core::classify::{DEFAULT_DAYS_GENERAL, DEFAULT_DAYS_TAGGED, DEFAULT_TAG};
use ust_core::dates::{auto_date_range, default_range, parse_weekday};
use ust_core::diff::DEFAULT_RECENT_DAYS;
use ust_core::{Criterion, DateRange, ExpirationPolicy};

use crate::cli::Cli;
use crate::config::Config;
use crate::display::{LinkStyle, Mode, Style};
use crate::error::{Error, Result};

pub const DEFAULT_PROJECT: &str = "ubuntu";
pub const DEFAULT_LPNAME: &str = "ubuntu-server";
pub const DEFAULT_EXEMPT_TAG: &str = "bot-stop-nagging";

/// Everything a triage run needs to know, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageOptions {
    pub project: String,
    /// Subscriber identity for the subscribed view and the `*` flag.
    pub lpname: String,
    /// Match structural subscriptions (the default) rather than direct ones.
    pub structural: bool,
    /// `None` when the triage view is disabled.
    pub range: Option<DateRange>,
    pub tag: String,
    pub show_tagged: bool,
    pub show_subscribed: bool,
    pub max_head_and_tail: Option<usize>,
    /// `None` when expiration reporting is disabled.
    pub policy: Option<ExpirationPolicy>,
    pub exempt_tag: String,
    pub recent_days: i64,
    pub style: Style,
    pub open: bool,
    pub open_expired: bool,
    pub save: Option<PathBuf>,
    pub compare: Option<PathBuf>,
}

impl TriageOptions {
    /// Built-in defaults for a run over `range`.
    pub fn new(range: DateRange) -> Self {
        TriageOptions {
            project: DEFAULT_PROJECT.to_string(),
            lpname: DEFAULT_LPNAME.to_string(),
            structural: true,
            range: Some(range),
            tag: DEFAULT_TAG.to_string(),
            show_tagged: true,
            show_subscribed: false,
            max_head_and_tail: None,
            policy: Some(ExpirationPolicy::default()),
            exempt_tag: DEFAULT_EXEMPT_TAG.to_string(),
            recent_days: DEFAULT_RECENT_DAYS,
            style: Style::default(),
            open: false,
            open_expired: false,
            save: None,
            compare: None,
        }
    }

    /// Merges flags over configuration. `today` anchors weekday keywords
    /// and the default range.
    pub fn resolve(cli: &Cli, config: &Config, today: NaiveDate) -> Result<Self> {
        let show_triage = !cli.modes.no_triage;
        let show_tagged = !cli.modes.no_tagged && config.show_tagged.unwrap_or(true);
        let show_subscribed = cli.modes.subscribed || config.show_subscribed.unwrap_or(false);

        if !show_triage && cli.start.is_some() {
            return Err(conflict("dates cannot be combined with --no-triage"));
        }
        if !(show_triage || show_tagged || show_subscribed) {
            return Err(ust_core::Error::NoCriteria.into());
        }

        let range = if show_triage {
            Some(resolve_range(cli.start.as_deref(), cli.end.as_deref(), today)?)
        } else {
            None
        };

        let tag = pick(&cli.modes.tag, &config.tag, DEFAULT_TAG);
        let policy = if cli.expiration.no_expiration {
            None
        } else {
            Some(ExpirationPolicy {
                tag: tag.clone(),
                days_tagged: cli
                    .expiration
                    .expire_tagged
                    .or(config.expire_tagged)
                    .unwrap_or(DEFAULT_DAYS_TAGGED),
                days_general: cli
                    .expiration
                    .expire
                    .or(config.expire)
                    .unwrap_or(DEFAULT_DAYS_GENERAL),
            })
        };
        if policy.is_none() && cli.output.open_expired {
            return Err(conflict("--open-expired cannot be combined with --no-expiration"));
        }

        let full_urls = cli.output.fullurls || config.full_urls.unwrap_or(false);
        let extended = cli.output.extended || config.extended.unwrap_or(false);

        Ok(TriageOptions {
            project: pick(&cli.project, &config.project, DEFAULT_PROJECT),
            lpname: pick(&cli.lpname, &config.lpname, DEFAULT_LPNAME),
            structural: !cli.bugsubscriber,
            range,
            tag,
            show_tagged,
            show_subscribed,
            max_head_and_tail: cli
                .modes
                .max_head_tail
                .or(config.max_head_tail)
                .map(|n| n as usize),
            policy,
            exempt_tag: pick(&cli.expiration.exempt_tag, &config.exempt_tag, DEFAULT_EXEMPT_TAG),
            recent_days: cli
                .snapshot
                .recent_days
                .or(config.recent_days)
                .unwrap_or(DEFAULT_RECENT_DAYS),
            style: Style {
                mode: if extended { Mode::Extended } else { Mode::Compact },
                links: if full_urls { LinkStyle::Full } else { LinkStyle::Short },
            },
            open: cli.output.open,
            open_expired: cli.output.open_expired,
            save: cli.snapshot.save.clone(),
            compare: cli.snapshot.compare.clone(),
        })
    }

    /// The selection criteria of the enabled views, in report order.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::with_capacity(3);
        if let Some(range) = self.range {
            criteria.push(Criterion::DateRange(range));
        }
        if self.show_tagged {
            criteria.push(Criterion::Tag(self.tag.clone()));
        }
        if self.show_subscribed {
            criteria.push(Criterion::Subscriber {
                identity: self.lpname.clone(),
                structural: self.structural,
            });
        }
        criteria
    }
}

/// Turns the positional arguments into a date range.
///
/// No dates gives the default range; START alone is a single day, or a
/// triage session when it names a weekday; START and END form an inclusive
/// range.
pub fn resolve_range(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Result<DateRange> {
    let range = match (start, end) {
        (None, _) => default_range(today),
        (Some(keyword), end) if parse_weekday(keyword).is_ok() => {
            if end.is_some() {
                return Err(ust_core::Error::KeywordWithEndDate(keyword.to_string()).into());
            }
            auto_date_range(keyword, today)?
        }
        (Some(start), end) => DateRange::parse(start, end)?,
    };
    Ok(range)
}

/// The bug export to read, from the flag or the config file.
pub fn source_path(cli: &Cli, config: &Config) -> Result<PathBuf> {
    cli.source
        .clone()
        .or_else(|| config.source.clone())
        .ok_or(Error::NoSource)
}

fn pick(flag: &Option<String>, config: &Option<String>, default: &str) -> String {
    flag.clone()
        .or_else(|| config.clone())
        .unwrap_or_else(|| default.to_string())
}

fn conflict(message: &str) -> Error {
    ust_core::Error::ConflictingOptions(message.to_string()).into()
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
