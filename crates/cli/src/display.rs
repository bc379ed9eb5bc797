// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! A bug line starts with a link padded to a fixed column and a four
//! character flag column, followed by the title:
//!
//! ```text
//! LP: #1618872 - *N   - mysql-server fails to start after upgrade
//! ```
//!
//! Extended lines add the last update (`dd.mm.yy`), importance and assignee
//! between the flags and the title.

use std::collections::BTreeSet;

use ust_core::{Annotated, Importance};

const SHORTLINK_ROOT: &str = "LP: #";
const LONG_URL_ROOT: &str = "https://pad.lv/";
/// Bug numbers are padded to this many digits' worth of columns.
const BUG_NUMBER_WIDTH: usize = 7;
const TITLE_WIDTH: usize = 60;
const ASSIGNEE_WIDTH: usize = 9;
const STATUS_WIDTH: usize = 13;
const IMPORTANCE_WIDTH: usize = 10;
/// `=> ` plus the truncated assignee, with room to spare.
const ASSIGNEE_COLUMN_WIDTH: usize = 13;

/// How bug links are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStyle {
    /// `LP: #NNNNNNN`, which terminals autolink.
    #[default]
    Short,
    /// `https://pad.lv/NNNNNNN`.
    Full,
}

impl LinkStyle {
    pub fn link(&self, id: u64) -> String {
        match self {
            LinkStyle::Short => format!("{SHORTLINK_ROOT}{id}"),
            LinkStyle::Full => url(id),
        }
    }

    fn width(&self) -> usize {
        let root = match self {
            LinkStyle::Short => SHORTLINK_ROOT,
            LinkStyle::Full => LONG_URL_ROOT,
        };
        root.len() + BUG_NUMBER_WIDTH
    }
}

/// Amount of detail per bug line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Compact,
    Extended,
}

/// Presentation choices shared by every line of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub mode: Mode,
    pub links: LinkStyle,
}

/// Full URL of a bug, whatever the link style.
pub fn url(id: u64) -> String {
    format!("{LONG_URL_ROOT}{id}")
}

/// Cuts `text` to `length` characters, ending in `…` when something was cut.
pub fn truncate_string(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(length.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// The four flag characters: subscribed, new, recently updated, expired.
pub fn flags(bug: &Annotated) -> String {
    let flag = |on: bool, c: char| if on { c } else { ' ' };
    [
        flag(bug.subscribed, '*'),
        flag(bug.is_new(), 'N'),
        flag(bug.recent, 'U'),
        flag(bug.is_expired(), 'E'),
    ]
    .iter()
    .collect()
}

fn importance_label(importance: Option<Importance>) -> &'static str {
    importance.map_or("", |i| i.as_str())
}

fn assignee_label(assignee: Option<&str>) -> String {
    assignee.map_or_else(String::new, |a| {
        format!("=> {}", truncate_string(a, ASSIGNEE_WIDTH))
    })
}

/// Formats one bug line.
pub fn format_bug_line(bug: &Annotated, style: &Style) -> String {
    let link = style.links.link(bug.bug.id);
    let width = style.links.width();
    let flags = flags(bug);
    let title = truncate_string(&bug.bug.title, TITLE_WIDTH);

    match style.mode {
        Mode::Compact => format!("{link:<width$} - {flags} - {title}"),
        Mode::Extended => format!(
            "{link:<width$} - {flags} {status:<sw$} {date:>8} {importance:<iw$} {assignee:<aw$} - {title}",
            status = bug.bug.status.as_str(),
            date = bug.bug.date_last_updated.format("%d.%m.%y"),
            importance = importance_label(bug.bug.importance),
            assignee = assignee_label(bug.bug.assignee.as_deref()),
            sw = STATUS_WIDTH,
            iw = IMPORTANCE_WIDTH,
            aw = ASSIGNEE_COLUMN_WIDTH,
        ),
    }
}

/// Splits `items` into the first `n` and last `n` entries when there are
/// more than `2n`, returning the number of entries skipped in between.
pub fn head_and_tail<T>(items: &[T], n: usize) -> Option<(&[T], usize, &[T])> {
    let len = items.len();
    if len <= n.saturating_mul(2) {
        return None;
    }
    Some((&items[..n], len - 2 * n, &items[len - n..]))
}

/// Marker line standing in for truncated entries.
pub fn omitted_marker(count: usize) -> String {
    format!("... {count} omitted ...")
}

/// Formats bug lines in order, optionally keeping only the head and tail.
pub fn format_bugs(bugs: &[Annotated], style: &Style, max_head_and_tail: Option<usize>) -> Vec<String> {
    let render = |slice: &[Annotated]| -> Vec<String> {
        slice.iter().map(|bug| format_bug_line(bug, style)).collect()
    };

    match max_head_and_tail.and_then(|n| head_and_tail(bugs, n)) {
        Some((head, omitted, tail)) => {
            let mut lines = render(head);
            lines.push(omitted_marker(omitted));
            lines.extend(render(tail));
            lines
        }
        None => render(bugs),
    }
}

/// "1 bug", "3 bugs".
pub fn bug_count(n: usize) -> String {
    if n == 1 {
        "1 bug".to_string()
    } else {
        format!("{n} bugs")
    }
}

/// Explains the flag column.
pub fn legend(subscriber: &str, recent_days: i64) -> String {
    format!(
        "Flags: '*' {subscriber} is directly subscribed, 'N' new since snapshot, \
         'U' updated in the last {recent_days} days, 'E' expired"
    )
}

/// One titled block of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub bugs: Vec<Annotated>,
    /// Truncation applied when rendering; the header still counts every bug.
    pub max_head_and_tail: Option<usize>,
}

impl Section {
    pub fn new(title: impl Into<String>, bugs: Vec<Annotated>) -> Self {
        Section {
            title: title.into(),
            bugs,
            max_head_and_tail: None,
        }
    }

    pub fn truncated(mut self, max_head_and_tail: Option<usize>) -> Self {
        self.max_head_and_tail = max_head_and_tail;
        self
    }

    pub fn render(&self, style: &Style) -> Vec<String> {
        let mut lines = vec![format!("{}: {}", self.title, bug_count(self.bugs.len()))];
        if self.bugs.is_empty() {
            lines.push("(none)".to_string());
        } else {
            lines.extend(format_bugs(&self.bugs, style, self.max_head_and_tail));
        }
        lines
    }
}

/// A complete report, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub legend: String,
    pub sections: Vec<Section>,
    /// Bug numbers of the compared snapshot that are no longer selected.
    /// `None` when no snapshot was compared.
    pub gone: Option<BTreeSet<u64>>,
}

impl Report {
    /// Renders the report. Blocks are separated by one blank line.
    pub fn render(&self, style: &Style) -> Vec<String> {
        let mut blocks = vec![vec![self.legend.clone()]];
        blocks.extend(self.sections.iter().map(|section| section.render(style)));
        if let Some(gone) = &self.gone {
            blocks.push(format_gone(gone, style));
        }
        blocks.join(&String::new())
    }
}

/// The "gone since snapshot" block: one link per bug number, ascending.
pub fn format_gone(ids: &BTreeSet<u64>, style: &Style) -> Vec<String> {
    let mut lines = vec![format!("Bugs gone since snapshot: {}", bug_count(ids.len()))];
    if ids.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(ids.iter().map(|&id| style.links.link(id)));
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
