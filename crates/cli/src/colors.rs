// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY
//!
//! Report lines are never colored; they are meant to be pasted into
//! triage notes as-is.

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used by help output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}\x1b[0m")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize a help block of headers and `command    description` rows.
///
/// Lines ending in `:` become headers. In a row, the command part (up to the
/// first run of two or more spaces) is split into words: flags and the
/// program name are literals, everything else (dates, paths, keywords) is
/// context. Descriptions are left alone.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_block(text)
}

fn colorize_block(text: &str) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
            continue;
        }

        match find_description_start(trimmed) {
            Some(end) => {
                let (cmd, desc) = trimmed.split_at(end);
                lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
            }
            None => lines.push(line.to_string()),
        }
    }
    lines.join("\n")
}

/// Colorize the words of a command line.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .enumerate()
        .map(|(i, word)| {
            if word.is_empty() {
                String::new()
            } else if i == 0 || word.starts_with('-') {
                literal(word)
            } else {
                context(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (at the first run of 2+ spaces).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    if rest.trim().is_empty() {
        return None;
    }
    Some(start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
