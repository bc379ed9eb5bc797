// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template. Report modes are listed before the options.
pub fn template() -> String {
    "{about-with-newline}
{usage-heading} {usage}

{before-help}
{all-args}{after-help}"
        .to_string()
}

/// Report modes shown before the options in main help.
pub fn modes() -> String {
    format!(
        "\
{header}
  {triage}      Bugs last updated in the date range (on by default)
  {tagged}      Bugs carrying the triage tag (on by default)
  {subscribed}  Every bug the team is subscribed to (--subscribed)
  {expired}     Subscribed bugs nobody touched in a while (on by default)
",
        header = colors::header("Report Modes:"),
        triage = colors::literal("triage"),
        tagged = colors::literal("tagged"),
        subscribed = colors::literal("subscribed"),
        expired = colors::literal("expired"),
    )
}

/// Examples shown after the options in main help.
pub fn examples() -> String {
    colors::examples(
        "\
Examples:
  ustriage                          Yesterday, or the weekend on Mondays
  ustriage mon                      Monday triage (Friday to Sunday)
  ustriage 2016-09-10               Bugs updated on one day
  ustriage 2016-09-10 2016-09-12    Bugs updated in an inclusive range
  ustriage --subscribed -e          Team backlog without expiration
  ustriage --save today.json        Remember this run's bugs
  ustriage --compare today.json     Flag bugs new since that run",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
