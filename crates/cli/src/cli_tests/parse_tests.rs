// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("ustriage").chain(args.iter().copied())).unwrap()
}

fn parse_err(args: &[&str]) -> clap::Error {
    Cli::try_parse_from(std::iter::once("ustriage").chain(args.iter().copied())).unwrap_err()
}

#[test]
fn no_arguments_leaves_everything_unset() {
    let cli = parse(&[]);
    assert!(cli.start.is_none());
    assert!(cli.end.is_none());
    assert!(cli.project.is_none());
    assert!(!cli.bugsubscriber);
    assert!(!cli.modes.no_triage);
    assert!(!cli.modes.subscribed);
    assert!(!cli.expiration.no_expiration);
    assert!(!cli.output.open);
    assert!(cli.snapshot.save.is_none());
    assert!(!cli.debug);
}

#[test]
fn positional_dates() {
    let cli = parse(&["2016-09-10", "2016-09-12"]);
    assert_eq!(cli.start.as_deref(), Some("2016-09-10"));
    assert_eq!(cli.end.as_deref(), Some("2016-09-12"));
}

#[test]
fn keyword_is_accepted_as_start() {
    let cli = parse(&["mon"]);
    assert_eq!(cli.start.as_deref(), Some("mon"));
    assert!(cli.end.is_none());
}

#[test]
fn too_many_positionals_is_rejected() {
    let err = parse_err(&["2016-09-10", "2016-09-11", "2016-09-12"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn short_flags() {
    let cli = parse(&["-n", "foo-team", "-b", "-e", "-o", "-O", "-d"]);
    assert_eq!(cli.lpname.as_deref(), Some("foo-team"));
    assert!(cli.bugsubscriber);
    assert!(cli.expiration.no_expiration);
    assert!(cli.output.open);
    assert!(cli.output.open_expired);
    assert!(cli.debug);
}

#[test]
fn long_flags() {
    let cli = parse(&[
        "--project",
        "cloud-init",
        "--tag",
        "server-next",
        "--no-triage",
        "--no-tagged",
        "--subscribed",
        "--max-head-tail",
        "5",
        "--fullurls",
        "--extended",
        "--expire-tagged",
        "30",
        "--expire",
        "90",
        "--exempt-tag",
        "keep",
        "--recent-days",
        "3",
        "--save",
        "out.json",
        "--compare",
        "in.json",
        "--source",
        "bugs.json",
        "--config",
        "ustriage.toml",
    ]);

    assert_eq!(cli.project.as_deref(), Some("cloud-init"));
    assert_eq!(cli.modes.tag.as_deref(), Some("server-next"));
    assert!(cli.modes.no_triage);
    assert!(cli.modes.no_tagged);
    assert!(cli.modes.subscribed);
    assert_eq!(cli.modes.max_head_tail, Some(5));
    assert!(cli.output.fullurls);
    assert!(cli.output.extended);
    assert_eq!(cli.expiration.expire_tagged, Some(30));
    assert_eq!(cli.expiration.expire, Some(90));
    assert_eq!(cli.expiration.exempt_tag.as_deref(), Some("keep"));
    assert_eq!(cli.snapshot.recent_days, Some(3));
    assert_eq!(cli.snapshot.save.unwrap().to_str(), Some("out.json"));
    assert_eq!(cli.snapshot.compare.unwrap().to_str(), Some("in.json"));
    assert_eq!(cli.source.unwrap().to_str(), Some("bugs.json"));
    assert_eq!(cli.config.unwrap().to_str(), Some("ustriage.toml"));
}

#[parameterized(
    zero_head_tail = { &["--max-head-tail", "0"] },
    negative_expire = { &["--expire=-1"] },
    text_recent_days = { &["--recent-days", "week"] },
    empty_tag = { &["--tag", ""] },
    blank_lpname = { &["--lpname", "  "] },
)]
fn invalid_values_are_rejected(args: &[&str]) {
    let err = parse_err(args);
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn version_flag_aliases() {
    for flag in ["-v", "-V", "--version"] {
        assert_eq!(parse_err(&[flag]).kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
