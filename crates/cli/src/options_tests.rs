// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;
use yare::parameterized;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("ustriage").chain(args.iter().copied())).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A Tuesday.
fn today() -> NaiveDate {
    date("2019-05-14")
}

fn resolve(args: &[&str]) -> Result<TriageOptions> {
    TriageOptions::resolve(&cli(args), &Config::default(), today())
}

#[test]
fn defaults() {
    let options = resolve(&[]).unwrap();
    let expected = TriageOptions::new(DateRange::single(date("2019-05-13")));
    assert_eq!(options, expected);
}

#[test]
fn default_criteria_are_triage_then_tagged() {
    let options = resolve(&[]).unwrap();
    assert_eq!(
        options.criteria(),
        vec![
            Criterion::DateRange(DateRange::single(date("2019-05-13"))),
            Criterion::Tag("server-todo".to_string()),
        ]
    );
}

#[test]
fn subscribed_criterion_comes_last() {
    let options = resolve(&["--subscribed", "-b", "-n", "foo"]).unwrap();
    assert_eq!(
        options.criteria().last(),
        Some(&Criterion::Subscriber {
            identity: "foo".to_string(),
            structural: false,
        })
    );
}

#[parameterized(
    none = { None, None, "2019-05-13", "2019-05-13" },
    single = { Some("2016-09-10"), None, "2016-09-10", "2016-09-10" },
    range = { Some("2016-09-10"), Some("2016-09-12"), "2016-09-10", "2016-09-12" },
    monday = { Some("mon"), None, "2019-05-10", "2019-05-12" },
    tuesday = { Some("tue"), None, "2019-05-13", "2019-05-13" },
    wednesday = { Some("Wednesday"), None, "2019-05-07", "2019-05-07" },
)]
fn ranges(start: Option<&str>, end: Option<&str>, from: &str, to: &str) {
    let range = resolve_range(start, end, today()).unwrap();
    assert_eq!(range, DateRange::new(date(from), date(to)).unwrap());
}

#[test]
fn default_range_on_monday_covers_the_weekend() {
    let range = resolve_range(None, None, date("2019-05-13")).unwrap();
    assert_eq!(range, DateRange::new(date("2019-05-10"), date("2019-05-12")).unwrap());
}

#[parameterized(
    bad_date = { Some("2016-13-01"), None },
    end_before_start = { Some("2016-09-12"), Some("2016-09-10") },
    weekend = { Some("sat"), None },
    keyword_with_end = { Some("mon"), Some("2019-05-14") },
    garbage = { Some("yesterday"), None },
)]
fn invalid_ranges(start: Option<&str>, end: Option<&str>) {
    let err = resolve_range(start, end, today()).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {err}");
}

#[test]
fn dates_conflict_with_no_triage() {
    let err = resolve(&["--no-triage", "2016-09-10"]).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(ust_core::Error::ConflictingOptions(_))
    ));
}

#[test]
fn open_expired_conflicts_with_no_expiration() {
    let err = resolve(&["-e", "-O"]).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(ust_core::Error::ConflictingOptions(_))
    ));
}

#[test]
fn disabling_every_view_is_no_criteria() {
    let err = resolve(&["--no-triage", "--no-tagged"]).unwrap_err();
    assert!(matches!(err, Error::Core(ust_core::Error::NoCriteria)));
}

#[test]
fn no_triage_leaves_other_views() {
    let options = resolve(&["--no-triage", "--subscribed"]).unwrap();
    assert!(options.range.is_none());
    assert_eq!(options.criteria().len(), 2);
}

#[test]
fn flags_override_config() {
    let config = Config {
        project: Some("cloud-init".into()),
        lpname: Some("cloud-team".into()),
        tag: Some("cloud-todo".into()),
        expire_tagged: Some(10),
        expire: Some(20),
        recent_days: Some(2),
        ..Config::default()
    };
    let options = TriageOptions::resolve(
        &cli(&["--project", "ubuntu", "--tag", "server-next", "--expire", "90"]),
        &config,
        today(),
    )
    .unwrap();

    assert_eq!(options.project, "ubuntu");
    assert_eq!(options.lpname, "cloud-team");
    assert_eq!(options.tag, "server-next");
    assert_eq!(
        options.policy,
        Some(ExpirationPolicy {
            tag: "server-next".into(),
            days_tagged: 10,
            days_general: 90,
        })
    );
    assert_eq!(options.recent_days, 2);
}

#[test]
fn config_toggles_views_and_rendering() {
    let config = Config {
        show_tagged: Some(false),
        show_subscribed: Some(true),
        full_urls: Some(true),
        extended: Some(true),
        max_head_tail: Some(4),
        ..Config::default()
    };
    let options = TriageOptions::resolve(&cli(&[]), &config, today()).unwrap();

    assert!(!options.show_tagged);
    assert!(options.show_subscribed);
    assert_eq!(options.max_head_and_tail, Some(4));
    assert_eq!(
        options.style,
        Style {
            mode: Mode::Extended,
            links: LinkStyle::Full,
        }
    );
}

#[test]
fn no_expiration_drops_policy() {
    let options = resolve(&["-e"]).unwrap();
    assert!(options.policy.is_none());
}

#[test]
fn snapshot_and_browser_flags_pass_through() {
    let options = resolve(&["--save", "a.json", "--compare", "b.json", "-o", "-O"]).unwrap();
    assert_eq!(options.save, Some(PathBuf::from("a.json")));
    assert_eq!(options.compare, Some(PathBuf::from("b.json")));
    assert!(options.open);
    assert!(options.open_expired);
}

#[test]
fn source_comes_from_flag_then_config() {
    let config = Config {
        source: Some(PathBuf::from("/config/bugs.json")),
        ..Config::default()
    };
    assert_eq!(
        source_path(&cli(&["--source", "/flag/bugs.json"]), &config).unwrap(),
        PathBuf::from("/flag/bugs.json")
    );
    assert_eq!(
        source_path(&cli(&[]), &config).unwrap(),
        PathBuf::from("/config/bugs.json")
    );
    assert!(matches!(
        source_path(&cli(&[]), &Config::default()),
        Err(Error::NoSource)
    ));
}
