// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for bug selection and report rendering.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ust_core::{Bug, DateRange, FileSource, FixedClock, SnapshotStore, SourceExport};
use ustrs::{run_triage, BrowserOpener, Services, TriageOptions};

struct NullStore;

impl SnapshotStore for NullStore {
    fn load(&self, _path: &Path) -> ust_core::Result<BTreeSet<u64>> {
        Ok((0..500).collect())
    }

    fn save(&self, _path: &Path, _ids: &BTreeSet<u64>) -> ust_core::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct NullBrowser(RefCell<usize>);

impl BrowserOpener for NullBrowser {
    fn open(&self, urls: &[String]) -> ustrs::Result<()> {
        *self.0.borrow_mut() += urls.len();
        Ok(())
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 9, 13, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// `n` bugs spread over the year before `now`, every third one tagged.
fn export(n: u64) -> FileSource {
    let bugs = (1..=n)
        .map(|id| {
            let updated = now() - Duration::hours((id * 7 % 8760) as i64);
            let bug = Bug::new(id, format!("Bug number {id} with a long-ish title"), updated);
            if id % 3 == 0 {
                bug.with_tag("server-todo")
            } else {
                bug
            }
        })
        .collect();
    FileSource::from_export(SourceExport {
        project: "ubuntu".to_string(),
        structural_subscribers: ["ubuntu-server".to_string()].into_iter().collect(),
        bugs,
    })
}

fn options() -> TriageOptions {
    let range = DateRange::new(
        now().date_naive() - Duration::days(3),
        now().date_naive() - Duration::days(1),
    )
    .expect("valid range");
    let mut options = TriageOptions::new(range);
    options.show_subscribed = true;
    options.max_head_and_tail = Some(10);
    options.compare = Some("previous.json".into());
    options
}

fn triage_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("triage_run");
    let clock = FixedClock(now());
    let options = options();

    for size in [100u64, 1_000, 10_000] {
        let source = export(size);
        let services = Services {
            source: &source,
            snapshots: &NullStore,
            browser: &NullBrowser::default(),
            clock: &clock,
        };
        group.bench_with_input(BenchmarkId::new("run_triage", size), &services, |b, s| {
            b.iter(|| run_triage(&options, s).expect("triage run"))
        });
    }
    group.finish();
}

criterion_group!(benches, triage_run);
criterion_main!(benches);
