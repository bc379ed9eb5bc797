// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary, isolated from the user's configuration and environment.
pub fn ustriage(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("ustriage");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("USTRIAGE_CONFIG")
        .env_remove("USTRIAGE_LOG")
        .env_remove("BROWSER")
        .env("NO_COLOR", "1");
    cmd
}

/// One bug as it appears in an export.
pub fn bug(id: u64, title: &str, updated: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "title": title,
        "status": "New",
        "importance": "High",
        "tags": tags,
        "date_created": "2015-01-01T00:00:00Z",
        "date_last_updated": updated,
    })
}

/// Writes an export for the default project and returns its path.
pub fn write_export(dir: &Path, name: &str, bugs: Vec<Value>) -> PathBuf {
    let export = json!({
        "project": "ubuntu",
        "structural_subscribers": ["ubuntu-server"],
        "bugs": bugs,
    });
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(&export).unwrap()).unwrap();
    path
}

/// The usual export: two bugs in the 2016-09-10..12 range, one tagged
/// backlog bug and one untagged backlog bug.
pub fn standard_export(dir: &Path) -> PathBuf {
    write_export(
        dir,
        "bugs.json",
        vec![
            bug(1, "Bug one", "2016-09-10T08:00:00Z", &[]),
            bug(2, "Bug two", "2016-09-12T23:59:59Z", &["server-todo"]),
            bug(3, "Bug three", "2016-08-01T00:00:00Z", &["server-todo"]),
            bug(4, "Bug four", "2016-01-01T00:00:00Z", &[]),
        ],
    )
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}
