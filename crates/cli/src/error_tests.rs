// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn core_errors_keep_their_message() {
    let core = ust_core::Error::InvalidDate("2016-13-01".to_string());
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn config_not_found_names_the_path() {
    let err = Error::ConfigNotFound(PathBuf::from("/etc/ustriage.toml"));
    assert_eq!(err.to_string(), "config file not found: /etc/ustriage.toml");
}

#[test]
fn no_source_has_hint() {
    let msg = Error::NoSource.to_string();
    assert!(msg.contains("no bug source configured"));
    assert!(msg.contains("hint: pass --source"));
}

#[test]
fn invalid_argument_classification() {
    assert!(Error::from(ust_core::Error::NoCriteria).is_invalid_argument());
    assert!(Error::NoSource.is_invalid_argument());
    assert!(!Error::from(ust_core::Error::SourceUnavailable("down".into())).is_invalid_argument());
    assert!(!Error::Config("bad".into()).is_invalid_argument());
    assert!(!Error::Browser("no xdg-open".into()).is_invalid_argument());
}
