// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use momentum::config::{read_from, write_to, Config, DEFAULT_API_BASE};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let cfg = read_from(&path).unwrap();
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert!(!cfg.logged_in());
}

#[test]
fn session_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let cfg = Config {
        api_base: "http://tracker.local/api".into(),
        access_token: Some("abc123".into()),
        username: Some("champ".into()),
    };
    write_to(&path, &cfg).unwrap();
    let loaded = read_from(&path).unwrap();
    assert_eq!(loaded.api_base, "http://tracker.local/api");
    assert_eq!(loaded.access_token.as_deref(), Some("abc123"));
    assert!(loaded.logged_in());
}

#[test]
fn garbage_on_disk_is_an_error_not_a_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(read_from(&path).is_err());
}
