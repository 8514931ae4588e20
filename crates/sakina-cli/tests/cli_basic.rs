//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sakina"))
        .args(args)
        .env("SAKINA_DATA_DIR", data_dir)
        .env_remove("SAKINA_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&run_ok(data_dir, args)).expect("Failed to parse JSON output")
}

#[test]
fn test_verse_is_stable_within_a_run_day() {
    let dir = tempfile::tempdir().unwrap();
    let first = run_json(dir.path(), &["today", "verse", "--json"]);
    let second = run_json(dir.path(), &["today", "verse", "--json"]);
    assert_eq!(first["id"], second["id"]);
    assert!(first["arabic"].is_string());
}

#[test]
fn test_today_all() {
    let dir = tempfile::tempdir().unwrap();
    let summary = run_json(dir.path(), &["today", "all", "--json"]);
    for field in ["verse", "supplication", "remembrance", "prompt"] {
        assert!(!summary[field].is_null(), "missing {field}");
    }
    assert!(dir.path().join("sakina.db").exists());
}

#[test]
fn test_category_filter() {
    let dir = tempfile::tempdir().unwrap();
    let verse = run_json(dir.path(), &["today", "verse", "--category", "patience", "--json"]);
    assert_eq!(verse["category"], "patience");

    let dua = run_json(dir.path(), &["today", "dua", "--category", "sleep", "--json"]);
    assert_eq!(dua["category"], "sleep");
}

#[test]
fn test_unknown_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["today", "verse", "--category", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_empty_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["today", "verse", "--category", "fear"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_mood_check() {
    let dir = tempfile::tempdir().unwrap();
    let content = run_json(dir.path(), &["mood", "check", "sad", "--json"]);
    assert_eq!(content["mood"], "sad");
    assert!(content["verse"]["id"].is_string());
    assert!(content["supplication"]["id"].is_string());

    let list = run_ok(dir.path(), &["mood", "list"]);
    assert!(list.contains("peaceful"));
}

#[test]
fn test_quota_free_tier_limit() {
    let dir = tempfile::tempdir().unwrap();
    for _ in 0..3 {
        run_ok(dir.path(), &["quota", "use"]);
    }
    let (_, stderr, code) = run_cli(dir.path(), &["quota", "use"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Daily limit of 3 reached"));

    let status = run_json(dir.path(), &["quota", "status", "--json"]);
    assert_eq!(status["count"], 3);
    assert_eq!(status["remaining"]["remaining"], 0);
}

#[test]
fn test_quota_premium_is_unlimited() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["config", "set", "quota.premium", "true"]);
    for _ in 0..5 {
        run_ok(dir.path(), &["quota", "use"]);
    }
    let status = run_json(dir.path(), &["quota", "status", "--json"]);
    assert_eq!(status["remaining"], "unlimited");
}

#[test]
fn test_journal_flow() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(run_ok(dir.path(), &["journal", "today"]).trim(), "no");

    run_ok(dir.path(), &["journal", "add", "I waited instead of snapping"]);
    assert_eq!(run_ok(dir.path(), &["journal", "today"]).trim(), "yes");

    let entries = run_json(dir.path(), &["journal", "list", "--json"]);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["content"], "I waited instead of snapping");

    let (_, _, code) = run_cli(dir.path(), &["journal", "add", "   "]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(run_ok(dir.path(), &["config", "get", "rotation.window_size"]).trim(), "5");

    run_ok(dir.path(), &["config", "set", "rotation.window_size", "7"]);
    assert_eq!(run_ok(dir.path(), &["config", "get", "rotation.window_size"]).trim(), "7");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "rotation.window_size", "0"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);

    run_ok(dir.path(), &["config", "reset"]);
    assert!(run_ok(dir.path(), &["config", "list"]).contains("window_size = 5"));
}

#[test]
fn test_day() {
    let dir = tempfile::tempdir().unwrap();
    let day = run_json(dir.path(), &["day", "--json"]);
    let ordinal = day["dayOrdinal"].as_i64().unwrap();
    assert!((1..=366).contains(&ordinal));
    assert_eq!(day["dateKey"].as_str().unwrap().len(), 10);
}
