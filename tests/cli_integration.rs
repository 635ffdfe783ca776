//! Integration tests for the `tk` CLI.
//!
//! Each test creates a temp store directory, runs `tk` as a subprocess
//! against it, and verifies stdout and/or the persisted payload.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `tk` binary.
fn tk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tk");
    path
}

/// Run `tk -C <store>` with the given args, returning (stdout, stderr, success).
fn run_tk(store: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tk_bin())
        .arg("-C")
        .arg(store)
        .args(args)
        .output()
        .expect("failed to run tk");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn temp_store() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn add_and_list() {
    let store = temp_store();
    let (out, _, ok) = run_tk(store.path(), &["add", "buy", "milk"]);
    assert!(ok);
    assert_eq!(out.trim(), "added 1");

    let (out, _, ok) = run_tk(store.path(), &["add", "call mom"]);
    assert!(ok);
    assert_eq!(out.trim(), "added 2");

    let (out, _, ok) = run_tk(store.path(), &["list"]);
    assert!(ok);
    assert!(out.contains("  1 [ ] buy milk"));
    assert!(out.contains("  2 [ ] call mom"));
    assert!(out.contains("2 items left"));

    // The payload on disk is the full sequence under the single items key
    let payload = fs::read_to_string(store.path().join("items.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["key"], 1);
    assert_eq!(parsed[0]["text"], "buy milk");
    assert_eq!(parsed[0]["complete"], false);
}

#[test]
fn empty_add_is_silently_ignored() {
    let store = temp_store();
    let (out, _, ok) = run_tk(store.path(), &["add", ""]);
    assert!(ok);
    assert_eq!(out.trim(), "");

    let (out, _, ok) = run_tk(store.path(), &["add", "   "]);
    assert!(ok);
    assert_eq!(out.trim(), "");

    let (out, _, _) = run_tk(store.path(), &["list"]);
    assert!(out.contains("nothing to do"));
}

#[test]
fn done_and_filters() {
    let store = temp_store();
    run_tk(store.path(), &["add", "one"]);
    run_tk(store.path(), &["add", "two"]);

    let (out, _, ok) = run_tk(store.path(), &["done", "1"]);
    assert!(ok);
    assert_eq!(out.trim(), "done 1");

    let (out, _, _) = run_tk(store.path(), &["list", "--filter", "active"]);
    assert!(out.contains("two"));
    assert!(!out.contains("one\n"));

    let (out, _, _) = run_tk(store.path(), &["list", "--filter", "completed"]);
    assert!(out.contains("  1 [x] one"));
    assert!(!out.contains("two"));

    let (out, _, _) = run_tk(store.path(), &["count"]);
    assert_eq!(out.trim(), "1");

    let (out, _, ok) = run_tk(store.path(), &["undone", "1"]);
    assert!(ok);
    assert_eq!(out.trim(), "undone 1");
    let (out, _, _) = run_tk(store.path(), &["count"]);
    assert_eq!(out.trim(), "2");
}

#[test]
fn unknown_key_is_an_error() {
    let store = temp_store();
    run_tk(store.path(), &["add", "only"]);

    let (_, err, ok) = run_tk(store.path(), &["done", "42"]);
    assert!(!ok);
    assert!(err.contains("no item with key 42"));

    let (_, _, ok) = run_tk(store.path(), &["rm", "42"]);
    assert!(!ok);
}

#[test]
fn edit_replaces_text_only() {
    let store = temp_store();
    run_tk(store.path(), &["add", "one"]);
    run_tk(store.path(), &["add", "two"]);
    run_tk(store.path(), &["done", "2"]);

    let (out, _, ok) = run_tk(store.path(), &["edit", "2", "two", "revised"]);
    assert!(ok);
    assert_eq!(out.trim(), "edited 2");

    let (out, _, _) = run_tk(store.path(), &["list"]);
    assert!(out.contains("  2 [x] two revised"));
    assert!(out.contains("  1 [ ] one"));
}

#[test]
fn rm_removes_exactly_one() {
    let store = temp_store();
    run_tk(store.path(), &["add", "one"]);
    run_tk(store.path(), &["add", "two"]);
    run_tk(store.path(), &["add", "three"]);

    let (out, _, ok) = run_tk(store.path(), &["rm", "2"]);
    assert!(ok);
    assert_eq!(out.trim(), "removed 2");

    let (out, _, _) = run_tk(store.path(), &["list"]);
    assert!(out.contains("one"));
    assert!(out.contains("three"));
    assert!(!out.contains("two"));
}

#[test]
fn clear_drops_completed_items() {
    let store = temp_store();
    run_tk(store.path(), &["add", "keep"]);
    run_tk(store.path(), &["add", "drop"]);
    run_tk(store.path(), &["done", "2"]);

    let (out, _, ok) = run_tk(store.path(), &["clear"]);
    assert!(ok);
    assert_eq!(out.trim(), "cleared 1 completed");

    let (out, _, _) = run_tk(store.path(), &["list"]);
    assert!(out.contains("keep"));
    assert!(!out.contains("drop"));
}

#[test]
fn all_toggles_both_ways() {
    let store = temp_store();
    run_tk(store.path(), &["add", "one"]);
    run_tk(store.path(), &["add", "two"]);
    run_tk(store.path(), &["done", "1"]);

    let (out, _, _) = run_tk(store.path(), &["all"]);
    assert_eq!(out.trim(), "completed 2 items");
    let (out, _, _) = run_tk(store.path(), &["count"]);
    assert_eq!(out.trim(), "0");

    // Everything is complete, so the next toggle reopens
    let (out, _, _) = run_tk(store.path(), &["all"]);
    assert_eq!(out.trim(), "reopened 2 items");
    let (out, _, _) = run_tk(store.path(), &["count"]);
    assert_eq!(out.trim(), "2");
}

#[test]
fn json_output() {
    let store = temp_store();
    run_tk(store.path(), &["add", "one"]);
    run_tk(store.path(), &["add", "two"]);
    run_tk(store.path(), &["done", "1"]);

    let (out, _, ok) = run_tk(store.path(), &["list", "--filter", "completed", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["filter"], "completed");
    assert_eq!(parsed["active"], 1);
    assert_eq!(parsed["items"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["items"][0]["key"], 1);
    assert_eq!(parsed["items"][0]["complete"], true);

    let (out, _, _) = run_tk(store.path(), &["count", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["active"], 1);
    assert_eq!(parsed["completed"], 1);
    assert_eq!(parsed["total"], 2);
}

#[test]
fn unknown_filter_is_an_error() {
    let store = temp_store();
    let (_, err, ok) = run_tk(store.path(), &["list", "--filter", "bogus"]);
    assert!(!ok);
    assert!(err.contains("unknown filter"));
}

#[test]
fn corrupt_payload_starts_fresh_and_is_recovered() {
    let store = temp_store();
    fs::write(store.path().join("items.json"), "not json {{{").unwrap();

    let (out, _, ok) = run_tk(store.path(), &["list"]);
    assert!(ok);
    assert!(out.contains("nothing to do"));

    // The corrupt payload was preserved, not silently destroyed
    let log = fs::read_to_string(store.path().join(".recovery.log")).unwrap();
    assert!(log.contains("not json {{{"));

    // And the store is usable again
    let (out, _, ok) = run_tk(store.path(), &["add", "fresh start"]);
    assert!(ok);
    assert_eq!(out.trim(), "added 1");
}

#[test]
fn path_prints_the_store_dir() {
    let store = temp_store();
    let (out, _, ok) = run_tk(store.path(), &["path"]);
    assert!(ok);
    assert_eq!(out.trim(), store.path().to_string_lossy());
}
