mod common;

use common::TestFixture;
use predicates::prelude::*;
use std::fs;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn test_status_reports_running_countdown() {
    let fixture = TestFixture::new();
    fixture.create_doc("just started");

    let status = fixture.status_json();
    let remaining = status["remaining_ms"].as_i64().unwrap();
    assert!(remaining > 0);
    assert!(remaining <= 300_000);
    assert_eq!(status["lock_active"], true);
    assert_eq!(status["lock_state"], "locked");
    assert_eq!(status["mode"], "write");
    assert_eq!(status["documents"], 2);
}

#[test]
fn test_status_after_expiry_shows_unlocked() {
    let fixture = TestFixture::with_config(50, 20, 20);
    fixture.create_doc("short lived lock");
    sleep(Duration::from_millis(120));

    let status = fixture.status_json();
    assert_eq!(status["remaining_ms"], 0);
    assert_eq!(status["lock_active"], false);
    assert_eq!(status["lock_state"], "unlocked");
}

#[test]
fn test_countdown_runs_on_wall_clock_across_invocations() {
    let fixture = TestFixture::with_config(10_000, 500, 20);
    fixture.create_doc("persistent countdown");

    let first = fixture.status_json()["remaining_ms"].as_i64().unwrap();
    sleep(Duration::from_millis(300));
    let second = fixture.status_json()["remaining_ms"].as_i64().unwrap();

    assert!(second < first, "countdown did not advance: {} -> {}", first, second);
    assert!(second > 0);
}

#[test]
fn test_status_plain_output_mentions_lock() {
    let fixture = TestFixture::new();
    fixture.create_doc("plain status");

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("plain status"))
        .stdout(predicate::str::contains("remaining"));
}

#[test]
fn test_export_writes_document_collection() {
    let fixture = TestFixture::new();
    fixture.create_doc("for the archive");
    let out_path = fixture.data_dir().join("backup.json");

    fixture
        .command()
        .args(["export", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 documents"));

    let raw = fs::read_to_string(&out_path).unwrap();
    let docs: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let docs = docs.as_array().unwrap();
    assert_eq!(docs.len(), 2);
    // Exported records keep the storage schema's key names.
    assert!(docs[0].get("lockActive").is_some());
    assert!(docs[0].get("writeLockStarted").is_some());
    assert!(docs[0].get("msWrite").is_some());
}

#[test]
fn test_export_default_filename_is_dated() {
    let fixture = TestFixture::new();
    let cwd = fixture.data_dir().join("exports");
    fs::create_dir_all(&cwd).unwrap();

    fixture
        .command()
        .arg("export")
        .current_dir(&cwd)
        .assert()
        .success();

    let expected = format!(
        "draftlock-export-{}.json",
        chrono::Local::now().format("%Y%m%d")
    );
    assert!(cwd.join(expected).exists());
}

#[test]
fn test_no_subcommand_prints_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("draftlock"));
}
