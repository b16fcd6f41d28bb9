//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated HOME so
//! the real data directory is never touched.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with HOME pointed at `home` and return output.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "docket-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("DOCKET_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_event_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &[
            "event",
            "add",
            "Status conference",
            "--start",
            "2030-06-01T10:00:00Z",
            "--end",
            "2030-06-01T11:00:00Z",
            "--category",
            "court",
            "--id",
            "sc1",
        ],
    );
    assert_eq!(code, 0, "event add failed: {stderr}");
    assert!(stdout.contains("Event created: sc1"));

    let (stdout, _, code) = run_cli(home.path(), &["event", "list", "--json"]);
    assert_eq!(code, 0);
    let events: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["id"], "sc1");
    assert_eq!(events[0]["category"], "court");
}

#[test]
fn test_conflicting_add_requires_force() {
    let home = tempfile::tempdir().unwrap();
    run_cli(
        home.path(),
        &[
            "event", "add", "Existing", "--start", "2030-06-01T10:30:00Z", "--end",
            "2030-06-01T11:30:00Z", "--id", "e1",
        ],
    );

    let (_, stderr, code) = run_cli(
        home.path(),
        &[
            "event", "add", "Overlapping", "--start", "2030-06-01T10:00:00Z", "--end",
            "2030-06-01T11:00:00Z", "--id", "e2",
        ],
    );
    assert_ne!(code, 0, "overlapping add should be rejected without --force");
    assert!(stderr.contains("conflict"));

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &[
            "event", "add", "Overlapping", "--start", "2030-06-01T10:00:00Z", "--end",
            "2030-06-01T11:00:00Z", "--id", "e2", "--force",
        ],
    );
    assert_eq!(code, 0, "forced add failed: {stderr}");
    assert!(stdout.contains("Event created: e2"));

    // Touching boundary needs no force.
    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "event", "add", "Adjacent", "--start", "2030-06-01T11:30:00Z", "--end",
            "2030-06-01T12:00:00Z", "--id", "e3",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Event created: e3"));
}

#[test]
fn test_recurring_add_expands() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "event",
            "add",
            "Weekly review",
            "--start",
            "2030-06-03T09:00:00Z",
            "--end",
            "2030-06-03T09:30:00Z",
            "--recurrence",
            "weekly",
            "--id",
            "wr",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("52 occurrence(s)"));

    let (stdout, _, _) = run_cli(home.path(), &["event", "list", "--json"]);
    let events: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 52);
    assert_eq!(events[1]["id"], "wr_1");
    assert_eq!(events[1]["original_event_id"], "wr");
}

#[test]
fn test_timeline_and_deadline_flow() {
    let home = tempfile::tempdir().unwrap();
    run_cli(
        home.path(),
        &[
            "event", "add", "Hearing", "--start", "2030-06-10T10:00:00Z", "--end",
            "2030-06-10T11:00:00Z", "--case-id", "case-1", "--case-name", "Acme v. Widgets",
            "--id", "h1",
        ],
    );
    run_cli(
        home.path(),
        &[
            "deadline", "add", "Answer due", "--due", "2030-06-08T17:00:00Z", "--case-id",
            "case-1", "--id", "d1",
        ],
    );
    // An unlinked event stays out of the case timeline.
    run_cli(
        home.path(),
        &[
            "event", "add", "Unlinked", "--start", "2030-06-09T10:00:00Z", "--id", "u1",
        ],
    );

    let (stdout, _, code) = run_cli(home.path(), &["timeline", "show", "--json"]);
    assert_eq!(code, 0);
    let timeline: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = timeline.as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Deadline due before the hearing sorts first.
    assert_eq!(items[0]["type"], "deadline");
    assert_eq!(items[0]["id"], "d1");
    assert_eq!(items[1]["type"], "event");
}

#[test]
fn test_notify_poll_and_read() {
    let home = tempfile::tempdir().unwrap();
    // A deadline far in the future: poll finds nothing.
    run_cli(
        home.path(),
        &[
            "deadline", "add", "Far deadline", "--due", "2099-01-01T00:00:00Z", "--id", "far",
        ],
    );
    let (stdout, _, code) = run_cli(home.path(), &["notify", "poll"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Nothing due"));

    let (stdout, _, code) = run_cli(home.path(), &["notify", "list", "--json"]);
    assert_eq!(code, 0);
    let notifications: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(notifications.as_array().unwrap().is_empty());
}

#[test]
fn test_config_get_set_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["config", "get", "notifications.reminder_lead_minutes"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");

    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "notifications.reminder_lead_minutes", "45"],
    );
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(
        home.path(),
        &["config", "get", "notifications.reminder_lead_minutes"],
    );
    assert_eq!(stdout.trim(), "45");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "notifications.bogus"]);
    assert_ne!(code, 0);
}

#[test]
fn test_move_unknown_event_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["event", "move", "ghost", "--start", "2030-06-01T10:00:00Z"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("ghost"));
}
