//! Integration tests for `ideaboard project ...`.

mod common;

use common::{stdout_line, TestWorkspace};
use predicates::prelude::*;

#[test]
fn test_create_makes_project_current_and_persists_it() {
    let ws = TestWorkspace::new();
    let id = ws.create_project("Habit tracker");

    let snapshot = ws.snapshot();
    assert_eq!(snapshot["version"], 1);
    assert_eq!(snapshot["currentProjectId"], id.as_str());
    assert_eq!(snapshot["projects"][0]["title"], "Habit tracker");

    ws.cmd()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit tracker"))
        .stdout(predicate::str::contains(id.as_str()));
}

#[test]
fn test_create_rejects_blank_title() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["project", "create", "--title", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be blank"));

    assert!(!ws.path().exists());
}

#[test]
fn test_list_json_marks_current_project() {
    let ws = TestWorkspace::new();
    ws.create_project("First");
    let second = ws.create_project("Second");

    let output = ws
        .cmd()
        .args(["--json", "project", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let list: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let current: Vec<_> = rows.iter().filter(|r| r["isCurrent"] == true).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["id"], second.as_str());
}

#[test]
fn test_select_switches_current_project() {
    let ws = TestWorkspace::new();
    let first = ws.create_project("First");
    ws.create_project("Second");

    ws.cmd()
        .args(["project", "select", &first])
        .assert()
        .success()
        .stderr(predicate::str::contains("First"));

    assert_eq!(ws.snapshot()["currentProjectId"], first.as_str());
}

#[test]
fn test_select_unknown_project_fails() {
    let ws = TestWorkspace::new();
    let id = ws.create_project("Only");

    ws.cmd()
        .args(["project", "select", "00000000-0000-4000-8000-000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(ws.snapshot()["currentProjectId"], id.as_str());
}

#[test]
fn test_delete_requires_confirm() {
    let ws = TestWorkspace::new();
    let id = ws.create_project("Doomed");

    ws.cmd()
        .args(["project", "delete", &id])
        .assert()
        .success()
        .stderr(predicate::str::contains("--confirm"));
    assert_eq!(ws.snapshot()["projects"].as_array().unwrap().len(), 1);

    ws.cmd()
        .args(["project", "delete", &id, "--confirm"])
        .assert()
        .success();

    let snapshot = ws.snapshot();
    assert!(snapshot["projects"].as_array().unwrap().is_empty());
    assert!(snapshot["currentProjectId"].is_null());

    ws.cmd()
        .args(["project", "select", &id])
        .assert()
        .failure();
}

#[test]
fn test_create_prints_only_the_id_on_stdout() {
    let ws = TestWorkspace::new();
    let output = ws
        .cmd()
        .args(["project", "create", "--title", "Quiet", "--description", "No noise"])
        .output()
        .unwrap();

    let id = stdout_line(&output.stdout);
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert_eq!(ws.snapshot()["projects"][0]["description"], "No noise");
}
