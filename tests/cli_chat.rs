//! Integration tests for `ideaboard chat`, `rag` and `provider`.

mod common;

use common::TestWorkspace;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_offline_chat_reports_error_in_transcript() {
    let ws = TestWorkspace::new();
    ws.create_project("Launch");

    ws.cmd()
        .args(["chat", "What should the MVP include?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I encountered an error"))
        .stdout(predicate::str::contains("Please try again."));

    let conversation = &ws.snapshot()["projects"][0]["conversations"][0];
    let messages = conversation["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[2]["role"], "assistant");
}

#[test]
fn test_blank_chat_message_is_refused() {
    let ws = TestWorkspace::new();
    ws.create_project("Launch");

    ws.cmd()
        .args(["chat", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message is empty"));
}

#[test]
fn test_continue_appends_to_latest_conversation() {
    let ws = TestWorkspace::new();
    ws.create_project("Launch");

    ws.cmd().args(["chat", "first"]).assert().success();
    ws.cmd().args(["chat", "--continue", "second"]).assert().success();
    ws.cmd().args(["chat", "third"]).assert().success();

    let conversations = ws.snapshot()["projects"][0]["conversations"].clone();
    let conversations = conversations.as_array().unwrap();
    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0]["messages"].as_array().unwrap().len(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_chat_reply_comes_from_edge_function() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({
            "message": "Name my app",
            "provider": "nvidia"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "How about Habitual?"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ws = TestWorkspace::new();
    ws.create_project("Naming");
    ws.cmd().args(["provider", "set", "nvidia"]).assert().success();

    let uri = server.uri();
    let workspace = ws.path();
    let dir = ws.dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        assert_cmd::Command::cargo_bin("ideaboard")
            .unwrap()
            .current_dir(dir)
            .env("IDEABOARD__CONNECTORS__EDGE_FUNCTION__BASE_URL", uri)
            .arg("--workspace")
            .arg(workspace)
            .args(["chat", "Name my app"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("How about Habitual?"));
}

#[test]
fn test_offline_rag_has_no_data() {
    let ws = TestWorkspace::new();
    ws.create_project("Launch");

    ws.cmd()
        .args(["--json", "rag"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_rag_without_project_fails() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .arg("rag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no project is selected"));
}

#[test]
fn test_provider_set_is_persisted() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["provider", "set", "nvidia"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Nemotron Nano"));

    assert_eq!(ws.snapshot()["preferences"]["aiProvider"], "nvidia");

    ws.cmd()
        .args(["--json", "provider", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"aiProvider\": \"nvidia\""));
}

#[test]
fn test_provider_set_rejects_unknown_name() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["provider", "set", "openai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown AI provider"));
}

#[test]
fn test_chat_with_project_flag_keeps_current_project() {
    let ws = TestWorkspace::new();
    let first = ws.create_project("First");
    let second = ws.create_project("Second");

    ws.cmd()
        .args(["chat", "--project", &first, "Quick question"])
        .assert()
        .success();

    let snapshot = ws.snapshot();
    assert_eq!(snapshot["currentProjectId"], second.as_str());
    assert_eq!(snapshot["projects"][0]["id"], first.as_str());
    assert_eq!(
        snapshot["projects"][0]["conversations"].as_array().unwrap().len(),
        1
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rag_prints_embedding_summary() {
    let ws = TestWorkspace::new();
    let project = ws.create_project("Indexed");
    let idea = ws.add_idea(&["--title", "Semantic search"]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/projects/{}/embeddings", project)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalIdeas": 1,
            "embeddingsGenerated": 1,
            "embeddings": [{
                "ideaId": idea,
                "ideaTitle": "Semantic search",
                "hasEmbedding": true,
                "embeddingDimension": 1024
            }],
            "model": "nvidia/nv-embedqa-e5-v5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let workspace = ws.path();
    let dir = ws.dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        assert_cmd::Command::cargo_bin("ideaboard")
            .unwrap()
            .current_dir(dir)
            .env("IDEABOARD__CONNECTORS__EDGE_FUNCTION__BASE_URL", uri)
            .arg("--workspace")
            .arg(workspace)
            .arg("rag")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1024"));
    assert!(stdout.contains("nvidia/nv-embedqa-e5-v5"));
    assert!(stdout.contains("Semantic search"));
}
