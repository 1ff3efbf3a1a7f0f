use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{ChatConnector, ChatRequest, ChatServiceClient};
use crate::connectors::config::EdgeFunctionConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::{AiProvider, Message};

fn client_for(server: &MockServer) -> ChatServiceClient {
    let config = EdgeFunctionConfig {
        anon_key: Some("anon-key".to_string()),
        timeout_secs: 5,
        ..Default::default()
    };
    ChatServiceClient::new(&server.uri(), &config).unwrap()
}

fn request(message: &str) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        history: vec![Message::assistant("Hello!")],
        project_id: None,
        provider: AiProvider::Nvidia,
    }
}

#[tokio::test]
async fn test_send_message_posts_transcript_and_returns_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("Authorization", "Bearer anon-key"))
        .and(body_partial_json(json!({
            "message": "What should I build next?",
            "provider": "nvidia"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Start with onboarding."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .send_message(request("What should I build next?"))
        .await
        .unwrap();

    assert_eq!(reply, "Start with onboarding.");
}

#[tokio::test]
async fn test_send_message_surfaces_error_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "NVIDIA API key not configured"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(request("hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("NVIDIA API key not configured"));
    assert!(matches!(err, ConnectorError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_send_message_without_response_field_is_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "?"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(request("hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::InvalidResponse(_)));
}
