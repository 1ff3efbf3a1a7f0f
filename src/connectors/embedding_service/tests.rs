use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{EmbeddingStatusClient, EmbeddingStatusConnector};
use crate::connectors::config::EdgeFunctionConfig;
use crate::connectors::errors::ConnectorError;

fn client_for(server: &MockServer) -> EmbeddingStatusClient {
    let config = EdgeFunctionConfig {
        anon_key: Some("anon-key".to_string()),
        timeout_secs: 5,
        ..Default::default()
    };
    EmbeddingStatusClient::new(&server.uri(), &config).unwrap()
}

#[tokio::test]
async fn test_get_embeddings_status_sends_bearer_and_parses_body() {
    let server = MockServer::start().await;
    let project_id = Uuid::new_v4();
    let idea_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/projects/{}/embeddings", project_id)))
        .and(header("Authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalIdeas": 1,
            "embeddingsGenerated": 1,
            "embeddings": [{
                "ideaId": idea_id,
                "ideaTitle": "Voice notes",
                "hasEmbedding": true,
                "embeddingDimension": 1024
            }],
            "model": "nvidia/nv-embedqa-e5-v5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .get_embeddings_status(&project_id)
        .await
        .unwrap();

    assert_eq!(report.total_ideas, 1);
    assert_eq!(report.embeddings_generated, 1);
    assert_eq!(report.embeddings[0].idea_id, idea_id);
    assert_eq!(report.dimension(), 1024);
    assert_eq!(report.model, "nvidia/nv-embedqa-e5-v5");
}

#[tokio::test]
async fn test_get_embeddings_status_maps_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("project not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_embeddings_status(&Uuid::new_v4())
        .await
        .unwrap_err();

    assert_eq!(err, ConnectorError::NotFound("project not found".to_string()));
}

#[tokio::test]
async fn test_get_embeddings_status_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_embeddings_status(&Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::InvalidResponse(_)));
}
