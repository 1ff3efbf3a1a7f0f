use uuid::Uuid;

use super::chat_service::{ChatConnector, ChatRequest};
use super::embedding_service::EmbeddingStatusConnector;
use super::errors::ConnectorError;
use crate::models::EmbeddingsReport;

/// Stand-in used when the edge function is disabled or has no location
/// configured. Every call fails, which the UI layers degrade gracefully.
pub struct OfflineConnector {
    reason: String,
}

impl OfflineConnector {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl ChatConnector for OfflineConnector {
    async fn send_message(&self, _request: ChatRequest) -> Result<String, ConnectorError> {
        Err(ConnectorError::ServiceUnavailable(self.reason.clone()))
    }
}

#[async_trait::async_trait]
impl EmbeddingStatusConnector for OfflineConnector {
    async fn get_embeddings_status(
        &self,
        _project_id: &Uuid,
    ) -> Result<EmbeddingsReport, ConnectorError> {
        Err(ConnectorError::ServiceUnavailable(self.reason.clone()))
    }
}
