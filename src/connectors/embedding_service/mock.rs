use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::connectors::errors::ConnectorError;
use crate::models::EmbeddingsReport;

use super::EmbeddingStatusConnector;

/// Canned embedding status that counts how often it was asked.
pub struct MockEmbeddingStatusConnector {
    report: Option<EmbeddingsReport>,
    calls: AtomicUsize,
}

impl MockEmbeddingStatusConnector {
    pub fn with_report(report: EmbeddingsReport) -> Self {
        Self {
            report: Some(report),
            calls: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails with `ServiceUnavailable`.
    pub fn failing() -> Self {
        Self {
            report: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EmbeddingStatusConnector for MockEmbeddingStatusConnector {
    async fn get_embeddings_status(
        &self,
        _project_id: &Uuid,
    ) -> Result<EmbeddingsReport, ConnectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.report
            .clone()
            .ok_or_else(|| ConnectorError::ServiceUnavailable("mock embedding service".to_string()))
    }
}
