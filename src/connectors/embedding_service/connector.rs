use uuid::Uuid;

use crate::connectors::errors::ConnectorError;
use crate::models::EmbeddingsReport;

/// Read-only view of the embedding coverage computed by the edge function.
#[async_trait::async_trait]
pub trait EmbeddingStatusConnector: Send + Sync {
    async fn get_embeddings_status(
        &self,
        project_id: &Uuid,
    ) -> Result<EmbeddingsReport, ConnectorError>;
}
