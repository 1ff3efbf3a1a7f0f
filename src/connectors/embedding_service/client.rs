use tracing::Instrument;
use uuid::Uuid;

use crate::connectors::config::EdgeFunctionConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::EmbeddingsReport;

use super::connector::EmbeddingStatusConnector;

/// HTTP client for `GET {api_base}/projects/{id}/embeddings`
pub struct EmbeddingStatusClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) auth_token: Option<String>,
}

impl EmbeddingStatusClient {
    pub fn new(base_url: &str, config: &EdgeFunctionConfig) -> Result<Self, ConnectorError> {
        let timeout = std::time::Duration::from_secs(config.timeout_secs.max(1));
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            auth_token: config.anon_key.clone(),
        })
    }

    pub(crate) fn auth_header(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}

#[async_trait::async_trait]
impl EmbeddingStatusConnector for EmbeddingStatusClient {
    async fn get_embeddings_status(
        &self,
        project_id: &Uuid,
    ) -> Result<EmbeddingsReport, ConnectorError> {
        let span = tracing::info_span!("embedding_service_get_status", project_id = %project_id);

        let url = format!("{}/projects/{}/embeddings", self.base_url, project_id);
        let mut req = self.http_client.get(&url);

        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", auth);
        }

        let resp = req.send().instrument(span).await?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;

        if !status.is_success() {
            return Err(ConnectorError::from_status(status, text));
        }

        serde_json::from_str::<EmbeddingsReport>(&text)
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }
}
