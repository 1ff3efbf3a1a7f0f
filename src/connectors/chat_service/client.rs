use tracing::Instrument;

use crate::connectors::config::EdgeFunctionConfig;
use crate::connectors::errors::ConnectorError;

use super::connector::ChatConnector;
use super::types::{ChatReply, ChatRequest};

/// HTTP client for `POST {api_base}/chat`
pub struct ChatServiceClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) auth_token: Option<String>,
}

impl ChatServiceClient {
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
impl ChatConnector for ChatServiceClient {
    async fn send_message(&self, request: ChatRequest) -> Result<String, ConnectorError> {
        let span = tracing::info_span!(
            "chat_service_send_message",
            provider = %request.provider,
            history_len = request.history.len(),
            project_id = ?request.project_id
        );

        let url = format!("{}/chat", self.base_url);
        let mut req = self.http_client.post(&url).json(&request);

        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", auth);
        }

        let resp = req.send().instrument(span).await?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;

        // The function reports provider failures as `{ "error": "..." }`,
        // sometimes with a 200.
        let reply = serde_json::from_str::<ChatReply>(&text).ok();
        if let Some(message) = reply.as_ref().and_then(|r| r.error.clone()) {
            return Err(if status.is_success() {
                ConnectorError::HttpError(message)
            } else {
                ConnectorError::from_status(status, message)
            });
        }
        if !status.is_success() {
            return Err(ConnectorError::from_status(status, text));
        }

        reply
            .and_then(|r| r.response)
            .ok_or(ConnectorError::InvalidResponse(text))
    }
}
