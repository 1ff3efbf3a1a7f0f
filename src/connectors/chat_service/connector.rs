use super::types::ChatRequest;
use crate::connectors::errors::ConnectorError;

/// `send_message(text, history) -> reply`, the single injected async call
/// the chat panel depends on.
#[async_trait::async_trait]
pub trait ChatConnector: Send + Sync {
    async fn send_message(&self, request: ChatRequest) -> Result<String, ConnectorError>;
}
