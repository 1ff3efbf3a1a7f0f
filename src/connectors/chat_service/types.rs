use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AiProvider, Message};

/// Body of `POST {api_base}/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Transcript as it was before `message` was appended.
    pub history: Vec<Message>,
    pub project_id: Option<Uuid>,
    pub provider: AiProvider,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
