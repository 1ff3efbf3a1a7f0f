//! Chat transcript manager.
//!
//! `Idle -> Sending -> Idle`. The user message is appended before the remote
//! call starts and the reply (or a synthetic error reply) only after it
//! resolves, so the transcript stays in order however slow the backend is.
//! Provider failures never escape as errors: they become assistant messages.

use uuid::Uuid;

use crate::connectors::{ChatConnector, ChatRequest, ConnectorError};
use crate::models::{AiProvider, Conversation, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Sending,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    /// The input is disabled while a reply is outstanding.
    #[error("a reply is still pending")]
    Busy,
    #[error("message is empty")]
    EmptyMessage,
    #[error("no message is awaiting a reply")]
    NothingPending,
}

#[derive(Debug, Clone)]
pub struct ChatPanel {
    provider: AiProvider,
    conversation: Conversation,
    state: ChatState,
}

/// Transcript text shown in place of a reply when the call failed.
pub fn error_reply(error: &ConnectorError) -> String {
    format!("I encountered an error: {}. Please try again.", error)
}

impl ChatPanel {
    /// Fresh transcript opened by the provider's greeting.
    pub fn new(provider: AiProvider) -> Self {
        let mut conversation = Conversation::new();
        conversation.push(Message::assistant(provider.greeting()));
        Self {
            provider,
            conversation,
            state: ChatState::Idle,
        }
    }

    /// Continue a stored transcript.
    pub fn resume(provider: AiProvider, conversation: Conversation) -> Self {
        Self {
            provider,
            conversation,
            state: ChatState::Idle,
        }
    }

    pub fn provider(&self) -> AiProvider {
        self.provider
    }

    /// Later requests go to `provider`; the transcript is kept.
    pub fn set_provider(&mut self, provider: AiProvider) {
        self.provider = provider;
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == ChatState::Sending
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// Only transcripts the user actually wrote into are worth keeping.
    pub fn has_user_turns(&self) -> bool {
        self.conversation.user_turns() > 0
    }

    pub fn provider_badge(&self) -> &'static str {
        self.provider.model_badge()
    }

    pub fn context_badge(&self, has_project: bool) -> Option<&'static str> {
        match (has_project, self.provider.uses_retrieval()) {
            (false, _) => None,
            (true, true) => Some("RAG Active"),
            (true, false) => Some("Project Context"),
        }
    }

    /// Append the user's message and hand back the request to send.
    pub fn begin_send(
        &mut self,
        text: &str,
        project_id: Option<Uuid>,
    ) -> Result<ChatRequest, ChatError> {
        if self.is_sending() {
            return Err(ChatError::Busy);
        }
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let history = self.conversation.messages().to_vec();
        self.conversation.push(Message::user(text));
        self.state = ChatState::Sending;

        Ok(ChatRequest {
            message: text.to_string(),
            history,
            project_id,
            provider: self.provider,
        })
    }

    /// Append the outcome of the outstanding request and go back to idle.
    pub fn complete(
        &mut self,
        outcome: Result<String, ConnectorError>,
    ) -> Result<&Message, ChatError> {
        if !self.is_sending() {
            return Err(ChatError::NothingPending);
        }

        let message = match outcome {
            Ok(reply) => Message::assistant(reply),
            Err(err) => {
                tracing::error!(error = %err, provider = %self.provider, "Error sending message");
                Message::assistant(error_reply(&err))
            }
        };
        self.state = ChatState::Idle;

        Ok(self.conversation.push(message))
    }

    /// `begin_send` + the remote call + `complete`.
    pub async fn send(
        &mut self,
        connector: &dyn ChatConnector,
        text: &str,
        project_id: Option<Uuid>,
    ) -> Result<&Message, ChatError> {
        let request = self.begin_send(text, project_id)?;
        let outcome = connector.send_message(request).await;
        self.complete(outcome)
    }
}
