use std::collections::VecDeque;
use std::sync::Mutex;

use crate::connectors::errors::ConnectorError;

use super::{ChatConnector, ChatRequest};

/// Scripted chat backend. Pops queued outcomes in order and echoes once the
/// queue is empty. Every request is recorded.
#[derive(Default)]
pub struct MockChatConnector {
    outcomes: Mutex<VecDeque<Result<String, ConnectorError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mock = Self::default();
        for reply in replies {
            mock.push(Ok(reply.into()));
        }
        mock
    }

    pub fn failing(error: ConnectorError) -> Self {
        let mock = Self::default();
        mock.push(Err(error));
        mock
    }

    pub fn push(&self, outcome: Result<String, ConnectorError>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ChatConnector for MockChatConnector {
    async fn send_message(&self, request: ChatRequest) -> Result<String, ConnectorError> {
        let echo = format!("You said: {}", request.message);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
            .unwrap_or(Ok(echo))
    }
}
