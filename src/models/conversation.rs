use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry. Stamped when it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only chat transcript owned by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message, keeping timestamps non-decreasing even if the
    /// wall clock stepped backwards since the previous entry.
    pub fn push(&mut self, mut message: Message) -> &Message {
        if let Some(previous) = self.messages.last() {
            if message.timestamp < previous.timestamp {
                message.timestamp = previous.timestamp;
            }
        }
        self.updated_at = message.timestamp.max(self.updated_at);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn user_turns(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn alternating_turns_keep_append_order() {
        let mut conversation = Conversation::new();
        let n = 5;
        for i in 0..n {
            conversation.push(Message::user(format!("question {}", i)));
            conversation.push(Message::assistant(format!("answer {}", i)));
        }

        assert_eq!(conversation.len(), 2 * n);
        for (i, pair) in conversation.messages().chunks(2).enumerate() {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[0].content, format!("question {}", i));
            assert_eq!(pair[1].role, Role::Assistant);
            assert_eq!(pair[1].content, format!("answer {}", i));
        }
        assert!(conversation
            .messages()
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn backwards_clock_is_clamped() {
        let mut conversation = Conversation::new();
        let first = conversation.push(Message::user("now")).timestamp;

        let mut stale = Message::assistant("from the past");
        stale.timestamp = first - Duration::seconds(30);
        let stored = conversation.push(stale).timestamp;

        assert_eq!(stored, first);
    }

    #[test]
    fn role_serializes_lowercase() {
        let message = Message::assistant("hi");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "assistant");
    }
}
