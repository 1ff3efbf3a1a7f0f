use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Conversation, Idea};

/// Root aggregate: owns its ideas and chat transcripts by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            ideas: Vec::new(),
            conversations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Sidebar row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub idea_count: usize,
    pub chat_count: usize,
    pub is_current: bool,
    pub updated_at: DateTime<Utc>,
}

impl ProjectSummary {
    pub fn of(project: &Project, current: Option<&Uuid>) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            idea_count: project.ideas.len(),
            chat_count: project.conversations.len(),
            is_current: current == Some(&project.id),
            updated_at: project.updated_at,
        }
    }
}
