use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::forms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdeaType {
    #[default]
    Idea,
    Goal,
    Feature,
    Task,
}

impl IdeaType {
    pub const ALL: [IdeaType; 4] = [Self::Idea, Self::Goal, Self::Feature, Self::Task];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Goal => "goal",
            Self::Feature => "feature",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for IdeaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("unknown idea type '{}' (expected idea, goal, feature or task)", s))
    }
}

/// Board column an idea lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaStatus {
    #[default]
    Brainstorm,
    Planning,
    InProgress,
    Completed,
}

impl IdeaStatus {
    /// Column order on the board.
    pub const ALL: [IdeaStatus; 4] = [
        Self::Brainstorm,
        Self::Planning,
        Self::InProgress,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brainstorm => "brainstorm",
            Self::Planning => "planning",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brainstorm => "Brainstorm",
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown status '{}' (expected brainstorm, planning, in-progress or completed)",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub idea_type: IdeaType,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    pub created_at: DateTime<Utc>,
}

// Only the store converts forms into ideas; callers never pick id or createdAt.
impl From<forms::NewIdea> for Idea {
    fn from(form: forms::NewIdea) -> Self {
        Self {
            id: Uuid::new_v4(),
            idea_type: form.idea_type,
            title: form.title.trim().to_string(),
            description: form.description,
            status: form.status,
            created_at: Utc::now(),
        }
    }
}

impl Idea {
    /// Merge the present fields of `patch`. No cross-field checks.
    pub fn apply(&mut self, patch: forms::IdeaPatch) {
        if let Some(idea_type) = patch.idea_type {
            self.idea_type = idea_type;
        }
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&IdeaStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: IdeaStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, IdeaStatus::Completed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<IdeaStatus>("\"blocked\"").is_err());
        assert!("blocked".parse::<IdeaStatus>().is_err());
    }

    #[test]
    fn status_parses_loose_spellings() {
        assert_eq!("In_Progress".parse::<IdeaStatus>().unwrap(), IdeaStatus::InProgress);
        assert_eq!(" planning ".parse::<IdeaStatus>().unwrap(), IdeaStatus::Planning);
    }

    #[test]
    fn idea_serializes_type_field() {
        let idea = Idea::from(forms::NewIdea {
            idea_type: IdeaType::Feature,
            title: "Dark mode".to_string(),
            description: String::new(),
            status: IdeaStatus::Planning,
        });
        let value = serde_json::to_value(&idea).unwrap();
        assert_eq!(value["type"], "feature");
        assert_eq!(value["status"], "planning");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut idea = Idea::from(forms::NewIdea {
            idea_type: IdeaType::Task,
            title: "Write docs".to_string(),
            description: "README".to_string(),
            status: IdeaStatus::Brainstorm,
        });
        idea.apply(forms::IdeaPatch {
            status: Some(IdeaStatus::Completed),
            ..Default::default()
        });
        assert_eq!(idea.status, IdeaStatus::Completed);
        assert_eq!(idea.title, "Write docs");
        assert_eq!(idea.description, "README");
        assert_eq!(idea.idea_type, IdeaType::Task);
    }
}
