use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::models::{IdeaStatus, IdeaType};

/// Input of the "Add New Idea" dialog. Carries no id or timestamp: the store
/// assigns both.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewIdea {
    #[serde(rename = "type", default)]
    pub idea_type: IdeaType,
    #[validate(pattern = r"\S")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: IdeaStatus,
}

impl NewIdea {
    pub fn new(idea_type: IdeaType, title: impl Into<String>, status: IdeaStatus) -> Self {
        Self {
            idea_type,
            title: title.into(),
            description: String::new(),
            status,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Partial update of an idea; `None` leaves the field untouched. A title,
/// when present, follows the same rule as in `NewIdea`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IdeaPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub idea_type: Option<IdeaType>,
    #[validate(pattern = r"\S")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IdeaStatus>,
}

impl IdeaPatch {
    pub fn status(status: IdeaStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.idea_type.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}
