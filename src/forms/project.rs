use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Input of the "Create New Project" dialog.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProject {
    // At least one non-whitespace character.
    #[validate(pattern = r"\S")]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewProject {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Mirrors the disabled "Create Project" button.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}
