use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Preferences, Project};

pub const WORKSPACE_VERSION: u32 = 1;

fn default_version() -> u32 {
    WORKSPACE_VERSION
}

/// Everything the console persists between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub current_project_id: Option<Uuid>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            version: WORKSPACE_VERSION,
            preferences: Preferences::default(),
            current_project_id: None,
            projects: Vec::new(),
        }
    }
}
