//! Kanban projection of a project's ideas.

use serde::Serialize;

use crate::models::{Idea, IdeaStatus};

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<'a> {
    pub status: IdeaStatus,
    pub label: &'static str,
    pub ideas: Vec<&'a Idea>,
}

impl BoardColumn<'_> {
    pub fn count(&self) -> usize {
        self.ideas.len()
    }
}

/// The four status columns in board order. Within a column ideas keep the
/// order they have in `ideas`.
pub fn group_by_status(ideas: &[Idea]) -> [BoardColumn<'_>; 4] {
    IdeaStatus::ALL.map(|status| BoardColumn {
        status,
        label: status.label(),
        ideas: ideas.iter().filter(|idea| idea.status == status).collect(),
    })
}
