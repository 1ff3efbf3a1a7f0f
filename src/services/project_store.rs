//! ProjectStore - in-memory projects, ideas and transcripts
//!
//! The store is the only place ids and creation timestamps are assigned.
//! Durability is somebody else's job: `db::workspace` snapshots whatever the
//! store holds.

use serde_valid::Validate;
use uuid::Uuid;

use crate::forms::{IdeaPatch, NewIdea, NewProject};
use crate::models::{Conversation, Idea, Project, ProjectSummary, Workspace};

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("project {0} not found")]
    ProjectNotFound(Uuid),
    #[error("idea {0} not found")]
    IdeaNotFound(Uuid),
    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    current: Option<Uuid>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a snapshot. A dangling current id is dropped.
    pub fn from_workspace(workspace: &Workspace) -> Self {
        let projects = workspace.projects.clone();
        let current = workspace
            .current_project_id
            .filter(|id| projects.iter().any(|p| &p.id == id));
        Self { projects, current }
    }

    pub fn write_into(&self, workspace: &mut Workspace) {
        workspace.projects = self.projects.clone();
        workspace.current_project_id = self.current;
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref().and_then(|id| self.project(id))
    }

    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .map(|p| ProjectSummary::of(p, self.current.as_ref()))
            .collect()
    }

    /// Create a project and make it current.
    #[tracing::instrument(name = "Create project", skip(self, form), fields(title = %form.title))]
    pub fn create_project(&mut self, form: NewProject) -> Result<&Project> {
        form.validate().map_err(|errors| {
            tracing::debug!("rejected project form: {:?}", errors);
            StoreError::Validation("project title must not be blank".to_string())
        })?;

        let project = Project::new(form.title.trim().to_string(), form.description);
        let id = project.id;
        self.projects.push(project);
        self.current = Some(id);
        tracing::info!(project_id = %id, "project created");

        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Make `id` current. Unknown ids leave the selection as it was.
    pub fn select_project(&mut self, id: &Uuid) -> Result<&Project> {
        let index = self.position(id)?;
        self.current = Some(*id);
        Ok(&self.projects[index])
    }

    /// Remove a project together with its ideas and conversations.
    #[tracing::instrument(name = "Delete project", skip(self))]
    pub fn delete_project(&mut self, id: &Uuid) -> Result<Project> {
        let index = self.position(id)?;
        let removed = self.projects.remove(index);
        if self.current == Some(*id) {
            self.current = None;
        }
        tracing::info!(
            ideas = removed.ideas.len(),
            conversations = removed.conversations.len(),
            "project deleted"
        );
        Ok(removed)
    }

    /// Append an idea to `project_id`, assigning its id and createdAt.
    #[tracing::instrument(name = "Add idea", skip(self, form), fields(title = %form.title))]
    pub fn add_idea(&mut self, project_id: &Uuid, form: NewIdea) -> Result<&Idea> {
        form.validate().map_err(|errors| {
            tracing::debug!("rejected idea form: {:?}", errors);
            StoreError::Validation("idea title must not be blank".to_string())
        })?;

        let index = self.position(project_id)?;
        let project = &mut self.projects[index];
        project.ideas.push(Idea::from(form));
        project.touch();

        Ok(&project.ideas[project.ideas.len() - 1])
    }

    /// Merge `patch` into the idea with `id`, wherever it lives.
    pub fn update_idea(&mut self, id: &Uuid, patch: IdeaPatch) -> Result<&Idea> {
        patch.validate().map_err(|errors| {
            tracing::debug!("rejected idea patch: {:?}", errors);
            StoreError::Validation("idea title must not be blank".to_string())
        })?;

        let (p, i) = self
            .projects
            .iter()
            .enumerate()
            .find_map(|(p, project)| {
                project
                    .ideas
                    .iter()
                    .position(|idea| &idea.id == id)
                    .map(|i| (p, i))
            })
            .ok_or(StoreError::IdeaNotFound(*id))?;

        let project = &mut self.projects[p];
        project.ideas[i].apply(patch);
        project.touch();

        Ok(&project.ideas[i])
    }

    /// Insert or replace a transcript by conversation id.
    pub fn record_conversation(
        &mut self,
        project_id: &Uuid,
        conversation: &Conversation,
    ) -> Result<()> {
        let index = self.position(project_id)?;
        let project = &mut self.projects[index];
        match project
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation.id)
        {
            Some(existing) => *existing = conversation.clone(),
            None => project.conversations.push(conversation.clone()),
        }
        project.touch();
        Ok(())
    }

    fn position(&self, id: &Uuid) -> Result<usize> {
        self.projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or(StoreError::ProjectNotFound(*id))
    }
}
