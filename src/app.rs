//! Application state and the event interface that drives it.
//!
//! One `AppState` owns everything mutable: the project store, the dialogs,
//! the chat panel and the RAG panel. Front ends never mutate those directly;
//! they send `AppEvent`s through [`AppState::dispatch`] and read state back
//! through the accessors.

use std::sync::Arc;
use uuid::Uuid;

use crate::connectors::{ChatConnector, EmbeddingStatusConnector};
use crate::forms::{IdeaPatch, NewIdea, NewProject};
use crate::models::{AiProvider, Preferences, Project, Workspace};
use crate::services::{ChatError, ChatPanel, ProjectStore, RagStatusPanel, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    OpenNewProjectDialog,
    CloseNewProjectDialog,
    CreateProject(NewProject),
    SelectProject(Uuid),
    /// First half of a delete: asks for confirmation.
    RequestDeleteProject(Uuid),
    ConfirmDeleteProject,
    CancelDeleteProject,
    OpenIdeaDialog,
    CloseIdeaDialog,
    AddIdea(NewIdea),
    UpdateIdea(Uuid, IdeaPatch),
    ToggleRagPanel,
    RefreshRagStatus,
    ChangeProvider(AiProvider),
    SendChatMessage(String),
    /// Load a stored transcript of the current project into the chat panel.
    ResumeConversation(Uuid),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("no project is selected")]
    NoProjectSelected,
    #[error("conversation {0} not found in the current project")]
    ConversationNotFound(Uuid),
    #[error("nothing is awaiting confirmation")]
    NothingToConfirm,
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Chat(#[from] ChatError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => Self::Validation(msg),
            other => Self::Store(other),
        }
    }
}

pub struct AppState {
    store: ProjectStore,
    preferences: Preferences,
    chat: ChatPanel,
    rag: RagStatusPanel,
    new_project_dialog_open: bool,
    idea_dialog_open: bool,
    pending_delete: Option<Uuid>,
    chat_connector: Arc<dyn ChatConnector>,
    embedding_connector: Arc<dyn EmbeddingStatusConnector>,
}

impl AppState {
    pub fn new(
        workspace: Workspace,
        chat_connector: Arc<dyn ChatConnector>,
        embedding_connector: Arc<dyn EmbeddingStatusConnector>,
    ) -> Self {
        let store = ProjectStore::from_workspace(&workspace);
        let mut rag = RagStatusPanel::new();
        rag.set_project(store.current_id());

        Self {
            store,
            preferences: workspace.preferences,
            chat: ChatPanel::new(workspace.preferences.ai_provider),
            rag,
            new_project_dialog_open: false,
            idea_dialog_open: false,
            pending_delete: None,
            chat_connector,
            embedding_connector,
        }
    }

    /// Snapshot for the persistence layer.
    pub fn to_workspace(&self) -> Workspace {
        let mut workspace = Workspace {
            preferences: self.preferences,
            ..Workspace::default()
        };
        self.store.write_into(&mut workspace);
        workspace
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.store.current_project()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    pub fn rag(&self) -> &RagStatusPanel {
        &self.rag
    }

    pub fn is_new_project_dialog_open(&self) -> bool {
        self.new_project_dialog_open
    }

    pub fn is_idea_dialog_open(&self) -> bool {
        self.idea_dialog_open
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    #[tracing::instrument(name = "Dispatch", skip(self), level = "debug")]
    pub async fn dispatch(&mut self, event: AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::OpenNewProjectDialog => self.new_project_dialog_open = true,
            AppEvent::CloseNewProjectDialog => self.new_project_dialog_open = false,
            AppEvent::CreateProject(form) => {
                // The dialog stays open on rejection
                let id = self.store.create_project(form)?.id;
                self.new_project_dialog_open = false;
                self.project_changed(Some(id)).await;
            }
            AppEvent::SelectProject(id) => {
                let previous = self.store.current_id();
                self.store.select_project(&id)?;
                if previous != Some(id) {
                    self.project_changed(Some(id)).await;
                }
            }
            AppEvent::RequestDeleteProject(id) => {
                if self.store.project(&id).is_none() {
                    return Err(StoreError::ProjectNotFound(id).into());
                }
                self.pending_delete = Some(id);
            }
            AppEvent::ConfirmDeleteProject => {
                let id = self.pending_delete.take().ok_or(AppError::NothingToConfirm)?;
                let was_current = self.store.current_id() == Some(id);
                self.store.delete_project(&id)?;
                if was_current {
                    self.project_changed(None).await;
                }
            }
            AppEvent::CancelDeleteProject => self.pending_delete = None,
            AppEvent::OpenIdeaDialog => self.idea_dialog_open = true,
            AppEvent::CloseIdeaDialog => self.idea_dialog_open = false,
            AppEvent::AddIdea(form) => {
                let project_id = self.store.current_id().ok_or(AppError::NoProjectSelected)?;
                self.store.add_idea(&project_id, form)?;
                self.idea_dialog_open = false;
            }
            AppEvent::UpdateIdea(id, patch) => {
                self.store.update_idea(&id, patch)?;
            }
            AppEvent::ToggleRagPanel => {
                let visible = !self.rag.is_visible();
                if self.rag.set_visible(visible) {
                    self.rag.refresh(self.embedding_connector.as_ref()).await;
                }
            }
            AppEvent::RefreshRagStatus => {
                self.rag.refresh(self.embedding_connector.as_ref()).await;
            }
            AppEvent::ChangeProvider(provider) => {
                tracing::info!(%provider, "AI provider changed");
                self.preferences.ai_provider = provider;
                self.chat.set_provider(provider);
            }
            AppEvent::SendChatMessage(text) => {
                let project_id = self.store.current_id();
                self.chat
                    .send(self.chat_connector.as_ref(), &text, project_id)
                    .await?;
                if let Some(project_id) = project_id {
                    self.store
                        .record_conversation(&project_id, self.chat.conversation())?;
                }
            }
            AppEvent::ResumeConversation(conversation_id) => {
                let project = self
                    .store
                    .current_project()
                    .ok_or(AppError::NoProjectSelected)?;
                let conversation = project
                    .conversations
                    .iter()
                    .find(|c| c.id == conversation_id)
                    .cloned()
                    .ok_or(AppError::ConversationNotFound(conversation_id))?;
                self.chat = ChatPanel::resume(self.preferences.ai_provider, conversation);
            }
        }
        Ok(())
    }

    /// A different project (or none) is current: fresh transcript, and the
    /// RAG panel follows the selection.
    async fn project_changed(&mut self, project_id: Option<Uuid>) {
        self.chat = ChatPanel::new(self.preferences.ai_provider);
        if self.rag.set_project(project_id) {
            self.rag.refresh(self.embedding_connector.as_ref()).await;
        }
    }
}
