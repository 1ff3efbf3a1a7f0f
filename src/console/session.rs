use std::path::PathBuf;

use crate::app::{AppEvent, AppState};
use crate::configuration::{get_configuration, Settings};
use crate::connectors::{init_chat_service, init_embedding_service};
use crate::console::CommandError;
use crate::db;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub workspace: Option<PathBuf>,
    pub json: bool,
}

/// One command invocation: the loaded workspace wrapped in an `AppState`.
pub struct Session {
    path: PathBuf,
    /// Current project as stored when the session was opened.
    opened_current: Option<uuid::Uuid>,
    pub app: AppState,
    pub json: bool,
}

impl Session {
    /// Single-threaded runtime for a one-shot command.
    pub fn runtime() -> Result<tokio::runtime::Runtime, CommandError> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CommandError::Runtime)
    }

    pub async fn open(options: &GlobalOptions) -> Result<Self, CommandError> {
        let settings = get_configuration()?;
        Self::open_with(options, &settings).await
    }

    pub async fn open_with(options: &GlobalOptions, settings: &Settings) -> Result<Self, CommandError> {
        let path = options
            .workspace
            .clone()
            .unwrap_or_else(|| settings.workspace_path.clone());

        let fresh = !path.exists();
        let mut workspace = db::workspace::fetch(&path).await?;
        if fresh {
            workspace.preferences.ai_provider = settings.default_provider;
        }

        let app = AppState::new(
            workspace,
            init_chat_service(&settings.connectors),
            init_embedding_service(&settings.connectors),
        );

        Ok(Self {
            path,
            opened_current: app.store().current_id(),
            app,
            json: options.json,
        })
    }

    pub async fn dispatch(&mut self, event: AppEvent) -> Result<(), CommandError> {
        Ok(self.app.dispatch(event).await?)
    }

    pub async fn save(&self) -> Result<(), CommandError> {
        db::workspace::save(&self.path, &self.app.to_workspace()).await?;
        Ok(())
    }

    /// Save everything except a change of current project. Commands whose
    /// `--project` flag only scopes that one invocation save through this.
    pub async fn save_keeping_selection(&self) -> Result<(), CommandError> {
        let mut workspace = self.app.to_workspace();
        workspace.current_project_id = self
            .opened_current
            .filter(|id| workspace.projects.iter().any(|p| &p.id == id));
        db::workspace::save(&self.path, &workspace).await?;
        Ok(())
    }

    /// Select `project` if given. Commands that act on "the current project"
    /// call this first.
    pub async fn focus(&mut self, project: Option<uuid::Uuid>) -> Result<(), CommandError> {
        if let Some(id) = project {
            self.dispatch(AppEvent::SelectProject(id)).await?;
        }
        if self.app.current_project().is_none() {
            return Err(crate::app::AppError::NoProjectSelected.into());
        }
        Ok(())
    }

    pub fn print_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<(), CommandError> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
