use uuid::Uuid;

use crate::app::AppEvent;
use crate::console::commands::CallableTrait;
use crate::console::{CommandError, GlobalOptions, Session};
use crate::forms::{IdeaPatch, NewIdea};
use crate::models::{IdeaStatus, IdeaType};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// idea add
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard idea add --title <T> [--type] [--status] [--description] [--project]`
///
/// Adds an idea to the given project, or to the current one. `--project`
/// does not change which project is current.
pub struct AddIdeaCommand {
    pub options: GlobalOptions,
    pub project: Option<Uuid>,
    pub form: NewIdea,
}

impl AddIdeaCommand {
    pub fn new(
        options: GlobalOptions,
        project: Option<Uuid>,
        idea_type: IdeaType,
        title: String,
        description: Option<String>,
        status: IdeaStatus,
    ) -> Self {
        let form = NewIdea::new(idea_type, title, status)
            .with_description(description.unwrap_or_default());
        Self {
            options,
            project,
            form,
        }
    }
}

impl CallableTrait for AddIdeaCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session.focus(self.project).await?;

            session.dispatch(AppEvent::OpenIdeaDialog).await?;
            session.dispatch(AppEvent::AddIdea(self.form.clone())).await?;
            session.save_keeping_selection().await?;

            let idea = session
                .app
                .current_project()
                .and_then(|p| p.ideas.last())
                .ok_or(crate::app::AppError::NoProjectSelected)?;
            if session.json {
                session.print_json(idea)?;
            } else {
                println!("{}", idea.id);
                eprintln!(
                    "Added {} \"{}\" to {}.",
                    idea.idea_type,
                    idea.title,
                    idea.status.label()
                );
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// idea update
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard idea update <ID> [--type] [--title] [--description] [--status]`
///
/// Only the given fields change. Moving an idea between board columns is
/// `--status`.
pub struct UpdateIdeaCommand {
    pub options: GlobalOptions,
    pub id: Uuid,
    pub patch: IdeaPatch,
}

impl UpdateIdeaCommand {
    pub fn new(options: GlobalOptions, id: Uuid, patch: IdeaPatch) -> Self {
        Self { options, id, patch }
    }
}

impl CallableTrait for UpdateIdeaCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.patch.is_empty() {
            return Err(CommandError::Usage(
                "nothing to update: pass at least one of --type, --title, --description, --status"
                    .to_string(),
            )
            .into());
        }

        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session
                .dispatch(AppEvent::UpdateIdea(self.id, self.patch.clone()))
                .await?;
            session.save().await?;

            let idea = session
                .app
                .store()
                .projects()
                .iter()
                .flat_map(|p| p.ideas.iter())
                .find(|idea| idea.id == self.id);
            match idea {
                Some(idea) if session.json => session.print_json(idea)?,
                Some(idea) => eprintln!("Updated \"{}\" ({}).", idea.title, idea.status.label()),
                None => {}
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}
