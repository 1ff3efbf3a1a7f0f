use uuid::Uuid;

use crate::app::AppEvent;
use crate::console::commands::CallableTrait;
use crate::console::session::truncate;
use crate::console::{CommandError, GlobalOptions, Session};
use crate::forms::NewProject;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// project create
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard project create --title <T> [--description <D>]`
///
/// Creates a project and makes it the current one.
pub struct CreateProjectCommand {
    pub options: GlobalOptions,
    pub title: String,
    pub description: Option<String>,
}

impl CreateProjectCommand {
    pub fn new(options: GlobalOptions, title: String, description: Option<String>) -> Self {
        Self {
            options,
            title,
            description,
        }
    }
}

impl CallableTrait for CreateProjectCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            let form = NewProject::new(
                self.title.clone(),
                self.description.clone().unwrap_or_default(),
            );

            session.dispatch(AppEvent::OpenNewProjectDialog).await?;
            session.dispatch(AppEvent::CreateProject(form)).await?;
            session.save().await?;

            let project = session
                .app
                .current_project()
                .ok_or(crate::app::AppError::NoProjectSelected)?;
            if session.json {
                session.print_json(project)?;
            } else {
                println!("{}", project.id);
                eprintln!("Created project \"{}\".", project.title);
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// project list
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard project list [--json]`
pub struct ListProjectsCommand {
    pub options: GlobalOptions,
}

impl ListProjectsCommand {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }
}

impl CallableTrait for ListProjectsCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let session = Session::open(&self.options).await?;
            let summaries = session.app.store().summaries();

            if session.json {
                return session.print_json(&summaries);
            }
            if summaries.is_empty() {
                eprintln!("No projects yet. Create one with `ideaboard project create --title <TITLE>`.");
                return Ok(());
            }

            println!(
                "{:<2} {:<36} {:<30} {:>6} {:>6}",
                "", "ID", "TITLE", "IDEAS", "CHATS"
            );
            println!("{}", "─".repeat(84));
            for p in &summaries {
                println!(
                    "{:<2} {:<36} {:<30} {:>6} {:>6}",
                    if p.is_current { "*" } else { "" },
                    p.id,
                    truncate(&p.title, 28),
                    p.idea_count,
                    p.chat_count,
                );
            }
            eprintln!("\n{} project(s) total.", summaries.len());
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// project select
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard project select <ID>`
pub struct SelectProjectCommand {
    pub options: GlobalOptions,
    pub id: Uuid,
}

impl SelectProjectCommand {
    pub fn new(options: GlobalOptions, id: Uuid) -> Self {
        Self { options, id }
    }
}

impl CallableTrait for SelectProjectCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session.dispatch(AppEvent::SelectProject(self.id)).await?;
            session.save().await?;

            if let Some(project) = session.app.current_project() {
                eprintln!("Now working on \"{}\".", project.title);
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// project delete
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard project delete <ID> [--confirm]`
///
/// Removes the project with all of its ideas and conversations. Without
/// `--confirm` only reports what would be deleted.
pub struct DeleteProjectCommand {
    pub options: GlobalOptions,
    pub id: Uuid,
    pub confirm: bool,
}

impl DeleteProjectCommand {
    pub fn new(options: GlobalOptions, id: Uuid, confirm: bool) -> Self {
        Self { options, id, confirm }
    }
}

impl CallableTrait for DeleteProjectCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session.dispatch(AppEvent::RequestDeleteProject(self.id)).await?;

            let (title, ideas, chats) = match session.app.store().project(&self.id) {
                Some(p) => (p.title.clone(), p.ideas.len(), p.conversations.len()),
                None => return Ok(()),
            };

            if !self.confirm {
                session.dispatch(AppEvent::CancelDeleteProject).await?;
                eprintln!(
                    "\"{}\" has {} idea(s) and {} conversation(s). Re-run with --confirm to delete it.",
                    title, ideas, chats
                );
                return Ok(());
            }

            session.dispatch(AppEvent::ConfirmDeleteProject).await?;
            session.save().await?;
            eprintln!("Deleted project \"{}\".", title);
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}
