use uuid::Uuid;

use crate::console::commands::CallableTrait;
use crate::console::progress::status_icon;
use crate::console::session::truncate;
use crate::console::{CommandError, GlobalOptions, Session};
use crate::services::group_by_status;

/// `ideaboard board [--project <ID>] [--json]`
///
/// Prints the four status columns of a project's ideas.
pub struct BoardCommand {
    pub options: GlobalOptions,
    pub project: Option<Uuid>,
}

impl BoardCommand {
    pub fn new(options: GlobalOptions, project: Option<Uuid>) -> Self {
        Self { options, project }
    }
}

impl CallableTrait for BoardCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session.focus(self.project).await?;
            let project = session
                .app
                .current_project()
                .ok_or(crate::app::AppError::NoProjectSelected)?;
            let columns = group_by_status(&project.ideas);

            if session.json {
                return session.print_json(&columns);
            }

            println!("{}", project.title);
            println!("{}", "━".repeat(60));
            for column in &columns {
                println!(
                    "\n{} {} ({})",
                    status_icon(column.status),
                    column.label,
                    column.count()
                );
                if column.ideas.is_empty() {
                    println!("    No ideas yet");
                }
                for idea in &column.ideas {
                    println!(
                        "    [{:<7}] {:<40} {}",
                        idea.idea_type,
                        truncate(&idea.title, 38),
                        idea.id
                    );
                }
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}
