use uuid::Uuid;

use crate::app::AppEvent;
use crate::console::commands::CallableTrait;
use crate::console::progress;
use crate::console::session::truncate;
use crate::console::{CommandError, GlobalOptions, Session};

/// `ideaboard rag [--project <ID>] [--json]`
///
/// Shows how many of the project's ideas have embeddings in the retrieval
/// index, and which ones are still pending.
pub struct RagStatusCommand {
    pub options: GlobalOptions,
    pub project: Option<Uuid>,
}

impl RagStatusCommand {
    pub fn new(options: GlobalOptions, project: Option<Uuid>) -> Self {
        Self { options, project }
    }
}

impl CallableTrait for RagStatusCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session.focus(self.project).await?;

            let pb = progress::spinner("Fetching embedding status...", session.json);
            // Showing the panel is what triggers the fetch
            session.dispatch(AppEvent::ToggleRagPanel).await?;

            let Some(report) = session.app.rag().report() else {
                progress::finish_error(&pb, "No embeddings data available");
                if session.json {
                    println!("null");
                }
                return Ok(());
            };
            progress::finish_success(&pb, "Embedding status loaded");

            if session.json {
                return session.print_json(report);
            }

            let summary = crate::services::RagSummary::from(report);
            println!("RAG Status");
            println!("{}", "─".repeat(40));
            println!("{:<16} {}", "Total Ideas", summary.total_ideas);
            println!("{:<16} {}", "Embedded", summary.embedded);
            println!("{:<16} {}", "Dimensions", summary.dimensions);
            println!("{:<16} {}", "Model", summary.model);

            if !report.embeddings.is_empty() {
                println!();
                for entry in &report.embeddings {
                    let mark = if entry.has_embedding { "✓" } else { "◷" };
                    println!("  {} {}", mark, truncate(&entry.idea_title, 50));
                }
            }
            let pending = report.pending().count();
            if pending > 0 {
                eprintln!("\n{} idea(s) waiting for an embedding.", pending);
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}
