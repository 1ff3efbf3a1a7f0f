use uuid::Uuid;

use crate::app::AppEvent;
use crate::console::commands::CallableTrait;
use crate::console::progress;
use crate::console::{CommandError, GlobalOptions, Session};
use crate::models::Role;

/// `ideaboard chat <MESSAGE> [--project <ID>] [--continue]`
///
/// Sends one message to the assistant and prints the reply. With
/// `--continue` the latest stored conversation of the project is resumed,
/// otherwise a fresh one starts. Transcripts are only kept when a project
/// is selected. `--project` scopes this message only; the stored current
/// project stays as it was.
pub struct ChatCommand {
    pub options: GlobalOptions,
    pub project: Option<Uuid>,
    pub message: String,
    pub resume: bool,
}

impl ChatCommand {
    pub fn new(options: GlobalOptions, project: Option<Uuid>, message: String, resume: bool) -> Self {
        Self {
            options,
            project,
            message,
            resume,
        }
    }
}

impl CallableTrait for ChatCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            if let Some(id) = self.project {
                session.dispatch(AppEvent::SelectProject(id)).await?;
            }

            if self.resume {
                let latest = session
                    .app
                    .current_project()
                    .and_then(|p| p.conversations.iter().max_by_key(|c| c.updated_at))
                    .map(|c| c.id);
                match latest {
                    Some(id) => session.dispatch(AppEvent::ResumeConversation(id)).await?,
                    None => tracing::debug!("no stored conversation to resume"),
                }
            }

            let has_project = session.app.current_project().is_some();
            let chat = session.app.chat();
            if !session.json {
                let badge = chat.context_badge(has_project).unwrap_or("No project");
                eprintln!("{} · {}", chat.provider().label(), badge);
            }

            let pb = progress::thinking_spinner(chat.provider_badge(), session.json);
            let sent = session
                .dispatch(AppEvent::SendChatMessage(self.message.clone()))
                .await;
            if let Err(err) = sent {
                progress::finish_error(&pb, &err.to_string());
                return Err(err);
            }
            pb.finish_and_clear();
            session.save_keeping_selection().await?;

            let reply = session
                .app
                .chat()
                .messages()
                .last()
                .filter(|m| m.role == Role::Assistant);
            match reply {
                Some(message) if session.json => session.print_json(message)?,
                Some(message) => println!("{}", message.content),
                None => {}
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}
