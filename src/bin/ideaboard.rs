//! `ideaboard` console: projects, ideas, the kanban board and the AI
//! assistant from the terminal.
//!
//! ```text
//! ideaboard project create --title "Habit tracker"
//! ideaboard idea add --type feature --title "Streaks" --status planning
//! ideaboard board
//! ideaboard chat "What should the MVP include?"
//! ideaboard rag
//! ideaboard provider set nvidia
//! ```

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use ideaboard::configuration::get_configuration;
use ideaboard::console::commands::{board, chat, idea, project, provider, rag, CallableTrait};
use ideaboard::console::GlobalOptions;
use ideaboard::forms::IdeaPatch;
use ideaboard::models::{AiProvider, IdeaStatus, IdeaType};
use ideaboard::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(
    name = "ideaboard",
    version,
    about = "Product ideation board with an AI assistant"
)]
struct Cli {
    /// Workspace file (default: ideaboard.json or IDEABOARD__WORKSPACE_PATH)
    #[arg(long, global = true, value_name = "FILE", env = "IDEABOARD_WORKSPACE")]
    workspace: Option<PathBuf>,
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create, list, select and delete projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Add and edit ideas of a project
    Idea {
        #[command(subcommand)]
        command: IdeaCommands,
    },
    /// Show the kanban board of a project
    Board {
        /// Project id for this call only (default: the current project)
        #[arg(long, value_name = "ID")]
        project: Option<Uuid>,
    },
    /// Send a message to the AI assistant
    Chat {
        message: String,
        /// Project id for this call only (default: the current project)
        #[arg(long, value_name = "ID")]
        project: Option<Uuid>,
        /// Continue the latest conversation of the project
        #[arg(long = "continue")]
        resume: bool,
    },
    /// Show embedding coverage of a project in the RAG index
    Rag {
        /// Project id for this call only (default: the current project)
        #[arg(long, value_name = "ID")]
        project: Option<Uuid>,
    },
    /// Show or change the AI provider
    Provider {
        #[command(subcommand)]
        command: ProviderCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ProjectCommands {
    /// Create a project and make it current
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List projects (* marks the current one)
    List,
    /// Make a project current
    Select { id: Uuid },
    /// Delete a project with its ideas and conversations
    Delete {
        id: Uuid,
        /// Actually delete; without it only a summary is shown
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Debug, Subcommand)]
enum IdeaCommands {
    /// Add an idea to a project
    Add {
        #[arg(long)]
        title: String,
        /// idea, goal, feature or task
        #[arg(long = "type", value_name = "TYPE", default_value = "idea")]
        idea_type: IdeaType,
        /// brainstorm, planning, in-progress or completed
        #[arg(long, default_value = "brainstorm")]
        status: IdeaStatus,
        #[arg(long)]
        description: Option<String>,
        /// Project id for this call only (default: the current project)
        #[arg(long, value_name = "ID")]
        project: Option<Uuid>,
    },
    /// Change fields of an idea
    Update {
        id: Uuid,
        #[arg(long = "type", value_name = "TYPE")]
        idea_type: Option<IdeaType>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<IdeaStatus>,
    },
}

#[derive(Debug, Subcommand)]
enum ProviderCommands {
    /// Show the available providers and the selected one
    Show,
    /// Select the provider used for chat
    Set { provider: AiProvider },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Console logs go to stderr so stdout stays usable for --json
    let log_level = get_configuration()
        .map(|settings| settings.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    let subscriber = get_subscriber("ideaboard".into(), log_level, std::io::stderr);
    init_subscriber(subscriber)?;

    let command = get_command(cli);
    command.call().map_err(|err| anyhow!("{}", err))
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    let options = GlobalOptions {
        workspace: cli.workspace,
        json: cli.json,
    };

    match cli.command {
        Commands::Project { command } => match command {
            ProjectCommands::Create { title, description } => Box::new(
                project::CreateProjectCommand::new(options, title, description),
            ),
            ProjectCommands::List => Box::new(project::ListProjectsCommand::new(options)),
            ProjectCommands::Select { id } => {
                Box::new(project::SelectProjectCommand::new(options, id))
            }
            ProjectCommands::Delete { id, confirm } => {
                Box::new(project::DeleteProjectCommand::new(options, id, confirm))
            }
        },
        Commands::Idea { command } => match command {
            IdeaCommands::Add {
                title,
                idea_type,
                status,
                description,
                project,
            } => Box::new(idea::AddIdeaCommand::new(
                options,
                project,
                idea_type,
                title,
                description,
                status,
            )),
            IdeaCommands::Update {
                id,
                idea_type,
                title,
                description,
                status,
            } => Box::new(idea::UpdateIdeaCommand::new(
                options,
                id,
                IdeaPatch {
                    idea_type,
                    title,
                    description,
                    status,
                },
            )),
        },
        Commands::Board { project } => Box::new(board::BoardCommand::new(options, project)),
        Commands::Chat {
            message,
            project,
            resume,
        } => Box::new(chat::ChatCommand::new(options, project, message, resume)),
        Commands::Rag { project } => Box::new(rag::RagStatusCommand::new(options, project)),
        Commands::Provider { command } => match command {
            ProviderCommands::Show => Box::new(provider::ShowProviderCommand::new(options)),
            ProviderCommands::Set { provider: choice } => {
                Box::new(provider::SetProviderCommand::new(options, choice))
            }
        },
    }
}
