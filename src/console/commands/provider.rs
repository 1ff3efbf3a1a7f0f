use crate::app::AppEvent;
use crate::console::commands::CallableTrait;
use crate::console::{CommandError, GlobalOptions, Session};
use crate::models::AiProvider;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// provider show
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard provider show [--json]`
pub struct ShowProviderCommand {
    pub options: GlobalOptions,
}

impl ShowProviderCommand {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }
}

impl CallableTrait for ShowProviderCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let session = Session::open(&self.options).await?;
            let current = session.app.preferences().ai_provider;

            if session.json {
                return session.print_json(&session.app.preferences());
            }
            for provider in [AiProvider::Bedrock, AiProvider::Nvidia] {
                println!(
                    "{} {:<24} {:<14} {}",
                    if provider == current { "●" } else { "○" },
                    provider.label(),
                    provider.model_badge(),
                    provider.description()
                );
            }
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// provider set
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `ideaboard provider set <bedrock|nvidia>`
pub struct SetProviderCommand {
    pub options: GlobalOptions,
    pub provider: AiProvider,
}

impl SetProviderCommand {
    pub fn new(options: GlobalOptions, provider: AiProvider) -> Self {
        Self { options, provider }
    }
}

impl CallableTrait for SetProviderCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rt = Session::runtime()?;
        rt.block_on(async {
            let mut session = Session::open(&self.options).await?;
            session.dispatch(AppEvent::ChangeProvider(self.provider)).await?;
            session.save().await?;
            eprintln!(
                "AI provider set to {} ({}).",
                self.provider.label(),
                self.provider.model_badge()
            );
            Ok::<(), CommandError>(())
        })?;
        Ok(())
    }
}
