use serde::Deserialize;
use std::path::PathBuf;

use crate::connectors::ConnectorConfig;
use crate::models::AiProvider;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub connectors: ConnectorConfig,
    /// JSON snapshot the console loads and saves.
    pub workspace_path: PathBuf,
    /// Provider used until the user picks one.
    pub default_provider: AiProvider,
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connectors: ConnectorConfig::default(),
            workspace_path: PathBuf::from("ideaboard.json"),
            default_provider: AiProvider::default(),
            log_level: "warn".to_string(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.{yaml,toml,json} is optional; IDEABOARD__* env vars win over it
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("IDEABOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // Secrets never live in the configuration file
    config.connectors.edge_function.load_env();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sources_fall_back_to_defaults() {
        let settings: Settings = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.workspace_path, PathBuf::from("ideaboard.json"));
        assert_eq!(settings.default_provider, AiProvider::Bedrock);
        assert_eq!(settings.connectors.edge_function.timeout_secs, 60);
    }

    #[test]
    fn nested_values_override_defaults() {
        let settings: Settings = config::Config::builder()
            .set_override("default_provider", "nvidia")
            .unwrap()
            .set_override("connectors.edge_function.supabase_project_id", "abcd")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.default_provider, AiProvider::Nvidia);
        assert_eq!(
            settings.connectors.edge_function.api_base().as_deref(),
            Some("https://abcd.supabase.co/functions/v1/make-server-583f6cb2")
        );
    }
}
