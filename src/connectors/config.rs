use serde::{Deserialize, Serialize};

/// Function slug the RAG edge function is deployed under.
pub const DEFAULT_FUNCTION_NAME: &str = "make-server-583f6cb2";

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub edge_function: EdgeFunctionConfig,
    pub chat: ChatServiceConfig,
    pub embeddings: EmbeddingServiceConfig,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            edge_function: EdgeFunctionConfig::default(),
            chat: ChatServiceConfig::default(),
            embeddings: EmbeddingServiceConfig::default(),
        }
    }
}

/// Location and credentials of the serverless function hosting chat + RAG.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeFunctionConfig {
    /// Full API base; wins over `supabase_project_id` when set
    pub base_url: Option<String>,
    /// Supabase project ref, e.g. `abcdefghijkl`
    pub supabase_project_id: Option<String>,
    pub function_name: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Public anon key sent as bearer token (from env: SUPABASE_ANON_KEY)
    #[serde(skip)]
    pub anon_key: Option<String>,
}

impl Default for EdgeFunctionConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            supabase_project_id: None,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            timeout_secs: 60,
            anon_key: None,
        }
    }
}

impl EdgeFunctionConfig {
    /// `https://{project}.supabase.co/functions/v1/{function}` unless a base
    /// URL is configured. `None` when neither is known.
    pub fn api_base(&self) -> Option<String> {
        if let Some(base) = self.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
            return Some(base.trim_end_matches('/').to_string());
        }
        self.supabase_project_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|project| {
                format!(
                    "https://{}.supabase.co/functions/v1/{}",
                    project.trim(),
                    self.function_name
                )
            })
    }

    pub fn load_env(&mut self) {
        if self.anon_key.is_none() {
            self.anon_key = std::env::var("SUPABASE_ANON_KEY").ok();
        }
        if self.supabase_project_id.is_none() {
            self.supabase_project_id = std::env::var("SUPABASE_PROJECT_ID").ok();
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatServiceConfig {
    /// Enable/disable the remote chat call
    pub enabled: bool,
}

impl Default for ChatServiceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingServiceConfig {
    /// Enable/disable the embedding status fetch
    pub enabled: bool,
}

impl Default for EmbeddingServiceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
