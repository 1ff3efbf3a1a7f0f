//! External Service Connectors
//!
//! Adapters for the serverless edge function that hosts the LLM chat and
//! the RAG embedding pipeline. Everything remote goes through a connector
//! trait so the application state can be driven by mocks in tests.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `{service}/connector.rs` → allows mocking in tests
//! 2. Implement HTTP client in `{service}/client.rs`
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Inject trait objects into `AppState` → state code never sees HTTP
//!
//! ## Testing
//!
//! ```ignore
//! let chat = Arc::new(MockChatConnector::replying(["Sure!"]));
//! let embeddings = Arc::new(MockEmbeddingStatusConnector::failing());
//! let mut app = AppState::new(Workspace::default(), chat, embeddings);
//! ```

pub mod chat_service;
pub mod config;
pub mod embedding_service;
pub mod errors;
mod offline;

use std::sync::Arc;

pub use chat_service::{ChatConnector, ChatRequest, ChatServiceClient};
pub use config::{ChatServiceConfig, ConnectorConfig, EdgeFunctionConfig, EmbeddingServiceConfig};
pub use embedding_service::{EmbeddingStatusClient, EmbeddingStatusConnector};
pub use errors::ConnectorError;
pub use offline::OfflineConnector;

/// Initialize the chat connector from config.
///
/// Falls back to an [`OfflineConnector`] when the service is disabled or the
/// edge function location is unknown.
pub fn init_chat_service(config: &ConnectorConfig) -> Arc<dyn ChatConnector> {
    if !config.chat.enabled {
        tracing::warn!("Chat connector disabled - replies will report the service as offline");
        return Arc::new(OfflineConnector::new("chat service is disabled"));
    }
    let Some(base_url) = config.edge_function.api_base() else {
        tracing::warn!("No edge function location configured - chat is offline");
        return Arc::new(OfflineConnector::new(
            "edge function location is not configured (set SUPABASE_PROJECT_ID)",
        ));
    };

    match ChatServiceClient::new(&base_url, &config.edge_function) {
        Ok(client) => {
            tracing::info!("Initializing chat connector: {}", base_url);
            Arc::new(client)
        }
        Err(err) => {
            tracing::error!("Failed to build chat client: {}", err);
            Arc::new(OfflineConnector::new(err.to_string()))
        }
    }
}

/// Initialize the embedding status connector from config.
pub fn init_embedding_service(config: &ConnectorConfig) -> Arc<dyn EmbeddingStatusConnector> {
    if !config.embeddings.enabled {
        tracing::warn!("Embedding status connector disabled");
        return Arc::new(OfflineConnector::new("embedding status is disabled"));
    }
    let Some(base_url) = config.edge_function.api_base() else {
        tracing::warn!("No edge function location configured - embedding status is offline");
        return Arc::new(OfflineConnector::new(
            "edge function location is not configured (set SUPABASE_PROJECT_ID)",
        ));
    };

    match EmbeddingStatusClient::new(&base_url, &config.edge_function) {
        Ok(client) => {
            tracing::info!("Initializing embedding status connector: {}", base_url);
            Arc::new(client)
        }
        Err(err) => {
            tracing::error!("Failed to build embedding status client: {}", err);
            Arc::new(OfflineConnector::new(err.to_string()))
        }
    }
}
