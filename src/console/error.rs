use crate::app::AppError;
use crate::db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Workspace(#[from] DbError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error("failed to create async runtime: {0}")]
    Runtime(std::io::Error),
    #[error("could not encode output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}
