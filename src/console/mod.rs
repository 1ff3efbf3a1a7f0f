pub mod commands;
pub mod error;
pub mod progress;
mod session;

pub use error::CommandError;
pub use session::{GlobalOptions, Session};
