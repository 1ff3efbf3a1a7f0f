mod conversation;
mod embedding;
mod idea;
mod preferences;
mod project;
mod workspace;

pub use conversation::*;
pub use embedding::*;
pub use idea::*;
pub use preferences::*;
pub use project::*;
pub use workspace::*;
