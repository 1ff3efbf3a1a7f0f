mod idea;
mod project;

pub use idea::*;
pub use project::*;
