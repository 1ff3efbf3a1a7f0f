pub mod board;
mod callable;
pub mod chat;
pub mod idea;
pub mod project;
pub mod provider;
pub mod rag;

pub use callable::*;
