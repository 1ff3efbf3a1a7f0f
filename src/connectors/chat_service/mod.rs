//! The remote LLM call. Retrieval, prompt construction and the choice of
//! model all happen server-side; this side only ships the transcript.

mod client;
mod connector;
pub mod mock;
mod types;

#[cfg(test)]
mod tests;

pub use client::ChatServiceClient;
pub use connector::ChatConnector;
pub use types::{ChatReply, ChatRequest};
