//! RAG status: how much of a project's ideas the remote pipeline has embedded.

mod client;
mod connector;
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::EmbeddingStatusClient;
pub use connector::EmbeddingStatusConnector;
