use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Embedding coverage of one idea, as computed by the remote RAG pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingStatus {
    pub idea_id: Uuid,
    pub idea_title: String,
    pub has_embedding: bool,
    #[serde(default)]
    pub embedding_dimension: usize,
}

/// Body of `GET /projects/{id}/embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingsReport {
    pub total_ideas: usize,
    pub embeddings_generated: usize,
    #[serde(default)]
    pub embeddings: Vec<EmbeddingStatus>,
    #[serde(default)]
    pub model: String,
}

impl EmbeddingsReport {
    /// Dimension of the first embedded idea, 0 when nothing is embedded yet.
    pub fn dimension(&self) -> usize {
        self.embeddings
            .iter()
            .find(|e| e.has_embedding)
            .map(|e| e.embedding_dimension)
            .unwrap_or(0)
    }

    pub fn pending(&self) -> impl Iterator<Item = &EmbeddingStatus> {
        self.embeddings.iter().filter(|e| !e.has_embedding)
    }
}
