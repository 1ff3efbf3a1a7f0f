//! RAG status panel: a read-only reflection of remote embedding coverage.
//!
//! Fetches only while visible with a project selected. No caching and no
//! retry; a failed fetch is logged and leaves the panel without data.

use serde::Serialize;
use uuid::Uuid;

use crate::connectors::EmbeddingStatusConnector;
use crate::models::EmbeddingsReport;

#[derive(Debug, Clone, PartialEq)]
pub enum RagPanelState {
    /// Never fetched, or the last fetch failed.
    NoData,
    Loaded(EmbeddingsReport),
}

/// Headline numbers of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RagSummary {
    pub total_ideas: usize,
    pub embedded: usize,
    pub dimensions: usize,
    pub model: String,
}

impl From<&EmbeddingsReport> for RagSummary {
    fn from(report: &EmbeddingsReport) -> Self {
        Self {
            total_ideas: report.total_ideas,
            embedded: report.embeddings_generated,
            dimensions: report.dimension(),
            model: report.model.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RagStatusPanel {
    project_id: Option<Uuid>,
    visible: bool,
    state: RagPanelState,
}

impl Default for RagStatusPanel {
    fn default() -> Self {
        Self {
            project_id: None,
            visible: false,
            state: RagPanelState::NoData,
        }
    }
}

impl RagStatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn project_id(&self) -> Option<Uuid> {
        self.project_id
    }

    pub fn state(&self) -> &RagPanelState {
        &self.state
    }

    /// Whether a fetch would be issued right now.
    pub fn should_fetch(&self) -> bool {
        self.visible && self.project_id.is_some()
    }

    /// Returns true when the change calls for a fetch.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed && self.should_fetch()
    }

    /// Returns true when the change calls for a fetch.
    pub fn set_project(&mut self, project_id: Option<Uuid>) -> bool {
        let changed = self.project_id != project_id;
        self.project_id = project_id;
        if changed {
            self.state = RagPanelState::NoData;
        }
        changed && self.should_fetch()
    }

    /// Nothing is rendered while hidden or without a project.
    pub fn view(&self) -> Option<&RagPanelState> {
        self.should_fetch().then_some(&self.state)
    }

    pub fn report(&self) -> Option<&EmbeddingsReport> {
        match &self.state {
            RagPanelState::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<RagSummary> {
        self.report().map(RagSummary::from)
    }

    /// Fetch the status if visible with a project. Returns whether a request
    /// was issued.
    pub async fn refresh(&mut self, connector: &dyn EmbeddingStatusConnector) -> bool {
        let Some(project_id) = self.project_id.filter(|_| self.visible) else {
            return false;
        };

        self.state = match connector.get_embeddings_status(&project_id).await {
            Ok(report) => {
                tracing::debug!(
                    project_id = %project_id,
                    embedded = report.embeddings_generated,
                    total = report.total_ideas,
                    "embedding status loaded"
                );
                RagPanelState::Loaded(report)
            }
            Err(err) => {
                tracing::error!(project_id = %project_id, error = %err, "Error fetching embeddings status");
                RagPanelState::NoData
            }
        };
        true
    }
}
