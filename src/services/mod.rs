pub mod board;
pub mod chat_panel;
pub mod project_store;
pub mod rag_status;

pub use board::{group_by_status, BoardColumn};
pub use chat_panel::{ChatError, ChatPanel, ChatState};
pub use project_store::{ProjectStore, StoreError};
pub use rag_status::{RagPanelState, RagStatusPanel, RagSummary};
