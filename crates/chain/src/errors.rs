//! Error types for node access and state decoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Node request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Node returned status {status} for {context}")]
    NodeStatus {
        status: u16,
        context: String,
    },

    #[error("Application {0} not found on the network")]
    ApplicationNotFound(u64),

    #[error("Failed to decode global state: {0}")]
    StateDecode(String),

    #[error("Failed to parse node response: {0}")]
    ResponseParse(#[from] serde_json::Error),
}
