//! Error types for the coaching provider.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    ProviderStatus(u16),

    #[error("Provider response missing completion text")]
    EmptyCompletion,

    #[error("Provider API key is not configured")]
    MissingApiKey,
}
