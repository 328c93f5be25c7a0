//! Error types for the swarmscope engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwarmError>;

#[derive(Error, Debug)]
pub enum SwarmError {
    /// The dataset violates a structural invariant (duplicate sample, unknown
    /// time point, unordered timeline). Fatal for the load.
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    /// Playback speed multiplier was zero, negative or not finite.
    #[error("Invalid speed multiplier {0}: must be positive and finite")]
    InvalidSpeed(f64),

    /// Battery range bounds out of order or outside [0, 100].
    #[error("Invalid battery range [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },

    /// A state label that is not part of the configured vocabulary.
    #[error("Unknown state label: {0:?}")]
    UnknownState(String),

    #[error("Timeline has no time points")]
    EmptyTimeline,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SwarmError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        SwarmError::MalformedDataset(msg.into())
    }
}
