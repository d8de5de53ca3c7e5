use thiserror::Error;

/// Main error type for the ranking crate.
///
/// The comparator itself never fails; these cover the surfaces around it
/// (decoding records, reading configuration).
#[derive(Error, Debug)]
pub enum RankingError {
    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognised tie policy name
    #[error("Unknown tie policy '{0}' (expected 'first-wins' or 'equal')")]
    UnknownTiePolicy(String),

    /// Invalid configuration value
    #[error("Configuration error in '{key}': {message}")]
    Config { key: String, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RankingError>;
