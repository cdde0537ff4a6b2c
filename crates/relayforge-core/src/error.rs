//! Error types for RelayForge

use thiserror::Error;

/// Main error type for RelayForge operations
#[derive(Debug, Error)]
pub enum RelayForgeError {
    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record failed validation
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for RelayForge operations
pub type Result<T> = std::result::Result<T, RelayForgeError>;

/// Error raised when raw input cannot become a well-formed time record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unknown stroke: {0}")]
    UnknownStroke(String),

    #[error("unsupported distance: {0}")]
    UnsupportedDistance(u32),

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("invalid time '{0}'")]
    InvalidTime(String),

    #[error("first-50 splits must be derived from a parent record")]
    First50WithoutParent,

    #[error("cannot derive a first-50 split from a {distance} {parent_source} record")]
    InvalidFirst50Parent {
        distance: u16,
        parent_source: &'static str,
    },

    #[error("first-50 split {split} is slower than its parent time {parent}")]
    SplitExceedsParent { split: String, parent: String },
}
