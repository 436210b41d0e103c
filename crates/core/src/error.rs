use thiserror::Error;

/// Rejected chunking configuration. Raised before any document is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value}")]
    InvalidThreshold { name: &'static str, value: usize },

    #[error("{min_name} ({min}) must be less than {max_name} ({max})")]
    InvertedBounds {
        min_name: &'static str,
        min: usize,
        max_name: &'static str,
        max: usize,
    },
}
