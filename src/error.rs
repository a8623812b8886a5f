//! @acp:module "Errors"
//! @acp:summary "Error types for the roadmap engine I/O boundary"
//! @acp:domain roadmap
//! @acp:layer model
//!
//! The computational core never fails. These errors only surface when
//! reading configuration or recommendation files, or writing a roadmap.

use thiserror::Error;

/// @acp:summary "Errors raised while loading or saving roadmap data"
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Result alias used across the I/O boundary
pub type Result<T> = std::result::Result<T, RoadmapError>;
