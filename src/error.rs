//! Error types for loading CV documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the input boundary.
///
/// Rendering itself never fails; these only come from reading or decoding a serialized tree.
#[derive(Debug, Error)]
pub enum VitaeError {
    /// The input file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input was not a valid JSON document tree
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not a valid YAML document tree
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a supported input format
    #[error("unknown input format '{0}' (expected json, yaml or yml)")]
    UnknownInputFormat(String),
}

/// Result type alias for input operations.
pub type VitaeResult<T> = Result<T, VitaeError>;

impl VitaeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
