//! Errors raised while reading a workload specification

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// The document could not be read from disk
    #[error("Failed to read workload spec {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid workload description
    #[error("Invalid workload spec: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Workload spec is missing required field `{0}`")]
    MissingField(String),

    #[error("Container `{container}` mounts undeclared volume `{volume}`")]
    UnknownVolume { container: String, volume: String },
}

impl SpecError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}
