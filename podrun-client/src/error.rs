//! Error types for the Kubernetes client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the control plane
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed before the API server answered with a status
    #[error("Kubernetes request failed: {0}")]
    Kube(#[source] kube::Error),

    /// API server returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message returned by the API server
        message: String,
    },

    /// The API server answered with an object we cannot use
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Cluster connection settings could not be loaded
    #[error("Cluster configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

impl From<kube::Error> for ClientError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(response) => Self::ApiError {
                status: response.code,
                message: response.message,
            },
            other => Self::Kube(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    #[test]
    fn test_classification() {
        let not_found = ClientError::api_error(404, "pods \"x\" not found");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let conflict = ClientError::api_error(409, "already exists");
        assert!(!conflict.is_not_found());
        assert!(conflict.is_client_error());

        let unavailable = ClientError::api_error(503, "etcd unavailable");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());

        assert!(ClientError::NotFound("pod".into()).is_not_found());
        assert!(!ClientError::Config("no kubeconfig".into()).is_not_found());
    }

    #[test]
    fn test_api_errors_keep_their_status() {
        let err: ClientError = kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "pods \"train-abcde\" is forbidden".to_string(),
            reason: "Forbidden".to_string(),
            code: 403,
        })
        .into();

        assert!(matches!(err, ClientError::ApiError { status: 403, .. }));
        assert!(err.to_string().contains("forbidden"));
    }
}
