use thiserror::Error;

/// Errors raised by the API client layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("HTTP {status} from {path}")]
    Status {
        status: u16,
        path: String,
        body: serde_json::Value,
    },

    /// The request never produced a response (connect, TLS, timeout, ...)
    #[error("transport failure for {path}: {message}")]
    Transport { path: String, message: String },

    /// The response body was not valid JSON
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),

    /// A registry builder was called with the wrong number of arguments
    #[error("endpoint '{name}' takes {expected} argument(s), got {got}")]
    EndpointArity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

impl ApiError {
    /// HTTP status carried by this error, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
