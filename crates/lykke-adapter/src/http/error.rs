/*
[INPUT]:  Error sources (transport, HTTP status, URL, serialization, config)
[OUTPUT]: Structured error type for every client call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Main error type for the Lykke adapter
#[derive(Error, Debug)]
pub enum LykkeError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status; headers and body are kept as received
    #[error("HTTP status {status}: {}", String::from_utf8_lossy(.body))]
    Status {
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LykkeError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LykkeError::Status { status, .. } => Some(*status),
            LykkeError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the error came from the network layer (no usable response)
    pub fn is_transport(&self) -> bool {
        matches!(self, LykkeError::Http(_))
    }

    /// Headers of the failed response, if the server answered at all
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            LykkeError::Status { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Raw body of the failed response
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            LykkeError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Create a status error from a status code and response body
    pub fn status_error(status: StatusCode, body: impl Into<Bytes>) -> Self {
        LykkeError::Status {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Result type alias for Lykke operations
pub type Result<T> = std::result::Result<T, LykkeError>;
