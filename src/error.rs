//! Error type shared by every SharePoint operation

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by `reqwest`
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Local file could not be read
    Io(std::io::Error),
    /// SharePoint answered with a status outside the configured success set
    Api {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body, usually an OData error document
        body: String,
    },
    /// The server did not accept the credentials
    Unauthorized,
    /// Malformed call arguments or configuration
    InvalidInput(String),
    /// Response body did not have the expected OData shape
    Deserialization(String),
    /// NTLM handshake could not be completed
    Ntlm(String),
}

impl AppError {
    /// Status code carried by an API failure, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// True when SharePoint reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api { status, body } => {
                write!(f, "unexpected status code: {status}")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Ntlm(msg) => write!(f, "ntlm error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}
