/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error type shared by every operation of the client

use crate::model::requests::ResourceType;
use std::fmt;

/// Errors returned by the cloud API client
#[derive(Debug)]
pub enum AppError {
    /// User id or API key missing or empty
    InvalidCredentials(String),
    /// Region code that has no known endpoint
    UnknownRegion(String),
    /// The authentication exchange did not produce a usable session
    AuthenticationFailed(String),
    /// The token was rejected again right after re-authenticating
    AuthExpired,
    /// HTTP 400 with the decoded fault body
    BadRequest {
        /// Fault code reported by the API
        code: i64,
        /// Human readable message
        message: String,
        /// Additional details
        details: String,
    },
    /// HTTP 403
    AccessDenied,
    /// HTTP 404
    NotFound,
    /// HTTP 413
    PayloadTooLarge,
    /// HTTP 500
    ServerError,
    /// No endpoint was discovered for the requested resource category
    MissingEndpoint(ResourceType),
    /// Caller supplied an unusable argument
    InvalidInput(String),
    /// Response body did not have the expected shape
    ParseError(String),
    /// Connection, TLS, timeout or other transport-level failure
    TransportError(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidCredentials(msg) => write!(f, "invalid credentials: {msg}"),
            AppError::UnknownRegion(code) => write!(f, "unknown region: {code}"),
            AppError::AuthenticationFailed(msg) => write!(f, "authentication failed: {msg}"),
            AppError::AuthExpired => write!(f, "auth token expired"),
            AppError::BadRequest {
                code,
                message,
                details,
            } => write!(
                f,
                "bad request: code {code}, message: {message}, details: {details}"
            ),
            AppError::AccessDenied => write!(f, "access denied"),
            AppError::NotFound => write!(f, "not found"),
            AppError::PayloadTooLarge => write!(f, "payload too large"),
            AppError::ServerError => write!(f, "server error"),
            AppError::MissingEndpoint(resource) => {
                write!(f, "no endpoint discovered for {resource}")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::ParseError(msg) => write!(f, "parse error: {msg}"),
            AppError::TransportError(e) => write!(f, "transport error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::TransportError(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::TransportError(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl AppError {
    /// Returns true for the errors produced from an HTTP status code
    #[must_use]
    pub fn is_status_error(&self) -> bool {
        matches!(
            self,
            AppError::BadRequest { .. }
                | AppError::AccessDenied
                | AppError::NotFound
                | AppError::PayloadTooLarge
                | AppError::ServerError
        )
    }
}
