/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Raw outcome of an API call
///
/// Each call returns its own value; nothing is kept on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as received (already decompressed)
    pub body: String,
}

impl ApiResponse {
    /// Creates a response value
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Fault object carried by 400 responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadRequestFault {
    /// Fault code
    pub code: i64,
    /// Fault message
    pub message: String,
    /// Fault details
    pub details: String,
}

/// Envelope of a 400 response: `{"badRequest": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadRequestResponse {
    /// The fault itself
    #[serde(rename = "badRequest")]
    pub bad_request: BadRequestFault,
}

impl BadRequestResponse {
    /// Decodes a 400 body into the typed fault
    ///
    /// # Errors
    /// `AppError::ParseError` if the body is not a well formed `badRequest` document
    pub fn parse(body: &str) -> Result<BadRequestFault, AppError> {
        serde_json::from_str::<BadRequestResponse>(body)
            .map(|r| r.bad_request)
            .map_err(|e| AppError::ParseError(format!("invalid badRequest body: {e}")))
    }
}

impl From<BadRequestFault> for AppError {
    fn from(f: BadRequestFault) -> Self {
        AppError::BadRequest {
            code: f.code,
            message: f.message,
            details: f.details,
        }
    }
}
