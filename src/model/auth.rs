/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::constants::{HEADER_AUTH_TOKEN, HEADER_CDN_URL, HEADER_SERVER_URL, HEADER_STORAGE_URL};
use crate::error::AppError;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

static ACCOUNT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([0-9]+)$").expect("account id pattern is valid"));

/// Extracts the numeric account id that ends a management URL
///
/// `https://servers.api.example.com/v1.0/998877` yields `998877`. Trailing
/// slashes are ignored. Returns `None` when the path does not end in digits.
#[must_use]
pub fn extract_account_id(url: &str) -> Option<String> {
    ACCOUNT_ID_RE
        .captures(url.trim().trim_end_matches('/'))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Values published by the authentication endpoint in its response headers
///
/// Every header may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthHeaders {
    /// X-Auth-Token
    pub token: Option<String>,
    /// X-Server-Management-Url
    pub server_url: Option<String>,
    /// X-Storage-Url
    pub storage_url: Option<String>,
    /// X-CDN-Management-Url
    pub cdn_url: Option<String>,
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AuthHeaders {
    /// Reads the authentication headers (names are case-insensitive)
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            token: header_value(headers, HEADER_AUTH_TOKEN),
            server_url: header_value(headers, HEADER_SERVER_URL),
            storage_url: header_value(headers, HEADER_STORAGE_URL),
            cdn_url: header_value(headers, HEADER_CDN_URL),
        }
    }

    /// Turns the headers into a session
    ///
    /// # Errors
    /// `AppError::AuthenticationFailed` when no token was issued
    pub fn into_session(self) -> Result<Session, AppError> {
        let token = match self.token {
            Some(token) => token,
            None => {
                return Err(AppError::AuthenticationFailed(format!(
                    "{HEADER_AUTH_TOKEN} header not found in response"
                )));
            }
        };

        let account_id = self.server_url.as_deref().and_then(extract_account_id);
        match (&self.server_url, &account_id) {
            (Some(url), None) => warn!("No account id at the end of {}", url),
            (None, _) => warn!("{} header not found in response", HEADER_SERVER_URL),
            _ => debug!("Account id: {:?}", account_id),
        }

        Ok(Session {
            token,
            server_url: self.server_url,
            storage_url: self.storage_url,
            cdn_url: self.cdn_url,
            account_id,
            authenticated_at: Utc::now(),
        })
    }
}
