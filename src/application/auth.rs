/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Authentication module for the cloud API
//!
//! This module handles:
//! - Token authentication with `X-Auth-User` / `X-Auth-Key`
//! - Discovery of the compute, storage and CDN endpoints from the auth response
//! - Caching of the session and renewal when the server rejects the token

use crate::application::config::Config;
use crate::constants::{HEADER_AUTH_KEY, HEADER_AUTH_USER};
use crate::error::AppError;
use crate::model::auth::AuthHeaders;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Session information for authenticated requests
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Bearer token sent as `X-Auth-Token`
    pub token: String,
    /// Compute management endpoint
    pub server_url: Option<String>,
    /// Object storage endpoint
    pub storage_url: Option<String>,
    /// CDN management endpoint
    pub cdn_url: Option<String>,
    /// Numeric account id taken from the end of the compute endpoint
    pub account_id: Option<String>,
    /// When the token was obtained
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session holding only a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            server_url: None,
            storage_url: None,
            cdn_url: None,
            account_id: None,
            authenticated_at: Utc::now(),
        }
    }

    /// Seconds since the token was obtained
    #[must_use]
    pub fn age_secs(&self) -> i64 {
        (Utc::now() - self.authenticated_at).num_seconds()
    }
}

/// Authentication manager
///
/// Holds the cached session. No session means the next request authenticates
/// first; a rejected token is renewed through [`Auth::renew`].
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
    // token set before any endpoint discovery, adopted by the next login
    pending_token: RwLock<Option<String>>,
    login_lock: Mutex<()>,
    debug: Arc<AtomicBool>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and endpoints
    /// * `client` - HTTP client used for the authentication exchange
    /// * `debug` - Shared flag enabling verbose output
    pub fn new(config: Arc<Config>, client: Client, debug: Arc<AtomicBool>) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
            pending_token: RwLock::new(None),
            login_lock: Mutex::new(()),
            debug,
        }
    }

    /// Gets the current session, logging in first if there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        if let Some(sess) = self.current().await {
            return Ok(sess);
        }

        let _guard = self.login_lock.lock().await;
        // another caller may have logged in while we waited
        if let Some(sess) = self.current().await {
            return Ok(sess);
        }

        info!("No active session, logging in");
        self.login_locked().await
    }

    /// Performs the authentication exchange and returns the issued token
    pub async fn authenticate(&self) -> Result<String, AppError> {
        Ok(self.login().await?.token)
    }

    /// Performs the authentication exchange and stores the new session
    pub async fn login(&self) -> Result<Session, AppError> {
        let _guard = self.login_lock.lock().await;
        self.login_locked().await
    }

    /// Replaces a token the server rejected
    ///
    /// If the cached token already differs from `stale_token` another caller
    /// renewed it and that session is returned without a new exchange.
    pub async fn renew(&self, stale_token: &str) -> Result<Session, AppError> {
        let _guard = self.login_lock.lock().await;
        if let Some(sess) = self.current().await {
            if sess.token != stale_token {
                debug!("Token already renewed by another request");
                return Ok(sess);
            }
        }

        warn!("Token rejected, re-authenticating");
        *self.session.write().await = None;
        self.login_locked().await
    }

    async fn login_locked(&self) -> Result<Session, AppError> {
        let url = self.config.auth_url();
        let credentials = &self.config.credentials;

        debug!("Sending auth request to: {}", url);
        if self.debug.load(Ordering::Relaxed) {
            info!(
                "auth url={} region={} user={}",
                url,
                credentials.region.code(),
                credentials.username
            );
        }

        let response = self
            .client
            .get(url)
            .header(HEADER_AUTH_USER, credentials.username.as_str())
            .header(HEADER_AUTH_KEY, credentials.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        debug!("Auth response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Authentication failed with status {}: {}", status, body);
            return Err(AppError::AuthenticationFailed(format!(
                "auth endpoint returned {status}"
            )));
        }

        let mut session = AuthHeaders::from_headers(response.headers()).into_session()?;
        if let Some(token) = self.pending_token.write().await.take() {
            debug!("Keeping the token set before discovery");
            session.token = token;
        }

        *self.session.write().await = Some(session.clone());

        info!(
            "✓ Login successful, account: {}",
            session.account_id.as_deref().unwrap_or("unknown")
        );
        Ok(session)
    }

    async fn current(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Returns the cached token, if any
    pub async fn get_token(&self) -> Option<String> {
        match self.session.read().await.as_ref() {
            Some(sess) => Some(sess.token.clone()),
            None => self.pending_token.read().await.clone(),
        }
    }

    /// Replaces the cached token, keeping discovered endpoints
    ///
    /// Without a session the token is held until the next login discovers the
    /// endpoints, and that session then carries this token.
    pub async fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut session = self.session.write().await;
        match session.as_mut() {
            Some(sess) => {
                sess.token = token;
                sess.authenticated_at = Utc::now();
            }
            None => *self.pending_token.write().await = Some(token),
        }
    }

    /// Installs a complete session
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    /// Whether a session is cached
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Clears the current session
    pub async fn logout(&self) {
        info!("Logging out");
        *self.session.write().await = None;
        *self.pending_token.write().await = None;
    }
}
