/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::{
    HEADER_AUTH_TOKEN, LIMITS_PATH, MAX_REAUTH_ATTEMPTS, USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::{ApiRequest, RequestMethod, ResourceType};
use crate::model::responses::{ApiResponse, BadRequestResponse};
use reqwest::Client as HttpInternalClient;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Builds the reqwest client shared by the auth exchange and resource requests
pub fn build_http_client(config: &Config) -> Result<HttpInternalClient, AppError> {
    Ok(HttpInternalClient::builder()
        .user_agent(USER_AGENT)
        .gzip(config.rest_api.accept_gzip)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?)
}

/// Session dispatcher for the cloud API
///
/// This client handles authentication internally:
/// - Login before the first request
/// - Endpoint discovery from the auth response
/// - A single re-authentication and replay when a token is rejected
///
/// Every call returns its own [`ApiResponse`].
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    debug: Arc<AtomicBool>,
}

impl HttpClient {
    /// Creates a new client without authenticating
    ///
    /// The first request triggers the authentication exchange.
    ///
    /// # Errors
    /// * `AppError::InvalidCredentials` if user name or API key are empty
    /// * `AppError::TransportError` if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.credentials.validate()?;
        let config = Arc::new(config);

        let http_client = build_http_client(&config)?;
        let debug = Arc::new(AtomicBool::new(config.rest_api.debug));
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone(), debug.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
            debug,
        })
    }

    /// Creates a new client and performs the initial authentication
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Performs the authentication exchange and returns the issued token
    pub async fn authenticate(&self) -> Result<String, AppError> {
        self.auth.authenticate().await
    }

    /// Makes a GET request
    pub async fn get(&self, resource: ResourceType, path: &str) -> Result<ApiResponse, AppError> {
        self.request(&ApiRequest::new(RequestMethod::Get, resource, path))
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post(
        &self,
        resource: ResourceType,
        path: &str,
        payload: Value,
    ) -> Result<ApiResponse, AppError> {
        self.request(&ApiRequest::new(RequestMethod::Post, resource, path).with_payload(payload))
            .await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put(
        &self,
        resource: ResourceType,
        path: &str,
        payload: Value,
    ) -> Result<ApiResponse, AppError> {
        self.request(&ApiRequest::new(RequestMethod::Put, resource, path).with_payload(payload))
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, resource: ResourceType, path: &str) -> Result<ApiResponse, AppError> {
        self.request(&ApiRequest::new(RequestMethod::Delete, resource, path))
            .await
    }

    /// Dispatches a request
    ///
    /// Authenticates first when no session is cached. A 401 renews the token
    /// and replays the request once; a second 401 yields `AppError::AuthExpired`.
    /// 400, 403, 404, 413 and 500 are mapped to errors, every other status is
    /// returned to the caller untouched.
    pub async fn request(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        // fail before any network traffic
        request.normalized_path()?;

        let mut session = self.auth.get_session().await?;
        let mut reauth_attempts = 0;

        loop {
            let response = self.send(&session, request).await?;

            if response.status != StatusCode::UNAUTHORIZED {
                return check_status(response);
            }

            if reauth_attempts >= MAX_REAUTH_ATTEMPTS {
                error!(
                    "Token rejected again after {} re-authentication(s): {:?} {}",
                    reauth_attempts, request.method, request.path
                );
                return Err(AppError::AuthExpired);
            }
            reauth_attempts += 1;

            warn!("Unauthorized, renewing token and retrying");
            session = self.auth.renew(&session.token).await?;
        }
    }

    /// Sends one request with the given session
    async fn send(&self, session: &Session, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        let url = request.resolve_url(session, self.config.balancer_url())?;
        let method: Method = request.method.into();
        let verbose = self.debug.load(Ordering::Relaxed);

        debug!("{} {}", method, url);
        if verbose {
            info!("url={} resource={}", url, request.resource);
        }

        let mut builder = self
            .http_client
            .request(method, &url)
            .header(HEADER_AUTH_TOKEN, session.token.as_str());

        if request.method.carries_body() {
            let payload = request.payload.clone().unwrap_or(Value::Null);
            if verbose {
                info!("payload={}", payload);
            }
            builder = builder.json(&payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Response status: {}", status);
        if verbose {
            info!("status={} body={}", status, body);
        }

        Ok(ApiResponse::new(status, body))
    }

    /// Retrieves the account limits document
    ///
    /// Returns the raw body on 200 or 203 and `None` on every other status.
    /// A 400 whose body is not a `badRequest` fault also yields `None`.
    /// Transport and authentication failures are still returned as errors.
    pub async fn get_limits(&self) -> Result<Option<String>, AppError> {
        match self.get(ResourceType::Server, LIMITS_PATH).await {
            Ok(response)
                if matches!(
                    response.status,
                    StatusCode::OK | StatusCode::NON_AUTHORITATIVE_INFORMATION
                ) =>
            {
                Ok(Some(response.body))
            }
            Ok(response) => {
                debug!("Limits not available, status {}", response.status);
                Ok(None)
            }
            Err(e) if e.is_status_error() || matches!(e, AppError::ParseError(_)) => {
                debug!("Limits not available: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Enables verbose output of URLs, payloads and response bodies
    pub fn enable_debug(&self) {
        self.debug.store(true, Ordering::Relaxed);
    }

    /// Disables verbose output
    pub fn disable_debug(&self) {
        self.debug.store(false, Ordering::Relaxed);
    }

    /// Whether verbose output is on
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Returns the cached token, if any
    pub async fn get_token(&self) -> Option<String> {
        self.auth.get_token().await
    }

    /// Replaces the cached token
    ///
    /// Before the first login the endpoints are still discovered, and the
    /// resulting session uses this token.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.auth.set_token(token).await
    }

    /// Gets the current session, authenticating if needed
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Logs out
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Maps error statuses to `AppError`, passing every other response through
///
/// 401 is not handled here; the dispatcher deals with it before calling this.
pub fn check_status(response: ApiResponse) -> Result<ApiResponse, AppError> {
    match response.status {
        StatusCode::BAD_REQUEST => {
            let fault = BadRequestResponse::parse(&response.body)?;
            error!(
                "Bad request: code {} - {} ({})",
                fault.code, fault.message, fault.details
            );
            Err(fault.into())
        }
        StatusCode::FORBIDDEN => {
            error!("Forbidden: {}", response.body);
            Err(AppError::AccessDenied)
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", response.body);
            Err(AppError::NotFound)
        }
        StatusCode::PAYLOAD_TOO_LARGE => {
            error!("Payload too large: {}", response.body);
            Err(AppError::PayloadTooLarge)
        }
        StatusCode::INTERNAL_SERVER_ERROR => {
            error!("Server error: {}", response.body);
            Err(AppError::ServerError)
        }
        _ => Ok(response),
    }
}
