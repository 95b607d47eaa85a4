/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend subsystem targeted by a request
///
/// Selects the base endpoint and the URL construction rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Compute servers, images, flavors and limits
    #[default]
    Server,
    /// Load balancers (account id is spliced into the URL)
    Balancer,
    /// Object storage
    Storage,
    /// CDN management
    Cdn,
}

impl ResourceType {
    /// Short lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Server => "server",
            ResourceType::Balancer => "balancer",
            ResourceType::Storage => "storage",
            ResourceType::Cdn => "cdn",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP verb of a resource request
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    /// Read a resource
    #[default]
    Get,
    /// Create a resource, payload sent as JSON body
    Post,
    /// Update a resource, payload sent as JSON body
    Put,
    /// Remove a resource
    Delete,
}

impl RequestMethod {
    /// Whether the payload of the request goes out as a body
    #[must_use]
    pub fn carries_body(&self) -> bool {
        matches!(self, RequestMethod::Post | RequestMethod::Put)
    }
}

impl From<RequestMethod> for Method {
    fn from(m: RequestMethod) -> Self {
        match m {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
            RequestMethod::Put => Method::PUT,
            RequestMethod::Delete => Method::DELETE,
        }
    }
}

/// Description of a single API call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: RequestMethod,
    /// Target subsystem
    pub resource: ResourceType,
    /// Path appended to the resource base endpoint, e.g. `/servers/detail`
    pub path: String,
    /// Optional JSON payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without payload
    pub fn new(method: RequestMethod, resource: ResourceType, path: impl Into<String>) -> Self {
        Self {
            method,
            resource,
            path: path.into(),
            payload: None,
        }
    }

    /// Attaches a JSON payload
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Path with a guaranteed leading slash
    ///
    /// # Errors
    /// `AppError::InvalidInput` if no path was set
    pub fn normalized_path(&self) -> Result<String, AppError> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(AppError::InvalidInput(
                "resource path must be set before dispatching".to_string(),
            ));
        }
        if path.starts_with('/') {
            Ok(path.to_string())
        } else {
            Ok(format!("/{path}"))
        }
    }

    /// Resolves the absolute URL of this request
    ///
    /// Load balancer URLs are `balancer_url + "/" + account_id + path`, every
    /// other category is `discovered endpoint + path`.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` if the path is empty
    /// * `AppError::MissingEndpoint` if the session lacks what the category needs
    pub fn resolve_url(&self, session: &Session, balancer_url: &str) -> Result<String, AppError> {
        let path = self.normalized_path()?;
        let base = match self.resource {
            ResourceType::Balancer => {
                let account_id = session
                    .account_id
                    .as_deref()
                    .ok_or(AppError::MissingEndpoint(self.resource))?;
                return Ok(format!(
                    "{}/{}{}",
                    balancer_url.trim_end_matches('/'),
                    account_id,
                    path
                ));
            }
            ResourceType::Server => session.server_url.as_deref(),
            ResourceType::Storage => session.storage_url.as_deref(),
            ResourceType::Cdn => session.cdn_url.as_deref(),
        };
        let base = base.ok_or(AppError::MissingEndpoint(self.resource))?;
        Ok(format!("{}{}", base.trim_end_matches('/'), path))
    }
}
