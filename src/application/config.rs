/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Configuration for the cloud API client
//!
//! Credentials and regions are validated when the configuration is built, so a
//! `Config` value always refers to a known authentication endpoint.

use crate::constants::{
    DEFAULT_TIMEOUT_SECS, DFW_BALANCER_URL, ORD_BALANCER_URL, UK_AUTH_URL, US_AUTH_URL,
};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Region hosting the account, which selects the authentication endpoint
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    /// United States
    #[default]
    Us,
    /// United Kingdom
    Uk,
}

impl Region {
    /// Region code as used in configuration
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Uk => "UK",
        }
    }

    /// Authentication endpoint of this region
    #[must_use]
    pub fn auth_url(&self) -> &'static str {
        match self {
            Region::Us => US_AUTH_URL,
            Region::Uk => UK_AUTH_URL,
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Region::Us),
            "UK" => Ok(Region::Uk),
            other => Err(AppError::UnknownRegion(other.to_string())),
        }
    }
}

/// Datacenter serving the load balancer API
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalancerRegion {
    /// Chicago
    #[default]
    Ord,
    /// Dallas / Fort Worth
    Dfw,
}

impl BalancerRegion {
    /// Datacenter code as used in configuration
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BalancerRegion::Ord => "ORD",
            BalancerRegion::Dfw => "DFW",
        }
    }

    /// Load balancer endpoint of this datacenter
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        match self {
            BalancerRegion::Ord => ORD_BALANCER_URL,
            BalancerRegion::Dfw => DFW_BALANCER_URL,
        }
    }
}

impl FromStr for BalancerRegion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ORD" => Ok(BalancerRegion::Ord),
            "DFW" => Ok(BalancerRegion::Dfw),
            other => Err(AppError::UnknownRegion(other.to_string())),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the cloud API
///
/// The API key is never serialized, so it does not show up in logs.
pub struct Credentials {
    /// User name of the account
    pub username: String,
    /// API key generated in the control panel
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Region hosting the account
    pub region: Region,
    /// Datacenter used for load balancer requests
    pub balancer_region: BalancerRegion,
}

impl Credentials {
    /// Creates validated credentials
    ///
    /// # Errors
    /// `AppError::InvalidCredentials` when the user name or the API key is empty
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
        region: Region,
        balancer_region: BalancerRegion,
    ) -> Result<Self, AppError> {
        let credentials = Self {
            username: username.into(),
            api_key: api_key.into(),
            region,
            balancer_region,
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Checks that both the user name and the API key are present
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::InvalidCredentials("username is missing".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(AppError::InvalidCredentials("api key is missing".to_string()));
        }
        Ok(())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Negotiate gzip compressed responses
    pub accept_gzip: bool,
    /// Log request and response details at info level
    pub debug: bool,
    /// Overrides the authentication endpoint of the region
    pub auth_url: Option<String>,
    /// Overrides the load balancer endpoint of the datacenter
    pub balancer_url: Option<String>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            accept_gzip: true,
            debug: false,
            auth_url: None,
            balancer_url: None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the cloud API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file if present, then reads `CLOUD_USERNAME`,
    /// `CLOUD_API_KEY`, `CLOUD_REGION`, `CLOUD_BALANCER_REGION`,
    /// `CLOUD_REST_TIMEOUT`, `CLOUD_ACCEPT_GZIP`, `CLOUD_DEBUG`,
    /// `CLOUD_AUTH_URL` and `CLOUD_BALANCER_URL`.
    ///
    /// # Errors
    /// * `AppError::InvalidCredentials` if user name or key are missing
    /// * `AppError::UnknownRegion` if a region code is not recognised
    pub fn new() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("CLOUD_USERNAME", String::new());
        let api_key = get_env_or_default("CLOUD_API_KEY", String::new());
        let region = match get_env_or_none::<String>("CLOUD_REGION") {
            Some(code) => code.parse()?,
            None => Region::default(),
        };
        let balancer_region = match get_env_or_none::<String>("CLOUD_BALANCER_REGION") {
            Some(code) => code.parse()?,
            None => BalancerRegion::default(),
        };

        Ok(Config {
            credentials: Credentials::new(username, api_key, region, balancer_region)?,
            rest_api: RestApiConfig {
                timeout: get_env_or_default("CLOUD_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                accept_gzip: get_env_flag("CLOUD_ACCEPT_GZIP", true),
                debug: get_env_flag("CLOUD_DEBUG", false),
                auth_url: get_env_or_none("CLOUD_AUTH_URL"),
                balancer_url: get_env_or_none("CLOUD_BALANCER_URL"),
            },
        })
    }

    /// Creates a configuration with explicit credentials and default REST settings
    pub fn with_credentials(
        username: impl Into<String>,
        api_key: impl Into<String>,
        region: Region,
        balancer_region: BalancerRegion,
    ) -> Result<Self, AppError> {
        Ok(Config {
            credentials: Credentials::new(username, api_key, region, balancer_region)?,
            rest_api: RestApiConfig::default(),
        })
    }

    /// Authentication endpoint in effect
    #[must_use]
    pub fn auth_url(&self) -> &str {
        self.rest_api
            .auth_url
            .as_deref()
            .unwrap_or_else(|| self.credentials.region.auth_url())
    }

    /// Load balancer endpoint in effect, without trailing slash
    #[must_use]
    pub fn balancer_url(&self) -> &str {
        self.rest_api
            .balancer_url
            .as_deref()
            .unwrap_or_else(|| self.credentials.balancer_region.base_url())
            .trim_end_matches('/')
    }
}
