/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Cloud Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use cloud_client::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration types
pub use crate::application::config::{BalancerRegion, Config, Credentials, Region, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND DISPATCH
// ============================================================================

/// Authentication manager and session
pub use crate::application::auth::{Auth, Session};

/// Session dispatcher
pub use crate::model::http::HttpClient;

/// Request and response values
pub use crate::model::requests::{ApiRequest, RequestMethod, ResourceType};
pub use crate::model::responses::{ApiResponse, BadRequestFault};

// ============================================================================
// SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{LoadBalancerService, ServerService};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
