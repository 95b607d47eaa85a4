//! # Cloud Client
//!
//! Client for the Rackspace Cloud Servers and Cloud Load Balancers API.
//!
//! The crate takes care of:
//! - Token authentication against the regional auth endpoint
//! - Discovery of the per-account compute, storage and CDN endpoints
//! - Dispatching GET/POST/PUT/DELETE requests with the right headers
//! - Renewing a rejected token once and replaying the request
//! - Mapping error statuses to [`error::AppError`]
//!
//! ## Usage
//!
//! ```no_run
//! use cloud_client::prelude::*;
//!
//! # async fn example() -> Result<(), AppError> {
//! let config = Config::with_credentials("user", "api-key", Region::Us, BalancerRegion::Ord)?;
//! let client = Client::new(config)?;
//!
//! if let Some(limits) = client.get_limits().await? {
//!     println!("{limits}");
//! }
//! let servers = client.list_servers(true).await?;
//! println!("{servers}");
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, authentication and services
pub mod application;
/// Constants used across the crate
pub mod constants;
/// Error type
pub mod error;
/// Wire models and the session dispatcher
pub mod model;
/// Commonly used types
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
