/// User agent string used in HTTP requests to identify this client to the cloud API
pub const USER_AGENT: &str = concat!("cloud-client/", env!("CARGO_PKG_VERSION"));
/// Authentication endpoint for accounts hosted in the US
pub const US_AUTH_URL: &str = "https://auth.api.rackspacecloud.com/v1.0";
/// Authentication endpoint for accounts hosted in the UK
pub const UK_AUTH_URL: &str = "https://lon.auth.api.rackspacecloud.com/v1.0";
/// Load balancer endpoint for the Chicago datacenter
pub const ORD_BALANCER_URL: &str = "https://ord.loadbalancers.api.rackspacecloud.com/v1.0";
/// Load balancer endpoint for the Dallas datacenter
pub const DFW_BALANCER_URL: &str = "https://dfw.loadbalancers.api.rackspacecloud.com/v1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Number of times a rejected token is renewed before giving up on a request
pub const MAX_REAUTH_ATTEMPTS: u32 = 1;
/// Resource path of the account limits document
pub const LIMITS_PATH: &str = "/limits";

/// Request header carrying the user id during authentication
pub const HEADER_AUTH_USER: &str = "X-Auth-User";
/// Request header carrying the API key during authentication
pub const HEADER_AUTH_KEY: &str = "X-Auth-Key";
/// Header carrying the bearer token (response of auth, request of everything else)
pub const HEADER_AUTH_TOKEN: &str = "X-Auth-Token";
/// Response header with the compute management endpoint
pub const HEADER_SERVER_URL: &str = "X-Server-Management-Url";
/// Response header with the storage endpoint
pub const HEADER_STORAGE_URL: &str = "X-Storage-Url";
/// Response header with the CDN management endpoint
pub const HEADER_CDN_URL: &str = "X-CDN-Management-Url";
