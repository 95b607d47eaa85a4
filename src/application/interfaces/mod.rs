/// Load balancer service interface
pub mod load_balancer;
/// Compute server service interface
pub mod server;

pub use load_balancer::*;
pub use server::*;
