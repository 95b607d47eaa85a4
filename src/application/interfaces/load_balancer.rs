use crate::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

/// Interface for the load balancer service
#[async_trait]
pub trait LoadBalancerService: Send + Sync {
    /// Lists the load balancers of the account
    async fn list_load_balancers(&self) -> Result<Value, AppError>;

    /// Gets a single load balancer
    async fn get_load_balancer(&self, balancer_id: &str) -> Result<Value, AppError>;

    /// Creates a load balancer
    ///
    /// # Arguments
    /// * `payload` - Definition, e.g. `{"loadBalancer": {"name": ..., "port": 80, ...}}`
    async fn create_load_balancer(&self, payload: Value) -> Result<Value, AppError>;

    /// Updates the attributes of a load balancer
    async fn update_load_balancer(
        &self,
        balancer_id: &str,
        payload: Value,
    ) -> Result<StatusCode, AppError>;

    /// Deletes a load balancer
    async fn delete_load_balancer(&self, balancer_id: &str) -> Result<StatusCode, AppError>;
}
