use crate::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

/// Interface for the compute server service
#[async_trait]
pub trait ServerService: Send + Sync {
    /// Lists servers, with full details when `detailed` is set
    async fn list_servers(&self, detailed: bool) -> Result<Value, AppError>;

    /// Gets a single server
    async fn get_server(&self, server_id: &str) -> Result<Value, AppError>;

    /// Creates a server
    ///
    /// # Arguments
    /// * `payload` - Server definition, e.g. `{"server": {"name": ..., "imageId": ..., "flavorId": ...}}`
    async fn create_server(&self, payload: Value) -> Result<Value, AppError>;

    /// Updates the name or admin password of a server
    ///
    /// Returns the status reported by the API (usually 204).
    async fn update_server(&self, server_id: &str, payload: Value) -> Result<StatusCode, AppError>;

    /// Deletes a server
    async fn delete_server(&self, server_id: &str) -> Result<StatusCode, AppError>;

    /// Gets the account limits document, `None` when unavailable
    async fn get_limits(&self) -> Result<Option<String>, AppError>;
}
