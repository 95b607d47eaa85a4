/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::load_balancer::LoadBalancerService;
use crate::application::interfaces::server::ServerService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::ResourceType;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Cloud API client exposing the server and load balancer services
///
/// Cloning is cheap; clones share the same session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client; the first call authenticates
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from the environment configuration
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()?)
    }

    /// Wraps an existing dispatcher
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gives access to the underlying dispatcher
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

fn to_json(response: ApiResponse) -> Result<Value, AppError> {
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    response.json()
}

#[async_trait]
impl ServerService for Client {
    async fn list_servers(&self, detailed: bool) -> Result<Value, AppError> {
        let path = if detailed { "/servers/detail" } else { "/servers" };
        info!("Listing servers");
        let response = self.http_client.get(ResourceType::Server, path).await?;
        to_json(response)
    }

    async fn get_server(&self, server_id: &str) -> Result<Value, AppError> {
        let path = format!("/servers/{server_id}");
        debug!("Getting server: {}", server_id);
        let response = self.http_client.get(ResourceType::Server, &path).await?;
        to_json(response)
    }

    async fn create_server(&self, payload: Value) -> Result<Value, AppError> {
        info!("Creating server");
        let response = self
            .http_client
            .post(ResourceType::Server, "/servers", payload)
            .await?;
        to_json(response)
    }

    async fn update_server(&self, server_id: &str, payload: Value) -> Result<StatusCode, AppError> {
        let path = format!("/servers/{server_id}");
        info!("Updating server: {}", server_id);
        let response = self
            .http_client
            .put(ResourceType::Server, &path, payload)
            .await?;
        Ok(response.status)
    }

    async fn delete_server(&self, server_id: &str) -> Result<StatusCode, AppError> {
        let path = format!("/servers/{server_id}");
        info!("Deleting server: {}", server_id);
        let response = self.http_client.delete(ResourceType::Server, &path).await?;
        Ok(response.status)
    }

    async fn get_limits(&self) -> Result<Option<String>, AppError> {
        self.http_client.get_limits().await
    }
}

#[async_trait]
impl LoadBalancerService for Client {
    async fn list_load_balancers(&self) -> Result<Value, AppError> {
        info!("Listing load balancers");
        let response = self
            .http_client
            .get(ResourceType::Balancer, "/loadbalancers")
            .await?;
        to_json(response)
    }

    async fn get_load_balancer(&self, balancer_id: &str) -> Result<Value, AppError> {
        let path = format!("/loadbalancers/{balancer_id}");
        debug!("Getting load balancer: {}", balancer_id);
        let response = self.http_client.get(ResourceType::Balancer, &path).await?;
        to_json(response)
    }

    async fn create_load_balancer(&self, payload: Value) -> Result<Value, AppError> {
        info!("Creating load balancer");
        let response = self
            .http_client
            .post(ResourceType::Balancer, "/loadbalancers", payload)
            .await?;
        to_json(response)
    }

    async fn update_load_balancer(
        &self,
        balancer_id: &str,
        payload: Value,
    ) -> Result<StatusCode, AppError> {
        let path = format!("/loadbalancers/{balancer_id}");
        info!("Updating load balancer: {}", balancer_id);
        let response = self
            .http_client
            .put(ResourceType::Balancer, &path, payload)
            .await?;
        Ok(response.status)
    }

    async fn delete_load_balancer(&self, balancer_id: &str) -> Result<StatusCode, AppError> {
        let path = format!("/loadbalancers/{balancer_id}");
        info!("Deleting load balancer: {}", balancer_id);
        let response = self
            .http_client
            .delete(ResourceType::Balancer, &path)
            .await?;
        Ok(response.status)
    }
}
