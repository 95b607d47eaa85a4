use cloud_client::prelude::*;
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let client = Client::from_env()?;
    if std::env::args().any(|a| a == "--debug") {
        client.http_client().enable_debug();
    }

    let servers = client.list_servers(true).await?;
    let empty = Vec::new();
    let list = servers["servers"].as_array().unwrap_or(&empty);
    info!("{} server(s)", list.len());
    for server in list {
        info!(
            "{} {} {}",
            server["id"],
            server["name"].as_str().unwrap_or("-"),
            server["status"].as_str().unwrap_or("-")
        );
    }

    let balancers: Value = client.list_load_balancers().await?;
    info!("Load balancers: {}", balancers);
    Ok(())
}
