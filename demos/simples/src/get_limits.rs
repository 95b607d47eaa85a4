use cloud_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let client = Client::from_env()?;
    match client.get_limits().await? {
        Some(limits) => info!("Limits: {}", limits),
        None => error!("Limits are not available for this account"),
    }
    Ok(())
}
