use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorepad::{AppState, InMemoryGameRepository, ServerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting 7 Wonders score pad");

    // Games only live for the lifetime of the process
    let app_state = AppState::new(Arc::new(InMemoryGameRepository::new()));
    let app = scorepad::app(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!(address = %config.bind_address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
