use clap::Parser;
use dotenvy::dotenv;
use std::env;

use budget_assistant::api::{self, config::ApiConfig};
use budget_assistant::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let api_config = ApiConfig::parse();
    tracing::info!("API configuration loaded successfully");

    let app_config = AppConfig::from_args(&api_config.store)?;
    tracing::info!("Application configuration loaded successfully");

    let router = api::router(app_config);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting budget assistant on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
