use backend::{
    config::{Config, DEFAULT_LOG_FILTER},
    startup, AppState,
};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present, before clap reads PORT / SERVICE_NAME
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = Arc::new(AppState::new(config.service_name.clone()));
    let app = startup::build_router(app_state.clone());

    // Bind and serve
    let listener = startup::bind(config.socket_addr()).await?;
    let shutdown = startup::shutdown_signal();
    tracing::info!(
        service = %app_state.service_name,
        "Listening on http://{}",
        listener.local_addr()?
    );

    startup::serve(listener, app, shutdown).await
}
