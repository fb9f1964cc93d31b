mod model;
mod server;

use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap(&db, config.admin_password.as_deref()).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let app = router::router()
        .with_state(AppState::new(db, &config))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(startup::cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
