//! Loyalty point service entry point.

use loyalty_points::api::create_router;
use loyalty_points::infrastructure::{AppConfig, AppDependencies, LogFormat};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    tracing::info!("Starting loyalty point service...");

    let bind_address = config.bind_address();
    let dependencies = AppDependencies::from_config(config).await?;
    let app = create_router(dependencies);

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Listening on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/ping                               - Liveness probe");
    tracing::info!("  GET  /api/user                               - Current user");
    tracing::info!("  POST /api/points                             - Award points");
    tracing::info!("  GET  /api/customers/{{customer_id}}/point-events - Point history");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Loyalty point service stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,loyalty_points=debug,tower_http=debug"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
