use anyhow::Context;
use storage::{Database, StorageBackend};
use tokio::net::TcpListener;
use tokio::signal;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::auth::services::AdminCredentials;
use middleware::auth::ApiKeys;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting GC portal API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    match &config.storage {
        StorageBackend::JsonFile { dir } => {
            tracing::info!("Storing years as JSON documents in {}", dir.display())
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown")
        }
    }
    let db = Database::new(&config.storage)
        .await
        .context("Failed to initialize storage")?;

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD is not set, admin login is disabled");
    }
    let admin = AdminCredentials {
        username: config.admin_username.clone(),
        password: config.admin_password.clone(),
    };

    let app = features::router(db, api_keys, admin);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
