//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through each
//! feature crate's error type and `kernel::error::AppError`.

mod app;
mod config;
mod shutdown;

use std::net::SocketAddr;

use anyhow::Context;
use custom_domain::HickoryTxtResolver;
use media::DiskStore;
use platform::database::Database;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{Components, build_router};
use crate::config::{DEFAULT_LOG_FILTER, Settings};
use crate::shutdown::SHUTDOWN_GRACE;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();

    if settings.auth.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    // Database connection
    let database = Database::connect(&settings.database)
        .await
        .context("failed to connect to the database")?;

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(database.pool())
        .await
        .context("failed to run migrations")?;

    tracing::info!("Migrations completed");

    let uploads = DiskStore::open(&settings.upload_dir)
        .await
        .with_context(|| format!("failed to create {}", settings.upload_dir.display()))?;

    let components = Components {
        database: database.clone(),
        resolver: HickoryTxtResolver::new(),
        uploads,
    };
    let app = build_router(&settings, components);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    shutdown::serve(listener, app, SHUTDOWN_GRACE).await?;

    database.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
