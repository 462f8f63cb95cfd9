use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::services::seed;
use crate::application::state::{AppState, AppStateConfig};
use crate::infrastructure::catalog::CatalogClient;
use crate::infrastructure::database::Database;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub data_dir: PathBuf,
    pub catalog_url: String,
    pub static_dir: PathBuf,
}

/// Fetch the catalog, open the store and seed it if it is still empty.
///
/// An unreachable or malformed catalog is fatal: there is no degraded mode.
pub async fn prepare_state(config: &ServerConfig) -> anyhow::Result<(Database, AppState)> {
    let catalog = CatalogClient::new(&config.catalog_url)?;
    let records = catalog
        .list_images()
        .await
        .context("image catalog is unavailable")?;

    let database = Database::open_dir(&config.data_dir)
        .await
        .context("failed to open image store")?;

    let state = AppState::from_database(
        &database,
        AppStateConfig {
            static_dir: config.static_dir.clone(),
        },
    );

    let outcome = seed(state.image_repo.as_ref(), records)
        .await
        .context("failed to seed image store")?;
    info!(?outcome, "image store ready");

    Ok((database, state))
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let (database, state) = prepare_state(&config).await?;

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        data_dir = %config.data_dir.display(),
        static_dir = %config.static_dir.display(),
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    database.close().await;
    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
