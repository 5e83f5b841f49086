mod config;
mod core;
mod input;
mod nav;
mod playback;
mod provider;
mod server;
mod session;
mod simulation;

use anyhow::Context;
use config::ServerSettings;
use input::DirectoryLibrary;
use nav::NavDatabase;
use playback::SystemClock;
use server::AppState;
use session::SessionCoordinator;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = ServerSettings::load();
    info!("Starting flight replay server with {:?}", settings);

    let nav = NavDatabase::load(&settings.airports_file);
    let library = DirectoryLibrary::new(&settings.flights_dir);
    let coordinator = Arc::new(SessionCoordinator::new(
        Arc::new(library),
        Arc::new(SystemClock::new()),
        settings.tick_interval(),
    ));

    tokio::spawn(coordinator.clone().run_heartbeat());

    let bind_address = settings.bind_address.clone();
    let app = server::router(AppState::new(coordinator, nav, settings))?;

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
