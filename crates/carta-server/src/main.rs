//! Carta Server — application entry point.

use std::sync::Arc;

use carta_db::{DbManager, run_migrations};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("carta_server=info".parse().unwrap())
                .add_directive("carta_db=info".parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting Carta server...");

    let config = ServerConfig::load();

    let manager = DbManager::connect(&config.db)
        .await
        .expect("Database connection failed");
    run_migrations(manager.client())
        .await
        .expect("Schema migration failed");

    let state = Arc::new(AppState::new(
        manager.client().clone(),
        config.db.operation_timeout,
    ));
    let app = routes::router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind listener");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Carta server stopped.");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
