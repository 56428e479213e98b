use std::net::SocketAddr;
use std::sync::Arc;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::store::RecordStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,folio_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Dataset ---
    let store = match RecordStore::load_from_dir(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, data_dir = %config.data_dir.display(), "Failed to load dataset");
            std::process::exit(1);
        }
    };
    tracing::info!(
        projects = store.projects().len(),
        skills = store.skills().len(),
        experience = store.experience().len(),
        education = store.education().len(),
        issues = store.consistency_issues().len(),
        "Dataset loaded"
    );

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, host = %config.host, "Invalid HOST");
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
