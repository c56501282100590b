use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use axum::{Router, extract::Extension, routing::get};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use campus_search::config::Config;
use campus_search::search::handlers::{handle_search, handle_suggestions};
use campus_search::store::memory::{MemorySessions, MemoryStore};
use campus_search::store::repository::{CommunityStore, SessionResolver};
use campus_search::store::types::Snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::load()?;

    // 1. Store backend, optionally seeded from a snapshot file:
    let memory = Arc::new(MemoryStore::new());
    let session_table = Arc::new(MemorySessions::new());

    if let Some(path) = &config.snapshot_path {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path))?;
        let snapshot: Snapshot =
            serde_json::from_str(&raw).with_context(|| format!("parsing snapshot {}", path))?;
        memory.load_snapshot(&snapshot);
        for seed in &snapshot.sessions {
            session_table.add_session(seed.token.clone(), seed.user_id.clone());
        }
        if !snapshot.sessions.is_empty() {
            tracing::info!("Seeded {} sessions", snapshot.sessions.len());
        }
    } else {
        tracing::info!("No snapshot configured, starting with an empty store");
    }

    let store: Arc<dyn CommunityStore> = memory;
    let sessions: Arc<dyn SessionResolver> = session_table;

    // 2. HTTP router:
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/search/suggestions", get(handle_suggestions))
        .layer(Extension(store))
        .layer(Extension(sessions))
        .layer(cors);

    // 3. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Search service listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
