//! CasaBnB Frontend - server-rendered UI for the rental backend.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for the catalog fragment
//! - Askama templates for server-side rendering
//! - The rental REST backend is the source of truth for places, reviews,
//!   users and authentication; this binary holds no persistent state
//! - Sessions carry only the backend's bearer token (in-memory store)

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use casabnb_frontend::config::FrontendConfig;
use casabnb_frontend::state::AppState;
use casabnb_frontend::{routes, session};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "casabnb_frontend=info,tower_http=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = FrontendConfig::from_env().expect("Failed to load configuration");
    let state = AppState::new(config.clone());

    let session_layer = session::create_session_layer();

    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/frontend/static"))
        .layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .with_state(state);

    let addr = config.socket_addr();
    tracing::info!("frontend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
