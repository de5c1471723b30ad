// Declare modules to be part of the library crate

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;


use std::net::SocketAddr;

use axum::{routing::get, Router};
use echolab_core::DemoConfig;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use error::ServerError;
use state::AppState;

/// Builds the demo router: the three contract routes, an Express-style 404
/// fallback, and the request-tracing middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/user", get(handlers::user_lookup))
        .route("/search", get(handlers::search))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Loads the configuration from the environment and serves until terminated.
pub async fn run() -> Result<(), ServerError> {
    let config = DemoConfig::from_env()?;
    serve(config).await
}

/// Binds the configured port and serves the demo routes.
///
/// A bind failure is fatal; there is no retry. On success the listening URL
/// goes to stdout as a single line, matching the training scripts.
pub async fn serve(config: DemoConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    println!("App running on http://localhost:{}", addr.port());
    info!(%addr, "listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>(); // On non-Unix, just wait for Ctrl+C

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
