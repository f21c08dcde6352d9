//! HTTP server.

use std::net::SocketAddr;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

use crate::data::AssignmentStore;

use super::handlers;
use super::layers;
use super::state::AppState;

/// Build the application router.
///
/// Routes are served both at the root and under `/api`. A known path hit
/// with the wrong method gets the same JSON 404 as an unknown path.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/assignments", get(handlers::list_assignments))
        .route("/assignments/{id}", get(handlers::get_assignment))
        .route("/assignments/{id}/submit", post(handlers::submit))
        .method_not_allowed_fallback(handlers::not_found);

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(layers::cors))
        .layer(middleware::from_fn(layers::trace_request))
        .with_state(state)
}

/// Serve the API until Ctrl-C.
pub async fn run(address: SocketAddr, store: AssignmentStore) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, dir = %store.dir().display(), "serving assignments");

    axum::serve(listener, router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
