use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use zenith_core::{CatalogStore, Result, ZenithError};

use crate::{handlers, middleware};

/// State shared across handlers
///
/// The catalog is seeded before the router is built and never mutated
/// afterwards, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            started_at: Instant::now(),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/emotions", get(handlers::list_emotions))
        .route("/api/quotes/:emotion", get(handlers::list_quotes))
        .route("/api/quotes/:emotion/random", post(handlers::random_quote))
        .route("/health", get(handlers::health))
        .layer(axum::middleware::from_fn(middleware::request_context))
        .with_state(state)
}

/// Bind the API listener
///
/// # Errors
///
/// Returns `Internal` if the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| ZenithError::Internal {
            message: format!("failed to bind {}: {}", addr, e),
        })
}

/// Serve the API on `listener` until `shutdown` resolves
///
/// # Errors
///
/// Returns `Internal` if the server loop fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ZenithError::Internal {
            message: format!("server error: {}", e),
        })
}
