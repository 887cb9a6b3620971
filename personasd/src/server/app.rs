//! Axum application setup and shared state

use axum::Router;
use personas_common::error::{AppError, ServerError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::PersonaStore;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persona store (read-write lock: listings take the read half)
    pub store: Arc<RwLock<PersonaStore>>,
    /// Daemon version string
    pub version: &'static str,
}

impl AppState {
    /// Create new application state
    pub fn new(store: PersonaStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Create the Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    use super::handlers::{health, personas};

    Router::new()
        // Index and version endpoints
        .route("/", axum::routing::get(health::root))
        .route("/version", axum::routing::get(health::version))
        // Persona collection endpoints
        .route(
            "/personas",
            axum::routing::get(personas::list_personas).post(personas::create_persona),
        )
        .route(
            "/personas/{id}",
            axum::routing::get(personas::get_persona)
                .put(personas::update_persona)
                .delete(personas::delete_persona),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}

/// Bind the TCP listener and serve until a shutdown signal arrives
pub async fn run_server(state: AppState, host: &str, port: u16) -> Result<(), AppError> {
    let app = create_app(state);

    let addr = format!("{host}:{port}");
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::BindFailed {
                addr: addr.clone(),
                source: e,
            })?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(crate::daemon::wait_for_signal())
        .await?;

    Ok(())
}
