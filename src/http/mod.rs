//! HTTP transport — JSON API over a [`Storage`].
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/projects` — all projects, insertion order.
//! - `GET /api/projects/:id` — one project, 404 if absent.
//! - `GET /api/skills` — all skills.
//! - `POST /api/contact` — validate and store a contact message; 201 `{message, id}`
//!   or 400 `{message, errors}`.
//! - `GET /api/contact` — all stored contact messages.
//! - `GET /api/profile` — the configured owner profile.
//! - `GET /api/placeholder/:width/:height` — placeholder SVG.
//! - `GET /health` — `{ "ok": true, ...counts }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use portfolio::{http, MemStorage, Profile};
//!
//! let store = Arc::new(MemStorage::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone(), Profile::default());
//!
//! // Or serve directly
//! http::serve(store, Profile::default(), "0.0.0.0:5000").await?;
//! ```

mod error;
mod handlers;
mod placeholder;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use handlers::ContactReceipt;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Profile;
use crate::storage::Storage;

/// State shared by every handler.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub profile: Arc<Profile>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            profile: Arc::clone(&self.profile),
        }
    }
}

/// Build an axum `Router` serving the portfolio API from the given store.
pub fn router<S: Storage + 'static>(store: Arc<S>, profile: Profile) -> Router {
    let state = AppState {
        store,
        profile: Arc::new(profile),
    };

    Router::new()
        .route("/health", get(handlers::health::<S>))
        .route("/api/projects", get(handlers::list_projects::<S>))
        .route("/api/projects/:id", get(handlers::get_project::<S>))
        .route("/api/skills", get(handlers::list_skills::<S>))
        .route(
            "/api/contact",
            get(handlers::list_contact_messages::<S>).post(handlers::submit_contact::<S>),
        )
        .route("/api/profile", get(handlers::profile::<S>))
        .route("/api/placeholder/:width/:height", get(placeholder::placeholder))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API at `addr` (e.g. `"0.0.0.0:5000"`) until Ctrl-C or SIGTERM.
pub async fn serve<S: Storage + 'static>(
    store: Arc<S>,
    profile: Profile,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, router(store, profile)).await
}

/// Serve an already-built router on a bound listener.
pub async fn serve_on(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    info!(addr = %listener.local_addr()?, "serving portfolio API");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
