//! # HTTP Layer
//!
//! Axum routes over [`WakeyApi`]. Handlers extract the title and contents from the
//! request, call the API, and shape the result as JSON or as an HTML page. They never
//! touch the filesystem and never change a title's case.
//!
//! | Method | Path           | Response                              |
//! |--------|----------------|---------------------------------------|
//! | GET    | `/`            | `{"Entries": [TITLE, ...]}`           |
//! | GET    | `/{title}`     | `{"title": TITLE, "contents": "..."}` |
//! | POST   | `/{title}`     | same, echoing what was written        |
//! | GET    | `/web/`        | HTML index of entries                 |
//! | GET    | `/web/{title}` | HTML page with rendered markdown      |
//! | GET    | `/web/form/`   | HTML form                             |
//! | POST   | `/web/create`  | same JSON as `POST /{title}`          |
//!
//! A missing entry and a failed write both answer 404 with `{"detail": "..."}`.

use crate::api::WakeyApi;
use crate::error::{Result, WakeyError};
use crate::store::EntryStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use wakey_pages::Renderer;

pub mod routes;
pub mod templates;

pub struct AppState<S: EntryStore> {
    pub api: WakeyApi<S>,
    pub pages: Renderer,
}

impl<S: EntryStore> AppState<S> {
    pub fn new(api: WakeyApi<S>, pages: Renderer) -> Self {
        Self { api, pages }
    }
}

pub fn router<S: EntryStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(routes::list_entries::<S>))
        .route("/web/", get(routes::web_index::<S>))
        .route("/web/form/", get(routes::web_form::<S>))
        .route("/web/create", post(routes::web_create::<S>))
        .route("/web/:title", get(routes::web_entry::<S>))
        .route(
            "/:title",
            get(routes::get_entry::<S>).post(routes::write_entry::<S>),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve<S: EntryStore + 'static>(state: Arc<AppState<S>>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WakeyError::Io)?;
    log::info!("wakey listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WakeyError::Io)?;

    log::info!("wakey stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
