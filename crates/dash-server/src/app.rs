//! Router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Path of the single read endpoint.
pub const DATA_PATH: &str = "/api/data";

/// Build the application router.
///
/// `GET /api/data` returns the record set. Every other path serves a file from
/// the static directory when one exists, and the client entry point otherwise.
pub fn build_router(state: AppState) -> Router {
    let client = ServeDir::new(&state.static_dir).fallback(ServeFile::new(&state.index_path));
    let cors = state.cors_permissive;

    let router = Router::new()
        .route(DATA_PATH, get(handlers::list_all))
        .fallback_service(client)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
