//! HTTP and server lifecycle errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use dash_db::DatabaseError;

/// Body message for every store failure. Details stay in the logs.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service started without a reachable store.
    #[error("record store is not connected")]
    StoreUnavailable,

    /// The store failed while serving the request.
    #[error("record store query failed: {0}")]
    Store(#[from] DatabaseError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: SERVER_ERROR_MESSAGE,
            }),
        )
            .into_response()
    }
}

/// Errors that stop the server from running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
