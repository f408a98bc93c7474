//! # dash-server
//!
//! HTTP data provider for the dashboard.
//!
//! - `GET /api/data` returns every record as a JSON array, or
//!   `500 {"error": "Server Error"}` when the store fails or was never reached.
//! - Every other path serves the static client, falling back to its
//!   `index.html` entry point.

pub mod app;
pub mod error;
pub mod handlers;
pub mod startup;
pub mod state;

pub use app::{DATA_PATH, build_router};
pub use error::{ApiError, SERVER_ERROR_MESSAGE, ServerError};
pub use startup::{connect_store, run, seed_logged, shutdown_signal};
pub use state::AppState;
