//! Client-side error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// Transport failure, non-success status, or undecodable body.
    #[error("Error fetching data: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    Client(String),
}
