//! Request handlers.

use axum::Json;
use axum::extract::State;

use dash_core::Record;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/data`: every record in the collection.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let store = state.store().await.ok_or(ApiError::StoreUnavailable)?;
    let records = store.find_all().await?;
    tracing::debug!(count = records.len(), "served record set");
    Ok(Json(records))
}
