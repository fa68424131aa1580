//! Breed catalog endpoint.

use axum::extract::State;
use axum::Json;

use super::ApiError;
use crate::domain::catalog_with_sentinels;
use crate::AppState;

/// `GET /api/breeds`: stored breeds alphabetically, then "Mixed Breed" and "Unknown"
pub async fn list_breeds(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.breeds.list_names().await?;
    Ok(Json(catalog_with_sentinels(names)))
}
