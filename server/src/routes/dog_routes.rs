//! Dog listing and detail endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::{parse_breed_filter, Dog, DogSummary};
use crate::repository::{DogQueries, Repository};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DogFilterParams {
    /// Comma-separated breed names
    pub breeds: Option<String>,
}

/// `GET /api/dogs[?breeds=a,b]`: any-of breed filter, all dogs when absent
pub async fn list_dogs(
    State(state): State<AppState>,
    Query(params): Query<DogFilterParams>,
) -> Result<Json<Vec<DogSummary>>, ApiError> {
    let breeds = params
        .breeds
        .as_deref()
        .map(parse_breed_filter)
        .unwrap_or_default();

    let dogs = state.dogs.list_summaries(&breeds).await?;
    tracing::debug!("listed {} dogs for breeds {:?}", dogs.len(), breeds);
    Ok(Json(dogs))
}

/// `GET /api/dogs/:id`. Ids that are not a number are treated as missing.
pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Dog>, ApiError> {
    let id: u32 = id.parse().map_err(|_| ApiError::not_found("Dog not found"))?;
    state
        .dogs
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Dog not found"))
}
