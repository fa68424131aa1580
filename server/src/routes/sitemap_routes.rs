//! Sitemap endpoints: raw data for external generators and the rendered XML.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::repository::DogQueries;
use crate::sitemap::{render_sitemap, sitemap_entries};
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapData {
    pub dog_ids: Vec<u32>,
    /// RFC 3339 timestamp of when the data was read
    pub last_updated: String,
}

/// `GET /api/sitemap`
pub async fn sitemap_data(State(state): State<AppState>) -> Result<Json<SitemapData>, ApiError> {
    let dog_ids = state.dogs.list_ids().await?;
    Ok(Json(SitemapData {
        dog_ids,
        last_updated: chrono::Utc::now().to_rfc3339(),
    }))
}

/// `GET /sitemap.xml`. Falls back to static pages when dogs can't be read.
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let dog_ids = match state.dogs.list_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            tracing::error!("error fetching dogs for sitemap: {}", err);
            Vec::new()
        }
    };

    let xml = render_sitemap(&state.config.site_base_url, &sitemap_entries(&dog_ids));
    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        xml,
    )
}
