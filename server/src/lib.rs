//! Tailspin Shelter Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and SQLite implementations
//! - routes: axum handlers for the listing API and sitemap

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;
pub mod sitemap;

use config::ServerConfig;
use repository::{BreedRepository, DogRepository, SharedConnection};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub breeds: BreedRepository,
    pub dogs: DogRepository,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(conn: SharedConnection, config: ServerConfig) -> Self {
        Self {
            breeds: BreedRepository::new(conn.clone()),
            dogs: DogRepository::new(conn),
            config: Arc::new(config),
        }
    }
}

/// Build the full router: JSON API, sitemap and (optionally) the frontend
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/breeds", get(routes::list_breeds))
        .route("/api/dogs", get(routes::list_dogs))
        .route("/api/dogs/:id", get(routes::get_dog))
        .route("/api/sitemap", get(routes::sitemap_data))
        .route("/sitemap.xml", get(routes::sitemap_xml));

    if let Some(dir) = &state.config.static_dir {
        // Unknown paths fall through to the SPA shell
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
