//! HTTP Routes
//!
//! axum handlers that bridge HTTP requests to the repositories.

mod breed_routes;
mod dog_routes;
mod error;
mod sitemap_routes;

pub use breed_routes::list_breeds;
pub use dog_routes::{get_dog, list_dogs, DogFilterParams};
pub use error::ApiError;
pub use sitemap_routes::{sitemap_data, sitemap_xml, SitemapData};
