//! HTTP-level tests for the listing API and sitemap.
//!
//! Each test builds the router over a fresh in-memory database and drives it
//! with `oneshot`, no socket involved.

use std::path::Path;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tailspin_server::config::ServerConfig;
use tailspin_server::domain::{Breed, Dog};
use tailspin_server::repository::{init_db, Repository};
use tailspin_server::{build_router, AppState};

// ── Test app builder ───────────────────────────────────────────

/// Router over an in-memory DB holding `dogs` as (name, breed) pairs
async fn app_with(dogs: &[(&str, &str)]) -> Router {
    let conn = init_db(Path::new(":memory:")).expect("failed to init test DB");
    let state = AppState::new(conn, ServerConfig::default());

    for (name, breed_name) in dogs {
        let breed = match state.breeds.find_by_name(breed_name).await.unwrap() {
            Some(existing) => existing,
            None => state.breeds.create(&Breed::new(0, *breed_name)).await.unwrap(),
        };
        state
            .dogs
            .create(&Dog::new(0, *name, breed.id, 2, "Male"))
            .await
            .unwrap();
    }

    build_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ── /api/dogs ──────────────────────────────────────────────────

#[tokio::test]
async fn test_get_dogs_success() {
    let app = app_with(&[("Buddy", "Labrador"), ("Max", "German Shepherd")]).await;

    let (status, data) = get_json(app, "/api/dogs").await;

    assert_eq!(status, StatusCode::OK);
    let dogs = data.as_array().unwrap();
    assert_eq!(dogs.len(), 2);
    assert_eq!(dogs[0]["id"], 1);
    assert_eq!(dogs[0]["name"], "Buddy");
    assert_eq!(dogs[0]["breed"], "Labrador");
    assert_eq!(dogs[1]["name"], "Max");
    assert_eq!(dogs[1]["breed"], "German Shepherd");
}

#[tokio::test]
async fn test_get_dogs_empty() {
    let app = app_with(&[]).await;
    let (status, data) = get_json(app, "/api/dogs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, serde_json::json!([]));
}

#[tokio::test]
async fn test_get_dogs_structure() {
    let app = app_with(&[("Buddy", "Labrador")]).await;

    let (_, data) = get_json(app, "/api/dogs").await;

    let dog = data[0].as_object().unwrap();
    let mut keys: Vec<&str> = dog.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["breed", "id", "name"]);
}

#[tokio::test]
async fn test_get_dogs_filtered_by_encoded_breed() {
    let app = app_with(&[("Buddy", "Golden Retriever"), ("Rex", "French Bulldog")]).await;

    let (status, data) = get_json(app, "/api/dogs?breeds=French%20Bulldog").await;

    assert_eq!(status, StatusCode::OK);
    let dogs = data.as_array().unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0]["name"], "Rex");
}

#[tokio::test]
async fn test_get_dogs_filter_matches_any_listed_breed() {
    let app = app_with(&[
        ("Buddy", "Golden Retriever"),
        ("Rex", "French Bulldog"),
        ("Luna", "Labrador Retriever"),
    ])
    .await;

    let (_, data) = get_json(app, "/api/dogs?breeds=Golden%20Retriever,%20Labrador%20Retriever,").await;

    let names: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Buddy", "Luna"]);
}

#[tokio::test]
async fn test_get_dogs_filter_with_no_matches() {
    let app = app_with(&[("Buddy", "Golden Retriever")]).await;
    let (status, data) = get_json(app, "/api/dogs?breeds=Beagle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, serde_json::json!([]));
}

#[tokio::test]
async fn test_blank_breed_filter_returns_all_dogs() {
    let app = app_with(&[("Buddy", "Golden Retriever"), ("Rex", "French Bulldog")]).await;
    let (_, data) = get_json(app, "/api/dogs?breeds=%20,%20").await;
    assert_eq!(data.as_array().unwrap().len(), 2);
}

// ── /api/dogs/:id ──────────────────────────────────────────────

#[tokio::test]
async fn test_get_dog_details() {
    let app = app_with(&[("Rex", "French Bulldog")]).await;

    let (status, data) = get_json(app, "/api/dogs/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["name"], "Rex");
    assert_eq!(data["breed"], "French Bulldog");
    assert_eq!(data["age"], 2);
    assert_eq!(data["gender"], "Male");
    assert_eq!(data["status"], "AVAILABLE");
    assert!(data.get("breed_id").is_none());
}

#[tokio::test]
async fn test_get_dog_not_found() {
    let app = app_with(&[]).await;
    let (status, data) = get_json(app, "/api/dogs/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(data["error"], "Dog not found");
}

#[tokio::test]
async fn test_non_numeric_dog_id_is_json_not_found() {
    let app = app_with(&[("Rex", "French Bulldog")]).await;

    let (status, headers, body) = get(app, "/api/dogs/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let data: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(data["error"], "Dog not found");
}

// ── /api/breeds ────────────────────────────────────────────────

#[tokio::test]
async fn test_get_breeds_success() {
    let app = app_with(&[
        ("Buddy", "Labrador Retriever"),
        ("Max", "German Shepherd"),
        ("Daisy", "Beagle"),
    ])
    .await;

    let (status, data) = get_json(app, "/api/breeds").await;

    assert_eq!(status, StatusCode::OK);
    let breeds: Vec<&str> = data.as_array().unwrap().iter().map(|b| b.as_str().unwrap()).collect();
    assert_eq!(breeds.len(), 5);
    for expected in ["Labrador Retriever", "German Shepherd", "Beagle", "Mixed Breed", "Unknown"] {
        assert!(breeds.contains(&expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn test_get_breeds_alphabetical() {
    let app = app_with(&[("Buddy", "Labrador Retriever"), ("Daisy", "Beagle")]).await;

    let (_, data) = get_json(app, "/api/breeds").await;

    assert_eq!(
        data,
        serde_json::json!(["Beagle", "Labrador Retriever", "Mixed Breed", "Unknown"])
    );
}

#[tokio::test]
async fn test_get_breeds_empty() {
    let app = app_with(&[]).await;
    let (status, data) = get_json(app, "/api/breeds").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, serde_json::json!(["Mixed Breed", "Unknown"]));
}

#[tokio::test]
async fn test_stored_sentinel_breed_stays_last() {
    let app = app_with(&[("Biscuit", "Mixed Breed"), ("Buddy", "Poodle"), ("Daisy", "Akita")]).await;
    let (_, data) = get_json(app, "/api/breeds").await;
    assert_eq!(
        data,
        serde_json::json!(["Akita", "Poodle", "Mixed Breed", "Unknown"])
    );
}

// ── sitemap ────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_sitemap_data() {
    let app = app_with(&[("Buddy", "Labrador"), ("Max", "Beagle")]).await;

    let (status, data) = get_json(app, "/api/sitemap").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["dog_ids"], serde_json::json!([1, 2]));
    let last_updated = data["last_updated"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(last_updated).is_ok());
}

#[tokio::test]
async fn test_sitemap_xml() {
    let app = app_with(&[("Buddy", "Labrador")]).await;

    let (status, headers, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/xml");
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");

    let xml = String::from_utf8(body).unwrap();
    assert!(xml.contains("<loc>https://tailspinshelter.com/</loc>"));
    assert!(xml.contains("<loc>https://tailspinshelter.com/about</loc>"));
    assert!(xml.contains("<loc>https://tailspinshelter.com/dog/1</loc>"));
}
