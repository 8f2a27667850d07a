// SPDX-License-Identifier: MIT

//! Shared helpers for integration tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use fitcheck_api::{config::Config, db::MongoDb, routes::create_router, AppState};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if a MongoDB deployment is available via environment variable.
#[allow(dead_code)]
pub fn mongo_available() -> bool {
    std::env::var("MONGODB_URL").is_ok()
}

/// Skip test with message if MongoDB not available.
#[macro_export]
macro_rules! require_mongo {
    () => {
        if !crate::common::mongo_available() {
            eprintln!("Skipping: MONGODB_URL not set");
            return;
        }
    };
}

/// Create a test app with an offline mock store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let state = Arc::new(AppState {
        config,
        db: MongoDb::new_mock(),
    });
    (create_router(state.clone()), state)
}

/// Create a test app backed by the MONGODB_URL deployment.
///
/// Each caller gets a freshly named database so tests stay isolated;
/// clean up with [`drop_database`].
#[allow(dead_code)]
pub async fn create_mongo_test_app() -> (axum::Router, String) {
    let database_name = format!("fitcheck_test_{}", ObjectId::new().to_hex());
    let config = Config {
        database_url: Some(std::env::var("MONGODB_URL").expect("MONGODB_URL set")),
        database_name: database_name.clone(),
        ..Config::default()
    };

    let db = MongoDb::connect(&config).await;
    let state = Arc::new(AppState { config, db });
    (create_router(state), database_name)
}

/// Drop a test database created by [`create_mongo_test_app`].
#[allow(dead_code)]
pub async fn drop_database(database_name: &str) {
    let url = std::env::var("MONGODB_URL").expect("MONGODB_URL set");
    let client = mongodb::Client::with_uri_str(&url)
        .await
        .expect("connect for cleanup");
    client
        .database(database_name)
        .drop()
        .await
        .expect("drop test database");
}

/// Issue a GET and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, read_json(response).await)
}

/// Issue a request carrying a JSON body and return status plus parsed JSON.
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, read_json(response).await)
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    }
}
