#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use propdesk_db::models::location::{CreateCity, CreateProperty, CreateUnit};
use propdesk_db::repositories::LocationRepo;
use sqlx::PgPool;
use tower::ServiceExt;

use propdesk_api::config::ServerConfig;
use propdesk_api::router::build_app_router;
use propdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_per_page: 10,
        max_per_page: 100,
        export_date_format: "%-m/%-d/%Y".to_string(),
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A city -> property -> unit chain.
#[derive(Debug, Clone, Copy)]
pub struct Chain {
    pub city: i64,
    pub property: i64,
    pub unit: i64,
}

/// Insert a fresh city, property and unit.
pub async fn seed_chain(pool: &PgPool, city: &str, property: &str, unit: &str) -> Chain {
    let c = LocationRepo::create_city(
        pool,
        &CreateCity {
            name: Some(city.to_string()),
        },
    )
    .await
    .unwrap();
    seed_under_city(pool, c.id, property, unit).await
}

/// Insert a property and unit under an existing city.
pub async fn seed_under_city(pool: &PgPool, city_id: i64, property: &str, unit: &str) -> Chain {
    let p = LocationRepo::create_property(
        pool,
        &CreateProperty {
            city_id: Some(city_id),
            name: Some(property.to_string()),
        },
    )
    .await
    .unwrap();
    let u = LocationRepo::create_unit(
        pool,
        &CreateUnit {
            property_id: Some(p.id),
            name: Some(unit.to_string()),
        },
    )
    .await
    .unwrap();
    Chain {
        city: city_id,
        property: p.id,
        unit: u.id,
    }
}
