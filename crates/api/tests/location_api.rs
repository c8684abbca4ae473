//! HTTP-level tests for the location endpoints feeding the cascading selectors.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_city_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/cities", json!({"name": "  Austin "})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Austin");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_city_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/cities", json!({"name": "Austin"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/cities", json!({"name": "Austin"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_city_name_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/cities", json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["name"], "The name field is required.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_property_under_unknown_city_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/properties",
        json!({"city_id": 9999, "name": "Elm"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["city_id"], "The selected city is invalid.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unit_requires_property(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/units", json!({"property_id": "", "name": "1A"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["property_id"], "Please select a property.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_children_endpoints_are_narrowed(pool: PgPool) {
    let austin = common::seed_chain(&pool, "Austin", "Elm", "1A").await;
    let tulsa = common::seed_chain(&pool, "Tulsa", "Oak", "9Z").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/cities/{}/properties", austin.city)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let properties = json["data"].as_array().unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0]["name"], "Elm");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/properties/{}/units", tulsa.property)).await).await;
    let units = json["data"].as_array().unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0]["name"], "9Z");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/cities/424242/properties").await).await;
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_index_carries_parent_maps(pool: PgPool) {
    let chain = common::seed_chain(&pool, "Austin", "Elm", "1A").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/locations").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let index = &json["data"];
    assert_eq!(index["cities"][0]["name"], "Austin");
    assert_eq!(
        index["properties_by_city"][chain.city.to_string()],
        json!([chain.property])
    );
    assert_eq!(
        index["units_by_property"][chain.property.to_string()],
        json!([chain.unit])
    );
}
