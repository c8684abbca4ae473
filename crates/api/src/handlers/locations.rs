//! Handlers for the location hierarchy feeding the cascading selectors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use propdesk_core::form::validate_form;
use propdesk_core::types::DbId;
use propdesk_db::models::location::{CreateCity, CreateProperty, CreateUnit};
use propdesk_db::repositories::LocationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/locations
///
/// Every city, property and unit plus the parent-to-children maps.
pub async fn get_location_index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let index = LocationRepo::load_index(&state.pool).await?;
    Ok(Json(DataResponse { data: index }))
}

/// GET /api/v1/cities
pub async fn list_cities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cities = LocationRepo::list_cities(&state.pool).await?;
    Ok(Json(DataResponse { data: cities }))
}

/// POST /api/v1/cities
pub async fn create_city(
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<impl IntoResponse> {
    validate_form(&input).into_result()?;
    let city = LocationRepo::create_city(&state.pool, &input).await?;

    tracing::info!(city_id = city.id, name = %city.name, "City created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: city })))
}

/// GET /api/v1/cities/{id}/properties
///
/// An unknown city simply has no properties.
pub async fn list_city_properties(
    State(state): State<AppState>,
    Path(city_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let properties = LocationRepo::list_properties(&state.pool, Some(city_id)).await?;
    Ok(Json(DataResponse { data: properties }))
}

/// POST /api/v1/properties
pub async fn create_property(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<impl IntoResponse> {
    let mut errors = validate_form(&input);
    if let Some(city_id) = input.city_id {
        if LocationRepo::find_city(&state.pool, city_id).await?.is_none() {
            errors.add("city_id", "The selected city is invalid.");
        }
    }
    errors.into_result()?;

    let property = LocationRepo::create_property(&state.pool, &input).await?;

    tracing::info!(
        property_id = property.id,
        city_id = property.city_id,
        "Property created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: property })))
}

/// GET /api/v1/properties/{id}/units
pub async fn list_property_units(
    State(state): State<AppState>,
    Path(property_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let units = LocationRepo::list_units(&state.pool, Some(property_id)).await?;
    Ok(Json(DataResponse { data: units }))
}

/// POST /api/v1/units
pub async fn create_unit(
    State(state): State<AppState>,
    Json(input): Json<CreateUnit>,
) -> AppResult<impl IntoResponse> {
    let mut errors = validate_form(&input);
    if let Some(property_id) = input.property_id {
        if LocationRepo::find_property(&state.pool, property_id)
            .await?
            .is_none()
        {
            errors.add("property_id", "The selected property is invalid.");
        }
    }
    errors.into_result()?;

    let unit = LocationRepo::create_unit(&state.pool, &input).await?;

    tracing::info!(unit_id = unit.id, property_id = unit.property_id, "Unit created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: unit })))
}
