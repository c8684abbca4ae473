//! Route definitions for the location hierarchy.
//!
//! Merged at the `/api/v1` root by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// Location routes.
///
/// ```text
/// GET    /locations                  -> get_location_index
/// GET    /cities                     -> list_cities
/// POST   /cities                     -> create_city
/// GET    /cities/{id}/properties     -> list_city_properties
/// POST   /properties                 -> create_property
/// GET    /properties/{id}/units      -> list_property_units
/// POST   /units                      -> create_unit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/locations", get(locations::get_location_index))
        .route(
            "/cities",
            get(locations::list_cities).post(locations::create_city),
        )
        .route("/cities/{id}/properties", get(locations::list_city_properties))
        .route("/properties", post(locations::create_property))
        .route("/properties/{id}/units", get(locations::list_property_units))
        .route("/units", post(locations::create_unit))
}
