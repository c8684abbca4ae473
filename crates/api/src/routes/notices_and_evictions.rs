//! Route definitions for notices and evictions.
//!
//! Mounted at `/notices-and-evictions` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notices_and_evictions;
use crate::state::AppState;

/// Notice and eviction routes.
///
/// ```text
/// GET    /                  -> list_notices_and_evictions
/// POST   /                  -> create_notice
/// GET    /export            -> export_notices_and_evictions
/// GET    /{id}              -> get_notice
/// PUT    /{id}              -> update_notice
/// DELETE /{id}              -> delete_notice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notices_and_evictions::list_notices_and_evictions)
                .post(notices_and_evictions::create_notice),
        )
        .route("/export", get(notices_and_evictions::export_notices_and_evictions))
        .route(
            "/{id}",
            get(notices_and_evictions::get_notice)
                .put(notices_and_evictions::update_notice)
                .delete(notices_and_evictions::delete_notice),
        )
}
