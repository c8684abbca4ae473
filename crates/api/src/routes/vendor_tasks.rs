//! Route definitions for vendor tasks.
//!
//! Mounted at `/vendor-tasks` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::vendor_tasks;
use crate::state::AppState;

/// Vendor task routes.
///
/// ```text
/// GET    /                  -> list_vendor_tasks
/// POST   /                  -> create_vendor_task
/// GET    /export            -> export_vendor_tasks
/// GET    /{id}              -> get_vendor_task
/// PUT    /{id}              -> update_vendor_task
/// DELETE /{id}              -> delete_vendor_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(vendor_tasks::list_vendor_tasks).post(vendor_tasks::create_vendor_task),
        )
        .route("/export", get(vendor_tasks::export_vendor_tasks))
        .route(
            "/{id}",
            get(vendor_tasks::get_vendor_task)
                .put(vendor_tasks::update_vendor_task)
                .delete(vendor_tasks::delete_vendor_task),
        )
}
