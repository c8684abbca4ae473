//! Route definitions for move-ins.
//!
//! Mounted at `/move-ins` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::move_ins;
use crate::state::AppState;

/// Move-in routes.
///
/// ```text
/// GET    /                  -> list_move_ins
/// POST   /                  -> create_move_in
/// GET    /export            -> export_move_ins
/// GET    /{id}              -> get_move_in
/// PUT    /{id}              -> update_move_in
/// DELETE /{id}              -> delete_move_in
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move_ins::list_move_ins).post(move_ins::create_move_in),
        )
        .route("/export", get(move_ins::export_move_ins))
        .route(
            "/{id}",
            get(move_ins::get_move_in)
                .put(move_ins::update_move_in)
                .delete(move_ins::delete_move_in),
        )
}
