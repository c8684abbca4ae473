//! Route definitions for move-outs.
//!
//! Mounted at `/move-outs` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::move_outs;
use crate::state::AppState;

/// Move-out routes.
///
/// ```text
/// GET    /                  -> list_move_outs
/// POST   /                  -> create_move_out
/// GET    /export            -> export_move_outs
/// GET    /{id}              -> get_move_out
/// PUT    /{id}              -> update_move_out
/// DELETE /{id}              -> delete_move_out
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move_outs::list_move_outs).post(move_outs::create_move_out),
        )
        .route("/export", get(move_outs::export_move_outs))
        .route(
            "/{id}",
            get(move_outs::get_move_out)
                .put(move_outs::update_move_out)
                .delete(move_outs::delete_move_out),
        )
}
