//! Route definitions for payments.
//!
//! Mounted at `/payments` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Payment routes.
///
/// ```text
/// GET    /                  -> list_payments
/// POST   /                  -> create_payment
/// GET    /export            -> export_payments
/// GET    /{id}              -> get_payment
/// PUT    /{id}              -> update_payment
/// DELETE /{id}              -> delete_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route("/export", get(payments::export_payments))
        .route(
            "/{id}",
            get(payments::get_payment)
                .put(payments::update_payment)
                .delete(payments::delete_payment),
        )
}
