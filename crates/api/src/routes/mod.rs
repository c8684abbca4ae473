pub mod health;
pub mod locations;
pub mod move_ins;
pub mod move_outs;
pub mod notices_and_evictions;
pub mod payments;
pub mod vendor_tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /locations                                       full location index
/// /cities                                          list, create
/// /cities/{id}/properties                          properties of a city
/// /properties                                      create
/// /properties/{id}/units                           units of a property
/// /units                                           create
///
/// /move-ins                                        index, create
/// /move-ins/export                                 CSV of the current page
/// /move-ins/{id}                                   get, replace, delete
///
/// /move-outs                                       index, create
/// /move-outs/export                                CSV of the current page
/// /move-outs/{id}                                  get, replace, delete
///
/// /notices-and-evictions                           index, create
/// /notices-and-evictions/export                    CSV of the current page
/// /notices-and-evictions/{id}                      get, replace, delete
///
/// /payments                                        index, create
/// /payments/export                                 CSV of the current page
/// /payments/{id}                                   get, replace, delete
///
/// /vendor-tasks                                    index, create
/// /vendor-tasks/export                             CSV of the current page
/// /vendor-tasks/{id}                               get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(locations::router())
        .nest("/move-ins", move_ins::router())
        .nest("/move-outs", move_outs::router())
        .nest("/notices-and-evictions", notices_and_evictions::router())
        .nest("/payments", payments::router())
        .nest("/vendor-tasks", vendor_tasks::router())
}
