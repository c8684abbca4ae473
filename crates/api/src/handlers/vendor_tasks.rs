//! Handlers for the vendor-tasks screen.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use propdesk_core::error::CoreError;
use propdesk_core::record_kind::RecordKind;
use propdesk_core::types::DbId;
use propdesk_db::models::vendor_task::VendorTaskForm;
use propdesk_db::repositories::VendorTaskRepo;

use super::records::{self, DeletedRecord, IndexQuery};
use crate::error::{AppError, AppResult};
use crate::query::IndexParams;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::VendorTask;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.entity(),
        id,
    })
}

/// GET /api/v1/vendor-tasks
pub async fn list_vendor_tasks(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, total) = VendorTaskRepo::list(&state.pool, query.filter, query.page).await?;
    Ok(Json(DataResponse {
        data: query.respond(KIND, rows, total),
    }))
}

/// GET /api/v1/vendor-tasks/export
///
/// CSV of the page the index would show for the same query.
pub async fn export_vendor_tasks(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, _) = VendorTaskRepo::list(&state.pool, query.filter, query.page).await?;
    records::csv_attachment(&state, KIND, &rows)
}

/// GET /api/v1/vendor-tasks/{id}
pub async fn get_vendor_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vendor_task = VendorTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: vendor_task }))
}

/// POST /api/v1/vendor-tasks
pub async fn create_vendor_task(
    State(state): State<AppState>,
    Json(input): Json<VendorTaskForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let vendor_task = VendorTaskRepo::create(&state.pool, &input).await?;

    tracing::info!(
        record_id = vendor_task.id,
        urgent = ?vendor_task.urgent,
        "Vendor task created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: vendor_task })))
}

/// PUT /api/v1/vendor-tasks/{id}
pub async fn update_vendor_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VendorTaskForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let vendor_task = VendorTaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(record_id = id, kind = %KIND, "Vendor task updated");

    Ok(Json(DataResponse { data: vendor_task }))
}

/// DELETE /api/v1/vendor-tasks/{id}
pub async fn delete_vendor_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    if !VendorTaskRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(record_id = id, kind = %KIND, "Vendor task deleted");

    Ok(Json(DataResponse {
        data: DeletedRecord {
            id,
            redirect_to: records::redirect_to(KIND, &params),
        },
    }))
}
