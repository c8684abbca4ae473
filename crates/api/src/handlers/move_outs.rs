//! Handlers for the move-outs screen.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use propdesk_core::error::CoreError;
use propdesk_core::record_kind::RecordKind;
use propdesk_core::types::DbId;
use propdesk_db::models::move_out::MoveOutForm;
use propdesk_db::repositories::MoveOutRepo;

use super::records::{self, DeletedRecord, IndexQuery};
use crate::error::{AppError, AppResult};
use crate::query::IndexParams;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::MoveOut;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.entity(),
        id,
    })
}

/// GET /api/v1/move-outs
pub async fn list_move_outs(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, total) = MoveOutRepo::list(&state.pool, query.filter, query.page).await?;
    Ok(Json(DataResponse {
        data: query.respond(KIND, rows, total),
    }))
}

/// GET /api/v1/move-outs/export
///
/// CSV of the page the index would show for the same query.
pub async fn export_move_outs(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, _) = MoveOutRepo::list(&state.pool, query.filter, query.page).await?;
    records::csv_attachment(&state, KIND, &rows)
}

/// GET /api/v1/move-outs/{id}
pub async fn get_move_out(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let move_out = MoveOutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: move_out }))
}

/// POST /api/v1/move-outs
pub async fn create_move_out(
    State(state): State<AppState>,
    Json(input): Json<MoveOutForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let move_out = MoveOutRepo::create(&state.pool, &input).await?;

    tracing::info!(record_id = move_out.id, kind = %KIND, "Move-out created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: move_out })))
}

/// PUT /api/v1/move-outs/{id}
pub async fn update_move_out(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveOutForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let move_out = MoveOutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(record_id = id, kind = %KIND, "Move-out updated");

    Ok(Json(DataResponse { data: move_out }))
}

/// DELETE /api/v1/move-outs/{id}
pub async fn delete_move_out(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    if !MoveOutRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(record_id = id, kind = %KIND, "Move-out deleted");

    Ok(Json(DataResponse {
        data: DeletedRecord {
            id,
            redirect_to: records::redirect_to(KIND, &params),
        },
    }))
}
