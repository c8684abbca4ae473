//! Handlers for the move-ins screen.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use propdesk_core::error::CoreError;
use propdesk_core::record_kind::RecordKind;
use propdesk_core::types::DbId;
use propdesk_db::models::move_in::MoveInForm;
use propdesk_db::repositories::MoveInRepo;

use super::records::{self, DeletedRecord, IndexQuery};
use crate::error::{AppError, AppResult};
use crate::query::IndexParams;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::MoveIn;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.entity(),
        id,
    })
}

/// GET /api/v1/move-ins
pub async fn list_move_ins(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, total) = MoveInRepo::list(&state.pool, query.filter, query.page).await?;
    Ok(Json(DataResponse {
        data: query.respond(KIND, rows, total),
    }))
}

/// GET /api/v1/move-ins/export
///
/// CSV of the page the index would show for the same query.
pub async fn export_move_ins(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, _) = MoveInRepo::list(&state.pool, query.filter, query.page).await?;
    records::csv_attachment(&state, KIND, &rows)
}

/// GET /api/v1/move-ins/{id}
pub async fn get_move_in(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let move_in = MoveInRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: move_in }))
}

/// POST /api/v1/move-ins
pub async fn create_move_in(
    State(state): State<AppState>,
    Json(input): Json<MoveInForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let move_in = MoveInRepo::create(&state.pool, &input).await?;

    tracing::info!(record_id = move_in.id, kind = %KIND, "Move-in created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: move_in })))
}

/// PUT /api/v1/move-ins/{id}
pub async fn update_move_in(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveInForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let move_in = MoveInRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(record_id = id, kind = %KIND, "Move-in updated");

    Ok(Json(DataResponse { data: move_in }))
}

/// DELETE /api/v1/move-ins/{id}
pub async fn delete_move_in(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    if !MoveInRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(record_id = id, kind = %KIND, "Move-in deleted");

    Ok(Json(DataResponse {
        data: DeletedRecord {
            id,
            redirect_to: records::redirect_to(KIND, &params),
        },
    }))
}
