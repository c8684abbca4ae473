//! Handlers for the notices and evictions screen.
//!
//! Covers both the initial notice and the court track (hearing, writ).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use propdesk_core::error::CoreError;
use propdesk_core::record_kind::RecordKind;
use propdesk_core::types::DbId;
use propdesk_db::models::notice_and_eviction::NoticeAndEvictionForm;
use propdesk_db::repositories::NoticeAndEvictionRepo;

use super::records::{self, DeletedRecord, IndexQuery};
use crate::error::{AppError, AppResult};
use crate::query::IndexParams;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::NoticeAndEviction;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.entity(),
        id,
    })
}

/// GET /api/v1/notices-and-evictions
pub async fn list_notices_and_evictions(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, total) = NoticeAndEvictionRepo::list(&state.pool, query.filter, query.page).await?;
    Ok(Json(DataResponse {
        data: query.respond(KIND, rows, total),
    }))
}

/// GET /api/v1/notices-and-evictions/export
///
/// CSV of the page the index would show for the same query.
pub async fn export_notices_and_evictions(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, _) = NoticeAndEvictionRepo::list(&state.pool, query.filter, query.page).await?;
    records::csv_attachment(&state, KIND, &rows)
}

/// GET /api/v1/notices-and-evictions/{id}
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let notice = NoticeAndEvictionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: notice }))
}

/// POST /api/v1/notices-and-evictions
pub async fn create_notice(
    State(state): State<AppState>,
    Json(input): Json<NoticeAndEvictionForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let notice = NoticeAndEvictionRepo::create(&state.pool, &input).await?;

    tracing::info!(record_id = notice.id, kind = %KIND, "Notice created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: notice })))
}

/// PUT /api/v1/notices-and-evictions/{id}
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NoticeAndEvictionForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let notice = NoticeAndEvictionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(record_id = id, kind = %KIND, "Notice updated");

    Ok(Json(DataResponse { data: notice }))
}

/// DELETE /api/v1/notices-and-evictions/{id}
pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    if !NoticeAndEvictionRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(record_id = id, kind = %KIND, "Notice deleted");

    Ok(Json(DataResponse {
        data: DeletedRecord {
            id,
            redirect_to: records::redirect_to(KIND, &params),
        },
    }))
}
