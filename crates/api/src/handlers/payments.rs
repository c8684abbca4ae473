//! Handlers for the payments screen.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use propdesk_core::error::CoreError;
use propdesk_core::record_kind::RecordKind;
use propdesk_core::types::DbId;
use propdesk_db::models::payment::PaymentForm;
use propdesk_db::repositories::PaymentRepo;

use super::records::{self, DeletedRecord, IndexQuery};
use crate::error::{AppError, AppResult};
use crate::query::IndexParams;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::Payment;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.entity(),
        id,
    })
}

/// GET /api/v1/payments
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, total) = PaymentRepo::list(&state.pool, query.filter, query.page).await?;
    Ok(Json(DataResponse {
        data: query.respond(KIND, rows, total),
    }))
}

/// GET /api/v1/payments/export
///
/// CSV of the page the index would show for the same query.
pub async fn export_payments(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    let query = IndexQuery::load(&state, &params).await?;
    let (rows, _) = PaymentRepo::list(&state.pool, query.filter, query.page).await?;
    records::csv_attachment(&state, KIND, &rows)
}

/// GET /api/v1/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let payment = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: payment }))
}

/// POST /api/v1/payments
pub async fn create_payment(
    State(state): State<AppState>,
    Json(input): Json<PaymentForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let payment = PaymentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        record_id = payment.id,
        amount_paid = ?payment.amount_paid,
        "Payment recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: payment })))
}

/// PUT /api/v1/payments/{id}
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PaymentForm>,
) -> AppResult<impl IntoResponse> {
    records::check_record_form(&state, &input).await?;
    let payment = PaymentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(record_id = id, kind = %KIND, "Payment updated");

    Ok(Json(DataResponse { data: payment }))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IndexParams>,
) -> AppResult<impl IntoResponse> {
    if !PaymentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(record_id = id, kind = %KIND, "Payment deleted");

    Ok(Json(DataResponse {
        data: DeletedRecord {
            id,
            redirect_to: records::redirect_to(KIND, &params),
        },
    }))
}
