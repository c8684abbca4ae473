//! Pieces shared by the record handlers.
//!
//! Every record screen follows the same contract: the index answers with a
//! page of records, the applied filters and the location options; create and
//! update validate the drawer form (including the location chain) before
//! touching the database; delete answers with the index URL to return to;
//! export renders the current page as a CSV attachment.

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;
use validator::Validate;

use propdesk_core::csv_export::{export_filename, CsvExporter, CsvRecord};
use propdesk_core::form::validate_form;
use propdesk_core::location::{LocationCascadeFilter, LocationFilter, LocationIndex};
use propdesk_core::pagination::{page_url, Page, PageRequest};
use propdesk_core::record_kind::RecordKind;
use propdesk_core::types::DbId;
use propdesk_db::models::record::LocatedForm;
use propdesk_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::query::IndexParams;
use crate::state::AppState;

/// Prefix every API route is nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Response header carrying the number of rows the exporter dropped.
pub const DROPPED_ROWS_HEADER: &str = "x-export-dropped-rows";

/// The filter values the index actually applied.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    pub city: Option<DbId>,
    pub property: Option<DbId>,
    pub unit: Option<DbId>,
    pub per_page: i64,
    pub page: i64,
}

/// Index payload: `{records, filters, options}`.
#[derive(Debug, Serialize)]
pub struct IndexResponse<T: Serialize> {
    pub records: Page<T>,
    pub filters: AppliedFilters,
    pub options: LocationIndex,
}

/// Delete payload: the removed id and where the list view should go next.
#[derive(Debug, Serialize)]
pub struct DeletedRecord {
    pub id: DbId,
    pub redirect_to: String,
}

/// A resolved index request: the location options plus the sanitized
/// filter and the clamped page.
#[derive(Debug)]
pub struct IndexQuery {
    pub options: LocationIndex,
    pub filter: LocationFilter,
    pub page: PageRequest,
    per_page_requested: bool,
}

impl IndexQuery {
    /// Load the location options and run the requested filter through the
    /// cascade so unreachable selections are dropped.
    pub async fn load(state: &AppState, params: &IndexParams) -> AppResult<Self> {
        let options = LocationRepo::load_index(&state.pool).await?;
        let filter = LocationCascadeFilter::sanitize(&options, params.location()).filter();
        let page = state.config.page_request(params.page, params.per_page);
        Ok(Self {
            options,
            filter,
            page,
            per_page_requested: params.per_page.is_some(),
        })
    }

    /// Query pairs carried on every paginator link.
    fn link_query(&self) -> Vec<(&'static str, i64)> {
        let mut query: Vec<(&'static str, i64)> = [
            ("city", self.filter.city),
            ("property", self.filter.property),
            ("unit", self.filter.unit),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();
        if self.per_page_requested {
            query.push(("perPage", self.page.per_page));
        }
        query
    }

    /// Assemble the index payload for one page of `rows`.
    pub fn respond<T: Serialize>(self, kind: RecordKind, rows: Vec<T>, total: i64) -> IndexResponse<T> {
        let path = kind.index_path(API_PREFIX);
        let records = Page::new(rows, self.page, total, &path, &self.link_query());
        IndexResponse {
            records,
            filters: AppliedFilters {
                city: self.filter.city,
                property: self.filter.property,
                unit: self.filter.unit,
                per_page: self.page.per_page,
                page: self.page.page,
            },
            options: self.options,
        }
    }
}

/// Validate a record form: field rules first, then the location chain.
///
/// Every failure lands in one field bag so the drawer can show them all at
/// once. The chain is only checked when all three ids were supplied.
pub async fn check_record_form<F>(state: &AppState, form: &F) -> AppResult<()>
where
    F: Validate + LocatedForm,
{
    let mut errors = validate_form(form);

    if let (Some(city), Some(property), Some(unit)) =
        (form.city_id(), form.property_id(), form.unit_id())
    {
        let options = LocationRepo::load_index(&state.pool).await?;
        if let Err(rejection) = LocationCascadeFilter::resolve(&options, city, property, unit) {
            errors.add(
                rejection.level.field(),
                format!("The selected {} is invalid.", rejection.level.label()),
            );
        }
    }

    errors.into_result()?;
    Ok(())
}

/// Index URL with the redirect context restored.
pub fn redirect_to(kind: RecordKind, params: &IndexParams) -> String {
    page_url(&kind.index_path(API_PREFIX), &params.context_pairs(), None)
}

/// Render `rows` as a `text/csv` attachment named after the kind and today's date.
pub fn csv_attachment<R: CsvRecord>(
    state: &AppState,
    kind: RecordKind,
    rows: &[R],
) -> AppResult<Response> {
    let exporter = CsvExporter::new(&state.config.export_date_format)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let outcome = exporter
        .export_records(rows)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(
        kind = %kind,
        rows_written = outcome.rows_written,
        rows_dropped = outcome.rows_dropped,
        "CSV export generated",
    );

    let filename = export_filename(kind.slug(), Utc::now().date_naive());
    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
            (
                HeaderName::from_static(DROPPED_ROWS_HEADER),
                outcome.rows_dropped.to_string(),
            ),
        ],
        outcome.csv,
    )
        .into_response())
}
