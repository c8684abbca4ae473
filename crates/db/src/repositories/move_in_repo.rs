//! Repository for the `move_ins` table.

use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::types::DbId;
use propdesk_core::yes_no::YesNo;
use sqlx::PgPool;

use super::record_table::{RecordQuery, RecordTable};
use crate::models::move_in::{MoveIn, MoveInForm};

const TABLE: RecordTable = RecordTable {
    name: "move_ins",
    fields: &[
        "tenant_name",
        "lease_signed_date",
        "move_in_date",
        "paid_deposit_and_first_month",
        "scheduled_paid_time",
        "handed_keys",
        "move_in_form_filled",
        "utilities_under_our_name",
        "eight_day_check_date",
        "notes",
    ],
};

/// Provides CRUD operations for move-ins.
pub struct MoveInRepo;

impl MoveInRepo {
    /// One page of move-ins matching `filter`, plus the total match count.
    pub async fn list(
        pool: &PgPool,
        filter: LocationFilter,
        page: PageRequest,
    ) -> Result<(Vec<MoveIn>, i64), sqlx::Error> {
        TABLE.list_page(pool, filter, page).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MoveIn>, sqlx::Error> {
        TABLE.find_by_id(pool, id).await
    }

    /// Insert a validated form.
    pub async fn create(pool: &PgPool, input: &MoveInForm) -> Result<MoveIn, sqlx::Error> {
        let query = TABLE.insert_sql();
        bind_fields(sqlx::query_as(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Replace every field of a move-in. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MoveInForm,
    ) -> Result<Option<MoveIn>, sqlx::Error> {
        let query = TABLE.update_sql();
        bind_fields(sqlx::query_as(&query).bind(id), input)
            .fetch_optional(pool)
            .await
    }

    /// Delete a move-in by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        TABLE.delete(pool, id).await
    }
}

/// Bind the location chain and `TABLE.fields`, in order.
fn bind_fields<'q>(
    query: RecordQuery<'q, MoveIn>,
    input: &'q MoveInForm,
) -> RecordQuery<'q, MoveIn> {
    query
        .bind(input.city_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(&input.tenant_name)
        .bind(input.lease_signed_date)
        .bind(input.move_in_date)
        .bind(input.paid_deposit_and_first_month.map(YesNo::as_str))
        .bind(&input.scheduled_paid_time)
        .bind(input.handed_keys.map(YesNo::as_str))
        .bind(input.move_in_form_filled.map(YesNo::as_str))
        .bind(input.utilities_under_our_name.map(YesNo::as_str))
        .bind(input.eight_day_check_date)
        .bind(&input.notes)
}
