//! Repository for the `move_outs` table.

use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::types::DbId;
use propdesk_core::yes_no::YesNo;
use sqlx::PgPool;

use super::record_table::{RecordQuery, RecordTable};
use crate::models::move_out::{MoveOut, MoveOutForm};

const TABLE: RecordTable = RecordTable {
    name: "move_outs",
    fields: &[
        "tenant_name",
        "move_out_date",
        "lock_removed_date",
        "walkthrough",
        "repairs",
        "cleaning",
        "deposit_returned",
        "deposit_returned_date",
        "list_the_unit",
        "move_out_form",
        "notes",
    ],
};

/// Provides CRUD operations for move-outs.
pub struct MoveOutRepo;

impl MoveOutRepo {
    pub async fn list(
        pool: &PgPool,
        filter: LocationFilter,
        page: PageRequest,
    ) -> Result<(Vec<MoveOut>, i64), sqlx::Error> {
        TABLE.list_page(pool, filter, page).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MoveOut>, sqlx::Error> {
        TABLE.find_by_id(pool, id).await
    }

    pub async fn create(pool: &PgPool, input: &MoveOutForm) -> Result<MoveOut, sqlx::Error> {
        let query = TABLE.insert_sql();
        bind_fields(sqlx::query_as(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MoveOutForm,
    ) -> Result<Option<MoveOut>, sqlx::Error> {
        let query = TABLE.update_sql();
        bind_fields(sqlx::query_as(&query).bind(id), input)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        TABLE.delete(pool, id).await
    }
}

/// Bind the location chain and `TABLE.fields`, in order.
fn bind_fields<'q>(
    query: RecordQuery<'q, MoveOut>,
    input: &'q MoveOutForm,
) -> RecordQuery<'q, MoveOut> {
    query
        .bind(input.city_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(&input.tenant_name)
        .bind(input.move_out_date)
        .bind(input.lock_removed_date)
        .bind(input.walkthrough.map(YesNo::as_str))
        .bind(&input.repairs)
        .bind(input.cleaning.map(YesNo::as_str))
        .bind(input.deposit_returned.map(YesNo::as_str))
        .bind(input.deposit_returned_date)
        .bind(input.list_the_unit.map(YesNo::as_str))
        .bind(input.move_out_form.map(YesNo::as_str))
        .bind(&input.notes)
}
