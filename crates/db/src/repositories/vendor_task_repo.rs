//! Repository for the `vendor_tasks` table.

use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::types::DbId;
use propdesk_core::yes_no::YesNo;
use sqlx::PgPool;

use super::record_table::{RecordQuery, RecordTable};
use crate::models::vendor_task::{VendorTask, VendorTaskForm};

const TABLE: RecordTable = RecordTable {
    name: "vendor_tasks",
    fields: &[
        "vendor_name",
        "task",
        "submitted_date",
        "scheduled_visit_date",
        "completed_date",
        "status",
        "urgent",
        "notes",
    ],
};

/// Provides CRUD operations for vendor tasks.
pub struct VendorTaskRepo;

impl VendorTaskRepo {
    pub async fn list(
        pool: &PgPool,
        filter: LocationFilter,
        page: PageRequest,
    ) -> Result<(Vec<VendorTask>, i64), sqlx::Error> {
        TABLE.list_page(pool, filter, page).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VendorTask>, sqlx::Error> {
        TABLE.find_by_id(pool, id).await
    }

    pub async fn create(pool: &PgPool, input: &VendorTaskForm) -> Result<VendorTask, sqlx::Error> {
        let query = TABLE.insert_sql();
        bind_fields(sqlx::query_as(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VendorTaskForm,
    ) -> Result<Option<VendorTask>, sqlx::Error> {
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
    query: RecordQuery<'q, VendorTask>,
    input: &'q VendorTaskForm,
) -> RecordQuery<'q, VendorTask> {
    query
        .bind(input.city_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(&input.vendor_name)
        .bind(&input.task)
        .bind(input.submitted_date)
        .bind(input.scheduled_visit_date)
        .bind(input.completed_date)
        .bind(&input.status)
        .bind(input.urgent.map(YesNo::as_str))
        .bind(&input.notes)
}
