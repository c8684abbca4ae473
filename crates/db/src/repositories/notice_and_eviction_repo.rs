//! Repository for the `notices_and_evictions` table.

use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::types::DbId;
use propdesk_core::yes_no::YesNo;
use sqlx::PgPool;

use super::record_table::{RecordQuery, RecordTable};
use crate::models::notice_and_eviction::{NoticeAndEviction, NoticeAndEvictionForm};

const TABLE: RecordTable = RecordTable {
    name: "notices_and_evictions",
    fields: &[
        "tenant_name",
        "status",
        "notice_date",
        "notice_type",
        "has_exception",
        "evicted",
        "sent_to_attorney",
        "hearing_date",
        "outcome",
        "tenant_left",
        "writ_date",
        "notes",
    ],
};

/// Provides CRUD operations for notices and evictions.
pub struct NoticeAndEvictionRepo;

impl NoticeAndEvictionRepo {
    pub async fn list(
        pool: &PgPool,
        filter: LocationFilter,
        page: PageRequest,
    ) -> Result<(Vec<NoticeAndEviction>, i64), sqlx::Error> {
        TABLE.list_page(pool, filter, page).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<NoticeAndEviction>, sqlx::Error> {
        TABLE.find_by_id(pool, id).await
    }

    pub async fn create(
        pool: &PgPool,
        input: &NoticeAndEvictionForm,
    ) -> Result<NoticeAndEviction, sqlx::Error> {
        let query = TABLE.insert_sql();
        bind_fields(sqlx::query_as(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NoticeAndEvictionForm,
    ) -> Result<Option<NoticeAndEviction>, sqlx::Error> {
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
    query: RecordQuery<'q, NoticeAndEviction>,
    input: &'q NoticeAndEvictionForm,
) -> RecordQuery<'q, NoticeAndEviction> {
    query
        .bind(input.city_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(&input.tenant_name)
        .bind(&input.status)
        .bind(input.notice_date)
        .bind(&input.notice_type)
        .bind(input.has_exception.map(YesNo::as_str))
        .bind(input.evicted.map(YesNo::as_str))
        .bind(input.sent_to_attorney.map(YesNo::as_str))
        .bind(input.hearing_date)
        .bind(&input.outcome)
        .bind(input.tenant_left.map(YesNo::as_str))
        .bind(input.writ_date)
        .bind(&input.notes)
}
