//! Repository for the `payments` table.

use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::types::DbId;
use propdesk_core::yes_no::YesNo;
use sqlx::PgPool;

use super::record_table::{RecordQuery, RecordTable};
use crate::models::payment::{Payment, PaymentForm};

const TABLE: RecordTable = RecordTable {
    name: "payments",
    fields: &[
        "tenant_name",
        "payment_date",
        "amount_owed",
        "amount_paid",
        "status",
        "reversed_payment",
        "permanent",
        "notes",
    ],
};

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    pub async fn list(
        pool: &PgPool,
        filter: LocationFilter,
        page: PageRequest,
    ) -> Result<(Vec<Payment>, i64), sqlx::Error> {
        TABLE.list_page(pool, filter, page).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        TABLE.find_by_id(pool, id).await
    }

    pub async fn create(pool: &PgPool, input: &PaymentForm) -> Result<Payment, sqlx::Error> {
        let query = TABLE.insert_sql();
        bind_fields(sqlx::query_as(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PaymentForm,
    ) -> Result<Option<Payment>, sqlx::Error> {
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
    query: RecordQuery<'q, Payment>,
    input: &'q PaymentForm,
) -> RecordQuery<'q, Payment> {
    query
        .bind(input.city_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(&input.tenant_name)
        .bind(input.payment_date)
        .bind(input.amount_owed)
        .bind(input.amount_paid)
        .bind(&input.status)
        .bind(input.reversed_payment.map(YesNo::as_str))
        .bind(input.permanent.map(YesNo::as_str))
        .bind(&input.notes)
}
