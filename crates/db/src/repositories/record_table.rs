//! SQL shared by the record repositories.
//!
//! Every record table has `id`, the `city_id`/`property_id`/`unit_id` chain,
//! a kind-specific field list and timestamps. Reads join the three location
//! tables so each row carries `city_name`, `property_name` and `unit_name`.
//! Writes go through a CTE (`WITH r AS (INSERT ... RETURNING *)`) so the
//! returned row has the same shape as a read.

use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

const LOCATION_JOINS: &str = "JOIN cities c ON c.id = r.city_id \
     JOIN properties p ON p.id = r.property_id \
     JOIN units u ON u.id = r.unit_id";

const LOCATION_COLUMNS: &str = "r.city_id, r.property_id, r.unit_id, \
     c.name AS city_name, p.name AS property_name, u.name AS unit_name";

/// `$1`..`$3` are the optional city, property and unit ids.
const LOCATION_FILTER: &str = "($1::BIGINT IS NULL OR r.city_id = $1) \
     AND ($2::BIGINT IS NULL OR r.property_id = $2) \
     AND ($3::BIGINT IS NULL OR r.unit_id = $3)";

/// A record query awaiting its location and field binds.
pub type RecordQuery<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Static description of one record table.
#[derive(Debug, Clone, Copy)]
pub struct RecordTable {
    pub name: &'static str,
    /// Kind-specific columns in bind order, excluding the location chain.
    pub fields: &'static [&'static str],
}

impl RecordTable {
    fn select_list(&self) -> String {
        let mut columns = vec!["r.id".to_string(), LOCATION_COLUMNS.to_string()];
        columns.extend(self.fields.iter().map(|f| format!("r.{f}")));
        columns.push("r.created_at".to_string());
        columns.push("r.updated_at".to_string());
        columns.join(", ")
    }

    /// `SELECT ... FROM <table> r JOIN ...` with no WHERE clause.
    pub fn select_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} r {LOCATION_JOINS}",
            self.select_list(),
            self.name
        )
    }

    /// Insert binding `$1..$3` to the location chain and `$4..` to `fields`.
    pub fn insert_sql(&self) -> String {
        let columns: Vec<&str> = ["city_id", "property_id", "unit_id"]
            .into_iter()
            .chain(self.fields.iter().copied())
            .collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
        format!(
            "WITH r AS (INSERT INTO {} ({}) VALUES ({}) RETURNING *) \
             SELECT {} FROM r {LOCATION_JOINS}",
            self.name,
            columns.join(", "),
            placeholders.join(", "),
            self.select_list()
        )
    }

    /// Full-row update binding `$1` to the id, `$2..$4` to the location
    /// chain and `$5..` to `fields`.
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = ["city_id", "property_id", "unit_id"]
            .into_iter()
            .chain(self.fields.iter().copied())
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 2))
            .collect();
        format!(
            "WITH r AS (UPDATE {} SET {} WHERE id = $1 RETURNING *) \
             SELECT {} FROM r {LOCATION_JOINS}",
            self.name,
            assignments.join(", "),
            self.select_list()
        )
    }

    /// One page of rows matching `filter`, newest first, plus the total
    /// number of matching rows.
    pub async fn list_page<T>(
        &self,
        pool: &PgPool,
        filter: LocationFilter,
        page: PageRequest,
    ) -> Result<(Vec<T>, i64), sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let query = format!(
            "{} WHERE {LOCATION_FILTER} ORDER BY r.id DESC LIMIT $4 OFFSET $5",
            self.select_sql()
        );
        let rows = sqlx::query_as::<_, T>(&query)
            .bind(filter.city)
            .bind(filter.property)
            .bind(filter.unit)
            .bind(page.per_page)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM {} r WHERE {LOCATION_FILTER}", self.name);
        let (total,): (i64,) = sqlx::query_as(&count_query)
            .bind(filter.city)
            .bind(filter.property)
            .bind(filter.unit)
            .fetch_one(pool)
            .await?;

        Ok((rows, total))
    }

    pub async fn find_by_id<T>(&self, pool: &PgPool, id: DbId) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let query = format!("{} WHERE r.id = $1", self.select_sql());
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row by id. Returns `true` if a row was removed.
    pub async fn delete(&self, pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.name);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
