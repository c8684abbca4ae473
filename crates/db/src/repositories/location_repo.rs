//! Repository for the `cities`, `properties` and `units` tables.

use propdesk_core::location::LocationIndex;
use propdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{City, CreateCity, CreateProperty, CreateUnit, Property, Unit};

const CITY_COLUMNS: &str = "id, name, created_at, updated_at";
const PROPERTY_COLUMNS: &str = "id, city_id, name, created_at, updated_at";
const UNIT_COLUMNS: &str = "id, property_id, name, created_at, updated_at";

/// Reads and writes the location hierarchy.
pub struct LocationRepo;

impl LocationRepo {
    pub async fn create_city(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!("INSERT INTO cities (name) VALUES ($1) RETURNING {CITY_COLUMNS}");
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn create_property(
        pool: &PgPool,
        input: &CreateProperty,
    ) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (city_id, name) VALUES ($1, $2) RETURNING {PROPERTY_COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(input.city_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn create_unit(pool: &PgPool, input: &CreateUnit) -> Result<Unit, sqlx::Error> {
        let query = format!(
            "INSERT INTO units (property_id, name) VALUES ($1, $2) RETURNING {UNIT_COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(input.property_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_city(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {CITY_COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_property(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All cities ordered by name.
    pub async fn list_cities(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {CITY_COLUMNS} FROM cities ORDER BY name, id");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Properties ordered by name, optionally restricted to one city.
    pub async fn list_properties(
        pool: &PgPool,
        city_id: Option<DbId>,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties \
             WHERE ($1::BIGINT IS NULL OR city_id = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(city_id)
            .fetch_all(pool)
            .await
    }

    /// Units ordered by name, optionally restricted to one property.
    pub async fn list_units(
        pool: &PgPool,
        property_id: Option<DbId>,
    ) -> Result<Vec<Unit>, sqlx::Error> {
        let query = format!(
            "SELECT {UNIT_COLUMNS} FROM units \
             WHERE ($1::BIGINT IS NULL OR property_id = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    /// Load the whole hierarchy as a [`LocationIndex`].
    pub async fn load_index(pool: &PgPool) -> Result<LocationIndex, sqlx::Error> {
        let cities = Self::list_cities(pool).await?;
        let properties = Self::list_properties(pool, None).await?;
        let units = Self::list_units(pool, None).await?;
        Ok(LocationIndex::new(
            cities.into_iter().map(Into::into).collect(),
            properties.into_iter().map(Into::into).collect(),
            units.into_iter().map(Into::into).collect(),
        ))
    }
}
