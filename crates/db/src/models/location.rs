//! City, property and unit models and DTOs.

use propdesk_core::form::{
    deserialize_optional_id, deserialize_optional_text, not_blank, MAX_NAME_LEN,
};
use propdesk_core::location::{CityNode, PropertyNode, UnitNode};
use propdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub city_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `units` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: DbId,
    pub property_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<City> for CityNode {
    fn from(city: City) -> Self {
        CityNode {
            id: city.id,
            name: city.name,
        }
    }
}

impl From<Property> for PropertyNode {
    fn from(property: Property) -> Self {
        PropertyNode {
            id: property.id,
            name: property.name,
            city_id: property.city_id,
        }
    }
}

impl From<Unit> for UnitNode {
    fn from(unit: Unit) -> Self {
        UnitNode {
            id: unit.id,
            name: unit.name,
            property_id: unit.property_id,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a city.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCity {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(required, custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    pub name: Option<String>,
}

/// DTO for creating a property under a city.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProperty {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Please select a city."))]
    pub city_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(required, custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    pub name: Option<String>,
}

/// DTO for creating a unit under a property.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUnit {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Please select a property."))]
    pub property_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(required, custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    pub name: Option<String>,
}
