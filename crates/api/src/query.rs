//! Shared query parameter types for API handlers.

use propdesk_core::form::deserialize_optional_id;
use propdesk_core::location::LocationFilter;
use propdesk_core::types::DbId;
use serde::Deserialize;

/// Index, export and delete query (`?city=&property=&unit=&perPage=&page=`).
///
/// Empty values (`city=`) mean "not set". `per_page` is accepted as an alias
/// of `perPage`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexParams {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub city: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub property: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub unit: Option<DbId>,
    #[serde(
        default,
        rename = "perPage",
        alias = "per_page",
        deserialize_with = "deserialize_optional_id"
    )]
    pub per_page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub page: Option<i64>,
}

impl IndexParams {
    /// The requested location triple, before cascade sanitizing.
    pub fn location(&self) -> LocationFilter {
        LocationFilter {
            city: self.city,
            property: self.property,
            unit: self.unit,
        }
    }

    /// Redirect context: every parameter that was set, in canonical order.
    pub fn context_pairs(&self) -> Vec<(&'static str, i64)> {
        [
            ("city", self.city),
            ("property", self.property),
            ("unit", self.unit),
            ("perPage", self.per_page),
            ("page", self.page),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}
