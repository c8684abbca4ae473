//! Notice and eviction records.

use chrono::NaiveDate;
use propdesk_core::csv_export::{Cell, ColumnSpec, CsvRecord};
use propdesk_core::form::{
    deserialize_optional_id, deserialize_optional_text, not_blank, MAX_NAME_LEN, MAX_NOTES_LEN,
};
use propdesk_core::types::{DbId, Timestamp};
use propdesk_core::yes_no::YesNo;
use propdesk_core::{dates, yes_no};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::record::impl_located_form;

/// A row from `notices_and_evictions`, with location display names attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NoticeAndEviction {
    pub id: DbId,
    pub city_id: DbId,
    pub property_id: DbId,
    pub unit_id: DbId,
    pub city_name: String,
    pub property_name: String,
    pub unit_name: String,
    pub tenant_name: String,
    pub status: Option<String>,
    pub notice_date: Option<NaiveDate>,
    pub notice_type: Option<String>,
    pub has_exception: Option<String>,
    pub evicted: Option<String>,
    pub sent_to_attorney: Option<String>,
    pub hearing_date: Option<NaiveDate>,
    pub outcome: Option<String>,
    pub tenant_left: Option<String>,
    pub writ_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NoticeAndEvictionForm {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Please select a city."))]
    pub city_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Please select a property."))]
    pub property_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Please select a unit."))]
    pub unit_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(required, custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    pub tenant_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NAME_LEN))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub notice_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NAME_LEN))]
    pub notice_type: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub has_exception: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub evicted: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub sent_to_attorney: Option<YesNo>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub hearing_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NAME_LEN))]
    pub outcome: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub tenant_left: Option<YesNo>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub writ_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

impl_located_form!(NoticeAndEvictionForm);

impl CsvRecord for NoticeAndEviction {
    fn csv_columns() -> Vec<ColumnSpec<Self>> {
        type R = NoticeAndEviction;
        vec![
            ColumnSpec::new("ID", |r: &R| Cell::Id(r.id)),
            ColumnSpec::new("City", |r: &R| Cell::text(Some(&r.city_name))),
            ColumnSpec::new("Property", |r: &R| Cell::text(Some(&r.property_name))),
            ColumnSpec::new("Unit", |r: &R| Cell::text(Some(&r.unit_name))),
            ColumnSpec::new("Tenant Name", |r: &R| Cell::text(Some(&r.tenant_name))),
            ColumnSpec::new("Status", |r: &R| Cell::text(r.status.as_deref())),
            ColumnSpec::new("Notice Date", |r: &R| Cell::date(r.notice_date)),
            ColumnSpec::new("Notice Type", |r: &R| Cell::text(r.notice_type.as_deref())),
            ColumnSpec::new("Has Exception", |r: &R| Cell::flag_str(r.has_exception.as_deref())),
            ColumnSpec::new("Evicted", |r: &R| Cell::flag_str(r.evicted.as_deref())),
            ColumnSpec::new("Sent to Attorney", |r: &R| Cell::flag_str(r.sent_to_attorney.as_deref())),
            ColumnSpec::new("Hearing Date", |r: &R| Cell::date(r.hearing_date)),
            ColumnSpec::new("Outcome", |r: &R| Cell::text(r.outcome.as_deref())),
            ColumnSpec::new("Tenant Left", |r: &R| Cell::flag_str(r.tenant_left.as_deref())),
            ColumnSpec::new("Writ Date", |r: &R| Cell::date(r.writ_date)),
            ColumnSpec::new("Notes", |r: &R| Cell::text(r.notes.as_deref())),
        ]
    }
}
