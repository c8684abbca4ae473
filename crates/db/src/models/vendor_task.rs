//! Vendor task records.

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

/// A row from `vendor_tasks`, with location display names attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VendorTask {
    pub id: DbId,
    pub city_id: DbId,
    pub property_id: DbId,
    pub unit_id: DbId,
    pub city_name: String,
    pub property_name: String,
    pub unit_name: String,
    pub vendor_name: String,
    pub task: String,
    pub submitted_date: Option<NaiveDate>,
    pub scheduled_visit_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub urgent: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VendorTaskForm {
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
    pub vendor_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(required, custom(function = "not_blank"), length(max = MAX_NOTES_LEN))]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub submitted_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub scheduled_visit_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub completed_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NAME_LEN))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub urgent: Option<YesNo>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

impl_located_form!(VendorTaskForm);

impl CsvRecord for VendorTask {
    fn csv_columns() -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::new("ID", |r: &VendorTask| Cell::Id(r.id)),
            ColumnSpec::new("City", |r: &VendorTask| Cell::text(Some(&r.city_name))),
            ColumnSpec::new("Property", |r: &VendorTask| Cell::text(Some(&r.property_name))),
            ColumnSpec::new("Unit", |r: &VendorTask| Cell::text(Some(&r.unit_name))),
            ColumnSpec::new("Vendor", |r: &VendorTask| Cell::text(Some(&r.vendor_name))),
            ColumnSpec::new("Task", |r: &VendorTask| Cell::text(Some(&r.task))),
            ColumnSpec::new("Submitted", |r: &VendorTask| Cell::date(r.submitted_date)),
            ColumnSpec::new("Scheduled Visit", |r: &VendorTask| Cell::date(r.scheduled_visit_date)),
            ColumnSpec::new("Completed", |r: &VendorTask| Cell::date(r.completed_date)),
            ColumnSpec::new("Status", |r: &VendorTask| Cell::text(r.status.as_deref())),
            ColumnSpec::new("Urgent", |r: &VendorTask| Cell::flag_str(r.urgent.as_deref())),
            ColumnSpec::new("Notes", |r: &VendorTask| Cell::text(r.notes.as_deref())),
        ]
    }
}
