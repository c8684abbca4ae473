//! Move-in records and the move-in drawer form.

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

/// A row from `move_ins`, with location display names attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MoveIn {
    pub id: DbId,
    pub city_id: DbId,
    pub property_id: DbId,
    pub unit_id: DbId,
    pub city_name: String,
    pub property_name: String,
    pub unit_name: String,
    pub tenant_name: String,
    pub lease_signed_date: Option<NaiveDate>,
    pub move_in_date: Option<NaiveDate>,
    pub paid_deposit_and_first_month: Option<String>,
    pub scheduled_paid_time: Option<String>,
    pub handed_keys: Option<String>,
    pub move_in_form_filled: Option<String>,
    pub utilities_under_our_name: Option<String>,
    pub eight_day_check_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create/edit form. PUT replaces every field with the submitted value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MoveInForm {
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
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub lease_signed_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub move_in_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub paid_deposit_and_first_month: Option<YesNo>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NAME_LEN))]
    pub scheduled_paid_time: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub handed_keys: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub move_in_form_filled: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub utilities_under_our_name: Option<YesNo>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub eight_day_check_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

impl_located_form!(MoveInForm);

impl CsvRecord for MoveIn {
    fn csv_columns() -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::new("ID", |r: &MoveIn| Cell::Id(r.id)),
            ColumnSpec::new("City", |r: &MoveIn| Cell::text(Some(&r.city_name))),
            ColumnSpec::new("Property", |r: &MoveIn| Cell::text(Some(&r.property_name))),
            ColumnSpec::new("Unit", |r: &MoveIn| Cell::text(Some(&r.unit_name))),
            ColumnSpec::new("Tenant Name", |r: &MoveIn| Cell::text(Some(&r.tenant_name))),
            ColumnSpec::new("Lease Signed", |r: &MoveIn| Cell::date(r.lease_signed_date)),
            ColumnSpec::new("Move-In Date", |r: &MoveIn| Cell::date(r.move_in_date)),
            ColumnSpec::new("Paid Deposit & First Month", |r: &MoveIn| {
                Cell::flag_str(r.paid_deposit_and_first_month.as_deref())
            }),
            ColumnSpec::new("Scheduled Paid Time", |r: &MoveIn| {
                Cell::text(r.scheduled_paid_time.as_deref())
            }),
            ColumnSpec::new("Handed Keys", |r: &MoveIn| Cell::flag_str(r.handed_keys.as_deref())),
            ColumnSpec::new("Move-In Form Filled", |r: &MoveIn| {
                Cell::flag_str(r.move_in_form_filled.as_deref())
            }),
            ColumnSpec::new("Utilities Under Our Name", |r: &MoveIn| {
                Cell::flag_str(r.utilities_under_our_name.as_deref())
            }),
            ColumnSpec::new("8-Day Check", |r: &MoveIn| Cell::date(r.eight_day_check_date)),
            ColumnSpec::new("Notes", |r: &MoveIn| Cell::text(r.notes.as_deref())),
        ]
    }
}
