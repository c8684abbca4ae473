//! Move-out records and the move-out drawer form.

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

/// A row from `move_outs`, with location display names attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MoveOut {
    pub id: DbId,
    pub city_id: DbId,
    pub property_id: DbId,
    pub unit_id: DbId,
    pub city_name: String,
    pub property_name: String,
    pub unit_name: String,
    pub tenant_name: String,
    pub move_out_date: Option<NaiveDate>,
    pub lock_removed_date: Option<NaiveDate>,
    pub walkthrough: Option<String>,
    pub repairs: Option<String>,
    pub cleaning: Option<String>,
    pub deposit_returned: Option<String>,
    pub deposit_returned_date: Option<NaiveDate>,
    pub list_the_unit: Option<String>,
    pub move_out_form: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MoveOutForm {
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
    pub move_out_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub lock_removed_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub walkthrough: Option<YesNo>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub repairs: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub cleaning: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub deposit_returned: Option<YesNo>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub deposit_returned_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub list_the_unit: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub move_out_form: Option<YesNo>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

impl_located_form!(MoveOutForm);

impl CsvRecord for MoveOut {
    fn csv_columns() -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::new("ID", |r: &MoveOut| Cell::Id(r.id)),
            ColumnSpec::new("City", |r: &MoveOut| Cell::text(Some(&r.city_name))),
            ColumnSpec::new("Property", |r: &MoveOut| Cell::text(Some(&r.property_name))),
            ColumnSpec::new("Unit", |r: &MoveOut| Cell::text(Some(&r.unit_name))),
            ColumnSpec::new("Tenant Name", |r: &MoveOut| Cell::text(Some(&r.tenant_name))),
            ColumnSpec::new("Move-Out Date", |r: &MoveOut| Cell::date(r.move_out_date)),
            ColumnSpec::new("Lock Removed", |r: &MoveOut| Cell::date(r.lock_removed_date)),
            ColumnSpec::new("Walkthrough", |r: &MoveOut| Cell::flag_str(r.walkthrough.as_deref())),
            ColumnSpec::new("Repairs", |r: &MoveOut| Cell::text(r.repairs.as_deref())),
            ColumnSpec::new("Cleaning", |r: &MoveOut| Cell::flag_str(r.cleaning.as_deref())),
            ColumnSpec::new("Deposit Returned", |r: &MoveOut| {
                Cell::flag_str(r.deposit_returned.as_deref())
            }),
            ColumnSpec::new("Deposit Returned Date", |r: &MoveOut| {
                Cell::date(r.deposit_returned_date)
            }),
            ColumnSpec::new("List the Unit", |r: &MoveOut| Cell::flag_str(r.list_the_unit.as_deref())),
            ColumnSpec::new("Move-Out Form", |r: &MoveOut| Cell::flag_str(r.move_out_form.as_deref())),
            ColumnSpec::new("Notes", |r: &MoveOut| Cell::text(r.notes.as_deref())),
        ]
    }
}
