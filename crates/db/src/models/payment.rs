//! Payment records.

use chrono::NaiveDate;
use propdesk_core::csv_export::{Cell, ColumnSpec, CsvRecord};
use propdesk_core::form::{
    deserialize_optional_amount, deserialize_optional_id, deserialize_optional_text,
    non_negative, not_blank, MAX_NAME_LEN, MAX_NOTES_LEN,
};
use propdesk_core::types::{DbId, Timestamp};
use propdesk_core::yes_no::YesNo;
use propdesk_core::{dates, yes_no};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::record::impl_located_form;

/// A row from `payments`, with location display names attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub city_id: DbId,
    pub property_id: DbId,
    pub unit_id: DbId,
    pub city_name: String,
    pub property_name: String,
    pub unit_name: String,
    pub tenant_name: String,
    pub payment_date: Option<NaiveDate>,
    pub amount_owed: Option<f64>,
    pub amount_paid: Option<f64>,
    pub status: Option<String>,
    pub reversed_payment: Option<String>,
    pub permanent: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaymentForm {
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
    pub payment_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    #[validate(custom(function = "non_negative"))]
    pub amount_owed: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    #[validate(custom(function = "non_negative"))]
    pub amount_paid: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NAME_LEN))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub reversed_payment: Option<YesNo>,
    #[serde(default, deserialize_with = "yes_no::deserialize_optional")]
    pub permanent: Option<YesNo>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

impl_located_form!(PaymentForm);

impl CsvRecord for Payment {
    fn csv_columns() -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::new("ID", |r: &Payment| Cell::Id(r.id)),
            ColumnSpec::new("City", |r: &Payment| Cell::text(Some(&r.city_name))),
            ColumnSpec::new("Property", |r: &Payment| Cell::text(Some(&r.property_name))),
            ColumnSpec::new("Unit", |r: &Payment| Cell::text(Some(&r.unit_name))),
            ColumnSpec::new("Tenant Name", |r: &Payment| Cell::text(Some(&r.tenant_name))),
            ColumnSpec::new("Payment Date", |r: &Payment| Cell::date(r.payment_date)),
            ColumnSpec::new("Owes", |r: &Payment| Cell::Amount(r.amount_owed)),
            ColumnSpec::new("Paid", |r: &Payment| Cell::Amount(r.amount_paid)),
            ColumnSpec::new("Status", |r: &Payment| Cell::text(r.status.as_deref())),
            ColumnSpec::new("Reversed Payment", |r: &Payment| {
                Cell::flag_str(r.reversed_payment.as_deref())
            }),
            ColumnSpec::new("Permanent", |r: &Payment| Cell::flag_str(r.permanent.as_deref())),
            ColumnSpec::new("Notes", |r: &Payment| Cell::text(r.notes.as_deref())),
        ]
    }
}
