//! Domain logic shared by the property-management back office.
//!
//! This crate has no I/O: location cascading, CSV export, pagination and
//! form normalization are pure transforms used by the repository and HTTP
//! layers.

pub mod csv_export;
pub mod dates;
pub mod error;
pub mod form;
pub mod location;
pub mod pagination;
pub mod record_kind;
pub mod types;
pub mod yes_no;
