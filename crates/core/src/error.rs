use crate::form::FieldErrors;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Field-level validation failures, keyed by form field name.
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(FieldErrors),
}
