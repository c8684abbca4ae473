//! Pieces shared by every back-office record kind.

use propdesk_core::types::DbId;

/// A create/edit form pinned to a city → property → unit chain.
///
/// Lets handlers check the submitted chain against the location cascade
/// without knowing the concrete record kind.
pub trait LocatedForm {
    fn city_id(&self) -> Option<DbId>;
    fn property_id(&self) -> Option<DbId>;
    fn unit_id(&self) -> Option<DbId>;
}

/// Implements [`LocatedForm`] for a form struct with `city_id`,
/// `property_id` and `unit_id` fields.
macro_rules! impl_located_form {
    ($form:ty) => {
        impl $crate::models::record::LocatedForm for $form {
            fn city_id(&self) -> Option<propdesk_core::types::DbId> {
                self.city_id
            }
            fn property_id(&self) -> Option<propdesk_core::types::DbId> {
                self.property_id
            }
            fn unit_id(&self) -> Option<propdesk_core::types::DbId> {
                self.unit_id
            }
        }
    };
}

pub(crate) use impl_located_form;
