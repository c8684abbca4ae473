//! City → property → unit cascading selection.
//!
//! [`LocationIndex`] holds the flat option lists plus parent→child index
//! maps sent to the filter bar. [`LocationCascadeFilter`] narrows the
//! property and unit option lists as ancestors are chosen and resets any
//! descendant selection when an ancestor changes. Options are only ever
//! sourced from the narrowed lists, so a selection that is not in the
//! current list is rejected and leaves the state untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A city option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityNode {
    pub id: DbId,
    pub name: String,
}

/// A property option, owned by a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNode {
    pub id: DbId,
    pub name: String,
    pub city_id: DbId,
}

/// A unit option, owned by a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitNode {
    pub id: DbId,
    pub name: String,
    pub property_id: DbId,
}

/// The three selector levels, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationLevel {
    City,
    Property,
    Unit,
}

impl LocationLevel {
    /// Form field carrying this level's id.
    pub fn field(self) -> &'static str {
        match self {
            LocationLevel::City => "city_id",
            LocationLevel::Property => "property_id",
            LocationLevel::Unit => "unit_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationLevel::City => "city",
            LocationLevel::Property => "property",
            LocationLevel::Unit => "unit",
        }
    }
}

/// A selection that was not offered by the current (narrowed) option list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {id} is not available for the current selection", .level.label())]
pub struct CascadeRejection {
    pub level: LocationLevel,
    pub id: DbId,
}

/// The committed `{city, property, unit}` filter triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub city: Option<DbId>,
    pub property: Option<DbId>,
    pub unit: Option<DbId>,
}

impl LocationFilter {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.property.is_none() && self.unit.is_none()
    }
}

/// Flat option lists plus the parent→child index maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIndex {
    pub cities: Vec<CityNode>,
    pub properties: Vec<PropertyNode>,
    pub units: Vec<UnitNode>,
    pub properties_by_city: BTreeMap<DbId, Vec<DbId>>,
    pub units_by_property: BTreeMap<DbId, Vec<DbId>>,
}

impl LocationIndex {
    /// Build an index, deriving the parent→child maps from the flat lists.
    ///
    /// List order is preserved both in the lists and inside each map entry.
    pub fn new(cities: Vec<CityNode>, properties: Vec<PropertyNode>, units: Vec<UnitNode>) -> Self {
        let mut properties_by_city: BTreeMap<DbId, Vec<DbId>> = BTreeMap::new();
        for p in &properties {
            properties_by_city.entry(p.city_id).or_default().push(p.id);
        }

        let mut units_by_property: BTreeMap<DbId, Vec<DbId>> = BTreeMap::new();
        for u in &units {
            units_by_property.entry(u.property_id).or_default().push(u.id);
        }

        Self {
            cities,
            properties,
            units,
            properties_by_city,
            units_by_property,
        }
    }

    pub fn city(&self, id: DbId) -> Option<&CityNode> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Properties belonging to `city_id`. Empty for an unknown city.
    pub fn properties_in(&self, city_id: DbId) -> Vec<&PropertyNode> {
        self.properties.iter().filter(|p| p.city_id == city_id).collect()
    }

    /// Units belonging to `property_id`. Empty for an unknown property.
    pub fn units_in(&self, property_id: DbId) -> Vec<&UnitNode> {
        self.units.iter().filter(|u| u.property_id == property_id).collect()
    }
}

/// Local selection state for one filter bar or form.
#[derive(Debug, Clone)]
pub struct LocationCascadeFilter<'a> {
    index: &'a LocationIndex,
    selected: LocationFilter,
    available_properties: Vec<&'a PropertyNode>,
    available_units: Vec<&'a UnitNode>,
}

impl<'a> LocationCascadeFilter<'a> {
    /// Start with nothing selected. Only cities are offered.
    pub fn new(index: &'a LocationIndex) -> Self {
        Self {
            index,
            selected: LocationFilter::default(),
            available_properties: Vec::new(),
            available_units: Vec::new(),
        }
    }

    pub fn cities(&self) -> &'a [CityNode] {
        &self.index.cities
    }

    /// Properties currently offered (narrowed by the selected city).
    pub fn properties(&self) -> &[&'a PropertyNode] {
        &self.available_properties
    }

    /// Units currently offered (narrowed by the selected property).
    pub fn units(&self) -> &[&'a UnitNode] {
        &self.available_units
    }

    /// The committed filter value.
    pub fn filter(&self) -> LocationFilter {
        self.selected
    }

    /// Select a city. Clears property and unit and narrows the property list.
    pub fn select_city(&mut self, id: DbId) -> Result<(), CascadeRejection> {
        if self.index.city(id).is_none() {
            return Err(CascadeRejection {
                level: LocationLevel::City,
                id,
            });
        }
        self.selected = LocationFilter {
            city: Some(id),
            property: None,
            unit: None,
        };
        self.available_properties = self.index.properties_in(id);
        self.available_units.clear();
        Ok(())
    }

    /// Select a property from the narrowed list. Clears the unit and narrows
    /// the unit list.
    pub fn select_property(&mut self, id: DbId) -> Result<(), CascadeRejection> {
        if !self.available_properties.iter().any(|p| p.id == id) {
            return Err(CascadeRejection {
                level: LocationLevel::Property,
                id,
            });
        }
        self.selected.property = Some(id);
        self.selected.unit = None;
        self.available_units = self.index.units_in(id);
        Ok(())
    }

    /// Select a unit from the narrowed list, committing the final value.
    pub fn select_unit(&mut self, id: DbId) -> Result<(), CascadeRejection> {
        if !self.available_units.iter().any(|u| u.id == id) {
            return Err(CascadeRejection {
                level: LocationLevel::Unit,
                id,
            });
        }
        self.selected.unit = Some(id);
        Ok(())
    }

    pub fn clear_city(&mut self) {
        self.selected = LocationFilter::default();
        self.available_properties.clear();
        self.available_units.clear();
    }

    pub fn clear_property(&mut self) {
        self.selected.property = None;
        self.selected.unit = None;
        self.available_units.clear();
    }

    pub fn clear_unit(&mut self) {
        self.selected.unit = None;
    }

    /// Apply a requested filter triple, silently dropping any level that is
    /// not reachable from its ancestors (and everything below it).
    pub fn sanitize(index: &'a LocationIndex, requested: LocationFilter) -> Self {
        let mut cascade = Self::new(index);
        let Some(city) = requested.city else {
            return cascade;
        };
        if let Err(rejection) = cascade.select_city(city) {
            tracing::debug!(%rejection, "Ignoring location filter selection");
            return cascade;
        }
        let Some(property) = requested.property else {
            return cascade;
        };
        if let Err(rejection) = cascade.select_property(property) {
            tracing::debug!(%rejection, "Ignoring location filter selection");
            return cascade;
        }
        if let Some(unit) = requested.unit {
            if let Err(rejection) = cascade.select_unit(unit) {
                tracing::debug!(%rejection, "Ignoring location filter selection");
            }
        }
        cascade
    }

    /// Apply a complete `{city, property, unit}` chain strictly, reporting the
    /// first level that is not reachable.
    pub fn resolve(
        index: &'a LocationIndex,
        city: DbId,
        property: DbId,
        unit: DbId,
    ) -> Result<Self, CascadeRejection> {
        let mut cascade = Self::new(index);
        cascade.select_city(city)?;
        cascade.select_property(property)?;
        cascade.select_unit(unit)?;
        Ok(cascade)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn city(id: DbId, name: &str) -> CityNode {
        CityNode {
            id,
            name: name.into(),
        }
    }

    fn property(id: DbId, name: &str, city_id: DbId) -> PropertyNode {
        PropertyNode {
            id,
            name: name.into(),
            city_id,
        }
    }

    fn unit(id: DbId, name: &str, property_id: DbId) -> UnitNode {
        UnitNode {
            id,
            name: name.into(),
            property_id,
        }
    }

    /// Two cities; Austin has two properties, Dallas one.
    fn sample() -> LocationIndex {
        LocationIndex::new(
            vec![city(1, "Austin"), city(2, "Dallas"), city(3, "Empty Town")],
            vec![
                property(10, "Oak Court", 1),
                property(11, "Pine Villas", 1),
                property(20, "Elm Plaza", 2),
            ],
            vec![
                unit(100, "A1", 10),
                unit(101, "A2", 10),
                unit(110, "B1", 11),
                unit(200, "C1", 20),
            ],
        )
    }

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> DbId) -> Vec<DbId> {
        items.iter().map(|item| id(item)).collect()
    }

    #[test]
    fn index_maps_group_children_by_parent() {
        let index = sample();
        assert_eq!(index.properties_by_city[&1], vec![10, 11]);
        assert_eq!(index.properties_by_city[&2], vec![20]);
        assert!(!index.properties_by_city.contains_key(&3));
        assert_eq!(index.units_by_property[&10], vec![100, 101]);
    }

    #[test]
    fn nothing_offered_below_city_initially() {
        let index = sample();
        let cascade = LocationCascadeFilter::new(&index);
        assert_eq!(cascade.cities().len(), 3);
        assert!(cascade.properties().is_empty());
        assert!(cascade.units().is_empty());
        assert!(cascade.filter().is_empty());
    }

    #[test]
    fn selecting_city_narrows_properties() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        assert_eq!(ids(cascade.properties(), |p| p.id), vec![10, 11]);
        assert!(cascade.units().is_empty());
    }

    #[test]
    fn city_without_properties_yields_empty_list() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(3).unwrap();
        assert!(cascade.properties().is_empty());

        for missing in [0, 3, 4, 999, -1] {
            assert!(index.properties_in(missing).is_empty());
        }
    }

    #[test]
    fn selecting_new_city_clears_property_and_unit() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(10).unwrap();
        cascade.select_unit(101).unwrap();

        cascade.select_city(2).unwrap();
        assert_eq!(
            cascade.filter(),
            LocationFilter {
                city: Some(2),
                property: None,
                unit: None,
            }
        );
        assert_eq!(ids(cascade.properties(), |p| p.id), vec![20]);
        assert!(cascade.units().is_empty());
    }

    #[test]
    fn reselecting_same_city_still_clears_descendants() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(11).unwrap();
        cascade.select_city(1).unwrap();
        assert_eq!(cascade.filter().property, None);
    }

    #[test]
    fn selecting_property_narrows_units_and_clears_unit() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(10).unwrap();
        cascade.select_unit(100).unwrap();
        assert_eq!(ids(cascade.units(), |u| u.id), vec![100, 101]);

        cascade.select_property(11).unwrap();
        assert_eq!(cascade.filter().unit, None);
        assert_eq!(ids(cascade.units(), |u| u.id), vec![110]);
    }

    #[test]
    fn property_outside_city_is_rejected_without_state_change() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(10).unwrap();

        let err = cascade.select_property(20).unwrap_err();
        assert_eq!(err.level, LocationLevel::Property);
        assert_eq!(err.id, 20);
        assert_eq!(cascade.filter().property, Some(10));
        assert_eq!(ids(cascade.units(), |u| u.id), vec![100, 101]);
    }

    #[test]
    fn property_before_city_is_rejected() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        assert_matches!(
            cascade.select_property(10),
            Err(CascadeRejection { level: LocationLevel::Property, .. })
        );
    }

    #[test]
    fn unit_outside_property_is_rejected() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(10).unwrap();
        assert_matches!(
            cascade.select_unit(110),
            Err(CascadeRejection { level: LocationLevel::Unit, id: 110 })
        );
        assert_eq!(cascade.filter().unit, None);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(10).unwrap();
        assert!(cascade.select_city(42).is_err());
        assert_eq!(cascade.filter().city, Some(1));
        assert_eq!(cascade.filter().property, Some(10));
    }

    #[test]
    fn clearing_levels_resets_descendants() {
        let index = sample();
        let mut cascade = LocationCascadeFilter::new(&index);
        cascade.select_city(1).unwrap();
        cascade.select_property(10).unwrap();
        cascade.select_unit(100).unwrap();

        cascade.clear_unit();
        assert_eq!(cascade.filter().unit, None);
        assert_eq!(cascade.units().len(), 2);

        cascade.clear_property();
        assert_eq!(cascade.filter().property, None);
        assert!(cascade.units().is_empty());
        assert_eq!(cascade.properties().len(), 2);

        cascade.clear_city();
        assert!(cascade.filter().is_empty());
        assert!(cascade.properties().is_empty());
    }

    #[test]
    fn sanitize_keeps_reachable_chain() {
        let index = sample();
        let requested = LocationFilter {
            city: Some(1),
            property: Some(11),
            unit: Some(110),
        };
        assert_eq!(LocationCascadeFilter::sanitize(&index, requested).filter(), requested);
    }

    #[test]
    fn sanitize_drops_unreachable_levels() {
        let index = sample();

        let mismatched_property = LocationFilter {
            city: Some(2),
            property: Some(10),
            unit: Some(100),
        };
        assert_eq!(
            LocationCascadeFilter::sanitize(&index, mismatched_property).filter(),
            LocationFilter {
                city: Some(2),
                property: None,
                unit: None,
            }
        );

        let mismatched_unit = LocationFilter {
            city: Some(1),
            property: Some(10),
            unit: Some(200),
        };
        assert_eq!(
            LocationCascadeFilter::sanitize(&index, mismatched_unit).filter(),
            LocationFilter {
                city: Some(1),
                property: Some(10),
                unit: None,
            }
        );
    }

    #[test]
    fn sanitize_ignores_orphan_children() {
        let index = sample();
        let requested = LocationFilter {
            city: None,
            property: Some(10),
            unit: Some(100),
        };
        assert!(LocationCascadeFilter::sanitize(&index, requested).filter().is_empty());
    }

    #[test]
    fn resolve_reports_first_broken_level() {
        let index = sample();
        assert!(LocationCascadeFilter::resolve(&index, 1, 10, 100).is_ok());
        assert_matches!(
            LocationCascadeFilter::resolve(&index, 9, 10, 100),
            Err(CascadeRejection { level: LocationLevel::City, id: 9 })
        );
        assert_matches!(
            LocationCascadeFilter::resolve(&index, 2, 10, 100),
            Err(CascadeRejection { level: LocationLevel::Property, id: 10 })
        );
        assert_matches!(
            LocationCascadeFilter::resolve(&index, 1, 11, 100),
            Err(CascadeRejection { level: LocationLevel::Unit, id: 100 })
        );
    }
}
