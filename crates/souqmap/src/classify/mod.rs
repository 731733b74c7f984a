//! Listing classification: alias matching, free-text detection and the
//! per-listing taxonomy snapshot built from them.

mod detector;
mod inference;
mod matcher;

use serde::Serialize;
use souqmap_data::{FacetSchema, TaxonomyField, TaxonomyRegistry};

pub use detector::detect_key;
pub use inference::{CATEGORY_FIELDS, Classifier};
pub use matcher::{CompiledTable, match_key};

/// Derived classification of one listing.
///
/// Only the fields belonging to `root`'s category are ever populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingTaxonomy {
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
}

impl ListingTaxonomy {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: TaxonomyField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: TaxonomyField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// The value of `facet` on this listing.
    pub fn facet(&self, facet: &FacetSchema) -> Option<&str> {
        self.get(facet.field)
    }

    /// First-level facet value under the listing's own root.
    pub fn level1<'a>(&'a self, registry: &TaxonomyRegistry) -> Option<&'a str> {
        let schema = registry.category(&self.root)?;
        self.facet(&schema.level1)
    }

    /// Second-level facet value under the listing's own root.
    pub fn level2<'a>(&'a self, registry: &TaxonomyRegistry) -> Option<&'a str> {
        let schema = registry.category(&self.root)?;
        self.facet(schema.level2.as_ref()?)
    }

    fn slot(&self, field: TaxonomyField) -> &Option<String> {
        match field {
            TaxonomyField::CarMake => &self.car_make,
            TaxonomyField::CarModel => &self.car_model,
            TaxonomyField::PhoneBrand => &self.phone_brand,
            TaxonomyField::DealType => &self.deal_type,
            TaxonomyField::PropertyType => &self.property_type,
            TaxonomyField::CategoryType => &self.category_type,
        }
    }

    fn slot_mut(&mut self, field: TaxonomyField) -> &mut Option<String> {
        match field {
            TaxonomyField::CarMake => &mut self.car_make,
            TaxonomyField::CarModel => &mut self.car_model,
            TaxonomyField::PhoneBrand => &mut self.phone_brand,
            TaxonomyField::DealType => &mut self.deal_type,
            TaxonomyField::PropertyType => &mut self.property_type,
            TaxonomyField::CategoryType => &mut self.category_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let mut taxonomy = ListingTaxonomy::new("cars");
        taxonomy.set(TaxonomyField::CarMake, Some("toyota".to_string()));
        assert_eq!(taxonomy.get(TaxonomyField::CarMake), Some("toyota"));
        assert_eq!(taxonomy.get(TaxonomyField::CarModel), None);

        let registry = TaxonomyRegistry::builtin().unwrap();
        assert_eq!(taxonomy.level1(&registry), Some("toyota"));
        assert_eq!(taxonomy.level2(&registry), None);
    }

    #[test]
    fn test_serializes_populated_fields_only() {
        let mut taxonomy = ListingTaxonomy::new("realestate");
        taxonomy.set(TaxonomyField::PropertyType, Some("villa".to_string()));
        let json = serde_json::to_value(&taxonomy).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"root": "realestate", "propertyType": "villa"})
        );
    }
}
