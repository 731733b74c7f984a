//! Per-category classification schema.
//!
//! A category (root) classifies its listings with one or two facets. Each
//! facet names the taxonomy slot it fills, the table its options come from,
//! the ordered list of record fields that may carry a structured value, and
//! what to assign when nothing resolves.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::normalize::scalar_text;

/// Taxonomy slot a facet writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxonomyField {
    CarMake,
    CarModel,
    PhoneBrand,
    DealType,
    PropertyType,
    /// The single facet of every other category (`electronicsType`, ...).
    CategoryType,
}

/// One place a value may live on a raw listing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// A top-level field, `record[name]`.
    Top(&'static str),
    /// A field on a nested object, `record[parent][child]`.
    Nested(&'static str, &'static str),
}

impl FieldPath {
    /// Read this field as text. Missing fields, wrong-typed values and blank
    /// strings all yield `None`.
    #[must_use]
    pub fn probe(&self, record: &Value) -> Option<String> {
        let value = match *self {
            Self::Top(name) => record.get(name)?,
            Self::Nested(parent, child) => record.get(parent)?.get(child)?,
        };
        scalar_text(value)
    }
}

/// First non-empty value among `paths`, in order.
#[must_use]
pub fn first_present(paths: &[FieldPath], record: &Value) -> Option<String> {
    paths.iter().find_map(|path| path.probe(record))
}

/// Field list for a single-facet category: its dedicated field first, then
/// the generic sub-category fields older records use.
#[must_use]
pub const fn category_type_fields(primary: &'static str) -> [FieldPath; 6] {
    [
        FieldPath::Top(primary),
        FieldPath::Top("categoryType"),
        FieldPath::Top("subCategory"),
        FieldPath::Top("subcategory"),
        FieldPath::Top("subType"),
        FieldPath::Top("type"),
    ]
}

/// Value assigned when neither structured fields nor text resolve a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Assign the table's terminal `"other"` option.
    Other,
    /// Leave the facet empty.
    Unclassified,
}

/// Where a facet's options come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRef {
    /// A single named table.
    Fixed(&'static str),
    /// One table per resolved parent key, named `"{prefix}.{parent}"`.
    /// The facet is only inferred once the parent resolved to a specific,
    /// non-`"other"` option.
    PerParent(&'static str),
}

impl TableRef {
    /// Table name for the given parent key; `None` when a per-parent table
    /// has no usable parent.
    #[must_use]
    pub fn resolve(&self, parent: Option<&str>) -> Option<Cow<'static, str>> {
        match *self {
            Self::Fixed(name) => Some(Cow::Borrowed(name)),
            Self::PerParent(prefix) => parent
                .filter(|p| !p.is_empty() && *p != super::OTHER_KEY)
                .map(|p| Cow::Owned(format!("{prefix}.{p}"))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FacetSchema {
    pub field: TaxonomyField,
    pub table: TableRef,
    pub sources: &'static [FieldPath],
    pub fallback: Fallback,
}

/// How listings under one root are classified.
#[derive(Debug, Clone, Copy)]
pub struct CategorySchema {
    pub root: &'static str,
    pub level1: FacetSchema,
    /// Second facet; present only for two-level categories.
    pub level2: Option<FacetSchema>,
    /// Table whose specific options identify this category in free text
    /// when a record carries no usable category field.
    pub signal_table: &'static str,
}

impl CategorySchema {
    #[must_use]
    pub const fn is_two_level(&self) -> bool {
        self.level2.is_some()
    }
}
