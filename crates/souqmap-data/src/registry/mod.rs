//! Canonical facet tables and the registry that owns them.
//!
//! The registry is immutable once built. Construction validates it:
//! a registry that could resolve the same input to different keys depending
//! on iteration order is rejected instead of silently picking one.

use ahash::AHashMap as HashMap;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, instrument};

mod schema;

pub use error::RegistryError;
pub use schema::{
    CategorySchema, FacetSchema, Fallback, FieldPath, TableRef, TaxonomyField,
    category_type_fields, first_present,
};

use crate::normalize::safe_form;

/// Key of the terminal fallback option every table carries.
pub const OTHER_KEY: &str = "other";
/// Name of the root category table.
pub const ROOT_TABLE: &str = "categories";

/// A canonical facet value and the spellings that refer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub key: String,
    pub label: String,
    pub aliases: Vec<String>,
}

impl FacetOption {
    pub fn new(key: &str, label: &str, aliases: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            aliases: aliases.iter().map(ToString::to_string).collect(),
        }
    }

    /// The terminal `"other"` option.
    pub fn other() -> Self {
        Self::new(
            OTHER_KEY,
            "أخرى",
            &["others", "أخرى", "غير ذلك", "متنوع", "متفرقات", "misc"],
        )
    }

    #[must_use]
    pub fn is_other(&self) -> bool {
        self.key == OTHER_KEY
    }

    /// The key followed by every alias.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// An ordered list of options for one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetTable {
    name: String,
    options: Vec<FacetOption>,
}

impl FacetTable {
    pub fn new(name: impl Into<String>, options: Vec<FacetOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn options(&self) -> &[FacetOption] {
        &self.options
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FacetOption> {
        self.options.iter().find(|o| o.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.get(key).map(|o| o.label.as_str())
    }

    /// Every option except the terminal `"other"`.
    pub fn specific(&self) -> impl Iterator<Item = &FacetOption> {
        self.options.iter().filter(|o| !o.is_other())
    }
}

/// All facet tables plus the category schemas that use them.
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    roots: FacetTable,
    tables: HashMap<String, FacetTable>,
    table_order: Vec<String>,
    categories: Vec<CategorySchema>,
}

impl TaxonomyRegistry {
    /// Build and validate a registry.
    ///
    /// Fails when a table lacks the `"other"` option, repeats a key, lets two
    /// of its options share a spelling, references an unknown table or root,
    /// or when two signal tables share a spelling (those tables compete when
    /// a listing's category is inferred from text).
    #[instrument(name = "Build TaxonomyRegistry", level = "debug", skip_all, fields(tables = tables.len(), categories = categories.len()))]
    pub fn new(
        roots: FacetTable,
        tables: Vec<FacetTable>,
        categories: Vec<CategorySchema>,
    ) -> Result<Self, RegistryError> {
        let table_order = tables.iter().map(|t| t.name.clone()).collect_vec();
        let mut by_name = HashMap::with_capacity(tables.len());
        for table in tables {
            if by_name.contains_key(&table.name) {
                return Err(RegistryError::DuplicateTable(table.name));
            }
            by_name.insert(table.name.clone(), table);
        }

        let registry = Self {
            roots,
            tables: by_name,
            table_order,
            categories,
        };
        registry.validate()?;
        debug!(
            roots = registry.roots.options.len(),
            "Taxonomy registry validated"
        );
        Ok(registry)
    }

    /// The registry shipped with the crate.
    pub fn builtin() -> Result<Self, RegistryError> {
        crate::embedded::builtin_registry()
    }

    #[must_use]
    pub fn roots(&self) -> &FacetTable {
        &self.roots
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&FacetTable> {
        if name == ROOT_TABLE {
            return Some(&self.roots);
        }
        self.tables.get(name)
    }

    /// Facet tables in registration order (the root table excluded).
    pub fn tables(&self) -> impl Iterator<Item = &FacetTable> {
        self.table_order.iter().filter_map(|name| self.tables.get(name))
    }

    #[must_use]
    pub fn categories(&self) -> &[CategorySchema] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, root: &str) -> Option<&CategorySchema> {
        self.categories.iter().find(|c| c.root == root)
    }

    /// Table backing `facet`, given the resolved parent key for per-parent
    /// facets.
    #[must_use]
    pub fn facet_table(&self, facet: &FacetSchema, parent: Option<&str>) -> Option<&FacetTable> {
        facet
            .table
            .resolve(parent)
            .and_then(|name| self.table(&name))
    }

    fn validate(&self) -> Result<(), RegistryError> {
        for table in std::iter::once(&self.roots).chain(self.tables()) {
            validate_table(table)?;
        }

        for category in &self.categories {
            if !self.roots.contains(category.root) {
                return Err(RegistryError::UnknownRoot(category.root.to_string()));
            }
            let facets = std::iter::once(&category.level1).chain(category.level2.as_ref());
            for facet in facets {
                if let TableRef::Fixed(name) = facet.table {
                    self.require_table(name)?;
                }
            }
            self.require_table(category.signal_table)?;
        }

        self.validate_signal_tables()
    }

    fn require_table(&self, name: &str) -> Result<(), RegistryError> {
        if self.tables.contains_key(name) {
            Ok(())
        } else {
            Err(RegistryError::UnknownTable(name.to_string()))
        }
    }

    fn validate_signal_tables(&self) -> Result<(), RegistryError> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let signal_tables = self
            .categories
            .iter()
            .map(|c| c.signal_table)
            .unique()
            .filter_map(|name| self.tables.get(name));

        for table in signal_tables {
            for spelling in table.specific().flat_map(FacetOption::spellings) {
                let form = safe_form(spelling);
                if form.is_empty() {
                    continue;
                }
                let first = *seen.entry(form).or_insert(table.name.as_str());
                if first != table.name {
                    return Err(RegistryError::CrossTableCollision {
                        alias: spelling.to_string(),
                        first_table: first.to_string(),
                        second_table: table.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn validate_table(table: &FacetTable) -> Result<(), RegistryError> {
    if !table.contains(OTHER_KEY) {
        return Err(RegistryError::MissingOther(table.name.clone()));
    }
    if let Some(key) = table.options.iter().map(|o| &o.key).duplicates().next() {
        return Err(RegistryError::DuplicateKey {
            table: table.name.clone(),
            key: key.clone(),
        });
    }

    let mut owners: HashMap<String, &str> = HashMap::new();
    for option in &table.options {
        for spelling in option.spellings() {
            let form = safe_form(spelling);
            if form.is_empty() {
                continue;
            }
            let owner = *owners.entry(form).or_insert(option.key.as_str());
            if owner != option.key {
                return Err(RegistryError::AliasCollision {
                    table: table.name.clone(),
                    alias: spelling.to_string(),
                    first: owner.to_string(),
                    second: option.key.clone(),
                });
            }
        }
    }
    Ok(())
}

mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum RegistryError {
        #[error("Table '{0}' has no \"other\" option")]
        MissingOther(String),
        #[error("Table '{0}' is registered twice")]
        DuplicateTable(String),
        #[error("Table '{table}' repeats key '{key}'")]
        DuplicateKey { table: String, key: String },
        #[error("Table '{table}': alias '{alias}' resolves to both '{first}' and '{second}'")]
        AliasCollision {
            table: String,
            alias: String,
            first: String,
            second: String,
        },
        #[error("Alias '{alias}' appears in both '{first_table}' and '{second_table}'")]
        CrossTableCollision {
            alias: String,
            first_table: String,
            second_table: String,
        },
        #[error("Unknown table '{0}'")]
        UnknownTable(String),
        #[error("Unknown root category '{0}'")]
        UnknownRoot(String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOLS_FIELDS: [FieldPath; 6] = category_type_fields("toolType");

    fn schema(root: &'static str, table: &'static str) -> CategorySchema {
        CategorySchema {
            root,
            level1: FacetSchema {
                field: TaxonomyField::CategoryType,
                table: TableRef::Fixed(table),
                sources: &TOOLS_FIELDS,
                fallback: Fallback::Other,
            },
            level2: None,
            signal_table: table,
        }
    }

    fn roots() -> FacetTable {
        FacetTable::new(
            ROOT_TABLE,
            vec![
                FacetOption::new("tools", "Tools", &[]),
                FacetOption::new("garden", "Garden", &[]),
                FacetOption::other(),
            ],
        )
    }

    #[test]
    fn test_valid_registry() {
        let registry = TaxonomyRegistry::new(
            roots(),
            vec![FacetTable::new(
                "toolTypes",
                vec![
                    FacetOption::new("drill", "Drill", &["drills", "power drill"]),
                    FacetOption::other(),
                ],
            )],
            vec![schema("tools", "toolTypes")],
        )
        .unwrap();

        assert_eq!(registry.category("tools").unwrap().root, "tools");
        assert!(registry.table(ROOT_TABLE).is_some());
        assert_eq!(registry.table("toolTypes").unwrap().label("drill"), Some("Drill"));
        assert_eq!(registry.tables().count(), 1);
    }

    #[test]
    fn test_missing_other_is_rejected() {
        let result = TaxonomyRegistry::new(
            roots(),
            vec![FacetTable::new(
                "toolTypes",
                vec![FacetOption::new("drill", "Drill", &[])],
            )],
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingOther("toolTypes".to_string())
        );
    }

    #[test]
    fn test_alias_collision_within_table() {
        let result = TaxonomyRegistry::new(
            roots(),
            vec![FacetTable::new(
                "toolTypes",
                vec![
                    FacetOption::new("drill", "Drill", &["Power-Drill"]),
                    FacetOption::new("driver", "Driver", &["power drill"]),
                    FacetOption::other(),
                ],
            )],
            vec![],
        );
        assert!(matches!(
            result,
            Err(RegistryError::AliasCollision { ref first, ref second, .. })
                if first == "drill" && second == "driver"
        ));
    }

    #[test]
    fn test_cross_signal_table_collision() {
        let result = TaxonomyRegistry::new(
            roots(),
            vec![
                FacetTable::new(
                    "toolTypes",
                    vec![FacetOption::new("saw", "Saw", &["cutter"]), FacetOption::other()],
                ),
                FacetTable::new(
                    "gardenTypes",
                    vec![FacetOption::new("shears", "Shears", &["Cutter"]), FacetOption::other()],
                ),
            ],
            vec![schema("tools", "toolTypes"), schema("garden", "gardenTypes")],
        );
        assert!(matches!(
            result,
            Err(RegistryError::CrossTableCollision { ref first_table, ref second_table, .. })
                if first_table == "toolTypes" && second_table == "gardenTypes"
        ));
    }

    #[test]
    fn test_other_option_may_repeat_across_signal_tables() {
        let result = TaxonomyRegistry::new(
            roots(),
            vec![
                FacetTable::new("toolTypes", vec![FacetOption::other()]),
                FacetTable::new("gardenTypes", vec![FacetOption::other()]),
            ],
            vec![schema("tools", "toolTypes"), schema("garden", "gardenTypes")],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_references() {
        let result = TaxonomyRegistry::new(roots(), vec![], vec![schema("tools", "toolTypes")]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnknownTable("toolTypes".to_string())
        );

        let result = TaxonomyRegistry::new(
            roots(),
            vec![FacetTable::new("toolTypes", vec![FacetOption::other()])],
            vec![schema("boats", "toolTypes")],
        );
        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnknownRoot("boats".to_string())
        );
    }
}
