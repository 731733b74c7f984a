use ahash::AHashMap;
use souqmap_data::TaxonomyRegistry;

use super::state::{ALL_ROOTS, FilterLevel, FilterState};
use crate::classify::ListingTaxonomy;

/// Listing count per facet key.
pub type FacetCountMap = AHashMap<String, usize>;

/// A level of the hierarchy whose sibling options are being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountLevel<'a> {
    /// Root categories.
    Root,
    /// First-level facet under `root`.
    Level1 { root: &'a str },
    /// Second-level facet under `root` and `level1`.
    Level2 { root: &'a str, level1: &'a str },
}

impl<'a> CountLevel<'a> {
    /// The level whose options are on offer in `state`.
    ///
    /// That is the level below the current selection, except at the deepest
    /// selection, where the siblings of the chosen option stay on display.
    pub fn displayed(state: &'a FilterState) -> Self {
        match state.level() {
            FilterLevel::Root(root) if root == ALL_ROOTS => Self::Root,
            FilterLevel::Root(root) => Self::Level1 { root },
            FilterLevel::Level1(root, level1) if state.is_two_level(root) => {
                Self::Level2 { root, level1 }
            }
            FilterLevel::Level1(root, _) => Self::Level1 { root },
            FilterLevel::Level2(root, level1, _) => Self::Level2 { root, level1 },
        }
    }
}

/// Count listings per option at `level`.
///
/// Listings outside the enclosing selection are skipped; listings with no
/// value at the counted level are omitted.
pub fn count_siblings<'t, I>(
    taxonomies: I,
    level: CountLevel<'_>,
    registry: &TaxonomyRegistry,
) -> FacetCountMap
where
    I: IntoIterator<Item = &'t ListingTaxonomy>,
{
    let mut counts = FacetCountMap::new();
    let schema = match level {
        CountLevel::Root => None,
        CountLevel::Level1 { root } | CountLevel::Level2 { root, .. } => {
            match registry.category(root) {
                Some(schema) => Some(schema),
                None => return counts,
            }
        }
    };

    for taxonomy in taxonomies {
        let key = match (level, schema) {
            (CountLevel::Root, _) => Some(taxonomy.root.as_str()),
            (CountLevel::Level1 { root }, Some(schema)) if taxonomy.root == root => {
                taxonomy.facet(&schema.level1)
            }
            (CountLevel::Level2 { root, level1 }, Some(schema))
                if taxonomy.root == root && taxonomy.facet(&schema.level1) == Some(level1) =>
            {
                schema
                    .level2
                    .as_ref()
                    .and_then(|facet| taxonomy.facet(facet))
            }
            _ => None,
        };

        if let Some(key) = key.filter(|key| !key.is_empty()) {
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
