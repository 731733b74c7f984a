use serde::Serialize;
use serde_json::Value;
use souqmap_data::FacetTable;
use tracing::instrument;

use super::{
    counts::{CountLevel, FacetCountMap, count_siblings},
    state::{ALL_ROOTS, FilterLevel, FilterState, Rejection, Transition},
};
use crate::{
    core::{EnrichedListing, TaxonomyEngine},
    geo::{Coords, GeoBounds, ViewportState, within_bounds},
};

/// One selectable option as the rendering layer shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetChoice {
    pub key: String,
    pub label: String,
    pub count: usize,
    /// Whether selecting the option is allowed.
    pub enabled: bool,
}

/// A map marker for one listing of the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker<'a> {
    pub id: &'a str,
    pub root: &'a str,
    pub coords: Coords,
}

/// Filtering over one dataset snapshot.
///
/// Owns the enriched listings, the authoritative viewport and the filter
/// state. Every view the rendering layer draws is derived from these on
/// demand, so nothing can fall out of sync.
#[derive(Debug)]
pub struct FilterSession<'e> {
    engine: &'e TaxonomyEngine,
    listings: Vec<EnrichedListing>,
    viewport: ViewportState,
    state: FilterState,
}

impl<'e> FilterSession<'e> {
    pub(crate) fn new(engine: &'e TaxonomyEngine, listings: Vec<EnrichedListing>) -> Self {
        let state =
            FilterState::for_registry(engine.registry(), engine.config().locked_root.as_deref());
        Self {
            engine,
            listings,
            viewport: ViewportState::new(),
            state,
        }
    }

    /// Replace the dataset with a new snapshot, keeping the selection and
    /// viewport.
    #[instrument(name = "Replace snapshot", level = "debug", skip_all, fields(records = records.len()))]
    pub fn replace_records(&mut self, records: Vec<Value>) {
        self.listings = self.engine.enrich_all(records);
    }

    pub fn listings(&self) -> &[EnrichedListing] {
        &self.listings
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn set_viewport_bounds(&mut self, bounds: Option<GeoBounds>) {
        self.viewport.set_bounds(bounds);
    }

    pub fn set_nearby(&mut self, nearby: bool) {
        self.viewport.set_nearby(nearby);
    }

    /// Listings inside the viewport when "nearby" is on, else every listing.
    pub fn working_set(&self) -> Vec<&EnrichedListing> {
        match self.viewport.active_bounds() {
            Some(bounds) => within_bounds(&self.listings, bounds),
            None => self.listings.iter().collect(),
        }
    }

    /// Sibling counts at `level` over the working set.
    pub fn counts_at(&self, level: CountLevel<'_>) -> FacetCountMap {
        count_siblings(
            self.working_set().into_iter().map(|listing| &listing.taxonomy),
            level,
            self.engine.registry(),
        )
    }

    /// Sibling counts for the level currently on display.
    pub fn counts(&self) -> FacetCountMap {
        self.counts_at(CountLevel::displayed(&self.state))
    }

    /// Options of the displayed level in table order, with counts.
    ///
    /// Zero-count options are disabled.
    pub fn choices(&self) -> Vec<FacetChoice> {
        let level = CountLevel::displayed(&self.state);
        let Some(table) = self.table_at(level) else {
            return Vec::new();
        };
        let counts = self.counts_at(level);

        table
            .options()
            .iter()
            .map(|option| {
                let count = counts.get(&option.key).copied().unwrap_or(0);
                FacetChoice {
                    key: option.key.clone(),
                    label: option.label.clone(),
                    count,
                    enabled: count > 0,
                }
            })
            .collect()
    }

    /// The working set narrowed by the current selection.
    pub fn filtered(&self) -> Vec<&EnrichedListing> {
        let registry = self.engine.registry();
        let (root, level1, level2) = match self.state.level() {
            FilterLevel::Root(root) => (root, None, None),
            FilterLevel::Level1(root, f1) => (root, Some(f1), None),
            FilterLevel::Level2(root, f1, f2) => (root, Some(f1), Some(f2)),
        };

        self.working_set()
            .into_iter()
            .filter(|listing| root == ALL_ROOTS || listing.taxonomy.root == root)
            .filter(|listing| {
                level1.is_none_or(|key| listing.taxonomy.level1(registry) == Some(key))
            })
            .filter(|listing| {
                level2.is_none_or(|key| listing.taxonomy.level2(registry) == Some(key))
            })
            .collect()
    }

    /// Markers for the filtered listings that have a position.
    pub fn markers(&self) -> Vec<Marker<'_>> {
        self.filtered()
            .into_iter()
            .filter_map(|listing| {
                Some(Marker {
                    id: &listing.id,
                    root: &listing.taxonomy.root,
                    coords: listing.coords?,
                })
            })
            .collect()
    }

    /// Guarded [`FilterState::choose_root`]. `"all"` and the locked root are
    /// always selectable.
    pub fn choose_root(&mut self, root: &str) -> Transition {
        let exempt = root == ALL_ROOTS || self.state.locked_root().is_some();
        if !exempt {
            if let Some(rejected) = self.guard(CountLevel::Root, "choose_root", root) {
                return rejected;
            }
        }
        self.state.choose_root(root)
    }

    pub fn choose_level1(&mut self, key: &str) -> Transition {
        if let FilterLevel::Root(root) = self.state.level() {
            if root != ALL_ROOTS {
                if let Some(rejected) =
                    self.guard(CountLevel::Level1 { root }, "choose_level1", key)
                {
                    return rejected;
                }
            }
        }
        self.state.choose_level1(key)
    }

    pub fn choose_level2(&mut self, key: &str) -> Transition {
        if let FilterLevel::Level1(root, level1) = self.state.level() {
            if self.state.is_two_level(root) {
                let level = CountLevel::Level2 { root, level1 };
                if let Some(rejected) = self.guard(level, "choose_level2", key) {
                    return rejected;
                }
            }
        }
        self.state.choose_level2(key)
    }

    pub fn back_one_level(&mut self) -> Transition {
        self.state.back_one_level()
    }

    pub fn reset(&mut self) -> Transition {
        self.state.reset()
    }

    fn table_at(&self, level: CountLevel<'_>) -> Option<&'e FacetTable> {
        let registry = self.engine.registry();
        match level {
            CountLevel::Root => Some(registry.roots()),
            CountLevel::Level1 { root } => {
                let category = registry.category(root)?;
                registry.facet_table(&category.level1, None)
            }
            CountLevel::Level2 { root, level1 } => {
                let category = registry.category(root)?;
                registry.facet_table(category.level2.as_ref()?, Some(level1))
            }
        }
    }

    /// Reject selecting `key` when it has no listings at `level`.
    fn guard(&self, level: CountLevel<'_>, transition: &str, key: &str) -> Option<Transition> {
        if key.is_empty() || self.counts_at(level).get(key).copied().unwrap_or(0) > 0 {
            return None;
        }
        Some(self.state.reject(transition, key, Rejection::ZeroCount))
    }
}
