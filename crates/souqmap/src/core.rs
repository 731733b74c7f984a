use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use souqmap_data::{TaxonomyRegistry, listing_id};
use tracing::{info, instrument};

use crate::{
    Result,
    classify::{Classifier, CompiledTable, ListingTaxonomy},
    config::{ConfigError, EngineConfig},
    filter::FilterSession,
    geo::{Coords, Located, normalize_coords},
};

/// A raw listing with its derived taxonomy and position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedListing {
    pub id: String,
    pub taxonomy: ListingTaxonomy,
    /// `None` when the record carries no usable position; such listings are
    /// left out of every map view.
    pub coords: Option<Coords>,
    #[serde(skip)]
    pub record: Value,
}

impl Located for EnrichedListing {
    fn coords(&self) -> Option<Coords> {
        self.coords
    }
}

/// Entry point for classifying listings and filtering them.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use souqmap::TaxonomyEngine;
///
/// let engine = TaxonomyEngine::new()?;
/// let listing = json!({"title": "هايلوكس غمارتين للبيع", "category": "cars"});
///
/// let taxonomy = engine.classify(&listing);
/// assert_eq!(taxonomy.car_make.as_deref(), Some("toyota"));
/// # Ok::<(), souqmap::error::SouqmapError>(())
/// ```
#[derive(Debug)]
pub struct TaxonomyEngine {
    classifier: Classifier,
    config: EngineConfig,
}

impl TaxonomyEngine {
    /// Engine over the builtin taxonomy with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Engine over the builtin taxonomy.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::with_registry(TaxonomyRegistry::builtin()?, config)
    }

    /// Engine over a custom taxonomy.
    #[instrument(name = "Create taxonomy engine", level = "info", skip_all)]
    pub fn with_registry(registry: TaxonomyRegistry, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if let Some(locked) = &config.locked_root {
            if !registry.roots().contains(locked) {
                return Err(ConfigError::UnknownLockedRoot(locked.clone()).into());
            }
        }
        info!(
            categories = registry.categories().len(),
            locked_root = ?config.locked_root,
            text_fallback = config.text_fallback,
            "Taxonomy engine ready"
        );
        Ok(Self {
            classifier: Classifier::new(registry, config.text_fallback),
            config,
        })
    }

    pub fn registry(&self) -> &TaxonomyRegistry {
        self.classifier.registry()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Compiled table by name; `"categories"` is the root table.
    pub fn table(&self, name: &str) -> Option<&CompiledTable> {
        self.classifier.table(name)
    }

    /// Resolve `value` against the named table.
    pub fn match_key(&self, value: &Value, table: &str) -> Option<&str> {
        self.table(table)?.match_value(value)
    }

    /// Find the first option of the named table mentioned in `text`.
    pub fn detect_key(&self, text: &str, table: &str) -> Option<&str> {
        self.table(table)?.detect(text)
    }

    pub fn infer_root(&self, record: &Value) -> String {
        self.classifier.infer_root(record)
    }

    pub fn infer_taxonomy(&self, record: &Value, root: &str) -> ListingTaxonomy {
        self.classifier.infer_taxonomy(record, root)
    }

    /// Infer the root, then the taxonomy under it.
    pub fn classify(&self, record: &Value) -> ListingTaxonomy {
        self.classifier.classify(record)
    }

    /// Normalize a position against the configured region.
    pub fn normalize_coords(&self, raw: &Value) -> Option<Coords> {
        normalize_coords(raw, &self.config.region)
    }

    /// Attach taxonomy and position to one record. `position` is the record's
    /// index in its batch, used as the id when the record has none.
    pub fn enrich(&self, record: Value, position: usize) -> EnrichedListing {
        EnrichedListing {
            id: listing_id(&record, position),
            taxonomy: self.classify(&record),
            coords: self.normalize_coords(&record),
            record,
        }
    }

    /// Enrich a batch, in parallel once it is larger than the configured
    /// threshold. Output order follows input order.
    #[instrument(name = "Enrich listings", level = "info", skip_all, fields(records = records.len()))]
    pub fn enrich_all(&self, records: Vec<Value>) -> Vec<EnrichedListing> {
        let start = Instant::now();
        let parallel = records.len() > self.config.parallel_threshold;

        let listings: Vec<EnrichedListing> = if parallel {
            records
                .into_par_iter()
                .enumerate()
                .map(|(position, record)| self.enrich(record, position))
                .collect()
        } else {
            records
                .into_iter()
                .enumerate()
                .map(|(position, record)| self.enrich(record, position))
                .collect()
        };

        let positioned = listings.iter().filter(|l| l.coords.is_some()).count();
        info!(
            listings = listings.len(),
            positioned,
            parallel,
            elapsed_ms = start.elapsed().as_millis(),
            "Enriched listings"
        );
        listings
    }

    /// Start a filter session over a dataset snapshot.
    pub fn session(&self, records: Vec<Value>) -> FilterSession<'_> {
        FilterSession::new(self, self.enrich_all(records))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use souqmap_data::test_data::sample_listings;

    use super::*;
    use crate::{config::EngineConfigBuilder, error::SouqmapError, geo::GeoBounds};

    #[test]
    fn test_engine_table_lookups() {
        let engine = TaxonomyEngine::new().unwrap();
        assert_eq!(engine.match_key(&json!("Toyota"), "carMakes"), Some("toyota"));
        assert_eq!(engine.match_key(&json!("سيارات"), "categories"), Some("cars"));
        assert_eq!(engine.match_key(&json!("toyota"), "missing"), None);
        assert_eq!(
            engine.detect_key("للبيع هايلوكس", "carModels.toyota"),
            Some("hilux")
        );
    }

    #[test]
    fn test_unknown_locked_root_is_rejected() {
        let config = EngineConfigBuilder::new().locked_root("boats").build();
        let err = TaxonomyEngine::with_config(config).unwrap_err();
        assert!(matches!(
            err,
            SouqmapError::Config(ConfigError::UnknownLockedRoot(ref root)) if root == "boats"
        ));
    }

    #[test]
    fn test_invalid_region_is_rejected() {
        let config = EngineConfig {
            region: GeoBounds::new(20.0, 40.0, 10.0, 50.0),
            ..EngineConfig::default()
        };
        assert!(TaxonomyEngine::with_config(config).is_err());
    }

    #[test]
    fn test_enrich_uses_record_id_or_position() {
        let engine = TaxonomyEngine::new().unwrap();
        let listing = engine.enrich(json!({"title": "x"}), 7);
        assert_eq!(listing.id, "7");
        assert_eq!(listing.taxonomy.root, "other");
        assert_eq!(listing.coords, None);
    }

    #[test]
    fn test_parallel_and_sequential_enrichment_agree() {
        let sequential = TaxonomyEngine::new().unwrap();
        let parallel = TaxonomyEngine::with_config(
            EngineConfigBuilder::new().parallel_threshold(0).build(),
        )
        .unwrap();

        let records: Vec<Value> = (0..20).flat_map(|_| sample_listings()).collect();
        assert_eq!(
            sequential.enrich_all(records.clone()),
            parallel.enrich_all(records)
        );
    }

    #[test]
    fn test_enriched_listing_serialization() {
        let engine = TaxonomyEngine::new().unwrap();
        let listing = engine.enrich(
            json!({"id": "p9", "category": "phones", "brand": "Apple", "coords": [15.3, 44.2]}),
            0,
        );
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            json!({
                "id": "p9",
                "taxonomy": {"root": "phones", "phoneBrand": "apple"},
                "coords": [15.3, 44.2],
            })
        );
    }
}
