use ahash::AHashMap;
use serde_json::Value;
use souqmap_data::{
    FacetSchema, Fallback, FieldPath, OTHER_KEY, TaxonomyRegistry, listing_text,
    normalize::text_form,
    registry::first_present,
};
use tracing::{instrument, trace};

use super::{ListingTaxonomy, matcher::CompiledTable};

/// Record fields that may name a listing's root category, in priority order.
pub static CATEGORY_FIELDS: [FieldPath; 5] = [
    FieldPath::Top("category"),
    FieldPath::Top("categoryKey"),
    FieldPath::Top("mainCategory"),
    FieldPath::Top("section"),
    FieldPath::Top("categoryId"),
];

/// Free text of a record, normalized on first use.
struct ListingText<'r> {
    record: &'r Value,
    prepared: Option<String>,
}

impl<'r> ListingText<'r> {
    fn new(record: &'r Value) -> Self {
        Self {
            record,
            prepared: None,
        }
    }

    fn get(&mut self) -> &str {
        self.prepared
            .get_or_insert_with(|| text_form(&listing_text(self.record)))
    }
}

/// Resolves the root and facet values of raw listing records against a
/// [`TaxonomyRegistry`].
///
/// Every table is compiled once up front; classification itself is pure and
/// never fails.
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: TaxonomyRegistry,
    roots: CompiledTable,
    tables: AHashMap<String, CompiledTable>,
    text_fallback: bool,
}

impl Classifier {
    #[instrument(name = "Compile taxonomy", level = "debug", skip(registry))]
    pub fn new(registry: TaxonomyRegistry, text_fallback: bool) -> Self {
        let roots = CompiledTable::new(registry.roots());
        let tables = registry
            .tables()
            .map(|table| (table.name().to_string(), CompiledTable::new(table)))
            .collect();
        Self {
            registry,
            roots,
            tables,
            text_fallback,
        }
    }

    pub fn registry(&self) -> &TaxonomyRegistry {
        &self.registry
    }

    pub fn text_fallback(&self) -> bool {
        self.text_fallback
    }

    /// The compiled form of a table by name, including the root table.
    pub fn table(&self, name: &str) -> Option<&CompiledTable> {
        if name == self.roots.name() {
            return Some(&self.roots);
        }
        self.tables.get(name)
    }

    /// Decide a record's root category.
    ///
    /// Structured category fields are matched first. Failing that, the
    /// listing text is searched for a root name, then for a specific option
    /// of each category's signal table in registry order. Anything left is
    /// `"other"`.
    pub fn infer_root(&self, record: &Value) -> String {
        if let Some(key) =
            first_present(&CATEGORY_FIELDS, record).and_then(|raw| self.roots.match_str(&raw))
        {
            return key.to_string();
        }
        if !self.text_fallback {
            return OTHER_KEY.to_string();
        }

        let mut text = ListingText::new(record);
        let text = text.get();
        if let Some(key) = self.roots.detect_prepared(text, false) {
            trace!(root = key, "Root detected from listing text");
            return key.to_string();
        }

        self.registry
            .categories()
            .iter()
            .find(|category| {
                self.tables
                    .get(category.signal_table)
                    .and_then(|table| table.detect_prepared(text, false))
                    .is_some()
            })
            .map_or_else(|| OTHER_KEY.to_string(), |category| category.root.to_string())
    }

    /// Build the taxonomy snapshot of a record under `root`.
    ///
    /// Roots without a category schema (`"other"` or unknown keys) carry no
    /// facet values.
    pub fn infer_taxonomy(&self, record: &Value, root: &str) -> ListingTaxonomy {
        let mut taxonomy = ListingTaxonomy::new(root);
        let Some(category) = self.registry.category(root) else {
            return taxonomy;
        };

        let mut text = ListingText::new(record);
        let level1 = self.resolve_facet(record, &category.level1, None, &mut text);

        if let Some(level2) = &category.level2 {
            let value = self.resolve_facet(record, level2, level1.as_deref(), &mut text);
            taxonomy.set(level2.field, value);
        }
        taxonomy.set(category.level1.field, level1);
        taxonomy
    }

    /// Root then taxonomy, in one call.
    pub fn classify(&self, record: &Value) -> ListingTaxonomy {
        let root = self.infer_root(record);
        self.infer_taxonomy(record, &root)
    }

    fn resolve_facet(
        &self,
        record: &Value,
        facet: &FacetSchema,
        parent: Option<&str>,
        text: &mut ListingText<'_>,
    ) -> Option<String> {
        let name = facet.table.resolve(parent)?;
        let table = self.tables.get(name.as_ref())?;

        let matched = first_present(facet.sources, record)
            .and_then(|raw| table.match_str(&raw))
            .or_else(|| {
                self.text_fallback
                    .then(|| table.detect_prepared(text.get(), false))
                    .flatten()
            });

        match (matched, facet.fallback) {
            (Some(key), _) => Some(key.to_string()),
            (None, Fallback::Other) => Some(OTHER_KEY.to_string()),
            (None, Fallback::Unclassified) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use souqmap_data::{CARS, PHONES, REAL_ESTATE};

    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(TaxonomyRegistry::builtin().unwrap(), true)
    }

    #[test]
    fn test_root_from_category_fields() {
        let classifier = classifier();
        assert_eq!(classifier.infer_root(&json!({"category": "cars"})), CARS);
        assert_eq!(classifier.infer_root(&json!({"category": "سيارات"})), CARS);
        assert_eq!(
            classifier.infer_root(&json!({"mainCategory": "Real Estate"})),
            REAL_ESTATE
        );
        // First present field decides even when it does not match.
        assert_eq!(
            classifier.infer_root(&json!({"category": "zzz", "categoryKey": "phones"})),
            OTHER_KEY
        );
    }

    #[test]
    fn test_root_from_text() {
        let classifier = classifier();
        assert_eq!(
            classifier.infer_root(&json!({"title": "ايفون 13 برو"})),
            PHONES
        );
        assert_eq!(
            classifier.infer_root(&json!({"title": "تويوتا كامري نظيفة"})),
            CARS
        );
        assert_eq!(classifier.infer_root(&json!({"title": "بدون وصف"})), OTHER_KEY);
        assert_eq!(classifier.infer_root(&json!({})), OTHER_KEY);
    }

    #[test]
    fn test_text_fallback_can_be_disabled() {
        let classifier = Classifier::new(TaxonomyRegistry::builtin().unwrap(), false);
        assert!(!classifier.text_fallback());
        assert_eq!(
            classifier.infer_root(&json!({"title": "تويوتا كامري"})),
            OTHER_KEY
        );
        let taxonomy = classifier.infer_taxonomy(&json!({"title": "تويوتا كامري"}), CARS);
        assert_eq!(taxonomy.car_make.as_deref(), Some(OTHER_KEY));
        assert_eq!(taxonomy.car_model, None);
    }

    #[test]
    fn test_structured_make_and_model() {
        let classifier = classifier();
        let record = json!({"make": "Toyota", "model": "Land-Cruiser"});
        let taxonomy = classifier.infer_taxonomy(&record, CARS);
        assert_eq!(taxonomy.car_make.as_deref(), Some("toyota"));
        assert_eq!(taxonomy.car_model.as_deref(), Some("land_cruiser"));
        assert_eq!(taxonomy.phone_brand, None);
    }

    #[test]
    fn test_model_is_gated_on_specific_make() {
        let classifier = classifier();
        let taxonomy = classifier.infer_taxonomy(&json!({"title": "سيارة نظيفة"}), CARS);
        assert_eq!(taxonomy.car_make.as_deref(), Some(OTHER_KEY));
        assert_eq!(taxonomy.car_model, None);
    }

    #[test]
    fn test_unknown_model_falls_back_to_other() {
        let classifier = classifier();
        let record = json!({"carMake": "toyota", "carModel": "zzz"});
        let taxonomy = classifier.infer_taxonomy(&record, CARS);
        assert_eq!(taxonomy.car_model.as_deref(), Some(OTHER_KEY));
    }

    #[test]
    fn test_deal_type_is_never_defaulted() {
        let classifier = classifier();
        let taxonomy = classifier.infer_taxonomy(&json!({"title": "فيلا فاخرة"}), REAL_ESTATE);
        assert_eq!(taxonomy.deal_type, None);
        assert_eq!(taxonomy.property_type.as_deref(), Some("villa"));

        let taxonomy = classifier.infer_taxonomy(&json!({"title": "شقة للإيجار"}), REAL_ESTATE);
        assert_eq!(taxonomy.deal_type.as_deref(), Some("rent"));
        assert_eq!(taxonomy.property_type.as_deref(), Some("apartment"));
    }

    #[test]
    fn test_other_spellings_in_text_are_not_evidence() {
        let classifier = classifier();
        let taxonomy = classifier.infer_taxonomy(&json!({"title": "شقة متفرقات"}), REAL_ESTATE);
        assert_eq!(taxonomy.deal_type, None);
        assert_eq!(taxonomy.property_type.as_deref(), Some("apartment"));
    }

    #[test]
    fn test_common_ad_words_do_not_name_a_make() {
        let classifier = classifier();
        let taxonomy = classifier.infer_taxonomy(&json!({"title": "سيارة نظيفة بنزين"}), CARS);
        assert_eq!(taxonomy.car_make.as_deref(), Some(OTHER_KEY));

        let generator = classifier.classify(&json!({"title": "مولد بنزين 5 كيلو"}));
        assert_eq!(generator.root, "heavy_equipment");
        assert_eq!(generator.car_make, None);

        let tv = classifier.classify(&json!({"title": "شاشة هايسنس 55 بوصة"}));
        assert_eq!(tv.root, "electronics");
        assert_eq!(tv.car_make, None);

        let van = classifier.classify(&json!({"title": "باص هايس 2010"}));
        assert_eq!(van.root, CARS);
        assert_eq!(van.car_make.as_deref(), Some("toyota"));
        assert_eq!(van.car_model.as_deref(), Some("hiace"));
    }

    #[test]
    fn test_single_facet_category() {
        let classifier = classifier();
        let taxonomy =
            classifier.infer_taxonomy(&json!({"title": "الواح شمسية 550 وات"}), "solar");
        assert_eq!(taxonomy.category_type.as_deref(), Some("panel"));

        let taxonomy = classifier.infer_taxonomy(&json!({"title": "x"}), "solar");
        assert_eq!(taxonomy.category_type.as_deref(), Some(OTHER_KEY));
    }

    #[test]
    fn test_roots_without_schema_have_no_facets() {
        let classifier = classifier();
        let taxonomy = classifier.infer_taxonomy(&json!({"brand": "toyota"}), OTHER_KEY);
        assert_eq!(taxonomy, ListingTaxonomy::new(OTHER_KEY));
    }

    #[test]
    fn test_compiled_tables_are_reachable_by_name() {
        let classifier = classifier();
        assert!(classifier.table("categories").is_some());
        assert!(classifier.table("carModels.toyota").is_some());
        assert!(classifier.table("nope").is_none());
    }
}
