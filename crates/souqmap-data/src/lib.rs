//! Taxonomy data for souqmap.
//!
//! This crate holds everything that *describes* the classification taxonomy
//! without acting on it: the canonical facet tables, the per-category
//! schemas that say which record fields feed which facet, the text forms
//! used to compare spellings, and loading of raw listing records.

pub mod embedded;
pub mod normalize;
pub mod raw;
pub mod registry;
#[cfg(any(test, feature = "test_data"))]
pub mod test_data;

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum DataError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        #[error("Serialization error: {0}")]
        Serde(#[from] serde_json::Error),
        #[error("Registry error: {0}")]
        Registry(#[from] crate::registry::RegistryError),
    }

    pub type Result<T> = std::result::Result<T, DataError>;
}

pub use embedded::{CARS, PHONES, REAL_ESTATE};
pub use error::{DataError, Result};
pub use raw::{listing_id, listing_text, load_listings, number_field, parse_listings};
pub use registry::{
    CategorySchema, FacetOption, FacetSchema, FacetTable, Fallback, FieldPath, OTHER_KEY,
    ROOT_TABLE, RegistryError, TableRef, TaxonomyField, TaxonomyRegistry,
};
