//! Souqmap - Listing Taxonomy and Faceted Map Filtering
//!
//! Souqmap turns loosely-typed marketplace listing records into a consistent
//! category hierarchy and drives a drill-down filter with live per-option
//! counts over them. Records arrive with inconsistent field names, free-text
//! values, missing fields and swapped coordinates; every one of them is
//! classified deterministically, with an explicit `"other"` fallback instead
//! of an error.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use souqmap::{TaxonomyEngine, Transition};
//!
//! let engine = TaxonomyEngine::new()?;
//!
//! // Classify a single record
//! let listing = json!({
//!     "title": "هايلوكس غمارتين للبيع",
//!     "category": "cars",
//!     "coords": [44.19, 15.37],
//! });
//! let taxonomy = engine.classify(&listing);
//! assert_eq!(taxonomy.car_make.as_deref(), Some("toyota"));
//! assert_eq!(taxonomy.car_model.as_deref(), Some("hilux"));
//!
//! // Longitude/latitude written the wrong way round are repaired
//! let coords = engine.normalize_coords(&listing).unwrap();
//! assert_eq!(coords.as_pair(), [15.37, 44.19]);
//!
//! // Drill down through a dataset snapshot
//! let mut session = engine.session(vec![listing]);
//! assert_eq!(session.choose_root("cars"), Transition::Applied);
//! assert_eq!(session.counts()["toyota"], 1);
//! # Ok::<(), souqmap::error::SouqmapError>(())
//! ```
//!
//! # Features
//!
//! - **Alias Matching**: Arabic and Latin spellings, case, separators and
//!   orthographic variants all resolve to one canonical key
//! - **Text Detection**: Titles and descriptions fill in missing structured fields
//! - **Coordinate Repair**: Five input shapes, swap detection against a target region
//! - **Hierarchical Filtering**: Root, facet and sub-facet selection with a
//!   lockable root and zero-count guards
//! - **Reports**: Polars frames and CSV export of classified listings
//!
//! # Data
//!
//! The builtin taxonomy lives in [`souqmap_data`] and is validated when an
//! engine is created: every table has an `"other"` option, and no spelling
//! can resolve to two different options.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt::format::FmtSpan};

pub mod classify;
mod config;
mod core;
pub mod error;
pub mod filter;
pub mod geo;
pub mod marker;
pub mod report;

pub use core::{EnrichedListing, TaxonomyEngine};

pub use classify::{ListingTaxonomy, detect_key, match_key};
pub use config::{ConfigError, EngineConfig, EngineConfigBuilder};
pub use error::{Result, SouqmapError};
pub use filter::{
    ALL_ROOTS, CountLevel, FacetChoice, FacetCountMap, FilterLevel, FilterSession, FilterState,
    Rejection, Transition, count_siblings,
};
pub use geo::{Coords, GeoBounds, ViewportState, normalize_coords};
pub use marker::{MarkerStyle, MarkerStyleCache};
pub use polars;
pub use souqmap_data as data;
pub use souqmap_data::{
    FacetOption, FacetTable, OTHER_KEY, TaxonomyRegistry, load_listings, parse_listings,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Souqmap library.
///
/// Sets up structured logging at `level` unless `RUST_LOG` says otherwise.
/// Later calls are no-ops.
///
/// # Examples
///
/// ```rust
/// use souqmap::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), souqmap::error::SouqmapError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static ()> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("polars=warn".parse::<Directive>()?)
            .add_directive("rayon=warn".parse::<Directive>()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}
