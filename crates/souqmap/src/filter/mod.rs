//! Hierarchical drill-down filtering with live per-option counts.

mod counts;
mod session;
mod state;

pub use counts::{CountLevel, FacetCountMap, count_siblings};
pub use session::{FacetChoice, FilterSession, Marker};
pub use state::{ALL_ROOTS, FilterLevel, FilterState, Rejection, Transition};
