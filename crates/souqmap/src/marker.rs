//! Map marker styling.

use ahash::AHashMap;
use serde::Serialize;
use tracing::trace;

/// How a marker is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub color: &'static str,
    pub opacity: f32,
    /// Markers the user has already opened sit below fresh ones.
    pub z_index: i32,
}

impl MarkerStyle {
    pub fn for_root(root: &str, seen: bool) -> Self {
        let color = match root {
            "cars" => "#1e88e5",
            "realestate" => "#43a047",
            "phones" => "#8e24aa",
            "electronics" => "#00897b",
            "motorcycles" => "#3949ab",
            "heavy_equipment" => "#f9a825",
            "solar" => "#fb8c00",
            "home_appliances" => "#6d4c41",
            "furniture" => "#a1887f",
            "networking" => "#00acc1",
            "maintenance" => "#546e7a",
            "jobs" => "#d81b60",
            "services" => "#5e35b1",
            "clothes" => "#ec407a",
            "animals" => "#7cb342",
            _ => "#757575",
        };
        if seen {
            Self {
                color,
                opacity: 0.55,
                z_index: 100,
            }
        } else {
            Self {
                color,
                opacity: 1.0,
                z_index: 200,
            }
        }
    }
}

/// Styles memoized by `(root, seen)`.
///
/// Owned by whoever renders markers; two renderers may share one by
/// reference or keep their own.
#[derive(Debug, Default)]
pub struct MarkerStyleCache {
    styles: AHashMap<(String, bool), MarkerStyle>,
    hits: u64,
    misses: u64,
}

impl MarkerStyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, root: &str, seen: bool) -> &MarkerStyle {
        let key = (root.to_string(), seen);
        if self.styles.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            trace!(root, seen, "Building marker style");
        }
        self.styles
            .entry(key)
            .or_insert_with(|| MarkerStyle::for_root(root, seen))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// `(hits, misses)` since creation or the last clear.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.styles.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
