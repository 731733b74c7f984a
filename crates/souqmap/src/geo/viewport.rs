use serde::Serialize;

use super::{Coords, GeoBounds};

/// Anything with an optional normalized position.
pub trait Located {
    fn coords(&self) -> Option<Coords>;
}

impl Located for Coords {
    fn coords(&self) -> Option<Coords> {
        Some(*self)
    }
}

impl<T: Located> Located for &T {
    fn coords(&self) -> Option<Coords> {
        (**self).coords()
    }
}

/// Keep the items positioned inside `bounds`. Items without a position are
/// dropped.
pub fn within_bounds<T: Located>(items: impl IntoIterator<Item = T>, bounds: &GeoBounds) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.coords().is_some_and(|coords| bounds.contains(coords)))
        .collect()
}

/// The one authoritative viewport shared by every map surface.
///
/// Surfaces write through the setters and compare [`ViewportState::revision`]
/// to know when to redraw.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewportState {
    bounds: Option<GeoBounds>,
    nearby: bool,
    revision: u64,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Option<&GeoBounds> {
        self.bounds.as_ref()
    }

    pub fn nearby(&self) -> bool {
        self.nearby
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record the visible map rectangle.
    pub fn set_bounds(&mut self, bounds: Option<GeoBounds>) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.revision += 1;
        }
    }

    /// Toggle the "nearby" restriction.
    pub fn set_nearby(&mut self, nearby: bool) {
        if self.nearby != nearby {
            self.nearby = nearby;
            self.revision += 1;
        }
    }

    /// The bounds restricting the working set, if any.
    pub fn active_bounds(&self) -> Option<&GeoBounds> {
        self.bounds.as_ref().filter(|_| self.nearby)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_bounds_drops_unpositioned() {
        struct Pin(Option<Coords>);
        impl Located for Pin {
            fn coords(&self) -> Option<Coords> {
                self.0
            }
        }

        let pins = [
            Pin(Some(Coords::new(15.35, 44.20))),
            Pin(Some(Coords::new(12.80, 45.03))),
            Pin(None),
        ];
        let sanaa = GeoBounds::new(15.2, 44.0, 15.5, 44.4);
        let kept = within_bounds(&pins, &sanaa);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, Some(Coords::new(15.35, 44.20)));
    }

    #[test]
    fn test_viewport_revision_tracks_changes() {
        let mut viewport = ViewportState::new();
        let bounds = GeoBounds::new(15.2, 44.0, 15.5, 44.4);

        viewport.set_bounds(Some(bounds));
        assert_eq!(viewport.revision(), 1);
        assert!(viewport.active_bounds().is_none());

        viewport.set_bounds(Some(bounds));
        assert_eq!(viewport.revision(), 1);

        viewport.set_nearby(true);
        assert_eq!(viewport.revision(), 2);
        assert_eq!(viewport.active_bounds(), Some(&bounds));

        viewport.set_bounds(None);
        assert!(viewport.active_bounds().is_none());
        assert_eq!(viewport.revision(), 3);
    }
}
