use serde::Serialize;
use souqmap_data::TaxonomyRegistry;
use tracing::debug;

/// Root key meaning "every category".
pub const ALL_ROOTS: &str = "all";

/// Why a transition left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    /// The root is locked to a different category.
    LockedRoot,
    /// The transition is not valid from the current level.
    OutOfSequence,
    /// A second level was requested under a single-level root.
    NotTwoLevel,
    EmptyKey,
    /// The option has no listings in the working set.
    ZeroCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    Applied,
    Rejected(Rejection),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// The level the filter is at, with its selected keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterLevel<'a> {
    Root(&'a str),
    Level1(&'a str, &'a str),
    Level2(&'a str, &'a str, &'a str),
}

/// Drill-down selection over root, first facet and second facet.
///
/// Mutated only through the transition methods, which keep these
/// invariants:
/// - with a locked root, the active root always equals it;
/// - a second-level key requires a first-level key under a two-level root;
/// - clearing the first level clears the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    locked_root: Option<String>,
    active_root: String,
    level1: Option<String>,
    level2: Option<String>,
    #[serde(skip)]
    two_level_roots: Vec<String>,
}

impl FilterState {
    /// A state at `Root(locked_root)`, or `Root("all")` when unlocked.
    pub fn new<S: AsRef<str>>(locked_root: Option<&str>, two_level_roots: &[S]) -> Self {
        Self {
            locked_root: locked_root.map(str::to_string),
            active_root: locked_root.unwrap_or(ALL_ROOTS).to_string(),
            level1: None,
            level2: None,
            two_level_roots: two_level_roots
                .iter()
                .map(|root| root.as_ref().to_string())
                .collect(),
        }
    }

    /// A state whose two-level roots are those of `registry`.
    pub fn for_registry(registry: &TaxonomyRegistry, locked_root: Option<&str>) -> Self {
        let two_level: Vec<&str> = registry
            .categories()
            .iter()
            .filter(|category| category.is_two_level())
            .map(|category| category.root)
            .collect();
        Self::new(locked_root, two_level.as_slice())
    }

    pub fn locked_root(&self) -> Option<&str> {
        self.locked_root.as_deref()
    }

    pub fn active_root(&self) -> &str {
        &self.active_root
    }

    pub fn level1(&self) -> Option<&str> {
        self.level1.as_deref()
    }

    pub fn level2(&self) -> Option<&str> {
        self.level2.as_deref()
    }

    pub fn level(&self) -> FilterLevel<'_> {
        match (self.level1.as_deref(), self.level2.as_deref()) {
            (Some(f1), Some(f2)) => FilterLevel::Level2(&self.active_root, f1, f2),
            (Some(f1), None) => FilterLevel::Level1(&self.active_root, f1),
            _ => FilterLevel::Root(&self.active_root),
        }
    }

    pub fn is_two_level(&self, root: &str) -> bool {
        self.two_level_roots.iter().any(|r| r == root)
    }

    /// Whether the active root has a second facet level.
    pub fn active_is_two_level(&self) -> bool {
        self.is_two_level(&self.active_root)
    }

    /// Move to `Root(root)`, clearing both facet levels.
    pub fn choose_root(&mut self, root: &str) -> Transition {
        if root.is_empty() {
            return self.reject("choose_root", root, Rejection::EmptyKey);
        }
        if self.locked_root.as_deref().is_some_and(|locked| locked != root) {
            return self.reject("choose_root", root, Rejection::LockedRoot);
        }
        self.active_root = root.to_string();
        self.level1 = None;
        self.level2 = None;
        Transition::Applied
    }

    /// Move from `Root(k)` to `Level1(k, key)`.
    pub fn choose_level1(&mut self, key: &str) -> Transition {
        if self.active_root == ALL_ROOTS || self.level1.is_some() {
            return self.reject("choose_level1", key, Rejection::OutOfSequence);
        }
        if key.is_empty() {
            return self.reject("choose_level1", key, Rejection::EmptyKey);
        }
        self.level1 = Some(key.to_string());
        self.level2 = None;
        Transition::Applied
    }

    /// Move from `Level1(k, f1)` to `Level2(k, f1, key)` for a two-level root.
    pub fn choose_level2(&mut self, key: &str) -> Transition {
        if self.level1.is_none() || self.level2.is_some() {
            return self.reject("choose_level2", key, Rejection::OutOfSequence);
        }
        if !self.active_is_two_level() {
            return self.reject("choose_level2", key, Rejection::NotTwoLevel);
        }
        if key.is_empty() {
            return self.reject("choose_level2", key, Rejection::EmptyKey);
        }
        self.level2 = Some(key.to_string());
        Transition::Applied
    }

    /// Drop the deepest selection. At a root, return to `"all"` unless the
    /// root is locked.
    pub fn back_one_level(&mut self) -> Transition {
        if self.level2.take().is_some() {
            return Transition::Applied;
        }
        if self.level1.take().is_some() {
            return Transition::Applied;
        }
        if self.locked_root.is_some() {
            return self.reject("back_one_level", "", Rejection::LockedRoot);
        }
        if self.active_root == ALL_ROOTS {
            return self.reject("back_one_level", "", Rejection::OutOfSequence);
        }
        self.active_root = ALL_ROOTS.to_string();
        Transition::Applied
    }

    /// Return to the initial root.
    pub fn reset(&mut self) -> Transition {
        let root = self
            .locked_root
            .clone()
            .unwrap_or_else(|| ALL_ROOTS.to_string());
        self.choose_root(&root)
    }

    pub(crate) fn reject(&self, transition: &str, key: &str, reason: Rejection) -> Transition {
        debug!(
            transition,
            key,
            ?reason,
            root = %self.active_root,
            "Rejected filter transition"
        );
        Transition::Rejected(reason)
    }
}
