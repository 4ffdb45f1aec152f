// Named filter predicates and the search match.
//
// Each screen registers its own predicate set (online, friends, joined,
// unread, ...); applying an unknown key returns the list unchanged. That
// permissive default mirrors the app's long-standing behavior and is
// deliberate, not a gap.

use rada_types::ListEntry;

/// How close another learner's level must be to count as "similar level"
pub const SIMILAR_LEVEL_THRESHOLD: u32 = 2;

/// Filter key that always matches; also the fallback for unknown keys
pub const FILTER_ALL: &str = "all";

/// Ambient values a predicate may need beyond the item itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterContext {
    /// The current user's level, for proximity filters
    pub reference_level: Option<u32>,
}

type BoxPredicate<T> = Box<dyn Fn(&T, &FilterContext) -> bool + Send + Sync>;

/// Ordered registry of named predicates for one screen's list.
pub struct FilterSet<T> {
    filters: Vec<(String, BoxPredicate<T>)>,
}

impl<T> FilterSet<T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Register a named predicate. Registration order is tab order.
    pub fn with(
        mut self,
        key: impl Into<String>,
        predicate: impl Fn(&T, &FilterContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filters.push((key.into(), Box::new(predicate)));
        self
    }

    /// Registered keys, `all` first
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = vec![FILTER_ALL];
        keys.extend(self.filters.iter().map(|(key, _)| key.as_str()));
        keys
    }

    /// Apply the named filter. `all` and unknown keys return every item.
    pub fn apply<'a>(&self, items: &'a [T], key: &str, ctx: &FilterContext) -> Vec<&'a T> {
        if key == FILTER_ALL {
            return items.iter().collect();
        }

        match self.filters.iter().find(|(name, _)| name == key) {
            Some((_, predicate)) => items.iter().filter(|item| predicate(item, ctx)).collect(),
            None => items.iter().collect(),
        }
    }
}

impl<T> Default for FilterSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match over the item's searchable fields.
/// An empty search matches everything.
pub fn matches_search<T: ListEntry>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let needle = needle.to_lowercase();
    item.search_haystacks()
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

/// True when the item level is within [`SIMILAR_LEVEL_THRESHOLD`] of the
/// context's reference level. Without a reference level everything matches.
pub fn similar_level(level: u32, ctx: &FilterContext) -> bool {
    match ctx.reference_level {
        Some(reference) => level.abs_diff(reference) <= SIMILAR_LEVEL_THRESHOLD,
        None => true,
    }
}
