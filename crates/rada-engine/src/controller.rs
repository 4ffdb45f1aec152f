// List presentation controller.
//
// Split in two:
//   - ListState: the pure state machine (phases, generations, filter and
//     search keys, in-place patches). Synchronous and directly testable.
//   - ListController: the async driver that owns the state behind a lock
//     and talks to the gateway. The fetch itself happens outside the lock,
//     so the UI stays free to retarget filter/search while a load is in
//     flight; whatever is current when the response lands is what applies.
//
// Overlapping loads are serialized by generation: every begin_* bumps the
// generation and a result only lands if its generation is still current.

use crate::filter::{FILTER_ALL, FilterContext, FilterSet, matches_search};
use crate::normalize::normalize_into;
use crate::{Error, Result};
use rada_gateway::{Gateway, Mutation, MutationKind, Resource, RollbackPolicies, RollbackPolicy};
use rada_types::ListEntry;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Token identifying one load attempt. Results from superseded attempts
/// are dropped instead of clobbering newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Externally visible lifecycle of a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet
    Idle,
    /// First load in flight; the screen shows a full spinner
    Loading,
    /// Items installed and renderable
    Ready,
    /// Last load failed; previously loaded items are retained
    Failed,
}

/// Which endpoint a controller loads and how its envelope is probed
#[derive(Debug, Clone, Copy)]
pub struct ScreenSpec {
    pub resource: Resource,
    pub array_keys: &'static [&'static str],
}

impl ScreenSpec {
    /// Standard spec for a resource: the generic `data` key plus the
    /// endpoint's own domain key.
    pub fn for_resource(resource: Resource) -> Self {
        let array_keys: &'static [&'static str] = match resource {
            Resource::Buddies => &["data", "buddies"],
            Resource::Groups => &["data", "groups"],
            Resource::Discussions => &["data", "posts"],
            Resource::Notifications => &["data", "notifications"],
            Resource::Modules => &["data", "modules"],
        };
        Self {
            resource,
            array_keys,
        }
    }
}

/// Pure presentation state for one list screen.
///
/// The visible subset is always derived (`items → search → active
/// filter`), never stored, so it cannot drift from the canonical list.
pub struct ListState<T> {
    items: Vec<T>,
    phase: LoadPhase,
    refreshing: bool,
    error: Option<String>,
    active_filter: String,
    search_text: String,
    context: FilterContext,
    filters: FilterSet<T>,
    generation: u64,
    loaded_once: bool,
}

impl<T: ListEntry + Clone> ListState<T> {
    pub fn new(filters: FilterSet<T>) -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            refreshing: false,
            error: None,
            active_filter: FILTER_ALL.to_string(),
            search_text: String::new(),
            context: FilterContext::default(),
            filters,
            generation: 0,
            loaded_once: false,
        }
    }

    /// Start a first-class load: full spinner, previous error cleared.
    pub fn begin_load(&mut self) -> Generation {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.refreshing = false;
        self.error = None;
        Generation(self.generation)
    }

    /// Start a pull-to-refresh: already-rendered content stays visible,
    /// only the `refreshing` flag is raised. Before the first successful
    /// load this degrades to a plain load.
    pub fn begin_refresh(&mut self) -> Generation {
        if !self.loaded_once {
            return self.begin_load();
        }
        self.generation += 1;
        self.refreshing = true;
        self.error = None;
        Generation(self.generation)
    }

    /// Land a load outcome. Returns false (and changes nothing) when the
    /// generation has been superseded by a newer load.
    ///
    /// A failure records the message and flips to `Failed` but retains
    /// whatever items were already loaded; a failed refresh never empties
    /// a populated screen.
    pub fn finish(
        &mut self,
        generation: Generation,
        outcome: std::result::Result<Vec<T>, String>,
    ) -> bool {
        if generation.0 != self.generation {
            return false;
        }

        self.refreshing = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Ready;
                self.error = None;
                self.loaded_once = true;
            }
            Err(message) => {
                self.phase = LoadPhase::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    pub fn set_filter(&mut self, key: impl Into<String>) {
        self.active_filter = key.into();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_context(&mut self, context: FilterContext) {
        self.context = context;
    }

    /// Recompute the visible subset from the canonical list.
    pub fn visible(&self) -> Vec<T> {
        let searched: Vec<T> = self
            .items
            .iter()
            .filter(|item| matches_search(*item, &self.search_text))
            .cloned()
            .collect();
        self.filters
            .apply(&searched, &self.active_filter, &self.context)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Patch the item with the given ID in place. Every other item is left
    /// untouched. Returns whether a match was found.
    pub fn mutate_by_id(&mut self, id: &str, updater: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                updater(item);
                true
            }
            None => false,
        }
    }

    /// Clone the current value of an item, for rollback snapshots.
    pub fn snapshot_of(&self, id: &str) -> Option<T> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    /// Put a snapshot back, replacing the item with the same ID.
    pub fn restore(&mut self, snapshot: T) {
        if let Some(slot) = self
            .items
            .iter_mut()
            .find(|item| item.id() == snapshot.id())
        {
            *slot = snapshot;
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn filter_keys(&self) -> Vec<String> {
        self.filters
            .keys()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Async driver tying a [`ListState`] to a gateway resource.
pub struct ListController<T> {
    state: Mutex<ListState<T>>,
    gateway: Arc<dyn Gateway>,
    spec: ScreenSpec,
    policies: RollbackPolicies,
}

impl<T> ListController<T>
where
    T: ListEntry + Clone + DeserializeOwned,
{
    pub fn new(
        gateway: Arc<dyn Gateway>,
        spec: ScreenSpec,
        filters: FilterSet<T>,
        policies: RollbackPolicies,
    ) -> Self {
        Self {
            state: Mutex::new(ListState::new(filters)),
            gateway,
            spec,
            policies,
        }
    }

    /// Fetch the list and install it. On failure the previous items are
    /// retained and the error is recorded; calling `load` again is the
    /// retry path.
    pub async fn load(&self) -> Result<()> {
        let generation = self.state.lock().unwrap().begin_load();
        self.run(generation).await
    }

    /// Re-fetch without hiding already-rendered content.
    pub async fn refresh(&self) -> Result<()> {
        let generation = self.state.lock().unwrap().begin_refresh();
        self.run(generation).await
    }

    async fn run(&self, generation: Generation) -> Result<()> {
        // Fetch outside the state lock: filter/search changes made while
        // the request is in flight apply to the result at resolution time.
        let fetched = self.gateway.fetch_list(self.spec.resource).await;

        let mut state = self.state.lock().unwrap();
        match fetched {
            Ok(payload) => {
                let items: Vec<T> = normalize_into(&payload, self.spec.array_keys);
                if state.finish(generation, Ok(items)) {
                    tracing::debug!(
                        resource = %self.spec.resource,
                        count = state.items().len(),
                        "list loaded"
                    );
                } else {
                    tracing::debug!(resource = %self.spec.resource, "dropping stale load result");
                }
                Ok(())
            }
            Err(err) => {
                if state.finish(generation, Err(err.to_string())) {
                    tracing::warn!(resource = %self.spec.resource, error = %err, "list load failed");
                    Err(Error::Gateway(err))
                } else {
                    // Superseded; a newer load owns the outcome.
                    Ok(())
                }
            }
        }
    }

    /// Optimistically patch the item, then submit the mutation. On
    /// rejection the configured rollback policy decides whether the patch
    /// stays; either way the failure is surfaced to the caller.
    pub async fn mutate(
        &self,
        id: &str,
        updater: impl FnOnce(&mut T),
        kind: MutationKind,
    ) -> Result<()> {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            let snapshot = state
                .snapshot_of(id)
                .ok_or_else(|| Error::UnknownItem(id.to_string()))?;
            state.mutate_by_id(id, updater);
            snapshot
        };

        let mutation = Mutation::new(kind, id);
        match self.gateway.submit(&mutation).await {
            Ok(()) => Ok(()),
            Err(err) => {
                match self.policies.policy_for(kind) {
                    RollbackPolicy::Revert => {
                        self.state.lock().unwrap().restore(snapshot);
                        tracing::warn!(kind = ?kind, target = %id, error = %err, "mutation rejected, optimistic change reverted");
                    }
                    RollbackPolicy::Keep => {
                        tracing::warn!(kind = ?kind, target = %id, error = %err, "mutation rejected, optimistic change kept");
                    }
                }
                Err(Error::Gateway(err))
            }
        }
    }

    pub fn set_filter(&self, key: impl Into<String>) {
        self.state.lock().unwrap().set_filter(key);
    }

    pub fn set_search(&self, text: impl Into<String>) {
        self.state.lock().unwrap().set_search(text);
    }

    pub fn set_context(&self, context: FilterContext) {
        self.state.lock().unwrap().set_context(context);
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.lock().unwrap().phase()
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.lock().unwrap().is_refreshing()
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error().map(str::to_string)
    }

    /// The canonical (unfiltered) list
    pub fn items(&self) -> Vec<T> {
        self.state.lock().unwrap().items().to_vec()
    }

    /// The filtered/searched subset currently rendered
    pub fn visible(&self) -> Vec<T> {
        self.state.lock().unwrap().visible()
    }

    pub fn filter_keys(&self) -> Vec<String> {
        self.state.lock().unwrap().filter_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rada_types::Buddy;

    fn buddy(id: &str, username: &str, online: bool) -> Buddy {
        Buddy {
            id: id.to_string(),
            username: username.to_string(),
            county: None,
            level: 1,
            is_online: online,
            is_friend: false,
            last_active: None,
        }
    }

    fn state() -> ListState<Buddy> {
        ListState::new(FilterSet::new().with("online", |b: &Buddy, _: &FilterContext| b.is_online))
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let state = state();
        assert_eq!(state.phase(), LoadPhase::Idle);
        assert!(!state.is_refreshing());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_load_success_installs_items() {
        let mut state = state();
        let generation = state.begin_load();
        assert_eq!(state.phase(), LoadPhase::Loading);

        assert!(state.finish(generation, Ok(vec![buddy("1", "A", true)])));
        assert_eq!(state.phase(), LoadPhase::Ready);
        assert_eq!(state.items().len(), 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut state = state();
        let first = state.begin_load();
        let second = state.begin_load();

        // First load resolves late; its items must not land.
        assert!(!state.finish(first, Ok(vec![buddy("stale", "S", false)])));
        assert!(state.items().is_empty());

        assert!(state.finish(second, Ok(vec![buddy("fresh", "F", false)])));
        assert_eq!(state.items()[0].id, "fresh");
    }

    #[test]
    fn test_failed_refresh_retains_items() {
        let mut state = state();
        let generation = state.begin_load();
        state.finish(generation, Ok(vec![buddy("1", "A", true)]));

        let refresh = state.begin_refresh();
        assert!(state.is_refreshing());
        assert_eq!(state.phase(), LoadPhase::Ready);

        state.finish(refresh, Err("network down".to_string()));
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert!(!state.is_refreshing());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.error(), Some("network down"));
    }

    #[test]
    fn test_refresh_before_first_load_acts_as_load() {
        let mut state = state();
        state.begin_refresh();
        assert_eq!(state.phase(), LoadPhase::Loading);
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_visible_applies_search_then_filter() {
        let mut state = state();
        let generation = state.begin_load();
        state.finish(
            generation,
            Ok(vec![
                buddy("1", "amina", true),
                buddy("2", "amani", false),
                buddy("3", "otieno", true),
            ]),
        );

        state.set_search("am");
        state.set_filter("online");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_set_filter_is_idempotent() {
        let mut state = state();
        let generation = state.begin_load();
        state.finish(
            generation,
            Ok(vec![buddy("1", "A", true), buddy("2", "B", false)]),
        );

        state.set_filter("online");
        let once = state.visible();
        state.set_filter("online");
        let twice = state.visible();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mutate_by_id_touches_only_target() {
        let mut state = state();
        let generation = state.begin_load();
        state.finish(
            generation,
            Ok(vec![buddy("1", "A", true), buddy("2", "B", false)]),
        );
        let untouched_before = state.items()[1].clone();

        assert!(state.mutate_by_id("1", |b| b.is_friend = true));
        assert!(state.items()[0].is_friend);
        assert_eq!(state.items()[1], untouched_before);
    }

    #[test]
    fn test_mutate_unknown_id_reports_no_match() {
        let mut state = state();
        assert!(!state.mutate_by_id("ghost", |b| b.is_friend = true));
    }

    #[test]
    fn test_restore_replaces_by_id() {
        let mut state = state();
        let generation = state.begin_load();
        state.finish(generation, Ok(vec![buddy("1", "A", true)]));

        let snapshot = state.snapshot_of("1").unwrap();
        state.mutate_by_id("1", |b| b.is_friend = true);
        state.restore(snapshot);
        assert!(!state.items()[0].is_friend);
    }
}
