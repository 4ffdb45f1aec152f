// Per-screen filter registries.
//
// These are the named tabs each screen renders. Keys are stable API: the
// app persists the selected tab per screen, so renaming one is a breaking
// change for stored preferences.

use rada_engine::filter::similar_level;
use rada_engine::{FilterContext, FilterSet};
use rada_types::{Buddy, DiscussionPost, LearnModule, Notification, StudyGroup};

/// Group categories with a dedicated tab
pub const GROUP_CATEGORIES: &[&str] = &["constitution", "devolution", "rights", "elections"];

pub fn buddy_filters() -> FilterSet<Buddy> {
    FilterSet::new()
        .with("online", |b: &Buddy, _: &FilterContext| b.is_online)
        .with("friends", |b: &Buddy, _: &FilterContext| b.is_friend)
        .with("similar", |b: &Buddy, ctx: &FilterContext| {
            similar_level(b.level, ctx)
        })
}

pub fn group_filters() -> FilterSet<StudyGroup> {
    let mut filters = FilterSet::new().with("joined", |g: &StudyGroup, _: &FilterContext| {
        g.is_joined
    });
    for &category in GROUP_CATEGORIES {
        filters = filters.with(category, move |g: &StudyGroup, _: &FilterContext| {
            g.category.as_deref() == Some(category)
        });
    }
    filters
}

pub fn discussion_filters() -> FilterSet<DiscussionPost> {
    FilterSet::new()
        .with("pinned", |p: &DiscussionPost, _: &FilterContext| p.is_pinned)
        .with("liked", |p: &DiscussionPost, _: &FilterContext| p.is_liked)
}

pub fn notification_filters() -> FilterSet<Notification> {
    FilterSet::new().with("unread", |n: &Notification, _: &FilterContext| !n.is_read)
}

pub fn module_filters() -> FilterSet<LearnModule> {
    FilterSet::new()
        .with("in-progress", |m: &LearnModule, _: &FilterContext| {
            m.is_in_progress()
        })
        .with("completed", |m: &LearnModule, _: &FilterContext| {
            m.is_completed()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_filters_include_category_tabs() {
        let filters = group_filters();
        let keys = filters.keys();
        assert!(keys.contains(&"joined"));
        assert!(keys.contains(&"devolution"));
        assert_eq!(keys[0], "all");
    }

    #[test]
    fn test_module_filters_split_on_progress() {
        let done = LearnModule {
            id: "m1".to_string(),
            title: "T".to_string(),
            summary: String::new(),
            category: None,
            progress_pct: 100,
            created_at: None,
        };
        let started = LearnModule {
            progress_pct: 40,
            id: "m2".to_string(),
            ..done.clone()
        };
        let items = vec![done, started];

        let filters = module_filters();
        let ctx = FilterContext::default();
        assert_eq!(filters.apply(&items, "completed", &ctx).len(), 1);
        assert_eq!(filters.apply(&items, "in-progress", &ctx).len(), 1);
    }
}
