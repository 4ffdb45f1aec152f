// Domain records for the list screens (buddies, groups, discussions,
// notifications, learning modules).
//
// Field names follow the API's camelCase payloads; flags that older backend
// builds omit are defaulted so partial payloads still deserialize.

use crate::entry::ListEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fellow learner shown on the study-buddies screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buddy {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_friend: bool,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
}

impl ListEntry for Buddy {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.username.as_str()];
        if let Some(county) = &self.county {
            hay.push(county);
        }
        hay
    }
}

/// A discussion/study group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub is_joined: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntry for StudyGroup {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

/// A post on the discussions feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionPost {
    pub id: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntry for DiscussionPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![
            self.title.as_str(),
            self.body.as_str(),
            self.author.as_str(),
        ];
        hay.extend(self.tags.iter().map(String::as_str));
        hay
    }
}

/// Notification category, used by filters and for icon selection upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Achievement,
    Social,
    /// Catch-all for kinds introduced by newer backend builds
    #[serde(other)]
    System,
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::System
    }
}

/// An entry on the notifications screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntry for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }
}

/// A learning module on the module hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub progress_pct: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LearnModule {
    pub fn is_completed(&self) -> bool {
        self.progress_pct >= 100
    }

    pub fn is_in_progress(&self) -> bool {
        self.progress_pct > 0 && self.progress_pct < 100
    }
}

impl ListEntry for LearnModule {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.summary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_buddy_deserializes_camel_case() {
        let buddy: Buddy = serde_json::from_value(json!({
            "id": "b1",
            "username": "wanjiku_ke",
            "county": "Nairobi",
            "level": 5,
            "isOnline": true,
            "isFriend": false
        }))
        .unwrap();

        assert_eq!(buddy.id, "b1");
        assert!(buddy.is_online);
        assert!(!buddy.is_friend);
        assert_eq!(buddy.level, 5);
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let buddy: Buddy = serde_json::from_value(json!({
            "id": "b2",
            "username": "otieno254"
        }))
        .unwrap();

        assert!(!buddy.is_online);
        assert!(!buddy.is_friend);
        assert_eq!(buddy.level, 0);
        assert!(buddy.county.is_none());
    }

    #[test]
    fn test_unknown_notification_kind_maps_to_system() {
        let notif: Notification = serde_json::from_value(json!({
            "id": "n1",
            "title": "Maintenance window",
            "kind": "broadcast"
        }))
        .unwrap();

        assert_eq!(notif.kind, NotificationKind::System);
    }

    #[test]
    fn test_search_haystacks_include_tags() {
        let post: DiscussionPost = serde_json::from_value(json!({
            "id": "p1",
            "author": "amina",
            "title": "Public participation",
            "body": "How does it work at ward level?",
            "tags": ["devolution", "counties"]
        }))
        .unwrap();

        let hay = post.search_haystacks();
        assert!(hay.contains(&"devolution"));
        assert!(hay.contains(&"Public participation"));
    }

    #[test]
    fn test_module_progress_helpers() {
        let module: LearnModule = serde_json::from_value(json!({
            "id": "m1",
            "title": "Understanding the 2010 Constitution",
            "progressPct": 100
        }))
        .unwrap();

        assert!(module.is_completed());
        assert!(!module.is_in_progress());
    }
}
