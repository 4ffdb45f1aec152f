use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Remote data gateway
///
/// Responsibilities:
/// - Fetch list payloads for a resource (shape varies per endpoint)
/// - Submit item mutations (join/leave, friend/unfriend, like, mark-read)
///
/// Implementations: [`crate::FixtureGateway`] (embedded sample payloads) and
/// [`crate::HttpGateway`] (live backend). Selected via [`crate::Config`].
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Unique backend ID (e.g., "fixtures", "http")
    fn id(&self) -> &'static str;

    /// Fetch the raw list payload for a resource.
    ///
    /// The returned JSON may be a bare array, a `{"data": [...]}` envelope,
    /// or an object keyed by the resource's domain key. Callers normalize
    /// it; the gateway never reshapes responses.
    async fn fetch_list(&self, resource: Resource) -> Result<Value>;

    /// Submit an item mutation. Success means the backend accepted it; the
    /// optimistic local update has usually already been applied by the time
    /// this resolves.
    async fn submit(&self, mutation: &Mutation) -> Result<()>;
}

/// List endpoints the app's screens load from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Buddies,
    Groups,
    Discussions,
    Notifications,
    Modules,
}

impl Resource {
    /// URL path segment for the list endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Buddies => "buddies",
            Resource::Groups => "groups",
            Resource::Discussions => "discussions",
            Resource::Notifications => "notifications",
            Resource::Modules => "modules",
        }
    }

    /// Domain-specific envelope key this endpoint has been observed to use
    /// (alongside the generic `data` key)
    pub fn array_key(&self) -> &'static str {
        match self {
            Resource::Buddies => "buddies",
            Resource::Groups => "groups",
            Resource::Discussions => "posts",
            Resource::Notifications => "notifications",
            Resource::Modules => "modules",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An item mutation submitted to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub kind: MutationKind,
    pub target_id: String,
}

impl Mutation {
    pub fn new(kind: MutationKind, target_id: impl Into<String>) -> Self {
        Self {
            kind,
            target_id: target_id.into(),
        }
    }
}

/// The item mutations the screens perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    AddFriend,
    RemoveFriend,
    JoinGroup,
    LeaveGroup,
    LikePost,
    UnlikePost,
    MarkNotificationRead,
}

impl MutationKind {
    /// URL path segment for the mutation endpoint
    pub fn path(&self) -> &'static str {
        match self {
            MutationKind::AddFriend => "friends/add",
            MutationKind::RemoveFriend => "friends/remove",
            MutationKind::JoinGroup => "groups/join",
            MutationKind::LeaveGroup => "groups/leave",
            MutationKind::LikePost => "discussions/like",
            MutationKind::UnlikePost => "discussions/unlike",
            MutationKind::MarkNotificationRead => "notifications/read",
        }
    }

    /// Key used for this mutation in the `[rollback]` config table
    pub fn config_key(&self) -> &'static str {
        match self {
            MutationKind::AddFriend => "add_friend",
            MutationKind::RemoveFriend => "remove_friend",
            MutationKind::JoinGroup => "join_group",
            MutationKind::LeaveGroup => "leave_group",
            MutationKind::LikePost => "like_post",
            MutationKind::UnlikePost => "unlike_post",
            MutationKind::MarkNotificationRead => "mark_notification_read",
        }
    }
}
