// Fixture-backed gateway used in development, demos, and offline mode.
//
// The payloads deliberately reproduce the response shapes the live backend
// has been observed to use: some endpoints answer with a bare array, some
// with a `{"data": [...]}` envelope, some with a domain-keyed envelope
// (`{"modules": [...]}`). Consumers must survive all three, so the
// fixtures keep exercising all three.

use crate::traits::{Gateway, Mutation, Resource};
use crate::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

/// Gateway implementation serving embedded sample payloads.
#[derive(Debug, Clone, Default)]
pub struct FixtureGateway;

impl FixtureGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Gateway for FixtureGateway {
    fn id(&self) -> &'static str {
        "fixtures"
    }

    async fn fetch_list(&self, resource: Resource) -> Result<Value> {
        tracing::debug!(%resource, "serving fixture payload");
        Ok(sample_payload(resource))
    }

    async fn submit(&self, mutation: &Mutation) -> Result<()> {
        tracing::debug!(kind = ?mutation.kind, target = %mutation.target_id, "fixture mutation accepted");
        Ok(())
    }
}

/// Sample payload for a resource, in that endpoint's observed shape.
pub fn sample_payload(resource: Resource) -> Value {
    match resource {
        // Bare array
        Resource::Buddies => json!([
            {
                "id": "b1",
                "username": "wanjiku_ke",
                "county": "Nairobi",
                "level": 5,
                "isOnline": true,
                "isFriend": true,
                "lastActive": "2024-03-01T08:30:00Z"
            },
            {
                "id": "b2",
                "username": "otieno254",
                "county": "Kisumu",
                "level": 3,
                "isOnline": false,
                "isFriend": false,
                "lastActive": "2024-02-28T19:05:00Z"
            },
            {
                "id": "b3",
                "username": "amina_m",
                "county": "Mombasa",
                "level": 7,
                "isOnline": true,
                "isFriend": false,
                "lastActive": "2024-03-01T09:12:00Z"
            }
        ]),
        // Generic data envelope
        Resource::Groups => json!({
            "data": [
                {
                    "id": "g1",
                    "name": "Devolution 101",
                    "description": "County governments, ward funds, and you",
                    "category": "devolution",
                    "memberCount": 128,
                    "isJoined": true,
                    "createdAt": "2023-11-12T06:00:00Z"
                },
                {
                    "id": "g2",
                    "name": "Know Your Rights",
                    "description": "Chapter Four study circle",
                    "category": "rights",
                    "memberCount": 342,
                    "isJoined": false,
                    "createdAt": "2023-09-01T06:00:00Z"
                },
                {
                    "id": "g3",
                    "name": "Election Watch",
                    "description": "IEBC processes and observer reports",
                    "category": "elections",
                    "memberCount": 57,
                    "isJoined": false,
                    "createdAt": "2024-01-20T06:00:00Z"
                }
            ]
        }),
        // Domain-keyed envelope
        Resource::Discussions => json!({
            "posts": [
                {
                    "id": "p1",
                    "author": "amina_m",
                    "title": "Public participation at ward level",
                    "body": "Has anyone actually attended a ward budget forum?",
                    "tags": ["devolution", "counties"],
                    "likeCount": 14,
                    "isLiked": false,
                    "isPinned": true,
                    "createdAt": "2024-02-29T14:00:00Z"
                },
                {
                    "id": "p2",
                    "author": "otieno254",
                    "title": "Recall clause explained",
                    "body": "Article 104 and what it takes in practice",
                    "tags": ["constitution"],
                    "likeCount": 8,
                    "isLiked": true,
                    "isPinned": false,
                    "createdAt": "2024-02-27T10:30:00Z"
                }
            ]
        }),
        Resource::Notifications => json!({
            "notifications": [
                {
                    "id": "n1",
                    "title": "Quiz streak at risk",
                    "body": "Finish one quiz today to keep your 6-day streak",
                    "kind": "reminder",
                    "isRead": false,
                    "createdAt": "2024-03-01T07:00:00Z"
                },
                {
                    "id": "n2",
                    "title": "Badge earned",
                    "body": "You completed the Devolution track",
                    "kind": "achievement",
                    "isRead": true,
                    "createdAt": "2024-02-28T16:45:00Z"
                }
            ]
        }),
        Resource::Modules => json!({
            "modules": [
                {
                    "id": "m1",
                    "title": "Understanding the 2010 Constitution",
                    "summary": "Structure, the Bill of Rights, and amendment paths",
                    "category": "constitution",
                    "progressPct": 100,
                    "createdAt": "2023-08-15T06:00:00Z"
                },
                {
                    "id": "m2",
                    "title": "How County Budgets Work",
                    "summary": "From CIDP to ward projects",
                    "category": "devolution",
                    "progressPct": 40,
                    "createdAt": "2023-10-02T06:00:00Z"
                },
                {
                    "id": "m3",
                    "title": "Elections and the IEBC",
                    "summary": "Voter registration to results transmission",
                    "category": "elections",
                    "progressPct": 0,
                    "createdAt": "2024-01-05T06:00:00Z"
                }
            ]
        }),
    }
}
