// SDK-level behavior against the fixtures backend.

use rada_sdk::{Client, Config, LoadPhase, MutationKind};

fn fixtures_client() -> Client {
    Client::from_config(Config::default()).expect("fixtures client")
}

#[tokio::test]
async fn every_screen_loads_from_fixtures() {
    let client = fixtures_client();

    let buddies = client.buddies();
    buddies.load().await.unwrap();
    assert_eq!(buddies.phase(), LoadPhase::Ready);
    assert!(!buddies.items().is_empty());

    let groups = client.groups();
    groups.load().await.unwrap();
    assert!(!groups.items().is_empty());

    let discussions = client.discussions();
    discussions.load().await.unwrap();
    assert!(!discussions.items().is_empty());

    let notifications = client.notifications();
    notifications.load().await.unwrap();
    assert!(!notifications.items().is_empty());

    let modules = client.modules();
    modules.load().await.unwrap();
    assert!(!modules.items().is_empty());
}

#[tokio::test]
async fn buddy_tabs_filter_and_search() {
    let client = fixtures_client();
    let buddies = client.buddies();
    buddies.load().await.unwrap();

    buddies.set_filter("online");
    assert!(buddies.visible().iter().all(|b| b.is_online));

    buddies.set_filter("all");
    buddies.set_search("WANJIKU");
    let visible = buddies.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].username, "wanjiku_ke");
}

#[tokio::test]
async fn marking_notification_read_shrinks_unread_tab() {
    let client = fixtures_client();
    let notifications = client.notifications();
    notifications.load().await.unwrap();

    notifications.set_filter("unread");
    let unread = notifications.visible();
    assert!(!unread.is_empty());
    let target = unread[0].id.clone();

    notifications
        .mutate(
            &target,
            |n| n.is_read = true,
            MutationKind::MarkNotificationRead,
        )
        .await
        .unwrap();

    assert!(
        notifications.visible().iter().all(|n| n.id != target),
        "read notification must leave the unread tab"
    );
}

#[tokio::test]
async fn module_hub_tabs_split_on_progress() {
    let client = fixtures_client();
    let modules = client.modules();
    modules.load().await.unwrap();

    modules.set_filter("completed");
    assert!(modules.visible().iter().all(|m| m.is_completed()));

    modules.set_filter("in-progress");
    assert!(modules.visible().iter().all(|m| m.is_in_progress()));
}

#[tokio::test]
async fn group_category_tabs_match_fixture_categories() {
    let client = fixtures_client();
    let groups = client.groups();
    groups.load().await.unwrap();

    groups.set_filter("devolution");
    let visible = groups.visible();
    assert!(!visible.is_empty());
    assert!(
        visible
            .iter()
            .all(|g| g.category.as_deref() == Some("devolution"))
    );
}

#[tokio::test]
async fn joining_a_group_is_optimistic() {
    let client = fixtures_client();
    let groups = client.groups();
    groups.load().await.unwrap();

    let target = groups
        .items()
        .iter()
        .find(|g| !g.is_joined)
        .map(|g| g.id.clone())
        .expect("fixture has an unjoined group");

    groups
        .mutate(
            &target,
            |g| {
                g.is_joined = true;
                g.member_count += 1;
            },
            MutationKind::JoinGroup,
        )
        .await
        .unwrap();

    groups.set_filter("joined");
    assert!(groups.visible().iter().any(|g| g.id == target));
}
