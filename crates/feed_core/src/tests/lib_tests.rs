use super::*;
use shared::{NotificationId, Status};

const FOLLOW_ANN: &str = r#"[{"id":1,"status":"unread","time":"2m","content":{"type":"follow","user":{"name":"Ann","avatar":"a.png"}}}]"#;

async fn app_from(body: &str) -> NotificationsApp<HtmlSurface> {
    let settings = FeedSettings::default();
    let surface = HtmlSurface::new(settings.mounts.clone(), settings.heading.clone());
    let source = StaticSource::from_json(body).expect("payload");
    NotificationsApp::start(settings, &source, surface).await
}

#[tokio::test]
async fn single_unread_follow_shows_indicator_and_counts_one() {
    let app = app_from(FOLLOW_ANN).await;
    let id = NotificationId::from("1");

    let item = app.surface().item(&id).expect("rendered item");
    assert!(item.has_unread_indicator());
    assert_eq!(app.surface().counter(), Some(1));
    assert_eq!(app.unread_count(), 1);
    assert_eq!(app.report().rendered, 1);
}

#[tokio::test]
async fn click_routes_through_surface_to_controller() {
    let mut app = app_from(FOLLOW_ANN).await;
    let id = NotificationId::from("1");

    let event = app.surface().click_item(&id).expect("item handler");
    assert_eq!(
        app.dispatch(event.clone()),
        EventOutcome::Activated(Activation::MarkedRead { unread: 0 })
    );
    assert_eq!(
        app.dispatch(event),
        EventOutcome::Activated(Activation::AlreadyRead)
    );

    assert_eq!(app.surface().counter(), Some(0));
    assert!(!app.surface().item(&id).expect("item").has_unread_indicator());
    assert_eq!(app.feed().get(&id).map(|n| n.status), Some(Status::Read));
}

#[tokio::test]
async fn mark_all_then_again() {
    let mut app = app_from(
        r#"[
            {"id":1,"status":"unread","time":"2m","content":{"type":"follow","user":{"name":"Ann","avatar":"a.png"}}},
            {"id":2,"status":"unread","time":"3m","content":{"type":"pm","message":"hi","user":{"name":"Bo","avatar":"b.png"}}},
            {"id":3,"status":"read","time":"4m","content":{"type":"reaction","title":"Post","user":{"name":"Cy","avatar":"c.png"}}}
        ]"#,
    )
    .await;
    assert_eq!(app.surface().counter(), Some(2));

    let event = app.surface().click_mark_all().expect("mark-all control");
    assert_eq!(app.dispatch(event.clone()), EventOutcome::MarkedAll(2));
    assert_eq!(app.surface().counter(), Some(0));
    assert_eq!(app.dispatch(event), EventOutcome::MarkedAll(0));
    assert_eq!(app.surface().counter(), Some(0));
    assert!(app.surface().items().all(|item| !item.has_unread_indicator()));
}

#[tokio::test]
async fn failed_start_leaves_empty_feed() {
    let settings = FeedSettings::default();
    let surface = HtmlSurface::new(settings.mounts.clone(), settings.heading.clone());
    let app = NotificationsApp::start(settings, &UnavailableSource::new("down"), surface).await;

    assert!(app.report().fetch_failed);
    assert!(app.feed().is_empty());
    assert_eq!(app.surface().error_messages().count(), 1);
    assert_eq!(app.into_surface().items().count(), 0);
}

#[tokio::test]
async fn page_without_heading_still_tracks_read_state() {
    let settings = FeedSettings::default();
    let surface = HtmlSurface::new(settings.mounts.clone(), settings.heading.clone())
        .without(MountPoint::Heading);
    let source = StaticSource::from_json(FOLLOW_ANN).expect("payload");
    let mut app = NotificationsApp::start(settings, &source, surface).await;
    let id = NotificationId::from("1");

    assert_eq!(app.report().rendered, 1);
    assert_eq!(app.surface().counter(), None);

    let event = app.surface().click_item(&id).expect("item handler");
    assert_eq!(
        app.dispatch(event),
        EventOutcome::Activated(Activation::MarkedRead { unread: 0 })
    );
    assert_eq!(app.feed().get(&id).map(|n| n.status), Some(Status::Read));
    assert!(!app.surface().item(&id).expect("item").has_unread_indicator());
    assert_eq!(app.surface().counter(), None);
    assert_eq!(app.unread_count(), 0);
}
