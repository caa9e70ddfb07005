use super::*;

const UNREAD_CLASS: &str = "notification-unread";
const INDICATOR_MARKUP: &str = r#"<span class="notification-active"></span>"#;

fn markup(item: &ItemView) -> String {
    item.to_html().expect("render item")
}

fn notification(id: &str, status: Status, content: Content) -> Notification {
    Notification {
        id: NotificationId::from(id),
        status,
        time: "5m ago".to_string(),
        actor: Actor {
            name: "Ann".to_string(),
            avatar: "a.png".to_string(),
        },
        content,
    }
}

#[test]
fn unread_item_carries_indicator_and_class() {
    let html = markup(&render_item(&notification("1", Status::Unread, Content::Follow)));

    assert!(html.contains(r#"data-id="1""#));
    assert!(html.contains(r#"data-status="unread""#));
    assert!(html.contains(UNREAD_CLASS));
    assert!(html.contains(INDICATOR_MARKUP));
    assert!(html.contains("Ann</strong> followed you"));
    assert!(html.contains(r#"<img src="a.png" alt="" class="avatar"/>"#));
    assert!(html.contains("<p>5m ago</p>"));
}

#[test]
fn read_item_has_no_indicator() {
    let html = markup(&render_item(&notification("2", Status::Read, Content::Follow)));

    assert!(html.contains(r#"data-status="read""#));
    assert!(!html.contains(UNREAD_CLASS));
    assert!(!html.contains(INDICATOR_MARKUP));
}

#[test]
fn clearing_indicator_is_one_shot() {
    let mut item = render_item(&notification("3", Status::Unread, Content::Follow));
    assert!(item.has_unread_indicator());

    assert!(item.clear_unread_indicator());
    assert!(!item.clear_unread_indicator());
    assert_eq!(item.status(), Status::Read);
    assert!(!markup(&item).contains(INDICATOR_MARKUP));
}

#[test]
fn reaction_includes_title() {
    let html = render_item(&notification(
        "4",
        Status::Unread,
        Content::Reaction {
            title: "My first tournament today!".to_string(),
        },
    ))
    .to_html()
    .expect("render item");

    assert!(html.contains("reacted to your post"));
    assert!(html.contains("My first tournament today!"));
}

#[test]
fn join_and_leave_include_group_and_url() {
    let join = render_item(&notification(
        "5",
        Status::Unread,
        Content::Join {
            group: "Chess Club".to_string(),
            url: "https://example.test/chess".to_string(),
        },
    ))
    .to_html()
    .expect("render item");
    assert!(join.contains("has joined your group"));
    assert!(join.contains(r#"<a href="https:"#));
    assert!(join.contains(r#"example.test"#));
    assert!(join.contains(r#"target="_blank">Chess Club</a>"#));

    let leave = render_item(&notification(
        "6",
        Status::Read,
        Content::Leave {
            group: "Chess Club".to_string(),
            url: "https://example.test/chess".to_string(),
        },
    ))
    .to_html()
    .expect("render item");
    assert!(leave.contains("left the group"));
    assert!(leave.contains("Chess Club"));
    assert!(leave.contains("example.test"));
}

#[test]
fn private_message_renders_message_after_footer() {
    let html = render_item(&notification(
        "7",
        Status::Unread,
        Content::PrivateMessage {
            message: "Hello, thanks for setting up the Chess Club.".to_string(),
        },
    ))
    .to_html()
    .expect("render item");

    assert!(html.contains("sent you a private message"));
    let footer = html.find("notification-footer").expect("footer");
    let dm = html
        .find(r#"<p class="notification-dm">Hello, thanks for setting up the Chess Club.</p>"#)
        .expect("dm paragraph");
    assert!(dm > footer);
}

#[test]
fn comment_includes_picture() {
    let html = render_item(&notification(
        "8",
        Status::Read,
        Content::Comment {
            picture: "image-chess.webp".to_string(),
        },
    ))
    .to_html()
    .expect("render item");

    assert!(html.contains("commented on your picture"));
    assert!(html.contains(r#"<img src="image-chess.webp" alt="" class="notification-image"/>"#));
}

#[test]
fn interpolated_text_is_escaped() {
    let mut item = notification(
        "9",
        Status::Unread,
        Content::Reaction {
            title: "<script>alert('x')</script>".to_string(),
        },
    );
    item.actor.name = "Bob & \"Co\"".to_string();
    let html = markup(&render_item(&item));

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)"));
    assert!(html.contains("Bob &amp; &quot;Co&quot;"));
}

#[test]
fn attribute_values_are_escaped() {
    let mut item = notification("10", Status::Read, Content::Follow);
    item.actor.avatar = r#"a.png" onerror="x"#.to_string();
    let html = markup(&render_item(&item));

    assert!(!html.contains(r#"" onerror=""#));
    assert!(html.contains("&quot; onerror=&quot;"));
}
