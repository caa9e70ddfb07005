use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_match_widget_mount_points() {
    let settings = FeedSettings::default();
    assert_eq!(settings.endpoint, "/data/data.json");
    assert_eq!(settings.mounts.list, ".notifications-list");
    assert_eq!(settings.mounts.heading, ".notifications-heading");
    assert_eq!(settings.mounts.mark_all, ".mark-all");
    assert_eq!(settings.mounts.counter, ".notifications-count");
    assert_eq!(settings.error_message, "Could not load notifications");
}

#[test]
fn partial_file_overlays_defaults() {
    let settings = parse_settings(
        r#"
endpoint = "https://feed.example.test/api/notifications"

[mounts]
counter = ".badge"
"#,
    )
    .expect("parse");

    assert_eq!(
        settings.endpoint,
        "https://feed.example.test/api/notifications"
    );
    assert_eq!(settings.mounts.counter, ".badge");
    assert_eq!(settings.mounts.list, ".notifications-list");
    assert_eq!(settings.heading, "Notifications");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("feed_core_missing_{suffix}.toml"));

    let err = load_settings(Some(&path)).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn loads_settings_from_explicit_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("feed_core_settings_{suffix}.toml"));
    fs::write(&path, "error_message = \"Feed offline\"\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.error_message, "Feed offline");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn relative_endpoint_joins_base() {
    let base = Url::parse("http://127.0.0.1:8080/app/").expect("base");
    let url = resolve_endpoint("/data/data.json", Some(&base)).expect("resolve");
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/data/data.json");
}

#[test]
fn absolute_endpoint_ignores_base() {
    let base = Url::parse("http://127.0.0.1:8080/").expect("base");
    let url = resolve_endpoint("https://feed.example.test/n.json", Some(&base)).expect("resolve");
    assert_eq!(url.host_str(), Some("feed.example.test"));
}

#[test]
fn relative_endpoint_without_base_is_rejected() {
    let err = resolve_endpoint("/data/data.json", None).expect_err("no base");
    assert!(matches!(
        err,
        ConfigError::InvalidEndpoint {
            source: url::ParseError::RelativeUrlWithoutBase,
            ..
        }
    ));
}

#[test]
fn class_name_strips_selector_dot() {
    assert_eq!(class_name(".notifications-count"), "notifications-count");
    assert_eq!(class_name("badge"), "badge");
}
