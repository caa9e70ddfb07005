//! Startup load: fetch, convert, render, count.

use shared::{protocol::RawRecord, Notification, RecordError};
use tracing::{error, info, warn};

use crate::{
    controller::mount_item, counter, error::MountError, feed::Feed, source::NotificationSource,
    surface::Surface,
};

/// What happened during the startup load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub fetch_failed: bool,
    pub rendered: usize,
    pub rejected: Vec<RecordError>,
    pub unread: usize,
}

/// Fetches the payload. On any failure the error is logged, `error_message`
/// is shown once in the list container and `None` is returned; the caller
/// continues with an empty set.
pub async fn fetch_records(
    source: &dyn NotificationSource,
    surface: &mut dyn Surface,
    error_message: &str,
) -> Option<Vec<RawRecord>> {
    match source.fetch().await {
        Ok(records) => {
            info!(
                source = %source.describe(),
                count = records.len(),
                "fetched notifications"
            );
            Some(records)
        }
        Err(err) => {
            error!(source = %source.describe(), "error in fetch operation: {err}");
            if let Err(err) = surface.show_error(error_message) {
                warn!("fetch: error message not shown: {err}");
            }
            None
        }
    }
}

/// Runs the whole startup pipeline against `feed` and `surface`.
pub async fn load(
    source: &dyn NotificationSource,
    feed: &mut Feed,
    surface: &mut dyn Surface,
    error_message: &str,
) -> LoadReport {
    let mut report = LoadReport::default();
    let records = match fetch_records(source, surface, error_message).await {
        Some(records) => records,
        None => {
            report.fetch_failed = true;
            return report;
        }
    };

    for record in records {
        let notification = match Notification::try_from(record) {
            Ok(notification) => notification,
            Err(err) => {
                warn!(id = %err.id(), "skipping notification: {err}");
                report.rejected.push(err);
                continue;
            }
        };
        match mount_item(feed, surface, notification) {
            Ok(()) => report.rendered += 1,
            Err(MountError::Record(err)) => {
                warn!(id = %err.id(), "skipping notification: {err}");
                report.rejected.push(err);
            }
            Err(MountError::Surface(err)) => {
                warn!("render: item not mounted: {err}");
            }
        }
    }

    if !feed.is_empty() {
        report.unread = counter::mount(feed, surface);
    }
    info!(
        rendered = report.rendered,
        rejected = report.rejected.len(),
        unread = report.unread,
        "notifications loaded"
    );
    report
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
