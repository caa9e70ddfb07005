//! Read-state transitions coupling the feed to its surface.

use shared::{Notification, NotificationId};
use tracing::{debug, warn};

use crate::{
    counter,
    error::MountError,
    events::Activation,
    feed::Feed,
    render::render_item,
    surface::Surface,
};

/// Registers `notification` in the feed and appends its rendering to the
/// surface. Duplicate ids are refused by the feed; if the surface rejects the
/// item it is taken back out of the feed.
pub fn mount_item(
    feed: &mut Feed,
    surface: &mut dyn Surface,
    notification: Notification,
) -> Result<(), MountError> {
    let item = render_item(&notification);
    feed.push(notification)?;
    if let Err(err) = surface.append_item(item) {
        feed.pop();
        return Err(err.into());
    }
    Ok(())
}

/// Handles activation of a single item. Only an unread item changes; an
/// already-read item is left alone and the counter is not touched.
pub fn activate(feed: &mut Feed, surface: &mut dyn Surface, id: &NotificationId) -> Activation {
    let Some(notification) = feed.get_mut(id) else {
        warn!(%id, "activate: no such notification");
        return Activation::UnknownItem;
    };
    if !notification.mark_read() {
        debug!(%id, "activate: already read");
        return Activation::AlreadyRead;
    }
    if let Err(err) = surface.clear_unread_indicator(id) {
        warn!(%id, "activate: indicator not cleared: {err}");
    }
    let unread = counter::refresh(feed, surface);
    Activation::MarkedRead { unread }
}

/// Marks every unread item read and recomputes the counter once. Returns how
/// many items changed; zero means nothing was touched.
pub fn mark_all(feed: &mut Feed, surface: &mut dyn Surface) -> usize {
    let mut changed = 0;
    for notification in feed.iter_mut() {
        if !notification.mark_read() {
            continue;
        }
        changed += 1;
        if let Err(err) = surface.clear_unread_indicator(&notification.id) {
            warn!(id = %notification.id, "mark all: indicator not cleared: {err}");
        }
    }
    if changed > 0 {
        counter::refresh(feed, surface);
    }
    changed
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
