//! Unread counter. Always a full recount of the feed.

use tracing::{debug, warn};

use crate::{feed::Feed, surface::Surface};

pub fn unread_count(feed: &Feed) -> usize {
    feed.iter().filter(|n| n.is_unread()).count()
}

/// Puts the counter element into the heading with the current count.
pub fn mount(feed: &Feed, surface: &mut dyn Surface) -> usize {
    let count = unread_count(feed);
    if let Err(err) = surface.mount_counter(count) {
        warn!("counter: not mounted: {err}");
    }
    count
}

/// Recomputes the count and writes it to the counter element.
pub fn refresh(feed: &Feed, surface: &mut dyn Surface) -> usize {
    let count = unread_count(feed);
    match surface.write_counter(count) {
        Ok(()) => debug!(unread = count, "counter updated"),
        Err(err) => warn!("counter: update skipped: {err}"),
    }
    count
}
