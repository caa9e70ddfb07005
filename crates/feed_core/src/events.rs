//! Interaction events and their outcomes.

use shared::NotificationId;

/// A discrete user interaction. Events are applied one at a time, in queue
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Activate(NotificationId),
    MarkAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The item moved to read; `unread` is the recomputed counter value.
    MarkedRead { unread: usize },
    AlreadyRead,
    UnknownItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Activated(Activation),
    /// Number of items that moved to read.
    MarkedAll(usize),
}
