use std::collections::HashMap;

use shared::{Notification, NotificationId, RecordError};

/// Ordered notification collection for one session. Owned by whoever drives
/// the widget and passed explicitly to the pieces that need it.
#[derive(Debug, Default)]
pub struct Feed {
    entries: Vec<Notification>,
    index: HashMap<NotificationId, usize>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.index.contains_key(id)
    }

    /// Registers a notification at the end of the feed. Ids must be unique.
    pub fn push(&mut self, notification: Notification) -> Result<(), RecordError> {
        if self.contains(&notification.id) {
            return Err(RecordError::DuplicateId {
                id: notification.id.to_string(),
            });
        }
        self.index.insert(notification.id.clone(), self.entries.len());
        self.entries.push(notification);
        Ok(())
    }

    /// Drops the most recently pushed notification.
    pub fn pop(&mut self) -> Option<Notification> {
        let notification = self.entries.pop()?;
        self.index.remove(&notification.id);
        Some(notification)
    }

    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn get_mut(&mut self, id: &NotificationId) -> Option<&mut Notification> {
        let pos = *self.index.get(id)?;
        self.entries.get_mut(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Notification> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
