use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque notification identifier. Numeric ids from the payload are kept in
/// their decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub String);

impl NotificationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Unread,
    Read,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unread => "unread",
            Status::Read => "read",
        }
    }

    pub fn is_unread(self) -> bool {
        self == Status::Unread
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub avatar: String,
}

/// Typed notification body. Each variant holds only the fields its template
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Reaction { title: String },
    Follow,
    Join { group: String, url: String },
    Leave { group: String, url: String },
    PrivateMessage { message: String },
    Comment { picture: String },
}

impl Content {
    /// Variant tag as it appears in the payload's `content.type`.
    pub fn tag(&self) -> &'static str {
        match self {
            Content::Reaction { .. } => "reaction",
            Content::Follow => "follow",
            Content::Join { .. } => "join",
            Content::Leave { .. } => "leave",
            Content::PrivateMessage { .. } => "pm",
            Content::Comment { .. } => "comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub status: Status,
    pub time: String,
    pub actor: Actor,
    pub content: Content,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status.is_unread()
    }

    /// Moves the notification to `Read`. Returns `false` when it was already
    /// read; there is no way back to `Unread`.
    pub fn mark_read(&mut self) -> bool {
        match self.status {
            Status::Unread => {
                self.status = Status::Read;
                true
            }
            Status::Read => false,
        }
    }
}
