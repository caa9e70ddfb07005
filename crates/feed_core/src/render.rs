//! Markup for a single notification. Templates live in `templates/` and are
//! escaped by askama.

use askama::Template;
use shared::{Actor, Content, Notification, NotificationId, Status};

/// Rendered notification. Keeps what the item template needs so the unread
/// indicator can be dropped without going back to the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    id: NotificationId,
    status: Status,
    actor: Actor,
    time: String,
    content: Content,
}

/// Text-line part of an item; one arm per content variant.
enum Body<'a> {
    Reaction(&'a str),
    Follow,
    Join(&'a str, &'a str),
    Leave(&'a str, &'a str),
    Message,
    Comment,
}

#[derive(Template)]
#[template(path = "item.html")]
struct ItemTemplate<'a> {
    id: &'a str,
    status: &'a str,
    unread: bool,
    avatar: &'a str,
    name: &'a str,
    time: &'a str,
    body: Body<'a>,
    picture: Option<&'a str>,
    message: Option<&'a str>,
}

impl ItemView {
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn has_unread_indicator(&self) -> bool {
        self.status.is_unread()
    }

    /// Removes the unread marker. Returns `false` if it was already gone.
    pub fn clear_unread_indicator(&mut self) -> bool {
        if self.status.is_unread() {
            self.status = Status::Read;
            true
        } else {
            false
        }
    }

    fn template(&self) -> ItemTemplate<'_> {
        let mut picture = None;
        let mut message = None;
        let body = match &self.content {
            Content::Reaction { title } => Body::Reaction(title),
            Content::Follow => Body::Follow,
            Content::Join { group, url } => Body::Join(group, url),
            Content::Leave { group, url } => Body::Leave(group, url),
            Content::PrivateMessage { message: text } => {
                message = Some(text.as_str());
                Body::Message
            }
            Content::Comment { picture: src } => {
                picture = Some(src.as_str());
                Body::Comment
            }
        };

        ItemTemplate {
            id: self.id.as_str(),
            status: self.status.as_str(),
            unread: self.status.is_unread(),
            avatar: &self.actor.avatar,
            name: &self.actor.name,
            time: &self.time,
            body,
            picture,
            message,
        }
    }

    pub fn to_html(&self) -> askama::Result<String> {
        self.template().render()
    }
}

pub fn render_item(notification: &Notification) -> ItemView {
    ItemView {
        id: notification.id.clone(),
        status: notification.status,
        actor: notification.actor.clone(),
        time: notification.time.clone(),
        content: notification.content.clone(),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
