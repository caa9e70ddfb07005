//! Presentation port and an in-memory HTML implementation of it.

use std::collections::HashSet;

use askama::Template;
use shared::NotificationId;

use crate::{
    config::{class_name, MountPoints},
    error::SurfaceError,
    events::FeedEvent,
    render::ItemView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    List,
    Heading,
    MarkAll,
    Counter,
}

/// Every side effect the widget has on its presentation goes through here.
pub trait Surface {
    /// Appends a rendered item to the list container and makes it
    /// activatable.
    fn append_item(&mut self, item: ItemView) -> Result<(), SurfaceError>;

    fn clear_unread_indicator(&mut self, id: &NotificationId) -> Result<(), SurfaceError>;

    /// Inserts a static error message into the list container.
    fn show_error(&mut self, message: &str) -> Result<(), SurfaceError>;

    /// Inserts the counter element into the heading.
    fn mount_counter(&mut self, count: usize) -> Result<(), SurfaceError>;

    fn write_counter(&mut self, count: usize) -> Result<(), SurfaceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListEntry {
    Item(ItemView),
    Error(String),
}

/// List entry as handed to the document template; items are already rendered.
enum Entry<'a> {
    Item(String),
    Error(&'a str),
}

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    heading: Option<&'a str>,
    heading_class: &'a str,
    counter: Option<usize>,
    counter_class: &'a str,
    mark_all: bool,
    mark_all_class: &'a str,
    list: Option<Vec<Entry<'a>>>,
    list_class: &'a str,
}

/// Surface backed by an in-memory document. Mount points can be removed to
/// model a page that lacks them.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    mounts: MountPoints,
    heading: String,
    present: HashSet<MountPoint>,
    entries: Vec<ListEntry>,
    counter: Option<usize>,
}

impl HtmlSurface {
    pub fn new(mounts: MountPoints, heading: impl Into<String>) -> Self {
        Self {
            mounts,
            heading: heading.into(),
            present: [MountPoint::List, MountPoint::Heading, MountPoint::MarkAll]
                .into_iter()
                .collect(),
            entries: Vec::new(),
            counter: None,
        }
    }

    pub fn without(mut self, mount: MountPoint) -> Self {
        self.present.remove(&mount);
        self
    }

    pub fn has_mount(&self, mount: MountPoint) -> bool {
        match mount {
            MountPoint::Counter => self.counter.is_some(),
            other => self.present.contains(&other),
        }
    }

    fn selector(&self, mount: MountPoint) -> &str {
        match mount {
            MountPoint::List => &self.mounts.list,
            MountPoint::Heading => &self.mounts.heading,
            MountPoint::MarkAll => &self.mounts.mark_all,
            MountPoint::Counter => &self.mounts.counter,
        }
    }

    fn require(&self, mount: MountPoint) -> Result<(), SurfaceError> {
        if self.has_mount(mount) {
            Ok(())
        } else {
            Err(SurfaceError::MissingMount {
                selector: self.selector(mount).to_string(),
            })
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemView> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Item(item) => Some(item),
            ListEntry::Error(_) => None,
        })
    }

    pub fn item(&self, id: &NotificationId) -> Option<&ItemView> {
        self.items().find(|item| item.id() == id)
    }

    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Error(message) => Some(message.as_str()),
            ListEntry::Item(_) => None,
        })
    }

    /// Value shown by the counter element, if it has been mounted.
    pub fn counter(&self) -> Option<usize> {
        self.counter
    }

    /// A click on a rendered item. Yields an event only for items that were
    /// appended, since only those have a handler.
    pub fn click_item(&self, id: &NotificationId) -> Option<FeedEvent> {
        self.item(id).map(|item| FeedEvent::Activate(item.id().clone()))
    }

    /// A click on the mark-all control, if the page has one.
    pub fn click_mark_all(&self) -> Option<FeedEvent> {
        self.has_mount(MountPoint::MarkAll).then_some(FeedEvent::MarkAll)
    }

    pub fn to_html(&self) -> askama::Result<String> {
        let list = if self.has_mount(MountPoint::List) {
            let mut entries = Vec::with_capacity(self.entries.len());
            for entry in &self.entries {
                entries.push(match entry {
                    ListEntry::Item(item) => Entry::Item(item.to_html()?),
                    ListEntry::Error(message) => Entry::Error(message),
                });
            }
            Some(entries)
        } else {
            None
        };

        DocumentTemplate {
            heading: self
                .has_mount(MountPoint::Heading)
                .then_some(self.heading.as_str()),
            heading_class: class_name(&self.mounts.heading),
            counter: self.counter,
            counter_class: class_name(&self.mounts.counter),
            mark_all: self.has_mount(MountPoint::MarkAll),
            mark_all_class: class_name(&self.mounts.mark_all),
            list,
            list_class: class_name(&self.mounts.list),
        }
        .render()
    }
}

impl Surface for HtmlSurface {
    fn append_item(&mut self, item: ItemView) -> Result<(), SurfaceError> {
        self.require(MountPoint::List)?;
        self.entries.push(ListEntry::Item(item));
        Ok(())
    }

    fn clear_unread_indicator(&mut self, id: &NotificationId) -> Result<(), SurfaceError> {
        let item = self
            .entries
            .iter_mut()
            .find_map(|entry| match entry {
                ListEntry::Item(item) if item.id() == id => Some(item),
                _ => None,
            })
            .ok_or_else(|| SurfaceError::UnknownItem { id: id.to_string() })?;
        item.clear_unread_indicator();
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<(), SurfaceError> {
        self.require(MountPoint::List)?;
        self.entries.push(ListEntry::Error(message.to_string()));
        Ok(())
    }

    fn mount_counter(&mut self, count: usize) -> Result<(), SurfaceError> {
        self.require(MountPoint::Heading)?;
        self.counter = Some(count);
        Ok(())
    }

    fn write_counter(&mut self, count: usize) -> Result<(), SurfaceError> {
        self.require(MountPoint::Counter)?;
        self.counter = Some(count);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
