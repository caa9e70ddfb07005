//! Notification feed widget: loads notifications once, renders them through a
//! presentation port and tracks read state for the session.

pub mod app;
pub mod config;
pub mod controller;
pub mod counter;
pub mod error;
pub mod events;
pub mod feed;
pub mod loader;
pub mod render;
pub mod source;
pub mod surface;

pub use app::NotificationsApp;
pub use config::{FeedSettings, MountPoints};
pub use error::{ConfigError, LoadError, MountError, SurfaceError};
pub use events::{Activation, EventOutcome, FeedEvent};
pub use feed::Feed;
pub use loader::LoadReport;
pub use source::{FileSource, HttpSource, NotificationSource, StaticSource, UnavailableSource};
pub use surface::{HtmlSurface, MountPoint, Surface};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
