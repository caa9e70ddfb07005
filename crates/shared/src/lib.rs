//! Wire and domain types shared by the feed core and its host applications.

pub mod domain;
pub mod error;
pub mod protocol;

pub use domain::{Actor, Content, Notification, NotificationId, Status};
pub use error::RecordError;
