//! The notifications widget: feed context, surface and settings together.

use tracing::debug;

use crate::{
    config::FeedSettings,
    controller,
    events::{EventOutcome, FeedEvent},
    feed::Feed,
    loader::{self, LoadReport},
    source::NotificationSource,
    surface::Surface,
};

pub struct NotificationsApp<S: Surface> {
    settings: FeedSettings,
    feed: Feed,
    surface: S,
    report: LoadReport,
}

impl<S: Surface> NotificationsApp<S> {
    /// Loads the feed from `source` into `surface`. Never fails: a failed
    /// fetch leaves an empty feed and the error message on the surface.
    pub async fn start(
        settings: FeedSettings,
        source: &dyn NotificationSource,
        mut surface: S,
    ) -> Self {
        let mut feed = Feed::new();
        let report = loader::load(source, &mut feed, &mut surface, &settings.error_message).await;
        Self {
            settings,
            feed,
            surface,
            report,
        }
    }

    pub fn dispatch(&mut self, event: FeedEvent) -> EventOutcome {
        debug!(?event, "dispatching feed event");
        match event {
            FeedEvent::Activate(id) => EventOutcome::Activated(controller::activate(
                &mut self.feed,
                &mut self.surface,
                &id,
            )),
            FeedEvent::MarkAll => {
                EventOutcome::MarkedAll(controller::mark_all(&mut self.feed, &mut self.surface))
            }
        }
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn unread_count(&self) -> usize {
        crate::counter::unread_count(&self.feed)
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
