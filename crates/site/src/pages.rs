//! Page controllers: fetch records, render cards, fill containers.
//!
//! Each container resolves on its own. A read failure is logged and shown
//! as the section's empty state; nothing here is fatal to the page.

use lodge_config::config;
use lodge_database::{Database, Event};

use crate::dates;
use crate::detail::DetailView;
use crate::dom::Dom;
use crate::render::Card;

const LOADING: &str = r#"<p class="text-center">Loading events...</p>"#;
const EMPTY_HOMEPAGE: &str =
    r#"<p class="text-center text-muted">No upcoming events. Check back soon!</p>"#;
const EMPTY_UPCOMING: &str =
    r#"<p class="text-center text-muted">No upcoming special events scheduled. Check back soon!</p>"#;

/// Drives the event listings of one page and owns its detail view.
#[derive(Default)]
pub struct PageController {
    detail: DetailView,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Fill the homepage teaser strip with upcoming events
    pub async fn load_homepage_events(
        &self,
        db: &Database,
        dom: &mut dyn Dom,
        container_id: &str,
        limit: Option<i64>,
    ) {
        if !dom.contains(container_id) {
            return;
        }

        dom.set_html(container_id, LOADING);

        let settings = config().await;
        let limit = limit.unwrap_or(settings.site.limits.homepage_events);
        let today = dates::today();

        let events = match Event::fetch_upcoming(db, &today, limit).await {
            Ok(events) => events,
            Err(error) => {
                error!("failed to fetch upcoming events: {error}");
                Vec::new()
            }
        };

        if events.is_empty() {
            dom.set_html(container_id, EMPTY_HOMEPAGE);
            return;
        }

        let html: String = events
            .iter()
            .map(|event| Card::teaser(event, &settings.site.image_base).render())
            .collect();
        dom.set_html(container_id, &html);
    }

    /// Fill the events page: the recurring schedule and the upcoming
    /// special events, independently
    pub async fn load_events_page(
        &self,
        db: &Database,
        dom: &mut dyn Dom,
        recurring_id: &str,
        upcoming_id: &str,
    ) {
        let settings = config().await;
        let today = dates::today();

        if dom.contains(upcoming_id) {
            dom.set_html(upcoming_id, LOADING);
        }

        // The two reads race; each container resolves on its own.
        let (recurring, upcoming) = futures::join!(
            db.fetch_recurring_events(),
            Event::fetch_upcoming(db, &today, settings.site.limits.upcoming_events),
        );

        if dom.contains(recurring_id) {
            match recurring {
                Ok(events) if !events.is_empty() => {
                    let html: String = events
                        .iter()
                        .map(|event| Card::recurring(event).render())
                        .collect();
                    dom.set_html(recurring_id, &html);
                }
                // An empty schedule keeps whatever the page authored
                Ok(_) => {}
                Err(error) => {
                    error!("failed to fetch recurring events: {error}");
                }
            }
        }

        if dom.contains(upcoming_id) {
            let events = match upcoming {
                Ok(events) => events,
                Err(error) => {
                    error!("failed to fetch upcoming events: {error}");
                    Vec::new()
                }
            };

            if events.is_empty() {
                dom.set_html(upcoming_id, EMPTY_UPCOMING);
            } else {
                let html: String = events
                    .iter()
                    .map(|event| Card::special(event).render())
                    .collect();
                dom.set_html(upcoming_id, &html);
            }
        }
    }

    /// Open the detail view for a clicked card
    pub async fn open_event_details(&mut self, db: &Database, dom: &mut dyn Dom, event_id: &str) {
        match db.fetch_event(event_id).await {
            Ok(event) => {
                let settings = config().await;
                self.detail.open(dom, &event, &settings.site.image_base);
            }
            Err(error) => {
                error!("failed to fetch event {event_id}: {error}");
            }
        }
    }

    pub fn close_details(&mut self, dom: &mut dyn Dom) {
        self.detail.close(dom);
    }

    /// Forward page-level key presses to the detail view
    pub fn handle_key(&mut self, dom: &mut dyn Dom, key: &str) {
        self.detail.handle_key(dom, key);
    }
}
