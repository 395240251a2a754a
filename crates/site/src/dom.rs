//! Seam between the controllers and whatever renders the page.

use std::collections::HashMap;

/// Surface the host page exposes to page controllers, detail views and
/// form handlers. A missing container is not an error; callers check
/// [`Dom::contains`] and silently skip absent sections.
pub trait Dom {
    /// Whether a container with this id exists on the page
    fn contains(&self, id: &str) -> bool;

    /// Replace the inner HTML of a container
    fn set_html(&mut self, id: &str, html: &str);

    /// Current vertical scroll offset
    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    /// Suspend or resume page scrolling
    fn set_scroll_locked(&mut self, locked: bool);

    fn scroll_locked(&self) -> bool;

    /// Raise a blocking alert
    fn alert(&mut self, message: &str);
}

/// In-memory page surface, for tests and headless hosts.
#[derive(Default)]
pub struct PageDom {
    containers: HashMap<String, String>,
    scroll_offset: f64,
    scroll_locked: bool,
    alerts: Vec<String>,
}

impl PageDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an (initially empty) container
    pub fn with_container(mut self, id: &str) -> Self {
        self.containers.insert(id.to_string(), String::new());
        self
    }

    /// Current HTML of a container
    pub fn html(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    /// Alerts raised so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Dom for PageDom {
    fn contains(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn set_html(&mut self, id: &str, html: &str) {
        // Unknown ids no-op, like writing to a missing element
        if let Some(container) = self.containers.get_mut(id) {
            *container = html.to_string();
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
