//! On-demand expanded presentation of one event, shown over the page.

use lodge_database::Event;

use crate::dates;
use crate::dom::Dom;
use crate::render::DEFAULT_EMOJI;

/// Container id the host page reserves for the detail overlay
pub const DETAIL_CONTAINER_ID: &str = "event-detail";

/// Detail view component.
///
/// Owned by the page controller and constructed once per page; the same
/// overlay node is re-populated on every open. While open, page scroll is
/// suspended; closing restores the offset captured at open time.
#[derive(Default)]
pub struct DetailView {
    open: bool,
    saved_scroll: f64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Populate the overlay with this event and suspend page scroll
    pub fn open(&mut self, dom: &mut dyn Dom, event: &Event, image_base: &str) {
        if !dom.contains(DETAIL_CONTAINER_ID) {
            return;
        }

        if !self.open {
            self.saved_scroll = dom.scroll_offset();
        }

        dom.set_html(DETAIL_CONTAINER_ID, &render_detail(event, image_base));
        dom.set_scroll_locked(true);
        self.open = true;
    }

    /// Clear the overlay and restore the pre-open scroll state
    pub fn close(&mut self, dom: &mut dyn Dom) {
        if !self.open {
            return;
        }

        dom.set_html(DETAIL_CONTAINER_ID, "");
        dom.set_scroll_locked(false);
        dom.set_scroll_offset(self.saved_scroll);
        self.open = false;
    }

    /// Escape closes the overlay; other keys are ignored
    pub fn handle_key(&mut self, dom: &mut dyn Dom, key: &str) {
        if key == "Escape" {
            self.close(dom);
        }
    }

    /// Backdrop clicks close the overlay like the close control does
    pub fn handle_backdrop_click(&mut self, dom: &mut dyn Dom) {
        self.close(dom);
    }
}

fn render_detail(event: &Event, image_base: &str) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"event-detail__backdrop\" data-close></div>");
    html.push_str("<div class=\"event-detail__panel\" role=\"dialog\" aria-modal=\"true\">");
    html.push_str("<button class=\"event-detail__close\" aria-label=\"Close\" data-close>&times;</button>");

    match &event.image {
        Some(image) => {
            html.push_str(&format!(
                "<img class=\"event-detail__image\" src=\"{image_base}{image}\" alt=\"{}\">",
                event.title
            ));
        }
        None => {
            let emoji = event.emoji.as_deref().unwrap_or(DEFAULT_EMOJI);
            html.push_str(&format!(
                "<div class=\"event-detail__placeholder\"><span>{emoji}</span></div>"
            ));
        }
    }

    html.push_str(&format!(
        "<h2 class=\"event-detail__title\">{}</h2>",
        event.title
    ));

    let mut meta = dates::format_date_long(&event.date);
    if let Some(time) = &event.time {
        meta.push_str(" • ");
        meta.push_str(time);
    }
    html.push_str(&format!("<p class=\"event-detail__meta\">{meta}</p>"));

    if let Some(price) = &event.price {
        html.push_str(&format!("<p class=\"event-detail__price\">{price}</p>"));
    }

    html.push_str(&format!(
        "<p class=\"event-detail__text\">{}</p>",
        event.description
    ));

    if let Some(details) = &event.details {
        html.push_str(&format!(
            "<div class=\"event-detail__details\">{details}</div>"
        ));
    }

    if let Some(link) = &event.rsvp_link {
        html.push_str(&format!(
            "<a class=\"button event-detail__rsvp\" href=\"{link}\" target=\"_blank\" rel=\"noopener\">RSVP</a>"
        ));
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageDom;
    use lodge_database::Event;

    fn dinner() -> Event {
        Event {
            id: "01EVT".to_string(),
            title: "Harvest Dinner".to_string(),
            description: "Family style.".to_string(),
            date: "2026-11-05".to_string(),
            time: Some("6:30 PM".to_string()),
            price: Some("$25".to_string()),
            details: Some("Cash bar. Bring a dessert to share.".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn open_populates_overlay_and_locks_scroll() {
        let mut dom = PageDom::new().with_container(DETAIL_CONTAINER_ID);
        let mut view = DetailView::new();

        view.open(&mut dom, &dinner(), "images/");

        assert!(view.is_open());
        assert!(dom.scroll_locked());

        let html = dom.html(DETAIL_CONTAINER_ID).unwrap();
        assert!(html.contains("Harvest Dinner"));
        assert!(html.contains("Thursday, November 5, 2026 • 6:30 PM"));
        assert!(html.contains("$25"));
        assert!(html.contains("Bring a dessert"));
    }

    #[test]
    fn escape_restores_scroll_state() {
        let mut dom = PageDom::new().with_container(DETAIL_CONTAINER_ID);
        dom.set_scroll_offset(420.0);

        let mut view = DetailView::new();
        view.open(&mut dom, &dinner(), "images/");

        // Opening the overlay scrolls the page under the hood
        dom.set_scroll_offset(0.0);

        view.handle_key(&mut dom, "Escape");

        assert!(!view.is_open());
        assert!(!dom.scroll_locked());
        assert_eq!(dom.scroll_offset(), 420.0);
        assert_eq!(dom.html(DETAIL_CONTAINER_ID), Some(""));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut dom = PageDom::new().with_container(DETAIL_CONTAINER_ID);
        let mut view = DetailView::new();
        view.open(&mut dom, &dinner(), "images/");

        view.handle_key(&mut dom, "Enter");
        assert!(view.is_open());
    }

    #[test]
    fn backdrop_click_closes() {
        let mut dom = PageDom::new().with_container(DETAIL_CONTAINER_ID);
        let mut view = DetailView::new();
        view.open(&mut dom, &dinner(), "images/");

        view.handle_backdrop_click(&mut dom);
        assert!(!view.is_open());
        assert!(!dom.scroll_locked());
    }

    #[test]
    fn reopening_repopulates_the_same_node() {
        let mut dom = PageDom::new().with_container(DETAIL_CONTAINER_ID);
        let mut view = DetailView::new();

        view.open(&mut dom, &dinner(), "images/");
        view.close(&mut dom);

        let mut other = dinner();
        other.title = "Winter Social".to_string();
        view.open(&mut dom, &other, "images/");

        let html = dom.html(DETAIL_CONTAINER_ID).unwrap();
        assert!(html.contains("Winter Social"));
        assert!(!html.contains("Harvest Dinner"));
    }

    #[test]
    fn missing_overlay_node_noops() {
        let mut dom = PageDom::new();
        let mut view = DetailView::new();

        view.open(&mut dom, &dinner(), "images/");
        assert!(!view.is_open());
        assert!(!dom.scroll_locked());
    }
}
