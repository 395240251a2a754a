//! Card view-models and their HTML renderings.
//!
//! Records never reach the page directly; they are first lowered into a
//! [`Card`] describing exactly what the fragment shows, then rendered.
//! The optional-field precedence rules live here, as plain branches.

use lodge_database::{AccessLevel, Event, RecurringEvent};

use crate::dates;

/// Emoji used when a record supplies neither flyer image nor emoji
pub const DEFAULT_EMOJI: &str = "📅";

/// Tag label used when an event carries no audience or category fields
const DEFAULT_TAG: &str = "Event";

/// Layout variant of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Homepage teaser strip entry
    Teaser,
    /// Weekly/monthly schedule entry on the events page
    Recurring,
    /// Special event card on the events page
    Special,
}

/// Resolved audience line for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessTag {
    pub label: &'static str,
    pub class: &'static str,
}

const TAG_OPEN: AccessTag = AccessTag {
    label: "Open to All",
    class: "recurring-event__tag--open",
};
const TAG_MEMBERS: AccessTag = AccessTag {
    label: "Members Only",
    class: "recurring-event__tag--members-only",
};
const TAG_GUESTS: AccessTag = AccessTag {
    label: "Members & Guests",
    class: "recurring-event__tag--members",
};

/// Map the tier field to its display tag, falling back to the legacy
/// boolean for documents predating the tier field
pub fn access_tag(level: Option<&AccessLevel>, open_to_all: Option<bool>) -> AccessTag {
    match level {
        Some(AccessLevel::Open) => TAG_OPEN,
        Some(AccessLevel::Members) => TAG_MEMBERS,
        Some(AccessLevel::Guests) => TAG_GUESTS,
        None => {
            if open_to_all.unwrap_or(false) {
                TAG_OPEN
            } else {
                TAG_GUESTS
            }
        }
    }
}

/// A card opens the detail view only when there is more to show than the
/// card itself
pub fn has_detail_content(event: &Event) -> bool {
    event.details.is_some()
        || event.image.is_some()
        || event.price.is_some()
        || event.rsvp_link.is_some()
}

/// Image slot contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    /// Flyer image
    Image { src: String, alt: String },
    /// Gradient placeholder box with an emoji
    Placeholder { emoji: String },
}

/// Everything a card fragment shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub id: String,
    pub title: String,
    pub description: String,
    /// Audience tag pill; recurring entries only, teaser and special
    /// cards fold the audience into `label` instead
    pub tag: Option<AccessTag>,
    /// Free-text category line on teaser and special cards
    pub label: String,
    pub media: CardMedia,
    /// Date+time line, or free-text schedule for recurring entries
    pub meta: String,
    pub clickable: bool,
}

impl Card {
    /// Homepage teaser card for an event
    pub fn teaser(event: &Event, image_base: &str) -> Card {
        Card {
            kind: CardKind::Teaser,
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            tag: None,
            label: event_label(event),
            media: match &event.image {
                Some(image) => CardMedia::Image {
                    src: format!("{image_base}{image}"),
                    alt: event.title.clone(),
                },
                None => CardMedia::Placeholder {
                    emoji: emoji_or_default(event.emoji.as_deref()),
                },
            },
            meta: event_meta(event),
            clickable: has_detail_content(event),
        }
    }

    /// Special event card; always leads with the emoji hero
    pub fn special(event: &Event) -> Card {
        Card {
            kind: CardKind::Special,
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            tag: None,
            label: event_label(event),
            media: CardMedia::Placeholder {
                emoji: emoji_or_default(event.emoji.as_deref()),
            },
            meta: event_meta(event),
            clickable: has_detail_content(event),
        }
    }

    /// Schedule entry for a recurring event
    pub fn recurring(event: &RecurringEvent) -> Card {
        Card {
            kind: CardKind::Recurring,
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            tag: Some(access_tag(event.access_level.as_ref(), event.open_to_all)),
            label: String::new(),
            media: CardMedia::Placeholder {
                emoji: emoji_or_default(event.emoji.as_deref()),
            },
            meta: event.schedule.clone(),
            clickable: event.details.is_some(),
        }
    }

    /// Render this card to an HTML fragment
    pub fn render(&self) -> String {
        match self.kind {
            CardKind::Teaser | CardKind::Special => self.render_card(),
            CardKind::Recurring => self.render_recurring(),
        }
    }

    fn render_card(&self) -> String {
        let mut html = String::new();

        html.push_str("<article class=\"card");
        if self.clickable {
            html.push_str(" card--clickable");
        }
        html.push('"');
        if self.clickable {
            html.push_str(&format!(" data-event-id=\"{}\"", self.id));
        }
        html.push('>');

        html.push_str("<div class=\"card__image\">");
        match &self.media {
            CardMedia::Image { src, alt } => {
                html.push_str(&format!("<img src=\"{src}\" alt=\"{alt}\">"));
            }
            CardMedia::Placeholder { emoji } => {
                html.push_str(&format!(
                    "<div class=\"card__placeholder\"><span class=\"card__emoji\">{emoji}</span></div>"
                ));
            }
        }
        html.push_str("</div>");

        html.push_str("<div class=\"card__body\">");
        html.push_str(&format!("<span class=\"card__tag\">{}</span>", self.label));
        html.push_str(&format!("<h3 class=\"card__title\">{}</h3>", self.title));
        html.push_str(&format!(
            "<p class=\"card__text\">{}</p>",
            self.description
        ));
        html.push_str(&format!("<p class=\"card__meta\">{}</p>", self.meta));
        if self.clickable {
            html.push_str("<p class=\"card__hint\">Click for details</p>");
        }
        html.push_str("</div>");

        html.push_str("</article>");
        html
    }

    fn render_recurring(&self) -> String {
        let emoji = match &self.media {
            CardMedia::Placeholder { emoji } => emoji.as_str(),
            CardMedia::Image { .. } => DEFAULT_EMOJI,
        };

        let mut html = String::new();
        html.push_str("<div class=\"recurring-event");
        if self.clickable {
            html.push_str(" recurring-event--clickable");
        }
        html.push('"');
        if self.clickable {
            html.push_str(&format!(" data-event-id=\"{}\"", self.id));
        }
        html.push('>');

        html.push_str(&format!(
            "<div class=\"recurring-event__icon\">{emoji}</div>"
        ));
        html.push_str("<div class=\"recurring-event__content\">");
        html.push_str(&format!(
            "<h3 class=\"recurring-event__title\">{}</h3>",
            self.title
        ));
        html.push_str(&format!(
            "<p class=\"recurring-event__schedule\">{}</p>",
            self.meta
        ));
        html.push_str(&format!(
            "<p class=\"recurring-event__desc\">{}</p>",
            self.description
        ));
        if let Some(tag) = &self.tag {
            html.push_str(&format!(
                "<span class=\"recurring-event__tag {}\">{}</span>",
                tag.class, tag.label
            ));
        }
        html.push_str("</div>");

        html.push_str("</div>");
        html
    }
}

/// Category line for teaser and special cards: tier, then legacy flag,
/// then the free-text tag, then a generic default
fn event_label(event: &Event) -> String {
    if event.access_level.is_some() || event.open_to_all.is_some() {
        access_tag(event.access_level.as_ref(), event.open_to_all)
            .label
            .to_string()
    } else {
        event
            .tag
            .clone()
            .unwrap_or_else(|| DEFAULT_TAG.to_string())
    }
}

fn event_meta(event: &Event) -> String {
    match &event.time {
        Some(time) => format!("{} • {time}", dates::format_date_short(&event.date)),
        None => dates::format_date_short(&event.date),
    }
}

fn emoji_or_default(emoji: Option<&str>) -> String {
    match emoji {
        Some(emoji) if !emoji.is_empty() => emoji.to_string(),
        _ => DEFAULT_EMOJI.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodge_database::{AccessLevel, Event, RecurringEvent};

    fn event() -> Event {
        Event {
            title: "Harvest Dinner".to_string(),
            description: "Family style.".to_string(),
            date: "2026-11-05".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn placeholder_falls_back_to_default_emoji() {
        let card = Card::teaser(&event(), "images/");
        assert_eq!(
            card.media,
            CardMedia::Placeholder {
                emoji: DEFAULT_EMOJI.to_string()
            }
        );
        assert!(card.render().contains(DEFAULT_EMOJI));
    }

    #[test]
    fn supplied_emoji_wins() {
        let mut record = event();
        record.emoji = Some("🦌".to_string());
        assert!(Card::special(&record).render().contains("🦌"));
    }

    #[test]
    fn image_reference_renders_img_with_base() {
        let mut record = event();
        record.image = Some("harvest.jpg".to_string());
        let html = Card::teaser(&record, "images/").render();
        assert!(html.contains("<img src=\"images/harvest.jpg\""));
        assert!(!html.contains("card__placeholder"));
    }

    #[test]
    fn access_tag_precedence() {
        // Explicit tier wins over the legacy flag
        let tag = access_tag(Some(&AccessLevel::Members), Some(true));
        assert_eq!(tag.label, "Members Only");

        assert_eq!(access_tag(None, Some(true)).label, "Open to All");
        assert_eq!(access_tag(None, Some(false)).label, "Members & Guests");
        assert_eq!(access_tag(None, None).label, "Members & Guests");
    }

    #[test]
    fn label_precedence_tier_then_flag_then_tag() {
        let mut record = event();
        record.tag = Some("Dinner".to_string());
        assert_eq!(Card::teaser(&record, "").label, "Dinner");

        record.open_to_all = Some(true);
        assert_eq!(Card::teaser(&record, "").label, "Open to All");

        record.access_level = Some(AccessLevel::Guests);
        assert_eq!(Card::teaser(&record, "").label, "Members & Guests");
    }

    #[test]
    fn bare_event_gets_generic_label() {
        assert_eq!(Card::teaser(&event(), "").label, "Event");
    }

    #[test]
    fn bare_card_is_not_interactive() {
        let card = Card::teaser(&event(), "images/");
        assert!(!card.clickable);

        let html = card.render();
        assert!(!html.contains("card--clickable"));
        assert!(!html.contains("data-event-id"));
        assert!(!html.contains("Click for details"));
    }

    #[test]
    fn any_detail_field_makes_the_card_interactive() {
        let setters: [fn(&mut Event); 4] = [
            |e| e.details = Some("Full menu...".to_string()),
            |e| e.image = Some("flyer.jpg".to_string()),
            |e| e.price = Some("$25".to_string()),
            |e| e.rsvp_link = Some("https://example.com".to_string()),
        ];

        for set in setters {
            let mut record = event();
            record.id = "01ABC".to_string();
            set(&mut record);

            let card = Card::teaser(&record, "images/");
            assert!(card.clickable);

            let html = card.render();
            assert!(html.contains("card--clickable"));
            assert!(html.contains("data-event-id=\"01ABC\""));
            assert!(html.contains("Click for details"));
        }
    }

    #[test]
    fn meta_joins_date_and_time() {
        let mut record = event();
        assert_eq!(Card::teaser(&record, "").meta, "Nov 5, 2026");

        record.time = Some("6:30 PM".to_string());
        assert_eq!(Card::teaser(&record, "").meta, "Nov 5, 2026 • 6:30 PM");
    }

    #[test]
    fn audience_pill_is_recurring_only() {
        let mut record = event();
        record.access_level = Some(AccessLevel::Members);

        let card = Card::teaser(&record, "images/");
        assert!(card.tag.is_none());
        // Audience shows as the category line instead
        assert_eq!(card.label, "Members Only");
        assert!(!card.render().contains("recurring-event__tag"));

        assert!(Card::special(&record).tag.is_none());
    }

    #[test]
    fn recurring_entry_shows_schedule_and_tag() {
        let record = RecurringEvent {
            title: "Bingo".to_string(),
            schedule: "Wednesdays, 7 PM".to_string(),
            description: "Doors at 6.".to_string(),
            access_level: Some(AccessLevel::Open),
            ..Default::default()
        };

        let html = Card::recurring(&record).render();
        assert!(html.contains("Wednesdays, 7 PM"));
        assert!(html.contains("recurring-event__tag--open"));
        assert!(html.contains("Open to All"));
        // Nothing to expand, so not interactive
        assert!(!html.contains("recurring-event--clickable"));
    }
}
