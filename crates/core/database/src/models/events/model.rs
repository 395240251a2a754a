use iso8601_timestamp::Timestamp;
use ulid::Ulid;

use crate::Database;
#[cfg(feature = "mongodb")]
use crate::IntoDocumentPath;
use lodge_result::Result;

auto_derived!(
    /// Audience an event or recurring event is intended for
    #[serde(rename_all = "lowercase")]
    pub enum AccessLevel {
        Open,
        Members,
        Guests,
    }
);

auto_derived!(
    /// Event
    #[serde(rename_all = "camelCase")]
    pub struct Event {
        /// Event id
        #[serde(rename = "_id")]
        pub id: String,
        /// Event title
        pub title: String,
        /// Short description shown on cards
        pub description: String,
        /// ISO calendar date, zero padded (YYYY-MM-DD)
        pub date: String,

        /// Free-form display time
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time: Option<String>,
        /// Free-text category label
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tag: Option<String>,
        /// Emoji shown when no flyer image exists
        #[serde(skip_serializing_if = "Option::is_none")]
        pub emoji: Option<String>,
        /// Flyer image reference, relative to the configured image base
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,
        /// Audience the event is open to
        #[serde(skip_serializing_if = "Option::is_none")]
        pub access_level: Option<AccessLevel>,
        /// Legacy audience flag on documents predating access_level
        #[serde(skip_serializing_if = "Option::is_none")]
        pub open_to_all: Option<bool>,
        /// Display price
        #[serde(skip_serializing_if = "Option::is_none")]
        pub price: Option<String>,
        /// Rich details text shown in the detail view
        #[serde(skip_serializing_if = "Option::is_none")]
        pub details: Option<String>,
        /// External RSVP link
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rsvp_link: Option<String>,

        /// When this record was created
        pub created_at: Timestamp,
        /// When this record was last updated
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<Timestamp>,
    }
);

auto_derived!(
    /// Partial event for insertions and updates
    #[derive(Default)]
    #[serde(rename_all = "camelCase")]
    pub struct PartialEvent {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tag: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub emoji: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub access_level: Option<AccessLevel>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub open_to_all: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub price: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub details: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rsvp_link: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<Timestamp>,
    }
);

auto_derived!(
    /// Optional fields on event object
    pub enum FieldsEvent {
        Time,
        Tag,
        Emoji,
        Image,
        AccessLevel,
        OpenToAll,
        Price,
        Details,
        RsvpLink,
    }
);

#[cfg(feature = "mongodb")]
impl IntoDocumentPath for FieldsEvent {
    fn as_path(&self) -> Option<&'static str> {
        match self {
            FieldsEvent::Time => "time".into(),
            FieldsEvent::Tag => "tag".into(),
            FieldsEvent::Emoji => "emoji".into(),
            FieldsEvent::Image => "image".into(),
            FieldsEvent::AccessLevel => "accessLevel".into(),
            FieldsEvent::OpenToAll => "openToAll".into(),
            FieldsEvent::Price => "price".into(),
            FieldsEvent::Details => "details".into(),
            FieldsEvent::RsvpLink => "rsvpLink".into(),
        }
    }
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: Default::default(),
            title: Default::default(),
            description: Default::default(),
            date: Default::default(),
            time: None,
            tag: None,
            emoji: None,
            image: None,
            access_level: None,
            open_to_all: None,
            price: None,
            details: None,
            rsvp_link: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: None,
        }
    }
}

impl Event {
    /// Default cap on upcoming-event queries
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Create a new event
    pub async fn create(db: &Database, data: PartialEvent) -> Result<Event> {
        let mut event = Event {
            id: Ulid::new().to_string(),
            created_at: Timestamp::now_utc(),
            ..Default::default()
        };

        event.apply_options(data);
        db.insert_event(&event).await?;
        Ok(event)
    }

    /// Fetch events dated on or after the given day, soonest first
    pub async fn fetch_upcoming<L>(db: &Database, today: &str, limit: L) -> Result<Vec<Event>>
    where
        L: Into<Option<i64>>,
    {
        db.fetch_upcoming_events(today, limit.into().unwrap_or(Self::DEFAULT_LIMIT))
            .await
    }

    /// Apply fields from a partial on top of this event
    pub fn apply_options(&mut self, partial: PartialEvent) {
        if let Some(title) = partial.title {
            self.title = title;
        }
        if let Some(description) = partial.description {
            self.description = description;
        }
        if let Some(date) = partial.date {
            self.date = date;
        }
        if partial.time.is_some() {
            self.time = partial.time;
        }
        if partial.tag.is_some() {
            self.tag = partial.tag;
        }
        if partial.emoji.is_some() {
            self.emoji = partial.emoji;
        }
        if partial.image.is_some() {
            self.image = partial.image;
        }
        if partial.access_level.is_some() {
            self.access_level = partial.access_level;
        }
        if partial.open_to_all.is_some() {
            self.open_to_all = partial.open_to_all;
        }
        if partial.price.is_some() {
            self.price = partial.price;
        }
        if partial.details.is_some() {
            self.details = partial.details;
        }
        if partial.rsvp_link.is_some() {
            self.rsvp_link = partial.rsvp_link;
        }
        if partial.updated_at.is_some() {
            self.updated_at = partial.updated_at;
        }
    }

    /// Remove a field from this object
    pub fn remove_field(&mut self, field: &FieldsEvent) {
        match field {
            FieldsEvent::Time => self.time = None,
            FieldsEvent::Tag => self.tag = None,
            FieldsEvent::Emoji => self.emoji = None,
            FieldsEvent::Image => self.image = None,
            FieldsEvent::AccessLevel => self.access_level = None,
            FieldsEvent::OpenToAll => self.open_to_all = None,
            FieldsEvent::Price => self.price = None,
            FieldsEvent::Details => self.details = None,
            FieldsEvent::RsvpLink => self.rsvp_link = None,
        }
    }

    /// Update this event
    pub async fn update(
        &mut self,
        db: &Database,
        mut partial: PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        partial.updated_at = Some(Timestamp::now_utc());

        for field in &remove {
            self.remove_field(field);
        }

        db.update_event(&self.id, &partial, remove).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this event
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_event(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Event, FieldsEvent, PartialEvent};

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let mut event = Event::create(
                &db,
                PartialEvent {
                    title: Some("Trivia Night".to_string()),
                    description: Some("Teams of four, prizes for the podium.".to_string()),
                    date: Some("2500-03-14".to_string()),
                    time: Some("7:00 PM".to_string()),
                    price: Some("$10".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(event, fetched);
            assert_eq!(fetched.time.as_deref(), Some("7:00 PM"));

            event
                .update(
                    &db,
                    PartialEvent {
                        description: Some("Teams of up to four.".to_string()),
                        ..Default::default()
                    },
                    vec![FieldsEvent::Price],
                )
                .await
                .unwrap();

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched.description, "Teams of up to four.");
            assert_eq!(fetched.title, "Trivia Night");
            assert_eq!(fetched.date, "2500-03-14");
            assert!(fetched.price.is_none());
            assert!(fetched.updated_at.is_some());
            assert_eq!(event, fetched);

            event.delete(&db).await.unwrap();
            assert!(db.fetch_event(&event.id).await.is_err());
        });
    }

    #[async_std::test]
    async fn upcoming_filters_and_orders() {
        database_test!(|db| async move {
            for date in [
                "2500-01-05",
                "2500-01-03",
                "2400-12-31",
                "2500-01-04",
                "2500-01-01",
                "2500-01-02",
                "2399-06-01",
            ] {
                Event::create(
                    &db,
                    PartialEvent {
                        title: Some(format!("Event on {date}")),
                        description: Some("An evening at the lodge.".to_string()),
                        date: Some(date.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            }

            // Five future records, two past, capped at three
            let events = Event::fetch_upcoming(&db, "2500-01-01", 3).await.unwrap();
            assert_eq!(
                events.iter().map(|e| e.date.as_str()).collect::<Vec<_>>(),
                ["2500-01-01", "2500-01-02", "2500-01-03"]
            );

            let events = Event::fetch_upcoming(&db, "2500-01-01", None)
                .await
                .unwrap();
            assert_eq!(events.len(), 5);
            assert!(events.windows(2).all(|w| w[0].date <= w[1].date));

            // Admin listing is unfiltered, most recent first
            let all = db.fetch_all_events().await.unwrap();
            assert_eq!(all.len(), 7);
            assert!(all.windows(2).all(|w| w[0].date >= w[1].date));
        });
    }
}
