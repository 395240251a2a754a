use ulid::Ulid;

use crate::{AccessLevel, Database};
#[cfg(feature = "mongodb")]
use crate::IntoDocumentPath;
use lodge_result::Result;

auto_derived!(
    /// Recurring event
    ///
    /// Standing fixtures on the calendar; ordered by an explicit rank
    /// rather than a date, and described by free-form schedule text.
    #[serde(rename_all = "camelCase")]
    pub struct RecurringEvent {
        /// Recurring event id
        #[serde(rename = "_id")]
        pub id: String,
        /// Title
        pub title: String,
        /// Free-form schedule text ("First Tuesday of the month, 7 PM")
        pub schedule: String,
        /// Short description
        pub description: String,
        /// Display rank, ascending
        pub sort_order: i32,

        /// Audience the event is open to
        #[serde(skip_serializing_if = "Option::is_none")]
        pub access_level: Option<AccessLevel>,
        /// Legacy audience flag on documents predating access_level
        #[serde(skip_serializing_if = "Option::is_none")]
        pub open_to_all: Option<bool>,
        /// Emoji shown beside the entry
        #[serde(skip_serializing_if = "Option::is_none")]
        pub emoji: Option<String>,
        /// Rich details text shown in the detail view
        #[serde(skip_serializing_if = "Option::is_none")]
        pub details: Option<String>,
    }
);

auto_derived!(
    /// Partial recurring event for insertions and updates
    #[derive(Default)]
    #[serde(rename_all = "camelCase")]
    pub struct PartialRecurringEvent {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub schedule: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sort_order: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub access_level: Option<AccessLevel>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub open_to_all: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub emoji: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub details: Option<String>,
    }
);

auto_derived!(
    /// Optional fields on recurring event object
    pub enum FieldsRecurringEvent {
        AccessLevel,
        OpenToAll,
        Emoji,
        Details,
    }
);

#[cfg(feature = "mongodb")]
impl IntoDocumentPath for FieldsRecurringEvent {
    fn as_path(&self) -> Option<&'static str> {
        match self {
            FieldsRecurringEvent::AccessLevel => "accessLevel".into(),
            FieldsRecurringEvent::OpenToAll => "openToAll".into(),
            FieldsRecurringEvent::Emoji => "emoji".into(),
            FieldsRecurringEvent::Details => "details".into(),
        }
    }
}

impl Default for RecurringEvent {
    fn default() -> Self {
        Self {
            id: Default::default(),
            title: Default::default(),
            schedule: Default::default(),
            description: Default::default(),
            sort_order: 0,
            access_level: None,
            open_to_all: None,
            emoji: None,
            details: None,
        }
    }
}

impl RecurringEvent {
    /// Create a new recurring event
    pub async fn create(db: &Database, data: PartialRecurringEvent) -> Result<RecurringEvent> {
        let mut event = RecurringEvent {
            id: Ulid::new().to_string(),
            ..Default::default()
        };

        event.apply_options(data);
        db.insert_recurring_event(&event).await?;
        Ok(event)
    }

    /// Apply fields from a partial on top of this recurring event
    pub fn apply_options(&mut self, partial: PartialRecurringEvent) {
        if let Some(title) = partial.title {
            self.title = title;
        }
        if let Some(schedule) = partial.schedule {
            self.schedule = schedule;
        }
        if let Some(description) = partial.description {
            self.description = description;
        }
        if let Some(sort_order) = partial.sort_order {
            self.sort_order = sort_order;
        }
        if partial.access_level.is_some() {
            self.access_level = partial.access_level;
        }
        if partial.open_to_all.is_some() {
            self.open_to_all = partial.open_to_all;
        }
        if partial.emoji.is_some() {
            self.emoji = partial.emoji;
        }
        if partial.details.is_some() {
            self.details = partial.details;
        }
    }

    /// Remove a field from this object
    pub fn remove_field(&mut self, field: &FieldsRecurringEvent) {
        match field {
            FieldsRecurringEvent::AccessLevel => self.access_level = None,
            FieldsRecurringEvent::OpenToAll => self.open_to_all = None,
            FieldsRecurringEvent::Emoji => self.emoji = None,
            FieldsRecurringEvent::Details => self.details = None,
        }
    }

    /// Update this recurring event
    pub async fn update(
        &mut self,
        db: &Database,
        partial: PartialRecurringEvent,
        remove: Vec<FieldsRecurringEvent>,
    ) -> Result<()> {
        for field in &remove {
            self.remove_field(field);
        }

        db.update_recurring_event(&self.id, &partial, remove)
            .await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this recurring event
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_recurring_event(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{AccessLevel, FieldsRecurringEvent, PartialRecurringEvent, RecurringEvent};

    #[async_std::test]
    async fn ordered_by_rank() {
        database_test!(|db| async move {
            for (title, rank) in [("Bingo", 20), ("Lodge Meeting", 0), ("Dart League", 10)] {
                RecurringEvent::create(
                    &db,
                    PartialRecurringEvent {
                        title: Some(title.to_string()),
                        schedule: Some("Weekly".to_string()),
                        description: Some("A lodge fixture.".to_string()),
                        sort_order: Some(rank),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            }

            let fetched = db.fetch_recurring_events().await.unwrap();
            assert_eq!(
                fetched.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
                ["Lodge Meeting", "Dart League", "Bingo"]
            );
        });
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let mut event = RecurringEvent::create(
                &db,
                PartialRecurringEvent {
                    title: Some("Queen of Hearts".to_string()),
                    schedule: Some("Thursdays, 8 PM".to_string()),
                    description: Some("Weekly drawing.".to_string()),
                    sort_order: Some(5),
                    access_level: Some(AccessLevel::Guests),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            event
                .update(
                    &db,
                    PartialRecurringEvent {
                        open_to_all: Some(true),
                        ..Default::default()
                    },
                    vec![FieldsRecurringEvent::AccessLevel],
                )
                .await
                .unwrap();

            let fetched = db.fetch_recurring_event(&event.id).await.unwrap();
            assert!(fetched.access_level.is_none());
            assert_eq!(fetched.open_to_all, Some(true));
            assert_eq!(event, fetched);

            event.delete(&db).await.unwrap();
            assert!(db.fetch_recurring_event(&event.id).await.is_err());
        });
    }
}
