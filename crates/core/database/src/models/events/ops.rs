use crate::models::events::{Event, FieldsEvent, PartialEvent};
use lodge_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch events dated on or after the given day, ascending by date,
    /// capped at the given count
    async fn fetch_upcoming_events(&self, today: &str, limit: i64) -> Result<Vec<Event>>;

    /// Fetch every event, descending by date
    async fn fetch_all_events(&self) -> Result<Vec<Event>>;

    /// Insert a new event
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Update an existing event
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()>;

    /// Delete an event
    async fn delete_event(&self, id: &str) -> Result<()>;
}
