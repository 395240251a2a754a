use crate::models::recurring_events::{
    FieldsRecurringEvent, PartialRecurringEvent, RecurringEvent,
};
use lodge_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractRecurringEvents: Sync + Send {
    /// Fetch a recurring event by its id
    async fn fetch_recurring_event(&self, id: &str) -> Result<RecurringEvent>;

    /// Fetch every recurring event, ascending by display rank
    async fn fetch_recurring_events(&self) -> Result<Vec<RecurringEvent>>;

    /// Insert a new recurring event
    async fn insert_recurring_event(&self, event: &RecurringEvent) -> Result<()>;

    /// Update an existing recurring event
    async fn update_recurring_event(
        &self,
        id: &str,
        partial: &PartialRecurringEvent,
        remove: Vec<FieldsRecurringEvent>,
    ) -> Result<()>;

    /// Delete a recurring event
    async fn delete_recurring_event(&self, id: &str) -> Result<()>;
}
