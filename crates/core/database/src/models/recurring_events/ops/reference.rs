use super::AbstractRecurringEvents;
use crate::ReferenceDb;
use crate::{FieldsRecurringEvent, PartialRecurringEvent, RecurringEvent};
use lodge_result::Result;

#[async_trait]
impl AbstractRecurringEvents for ReferenceDb {
    async fn fetch_recurring_event(&self, id: &str) -> Result<RecurringEvent> {
        let events = self.recurring_events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_recurring_events(&self) -> Result<Vec<RecurringEvent>> {
        let events = self.recurring_events.lock().await;
        let mut all: Vec<RecurringEvent> = events.values().cloned().collect();
        all.sort_by_key(|event| event.sort_order);
        Ok(all)
    }

    async fn insert_recurring_event(&self, event: &RecurringEvent) -> Result<()> {
        let mut events = self.recurring_events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_error!(InvalidOperation))
        } else {
            events.insert(event.id.clone(), event.clone());
            Ok(())
        }
    }

    async fn update_recurring_event(
        &self,
        id: &str,
        partial: &PartialRecurringEvent,
        remove: Vec<FieldsRecurringEvent>,
    ) -> Result<()> {
        let mut events = self.recurring_events.lock().await;
        if let Some(event) = events.get_mut(id) {
            for field in &remove {
                event.remove_field(field);
            }

            event.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    async fn delete_recurring_event(&self, id: &str) -> Result<()> {
        let mut events = self.recurring_events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
