use super::AbstractEvents;
use crate::ReferenceDb;
use crate::{Event, FieldsEvent, PartialEvent};
use lodge_result::Result;

#[async_trait]
impl AbstractEvents for ReferenceDb {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_upcoming_events(&self, today: &str, limit: i64) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut upcoming: Vec<Event> = events
            .values()
            .filter(|event| event.date.as_str() >= today)
            .cloned()
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        upcoming.truncate(limit.max(0) as usize);
        Ok(upcoming)
    }

    async fn fetch_all_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut all: Vec<Event> = events.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(all)
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_error!(InvalidOperation))
        } else {
            events.insert(event.id.clone(), event.clone());
            Ok(())
        }
    }

    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        let mut events = self.events.lock().await;
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

    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
