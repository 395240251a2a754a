use mongodb::options::FindOptions;

use super::AbstractRecurringEvents;
use crate::{FieldsRecurringEvent, IntoDocumentPath, MongoDb, PartialRecurringEvent, RecurringEvent};
use lodge_result::Result;

// Collection name as it exists in the store, not the Rust module name
static COL: &str = "recurring-events";

#[async_trait]
impl AbstractRecurringEvents for MongoDb {
    async fn fetch_recurring_event(&self, id: &str) -> Result<RecurringEvent> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_recurring_events(&self) -> Result<Vec<RecurringEvent>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! { "sortOrder": 1_i32 })
                .build()
        )
    }

    async fn insert_recurring_event(&self, event: &RecurringEvent) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    async fn update_recurring_event(
        &self,
        id: &str,
        partial: &PartialRecurringEvent,
        remove: Vec<FieldsRecurringEvent>,
    ) -> Result<()> {
        query!(
            self,
            update_one_by_id,
            COL,
            id,
            partial,
            remove.iter().map(|x| x as &dyn IntoDocumentPath).collect()
        )
        .map(|_| ())
    }

    async fn delete_recurring_event(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn collection_name_is_pinned_to_the_stored_data() {
        assert_eq!(super::COL, "recurring-events");
    }
}
