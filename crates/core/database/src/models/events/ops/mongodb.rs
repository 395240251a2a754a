use mongodb::options::FindOptions;

use super::AbstractEvents;
use crate::{Event, FieldsEvent, IntoDocumentPath, MongoDb, PartialEvent};
use lodge_result::Result;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_upcoming_events(&self, today: &str, limit: i64) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "date": {
                    "$gte": today
                }
            },
            FindOptions::builder()
                .sort(doc! { "date": 1_i32 })
                .limit(limit)
                .build()
        )
    }

    async fn fetch_all_events(&self) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder().sort(doc! { "date": -1_i32 }).build()
        )
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
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

    async fn delete_event(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}
