use mongodb::options::FindOptions;

use super::AbstractContactMessages;
use crate::{ContactMessage, MongoDb, PartialContactMessage};
use lodge_result::Result;

// Collection name as it exists in the store, not the Rust module name
static COL: &str = "contact-messages";

#[async_trait]
impl AbstractContactMessages for MongoDb {
    async fn fetch_message(&self, id: &str) -> Result<ContactMessage> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_all_messages(&self) -> Result<Vec<ContactMessage>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! { "createdAt": -1_i32 })
                .build()
        )
    }

    async fn insert_message(&self, message: &ContactMessage) -> Result<()> {
        query!(self, insert_one, COL, message).map(|_| ())
    }

    async fn update_message(&self, id: &str, partial: &PartialContactMessage) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial, vec![]).map(|_| ())
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}
