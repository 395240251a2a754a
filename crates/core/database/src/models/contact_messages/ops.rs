use crate::models::contact_messages::{ContactMessage, PartialContactMessage};
use lodge_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractContactMessages: Sync + Send {
    /// Fetch a message by its id
    async fn fetch_message(&self, id: &str) -> Result<ContactMessage>;

    /// Fetch every message, most recent first
    async fn fetch_all_messages(&self) -> Result<Vec<ContactMessage>>;

    /// Insert a new message
    async fn insert_message(&self, message: &ContactMessage) -> Result<()>;

    /// Update an existing message
    async fn update_message(&self, id: &str, partial: &PartialContactMessage) -> Result<()>;

    /// Delete a message
    async fn delete_message(&self, id: &str) -> Result<()>;
}
