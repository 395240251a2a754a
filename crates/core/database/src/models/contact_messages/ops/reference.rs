use super::AbstractContactMessages;
use crate::ReferenceDb;
use crate::{ContactMessage, PartialContactMessage};
use lodge_result::Result;

#[async_trait]
impl AbstractContactMessages for ReferenceDb {
    async fn fetch_message(&self, id: &str) -> Result<ContactMessage> {
        let messages = self.contact_messages.lock().await;
        messages
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_all_messages(&self) -> Result<Vec<ContactMessage>> {
        let messages = self.contact_messages.lock().await;
        let mut all: Vec<ContactMessage> = messages.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn insert_message(&self, message: &ContactMessage) -> Result<()> {
        let mut messages = self.contact_messages.lock().await;
        if messages.contains_key(&message.id) {
            Err(create_error!(InvalidOperation))
        } else {
            messages.insert(message.id.clone(), message.clone());
            Ok(())
        }
    }

    async fn update_message(&self, id: &str, partial: &PartialContactMessage) -> Result<()> {
        let mut messages = self.contact_messages.lock().await;
        if let Some(message) = messages.get_mut(id) {
            if let Some(status) = &partial.status {
                message.status = status.clone();
            }
            if partial.updated_at.is_some() {
                message.updated_at = partial.updated_at;
            }
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        let mut messages = self.contact_messages.lock().await;
        if messages.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
