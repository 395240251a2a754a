use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{ContactMessage, Event, HallInquiry, RecurringEvent};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub recurring_events: Arc<Mutex<HashMap<String, RecurringEvent>>>,
        pub hall_inquiries: Arc<Mutex<HashMap<String, HallInquiry>>>,
        pub contact_messages: Arc<Mutex<HashMap<String, ContactMessage>>>,
    }
);

#[cfg(test)]
impl ReferenceDb {
    /// Wipe every collection
    pub async fn clear(&self) {
        self.events.lock().await.clear();
        self.recurring_events.lock().await.clear();
        self.hall_inquiries.lock().await.clear();
        self.contact_messages.lock().await.clear();
    }
}
