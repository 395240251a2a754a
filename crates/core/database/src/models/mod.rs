mod contact_messages;
mod events;
mod hall_inquiries;
mod recurring_events;

pub use contact_messages::*;
pub use events::*;
pub use hall_inquiries::*;
pub use recurring_events::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + contact_messages::AbstractContactMessages
    + events::AbstractEvents
    + hall_inquiries::AbstractHallInquiries
    + recurring_events::AbstractRecurringEvents
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
