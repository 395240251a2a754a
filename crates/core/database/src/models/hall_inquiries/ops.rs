use crate::models::hall_inquiries::{HallInquiry, PartialHallInquiry};
use lodge_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractHallInquiries: Sync + Send {
    /// Fetch an inquiry by its id
    async fn fetch_inquiry(&self, id: &str) -> Result<HallInquiry>;

    /// Fetch every inquiry, most recent first
    async fn fetch_all_inquiries(&self) -> Result<Vec<HallInquiry>>;

    /// Fetch inquiries still awaiting review, most recent first
    async fn fetch_new_inquiries(&self) -> Result<Vec<HallInquiry>>;

    /// Insert a new inquiry
    async fn insert_inquiry(&self, inquiry: &HallInquiry) -> Result<()>;

    /// Update an existing inquiry
    async fn update_inquiry(&self, id: &str, partial: &PartialHallInquiry) -> Result<()>;

    /// Delete an inquiry
    async fn delete_inquiry(&self, id: &str) -> Result<()>;
}
