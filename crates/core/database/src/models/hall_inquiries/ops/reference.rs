use super::AbstractHallInquiries;
use crate::ReferenceDb;
use crate::{HallInquiry, PartialHallInquiry};
use lodge_result::Result;

#[async_trait]
impl AbstractHallInquiries for ReferenceDb {
    async fn fetch_inquiry(&self, id: &str) -> Result<HallInquiry> {
        let inquiries = self.hall_inquiries.lock().await;
        inquiries
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_all_inquiries(&self) -> Result<Vec<HallInquiry>> {
        let inquiries = self.hall_inquiries.lock().await;
        let mut all: Vec<HallInquiry> = inquiries.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn fetch_new_inquiries(&self) -> Result<Vec<HallInquiry>> {
        let inquiries = self.hall_inquiries.lock().await;
        let mut fresh: Vec<HallInquiry> = inquiries
            .values()
            .filter(|inquiry| inquiry.status == HallInquiry::STATUS_NEW)
            .cloned()
            .collect();

        fresh.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(fresh)
    }

    async fn insert_inquiry(&self, inquiry: &HallInquiry) -> Result<()> {
        let mut inquiries = self.hall_inquiries.lock().await;
        if inquiries.contains_key(&inquiry.id) {
            Err(create_error!(InvalidOperation))
        } else {
            inquiries.insert(inquiry.id.clone(), inquiry.clone());
            Ok(())
        }
    }

    async fn update_inquiry(&self, id: &str, partial: &PartialHallInquiry) -> Result<()> {
        let mut inquiries = self.hall_inquiries.lock().await;
        if let Some(inquiry) = inquiries.get_mut(id) {
            if let Some(status) = &partial.status {
                inquiry.status = status.clone();
            }
            if partial.updated_at.is_some() {
                inquiry.updated_at = partial.updated_at;
            }
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    async fn delete_inquiry(&self, id: &str) -> Result<()> {
        let mut inquiries = self.hall_inquiries.lock().await;
        if inquiries.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
