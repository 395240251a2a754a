use mongodb::options::FindOptions;

use super::AbstractHallInquiries;
use crate::{HallInquiry, MongoDb, PartialHallInquiry};
use lodge_result::Result;

// Collection name as it exists in the store, not the Rust module name
static COL: &str = "hall-inquiries";

#[async_trait]
impl AbstractHallInquiries for MongoDb {
    async fn fetch_inquiry(&self, id: &str) -> Result<HallInquiry> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    async fn fetch_all_inquiries(&self) -> Result<Vec<HallInquiry>> {
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

    async fn fetch_new_inquiries(&self) -> Result<Vec<HallInquiry>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "status": HallInquiry::STATUS_NEW
            },
            FindOptions::builder()
                .sort(doc! { "createdAt": -1_i32 })
                .build()
        )
    }

    async fn insert_inquiry(&self, inquiry: &HallInquiry) -> Result<()> {
        query!(self, insert_one, COL, inquiry).map(|_| ())
    }

    async fn update_inquiry(&self, id: &str, partial: &PartialHallInquiry) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial, vec![]).map(|_| ())
    }

    async fn delete_inquiry(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn collection_name_is_pinned_to_the_stored_data() {
        assert_eq!(super::COL, "hall-inquiries");
    }
}
