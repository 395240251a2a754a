use iso8601_timestamp::Timestamp;
use ulid::Ulid;

use crate::Database;
use lodge_result::Result;

auto_derived!(
    /// Hall rental inquiry
    #[serde(rename_all = "camelCase")]
    pub struct HallInquiry {
        /// Inquiry id
        #[serde(rename = "_id")]
        pub id: String,
        /// Requester name
        pub name: String,
        /// Requester email
        pub email: String,

        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub phone: String,
        /// Desired event date, free-form
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub event_date: String,
        /// Kind of gathering ("wedding", "fundraiser", ...)
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub event_type: String,
        /// Expected head count, free-form
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub guest_count: String,
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub message: String,

        /// Review status; submissions start at "new"
        pub status: String,

        /// When this record was created
        pub created_at: Timestamp,
        /// When this record was last updated
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<Timestamp>,
    }
);

auto_derived!(
    /// Fields collected by the hall rental form
    #[derive(Default)]
    pub struct HallInquirySubmission {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub event_date: String,
        pub event_type: String,
        pub guest_count: String,
        pub message: String,
    }
);

auto_derived!(
    /// Partial inquiry for status updates
    #[derive(Default)]
    #[serde(rename_all = "camelCase")]
    pub struct PartialHallInquiry {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<Timestamp>,
    }
);

impl HallInquiry {
    /// Status given to fresh submissions
    pub const STATUS_NEW: &'static str = "new";

    /// Save a new inquiry from the hall rental form
    pub async fn create(db: &Database, data: HallInquirySubmission) -> Result<HallInquiry> {
        if data.name.trim().is_empty() || data.email.trim().is_empty() {
            return Err(create_error!(FailedValidation {
                error: "name and email are required".to_string()
            }));
        }

        let inquiry = HallInquiry {
            id: Ulid::new().to_string(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            event_date: data.event_date,
            event_type: data.event_type,
            guest_count: data.guest_count,
            message: data.message,
            status: Self::STATUS_NEW.to_string(),
            created_at: Timestamp::now_utc(),
            updated_at: None,
        };

        db.insert_inquiry(&inquiry).await?;
        Ok(inquiry)
    }

    /// Move this inquiry to a new review status
    pub async fn update_status(&mut self, db: &Database, status: String) -> Result<()> {
        let updated_at = Timestamp::now_utc();
        db.update_inquiry(
            &self.id,
            &PartialHallInquiry {
                status: Some(status.clone()),
                updated_at: Some(updated_at),
            },
        )
        .await?;

        self.status = status;
        self.updated_at = Some(updated_at);
        Ok(())
    }

    /// Delete this inquiry
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_inquiry(&self.id).await
    }
}
