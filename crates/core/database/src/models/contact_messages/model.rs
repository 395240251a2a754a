use iso8601_timestamp::Timestamp;
use ulid::Ulid;

use crate::Database;
use lodge_result::Result;

auto_derived!(
    /// Contact form message
    #[serde(rename_all = "camelCase")]
    pub struct ContactMessage {
        /// Message id
        #[serde(rename = "_id")]
        pub id: String,
        /// Sender name
        pub name: String,
        /// Sender email
        pub email: String,

        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub phone: String,
        /// Subject line; blank submissions become "General Inquiry"
        pub subject: String,
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
    /// Fields collected by the contact form
    #[derive(Default)]
    pub struct ContactSubmission {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub subject: String,
        pub message: String,
    }
);

auto_derived!(
    /// Partial message for status updates
    #[derive(Default)]
    #[serde(rename_all = "camelCase")]
    pub struct PartialContactMessage {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<Timestamp>,
    }
);

impl ContactMessage {
    /// Status given to fresh submissions
    pub const STATUS_NEW: &'static str = "new";

    /// Subject used when the form control is left blank
    pub const DEFAULT_SUBJECT: &'static str = "General Inquiry";

    /// Save a new message from the contact form
    pub async fn create(db: &Database, data: ContactSubmission) -> Result<ContactMessage> {
        if data.name.trim().is_empty() || data.email.trim().is_empty() || data.message.trim().is_empty()
        {
            return Err(create_error!(FailedValidation {
                error: "name, email and message are required".to_string()
            }));
        }

        let message = ContactMessage {
            id: Ulid::new().to_string(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            subject: if data.subject.is_empty() {
                Self::DEFAULT_SUBJECT.to_string()
            } else {
                data.subject
            },
            message: data.message,
            status: Self::STATUS_NEW.to_string(),
            created_at: Timestamp::now_utc(),
            updated_at: None,
        };

        db.insert_message(&message).await?;
        Ok(message)
    }

    /// Move this message to a new review status
    pub async fn update_status(&mut self, db: &Database, status: String) -> Result<()> {
        let updated_at = Timestamp::now_utc();
        db.update_message(
            &self.id,
            &PartialContactMessage {
                status: Some(status.clone()),
                updated_at: Some(updated_at),
            },
        )
        .await?;

        self.status = status;
        self.updated_at = Some(updated_at);
        Ok(())
    }

    /// Delete this message
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_message(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{ContactMessage, ContactSubmission};
    use lodge_result::ErrorType;

    #[async_std::test]
    async fn blank_message_is_rejected() {
        database_test!(|db| async move {
            let result = ContactMessage::create(
                &db,
                ContactSubmission {
                    name: "Sam Hill".to_string(),
                    email: "sam@example.com".to_string(),
                    ..Default::default()
                },
            )
            .await;

            assert!(matches!(
                result.unwrap_err().error_type,
                ErrorType::FailedValidation { .. }
            ));
            assert!(db.fetch_all_messages().await.unwrap().is_empty());
        });
    }

    #[async_std::test]
    async fn submit_defaults_status_and_subject() {
        database_test!(|db| async move {
            let message = ContactMessage::create(
                &db,
                ContactSubmission {
                    name: "Sam Hill".to_string(),
                    email: "sam@example.com".to_string(),
                    message: "Are visitors welcome on meeting nights?".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            let fetched = db.fetch_message(&message.id).await.unwrap();
            assert_eq!(fetched.status, ContactMessage::STATUS_NEW);
            assert_eq!(fetched.subject, ContactMessage::DEFAULT_SUBJECT);
            assert_eq!(message, fetched);
        });
    }

    #[async_std::test]
    async fn explicit_subject_is_kept() {
        database_test!(|db| async move {
            let message = ContactMessage::create(
                &db,
                ContactSubmission {
                    name: "Sam Hill".to_string(),
                    email: "sam@example.com".to_string(),
                    subject: "Membership".to_string(),
                    message: "How do I join?".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            assert_eq!(
                db.fetch_message(&message.id).await.unwrap().subject,
                "Membership"
            );
        });
    }

    #[async_std::test]
    async fn status_workflow() {
        database_test!(|db| async move {
            let mut message = ContactMessage::create(
                &db,
                ContactSubmission {
                    name: "Sam Hill".to_string(),
                    email: "sam@example.com".to_string(),
                    message: "Hello.".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            message
                .update_status(&db, "reviewed".to_string())
                .await
                .unwrap();

            let fetched = db.fetch_message(&message.id).await.unwrap();
            assert_eq!(fetched.status, "reviewed");
            assert!(fetched.updated_at.is_some());
            assert_eq!(message, fetched);

            message.delete(&db).await.unwrap();
            assert!(db.fetch_message(&message.id).await.is_err());
        });
    }
}
