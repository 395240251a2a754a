//! Submit handling for the hall rental and contact forms.

use std::collections::HashMap;

use lodge_config::config;
use lodge_database::{
    ContactMessage, ContactSubmission, Database, HallInquiry, HallInquirySubmission,
};
use lodge_result::{Error, Result};

use crate::dom::Dom;

/// Submission lifecycle of a page form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    /// Terminal; the form markup has been replaced by the thank-you panel
    Success,
    Error,
}

/// Named controls of a form element.
///
/// Controls are read at submit time; a control absent from the markup
/// contributes an empty string rather than failing.
pub trait FormControls {
    /// Value of a named control, if the control exists
    fn value(&self, name: &str) -> Option<String>;

    fn submit_label(&self) -> String;

    fn set_submit_label(&mut self, label: &str);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Swap the entire form markup
    fn replace_markup(&mut self, html: &str);
}

#[derive(Debug, Clone, Copy)]
enum FormKind {
    HallInquiry,
    Contact,
}

/// Binds one page form to its collection write.
pub struct FormHandler {
    kind: FormKind,
    state: FormState,
}

impl FormHandler {
    /// Handler for the hall rental inquiry form
    pub fn hall_inquiry() -> Self {
        Self {
            kind: FormKind::HallInquiry,
            state: FormState::Idle,
        }
    }

    /// Handler for the contact form
    pub fn contact() -> Self {
        Self {
            kind: FormKind::Contact,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Run one submit cycle; returns the outcome state.
    ///
    /// Success is terminal. Failure restores the control, raises a
    /// blocking alert with the fallback phone number and leaves the form
    /// ready to resubmit with its values intact.
    pub async fn submit(
        &mut self,
        db: &Database,
        dom: &mut dyn Dom,
        form: &mut dyn FormControls,
    ) -> FormState {
        let original_label = form.submit_label();
        form.set_submit_label(self.progress_label());
        form.set_submit_enabled(false);
        self.state = FormState::Submitting;

        let result = match self.kind {
            FormKind::HallInquiry => HallInquiry::create(
                db,
                HallInquirySubmission {
                    name: control(form, "name"),
                    email: control(form, "email"),
                    phone: control(form, "phone"),
                    event_date: control(form, "event-date"),
                    event_type: control(form, "event-type"),
                    guest_count: control(form, "guests"),
                    message: control(form, "message"),
                },
            )
            .await
            .map(|_| ()),
            FormKind::Contact => ContactMessage::create(
                db,
                ContactSubmission {
                    name: control(form, "name"),
                    email: control(form, "email"),
                    phone: control(form, "phone"),
                    subject: control(form, "subject"),
                    message: control(form, "message"),
                },
            )
            .await
            .map(|_| ()),
        };

        self.resolve(result, dom, form, &original_label).await
    }

    async fn resolve(
        &mut self,
        result: Result<(), Error>,
        dom: &mut dyn Dom,
        form: &mut dyn FormControls,
        original_label: &str,
    ) -> FormState {
        match result {
            Ok(()) => {
                form.replace_markup(self.thank_you_panel());
                self.state = FormState::Success;
                FormState::Success
            }
            Err(error) => {
                error!("form submission failed: {error}");
                form.set_submit_label(original_label);
                form.set_submit_enabled(true);

                let phone = config().await.site.contact_phone;
                dom.alert(&self.error_alert(&phone));

                self.state = FormState::Idle;
                FormState::Error
            }
        }
    }

    fn progress_label(&self) -> &'static str {
        match self.kind {
            FormKind::HallInquiry => "Submitting...",
            FormKind::Contact => "Sending...",
        }
    }

    fn error_alert(&self, phone: &str) -> String {
        match self.kind {
            FormKind::HallInquiry => format!(
                "There was an error submitting your inquiry. \
                 Please try again or call us directly at {phone}."
            ),
            FormKind::Contact => format!(
                "There was an error sending your message. \
                 Please try again or call us directly at {phone}."
            ),
        }
    }

    fn thank_you_panel(&self) -> &'static str {
        match self.kind {
            FormKind::HallInquiry => {
                r#"<div class="form-success">
  <div class="form-success__icon">✅</div>
  <h3>Thank You!</h3>
  <p>We've received your inquiry and will get back to you within 24 hours.</p>
</div>"#
            }
            FormKind::Contact => {
                r#"<div class="form-success">
  <div class="form-success__icon">✅</div>
  <h3>Message Sent!</h3>
  <p>Thank you for reaching out. We'll get back to you soon.</p>
</div>"#
            }
        }
    }
}

fn control(form: &dyn FormControls, name: &str) -> String {
    form.value(name).unwrap_or_default()
}

/// In-memory form, for tests and headless hosts.
pub struct MemoryForm {
    controls: HashMap<String, String>,
    submit_label: String,
    submit_enabled: bool,
    markup: Option<String>,
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self {
            controls: HashMap::new(),
            submit_label: "Submit".to_string(),
            submit_enabled: true,
            markup: None,
        }
    }
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named control with a value
    pub fn with_control(mut self, name: &str, value: &str) -> Self {
        self.controls.insert(name.to_string(), value.to_string());
        self
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Replacement markup, set once a submission succeeds
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }
}

impl FormControls for MemoryForm {
    fn value(&self, name: &str) -> Option<String> {
        self.controls.get(name).cloned()
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn replace_markup(&mut self, html: &str) {
        self.markup = Some(html.to_string());
    }
}
