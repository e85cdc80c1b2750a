use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, metrics};

pub const ACKNOWLEDGEMENT: &str =
    "Thank you for contacting us! We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub received_at: String,
    pub message: &'static str,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("name is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AppError::InvalidInput("a valid email is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::InvalidInput("message is required".to_string()));
        }
        Ok(())
    }

    /// Record the submission. Delivery to a mailbox is not wired up; the
    /// submission only reaches the structured log.
    pub fn submit(&self) -> Result<ContactReceipt, AppError> {
        self.validate()?;

        let received_at = Utc::now().to_rfc3339();
        tracing::info!(
            name = %self.name,
            email = %self.email,
            company = self.company.as_deref().unwrap_or(""),
            message_len = self.message.len(),
            timestamp = %received_at,
            "Contact form submitted"
        );
        metrics::record_contact_submission();

        Ok(ContactReceipt {
            received_at,
            message: ACKNOWLEDGEMENT,
        })
    }
}
