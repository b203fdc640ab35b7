use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::{
    has_min_length, is_valid_email, json_kind, required_string, FieldError, IssueCode,
    ValidationErrors,
};
use super::Id;

const NAME_MIN: usize = 2;
const SUBJECT_MIN: usize = 5;
const MESSAGE_MIN: usize = 10;

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Set by the store when the message is created.
    pub created_at: DateTime<Utc>,
}

/// A contact-form submission that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    /// Validate a raw request body.
    ///
    /// Every field is checked and all failures are reported together.
    /// Unknown keys are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = body.as_object() else {
            return Err(ValidationErrors::single(FieldError::body(
                IssueCode::InvalidType,
                format!("Expected object, received {}", json_kind(body)),
            )));
        };

        let mut errors = ValidationErrors::default();

        let name = required_string(object, "name", &mut errors).filter(|name| {
            check(
                &mut errors,
                has_min_length(name, NAME_MIN),
                FieldError::new(IssueCode::TooSmall, "Name must be at least 2 characters", "name"),
            )
        });
        let email = required_string(object, "email", &mut errors).filter(|email| {
            check(
                &mut errors,
                is_valid_email(email),
                FieldError::new(
                    IssueCode::InvalidString,
                    "Please enter a valid email address",
                    "email",
                ),
            )
        });
        let subject = required_string(object, "subject", &mut errors).filter(|subject| {
            check(
                &mut errors,
                has_min_length(subject, SUBJECT_MIN),
                FieldError::new(
                    IssueCode::TooSmall,
                    "Subject must be at least 5 characters",
                    "subject",
                ),
            )
        });
        let message = required_string(object, "message", &mut errors).filter(|message| {
            check(
                &mut errors,
                has_min_length(message, MESSAGE_MIN),
                FieldError::new(
                    IssueCode::TooSmall,
                    "Message must be at least 10 characters",
                    "message",
                ),
            )
        });

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
                Ok(Self {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(errors),
        }
    }

    pub(crate) fn into_record(self, id: Id, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

fn check(errors: &mut ValidationErrors, ok: bool, error: FieldError) -> bool {
    if !ok {
        errors.push(error);
    }
    ok
}
