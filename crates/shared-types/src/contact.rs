use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

pub const CONTACT_STATUSES: &[ContactStatus] = &[
    ContactStatus::New,
    ContactStatus::Read,
    ContactStatus::Replied,
    ContactStatus::Archived,
];

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Some(ContactStatus::New),
            "read" => Some(ContactStatus::Read),
            "replied" => Some(ContactStatus::Replied),
            "archived" => Some(ContactStatus::Archived),
            _ => None,
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ContactStatus::New, Lang::En) => "New",
            (ContactStatus::New, Lang::Ar) => "جديدة",
            (ContactStatus::Read, Lang::En) => "Read",
            (ContactStatus::Read, Lang::Ar) => "مقروءة",
            (ContactStatus::Replied, Lang::En) => "Replied",
            (ContactStatus::Replied, Lang::Ar) => "تم الرد",
            (ContactStatus::Archived, Lang::En) => "Archived",
            (ContactStatus::Archived, Lang::Ar) => "مؤرشفة",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ContactMessage> for ContactResponse {
    fn from(c: ContactMessage) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            email: c.email,
            subject: c.subject,
            message: c.message,
            status: ContactStatus::parse(&c.status).unwrap_or_default(),
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

/// Public contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateContactRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 200, message = "Subject is required"))
    )]
    pub subject: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 5000, message = "Message is required"))
    )]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct ContactSearchParams {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in CONTACT_STATUSES {
            assert_eq!(ContactStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(ContactStatus::parse("spam"), None);
    }

    #[test]
    fn unknown_db_status_reads_as_new() {
        let row = ContactMessage {
            id: Uuid::new_v4(),
            name: "Sara".into(),
            email: "sara@example.com".into(),
            subject: "Listing".into(),
            message: "Is this role remote?".into(),
            status: "legacy".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(ContactResponse::from(row).status, ContactStatus::New);
    }
}
