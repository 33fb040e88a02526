//! Small display helpers shared by the pages.

use std::collections::HashMap;

use shared_types::{AppError, ApplicationStatus, ContactStatus, JobStatus, Lang};
use shared_ui::BadgeVariant;

pub fn job_status_variant(status: JobStatus) -> BadgeVariant {
    match status {
        JobStatus::Active => BadgeVariant::Success,
        JobStatus::Pending => BadgeVariant::Warning,
        JobStatus::Declined => BadgeVariant::Destructive,
        JobStatus::Closed => BadgeVariant::Secondary,
        JobStatus::Draft => BadgeVariant::Outline,
    }
}

pub fn application_status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::Pending => BadgeVariant::Warning,
        ApplicationStatus::Reviewing => BadgeVariant::Primary,
        ApplicationStatus::Interview => BadgeVariant::Primary,
        ApplicationStatus::Accepted => BadgeVariant::Success,
        ApplicationStatus::Rejected => BadgeVariant::Destructive,
    }
}

pub fn contact_status_variant(status: ContactStatus) -> BadgeVariant {
    match status {
        ContactStatus::New => BadgeVariant::Warning,
        ContactStatus::Read => BadgeVariant::Secondary,
        ContactStatus::Replied => BadgeVariant::Success,
        ContactStatus::Archived => BadgeVariant::Outline,
    }
}

/// `YYYY-MM-DD` part of an RFC 3339 timestamp.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// First `max` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// Outcome of a failed form submission: per-field messages when the server
/// reported them, otherwise one banner message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub fields: HashMap<String, String>,
    pub banner: Option<String>,
}

impl FormErrors {
    pub fn from_server(lang: Lang, error: &str) -> Self {
        let fields = AppError::parse_field_errors(error);
        let banner = if fields.is_empty() {
            Some(AppError::friendly_message(lang, error))
        } else {
            None
        };
        Self { fields, banner }
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.banner.is_none()
    }
}

/// Empty input means "not set".
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_date_keeps_the_day() {
        assert_eq!(short_date("2026-03-14T09:30:00Z"), "2026-03-14");
        assert_eq!(short_date("soon"), "soon");
    }

    #[test]
    fn excerpt_cuts_on_characters() {
        assert_eq!(excerpt("مهندس برمجيات أول", 5), "مهندس…");
        assert_eq!(excerpt("short", 10), "short");
    }

    #[test]
    fn form_errors_prefer_field_messages() {
        let raw = r#"error running server function: {"kind":"ValidationError","message":"Invalid input","field_errors":{"email":"Enter a valid email"}}"#;
        let errors = FormErrors::from_server(Lang::En, raw);
        assert_eq!(errors.field("email").as_deref(), Some("Enter a valid email"));
        assert_eq!(errors.banner, None);

        let errors = FormErrors::from_server(Lang::Ar, r#"{"kind":"Conflict","message":"Email already registered"}"#);
        assert!(errors.fields.is_empty());
        assert_eq!(errors.banner.as_deref(), Some("Email already registered"));
    }

    #[test]
    fn blank_input_is_unset() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" Riyadh "), Some("Riyadh".to_string()));
    }
}
