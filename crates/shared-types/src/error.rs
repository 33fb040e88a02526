use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::i18n::{t, Lang, Msg};

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    DatabaseError,
    Unauthorized,
    Forbidden,
    RateLimited,
    InternalError,
}

impl AppErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::DatabaseError => "DatabaseError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::RateLimited => "RateLimited",
            AppErrorKind::InternalError => "InternalError",
        }
    }

    /// Kinds whose server text is not meant for end users; the client shows
    /// a catalog message instead.
    fn catalog_message(&self) -> Option<Msg> {
        match self {
            AppErrorKind::RateLimited => Some(Msg::TooManyRequests),
            AppErrorKind::DatabaseError | AppErrorKind::InternalError => {
                Some(Msg::SomethingWentWrong)
            }
            _ => None,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured application error shared by the REST layer, server functions
/// and the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::RateLimited, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation error carrying a single field message.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::DatabaseError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"Unauthorized",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Per-field validation errors embedded in a `ServerFnError.to_string()`.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// User-facing message for a `ServerFnError.to_string()` in `lang`.
    ///
    /// Server text is shown for client mistakes (validation, conflicts,
    /// permissions). Throttling, storage failures and payloads that are not
    /// an `AppError` at all get a catalog message instead.
    pub fn friendly_message(lang: Lang, error_string: &str) -> String {
        match Self::from_server_error(error_string) {
            Some(err) => match err.kind.catalog_message() {
                Some(msg) => t(lang, msg).to_string(),
                None => err.message,
            },
            None => t(lang, Msg::SomethingWentWrong).to_string(),
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::DatabaseError => 500,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::RateLimited => 429,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

/// Failure body written by the REST layer: the error fields plus
/// `success: false`, so every response shares the envelope discriminator.
#[derive(Debug, Serialize)]
#[cfg_attr(not(feature = "server"), allow(dead_code))]
struct ErrorEnvelope<'a> {
    success: bool,
    #[serde(flatten)]
    error: &'a AppError,
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorEnvelope {
            success: false,
            error: &self,
        };
        (status, axum::Json(serde_json::to_value(&body).unwrap_or_default())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"Unauthorized","message":"Invalid token"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid token");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Job not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Job not found");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_extracts_message_field() {
        let json = r#"{"kind":"Forbidden","message":"Employer role required"}"#;
        assert_eq!(AppError::friendly_message(Lang::Ar, json), "Employer role required");
    }

    #[test]
    fn friendly_message_hides_internal_details() {
        let json = r#"{"kind":"DatabaseError","message":"relation \"jobs\" does not exist"}"#;
        assert_eq!(
            AppError::friendly_message(Lang::En, json),
            t(Lang::En, Msg::SomethingWentWrong)
        );
        let throttled = r#"{"kind":"RateLimited","message":"Too many requests"}"#;
        assert_eq!(
            AppError::friendly_message(Lang::Ar, throttled),
            t(Lang::Ar, Msg::TooManyRequests)
        );
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message(Lang::Ar, "garbage input"),
            t(Lang::Ar, Msg::SomethingWentWrong)
        );
    }

    #[test]
    fn field_error_carries_single_entry() {
        let err = AppError::field("reason", "A decline reason is required");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("reason").map(String::as_str),
            Some("A decline reason is required")
        );
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(AppError::not_found("").status_code_u16(), 404);
        assert_eq!(AppError::bad_request("").status_code_u16(), 400);
        assert_eq!(
            AppError::validation("", HashMap::new()).status_code_u16(),
            422
        );
        assert_eq!(AppError::conflict("").status_code_u16(), 409);
        assert_eq!(AppError::database("").status_code_u16(), 500);
        assert_eq!(AppError::unauthorized("").status_code_u16(), 401);
        assert_eq!(AppError::forbidden("").status_code_u16(), 403);
        assert_eq!(AppError::rate_limited("").status_code_u16(), 429);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn error_envelope_flattens_fields() {
        let err = AppError::conflict("Already applied");
        let body = serde_json::to_value(ErrorEnvelope {
            success: false,
            error: &err,
        })
        .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["kind"], "Conflict");
        assert_eq!(body["message"], "Already applied");
        assert!(body.get("field_errors").is_none());
    }
}
