use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Friendly text for a Postgres unique violation, keyed on the constraint
/// or column named in the database message.
fn unique_violation_message(detail: &str) -> &'static str {
    if detail.contains("applications_job_id_employee_id") {
        "You have already applied to this job"
    } else if detail.contains("email") {
        "An account with this email already exists"
    } else if detail.contains("saved_jobs") {
        "This job is already saved"
    } else {
        "A record with this value already exists"
    }
}

/// Convert a sqlx::Error into an AppError.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // unique_violation
            Some("23505") => {
                let detail = db_err
                    .constraint()
                    .map(str::to_string)
                    .unwrap_or_else(|| db_err.message().to_string());
                AppError::conflict(unique_violation_message(&detail))
            }
            // foreign_key_violation
            Some("23503") => AppError::not_found("Referenced record not found"),
            _ => AppError::database(err.to_string()),
        },
        _ => AppError::database(err.to_string()),
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Validate a request DTO before it reaches a repository.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn unique_messages_by_constraint() {
        assert_eq!(
            unique_violation_message("applications_job_id_employee_id_key"),
            "You have already applied to this job"
        );
        assert_eq!(
            unique_violation_message("users_email_key"),
            "An account with this email already exists"
        );
        assert_eq!(
            unique_violation_message("something_else"),
            "A record with this value already exists"
        );
    }

    #[test]
    fn row_not_found_is_404() {
        let err = sqlx_to_app_error(sqlx::Error::RowNotFound);
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn server_fn_error_carries_json_payload() {
        let err = AppError::conflict("Job is no longer pending").into_server_fn_error();
        let parsed = AppError::from_server_error(&err.to_string()).unwrap();
        assert_eq!(parsed.kind, AppErrorKind::Conflict);
        assert_eq!(parsed.message, "Job is no longer pending");
    }
}
