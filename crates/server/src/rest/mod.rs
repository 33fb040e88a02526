pub mod admin;
pub mod auth;
pub mod contact;
pub mod employee;
pub mod employer;
pub mod jobs;

use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use shared_types::{ApiResponse, AppError};
use uuid::Uuid;

use crate::db::AppState;
use crate::rate_limit::rate_limit_middleware;

/// Success body of every REST handler.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

pub(crate) fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}

pub(crate) fn ok_with<T>(data: T, message: &str) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok_with_message(data, message)))
}

/// Parse a UUID path segment; malformed ids read as "not found".
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::not_found(format!("{what} not found")))
}

/// The REST API. Login, registration, refresh and the contact form sit
/// behind the per-client rate limiter.
pub fn api_router(state: &AppState) -> Router<AppState> {
    let limited = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/contact", post(contact::submit_contact))
        .route_layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .merge(limited)
        // Auth
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Public jobs
        .route("/api/jobs", get(jobs::search_jobs))
        .route("/api/jobs/categories", get(jobs::list_categories))
        .route("/api/jobs/{id}", get(jobs::get_job))
        // Admin
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/admin/analytics", get(admin::analytics))
        .route("/api/admin/jobs", get(admin::list_jobs))
        .route("/api/admin/jobs/pending", get(admin::pending_jobs))
        .route("/api/admin/jobs/{id}/approve", post(admin::approve_job))
        .route("/api/admin/jobs/{id}/decline", post(admin::decline_job))
        .route("/api/admin/jobs/{id}/close", post(admin::close_job))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}/status", patch(admin::update_user_status))
        .route("/api/admin/contacts", get(admin::list_contacts))
        .route("/api/admin/contacts/{id}/status", patch(admin::update_contact_status))
        // Employer
        .route("/api/employer/dashboard", get(employer::dashboard))
        .route("/api/employer/jobs", get(employer::list_jobs).post(employer::create_job))
        .route(
            "/api/employer/jobs/{id}",
            get(employer::get_job)
                .put(employer::update_job)
                .delete(employer::delete_job),
        )
        .route("/api/employer/jobs/{id}/submit", post(employer::submit_job))
        .route("/api/employer/jobs/{id}/close", post(employer::close_job))
        .route("/api/employer/applications", get(employer::list_applications))
        .route("/api/employer/applications/{id}/candidate", get(employer::get_candidate))
        .route(
            "/api/employer/applications/{id}/status",
            patch(employer::update_application_status),
        )
        .route(
            "/api/employer/company",
            get(employer::get_company).put(employer::update_company),
        )
        // Employee
        .route("/api/employee/dashboard", get(employee::dashboard))
        .route(
            "/api/employee/applications",
            get(employee::list_applications).post(employee::apply),
        )
        .route(
            "/api/employee/applications/{id}",
            axum::routing::delete(employee::withdraw_application),
        )
        .route("/api/employee/saved-jobs", get(employee::list_saved_jobs))
        .route(
            "/api/employee/saved-jobs/{job_id}/toggle",
            post(employee::toggle_saved_job),
        )
        .route(
            "/api/employee/profile",
            get(employee::get_profile).put(employee::update_profile),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn malformed_ids_read_as_missing() {
        let err = parse_id("not-a-uuid", "Job").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Job not found");
        assert!(parse_id(" 6f1c2a9e-3d4b-4c5a-9e8f-0a1b2c3d4e5f ", "Job").is_ok());
    }
}
