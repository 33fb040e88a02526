use axum::Router;
use shared_types::{
    AdminDashboard, AnalyticsData, AppError, AppErrorKind, ApplicationResponse,
    ApplicationStatus, AuthResponse, AuthUser, CandidateResponse, CategoryOption,
    CompanyProfile, ContactResponse, ContactStatus, CreateContactRequest, CreateJobRequest,
    DailyCount, DeclineJobRequest, EmployeeDashboard, EmployeeProfile, EmployerDashboard,
    JobResponse, JobStatus, JobType, LoginRequest, PaginationMeta, RefreshRequest,
    RegisterRequest, SavedToggle, StatusCount, SubmitApplicationRequest,
    UpdateApplicationStatusRequest, UpdateCompanyProfileRequest, UpdateContactStatusRequest,
    UpdateEmployeeProfileRequest, UpdateUserStatusRequest, User, UserRole,
};
use sqlx::{Pool, Postgres};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// Registers the `bearer_auth` scheme the protected paths refer to.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Public
        rest::jobs::search_jobs,
        rest::jobs::get_job,
        rest::jobs::list_categories,
        rest::contact::submit_contact,
        // Auth
        rest::auth::register,
        rest::auth::login,
        rest::auth::refresh,
        rest::auth::logout,
        rest::auth::me,
        // Admin
        rest::admin::dashboard,
        rest::admin::analytics,
        rest::admin::list_jobs,
        rest::admin::pending_jobs,
        rest::admin::approve_job,
        rest::admin::decline_job,
        rest::admin::close_job,
        rest::admin::list_users,
        rest::admin::update_user_status,
        rest::admin::list_contacts,
        rest::admin::update_contact_status,
        // Employer
        rest::employer::dashboard,
        rest::employer::list_jobs,
        rest::employer::create_job,
        rest::employer::get_job,
        rest::employer::update_job,
        rest::employer::delete_job,
        rest::employer::submit_job,
        rest::employer::close_job,
        rest::employer::list_applications,
        rest::employer::get_candidate,
        rest::employer::update_application_status,
        rest::employer::get_company,
        rest::employer::update_company,
        // Employee
        rest::employee::dashboard,
        rest::employee::list_applications,
        rest::employee::apply,
        rest::employee::withdraw_application,
        rest::employee::list_saved_jobs,
        rest::employee::toggle_saved_job,
        rest::employee::get_profile,
        rest::employee::update_profile,
        // Ops
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind, PaginationMeta,
        UserRole, User, AuthUser, AuthResponse, LoginRequest, RegisterRequest, RefreshRequest,
        UpdateUserStatusRequest,
        JobStatus, JobType, JobResponse, CategoryOption, CreateJobRequest, DeclineJobRequest,
        ApplicationStatus, ApplicationResponse, SubmitApplicationRequest,
        UpdateApplicationStatusRequest, CandidateResponse, SavedToggle,
        ContactStatus, ContactResponse, CreateContactRequest, UpdateContactStatusRequest,
        CompanyProfile, UpdateCompanyProfileRequest, EmployeeProfile, UpdateEmployeeProfileRequest,
        AdminDashboard, EmployerDashboard, EmployeeDashboard, AnalyticsData, StatusCount, DailyCount,
        health::HealthResponse,
        health::HealthStatus,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "jobs", description = "Public job search"),
        (name = "contact", description = "Public contact form"),
        (name = "auth", description = "Sign-up, sign-in and token rotation"),
        (name = "admin", description = "Moderation, users, contacts and analytics"),
        (name = "employer", description = "Job postings, applicants and company profile"),
        (name = "employee", description = "Applications, saved jobs and profile"),
        (name = "health", description = "Liveness"),
    ),
    info(
        title = "Job Board API",
        description = "Bilingual (English/Arabic) job board API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState::new(pool);

    Router::new()
        .merge(rest::api_router(&state))
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_group_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/jobs",
            "/api/jobs/{id}",
            "/api/admin/jobs/{id}/decline",
            "/api/employer/applications/{id}/status",
            "/api/employee/saved-jobs/{job_id}/toggle",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
