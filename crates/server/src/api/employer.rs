use dioxus::prelude::*;
use shared_types::{
    ApplicationResponse, ApplicationSearchParams, ApplicationStatus, CandidateResponse,
    CompanyProfile, CreateJobRequest, EmployerDashboard, JobResponse, JobSearchParams,
    PaginatedResponse, UpdateCompanyProfileRequest, UpdateJobRequest,
};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

#[cfg(feature = "server")]
use shared_types::UserRole;

#[cfg(feature = "server")]
fn parse_id(raw: &str, what: &str) -> Result<uuid::Uuid, ServerFnError> {
    crate::rest::parse_id(raw, what).map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_dashboard() -> Result<EmployerDashboard, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    crate::repo::stats::employer_dashboard(get_db().await, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_list_jobs(
    params: JobSearchParams,
) -> Result<PaginatedResponse<JobResponse>, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    crate::rest::jobs::search_page(get_db().await, &params, None, Some(claims.sub))
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_get_job(id: String) -> Result<JobResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&id, "Job")?;
    let job = crate::rest::employer::owned(get_db().await, id, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn employer_create_job(req: CreateJobRequest) -> Result<JobResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let job = crate::rest::employer::create(get_db().await, claims.sub, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn employer_update_job(
    id: String,
    req: UpdateJobRequest,
) -> Result<JobResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&id, "Job")?;
    let job = crate::rest::employer::update(get_db().await, claims.sub, id, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_delete_job(id: String) -> Result<(), ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&id, "Job")?;
    crate::rest::employer::remove(get_db().await, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_submit_job(id: String) -> Result<JobResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&id, "Job")?;
    let job = crate::rest::employer::submit(get_db().await, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_close_job(id: String) -> Result<JobResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&id, "Job")?;
    let job = crate::rest::employer::close(get_db().await, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_list_applications(
    params: ApplicationSearchParams,
) -> Result<PaginatedResponse<ApplicationResponse>, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    crate::rest::employer::applications_page(get_db().await, claims.sub, &params)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_get_candidate(application_id: String) -> Result<CandidateResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&application_id, "Application")?;
    crate::rest::employer::candidate(get_db().await, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(note)))]
#[server]
pub async fn employer_update_application_status(
    application_id: String,
    status: ApplicationStatus,
    note: Option<String>,
) -> Result<ApplicationResponse, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    let id = parse_id(&application_id, "Application")?;
    let application =
        crate::repo::application::advance(get_db().await, id, claims.sub, status, note.as_deref())
            .await
            .map_err(|e| e.into_server_fn_error())?;
    Ok(application.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employer_get_company() -> Result<CompanyProfile, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    crate::rest::employer::company(get_db().await, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn employer_update_company(
    req: UpdateCompanyProfileRequest,
) -> Result<CompanyProfile, ServerFnError> {
    let claims = require_role(UserRole::Employer)?;
    crate::rest::employer::save_company(get_db().await, claims.sub, &req)
        .await
        .map_err(|e| e.into_server_fn_error())
}
