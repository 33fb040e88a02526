use dioxus::prelude::*;
use shared_types::{
    ApplicationResponse, ApplicationSearchParams, EmployeeDashboard, EmployeeProfile, JobResponse,
    PaginatedResponse, PaginationParams, SavedToggle, SubmitApplicationRequest,
    UpdateEmployeeProfileRequest,
};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

#[cfg(feature = "server")]
use shared_types::UserRole;

/// Whether the signed-in employee has applied to / saved a job. Drives the
/// apply and save buttons on the job detail page.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JobViewerState {
    pub applied: bool,
    pub saved: bool,
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employee_dashboard() -> Result<EmployeeDashboard, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    crate::repo::stats::employee_dashboard(get_db().await, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employee_list_applications(
    params: ApplicationSearchParams,
) -> Result<PaginatedResponse<ApplicationResponse>, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    crate::rest::employee::applications_page(get_db().await, claims.sub, &params)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn employee_apply(req: SubmitApplicationRequest) -> Result<ApplicationResponse, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    let application = crate::rest::employee::apply_to_job(get_db().await, claims.sub, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(application.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employee_withdraw_application(id: String) -> Result<(), ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    let id = crate::rest::parse_id(&id, "Application").map_err(|e| e.into_server_fn_error())?;
    crate::rest::employee::withdraw(get_db().await, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employee_saved_jobs(
    params: PaginationParams,
) -> Result<PaginatedResponse<JobResponse>, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    crate::rest::employee::saved_jobs_page(get_db().await, claims.sub, &params)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employee_toggle_saved_job(job_id: String) -> Result<SavedToggle, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    let job_id = crate::rest::parse_id(&job_id, "Job").map_err(|e| e.into_server_fn_error())?;
    let saved = crate::repo::saved_job::toggle(get_db().await, claims.sub, job_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(SavedToggle { saved })
}

/// Applied/saved flags for the job detail page. Visitors and other roles
/// get both false.
#[server]
pub async fn employee_job_state(job_id: String) -> Result<JobViewerState, ServerFnError> {
    use crate::repo;

    let Some(claims) = current_claims() else {
        return Ok(JobViewerState::default());
    };
    if claims.user_role() != UserRole::Employee {
        return Ok(JobViewerState::default());
    }
    let Ok(job_id) = uuid::Uuid::parse_str(job_id.trim()) else {
        return Ok(JobViewerState::default());
    };

    let pool = get_db().await;
    let (applied, saved) = tokio::try_join!(
        repo::application::has_applied(pool, job_id, claims.sub),
        repo::saved_job::is_saved(pool, claims.sub, job_id),
    )
    .map_err(|e| e.into_server_fn_error())?;
    Ok(JobViewerState { applied, saved })
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn employee_get_profile() -> Result<EmployeeProfile, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    crate::rest::employee::profile(get_db().await, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn employee_update_profile(
    req: UpdateEmployeeProfileRequest,
) -> Result<EmployeeProfile, ServerFnError> {
    let claims = require_role(UserRole::Employee)?;
    crate::rest::employee::save_profile(get_db().await, claims.sub, &req)
        .await
        .map_err(|e| e.into_server_fn_error())
}
