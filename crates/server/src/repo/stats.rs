use shared_types::{
    AdminDashboard, AnalyticsData, AppError, ApplicationResponse, DailyCount, EmployeeDashboard,
    EmployerDashboard, JobResponse, StatusCount,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct AdminCounts {
    pub total_users: i64,
    pub total_employers: i64,
    pub total_employees: i64,
    pub total_jobs: i64,
    pub pending_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub new_contacts: i64,
}

pub async fn admin_counts(pool: &Pool<Postgres>) -> Result<AdminCounts, AppError> {
    sqlx::query_as::<_, AdminCounts>(
        "SELECT
             (SELECT COUNT(*) FROM users) AS total_users,
             (SELECT COUNT(*) FROM users WHERE role = 'employer') AS total_employers,
             (SELECT COUNT(*) FROM users WHERE role = 'employee') AS total_employees,
             (SELECT COUNT(*) FROM jobs) AS total_jobs,
             (SELECT COUNT(*) FROM jobs WHERE status = 'pending') AS pending_jobs,
             (SELECT COUNT(*) FROM jobs WHERE status = 'active') AS active_jobs,
             (SELECT COUNT(*) FROM applications) AS total_applications,
             (SELECT COUNT(*) FROM contacts WHERE status = 'new') AS new_contacts",
    )
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct EmployerCounts {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub pending_jobs: i64,
    pub total_applications: i64,
    pub new_applications: i64,
}

pub async fn employer_counts(
    pool: &Pool<Postgres>,
    employer_id: i64,
) -> Result<EmployerCounts, AppError> {
    sqlx::query_as::<_, EmployerCounts>(
        "SELECT
             (SELECT COUNT(*) FROM jobs WHERE employer_id = $1) AS total_jobs,
             (SELECT COUNT(*) FROM jobs WHERE employer_id = $1 AND status = 'active') AS active_jobs,
             (SELECT COUNT(*) FROM jobs WHERE employer_id = $1 AND status = 'pending') AS pending_jobs,
             COUNT(a.id) AS total_applications,
             COUNT(a.id) FILTER (WHERE a.status = 'pending') AS new_applications
         FROM applications a JOIN jobs j ON j.id = a.job_id
         WHERE j.employer_id = $1",
    )
    .bind(employer_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct EmployeeCounts {
    pub total_applications: i64,
    pub interviews: i64,
    pub accepted: i64,
    pub saved_jobs: i64,
}

pub async fn employee_counts(
    pool: &Pool<Postgres>,
    employee_id: i64,
) -> Result<EmployeeCounts, AppError> {
    sqlx::query_as::<_, EmployeeCounts>(
        "SELECT
             COUNT(*) AS total_applications,
             COUNT(*) FILTER (WHERE status = 'interview') AS interviews,
             COUNT(*) FILTER (WHERE status = 'accepted') AS accepted,
             (SELECT COUNT(*) FROM saved_jobs WHERE user_id = $1) AS saved_jobs
         FROM applications
         WHERE employee_id = $1",
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// `(key, count)` pairs for a grouped column, largest first.
async fn grouped(pool: &Pool<Postgres>, sql: &str) -> Result<Vec<StatusCount>, AppError> {
    sqlx::query_as::<_, StatusCount>(sql)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn jobs_by_status(pool: &Pool<Postgres>) -> Result<Vec<StatusCount>, AppError> {
    grouped(
        pool,
        "SELECT status AS key, COUNT(*) AS count FROM jobs GROUP BY status ORDER BY count DESC, key",
    )
    .await
}

pub async fn applications_by_status(pool: &Pool<Postgres>) -> Result<Vec<StatusCount>, AppError> {
    grouped(
        pool,
        "SELECT status AS key, COUNT(*) AS count FROM applications GROUP BY status ORDER BY count DESC, key",
    )
    .await
}

pub async fn jobs_by_category(pool: &Pool<Postgres>) -> Result<Vec<StatusCount>, AppError> {
    grouped(
        pool,
        "SELECT category AS key, COUNT(*) AS count FROM jobs GROUP BY category ORDER BY count DESC, key",
    )
    .await
}

/// Sign-ups per day over the last 30 days; days without sign-ups are omitted.
pub async fn signups_last_30_days(pool: &Pool<Postgres>) -> Result<Vec<DailyCount>, AppError> {
    sqlx::query_as::<_, DailyCount>(
        "SELECT to_char(date_trunc('day', created_at), 'YYYY-MM-DD') AS day, COUNT(*) AS count
         FROM users
         WHERE created_at >= NOW() - INTERVAL '30 days'
         GROUP BY 1
         ORDER BY 1",
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Rows shown in the "recent" panels of each dashboard.
const RECENT_LIMIT: i64 = 5;

pub async fn admin_dashboard(pool: &Pool<Postgres>) -> Result<AdminDashboard, AppError> {
    let (counts, recent) = tokio::try_join!(admin_counts(pool), super::job::recent(pool, RECENT_LIMIT))?;
    Ok(AdminDashboard {
        total_users: counts.total_users,
        total_employers: counts.total_employers,
        total_employees: counts.total_employees,
        total_jobs: counts.total_jobs,
        pending_jobs: counts.pending_jobs,
        active_jobs: counts.active_jobs,
        total_applications: counts.total_applications,
        new_contacts: counts.new_contacts,
        recent_jobs: recent.into_iter().map(JobResponse::from).collect(),
    })
}

pub async fn employer_dashboard(
    pool: &Pool<Postgres>,
    employer_id: i64,
) -> Result<EmployerDashboard, AppError> {
    let (counts, (recent, _)) = tokio::try_join!(
        employer_counts(pool, employer_id),
        super::application::list_for_employer(pool, employer_id, None, None, 1, RECENT_LIMIT),
    )?;
    Ok(EmployerDashboard {
        total_jobs: counts.total_jobs,
        active_jobs: counts.active_jobs,
        pending_jobs: counts.pending_jobs,
        total_applications: counts.total_applications,
        new_applications: counts.new_applications,
        recent_applications: recent.into_iter().map(ApplicationResponse::from).collect(),
    })
}

pub async fn employee_dashboard(
    pool: &Pool<Postgres>,
    employee_id: i64,
) -> Result<EmployeeDashboard, AppError> {
    let (counts, (recent, _), recommended) = tokio::try_join!(
        employee_counts(pool, employee_id),
        super::application::list_for_employee(pool, employee_id, None, 1, RECENT_LIMIT),
        super::job::latest_active(pool, RECENT_LIMIT),
    )?;
    Ok(EmployeeDashboard {
        total_applications: counts.total_applications,
        interviews: counts.interviews,
        accepted: counts.accepted,
        saved_jobs: counts.saved_jobs,
        recent_applications: recent.into_iter().map(ApplicationResponse::from).collect(),
        recommended_jobs: recommended.into_iter().map(JobResponse::from).collect(),
    })
}

pub async fn analytics(pool: &Pool<Postgres>) -> Result<AnalyticsData, AppError> {
    let (jobs_by_status, applications_by_status, jobs_by_category, signups_last_30_days) = tokio::try_join!(
        jobs_by_status(pool),
        applications_by_status(pool),
        jobs_by_category(pool),
        signups_last_30_days(pool),
    )?;
    Ok(AnalyticsData {
        jobs_by_status,
        applications_by_status,
        jobs_by_category,
        signups_last_30_days,
    })
}
