use shared_types::{AppError, EmployeeProfileRow, UpdateEmployeeProfileRequest};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

const PROFILE_COLUMNS: &str = "user_id, full_name, headline, location, skills, experience_years, \
     resume_url, bio, updated_at";

pub async fn find(pool: &Pool<Postgres>, user_id: i64) -> Result<Option<EmployeeProfileRow>, AppError> {
    sqlx::query_as::<_, EmployeeProfileRow>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM employee_profiles WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Create or replace the job seeker's profile.
pub async fn upsert(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: &UpdateEmployeeProfileRequest,
) -> Result<EmployeeProfileRow, AppError> {
    sqlx::query_as::<_, EmployeeProfileRow>(&format!(
        "INSERT INTO employee_profiles
             (user_id, full_name, headline, location, skills, experience_years, resume_url, bio)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         ON CONFLICT (user_id) DO UPDATE SET
             full_name = EXCLUDED.full_name,
             headline = EXCLUDED.headline,
             location = EXCLUDED.location,
             skills = EXCLUDED.skills,
             experience_years = EXCLUDED.experience_years,
             resume_url = EXCLUDED.resume_url,
             bio = EXCLUDED.bio,
             updated_at = NOW()
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(req.full_name.trim())
    .bind(req.headline.as_deref())
    .bind(req.location.as_deref())
    .bind(req.normalized_skills())
    .bind(req.experience_years)
    .bind(req.resume_url.as_deref())
    .bind(req.bio.as_deref())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
