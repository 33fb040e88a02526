use shared_types::{AppError, CompanyProfileRow, UpdateCompanyProfileRequest};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

const COMPANY_COLUMNS: &str = "user_id, name, name_ar, industry, size, website, location, \
     description, description_ar, logo_url, updated_at";

pub async fn find(pool: &Pool<Postgres>, user_id: i64) -> Result<Option<CompanyProfileRow>, AppError> {
    sqlx::query_as::<_, CompanyProfileRow>(&format!(
        "SELECT {COMPANY_COLUMNS} FROM company_profiles WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Create or replace the employer's company profile.
pub async fn upsert(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: &UpdateCompanyProfileRequest,
) -> Result<CompanyProfileRow, AppError> {
    sqlx::query_as::<_, CompanyProfileRow>(&format!(
        "INSERT INTO company_profiles
             (user_id, name, name_ar, industry, size, website, location,
              description, description_ar, logo_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT (user_id) DO UPDATE SET
             name = EXCLUDED.name,
             name_ar = EXCLUDED.name_ar,
             industry = EXCLUDED.industry,
             size = EXCLUDED.size,
             website = EXCLUDED.website,
             location = EXCLUDED.location,
             description = EXCLUDED.description,
             description_ar = EXCLUDED.description_ar,
             logo_url = EXCLUDED.logo_url,
             updated_at = NOW()
         RETURNING {COMPANY_COLUMNS}"
    ))
    .bind(user_id)
    .bind(req.name.trim())
    .bind(req.name_ar.as_deref())
    .bind(req.industry.as_deref())
    .bind(req.size.as_deref())
    .bind(req.website.as_deref())
    .bind(req.location.as_deref())
    .bind(req.description.as_deref())
    .bind(req.description_ar.as_deref())
    .bind(req.logo_url.as_deref())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
