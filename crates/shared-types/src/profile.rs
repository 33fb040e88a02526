use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct EmployeeProfileRow {
    pub user_id: i64,
    pub full_name: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<i32>,
    pub resume_url: Option<String>,
    pub bio: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Job seeker profile, shown to employers alongside applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeProfile {
    pub user_id: i64,
    pub full_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<EmployeeProfileRow> for EmployeeProfile {
    fn from(r: EmployeeProfileRow) -> Self {
        Self {
            user_id: r.user_id,
            full_name: r.full_name,
            headline: r.headline,
            location: r.location,
            skills: r.skills,
            experience_years: r.experience_years,
            resume_url: r.resume_url,
            bio: r.bio,
            updated_at: Some(r.updated_at.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct UpdateEmployeeProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Full name is required"))
    )]
    pub full_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, max = 60, message = "Experience must be between 0 and 60 years"))
    )]
    pub experience_years: Option<i32>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Resume link must be a valid URL"))
    )]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UpdateEmployeeProfileRequest {
    /// Skills trimmed, de-duplicated case-insensitively, blanks dropped.
    pub fn normalized_skills(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

impl From<&EmployeeProfile> for UpdateEmployeeProfileRequest {
    fn from(p: &EmployeeProfile) -> Self {
        Self {
            full_name: p.full_name.clone(),
            headline: p.headline.clone(),
            location: p.location.clone(),
            skills: p.skills.clone(),
            experience_years: p.experience_years,
            resume_url: p.resume_url.clone(),
            bio: p.bio.clone(),
        }
    }
}

/// Split a comma-separated skills field from a form input.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split([',', '،'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// What an employer sees about one applicant: the application plus the
/// applicant's profile, when they have filled one in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CandidateResponse {
    pub application: ApplicationResponse,
    #[serde(default)]
    pub profile: Option<EmployeeProfile>,
}
