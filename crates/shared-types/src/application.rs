use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Lang;
use crate::AppError;

/// Progress of an application through the employer's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    #[serde(alias = "reviewed")]
    Reviewing,
    Interview,
    Accepted,
    Rejected,
}

pub const APPLICATION_STATUSES: &[ApplicationStatus] = &[
    ApplicationStatus::Pending,
    ApplicationStatus::Reviewing,
    ApplicationStatus::Interview,
    ApplicationStatus::Accepted,
    ApplicationStatus::Rejected,
];

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status; `reviewed` is accepted as a synonym of `reviewing`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(ApplicationStatus::Pending),
            "reviewing" | "reviewed" => Some(ApplicationStatus::Reviewing),
            "interview" => Some(ApplicationStatus::Interview),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    /// Position in the pipeline; statuses only ever move forward.
    fn rank(&self) -> u8 {
        match self {
            ApplicationStatus::Pending => 0,
            ApplicationStatus::Reviewing => 1,
            ApplicationStatus::Interview => 2,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }

    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        !self.is_terminal() && next.rank() > self.rank()
    }

    pub fn transition(self, next: ApplicationStatus) -> Result<ApplicationStatus, AppError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::conflict(format!(
                "Cannot move a {} application to {}",
                self.as_str(),
                next.as_str()
            )))
        }
    }

    /// Statuses an employer can move this application to next.
    pub fn next_statuses(&self) -> Vec<ApplicationStatus> {
        APPLICATION_STATUSES
            .iter()
            .copied()
            .filter(|s| self.can_transition_to(*s))
            .collect()
    }

    /// The applicant may withdraw until an interview is scheduled.
    pub fn is_withdrawable(&self) -> bool {
        matches!(self, ApplicationStatus::Pending | ApplicationStatus::Reviewing)
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ApplicationStatus::Pending, Lang::En) => "Pending",
            (ApplicationStatus::Pending, Lang::Ar) => "قيد الانتظار",
            (ApplicationStatus::Reviewing, Lang::En) => "Under review",
            (ApplicationStatus::Reviewing, Lang::Ar) => "قيد المراجعة",
            (ApplicationStatus::Interview, Lang::En) => "Interview",
            (ApplicationStatus::Interview, Lang::Ar) => "مقابلة",
            (ApplicationStatus::Accepted, Lang::En) => "Accepted",
            (ApplicationStatus::Accepted, Lang::Ar) => "مقبول",
            (ApplicationStatus::Rejected, Lang::En) => "Rejected",
            (ApplicationStatus::Rejected, Lang::Ar) => "مرفوض",
        }
    }

    /// Label of the button that moves an application into this status.
    pub fn action_label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ApplicationStatus::Pending, Lang::En) => "Reset",
            (ApplicationStatus::Pending, Lang::Ar) => "إعادة",
            (ApplicationStatus::Reviewing, Lang::En) => "Start review",
            (ApplicationStatus::Reviewing, Lang::Ar) => "بدء المراجعة",
            (ApplicationStatus::Interview, Lang::En) => "Invite to interview",
            (ApplicationStatus::Interview, Lang::Ar) => "دعوة لمقابلة",
            (ApplicationStatus::Accepted, Lang::En) => "Accept",
            (ApplicationStatus::Accepted, Lang::Ar) => "قبول",
            (ApplicationStatus::Rejected, Lang::En) => "Reject",
            (ApplicationStatus::Rejected, Lang::Ar) => "رفض",
        }
    }
}

// ---------------------------------------------------------------------------
// Database Row
// ---------------------------------------------------------------------------

/// Application joined with its job title and applicant name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub employee_id: i64,
    pub status: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub employer_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub job_title: String,
    pub job_title_ar: Option<String>,
    pub company_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
}

impl Application {
    pub fn status(&self) -> ApplicationStatus {
        ApplicationStatus::parse(&self.status).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// API Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApplicationResponse {
    pub id: String,
    pub job_id: String,
    pub employee_id: i64,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_note: Option<String>,
    pub job_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title_ar: Option<String>,
    pub company_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Application> for ApplicationResponse {
    fn from(a: Application) -> Self {
        let status = a.status();
        Self {
            id: a.id.to_string(),
            job_id: a.job_id.to_string(),
            employee_id: a.employee_id,
            status,
            cover_letter: a.cover_letter,
            resume_url: a.resume_url,
            employer_note: a.employer_note,
            job_title: a.job_title,
            job_title_ar: a.job_title_ar,
            company_name: a.company_name,
            applicant_name: a.applicant_name,
            applicant_email: a.applicant_email,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

impl ApplicationResponse {
    pub fn localized_job_title(&self, lang: Lang) -> &str {
        match (lang, self.job_title_ar.as_deref().map(str::trim)) {
            (Lang::Ar, Some(ar)) if !ar.is_empty() => ar,
            _ => &self.job_title,
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SubmitApplicationRequest {
    pub job_id: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 5000, message = "Cover letter must be at most 5000 characters"))
    )]
    pub cover_letter: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Resume link must be a valid URL"))
    )]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct ApplicationSearchParams {
    pub status: Option<String>,
    pub job_id: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ApplicationSearchParams {
    /// Parsed `(status, job_id)` filters; blank values are ignored.
    pub fn parsed(&self) -> Result<(Option<ApplicationStatus>, Option<Uuid>), AppError> {
        let status = match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(
                ApplicationStatus::parse(s)
                    .ok_or_else(|| AppError::bad_request(format!("Unknown application status: {s}")))?,
            ),
            _ => None,
        };
        let job_id = match self.job_id.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(
                Uuid::parse_str(s).map_err(|_| AppError::bad_request("Invalid job id"))?,
            ),
            _ => None,
        };
        Ok((status, job_id))
    }
}
