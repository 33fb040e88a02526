use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Lang;
use crate::AppError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Moderation lifecycle of a job listing.
///
/// ```text
/// draft ──submit──▶ pending ──approve──▶ active ──close──▶ closed
///                     │  ▲
///              decline│  │resubmit
///                     ▼  │
///                   declined
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Draft,
    Pending,
    Active,
    Declined,
    Closed,
}

pub const JOB_STATUSES: &[JobStatus] = &[
    JobStatus::Draft,
    JobStatus::Pending,
    JobStatus::Active,
    JobStatus::Declined,
    JobStatus::Closed,
];

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Pending => "pending",
            JobStatus::Active => "active",
            JobStatus::Declined => "declined",
            JobStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(JobStatus::Draft),
            "pending" => Some(JobStatus::Pending),
            "active" => Some(JobStatus::Active),
            "declined" => Some(JobStatus::Declined),
            "closed" => Some(JobStatus::Closed),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        use JobStatus::*;
        matches!(
            (self, next),
            (Draft, Pending)
                | (Pending, Active)
                | (Pending, Declined)
                | (Declined, Pending)
                | (Active, Closed)
        )
    }

    /// Validate a move to `next`, returning a conflict error when the
    /// lifecycle does not allow it.
    pub fn transition(self, next: JobStatus) -> Result<JobStatus, AppError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::conflict(format!(
                "Cannot move a {} job to {}",
                self.as_str(),
                next.as_str()
            )))
        }
    }

    /// Employers may edit listings that are not live or finished.
    pub fn is_editable(&self) -> bool {
        matches!(self, JobStatus::Draft | JobStatus::Pending | JobStatus::Declined)
    }

    /// Only listings that never went live can be deleted.
    pub fn is_deletable(&self) -> bool {
        matches!(self, JobStatus::Draft | JobStatus::Declined)
    }

    /// Whether the listing is visible on the public site and accepts applications.
    pub fn is_public(&self) -> bool {
        matches!(self, JobStatus::Active)
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (JobStatus::Draft, Lang::En) => "Draft",
            (JobStatus::Draft, Lang::Ar) => "مسودة",
            (JobStatus::Pending, Lang::En) => "Pending",
            (JobStatus::Pending, Lang::Ar) => "قيد المراجعة",
            (JobStatus::Active, Lang::En) => "Active",
            (JobStatus::Active, Lang::Ar) => "نشطة",
            (JobStatus::Declined, Lang::En) => "Declined",
            (JobStatus::Declined, Lang::Ar) => "مرفوضة",
            (JobStatus::Closed, Lang::En) => "Closed",
            (JobStatus::Closed, Lang::Ar) => "مغلقة",
        }
    }
}

// ---------------------------------------------------------------------------
// Job type and categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

pub const JOB_TYPES: &[JobType] = &[
    JobType::FullTime,
    JobType::PartTime,
    JobType::Contract,
    JobType::Internship,
    JobType::Temporary,
];

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full_time",
            JobType::PartTime => "part_time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Temporary => "temporary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "full_time" => Some(JobType::FullTime),
            "part_time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "internship" => Some(JobType::Internship),
            "temporary" => Some(JobType::Temporary),
            _ => None,
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (JobType::FullTime, Lang::En) => "Full time",
            (JobType::FullTime, Lang::Ar) => "دوام كامل",
            (JobType::PartTime, Lang::En) => "Part time",
            (JobType::PartTime, Lang::Ar) => "دوام جزئي",
            (JobType::Contract, Lang::En) => "Contract",
            (JobType::Contract, Lang::Ar) => "عقد",
            (JobType::Internship, Lang::En) => "Internship",
            (JobType::Internship, Lang::Ar) => "تدريب",
            (JobType::Temporary, Lang::En) => "Temporary",
            (JobType::Temporary, Lang::Ar) => "مؤقت",
        }
    }
}

/// Category slug with its English and Arabic labels.
pub const JOB_CATEGORIES: &[(&str, &str, &str)] = &[
    ("technology", "Technology", "التقنية"),
    ("engineering", "Engineering", "الهندسة"),
    ("healthcare", "Healthcare", "الرعاية الصحية"),
    ("education", "Education", "التعليم"),
    ("finance", "Finance", "المالية"),
    ("sales", "Sales", "المبيعات"),
    ("marketing", "Marketing", "التسويق"),
    ("hospitality", "Hospitality", "الضيافة"),
    ("construction", "Construction", "البناء"),
    ("logistics", "Logistics", "الخدمات اللوجستية"),
    ("administration", "Administration", "الإدارة"),
    ("other", "Other", "أخرى"),
];

pub fn is_valid_category(slug: &str) -> bool {
    JOB_CATEGORIES.iter().any(|(s, _, _)| *s == slug)
}

/// Localized label for a category slug; unknown slugs are shown as-is.
pub fn category_label(slug: &str, lang: Lang) -> String {
    JOB_CATEGORIES
        .iter()
        .find(|(s, _, _)| *s == slug)
        .map(|(_, en, ar)| match lang {
            Lang::En => en.to_string(),
            Lang::Ar => ar.to_string(),
        })
        .unwrap_or_else(|| slug.to_string())
}

/// A category as served to dropdowns, labelled in the request language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryOption {
    pub slug: String,
    pub label: String,
}

pub fn category_options(lang: Lang) -> Vec<CategoryOption> {
    JOB_CATEGORIES
        .iter()
        .map(|(slug, _, _)| CategoryOption {
            slug: slug.to_string(),
            label: category_label(slug, lang),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Database Row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Job {
    pub id: Uuid,
    pub employer_id: i64,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: String,
    pub description_ar: Option<String>,
    pub company_name: String,
    pub location: String,
    pub category: String,
    pub job_type: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub currency: String,
    pub is_remote: bool,
    pub status: String,
    pub decline_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn status(&self) -> JobStatus {
        JobStatus::parse(&self.status).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// API Response
// ---------------------------------------------------------------------------

/// The one job shape every view consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JobResponse {
    pub id: String,
    pub employer_id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    pub company_name: String,
    pub location: String,
    pub category: String,
    pub job_type: JobType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
    pub currency: String,
    #[serde(default)]
    pub is_remote: bool,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(j: Job) -> Self {
        let status = j.status();
        Self {
            id: j.id.to_string(),
            employer_id: j.employer_id,
            title: j.title,
            title_ar: j.title_ar,
            description: j.description,
            description_ar: j.description_ar,
            company_name: j.company_name,
            location: j.location,
            category: j.category,
            job_type: JobType::parse(&j.job_type).unwrap_or_default(),
            salary_min: j.salary_min,
            salary_max: j.salary_max,
            currency: j.currency,
            is_remote: j.is_remote,
            status,
            decline_reason: j.decline_reason,
            created_at: j.created_at.to_rfc3339(),
            updated_at: j.updated_at.to_rfc3339(),
            approved_at: j.approved_at.map(|d| d.to_rfc3339()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl JobResponse {
    /// Title in `lang`, falling back to English when no Arabic title exists.
    pub fn localized_title(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => non_blank(&self.title_ar).unwrap_or(&self.title),
            Lang::En => &self.title,
        }
    }

    pub fn localized_description(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => non_blank(&self.description_ar).unwrap_or(&self.description),
            Lang::En => &self.description,
        }
    }

    /// Human salary range such as `5000 – 8000 SAR`, or None when unpublished.
    pub fn salary_label(&self) -> Option<String> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) if min == max => Some(format!("{min} {}", self.currency)),
            (Some(min), Some(max)) => Some(format!("{min} – {max} {}", self.currency)),
            (Some(min), None) => Some(format!("{min}+ {}", self.currency)),
            (None, Some(max)) => Some(format!("≤ {max} {}", self.currency)),
            (None, None) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn default_currency() -> String {
    "SAR".to_string()
}

/// Body for creating a job, and (as `UpdateJobRequest`) for replacing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateJobRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 150, message = "Title must be 3 to 150 characters"))
    )]
    pub title: String,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 20, message = "Description must be at least 20 characters"))
    )]
    pub description: String,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Location is required"))
    )]
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Salary cannot be negative"))
    )]
    pub salary_min: Option<i64>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Salary cannot be negative"))
    )]
    pub salary_max: Option<i64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub is_remote: bool,
    /// Send straight to moderation instead of saving a draft.
    #[serde(default)]
    pub submit_for_review: bool,
}

pub type UpdateJobRequest = CreateJobRequest;

impl CreateJobRequest {
    /// Cross-field rules the derive cannot express.
    pub fn check_rules(&self) -> Result<(), AppError> {
        if !is_valid_category(&self.category) {
            return Err(AppError::field("category", "Unknown job category"));
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(AppError::field(
                    "salary_max",
                    "Maximum salary must not be below the minimum",
                ));
            }
        }
        if self.currency.trim().len() != 3 {
            return Err(AppError::field("currency", "Use a 3-letter currency code"));
        }
        Ok(())
    }

    /// Status a freshly created job starts in.
    pub fn initial_status(&self) -> JobStatus {
        if self.submit_for_review {
            JobStatus::Pending
        } else {
            JobStatus::Draft
        }
    }
}

/// Admin decline body. The reason is shown to the employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeclineJobRequest {
    pub reason: String,
}

pub const MAX_DECLINE_REASON_LEN: usize = 1000;

impl DeclineJobRequest {
    /// Trimmed reason, rejecting blank or oversized input.
    pub fn validated_reason(&self) -> Result<String, AppError> {
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(AppError::bad_request("A decline reason is required"));
        }
        if reason.chars().count() > MAX_DECLINE_REASON_LEN {
            return Err(AppError::bad_request(format!(
                "Decline reason must be at most {MAX_DECLINE_REASON_LEN} characters"
            )));
        }
        Ok(reason.to_string())
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Query parameters for job listings. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct JobSearchParams {
    pub q: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub status: Option<String>,
    pub remote: Option<bool>,
    /// Jobs of one employer. Callers that pin an owner override it.
    pub employer_id: Option<i64>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl JobSearchParams {
    /// Copy with trimmed values and blank filters dropped.
    pub fn cleaned(&self) -> Self {
        Self {
            q: clean(&self.q),
            location: clean(&self.location),
            category: clean(&self.category),
            job_type: clean(&self.job_type),
            status: clean(&self.status),
            remote: self.remote,
            employer_id: self.employer_id,
            page: self.page,
            limit: self.limit,
        }
    }

    /// URL query (without `?`) carrying only the set filters, in a stable
    /// order, so every filter change maps to exactly one refetch URL.
    pub fn to_query_string(&self) -> String {
        let p = self.cleaned();
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(v) = p.q {
            pairs.push(("q", v));
        }
        if let Some(v) = p.location {
            pairs.push(("location", v));
        }
        if let Some(v) = p.category {
            pairs.push(("category", v));
        }
        if let Some(v) = p.job_type {
            pairs.push(("job_type", v));
        }
        if let Some(v) = p.status {
            pairs.push(("status", v));
        }
        if let Some(v) = p.remote {
            pairs.push(("remote", v.to_string()));
        }
        if let Some(v) = p.employer_id {
            pairs.push(("employer_id", v.to_string()));
        }
        if let Some(v) = p.page {
            pairs.push(("page", v.to_string()));
        }
        if let Some(v) = p.limit {
            pairs.push(("limit", v.to_string()));
        }
        pairs
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Reject filter values outside the known vocabularies.
    pub fn check(&self) -> Result<(), AppError> {
        let p = self.cleaned();
        if let Some(status) = p.status.as_deref() {
            if JobStatus::parse(status).is_none() {
                return Err(AppError::bad_request(format!("Unknown job status: {status}")));
            }
        }
        if let Some(job_type) = p.job_type.as_deref() {
            if JobType::parse(job_type).is_none() {
                return Err(AppError::bad_request(format!("Unknown job type: {job_type}")));
            }
        }
        Ok(())
    }
}

/// In-memory filter over an already-fetched list of jobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub term: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

impl JobFilter {
    /// Case-insensitive substring match of the term over the titles,
    /// company and location; equality on every dropdown selection.
    pub fn matches(&self, job: &JobResponse) -> bool {
        let term = self.term.trim().to_lowercase();
        if !term.is_empty() {
            let haystacks = [
                Some(job.title.as_str()),
                job.title_ar.as_deref(),
                Some(job.company_name.as_str()),
                Some(job.location.as_str()),
            ];
            let hit = haystacks
                .iter()
                .flatten()
                .any(|h| h.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(location) = self.location.as_deref() {
            if !job.location.eq_ignore_ascii_case(location) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if job.category != category {
                return false;
            }
        }
        if let Some(job_type) = self.job_type {
            if job.job_type != job_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if job.status != status {
                return false;
            }
        }
        true
    }
}

pub fn filter_jobs(jobs: &[JobResponse], filter: &JobFilter) -> Vec<JobResponse> {
    jobs.iter().filter(|j| filter.matches(j)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(title: &str, company: &str, location: &str, category: &str) -> JobResponse {
        JobResponse {
            id: Uuid::new_v4().to_string(),
            employer_id: 1,
            title: title.to_string(),
            title_ar: None,
            description: "A description long enough".to_string(),
            description_ar: None,
            company_name: company.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            job_type: JobType::FullTime,
            salary_min: None,
            salary_max: None,
            currency: "SAR".to_string(),
            is_remote: false,
            status: JobStatus::Active,
            decline_reason: None,
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            updated_at: "2026-01-01T00:00:00+00:00".to_string(),
            approved_at: None,
        }
    }

    fn create_request() -> CreateJobRequest {
        CreateJobRequest {
            title: "Backend Engineer".into(),
            title_ar: None,
            description: "Build and run the job board services.".into(),
            description_ar: None,
            location: "Riyadh".into(),
            category: "technology".into(),
            job_type: JobType::FullTime,
            salary_min: Some(9000),
            salary_max: Some(14000),
            currency: "SAR".into(),
            is_remote: false,
            submit_for_review: false,
        }
    }

    #[test]
    fn lifecycle_allows_only_documented_moves() {
        use JobStatus::*;
        assert!(Draft.can_transition_to(Pending));
        assert!(Pending.can_transition_to(Active));
        assert!(Pending.can_transition_to(Declined));
        assert!(Declined.can_transition_to(Pending));
        assert!(Active.can_transition_to(Closed));

        assert!(!Active.can_transition_to(Pending));
        assert!(!Draft.can_transition_to(Active));
        assert!(!Declined.can_transition_to(Active));
        for next in JOB_STATUSES {
            assert!(!Closed.can_transition_to(*next));
        }
    }

    #[test]
    fn transition_reports_conflict() {
        let err = JobStatus::Active.transition(JobStatus::Declined).unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::Conflict);
        assert_eq!(
            JobStatus::Pending.transition(JobStatus::Active).unwrap(),
            JobStatus::Active
        );
    }

    #[test]
    fn editable_and_deletable_sets() {
        assert!(JobStatus::Declined.is_editable());
        assert!(!JobStatus::Active.is_editable());
        assert!(JobStatus::Draft.is_deletable());
        assert!(!JobStatus::Pending.is_deletable());
    }

    #[test]
    fn localized_title_falls_back_to_english() {
        let mut j = job("Nurse", "Clinic", "Jeddah", "healthcare");
        assert_eq!(j.localized_title(Lang::Ar), "Nurse");
        j.title_ar = Some("  ".into());
        assert_eq!(j.localized_title(Lang::Ar), "Nurse");
        j.title_ar = Some("ممرض".into());
        assert_eq!(j.localized_title(Lang::Ar), "ممرض");
        assert_eq!(j.localized_title(Lang::En), "Nurse");
    }

    #[test]
    fn salary_label_formats_ranges() {
        let mut j = job("Nurse", "Clinic", "Jeddah", "healthcare");
        assert_eq!(j.salary_label(), None);
        j.salary_min = Some(5000);
        j.salary_max = Some(8000);
        assert_eq!(j.salary_label().as_deref(), Some("5000 – 8000 SAR"));
        j.salary_max = None;
        assert_eq!(j.salary_label().as_deref(), Some("5000+ SAR"));
    }

    #[test]
    fn create_request_rules() {
        assert!(create_request().check_rules().is_ok());

        let mut inverted = create_request();
        inverted.salary_min = Some(20000);
        let err = inverted.check_rules().unwrap_err();
        assert!(err.field_errors.contains_key("salary_max"));

        let mut unknown = create_request();
        unknown.category = "astrology".into();
        assert!(unknown.check_rules().unwrap_err().field_errors.contains_key("category"));
    }

    #[test]
    fn initial_status_follows_submit_flag() {
        let mut req = create_request();
        assert_eq!(req.initial_status(), JobStatus::Draft);
        req.submit_for_review = true;
        assert_eq!(req.initial_status(), JobStatus::Pending);
    }

    #[test]
    fn decline_reason_must_not_be_blank() {
        let blank = DeclineJobRequest { reason: "   ".into() };
        assert_eq!(
            blank.validated_reason().unwrap_err().kind,
            crate::AppErrorKind::BadRequest
        );
        let ok = DeclineJobRequest {
            reason: "  Salary missing ".into(),
        };
        assert_eq!(ok.validated_reason().unwrap(), "Salary missing");
    }

    #[test]
    fn query_string_contains_only_set_filters_in_order() {
        let params = JobSearchParams {
            q: Some("data engineer".into()),
            location: Some("  ".into()),
            category: Some("technology".into()),
            employer_id: Some(7),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            params.to_query_string(),
            "q=data%20engineer&category=technology&employer_id=7&page=2"
        );
        assert_eq!(JobSearchParams::default().to_query_string(), "");
    }

    #[test]
    fn search_params_reject_unknown_vocabulary() {
        let params = JobSearchParams {
            status: Some("archived".into()),
            ..Default::default()
        };
        assert!(params.check().is_err());
        let params = JobSearchParams {
            job_type: Some("part-time".into()),
            ..Default::default()
        };
        assert!(params.check().is_ok());
    }

    #[test]
    fn filter_matches_term_case_insensitively() {
        let jobs = vec![
            job("Senior Rust Developer", "Acme", "Riyadh", "technology"),
            job("Accountant", "Ledger Co", "Dubai", "finance"),
            job("Site Engineer", "BuildIt", "riyadh", "construction"),
        ];
        let filter = JobFilter {
            term: "RUST".into(),
            ..Default::default()
        };
        let hits = filter_jobs(&jobs, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Senior Rust Developer");

        let by_location = JobFilter {
            location: Some("Riyadh".into()),
            ..Default::default()
        };
        assert_eq!(filter_jobs(&jobs, &by_location).len(), 2);
    }

    #[test]
    fn filter_combines_term_and_dropdowns() {
        let mut arabic = job("Teacher", "School", "Cairo", "education");
        arabic.title_ar = Some("معلم رياضيات".into());
        let jobs = vec![arabic, job("Teacher", "Academy", "Amman", "education")];

        let filter = JobFilter {
            term: "رياضيات".into(),
            category: Some("education".into()),
            ..Default::default()
        };
        assert_eq!(filter_jobs(&jobs, &filter).len(), 1);

        let none = JobFilter {
            term: "teacher".into(),
            status: Some(JobStatus::Closed),
            ..Default::default()
        };
        assert!(filter_jobs(&jobs, &none).is_empty());
    }

    #[test]
    fn category_labels_are_localized() {
        assert_eq!(category_label("finance", Lang::Ar), "المالية");
        assert_eq!(category_label("mystery", Lang::En), "mystery");
        assert_eq!(category_options(Lang::En).len(), JOB_CATEGORIES.len());
    }
}
