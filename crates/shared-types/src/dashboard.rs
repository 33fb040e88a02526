use serde::{Deserialize, Serialize};

use crate::application::ApplicationResponse;
use crate::job::JobResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminDashboard {
    pub total_users: i64,
    pub total_employers: i64,
    pub total_employees: i64,
    pub total_jobs: i64,
    pub pending_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub new_contacts: i64,
    pub recent_jobs: Vec<JobResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployerDashboard {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub pending_jobs: i64,
    pub total_applications: i64,
    /// Applications still in `pending`.
    pub new_applications: i64,
    pub recent_applications: Vec<ApplicationResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeDashboard {
    pub total_applications: i64,
    pub interviews: i64,
    pub accepted: i64,
    pub saved_jobs: i64,
    pub recent_applications: Vec<ApplicationResponse>,
    pub recommended_jobs: Vec<JobResponse>,
}

/// One bar of a grouped count chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct StatusCount {
    pub key: String,
    pub count: i64,
}

/// Count for one calendar day (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct DailyCount {
    pub day: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AnalyticsData {
    pub jobs_by_status: Vec<StatusCount>,
    pub applications_by_status: Vec<StatusCount>,
    pub jobs_by_category: Vec<StatusCount>,
    pub signups_last_30_days: Vec<DailyCount>,
}

impl AnalyticsData {
    pub fn is_empty(&self) -> bool {
        self.jobs_by_status.is_empty()
            && self.applications_by_status.is_empty()
            && self.jobs_by_category.is_empty()
            && self.signups_last_30_days.is_empty()
    }
}

/// Bar width as a percentage of the largest count in `counts`.
pub fn bar_percent(count: i64, counts: &[StatusCount]) -> u32 {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    if max <= 0 || count <= 0 {
        return 0;
    }
    ((count * 100) / max).clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Vec<StatusCount> {
        vec![
            StatusCount {
                key: "active".into(),
                count: 8,
            },
            StatusCount {
                key: "pending".into(),
                count: 2,
            },
        ]
    }

    #[test]
    fn bar_percent_scales_to_largest() {
        assert_eq!(bar_percent(8, &counts()), 100);
        assert_eq!(bar_percent(2, &counts()), 25);
        assert_eq!(bar_percent(0, &counts()), 0);
        assert_eq!(bar_percent(3, &[]), 0);
    }

    #[test]
    fn default_analytics_is_empty() {
        assert!(AnalyticsData::default().is_empty());
        let data = AnalyticsData {
            jobs_by_status: counts(),
            ..Default::default()
        };
        assert!(!data.is_empty());
    }
}
