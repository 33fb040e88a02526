//! Framework-free view state shared by the dashboards.
//!
//! Everything here is plain data so the loading/empty/error branching, the
//! decline modal and the role-gated action sets are unit tested without a
//! renderer.

use std::fmt::Display;

use crate::application::ApplicationStatus;
use crate::job::{DeclineJobRequest, JobStatus};
use crate::i18n::Lang;
use crate::models::UserRole;
use crate::AppError;

/// What a data view should render.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// Fetch failed; carries a user-facing message.
    Failed(String),
    /// Fetch succeeded with nothing to show.
    Empty,
    Ready(T),
}

impl<T: Clone> LoadState<T> {
    /// Classify a resource value: `None` is still loading, errors become
    /// `Failed`, and `is_empty` decides between `Empty` and `Ready`.
    pub fn from_fetch<E: Display>(
        lang: Lang,
        value: Option<&Result<T, E>>,
        is_empty: impl Fn(&T) -> bool,
    ) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Err(e)) => LoadState::Failed(AppError::friendly_message(lang, &e.to_string())),
            Some(Ok(data)) if is_empty(data) => LoadState::Empty,
            Some(Ok(data)) => LoadState::Ready(data.clone()),
        }
    }
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// State of the admin "decline job" modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclineDialog {
    job_id: Option<String>,
    pub reason: String,
    attempted: bool,
}

impl DeclineDialog {
    pub fn open(&mut self, job_id: impl Into<String>) {
        self.job_id = Some(job_id.into());
        self.reason.clear();
        self.attempted = false;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.job_id.is_some()
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    /// The reason hint only shows after a submit attempt with a blank reason.
    pub fn show_reason_error(&self) -> bool {
        self.attempted && self.reason.trim().is_empty()
    }

    /// Produce the decline call for the selected job, or the validation error
    /// that keeps the modal open.
    pub fn submit(&mut self) -> Result<(String, DeclineJobRequest), AppError> {
        self.attempted = true;
        let job_id = self
            .job_id
            .clone()
            .ok_or_else(|| AppError::bad_request("No job selected"))?;
        let request = DeclineJobRequest {
            reason: self.reason.clone(),
        };
        let reason = request.validated_reason()?;
        Ok((job_id, DeclineJobRequest { reason }))
    }
}

/// Buttons offered on an application row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationAction {
    /// Employer moves the application to this status.
    Advance(ApplicationStatus),
    /// Applicant pulls the application.
    Withdraw,
}

impl ApplicationAction {
    /// Actions available to `viewer` on an application in `status`.
    /// Employers (and admins) get the pipeline moves; employees only withdraw.
    pub fn for_viewer(viewer: UserRole, status: ApplicationStatus) -> Vec<ApplicationAction> {
        match viewer {
            UserRole::Employer | UserRole::Admin => status
                .next_statuses()
                .into_iter()
                .map(ApplicationAction::Advance)
                .collect(),
            UserRole::Employee if status.is_withdrawable() => vec![ApplicationAction::Withdraw],
            UserRole::Employee | UserRole::Public => Vec::new(),
        }
    }
}

/// Buttons offered on a job row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Approve,
    Decline,
    Close,
    Edit,
    Submit,
    Delete,
}

impl JobAction {
    /// Admins moderate; owning employers edit, submit, close and delete.
    pub fn for_viewer(viewer: UserRole, status: JobStatus) -> Vec<JobAction> {
        use JobAction::*;
        match (viewer, status) {
            (UserRole::Admin, JobStatus::Pending) => vec![Approve, Decline],
            (UserRole::Admin, JobStatus::Active) => vec![Close],
            (UserRole::Employer, JobStatus::Draft) => vec![Edit, Submit, Delete],
            (UserRole::Employer, JobStatus::Pending) => vec![Edit],
            (UserRole::Employer, JobStatus::Declined) => vec![Edit, Submit, Delete],
            (UserRole::Employer, JobStatus::Active) => vec![Close],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{t, Msg};

    #[test]
    fn load_state_classifies_fetch_results() {
        let loading: LoadState<Vec<i32>> = LoadState::from_fetch::<String>(Lang::En, None, Vec::is_empty);
        assert_eq!(loading, LoadState::Loading);

        let failed = LoadState::from_fetch(
            Lang::En,
            Some(&Err::<Vec<i32>, _>(
                r#"error running server function: {"kind":"NotFound","message":"Job not found"}"#,
            )),
            Vec::is_empty,
        );
        assert_eq!(failed, LoadState::Failed("Job not found".to_string()));

        let empty = LoadState::from_fetch(Lang::En, Some(&Ok::<_, String>(Vec::<i32>::new())), Vec::is_empty);
        assert_eq!(empty, LoadState::Empty);

        let ready = LoadState::from_fetch(Lang::En, Some(&Ok::<_, String>(vec![1, 2])), Vec::is_empty);
        assert_eq!(ready.ready(), Some(&vec![1, 2]));
    }

    #[test]
    fn emptied_last_page_stays_ready_and_points_back() {
        use crate::common::PaginatedResponse;

        let past_end: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 3, 10, 20);
        let state = LoadState::from_fetch(
            Lang::En,
            Some(&Ok::<_, String>(past_end)),
            PaginatedResponse::is_empty,
        );
        let found = state.ready().expect("rows remain on earlier pages");
        assert_eq!(found.overshoot(), Some(2));
    }

    #[test]
    fn unparseable_failure_gets_generic_message() {
        let failed: LoadState<Vec<i32>> =
            LoadState::from_fetch(Lang::Ar, Some(&Err("socket closed")), Vec::is_empty);
        assert_eq!(
            failed,
            LoadState::Failed(t(Lang::Ar, Msg::SomethingWentWrong).to_string())
        );
    }

    #[test]
    fn decline_dialog_requires_reason() {
        let mut dialog = DeclineDialog::default();
        assert!(dialog.submit().is_err());

        dialog.open("job-1");
        assert!(dialog.is_open());
        assert!(!dialog.show_reason_error());

        assert!(dialog.submit().is_err());
        assert!(dialog.show_reason_error());
        assert!(dialog.is_open());

        dialog.set_reason("  Missing salary range ");
        assert!(!dialog.show_reason_error());
        let (job_id, req) = dialog.submit().unwrap();
        assert_eq!(job_id, "job-1");
        assert_eq!(req.reason, "Missing salary range");
    }

    #[test]
    fn reopening_dialog_clears_previous_state() {
        let mut dialog = DeclineDialog::default();
        dialog.open("a");
        dialog.set_reason("old");
        let _ = dialog.submit();
        dialog.open("b");
        assert_eq!(dialog.job_id(), Some("b"));
        assert!(dialog.reason.is_empty());
        assert!(!dialog.show_reason_error());

        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn submit_without_selection_fails() {
        let mut dialog = DeclineDialog::default();
        dialog.set_reason("anything");
        assert!(dialog.submit().is_err());
    }

    #[test]
    fn only_employers_get_pipeline_actions() {
        let employer = ApplicationAction::for_viewer(UserRole::Employer, ApplicationStatus::Interview);
        assert_eq!(
            employer,
            vec![
                ApplicationAction::Advance(ApplicationStatus::Accepted),
                ApplicationAction::Advance(ApplicationStatus::Rejected),
            ]
        );

        let employee = ApplicationAction::for_viewer(UserRole::Employee, ApplicationStatus::Pending);
        assert_eq!(employee, vec![ApplicationAction::Withdraw]);
        assert!(ApplicationAction::for_viewer(UserRole::Employee, ApplicationStatus::Interview).is_empty());
        assert!(ApplicationAction::for_viewer(UserRole::Public, ApplicationStatus::Pending).is_empty());
    }

    #[test]
    fn job_actions_follow_role_and_status() {
        assert_eq!(
            JobAction::for_viewer(UserRole::Admin, JobStatus::Pending),
            vec![JobAction::Approve, JobAction::Decline]
        );
        assert!(JobAction::for_viewer(UserRole::Employer, JobStatus::Pending)
            .iter()
            .all(|a| *a != JobAction::Approve));
        assert_eq!(
            JobAction::for_viewer(UserRole::Employer, JobStatus::Declined),
            vec![JobAction::Edit, JobAction::Submit, JobAction::Delete]
        );
        assert!(JobAction::for_viewer(UserRole::Employee, JobStatus::Active).is_empty());
        assert!(JobAction::for_viewer(UserRole::Admin, JobStatus::Closed).is_empty());
    }
}
