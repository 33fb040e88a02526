use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{t, CreateJobRequest, JobResponse, JobType, LoadState, Msg};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, ErrorState, Form, FormActions,
    FormNotice, FormRow, Input, LoadingState, PageHeader, PageSubtitle, PageTitle, Textarea,
    ToastOptions,
};

use crate::components::{CategorySelect, JobStatusBadge, JobTypeSelect};
use crate::format::{non_blank, FormErrors};
use crate::i18n::use_lang;
use crate::routes::Route;

/// Text-field view of a job while it is being edited. Salaries stay raw
/// strings until submit so half-typed numbers are not rejected mid-edit.
#[derive(Debug, Clone, PartialEq)]
struct JobDraft {
    title: String,
    title_ar: String,
    description: String,
    description_ar: String,
    location: String,
    category: String,
    job_type: String,
    salary_min: String,
    salary_max: String,
    currency: String,
    is_remote: bool,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_ar: String::new(),
            description: String::new(),
            description_ar: String::new(),
            location: String::new(),
            category: String::new(),
            job_type: JobType::FullTime.as_str().to_string(),
            salary_min: String::new(),
            salary_max: String::new(),
            currency: "SAR".to_string(),
            is_remote: false,
        }
    }
}

impl From<&JobResponse> for JobDraft {
    fn from(job: &JobResponse) -> Self {
        Self {
            title: job.title.clone(),
            title_ar: job.title_ar.clone().unwrap_or_default(),
            description: job.description.clone(),
            description_ar: job.description_ar.clone().unwrap_or_default(),
            location: job.location.clone(),
            category: job.category.clone(),
            job_type: job.job_type.as_str().to_string(),
            salary_min: job.salary_min.map(|v| v.to_string()).unwrap_or_default(),
            salary_max: job.salary_max.map(|v| v.to_string()).unwrap_or_default(),
            currency: job.currency.clone(),
            is_remote: job.is_remote,
        }
    }
}

fn parse_salary(raw: &str) -> Result<Option<i64>, ()> {
    match raw.trim() {
        "" => Ok(None),
        value => value.replace(',', "").parse::<i64>().map(Some).map_err(|_| ()),
    }
}

impl JobDraft {
    /// Build the request, or the per-field errors that keep the form open.
    fn to_request(&self, submit_for_review: bool) -> Result<CreateJobRequest, FormErrors> {
        let mut fields = HashMap::new();
        if self.category.trim().is_empty() {
            fields.insert("category".to_string(), "Choose a category".to_string());
        }
        let job_type = JobType::parse(&self.job_type);
        if job_type.is_none() {
            fields.insert("job_type".to_string(), "Choose a job type".to_string());
        }
        let salary_min = parse_salary(&self.salary_min).unwrap_or_else(|_| {
            fields.insert("salary_min".to_string(), "Enter a whole number".to_string());
            None
        });
        let salary_max = parse_salary(&self.salary_max).unwrap_or_else(|_| {
            fields.insert("salary_max".to_string(), "Enter a whole number".to_string());
            None
        });
        if !fields.is_empty() {
            return Err(FormErrors { fields, banner: None });
        }

        Ok(CreateJobRequest {
            title: self.title.trim().to_string(),
            title_ar: non_blank(&self.title_ar),
            description: self.description.trim().to_string(),
            description_ar: non_blank(&self.description_ar),
            location: self.location.trim().to_string(),
            category: self.category.clone(),
            job_type: job_type.unwrap_or_default(),
            salary_min,
            salary_max,
            currency: self.currency.trim().to_uppercase(),
            is_remote: self.is_remote,
            submit_for_review,
        })
    }
}

#[component]
pub fn EmployerJobNew() -> Element {
    let lang = use_lang();
    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::NewJob)} }
        }
        JobForm { job_id: None, initial: JobDraft::default() }
    }
}

#[component]
pub fn EmployerJobEdit(id: String) -> Element {
    let lang = use_lang();
    let job_id = use_signal(|| id.clone());
    let mut job = use_resource(move || async move { server::api::employer_get_job(job_id()).await });
    let state = LoadState::from_fetch(lang, job.read().as_ref(), |_: &JobResponse| false);
    let status = state.ready().map(|j| j.status);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::EditJob)} }
            if let Some(status) = status {
                PageSubtitle { JobStatusBadge { status } }
            }
        }
        match state {
            LoadState::Loading | LoadState::Empty => rsx! { LoadingState { lang, rows: 8 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| job.restart() }
            },
            LoadState::Ready(job) => rsx! {
                if let Some(reason) = job.decline_reason.clone() {
                    FormNotice { success: false, message: format!("{}: {reason}", t(lang, Msg::DeclineReason)) }
                }
                if job.status.is_editable() {
                    JobForm { job_id: Some(job.id.clone()), initial: JobDraft::from(&job) }
                } else {
                    FormNotice { success: false, message: t(lang, Msg::Forbidden).to_string() }
                }
            },
        }
    }
}

/// Shared create/edit form. "Save draft" keeps the job private; "Submit for
/// review" hands it to the moderators.
#[component]
fn JobForm(job_id: Option<String>, initial: JobDraft) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut draft = use_signal(|| initial.clone());
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);
    let job_id = use_signal(|| job_id.clone());

    let mut save = move |submit_for_review: bool| {
        let req = match draft.read().to_request(submit_for_review) {
            Ok(req) => req,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        saving.set(true);
        errors.set(FormErrors::default());
        spawn(async move {
            let result = match job_id() {
                Some(id) => server::api::employer_update_job(id, req).await,
                None => server::api::employer_create_job(req).await,
            };
            match result {
                Ok(_) => {
                    let done = match (job_id().is_some(), submit_for_review) {
                        (_, true) => Msg::JobSubmitted,
                        (true, false) => Msg::JobUpdated,
                        (false, false) => Msg::JobCreated,
                    };
                    toast.success(t(lang, done).to_string(), ToastOptions::new());
                    navigator().push(Route::EmployerJobs {});
                }
                Err(e) => errors.set(FormErrors::from_server(lang, &e.to_string())),
            }
            saving.set(false);
        });
    };

    let err = move |name: &str| errors.read().field(name);

    rsx! {
        Card { class: "job-form-card",
            CardContent {
                if let Some(banner) = errors.read().banner.clone() {
                    FormNotice { success: false, message: banner }
                }
                Form { onsubmit: move |_| save(true),
                    FormRow {
                        Input {
                            label: t(lang, Msg::Title),
                            value: draft.read().title.clone(),
                            required: true,
                            error: err("title"),
                            on_input: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                        Input {
                            label: t(lang, Msg::TitleAr),
                            value: draft.read().title_ar.clone(),
                            dir: "rtl",
                            error: err("title_ar"),
                            on_input: move |evt: FormEvent| draft.write().title_ar = evt.value(),
                        }
                    }
                    Textarea {
                        label: t(lang, Msg::Description),
                        value: draft.read().description.clone(),
                        rows: 8,
                        required: true,
                        error: err("description"),
                        on_input: move |evt: FormEvent| draft.write().description = evt.value(),
                    }
                    Textarea {
                        label: t(lang, Msg::DescriptionAr),
                        value: draft.read().description_ar.clone(),
                        rows: 8,
                        dir: "rtl",
                        error: err("description_ar"),
                        on_input: move |evt: FormEvent| draft.write().description_ar = evt.value(),
                    }
                    FormRow {
                        Input {
                            label: t(lang, Msg::Location),
                            value: draft.read().location.clone(),
                            required: true,
                            error: err("location"),
                            on_input: move |evt: FormEvent| draft.write().location = evt.value(),
                        }
                        CategorySelect {
                            label: t(lang, Msg::Category),
                            value: draft.read().category.clone(),
                            any_label: "—".to_string(),
                            error: err("category"),
                            onchange: move |value: String| draft.write().category = value,
                        }
                        JobTypeSelect {
                            label: t(lang, Msg::JobType),
                            value: draft.read().job_type.clone(),
                            allow_any: false,
                            onchange: move |value: String| draft.write().job_type = value,
                        }
                    }
                    FormRow {
                        Input {
                            label: t(lang, Msg::SalaryMin),
                            input_type: "number",
                            value: draft.read().salary_min.clone(),
                            error: err("salary_min"),
                            on_input: move |evt: FormEvent| draft.write().salary_min = evt.value(),
                        }
                        Input {
                            label: t(lang, Msg::SalaryMax),
                            input_type: "number",
                            value: draft.read().salary_max.clone(),
                            error: err("salary_max"),
                            on_input: move |evt: FormEvent| draft.write().salary_max = evt.value(),
                        }
                        Input {
                            label: t(lang, Msg::Currency),
                            value: draft.read().currency.clone(),
                            error: err("currency"),
                            on_input: move |evt: FormEvent| draft.write().currency = evt.value(),
                        }
                    }
                    label { class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: draft.read().is_remote,
                            onchange: move |evt: FormEvent| draft.write().is_remote = evt.checked(),
                        }
                        {t(lang, Msg::Remote)}
                    }
                    FormActions {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                navigator().push(Route::EmployerJobs {});
                            },
                            {t(lang, Msg::Cancel)}
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: saving(),
                            onclick: move |_| save(false),
                            {t(lang, Msg::SaveDraft)}
                        }
                        Button { submit: true, loading: saving(), {t(lang, Msg::SubmitForReview)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> JobDraft {
        JobDraft {
            title: " Backend Engineer ".into(),
            description: "Build and run the job board services.".into(),
            location: "Riyadh".into(),
            category: "technology".into(),
            salary_min: "8,000".into(),
            salary_max: "12000".into(),
            currency: "sar".into(),
            ..Default::default()
        }
    }

    #[test]
    fn draft_builds_trimmed_request() {
        let req = filled().to_request(false).unwrap();
        assert_eq!(req.title, "Backend Engineer");
        assert_eq!(req.title_ar, None);
        assert_eq!(req.salary_min, Some(8000));
        assert_eq!(req.salary_max, Some(12000));
        assert_eq!(req.currency, "SAR");
        assert_eq!(req.job_type, JobType::FullTime);
        assert!(!req.submit_for_review);
    }

    #[test]
    fn bad_salary_and_missing_category_are_field_errors() {
        let draft = JobDraft {
            category: String::new(),
            salary_min: "lots".into(),
            ..filled()
        };
        let errors = draft.to_request(true).unwrap_err();
        assert!(errors.field("category").is_some());
        assert!(errors.field("salary_min").is_some());
        assert!(errors.field("salary_max").is_none());
        assert_eq!(errors.banner, None);
    }

    #[test]
    fn submit_flag_passes_through_and_blank_salary_is_unset() {
        let req = filled().to_request(true).unwrap();
        assert!(req.submit_for_review);
        assert_eq!(parse_salary("  "), Ok(None));
    }
}
