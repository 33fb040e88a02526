use dioxus::prelude::*;
use server::api::JobViewerState;
use shared_types::{
    category_label, t, AppError, JobResponse, LoadState, Msg, SubmitApplicationRequest, UserRole,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, ErrorState, FieldError, Form, FormActions, Input, LoadingState, PageHeader,
    PageSubtitle, PageTitle, Textarea, ToastOptions,
};

use crate::auth::use_user_role;
use crate::format::{non_blank, short_date, FormErrors};
use crate::i18n::use_lang;
use crate::routes::Route;

/// Job page. Employees can apply and save; visitors are sent to log in.
#[component]
pub fn JobDetail(id: String) -> Element {
    let lang = use_lang();
    let job_id = use_signal(|| id.clone());

    let mut job = use_server_future(move || async move { server::api::get_job(job_id()).await })?;
    let state = LoadState::from_fetch(lang, job.read().as_ref(), |_: &JobResponse| false);

    match state {
        LoadState::Loading => rsx! { LoadingState { lang, rows: 8 } },
        LoadState::Failed(message) => rsx! {
            ErrorState { lang, message, on_retry: move |_| job.restart() }
            Link { to: Route::Jobs { q: None, category: None }, {t(lang, Msg::ViewAllJobs)} }
        },
        LoadState::Empty => rsx! {},
        LoadState::Ready(job) => rsx! { JobView { job } },
    }
}

#[component]
fn JobView(job: JobResponse) -> Element {
    let lang = use_lang();
    let role = use_user_role();
    let title = job.localized_title(lang).to_string();
    let description = job.localized_description(lang).to_string();
    let posted = short_date(job.approved_at.as_deref().unwrap_or(&job.created_at)).to_string();

    rsx! {
        PageHeader {
            PageTitle { "{title}" }
            PageSubtitle { "{job.company_name} · {job.location}" }
        }
        div { class: "job-detail",
            article { class: "job-detail-body",
                div { class: "job-detail-badges",
                    Badge { variant: BadgeVariant::Primary, {job.job_type.label(lang)} }
                    Badge { variant: BadgeVariant::Secondary, {category_label(&job.category, lang)} }
                    if job.is_remote {
                        Badge { variant: BadgeVariant::Outline, {t(lang, Msg::Remote)} }
                    }
                }
                dl { class: "job-detail-facts",
                    if let Some(salary) = job.salary_label() {
                        dt { {t(lang, Msg::Salary)} }
                        dd { "{salary}" }
                    }
                    dt { {t(lang, Msg::Posted)} }
                    dd { "{posted}" }
                }
                h2 { {t(lang, Msg::Description)} }
                div { class: "job-description",
                    for paragraph in description.split("\n\n") {
                        p { "{paragraph}" }
                    }
                }
            }
            aside { class: "job-detail-aside",
                match role {
                    UserRole::Employee => rsx! { EmployeeActions { job_id: job.id.clone() } },
                    UserRole::Public => rsx! {
                        Link {
                            to: Route::Login { redirect: Some(format!("/jobs/{}", job.id)) },
                            class: "button-link",
                            {t(lang, Msg::LoginToApply)}
                        }
                    },
                    UserRole::Employer | UserRole::Admin => rsx! {},
                }
            }
        }
    }
}

/// Apply form and save toggle for a signed-in employee.
#[component]
fn EmployeeActions(job_id: String) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let id = use_signal(|| job_id.clone());

    let mut viewer = use_resource(move || async move { server::api::employee_job_state(id()).await });
    let mut cover_letter = use_signal(String::new);
    let mut resume_url = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut submitting = use_signal(|| false);
    let mut toggling = use_signal(|| false);

    let current = viewer
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok().copied())
        .unwrap_or_default();

    let handle_apply = move |_: FormEvent| async move {
        submitting.set(true);
        errors.set(FormErrors::default());
        let req = SubmitApplicationRequest {
            job_id: id(),
            cover_letter: non_blank(&cover_letter.read()),
            resume_url: non_blank(&resume_url.read()),
        };
        match server::api::employee_apply(req).await {
            Ok(_) => {
                toast.success(t(lang, Msg::ApplicationSubmitted).to_string(), ToastOptions::new());
                viewer.restart();
            }
            Err(e) => {
                let failed = FormErrors::from_server(lang, &e.to_string());
                if let Some(banner) = &failed.banner {
                    toast.error(banner.clone(), ToastOptions::new());
                }
                errors.set(failed);
            }
        }
        submitting.set(false);
    };

    let handle_toggle_save = move |_: MouseEvent| async move {
        toggling.set(true);
        match server::api::employee_toggle_saved_job(id()).await {
            Ok(result) => {
                let msg = if result.saved { Msg::JobSaved } else { Msg::JobUnsaved };
                toast.success(t(lang, msg).to_string(), ToastOptions::new());
                viewer.restart();
            }
            Err(e) => {
                toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new());
            }
        }
        toggling.set(false);
    };

    let JobViewerState { applied, saved } = current;

    rsx! {
        Card { class: "apply-card",
            CardHeader {
                CardTitle { {t(lang, Msg::Apply)} }
                Button {
                    variant: if saved { ButtonVariant::Secondary } else { ButtonVariant::Outline },
                    loading: toggling(),
                    onclick: handle_toggle_save,
                    {t(lang, if saved { Msg::Saved } else { Msg::Save })}
                }
            }
            CardContent {
                if applied {
                    Badge { variant: BadgeVariant::Success, {t(lang, Msg::Applied)} }
                    Link { to: Route::EmployeeApplications {}, {t(lang, Msg::MyApplications)} }
                } else {
                    Form { onsubmit: handle_apply,
                        Textarea {
                            label: t(lang, Msg::CoverLetter),
                            value: cover_letter(),
                            rows: 6,
                            error: errors.read().field("cover_letter"),
                            on_input: move |evt: FormEvent| cover_letter.set(evt.value()),
                        }
                        Input {
                            label: t(lang, Msg::ResumeUrl),
                            input_type: "url",
                            value: resume_url(),
                            error: errors.read().field("resume_url"),
                            on_input: move |evt: FormEvent| resume_url.set(evt.value()),
                        }
                        FieldError { message: errors.read().field("job_id") }
                        FormActions {
                            Button { submit: true, loading: submitting(), {t(lang, Msg::Submit)} }
                        }
                    }
                }
            }
        }
    }
}
