use dioxus::prelude::*;
use shared_types::{
    filter_jobs, t, AppError, JobAction, JobFilter, JobResponse, JobSearchParams, JobStatus,
    LoadState, Msg, PaginatedResponse, UserRole, JOB_STATUSES,
};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorState,
    FormSelect, Input, LoadingState, PageActions, PageHeader, PageTitle, SearchBar, ToastOptions,
};

use crate::components::JobStatusBadge;
use crate::format::short_date;
use crate::i18n::use_lang;
use crate::routes::Route;

/// Employers rarely have more than this many postings; the list is fetched
/// once and filtered in place.
const FETCH_LIMIT: i64 = 100;

#[component]
pub fn EmployerJobs() -> Element {
    let lang = use_lang();
    let mut term = use_signal(String::new);
    let mut status = use_signal(|| Option::<JobStatus>::None);

    let mut jobs = use_resource(move || async move {
        server::api::employer_list_jobs(JobSearchParams {
            limit: Some(FETCH_LIMIT),
            ..Default::default()
        })
        .await
    });

    let state = LoadState::from_fetch(lang, jobs.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::MyJobs)} }
            PageActions {
                Button {
                    onclick: move |_| {
                        navigator().push(Route::EmployerJobNew {});
                    },
                    {t(lang, Msg::NewJob)}
                }
            }
        }

        SearchBar {
            Input {
                value: term(),
                placeholder: t(lang, Msg::SearchPlaceholder),
                on_input: move |evt: FormEvent| term.set(evt.value()),
            }
            FormSelect {
                value: status().map(|s| s.as_str()).unwrap_or_default(),
                onchange: move |evt: Event<FormData>| status.set(JobStatus::parse(&evt.value())),
                option { value: "", {t(lang, Msg::AllStatuses)} }
                for s in JOB_STATUSES.iter().copied() {
                    option { value: s.as_str(), selected: status() == Some(s), {s.label(lang)} }
                }
            }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 5 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| jobs.restart() }
            },
            LoadState::Empty => rsx! {
                EmptyState { lang,
                    Link { to: Route::EmployerJobNew {}, {t(lang, Msg::NewJob)} }
                }
            },
            LoadState::Ready(found) => {
                let filter = JobFilter {
                    term: term(),
                    status: status(),
                    ..Default::default()
                };
                let visible = filter_jobs(&found.data, &filter);
                rsx! {
                    if visible.is_empty() {
                        EmptyState { lang }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { {t(lang, Msg::Title)} }
                                DataTableColumn { {t(lang, Msg::Location)} }
                                DataTableColumn { {t(lang, Msg::Status)} }
                                DataTableColumn { {t(lang, Msg::Posted)} }
                                DataTableColumn { {t(lang, Msg::Actions)} }
                            }
                            DataTableBody {
                                for job in visible {
                                    EmployerJobRow { key: "{job.id}", job, on_changed: move |_| jobs.restart() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmployerJobRow(job: JobResponse, on_changed: EventHandler<()>) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let id = use_signal(|| job.id.clone());
    let actions = JobAction::for_viewer(UserRole::Employer, job.status);

    let mut run = move |action: JobAction| {
        busy.set(true);
        spawn(async move {
            let outcome = match action {
                JobAction::Submit => server::api::employer_submit_job(id()).await.map(|_| Msg::JobSubmitted),
                JobAction::Close => server::api::employer_close_job(id()).await.map(|_| Msg::JobClosed),
                JobAction::Delete => server::api::employer_delete_job(id()).await.map(|_| Msg::JobDeleted),
                JobAction::Edit | JobAction::Approve | JobAction::Decline => {
                    busy.set(false);
                    return;
                }
            };
            match outcome {
                Ok(done) => {
                    toast.success(t(lang, done).to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
            }
            busy.set(false);
        });
    };

    rsx! {
        DataTableRow { muted: job.status == JobStatus::Closed,
            DataTableCell {
                span { class: "job-row-title", {job.localized_title(lang).to_string()} }
                if let Some(reason) = job.decline_reason.clone() {
                    p { class: "decline-reason", "{reason}" }
                }
            }
            DataTableCell { "{job.location}" }
            DataTableCell { JobStatusBadge { status: job.status } }
            DataTableCell { {short_date(job.approved_at.as_deref().unwrap_or(&job.created_at)).to_string()} }
            DataTableActions {
                Button {
                    size: ButtonSize::Small,
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        navigator().push(Route::EmployerApplications { job: Some(id()) });
                    },
                    {t(lang, Msg::Applications)}
                }
                for action in actions {
                    match action {
                        JobAction::Edit => rsx! {
                            Button {
                                size: ButtonSize::Small,
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    navigator().push(Route::EmployerJobEdit { id: id() });
                                },
                                {t(lang, Msg::Edit)}
                            }
                        },
                        JobAction::Submit => rsx! {
                            Button {
                                size: ButtonSize::Small,
                                disabled: busy(),
                                onclick: move |_| run(JobAction::Submit),
                                {t(lang, Msg::SubmitForReview)}
                            }
                        },
                        JobAction::Close => rsx! {
                            Button {
                                size: ButtonSize::Small,
                                variant: ButtonVariant::Secondary,
                                disabled: busy(),
                                onclick: move |_| run(JobAction::Close),
                                {t(lang, Msg::Close)}
                            }
                        },
                        JobAction::Delete => rsx! {
                            Button {
                                size: ButtonSize::Small,
                                variant: ButtonVariant::Destructive,
                                disabled: busy(),
                                onclick: move |_| run(JobAction::Delete),
                                {t(lang, Msg::Delete)}
                            }
                        },
                        JobAction::Approve | JobAction::Decline => rsx! {},
                    }
                }
            }
        }
    }
}
