use dioxus::prelude::*;
use shared_types::{
    t, DeclineDialog, JobSearchParams, JobStatus, LoadState, Msg, PaginatedResponse,
    JOB_STATUSES,
};
use shared_ui::{
    Button, DataTable, DataTableActions, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, ErrorState, FormSelect, Input, LoadingState,
    PageHeader, PageTitle, Pagination, SearchBar,
};

use super::moderation::ModerationButtons;
use crate::components::{DeclineJobDialog, JobStatusBadge};
use crate::format::{non_blank, short_date};
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;
use crate::routes::Route;

/// Every job on the board, filterable by status.
#[component]
pub fn AdminJobs() -> Element {
    let lang = use_lang();
    let mut search_input = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut page = use_signal(|| 1i64);
    let dialog = use_signal(DeclineDialog::default);

    let mut jobs = use_resource(move || {
        let params = JobSearchParams {
            q: non_blank(&search.read()),
            status: non_blank(&status.read()),
            page: Some(page()),
            ..Default::default()
        };
        async move { server::api::admin_list_jobs(params).await }
    });

    use_page_clamp(jobs, page);
    let state = LoadState::from_fetch(lang, jobs.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::AllJobs)} }
        }

        SearchBar {
            onsubmit: move |_| {
                page.set(1);
                search.set(search_input());
            },
            Input {
                value: search_input(),
                placeholder: t(lang, Msg::SearchPlaceholder),
                on_input: move |evt: FormEvent| search_input.set(evt.value()),
            }
            FormSelect {
                value: status(),
                onchange: move |evt: Event<FormData>| {
                    page.set(1);
                    status.set(evt.value());
                },
                option { value: "", {t(lang, Msg::AllStatuses)} }
                for s in JOB_STATUSES.iter().copied() {
                    option { value: s.as_str(), selected: status() == s.as_str(), {s.label(lang)} }
                }
            }
            Button { submit: true, {t(lang, Msg::Search)} }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| jobs.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(found) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { {t(lang, Msg::Title)} }
                        DataTableColumn { {t(lang, Msg::Company)} }
                        DataTableColumn { {t(lang, Msg::Location)} }
                        DataTableColumn { {t(lang, Msg::Status)} }
                        DataTableColumn { {t(lang, Msg::Posted)} }
                        DataTableColumn { {t(lang, Msg::Actions)} }
                    }
                    DataTableBody {
                        for job in found.data {
                            DataTableRow {
                                key: "{job.id}",
                                muted: job.status == JobStatus::Closed,
                                onclick: {
                                    let id = job.id.clone();
                                    let public = job.status.is_public();
                                    move |_| {
                                        if public {
                                            navigator().push(Route::JobDetail { id: id.clone() });
                                        }
                                    }
                                },
                                DataTableCell { {job.localized_title(lang).to_string()} }
                                DataTableCell { "{job.company_name}" }
                                DataTableCell { "{job.location}" }
                                DataTableCell {
                                    JobStatusBadge { status: job.status }
                                    if let Some(reason) = job.decline_reason.clone() {
                                        p { class: "decline-reason", "{reason}" }
                                    }
                                }
                                DataTableCell { {short_date(&job.created_at).to_string()} }
                                DataTableActions {
                                    ModerationButtons {
                                        job: job.clone(),
                                        dialog,
                                        on_changed: move |_| jobs.restart(),
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }

        DeclineJobDialog { dialog, on_declined: move |_| jobs.restart() }
    }
}
