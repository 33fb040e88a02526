use dioxus::prelude::*;
use shared_types::{
    t, ApplicationSearchParams, LoadState, Msg, PaginatedResponse, APPLICATION_STATUSES,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorState, FormSelect,
    LoadingState, PageHeader, PageTitle, Pagination,
};

use crate::components::ApplicationStatusBadge;
use crate::format::{non_blank, short_date};
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;
use crate::routes::Route;

/// Applicants across the employer's jobs, optionally narrowed to one job
/// via `?job=`.
#[component]
pub fn EmployerApplications(job: Option<String>) -> Element {
    let key = job.clone().unwrap_or_default();
    rsx! {
        ApplicationList { key: "{key}", job }
    }
}

#[component]
fn ApplicationList(job: Option<String>) -> Element {
    let lang = use_lang();
    let job_id = use_signal(|| job.clone());
    let mut status = use_signal(String::new);
    let mut page = use_signal(|| 1i64);

    let mut applications = use_resource(move || {
        let params = ApplicationSearchParams {
            status: non_blank(&status.read()),
            job_id: job_id(),
            page: Some(page()),
            limit: None,
        };
        async move { server::api::employer_list_applications(params).await }
    });

    use_page_clamp(applications, page);
    let state = LoadState::from_fetch(lang, applications.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Applications)} }
        }

        div { class: "filter-row",
            FormSelect {
                value: status(),
                onchange: move |evt: Event<FormData>| {
                    page.set(1);
                    status.set(evt.value());
                },
                option { value: "", {t(lang, Msg::AllStatuses)} }
                for s in APPLICATION_STATUSES.iter().copied() {
                    option { value: s.as_str(), selected: status() == s.as_str(), {s.label(lang)} }
                }
            }
            if job_id.read().is_some() {
                Link { to: Route::EmployerApplications { job: None }, {t(lang, Msg::ClearFilters)} }
            }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 5 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| applications.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(found) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { {t(lang, Msg::Applicant)} }
                        DataTableColumn { {t(lang, Msg::Title)} }
                        DataTableColumn { {t(lang, Msg::Status)} }
                        DataTableColumn { {t(lang, Msg::AppliedOn)} }
                        DataTableColumn { {t(lang, Msg::Actions)} }
                    }
                    DataTableBody {
                        for app in found.data {
                            DataTableRow {
                                key: "{app.id}",
                                onclick: {
                                    let id = app.id.clone();
                                    move |_| {
                                        navigator().push(Route::EmployerCandidate { id: id.clone() });
                                    }
                                },
                                DataTableCell {
                                    span { "{app.applicant_name}" }
                                    br {}
                                    small { "{app.applicant_email}" }
                                }
                                DataTableCell { {app.localized_job_title(lang).to_string()} }
                                DataTableCell { ApplicationStatusBadge { status: app.status } }
                                DataTableCell { {short_date(&app.created_at).to_string()} }
                                DataTableActions {
                                    Button {
                                        size: ButtonSize::Small,
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let id = app.id.clone();
                                            move |_| {
                                                navigator().push(Route::EmployerCandidate { id: id.clone() });
                                            }
                                        },
                                        {t(lang, Msg::View)}
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }
    }
}
