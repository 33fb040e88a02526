use dioxus::prelude::*;
use shared_types::{t, EmployerDashboard, LoadState, Msg};
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorState, LoadingState,
    PageActions, PageHeader, PageTitle, StatCard, StatGrid,
};

use crate::components::ApplicationStatusBadge;
use crate::format::short_date;
use crate::i18n::use_lang;
use crate::routes::Route;

#[component]
pub fn EmployerOverview() -> Element {
    let lang = use_lang();
    let mut stats = use_server_future(server::api::employer_dashboard)?;
    let state = LoadState::from_fetch(lang, stats.read().as_ref(), |_: &EmployerDashboard| false);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Dashboard)} }
            PageActions {
                Button {
                    onclick: move |_| {
                        navigator().push(Route::EmployerJobNew {});
                    },
                    {t(lang, Msg::NewJob)}
                }
            }
        }
        match state {
            LoadState::Loading | LoadState::Empty => rsx! { LoadingState { lang } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| stats.restart() }
            },
            LoadState::Ready(data) => rsx! {
                StatGrid {
                    StatCard { label: t(lang, Msg::TotalJobs), value: data.total_jobs }
                    StatCard { label: t(lang, Msg::ActiveJobs), value: data.active_jobs }
                    StatCard { label: t(lang, Msg::PendingReview), value: data.pending_jobs }
                    StatCard { label: t(lang, Msg::TotalApplications), value: data.total_applications }
                    StatCard {
                        label: t(lang, Msg::NewApplications),
                        value: data.new_applications,
                        highlight: data.new_applications > 0,
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { {t(lang, Msg::RecentApplications)} }
                    }
                    CardContent {
                        if data.recent_applications.is_empty() {
                            EmptyState { lang }
                        } else {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { {t(lang, Msg::Applicant)} }
                                    DataTableColumn { {t(lang, Msg::Title)} }
                                    DataTableColumn { {t(lang, Msg::Status)} }
                                    DataTableColumn { {t(lang, Msg::AppliedOn)} }
                                }
                                DataTableBody {
                                    for app in data.recent_applications {
                                        DataTableRow {
                                            key: "{app.id}",
                                            onclick: {
                                                let id = app.id.clone();
                                                move |_| {
                                                    navigator().push(Route::EmployerCandidate { id: id.clone() });
                                                }
                                            },
                                            DataTableCell { "{app.applicant_name}" }
                                            DataTableCell { {app.localized_job_title(lang).to_string()} }
                                            DataTableCell { ApplicationStatusBadge { status: app.status } }
                                            DataTableCell { {short_date(&app.created_at).to_string()} }
                                        }
                                    }
                                }
                            }
                            Link { to: Route::EmployerApplications { job: None }, {t(lang, Msg::Applications)} }
                        }
                    }
                }
            },
        }
    }
}
