use dioxus::prelude::*;
use shared_types::{t, EmployeeDashboard, LoadState, Msg};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorState, LoadingState,
    PageHeader, PageTitle, StatCard, StatGrid,
};

use crate::components::{ApplicationStatusBadge, JobCard};
use crate::format::short_date;
use crate::i18n::use_lang;
use crate::routes::Route;

#[component]
pub fn EmployeeOverview() -> Element {
    let lang = use_lang();
    let mut stats = use_server_future(server::api::employee_dashboard)?;
    let state = LoadState::from_fetch(lang, stats.read().as_ref(), |_: &EmployeeDashboard| false);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Dashboard)} }
        }
        match state {
            LoadState::Loading | LoadState::Empty => rsx! { LoadingState { lang } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| stats.restart() }
            },
            LoadState::Ready(data) => rsx! {
                StatGrid {
                    StatCard { label: t(lang, Msg::MyApplications), value: data.total_applications }
                    StatCard {
                        label: t(lang, Msg::Interviews),
                        value: data.interviews,
                        highlight: data.interviews > 0,
                    }
                    StatCard { label: t(lang, Msg::AcceptedOffers), value: data.accepted }
                    StatCard { label: t(lang, Msg::SavedJobs), value: data.saved_jobs }
                }
                Card {
                    CardHeader {
                        CardTitle { {t(lang, Msg::RecentApplications)} }
                    }
                    CardContent {
                        if data.recent_applications.is_empty() {
                            EmptyState { lang,
                                Link { to: Route::Jobs { q: None, category: None }, {t(lang, Msg::ViewAllJobs)} }
                            }
                        } else {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { {t(lang, Msg::Title)} }
                                    DataTableColumn { {t(lang, Msg::Company)} }
                                    DataTableColumn { {t(lang, Msg::Status)} }
                                    DataTableColumn { {t(lang, Msg::AppliedOn)} }
                                }
                                DataTableBody {
                                    for app in data.recent_applications {
                                        DataTableRow {
                                            key: "{app.id}",
                                            DataTableCell { {app.localized_job_title(lang).to_string()} }
                                            DataTableCell { "{app.company_name}" }
                                            DataTableCell { ApplicationStatusBadge { status: app.status } }
                                            DataTableCell { {short_date(&app.created_at).to_string()} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if !data.recommended_jobs.is_empty() {
                    section { class: "recommended-jobs",
                        h2 { {t(lang, Msg::RecommendedJobs)} }
                        div { class: "job-grid",
                            for job in data.recommended_jobs {
                                JobCard { key: "{job.id}", job }
                            }
                        }
                    }
                }
            },
        }
    }
}
