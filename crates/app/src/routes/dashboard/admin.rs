use dioxus::prelude::*;
use shared_types::{t, AdminDashboard, LoadState, Msg};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorState, LoadingState,
    PageHeader, PageTitle, StatCard, StatGrid,
};

use crate::components::JobStatusBadge;
use crate::format::short_date;
use crate::i18n::use_lang;
use crate::routes::Route;

#[component]
pub fn AdminOverview() -> Element {
    let lang = use_lang();
    let mut stats = use_server_future(server::api::admin_dashboard)?;
    let state = LoadState::from_fetch(lang, stats.read().as_ref(), |_: &AdminDashboard| false);

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
                    StatCard { label: t(lang, Msg::TotalUsers), value: data.total_users }
                    StatCard { label: t(lang, Msg::Employers), value: data.total_employers }
                    StatCard { label: t(lang, Msg::Employees), value: data.total_employees }
                    StatCard { label: t(lang, Msg::TotalJobs), value: data.total_jobs }
                    StatCard {
                        label: t(lang, Msg::PendingReview),
                        value: data.pending_jobs,
                        highlight: data.pending_jobs > 0,
                    }
                    StatCard { label: t(lang, Msg::ActiveJobs), value: data.active_jobs }
                    StatCard { label: t(lang, Msg::TotalApplications), value: data.total_applications }
                    StatCard {
                        label: t(lang, Msg::NewContacts),
                        value: data.new_contacts,
                        highlight: data.new_contacts > 0,
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { {t(lang, Msg::RecentJobs)} }
                    }
                    CardContent {
                        if data.recent_jobs.is_empty() {
                            EmptyState { lang }
                        } else {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { {t(lang, Msg::Title)} }
                                    DataTableColumn { {t(lang, Msg::Company)} }
                                    DataTableColumn { {t(lang, Msg::Status)} }
                                    DataTableColumn { {t(lang, Msg::Posted)} }
                                }
                                DataTableBody {
                                    for job in data.recent_jobs {
                                        DataTableRow {
                                            key: "{job.id}",
                                            DataTableCell { {job.localized_title(lang).to_string()} }
                                            DataTableCell { "{job.company_name}" }
                                            DataTableCell { JobStatusBadge { status: job.status } }
                                            DataTableCell { {short_date(&job.created_at).to_string()} }
                                        }
                                    }
                                }
                            }
                            Link { to: Route::AdminJobs {}, {t(lang, Msg::AllJobs)} }
                        }
                    }
                }
            },
        }
    }
}
