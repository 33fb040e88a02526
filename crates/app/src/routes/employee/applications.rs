use dioxus::prelude::*;
use shared_types::{
    t, AppError, ApplicationAction, ApplicationResponse, ApplicationSearchParams, LoadState, Msg,
    PaginatedResponse, UserRole, APPLICATION_STATUSES,
};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, EmptyState, ErrorState,
    FormSelect, LoadingState, PageHeader, PageTitle, Pagination, ToastOptions,
};

use crate::components::ApplicationStatusBadge;
use crate::format::{non_blank, short_date};
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;
use crate::routes::Route;

#[component]
pub fn EmployeeApplications() -> Element {
    let lang = use_lang();
    let mut status = use_signal(String::new);
    let mut page = use_signal(|| 1i64);

    let mut applications = use_resource(move || {
        let params = ApplicationSearchParams {
            status: non_blank(&status.read()),
            job_id: None,
            page: Some(page()),
            limit: None,
        };
        async move { server::api::employee_list_applications(params).await }
    });

    use_page_clamp(applications, page);
    let state = LoadState::from_fetch(lang, applications.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::MyApplications)} }
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
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 5 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| applications.restart() }
            },
            LoadState::Empty => rsx! {
                EmptyState { lang,
                    Link { to: Route::Jobs { q: None, category: None }, {t(lang, Msg::ViewAllJobs)} }
                }
            },
            LoadState::Ready(found) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { {t(lang, Msg::Title)} }
                        DataTableColumn { {t(lang, Msg::Company)} }
                        DataTableColumn { {t(lang, Msg::Status)} }
                        DataTableColumn { {t(lang, Msg::AppliedOn)} }
                        DataTableColumn { {t(lang, Msg::Actions)} }
                    }
                    DataTableBody {
                        for app in found.data {
                            ApplicationRow {
                                key: "{app.id}",
                                app,
                                on_changed: move |_| applications.restart(),
                            }
                        }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }
    }
}

#[component]
fn ApplicationRow(app: ApplicationResponse, on_changed: EventHandler<()>) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let id = use_signal(|| app.id.clone());
    let job_id = app.job_id.clone();
    let can_withdraw = ApplicationAction::for_viewer(UserRole::Employee, app.status)
        .contains(&ApplicationAction::Withdraw);

    let handle_withdraw = move |_: MouseEvent| async move {
        busy.set(true);
        match server::api::employee_withdraw_application(id()).await {
            Ok(()) => {
                toast.success(t(lang, Msg::ApplicationWithdrawn).to_string(), ToastOptions::new());
                on_changed.call(());
            }
            Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
        }
        busy.set(false);
    };

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::JobDetail { id: job_id.clone() });
            },
            DataTableCell { {app.localized_job_title(lang).to_string()} }
            DataTableCell { "{app.company_name}" }
            DataTableCell {
                ApplicationStatusBadge { status: app.status }
                if let Some(note) = app.employer_note.clone() {
                    p { class: "employer-note", "{note}" }
                }
            }
            DataTableCell { {short_date(&app.created_at).to_string()} }
            DataTableActions {
                if can_withdraw {
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Destructive,
                        loading: busy(),
                        onclick: handle_withdraw,
                        {t(lang, Msg::Withdraw)}
                    }
                }
            }
        }
    }
}
