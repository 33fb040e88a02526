use dioxus::prelude::*;
use shared_types::{t, AppError, LoadState, Msg, PaginatedResponse, PaginationParams};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, EmptyState, ErrorState, LoadingState,
    PageHeader, PageTitle, Pagination, ToastOptions,
};

use crate::components::JobCard;
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;
use crate::routes::Route;

#[component]
pub fn EmployeeSavedJobs() -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut page = use_signal(|| 1i64);

    let mut saved = use_resource(move || {
        let params = PaginationParams {
            page: Some(page()),
            limit: None,
        };
        async move { server::api::employee_saved_jobs(params).await }
    });

    // Saved jobs are toggled, so "remove" is a toggle on a saved job.
    let mut remove = move |job_id: String| {
        spawn(async move {
            match server::api::employee_toggle_saved_job(job_id).await {
                Ok(_) => {
                    toast.success(t(lang, Msg::JobUnsaved).to_string(), ToastOptions::new());
                    saved.restart();
                }
                Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
            }
        });
    };

    use_page_clamp(saved, page);
    let state = LoadState::from_fetch(lang, saved.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::SavedJobs)} }
        }
        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 4 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| saved.restart() }
            },
            LoadState::Empty => rsx! {
                EmptyState { lang,
                    Link { to: Route::Jobs { q: None, category: None }, {t(lang, Msg::ViewAllJobs)} }
                }
            },
            LoadState::Ready(found) => rsx! {
                div { class: "job-grid",
                    for job in found.data {
                        div { key: "{job.id}", class: "saved-job",
                            JobCard { job: job.clone() }
                            Button {
                                size: ButtonSize::Small,
                                variant: ButtonVariant::Ghost,
                                onclick: {
                                    let id = job.id.clone();
                                    move |_| remove(id.clone())
                                },
                                {t(lang, Msg::Remove)}
                            }
                        }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }
    }
}
