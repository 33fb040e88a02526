use dioxus::prelude::*;
use shared_types::{
    category_label, t, DeclineDialog, JobSearchParams, LoadState, Msg, PaginatedResponse,
};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, EmptyState,
    ErrorState, LoadingState, PageHeader, PageSubtitle, PageTitle, Pagination,
};

use super::moderation::ModerationButtons;
use crate::components::DeclineJobDialog;
use crate::format::{excerpt, short_date};
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;

/// Review queue: jobs waiting for approval, oldest first.
#[component]
pub fn AdminPendingJobs() -> Element {
    let lang = use_lang();
    let mut page = use_signal(|| 1i64);
    let dialog = use_signal(DeclineDialog::default);

    let mut jobs = use_resource(move || {
        let params = JobSearchParams {
            page: Some(page()),
            ..Default::default()
        };
        async move { server::api::admin_pending_jobs(params).await }
    });

    use_page_clamp(jobs, page);
    let state = LoadState::from_fetch(lang, jobs.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::PendingJobs)} }
            PageSubtitle { {t(lang, Msg::PendingReview)} }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 4 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| jobs.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(found) => rsx! {
                div { class: "review-queue",
                    for job in found.data {
                        Card { key: "{job.id}", class: "review-card",
                            CardHeader {
                                CardTitle { {job.localized_title(lang).to_string()} }
                                CardDescription {
                                    "{job.company_name} · {job.location} · "
                                    {category_label(&job.category, lang)}
                                    " · "
                                    {short_date(&job.created_at).to_string()}
                                }
                            }
                            CardContent {
                                p { {excerpt(job.localized_description(lang), 400)} }
                                if let Some(salary) = job.salary_label() {
                                    p { class: "review-salary", "{salary}" }
                                }
                            }
                            CardFooter {
                                ModerationButtons {
                                    job: job.clone(),
                                    dialog,
                                    on_changed: move |_| jobs.restart(),
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
