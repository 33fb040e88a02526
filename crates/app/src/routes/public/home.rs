use dioxus::prelude::*;
use shared_types::{t, LoadState, Msg};
use shared_ui::{
    Button, ButtonVariant, EmptyState, ErrorState, Input, LoadingState, PageHeader, PageSubtitle,
    PageTitle, SearchBar,
};

use crate::components::{CategorySelect, JobCard};
use crate::i18n::use_lang;
use crate::routes::Route;

/// Landing page: hero search plus the latest approved jobs.
#[component]
pub fn Home() -> Element {
    let lang = use_lang();
    let mut query = use_signal(String::new);
    let mut category = use_signal(String::new);

    let mut latest = use_resource(move || async move { server::api::latest_jobs().await });

    let handle_search = move |_| {
        let q = query.read().trim().to_string();
        let c = category.read().clone();
        navigator().push(Route::Jobs {
            q: (!q.is_empty()).then_some(q),
            category: (!c.is_empty()).then_some(c),
        });
    };

    let state = LoadState::from_fetch(lang, latest.read().as_ref(), Vec::is_empty);

    rsx! {
        section { class: "hero",
            PageHeader {
                PageTitle { {t(lang, Msg::HeroTitle)} }
                PageSubtitle { {t(lang, Msg::HeroSubtitle)} }
            }
            SearchBar { onsubmit: handle_search,
                Input {
                    value: query(),
                    placeholder: t(lang, Msg::SearchPlaceholder),
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                CategorySelect {
                    value: category(),
                    any_label: t(lang, Msg::AllCategories).to_string(),
                    onchange: move |value: String| category.set(value),
                }
                Button { submit: true, {t(lang, Msg::Search)} }
            }
        }

        section { class: "latest-jobs",
            div { class: "section-heading",
                h2 { {t(lang, Msg::LatestJobs)} }
                Link { to: Route::Jobs { q: None, category: None }, {t(lang, Msg::ViewAllJobs)} }
            }
            match state {
                LoadState::Loading => rsx! { LoadingState { lang } },
                LoadState::Failed(message) => rsx! {
                    ErrorState { lang, message, on_retry: move |_| latest.restart() }
                },
                LoadState::Empty => rsx! { EmptyState { lang } },
                LoadState::Ready(jobs) => rsx! {
                    div { class: "job-grid",
                        for job in jobs {
                            JobCard { key: "{job.id}", job }
                        }
                    }
                    div { class: "section-footer",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                navigator().push(Route::Jobs { q: None, category: None });
                            },
                            {t(lang, Msg::ViewAllJobs)}
                        }
                    }
                },
            }
        }
    }
}
