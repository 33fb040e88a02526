use dioxus::prelude::*;
use shared_types::{t, JobSearchParams, LoadState, Msg, PageCursor, PaginatedResponse};
use shared_ui::{
    page_summary, Button, ButtonVariant, EmptyState, ErrorState, Input, LoadingState, PageHeader,
    PageTitle, Pagination, SearchBar,
};

use crate::components::{CategorySelect, JobCard, JobTypeSelect};
use crate::format::non_blank;
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;

const PAGE_SIZE: i64 = 12;

/// Public job search. Keyed on the URL query so links from the home page
/// start a fresh search; later filter changes stay local to the page.
#[component]
pub fn Jobs(q: Option<String>, category: Option<String>) -> Element {
    let key = format!("{q:?}|{category:?}");
    rsx! {
        JobSearch { key: "{key}", q, category }
    }
}

/// Filter form values. Applied on submit, not per keystroke.
#[derive(Debug, Clone, Default, PartialEq)]
struct Filters {
    q: String,
    location: String,
    category: String,
    job_type: String,
    remote_only: bool,
}

impl Filters {
    fn to_params(&self, page: i64) -> JobSearchParams {
        JobSearchParams {
            q: non_blank(&self.q),
            location: non_blank(&self.location),
            category: non_blank(&self.category),
            job_type: non_blank(&self.job_type),
            status: None,
            remote: self.remote_only.then_some(true),
            employer_id: None,
            page: Some(page),
            limit: Some(PAGE_SIZE),
        }
    }
}

#[component]
fn JobSearch(q: Option<String>, category: Option<String>) -> Element {
    let lang = use_lang();
    let initial = Filters {
        q: q.unwrap_or_default(),
        category: category.unwrap_or_default(),
        ..Default::default()
    };

    let mut form = use_signal(|| initial.clone());
    let mut applied = use_signal(|| initial);
    let mut page = use_signal(|| 1i64);

    let mut results = use_resource(move || {
        let params = applied.read().to_params(page());
        tracing::debug!(query = %params.to_query_string(), "searching jobs");
        async move { server::api::search_jobs(params).await }
    });

    let handle_search = move |_| {
        page.set(1);
        applied.set(form.read().clone());
    };

    let handle_clear = move |_| {
        form.set(Filters::default());
        applied.set(Filters::default());
        page.set(1);
    };

    use_page_clamp(results, page);
    let state = LoadState::from_fetch(lang, results.read().as_ref(), PaginatedResponse::is_empty);
    let filtered = *applied.read() != Filters::default();

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Jobs)} }
        }

        SearchBar { onsubmit: handle_search,
            Input {
                value: form.read().q.clone(),
                placeholder: t(lang, Msg::SearchPlaceholder),
                on_input: move |evt: FormEvent| form.write().q = evt.value(),
            }
            Input {
                value: form.read().location.clone(),
                placeholder: t(lang, Msg::Location),
                on_input: move |evt: FormEvent| form.write().location = evt.value(),
            }
            CategorySelect {
                value: form.read().category.clone(),
                any_label: t(lang, Msg::AllCategories).to_string(),
                onchange: move |value: String| form.write().category = value,
            }
            JobTypeSelect {
                value: form.read().job_type.clone(),
                onchange: move |value: String| form.write().job_type = value,
            }
            label { class: "checkbox-label",
                input {
                    r#type: "checkbox",
                    checked: form.read().remote_only,
                    onchange: move |evt: FormEvent| form.write().remote_only = evt.checked(),
                }
                {t(lang, Msg::Remote)}
            }
            Button { submit: true, {t(lang, Msg::Search)} }
            if filtered {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: handle_clear,
                    {t(lang, Msg::ClearFilters)}
                }
            }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| results.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(found) => rsx! {
                p { class: "result-count", {page_summary(lang, PageCursor::from_meta(&found.meta))} }
                div { class: "job-grid",
                    for job in found.data {
                        JobCard { key: "{job.id}", job }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_filters_are_omitted() {
        let filters = Filters {
            q: "  ".into(),
            category: "engineering".into(),
            ..Default::default()
        };
        let params = filters.to_params(2);
        assert_eq!(params.q, None);
        assert_eq!(params.category.as_deref(), Some("engineering"));
        assert_eq!(params.remote, None);
        assert_eq!(params.page, Some(2));
        assert_eq!(params.limit, Some(PAGE_SIZE));
    }

    #[test]
    fn remote_toggle_only_filters_when_set() {
        let filters = Filters {
            remote_only: true,
            ..Default::default()
        };
        assert_eq!(filters.to_params(1).remote, Some(true));
    }
}
