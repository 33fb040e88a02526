use dioxus::prelude::*;
use shared_types::{category_options, t, Msg, JOB_TYPES};
use shared_ui::FormSelect;

use crate::i18n::use_lang;

/// Category dropdown. With `any_label`, the first option clears the filter.
#[component]
pub fn CategorySelect(
    value: String,
    onchange: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default)] any_label: Option<String>,
    #[props(default)] error: Option<String>,
) -> Element {
    let lang = use_lang();

    rsx! {
        FormSelect {
            value: value.clone(),
            label,
            error,
            onchange: move |evt: Event<FormData>| onchange.call(evt.value()),
            if let Some(any) = any_label {
                option { value: "", "{any}" }
            }
            for opt in category_options(lang) {
                option {
                    value: "{opt.slug}",
                    selected: opt.slug == value,
                    "{opt.label}"
                }
            }
        }
    }
}

#[component]
pub fn JobTypeSelect(
    value: String,
    onchange: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default = true)] allow_any: bool,
) -> Element {
    let lang = use_lang();

    rsx! {
        FormSelect {
            value: value.clone(),
            label,
            onchange: move |evt: Event<FormData>| onchange.call(evt.value()),
            if allow_any {
                option { value: "", {t(lang, Msg::AllTypes)} }
            }
            for job_type in JOB_TYPES.iter().copied() {
                option {
                    value: job_type.as_str(),
                    selected: job_type.as_str() == value,
                    {job_type.label(lang)}
                }
            }
        }
    }
}
