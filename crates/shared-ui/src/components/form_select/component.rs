use dioxus::prelude::*;

use crate::components::form::FieldError;

/// Native `<select>` for filters and form fields.
///
/// Children are `option { value: "...", "Label" }` elements; an empty value
/// conventionally means "all".
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                aria_invalid: error.is_some(),
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            FieldError { message: error }
        }
    }
}
