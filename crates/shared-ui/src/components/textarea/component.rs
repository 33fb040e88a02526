use dioxus::prelude::*;

use crate::components::form::FieldError;

/// Labelled multi-line input with an optional validation message.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut base = vec![Attribute::new("class", "textarea", None, false)];
    if error.is_some() {
        base.push(Attribute::new("aria-invalid", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label {
                    class: if required { "field-label field-required" } else { "field-label" },
                    "{label}"
                }
            }
            textarea {
                value: value,
                rows: rows,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            FieldError { message: error }
        }
    }
}
