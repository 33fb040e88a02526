use dioxus::prelude::*;

use crate::components::form::FieldError;

/// Labelled single-line input with an optional validation message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut base = vec![Attribute::new("class", "input", None, false)];
    if error.is_some() {
        base.push(Attribute::new("aria-invalid", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label {
                    class: if required { "field-label field-required" } else { "field-label" },
                    "{label}"
                }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(hint) = hint {
                p { class: "field-hint", "{hint}" }
            }
            FieldError { message: error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn error_marks_input_invalid() {
        fn app() -> Element {
            rsx! {
                Input {
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                    error: Some("Enter a valid email".to_string()),
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains("field-required"));
        assert!(html.contains("Enter a valid email"));
    }
}
