use dioxus::prelude::*;

/// Form wrapper that stops the browser's own submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "form", None, false),
        Attribute::new("novalidate", true, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two-column row of fields that stacks on narrow screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}

/// Submit/cancel row at the end of a form.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions", {children} }
    }
}

/// Per-field validation message, rendered only when there is one.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn field_error_renders_only_with_a_message() {
        fn with_message() -> Element {
            rsx! {
                FieldError { message: Some("Email is required".to_string()) }
            }
        }
        fn without_message() -> Element {
            rsx! {
                FieldError { message: None }
            }
        }
        assert!(render(with_message).contains("Email is required"));
        assert!(!render(without_message).contains("field-error"));
    }
}
