//! The non-data branches of a data view: loading, failed and empty.

use dioxus::prelude::*;
use shared_types::{t, Lang, Msg};

use crate::components::button::{Button, ButtonVariant};

/// Line widths of one placeholder row: title, company, meta.
const SKELETON_WIDTHS: [&str; 3] = ["60%", "35%", "80%"];

/// Placeholder rows shown while a fetch is in flight, shaped like a job
/// listing so the page does not jump when results arrive.
#[component]
pub fn LoadingState(lang: Lang, #[props(default = 3)] rows: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "feedback loading",
            role: "status",
            aria_label: t(lang, Msg::Loading),
            for row in 0..rows {
                div { key: "{row}", class: "skeleton-row", aria_hidden: true,
                    for width in SKELETON_WIDTHS {
                        div { class: "skeleton", style: "inline-size: {width}" }
                    }
                }
            }
        }
    }
}

/// Error banner with a manual retry. `message` overrides the generic text.
#[component]
pub fn ErrorState(
    lang: Lang,
    #[props(default)] message: Option<String>,
    on_retry: EventHandler<()>,
) -> Element {
    let text = message.unwrap_or_else(|| t(lang, Msg::LoadFailed).to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "feedback error", role: "alert",
            p { class: "feedback-message", "{text}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_retry.call(()),
                {t(lang, Msg::Retry)}
            }
        }
    }
}

/// "No results" panel for a successful but empty fetch.
#[component]
pub fn EmptyState(
    lang: Lang,
    #[props(default)] message: Option<String>,
    children: Element,
) -> Element {
    let text = message.unwrap_or_else(|| t(lang, Msg::NoResults).to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "feedback empty",
            p { class: "feedback-message", "{text}" }
            {children}
        }
    }
}

/// Inline success/error line under a form.
#[component]
pub fn FormNotice(success: bool, message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if success { "form-notice success" } else { "form-notice error" },
            role: if success { "status" } else { "alert" },
            "{message}"
        }
    }
}
