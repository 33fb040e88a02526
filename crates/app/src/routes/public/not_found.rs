use dioxus::prelude::*;
use shared_types::{t, Msg};

use crate::i18n::use_lang;
use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let lang = use_lang();
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            h2 { {t(lang, Msg::NotFoundTitle)} }
            p { {t(lang, Msg::NotFoundBody)} }
            code { "{path}" }
            Link { to: Route::Home {}, class: "button-link", {t(lang, Msg::BackHome)} }
        }
    }
}
