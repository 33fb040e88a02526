use dioxus::prelude::*;
use shared_types::{t, Lang, Msg, PageCursor, PaginationMeta};

use crate::components::button::{Button, ButtonVariant};

/// "Page 2 of 5" in the given language.
pub fn page_summary(lang: Lang, cursor: PageCursor) -> String {
    format!(
        "{} {} {} {}",
        t(lang, Msg::Page),
        cursor.page,
        t(lang, Msg::Of),
        cursor.last_page
    )
}

/// Previous/Next controls bound to a 1-based page signal.
///
/// The buttons never move `page` outside `[1, last_page]` of the response
/// they were rendered from; the owning view refetches when `page` changes.
#[component]
pub fn Pagination(lang: Lang, meta: PaginationMeta, page: Signal<i64>) -> Element {
    let cursor = PageCursor::from_meta(&meta);
    if cursor.last_page <= 1 {
        return rsx! {};
    }
    let mut page = page;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", aria_label: t(lang, Msg::Page),
            Button {
                variant: ButtonVariant::Outline,
                disabled: !cursor.can_prev(),
                onclick: move |_| page.set(cursor.prev().page),
                {t(lang, Msg::Previous)}
            }
            span { class: "pagination-info", {page_summary(lang, cursor)} }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !cursor.can_next(),
                onclick: move |_| page.set(cursor.next().page),
                {t(lang, Msg::Next)}
            }
        }
    }
}
