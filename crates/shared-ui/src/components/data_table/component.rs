use dioxus::prelude::*;

/// Horizontally scrollable table with co-located styles.
#[component]
pub fn DataTable(#[props(default)] caption: Option<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                if let Some(text) = caption {
                    caption { class: "data-table-caption", "{text}" }
                }
                {children}
            }
        }
    }
}

/// `thead > tr` wrapper for the column headers.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

/// Table row; clickable when an `onclick` handler is given.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] muted: bool,
    children: Element,
) -> Element {
    let mut class = String::from("data-table-row");
    if onclick.is_some() {
        class.push_str(" clickable");
    }
    if muted {
        class.push_str(" muted");
    }

    rsx! {
        tr {
            class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Cell holding a row's action buttons. Clicks do not bubble to the row.
#[component]
pub fn DataTableActions(children: Element) -> Element {
    rsx! {
        td {
            class: "data-table-actions",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn rows_are_plain_unless_clickable() {
        fn app() -> Element {
            rsx! {
                DataTable { caption: "Jobs".to_string(),
                    DataTableHeader {
                        DataTableColumn { "Title" }
                    }
                    DataTableBody {
                        DataTableRow { muted: true,
                            DataTableCell { "Closed job" }
                        }
                        DataTableRow { onclick: move |_| {},
                            DataTableCell { "Open job" }
                        }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<caption"));
        assert!(html.contains(r#"class="data-table-row muted""#));
        assert!(html.contains(r#"class="data-table-row clickable""#));
    }
}
