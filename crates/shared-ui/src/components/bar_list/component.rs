use dioxus::prelude::*;

/// One labelled horizontal bar. `percent` is relative to the longest bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: String,
    pub count: i64,
    pub percent: u32,
}

/// Plain CSS bar chart used by the analytics page.
#[component]
pub fn BarList(items: Vec<BarItem>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul { class: "bar-list",
            for item in items {
                li { class: "bar-list-item",
                    span { class: "bar-list-label", "{item.label}" }
                    span { class: "bar-list-track",
                        span {
                            class: "bar-list-fill",
                            style: "inline-size: {item.percent}%",
                        }
                    }
                    span { class: "bar-list-count", "{item.count}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn bars_are_sized_by_percent() {
        fn app() -> Element {
            rsx! {
                BarList {
                    items: vec![
                        BarItem { label: "Active".into(), count: 8, percent: 100 },
                        BarItem { label: "Pending".into(), count: 2, percent: 25 },
                    ],
                }
            }
        }
        let html = render(app);
        assert!(html.contains("inline-size: 100%"));
        assert!(html.contains("inline-size: 25%"));
        assert!(html.contains("Pending"));
    }
}
