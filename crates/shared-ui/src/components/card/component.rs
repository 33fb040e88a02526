use dioxus::prelude::*;

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered surface that groups related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-header", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-title", attributes);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-description", attributes);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-content", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-footer", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Dashboard counter tile: a big number over a short label.
#[component]
pub fn StatCard(label: String, value: i64, #[props(default)] highlight: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if highlight { "stat-card highlight" } else { "stat-card" },
            span { class: "stat-card-value", "{value}" }
            span { class: "stat-card-label", "{label}" }
        }
    }
}

/// Responsive grid of `StatCard`s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn card_merges_caller_classes() {
        fn app() -> Element {
            rsx! {
                Card { class: "job-card",
                    CardContent { "body" }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("card job-card"));
        assert!(html.contains("card-content"));
        assert!(html.contains("body"));
    }

    #[test]
    fn stat_card_shows_value_and_label() {
        fn app() -> Element {
            rsx! {
                StatCard { label: "Pending".to_string(), value: 4, highlight: true }
            }
        }
        let html = render(app);
        assert!(html.contains("stat-card highlight"));
        assert!(html.contains(">4<"));
        assert!(html.contains(">Pending<"));
    }
}
