use dioxus::prelude::*;

/// Tone of a badge. Status badges pick a tone from the status they show.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline pill for statuses, job types and tags.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// A wrapping row of badges, e.g. a candidate's skills.
#[component]
pub fn BadgeList(items: Vec<String>, #[props(default)] variant: BadgeVariant) -> Element {
    rsx! {
        div { class: "badge-list",
            for item in items {
                Badge { variant, "{item}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn badge_list_renders_every_item() {
        fn app() -> Element {
            rsx! {
                BadgeList {
                    items: vec!["Rust".to_string(), "SQL".to_string()],
                    variant: BadgeVariant::Outline,
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches(r#"data-style="outline""#).count(), 2);
        assert!(html.contains("Rust"));
        assert!(html.contains("SQL"));
    }
}
