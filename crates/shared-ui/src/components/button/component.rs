use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Busy state: the button is disabled and marked `aria-busy`.
    #[props(default = false)]
    pub loading: bool,
    /// Renders `type="submit"` so the button submits its form.
    #[props(default = false)]
    pub submit: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    if props.size == ButtonSize::Small {
        base.push(Attribute::new("data-size", "sm", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let kind = if props.submit { "submit" } else { "button" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: kind,
            disabled: props.disabled || props.loading,
            aria_busy: props.loading,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn submit_button_is_typed_and_styled() {
        fn app() -> Element {
            rsx! {
                Button { submit: true, variant: ButtonVariant::Destructive, "Decline" }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"data-style="destructive""#));
        assert!(html.contains("Decline"));
    }

    #[test]
    fn loading_disables_the_button() {
        fn app() -> Element {
            rsx! {
                Button { loading: true, size: ButtonSize::Small, "Save" }
            }
        }
        let html = render(app);
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"data-size="sm""#));
    }
}
