use dioxus::prelude::*;

/// Row of filter controls. With `onsubmit`, pressing Enter in a field
/// submits the bar instead of reloading the page.
#[component]
pub fn SearchBar(#[props(default)] onsubmit: Option<EventHandler<()>>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "search-bar",
            role: "search",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if let Some(handler) = &onsubmit {
                    handler.call(());
                }
            },
            {children}
        }
    }
}
