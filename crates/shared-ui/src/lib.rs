//! Presentational components shared by every page of the job board.
//!
//! Each component lives in its own directory with a co-located stylesheet
//! that is pulled in through `asset!` the first time the component renders.
//! Layout relies on logical CSS properties so Arabic pages mirror cleanly
//! under `dir="rtl"`.

pub mod components;

pub use components::*;

#[cfg(test)]
pub(crate) mod test_util {
    use dioxus::prelude::*;

    /// Render a root component to an HTML string.
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }
}
