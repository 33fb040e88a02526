//! Active display language, shared through context.

use dioxus::prelude::*;
use shared_types::Lang;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LangState {
    pub lang: Signal<Lang>,
}

impl LangState {
    pub fn with_lang(lang: Lang) -> Self {
        Self {
            lang: Signal::new(lang),
        }
    }

    pub fn set(&mut self, lang: Lang) {
        self.lang.set(lang);
    }

    pub fn toggle(&mut self) {
        let next = (self.lang)().toggle();
        self.set(next);
    }
}

/// Current language.
pub fn use_lang() -> Lang {
    let state = use_context::<LangState>();
    (state.lang)()
}

pub fn use_lang_state() -> LangState {
    use_context::<LangState>()
}

/// One year.
const LANG_COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

/// Mirror `lang` onto `<html>` and persist it in the `lang` cookie so
/// server messages come back in the same language. Run from an effect in
/// the root component.
pub fn sync_document(lang: Lang) {
    let script = format!(
        "document.documentElement.setAttribute('lang', '{code}'); \
         document.documentElement.setAttribute('dir', '{dir}'); \
         document.cookie = 'lang={code}; path=/; max-age={LANG_COOKIE_MAX_AGE}; samesite=lax';",
        code = lang.code(),
        dir = lang.dir()
    );
    let _ = document::eval(&script);
}

/// Language toggle button for the headers.
#[component]
pub fn LangToggle() -> Element {
    let mut state = use_lang_state();
    let lang = (state.lang)();

    rsx! {
        button {
            class: "lang-toggle",
            r#type: "button",
            lang: lang.toggle().code(),
            onclick: move |_| state.toggle(),
            {lang.switch_label()}
        }
    }
}
