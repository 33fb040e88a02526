use dioxus::prelude::*;
use shared_types::{t, CreateContactRequest, Msg};
use shared_ui::{
    Button, Card, CardContent, Form, FormActions, FormNotice, Input, PageHeader, PageSubtitle,
    PageTitle, Textarea,
};

use crate::format::FormErrors;
use crate::i18n::use_lang;

/// Public contact form. Submissions land in the admin inbox.
#[component]
pub fn Contact() -> Element {
    let lang = use_lang();
    let mut form = use_signal(|| CreateContactRequest {
        name: String::new(),
        email: String::new(),
        subject: String::new(),
        message: String::new(),
    });
    let mut errors = use_signal(FormErrors::default);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |_: FormEvent| async move {
        loading.set(true);
        errors.set(FormErrors::default());
        match server::api::submit_contact(form()).await {
            Ok(_) => {
                sent.set(true);
                form.set(CreateContactRequest {
                    name: String::new(),
                    email: String::new(),
                    subject: String::new(),
                    message: String::new(),
                });
            }
            Err(e) => errors.set(FormErrors::from_server(lang, &e.to_string())),
        }
        loading.set(false);
    };

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::ContactTitle)} }
            PageSubtitle { {t(lang, Msg::ContactSubtitle)} }
        }
        Card { class: "contact-card",
            CardContent {
                if sent() {
                    FormNotice { success: true, message: t(lang, Msg::ContactReceived).to_string() }
                }
                if let Some(banner) = errors.read().banner.clone() {
                    FormNotice { success: false, message: banner }
                }
                Form { onsubmit: handle_submit,
                    Input {
                        label: t(lang, Msg::Name),
                        value: form.read().name.clone(),
                        required: true,
                        error: errors.read().field("name"),
                        on_input: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    Input {
                        label: t(lang, Msg::Email),
                        input_type: "email",
                        value: form.read().email.clone(),
                        required: true,
                        error: errors.read().field("email"),
                        on_input: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    Input {
                        label: t(lang, Msg::Subject),
                        value: form.read().subject.clone(),
                        required: true,
                        error: errors.read().field("subject"),
                        on_input: move |evt: FormEvent| form.write().subject = evt.value(),
                    }
                    Textarea {
                        label: t(lang, Msg::Message),
                        value: form.read().message.clone(),
                        rows: 6,
                        required: true,
                        error: errors.read().field("message"),
                        on_input: move |evt: FormEvent| form.write().message = evt.value(),
                    }
                    FormActions {
                        Button { submit: true, loading: loading(), {t(lang, Msg::SendMessage)} }
                    }
                }
            }
        }
    }
}
