use dioxus::prelude::*;
use shared_types::{t, Msg, RegisterRequest, UserRole};
use shared_ui::{
    Button, Card, CardContent, CardFooter, CardHeader, CardTitle, Form, FormActions, FormNotice,
    Input,
};

use crate::auth::use_auth;
use crate::format::FormErrors;
use crate::i18n::use_lang;
use crate::routes::Route;

/// Sign-up as a job seeker or an employer.
#[component]
pub fn Register() -> Element {
    let lang = use_lang();
    let mut auth = use_auth();
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Employee);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_register = move |_: FormEvent| async move {
        loading.set(true);
        errors.set(FormErrors::default());

        let req = RegisterRequest {
            email: email().trim().to_string(),
            password: password(),
            display_name: display_name().trim().to_string(),
            role: role(),
        };
        match server::api::register(req).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().replace(Route::Dashboard {});
            }
            Err(e) => errors.set(FormErrors::from_server(lang, &e.to_string())),
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { {t(lang, Msg::RegisterTitle)} }
                }
                CardContent {
                    if let Some(banner) = errors.read().banner.clone() {
                        FormNotice { success: false, message: banner }
                    }
                    Form { onsubmit: handle_register,
                        div { class: "role-choice", role: "radiogroup",
                            for (option, caption) in [(UserRole::Employee, Msg::IAmEmployee), (UserRole::Employer, Msg::IAmEmployer)] {
                                label { class: if role() == option { "role-option selected" } else { "role-option" },
                                    input {
                                        r#type: "radio",
                                        name: "role",
                                        value: option.as_str(),
                                        checked: role() == option,
                                        onchange: move |_| role.set(option),
                                    }
                                    {t(lang, caption)}
                                }
                            }
                        }
                        Input {
                            label: t(lang, Msg::Name),
                            value: display_name(),
                            required: true,
                            error: errors.read().field("display_name"),
                            on_input: move |evt: FormEvent| display_name.set(evt.value()),
                        }
                        Input {
                            label: t(lang, Msg::Email),
                            input_type: "email",
                            value: email(),
                            required: true,
                            error: errors.read().field("email"),
                            autocomplete: "email",
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: t(lang, Msg::Password),
                            input_type: "password",
                            value: password(),
                            required: true,
                            error: errors.read().field("password"),
                            autocomplete: "new-password",
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FormActions {
                            Button { submit: true, loading: loading(), {t(lang, Msg::Register)} }
                        }
                    }
                }
                CardFooter {
                    span { {t(lang, Msg::HaveAccount)} }
                    Link { to: Route::Login { redirect: None }, {t(lang, Msg::Login)} }
                }
            }
        }
    }
}
