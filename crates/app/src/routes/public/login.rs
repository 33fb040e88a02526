use dioxus::prelude::*;
use shared_types::{t, LoginRequest, Msg};
use shared_ui::{
    Button, Card, CardContent, CardFooter, CardHeader, CardTitle, Form, FormActions, FormNotice,
    Input,
};

use crate::auth::use_auth;
use crate::format::FormErrors;
use crate::i18n::use_lang;
use crate::routes::Route;

/// Where to go after signing in. Only paths that resolve to one of our own
/// routes are honored; anything else lands on the dashboard.
pub(crate) fn redirect_target(redirect: Option<&str>) -> Route {
    redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::NotFound { .. } | Route::Login { .. }))
        .unwrap_or(Route::Dashboard {})
}

#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let lang = use_lang();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    let destination = use_signal(move || redirect_target(redirect.as_deref()));

    if auth.is_authenticated() {
        navigator().replace(destination());
    }

    let handle_login = move |_: FormEvent| async move {
        loading.set(true);
        errors.set(FormErrors::default());

        let req = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        match server::api::login(req).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().replace(destination());
            }
            Err(e) => errors.set(FormErrors::from_server(lang, &e.to_string())),
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { {t(lang, Msg::LoginTitle)} }
                }
                CardContent {
                    if let Some(banner) = errors.read().banner.clone() {
                        FormNotice { success: false, message: banner }
                    }
                    Form { onsubmit: handle_login,
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
                            autocomplete: "current-password",
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FormActions {
                            Button { submit: true, loading: loading(), {t(lang, Msg::Login)} }
                        }
                    }
                }
                CardFooter {
                    span { {t(lang, Msg::NoAccount)} }
                    Link { to: Route::Register {}, {t(lang, Msg::Register)} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_paths_are_followed() {
        assert_eq!(
            redirect_target(Some("/jobs/abc")),
            Route::JobDetail { id: "abc".into() }
        );
        assert_eq!(redirect_target(Some("/employee/saved")), Route::EmployeeSavedJobs {});
    }

    #[test]
    fn foreign_or_missing_paths_fall_back_to_dashboard() {
        assert_eq!(redirect_target(None), Route::Dashboard {});
        assert_eq!(redirect_target(Some("https://evil.example")), Route::Dashboard {});
        assert_eq!(redirect_target(Some("//evil.example/x")), Route::Dashboard {});
        assert_eq!(redirect_target(Some("/login")), Route::Dashboard {});
    }
}
