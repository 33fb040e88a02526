pub mod admin;
pub mod dashboard;
pub mod employee;
pub mod employer;
pub mod public;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdClock, LdFileText, LdFolder, LdLayoutDashboard, LdSearch,
    LdSettings, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{t, FeatureFlags, Msg, UserRole};
use shared_ui::{use_toast, EmptyState, ToastOptions};

use crate::auth::use_auth;
use crate::i18n::{use_lang, LangToggle};

use admin::{AdminAnalytics, AdminContacts, AdminJobs, AdminPendingJobs, AdminUsers};
use dashboard::Dashboard;
use employee::{EmployeeApplications, EmployeeProfilePage, EmployeeSavedJobs};
use employer::{
    EmployerApplications, EmployerCandidate, EmployerCompany, EmployerJobEdit, EmployerJobNew,
    EmployerJobs,
};
use public::{Contact, Home, JobDetail, Jobs, Login, NotFound, Register};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PublicLayout)]
    #[route("/")]
    Home {},
    #[route("/jobs?:q&:category")]
    Jobs {
        q: Option<String>,
        category: Option<String>,
    },
    #[route("/jobs/:id")]
    JobDetail { id: String },
    #[route("/contact")]
    Contact {},
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/register")]
    Register {},
    #[end_layout]
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
    #[route("/dashboard")]
    Dashboard {},
    // ── Admin ──
    #[route("/admin/jobs")]
    AdminJobs {},
    #[route("/admin/jobs/pending")]
    AdminPendingJobs {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/contacts")]
    AdminContacts {},
    #[route("/admin/analytics")]
    AdminAnalytics {},
    // ── Employer ──
    #[route("/employer/jobs")]
    EmployerJobs {},
    #[route("/employer/jobs/new")]
    EmployerJobNew {},
    #[route("/employer/jobs/:id/edit")]
    EmployerJobEdit { id: String },
    #[route("/employer/applications?:job")]
    EmployerApplications { job: Option<String> },
    #[route("/employer/applications/:id")]
    EmployerCandidate { id: String },
    #[route("/employer/company")]
    EmployerCompany {},
    // ── Employee ──
    #[route("/employee/applications")]
    EmployeeApplications {},
    #[route("/employee/saved")]
    EmployeeSavedJobs {},
    #[route("/employee/profile")]
    EmployeeProfilePage {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Role a dashboard route is reserved for; `None` for shared pages.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::AdminJobs {}
            | Route::AdminPendingJobs {}
            | Route::AdminUsers {}
            | Route::AdminContacts {}
            | Route::AdminAnalytics {} => Some(UserRole::Admin),
            Route::EmployerJobs {}
            | Route::EmployerJobNew {}
            | Route::EmployerJobEdit { .. }
            | Route::EmployerApplications { .. }
            | Route::EmployerCandidate { .. }
            | Route::EmployerCompany {} => Some(UserRole::Employer),
            Route::EmployeeApplications {}
            | Route::EmployeeSavedJobs {}
            | Route::EmployeeProfilePage {} => Some(UserRole::Employee),
            _ => None,
        }
    }
}

/// Public site chrome: top navigation, language toggle and footer.
#[component]
fn PublicLayout() -> Element {
    let lang = use_lang();
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();

    // Public pages never block on the session; a signed-in visitor just
    // gets their dashboard link once it resolves.
    let session = use_resource(move || async move { server::api::get_current_user().await });
    use_effect(move || {
        if let Some(Ok(Some(user))) = &*session.read() {
            if !auth.is_authenticated() {
                auth.set_user(user.clone());
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand", {t(lang, Msg::AppName)} }
            nav { class: "site-nav",
                Link { to: Route::Home {}, {t(lang, Msg::Home)} }
                Link { to: Route::Jobs { q: None, category: None }, {t(lang, Msg::Jobs)} }
                Link { to: Route::Contact {}, {t(lang, Msg::Contact)} }
            }
            div { class: "site-header-actions",
                LangToggle {}
                if auth.is_authenticated() {
                    Link { to: Route::Dashboard {}, class: "button-link", {t(lang, Msg::Dashboard)} }
                } else {
                    Link { to: Route::Login { redirect: None }, {t(lang, Msg::Login)} }
                    if flags.registration_open() {
                        Link { to: Route::Register {}, class: "button-link", {t(lang, Msg::Register)} }
                    }
                }
            }
        }
        main { class: "site-main", Outlet::<Route> {} }
        footer { class: "site-footer",
            span { {t(lang, Msg::AppName)} }
            Link { to: Route::Contact {}, {t(lang, Msg::Contact)} }
        }
    }
}

/// Auth guard layout: resolves the session on the server, redirects
/// visitors to /login with a return path.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let lang = use_lang();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().replace(Route::Login {
                redirect: Some(route.to_string()),
            });
            rsx! {
                div { class: "page-loading",
                    p { {t(lang, Msg::Loading)} }
                }
            }
        }
        None => rsx! {
            div { class: "page-loading",
                p { {t(lang, Msg::Loading)} }
            }
        },
    }
}

struct NavItem {
    to: Route,
    label: Msg,
    icon: fn() -> Element,
}

fn nav_items(role: UserRole) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        to: Route::Dashboard {},
        label: Msg::Dashboard,
        icon: || rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
    }];
    match role {
        UserRole::Admin => items.extend([
            NavItem {
                to: Route::AdminPendingJobs {},
                label: Msg::PendingJobs,
                icon: || rsx! { Icon { icon: LdClock, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::AdminJobs {},
                label: Msg::AllJobs,
                icon: || rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::AdminUsers {},
                label: Msg::Users,
                icon: || rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::AdminContacts {},
                label: Msg::Contacts,
                icon: || rsx! { Icon { icon: LdBell, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::AdminAnalytics {},
                label: Msg::Analytics,
                icon: || rsx! { Icon { icon: LdBookOpen, width: 18, height: 18 } },
            },
        ]),
        UserRole::Employer => items.extend([
            NavItem {
                to: Route::EmployerJobs {},
                label: Msg::MyJobs,
                icon: || rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::EmployerApplications { job: None },
                label: Msg::Applications,
                icon: || rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::EmployerCompany {},
                label: Msg::CompanyProfile,
                icon: || rsx! { Icon { icon: LdSettings, width: 18, height: 18 } },
            },
        ]),
        UserRole::Employee => items.extend([
            NavItem {
                to: Route::Jobs { q: None, category: None },
                label: Msg::Jobs,
                icon: || rsx! { Icon { icon: LdSearch, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::EmployeeApplications {},
                label: Msg::MyApplications,
                icon: || rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::EmployeeSavedJobs {},
                label: Msg::SavedJobs,
                icon: || rsx! { Icon { icon: LdFolder, width: 18, height: 18 } },
            },
            NavItem {
                to: Route::EmployeeProfilePage {},
                label: Msg::Profile,
                icon: || rsx! { Icon { icon: LdUserCheck, width: 18, height: 18 } },
            },
        ]),
        UserRole::Public => {}
    }
    items
}

/// Authenticated layout: role-aware sidebar plus a top bar. Pages reserved
/// for another role render a notice instead of their content.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let lang = use_lang();
    let flags: FeatureFlags = use_context();
    let mut auth = use_auth();
    let toast = use_toast();
    let role = auth.role();

    let display_name = auth.display_name();
    let allowed = auth.may_open(route.required_role());

    let handle_logout = move |_: MouseEvent| {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!(error = %e, "logout failed");
            }
            auth.clear_auth();
            toast.info(t(lang, Msg::LoggedOut).to_string(), ToastOptions::new());
            navigator().push(Route::Home {});
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "dashboard-shell",
            aside { class: "sidebar",
                Link { to: Route::Home {}, class: "sidebar-brand", {t(lang, Msg::AppName)} }
                nav { class: "sidebar-nav",
                    for item in nav_items(role) {
                        Link {
                            to: item.to.clone(),
                            class: if item.to == route { "sidebar-link active" } else { "sidebar-link" },
                            {(item.icon)()}
                            span { {t(lang, item.label)} }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    span { class: "sidebar-user", "{display_name}" }
                    span { class: "sidebar-role", {role.label(lang)} }
                }
            }
            div { class: "dashboard-main",
                header { class: "topbar",
                    div { class: "topbar-spacer" }
                    if !flags.registration_open() && role == UserRole::Admin {
                        span { class: "topbar-flag", "invite-only" }
                    }
                    LangToggle {}
                    button {
                        class: "topbar-logout",
                        r#type: "button",
                        onclick: handle_logout,
                        {t(lang, Msg::Logout)}
                    }
                }
                main { class: "dashboard-content",
                    if allowed {
                        Outlet::<Route> {}
                    } else {
                        EmptyState { lang, message: t(lang, Msg::Forbidden).to_string(),
                            Link { to: Route::Dashboard {}, {t(lang, Msg::Dashboard)} }
                        }
                    }
                }
            }
        }
    }
}
