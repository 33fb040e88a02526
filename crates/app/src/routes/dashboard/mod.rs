mod admin;
mod employee;
mod employer;

use dioxus::prelude::*;
use shared_types::UserRole;

use crate::auth::use_user_role;

/// `/dashboard`: overview for whichever role is signed in.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        match use_user_role() {
            UserRole::Admin => rsx! { admin::AdminOverview {} },
            UserRole::Employer => rsx! { employer::EmployerOverview {} },
            UserRole::Employee => rsx! { employee::EmployeeOverview {} },
            UserRole::Public => rsx! {},
        }
    }
}
