use dioxus::prelude::*;
use shared_types::{ApplicationStatus, ContactStatus, JobStatus};
use shared_ui::Badge;

use crate::format::{application_status_variant, contact_status_variant, job_status_variant};
use crate::i18n::use_lang;

#[component]
pub fn JobStatusBadge(status: JobStatus) -> Element {
    let lang = use_lang();
    rsx! {
        Badge { variant: job_status_variant(status), {status.label(lang)} }
    }
}

#[component]
pub fn ApplicationStatusBadge(status: ApplicationStatus) -> Element {
    let lang = use_lang();
    rsx! {
        Badge { variant: application_status_variant(status), {status.label(lang)} }
    }
}

#[component]
pub fn ContactStatusBadge(status: ContactStatus) -> Element {
    let lang = use_lang();
    rsx! {
        Badge { variant: contact_status_variant(status), {status.label(lang)} }
    }
}
