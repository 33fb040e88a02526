use dioxus::prelude::*;
use shared_types::{category_label, t, JobResponse, Msg};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::format::{excerpt, short_date};
use crate::i18n::use_lang;
use crate::routes::Route;

/// Public listing card linking to the job page.
#[component]
pub fn JobCard(job: JobResponse) -> Element {
    let lang = use_lang();
    let title = job.localized_title(lang).to_string();
    let summary = excerpt(job.localized_description(lang), 160);
    let posted_label = t(lang, Msg::Posted);
    let posted = short_date(job.approved_at.as_deref().unwrap_or(&job.created_at)).to_string();

    rsx! {
        Link { to: Route::JobDetail { id: job.id.clone() }, class: "job-card-link",
            Card { class: "job-card",
                CardHeader {
                    CardTitle { "{title}" }
                    Badge { variant: BadgeVariant::Primary, {job.job_type.label(lang)} }
                    CardDescription { "{job.company_name} · {job.location}" }
                }
                CardContent {
                    p { class: "job-card-summary", "{summary}" }
                    div { class: "job-card-meta",
                        Badge { variant: BadgeVariant::Secondary, {category_label(&job.category, lang)} }
                        if job.is_remote {
                            Badge { variant: BadgeVariant::Outline, {t(lang, Msg::Remote)} }
                        }
                        if let Some(salary) = job.salary_label() {
                            span { class: "job-card-salary", "{salary}" }
                        }
                        span { class: "job-card-date", "{posted_label}: {posted}" }
                    }
                }
            }
        }
    }
}
