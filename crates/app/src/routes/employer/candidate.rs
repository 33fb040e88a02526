use dioxus::prelude::*;
use shared_types::{
    t, AppError, ApplicationAction, ApplicationStatus, CandidateResponse, LoadState, Msg,
    UserRole,
};
use shared_ui::{
    use_toast, BadgeList, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, ErrorState, LoadingState, PageHeader, PageSubtitle, PageTitle,
    Textarea, ToastOptions,
};

use crate::components::ApplicationStatusBadge;
use crate::format::{non_blank, short_date};
use crate::i18n::use_lang;
use crate::routes::Route;

/// One applicant: their application, their profile, and the pipeline moves.
#[component]
pub fn EmployerCandidate(id: String) -> Element {
    let lang = use_lang();
    let application_id = use_signal(|| id.clone());
    let mut candidate =
        use_resource(move || async move { server::api::employer_get_candidate(application_id()).await });
    let state = LoadState::from_fetch(lang, candidate.read().as_ref(), |_: &CandidateResponse| false);

    rsx! {
        match state {
            LoadState::Loading | LoadState::Empty => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| candidate.restart() }
                Link { to: Route::EmployerApplications { job: None }, {t(lang, Msg::Applications)} }
            },
            LoadState::Ready(data) => rsx! {
                CandidateView { data, on_changed: move |_| candidate.restart() }
            },
        }
    }
}

#[component]
fn CandidateView(data: CandidateResponse, on_changed: EventHandler<()>) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let app = data.application.clone();
    let mut note = use_signal(|| app.employer_note.clone().unwrap_or_default());
    let mut busy = use_signal(|| false);
    let application_id = use_signal(|| app.id.clone());
    let actions = ApplicationAction::for_viewer(UserRole::Employer, app.status);
    let has_actions = !actions.is_empty();
    let applied_on = short_date(&app.created_at).to_string();

    let mut advance = move |next: ApplicationStatus| {
        busy.set(true);
        let note_text = non_blank(&note.read());
        spawn(async move {
            match server::api::employer_update_application_status(application_id(), next, note_text).await {
                Ok(_) => {
                    toast.success(t(lang, Msg::ApplicationUpdated).to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
            }
            busy.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "{app.applicant_name}" }
            PageSubtitle {
                {app.localized_job_title(lang).to_string()}
                " · "
                ApplicationStatusBadge { status: app.status }
            }
        }

        div { class: "candidate-layout",
            Card {
                CardHeader {
                    CardTitle { {t(lang, Msg::Candidate)} }
                }
                CardContent {
                    dl { class: "detail-list",
                        dt { {t(lang, Msg::Email)} }
                        dd { a { href: "mailto:{app.applicant_email}", "{app.applicant_email}" } }
                        dt { {t(lang, Msg::AppliedOn)} }
                        dd { "{applied_on}" }
                        if let Some(url) = app.resume_url.clone() {
                            dt { {t(lang, Msg::ResumeUrl)} }
                            dd { a { href: "{url}", target: "_blank", rel: "noopener", "{url}" } }
                        }
                    }
                    if let Some(letter) = app.cover_letter.clone() {
                        h3 { {t(lang, Msg::CoverLetter)} }
                        p { class: "cover-letter", "{letter}" }
                    }
                }
            }

            if let Some(profile) = data.profile.clone() {
                Card {
                    CardHeader {
                        CardTitle { "{profile.full_name}" }
                        if let Some(headline) = profile.headline.clone() {
                            p { class: "profile-headline", "{headline}" }
                        }
                    }
                    CardContent {
                        dl { class: "detail-list",
                            if let Some(location) = profile.location.clone() {
                                dt { {t(lang, Msg::Location)} }
                                dd { "{location}" }
                            }
                            if let Some(years) = profile.experience_years {
                                dt { {t(lang, Msg::ExperienceYears)} }
                                dd { "{years}" }
                            }
                        }
                        if !profile.skills.is_empty() {
                            h3 { {t(lang, Msg::Skills)} }
                            BadgeList { items: profile.skills.clone(), variant: BadgeVariant::Secondary }
                        }
                        if let Some(bio) = profile.bio.clone() {
                            h3 { {t(lang, Msg::Bio)} }
                            p { "{bio}" }
                        }
                    }
                }
            }

            if has_actions {
                Card {
                    CardContent {
                        Textarea {
                            label: t(lang, Msg::EmployerNote),
                            value: note(),
                            rows: 3,
                            on_input: move |evt: FormEvent| note.set(evt.value()),
                        }
                    }
                    CardFooter {
                        for action in actions {
                            if let ApplicationAction::Advance(next) = action {
                                Button {
                                    variant: if next == ApplicationStatus::Rejected { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                                    disabled: busy(),
                                    onclick: move |_| advance(next),
                                    {next.action_label(lang)}
                                }
                            }
                        }
                    }
                }
            }
            if !has_actions {
                if let Some(saved_note) = app.employer_note.clone() {
                    Card {
                        CardHeader {
                            CardTitle { {t(lang, Msg::EmployerNote)} }
                        }
                        CardContent {
                            p { "{saved_note}" }
                        }
                    }
                }
            }
        }
    }
}
