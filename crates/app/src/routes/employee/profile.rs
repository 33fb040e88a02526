use dioxus::prelude::*;
use shared_types::{
    parse_skills, t, EmployeeProfile, LoadState, Msg, UpdateEmployeeProfileRequest,
};
use shared_ui::{
    use_toast, BadgeList, BadgeVariant, Button, Card, CardContent, ErrorState, Form, FormActions,
    FormNotice, FormRow, Input, LoadingState, PageHeader, PageTitle, Textarea, ToastOptions,
};

use crate::format::{non_blank, FormErrors};
use crate::i18n::use_lang;

#[component]
pub fn EmployeeProfilePage() -> Element {
    let lang = use_lang();
    let mut profile = use_resource(server::api::employee_get_profile);
    let state = LoadState::from_fetch(lang, profile.read().as_ref(), |_: &EmployeeProfile| false);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Profile)} }
        }
        match state {
            LoadState::Loading | LoadState::Empty => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| profile.restart() }
            },
            LoadState::Ready(current) => rsx! { ProfileForm { profile: current } },
        }
    }
}

/// Form fields as typed. Skills are one comma-separated line and
/// experience a raw number string.
#[derive(Debug, Clone, Default, PartialEq)]
struct ProfileDraft {
    full_name: String,
    headline: String,
    location: String,
    skills: String,
    experience_years: String,
    resume_url: String,
    bio: String,
}

impl From<&EmployeeProfile> for ProfileDraft {
    fn from(p: &EmployeeProfile) -> Self {
        Self {
            full_name: p.full_name.clone(),
            headline: p.headline.clone().unwrap_or_default(),
            location: p.location.clone().unwrap_or_default(),
            skills: p.skills.join(", "),
            experience_years: p.experience_years.map(|y| y.to_string()).unwrap_or_default(),
            resume_url: p.resume_url.clone().unwrap_or_default(),
            bio: p.bio.clone().unwrap_or_default(),
        }
    }
}

impl ProfileDraft {
    fn to_request(&self) -> Result<UpdateEmployeeProfileRequest, FormErrors> {
        let experience_years = match self.experience_years.trim() {
            "" => None,
            raw => match raw.parse::<i32>() {
                Ok(years) => Some(years),
                Err(_) => {
                    let mut errors = FormErrors::default();
                    errors
                        .fields
                        .insert("experience_years".to_string(), "Enter a whole number".to_string());
                    return Err(errors);
                }
            },
        };
        Ok(UpdateEmployeeProfileRequest {
            full_name: self.full_name.trim().to_string(),
            headline: non_blank(&self.headline),
            location: non_blank(&self.location),
            skills: parse_skills(&self.skills),
            experience_years,
            resume_url: non_blank(&self.resume_url),
            bio: non_blank(&self.bio),
        })
    }
}

#[component]
fn ProfileForm(profile: EmployeeProfile) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut draft = use_signal(|| ProfileDraft::from(&profile));
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let handle_save = move |_: FormEvent| async move {
        let req = match draft.read().to_request() {
            Ok(req) => req,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        saving.set(true);
        errors.set(FormErrors::default());
        match server::api::employee_update_profile(req).await {
            Ok(saved) => {
                draft.set(ProfileDraft::from(&saved));
                toast.success(t(lang, Msg::ProfileSaved).to_string(), ToastOptions::new());
            }
            Err(e) => errors.set(FormErrors::from_server(lang, &e.to_string())),
        }
        saving.set(false);
    };

    let skills_preview = parse_skills(&draft.read().skills);

    rsx! {
        Card {
            CardContent {
                if let Some(banner) = errors.read().banner.clone() {
                    FormNotice { success: false, message: banner }
                }
                Form { onsubmit: handle_save,
                    FormRow {
                        Input {
                            label: t(lang, Msg::FullName),
                            value: draft.read().full_name.clone(),
                            required: true,
                            error: errors.read().field("full_name"),
                            on_input: move |evt: FormEvent| draft.write().full_name = evt.value(),
                        }
                        Input {
                            label: t(lang, Msg::Headline),
                            value: draft.read().headline.clone(),
                            on_input: move |evt: FormEvent| draft.write().headline = evt.value(),
                        }
                    }
                    FormRow {
                        Input {
                            label: t(lang, Msg::Location),
                            value: draft.read().location.clone(),
                            on_input: move |evt: FormEvent| draft.write().location = evt.value(),
                        }
                        Input {
                            label: t(lang, Msg::ExperienceYears),
                            input_type: "number",
                            value: draft.read().experience_years.clone(),
                            error: errors.read().field("experience_years"),
                            on_input: move |evt: FormEvent| draft.write().experience_years = evt.value(),
                        }
                    }
                    Input {
                        label: t(lang, Msg::Skills),
                        hint: t(lang, Msg::SkillsHint).to_string(),
                        value: draft.read().skills.clone(),
                        on_input: move |evt: FormEvent| draft.write().skills = evt.value(),
                    }
                    if !skills_preview.is_empty() {
                        BadgeList { items: skills_preview, variant: BadgeVariant::Secondary }
                    }
                    Input {
                        label: t(lang, Msg::ResumeUrl),
                        input_type: "url",
                        value: draft.read().resume_url.clone(),
                        error: errors.read().field("resume_url"),
                        on_input: move |evt: FormEvent| draft.write().resume_url = evt.value(),
                    }
                    Textarea {
                        label: t(lang, Msg::Bio),
                        value: draft.read().bio.clone(),
                        rows: 5,
                        on_input: move |evt: FormEvent| draft.write().bio = evt.value(),
                    }
                    FormActions {
                        Button { submit: true, loading: saving(), {t(lang, Msg::Save)} }
                    }
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
    fn skills_line_is_split_on_both_comma_styles() {
        let draft = ProfileDraft {
            full_name: "Sara".into(),
            skills: "Rust, SQL،  Arabic ,".into(),
            ..Default::default()
        };
        let req = draft.to_request().unwrap();
        assert_eq!(req.skills, vec!["Rust", "SQL", "Arabic"]);
        assert_eq!(req.headline, None);
        assert_eq!(req.experience_years, None);
    }

    #[test]
    fn non_numeric_experience_is_a_field_error() {
        let draft = ProfileDraft {
            full_name: "Sara".into(),
            experience_years: "five".into(),
            ..Default::default()
        };
        let errors = draft.to_request().unwrap_err();
        assert!(errors.field("experience_years").is_some());
    }
}
