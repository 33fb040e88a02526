use dioxus::prelude::*;
use shared_types::{t, CompanyProfile, LoadState, Msg, UpdateCompanyProfileRequest, COMPANY_SIZES};
use shared_ui::{
    use_toast, Button, Card, CardContent, ErrorState, Form, FormActions, FormNotice, FormRow,
    FormSelect, Input, LoadingState, PageHeader, PageSubtitle, PageTitle, Textarea, ToastOptions,
};

use crate::format::{non_blank, FormErrors};
use crate::i18n::use_lang;

#[component]
pub fn EmployerCompany() -> Element {
    let lang = use_lang();
    let mut company = use_resource(server::api::employer_get_company);
    let state = LoadState::from_fetch(lang, company.read().as_ref(), |_: &CompanyProfile| false);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::CompanyProfile)} }
        }
        match state {
            LoadState::Loading | LoadState::Empty => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| company.restart() }
            },
            LoadState::Ready(profile) => rsx! {
                PageSubtitle { {profile.localized_name(lang).to_string()} }
                CompanyForm { initial: UpdateCompanyProfileRequest::from(&profile) }
            },
        }
    }
}

/// Optional text fields are sent as `None` when left blank.
fn cleaned(form: &UpdateCompanyProfileRequest) -> UpdateCompanyProfileRequest {
    let opt = |v: &Option<String>| v.as_deref().and_then(non_blank);
    UpdateCompanyProfileRequest {
        name: form.name.trim().to_string(),
        name_ar: opt(&form.name_ar),
        industry: opt(&form.industry),
        size: opt(&form.size),
        website: opt(&form.website),
        location: opt(&form.location),
        description: opt(&form.description),
        description_ar: opt(&form.description_ar),
        logo_url: opt(&form.logo_url),
    }
}

#[component]
fn CompanyForm(initial: UpdateCompanyProfileRequest) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut form = use_signal(|| initial.clone());
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let handle_save = move |_: FormEvent| async move {
        saving.set(true);
        errors.set(FormErrors::default());
        let req = cleaned(&form.read());
        match server::api::employer_update_company(req).await {
            Ok(saved) => {
                form.set(UpdateCompanyProfileRequest::from(&saved));
                toast.success(t(lang, Msg::ProfileSaved).to_string(), ToastOptions::new());
            }
            Err(e) => errors.set(FormErrors::from_server(lang, &e.to_string())),
        }
        saving.set(false);
    };

    let text = move |value: &Option<String>| value.clone().unwrap_or_default();

    rsx! {
        Card {
            CardContent {
                if let Some(banner) = errors.read().banner.clone() {
                    FormNotice { success: false, message: banner }
                }
                Form { onsubmit: handle_save,
                    FormRow {
                        Input {
                            label: t(lang, Msg::Name),
                            value: form.read().name.clone(),
                            required: true,
                            error: errors.read().field("name"),
                            on_input: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                        Input {
                            label: t(lang, Msg::NameAr),
                            value: text(&form.read().name_ar),
                            dir: "rtl",
                            on_input: move |evt: FormEvent| form.write().name_ar = Some(evt.value()),
                        }
                    }
                    FormRow {
                        Input {
                            label: t(lang, Msg::Industry),
                            value: text(&form.read().industry),
                            on_input: move |evt: FormEvent| form.write().industry = Some(evt.value()),
                        }
                        FormSelect {
                            label: t(lang, Msg::CompanySize),
                            value: text(&form.read().size),
                            onchange: move |evt: Event<FormData>| form.write().size = Some(evt.value()),
                            option { value: "", "—" }
                            for size in COMPANY_SIZES.iter().copied() {
                                option {
                                    value: size,
                                    selected: form.read().size.as_deref() == Some(size),
                                    "{size}"
                                }
                            }
                        }
                        Input {
                            label: t(lang, Msg::Location),
                            value: text(&form.read().location),
                            on_input: move |evt: FormEvent| form.write().location = Some(evt.value()),
                        }
                    }
                    FormRow {
                        Input {
                            label: t(lang, Msg::Website),
                            input_type: "url",
                            value: text(&form.read().website),
                            error: errors.read().field("website"),
                            on_input: move |evt: FormEvent| form.write().website = Some(evt.value()),
                        }
                        Input {
                            label: t(lang, Msg::LogoUrl),
                            input_type: "url",
                            value: text(&form.read().logo_url),
                            error: errors.read().field("logo_url"),
                            on_input: move |evt: FormEvent| form.write().logo_url = Some(evt.value()),
                        }
                    }
                    Textarea {
                        label: t(lang, Msg::Description),
                        value: text(&form.read().description),
                        rows: 5,
                        on_input: move |evt: FormEvent| form.write().description = Some(evt.value()),
                    }
                    Textarea {
                        label: t(lang, Msg::DescriptionAr),
                        value: text(&form.read().description_ar),
                        rows: 5,
                        dir: "rtl",
                        on_input: move |evt: FormEvent| form.write().description_ar = Some(evt.value()),
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
    fn blank_optional_fields_become_none() {
        let form = UpdateCompanyProfileRequest {
            name: " Acme ".into(),
            website: Some("  ".into()),
            industry: Some(" Retail ".into()),
            ..Default::default()
        };
        let req = cleaned(&form);
        assert_eq!(req.name, "Acme");
        assert_eq!(req.website, None);
        assert_eq!(req.industry.as_deref(), Some("Retail"));
    }
}
