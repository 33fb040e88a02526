use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CompanyProfileRow {
    pub user_id: i64,
    pub name: String,
    pub name_ar: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub logo_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Employer's public company profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CompanyProfile {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<CompanyProfileRow> for CompanyProfile {
    fn from(r: CompanyProfileRow) -> Self {
        Self {
            user_id: r.user_id,
            name: r.name,
            name_ar: r.name_ar,
            industry: r.industry,
            size: r.size,
            website: r.website,
            location: r.location,
            description: r.description,
            description_ar: r.description_ar,
            logo_url: r.logo_url,
            updated_at: Some(r.updated_at.to_rfc3339()),
        }
    }
}

impl CompanyProfile {
    pub fn localized_name(&self, lang: Lang) -> &str {
        match (lang, self.name_ar.as_deref().map(str::trim)) {
            (Lang::Ar, Some(ar)) if !ar.is_empty() => ar,
            _ => &self.name,
        }
    }
}

/// Company sizes offered in the profile form.
pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct UpdateCompanyProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 200, message = "Company name is required"))
    )]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Website must be a valid URL"))
    )]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Logo must be a valid URL"))
    )]
    pub logo_url: Option<String>,
}

impl From<&CompanyProfile> for UpdateCompanyProfileRequest {
    fn from(p: &CompanyProfile) -> Self {
        Self {
            name: p.name.clone(),
            name_ar: p.name_ar.clone(),
            industry: p.industry.clone(),
            size: p.size.clone(),
            website: p.website.clone(),
            location: p.location.clone(),
            description: p.description.clone(),
            description_ar: p.description_ar.clone(),
            logo_url: p.logo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_name_prefers_arabic_when_present() {
        let mut profile = CompanyProfile {
            name: "Desert Labs".into(),
            ..Default::default()
        };
        assert_eq!(profile.localized_name(Lang::Ar), "Desert Labs");
        profile.name_ar = Some("مختبرات الصحراء".into());
        assert_eq!(profile.localized_name(Lang::Ar), "مختبرات الصحراء");
        assert_eq!(profile.localized_name(Lang::En), "Desert Labs");
    }

    #[test]
    fn missing_profile_fields_deserialize_as_none() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"user_id":3,"name":"Acme"}"#).unwrap();
        assert_eq!(profile.website, None);
        assert_eq!(profile.updated_at, None);
    }
}
