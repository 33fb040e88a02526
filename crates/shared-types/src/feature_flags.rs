use serde::{Deserialize, Serialize};

/// Optional behaviours of a deployment, read from the `[features]` table
/// of `config.toml`. Anything not listed is off, so an empty file gives an
/// open board without tracing export or throttling.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    /// Export request spans over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Throttle login, registration and the contact form per client.
    #[serde(default)]
    pub rate_limit: bool,
    /// Refuse self-service sign-up; accounts are created by an operator.
    #[serde(default)]
    pub invite_only: bool,
}

/// `config.toml` as a whole. Unknown tables are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

impl FeatureFlags {
    /// Whether the public register page and endpoint accept sign-ups.
    pub fn registration_open(&self) -> bool {
        !self.invite_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_an_open_board() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert!(config.features.registration_open());
    }

    #[test]
    fn invite_only_closes_registration() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            invite_only = true

            [mail]
            from = "jobs@example.com"
            "#,
        )
        .unwrap();
        assert!(!config.features.registration_open());
        assert!(!config.features.rate_limit);
    }

    #[test]
    fn flags_sent_to_clients_tolerate_missing_fields() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"rate_limit":true}"#).unwrap();
        assert!(flags.rate_limit);
        assert!(!flags.telemetry);
        assert!(flags.registration_open());
    }
}
