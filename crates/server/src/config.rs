use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse a `config.toml` body. Malformed input falls back to all-off flags.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}; all optional features off");
            FeatureFlags::default()
        }
    }
}

/// Read `config.toml` into the global flag set. Only the first call has effect.
///
/// A missing file leaves every optional feature off and registration open.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_feature_flags(&contents);
            eprintln!("[config] Feature flags: {flags:?}");
            flags
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}); all optional features off");
            FeatureFlags::default()
        }
    });
}

/// Loaded feature flags, or all-off defaults before `load_feature_flags()`.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        rate_limit: false,
        invite_only: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features_table() {
        let flags = parse_feature_flags(
            r#"
            [features]
            rate_limit = true
            "#,
        );
        assert!(flags.rate_limit);
        assert!(!flags.telemetry);
        assert!(!flags.invite_only);
    }

    #[test]
    fn malformed_config_turns_everything_off() {
        assert_eq!(parse_feature_flags("[features"), FeatureFlags::default());
    }
}
