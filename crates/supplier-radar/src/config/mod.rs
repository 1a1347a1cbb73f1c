use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::workflows::comparison::{
    CaveatPolicy, ClassificationPolicy, ComparisonConfig, ScoringPolicyKind, UnknownMarkers,
};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub comparison: ComparisonConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            comparison: load_comparison()?,
        })
    }
}

fn load_comparison() -> Result<ComparisonConfig, ConfigError> {
    let scoring_policy = policy_var("RADAR_SCORING_POLICY", ScoringPolicyKind::from_name)?;
    let classification_policy =
        policy_var("RADAR_CLASSIFICATION_POLICY", ClassificationPolicy::from_name)?;
    let caveat_policy = policy_var("RADAR_CAVEAT_POLICY", CaveatPolicy::from_name)?;

    let unknown_markers = match env::var("RADAR_UNKNOWN_MARKERS") {
        Ok(raw) if !raw.trim().is_empty() => UnknownMarkers::parse_list(&raw),
        _ => UnknownMarkers::default(),
    };

    let certification_tiers = table_var("RADAR_CERTIFICATION_MAP")?;
    let transparency_weights = table_var("RADAR_TRANSPARENCY_WEIGHTS")?.unwrap_or_default();

    Ok(ComparisonConfig {
        scoring_policy,
        classification_policy,
        caveat_policy,
        unknown_markers,
        certification_tiers,
        transparency_weights,
    })
}

/// Unset or blank keeps the default policy; anything unrecognized is rejected.
fn policy_var<T: Default>(
    key: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            parse(&raw).ok_or(ConfigError::InvalidPolicy { key, value: raw })
        }
        _ => Ok(T::default()),
    }
}

/// Reads the JSON table whose path is stored in `key`; unset or blank yields `None`.
fn table_var<T: DeserializeOwned>(key: &'static str) -> Result<Option<T>, ConfigError> {
    let path = match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => return Ok(None),
    };
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) => return Err(ConfigError::TableRead { key, path, source }),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::TableParse { key, path, source })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPolicy {
        key: &'static str,
        value: String,
    },
    TableRead {
        key: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    TableParse {
        key: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPolicy { key, value } => {
                write!(f, "{key} has unrecognized value '{value}'")
            }
            ConfigError::TableRead { key, path, .. } => {
                write!(f, "unable to read {key} file {}", path.display())
            }
            ConfigError::TableParse { key, path, .. } => {
                write!(f, "{key} file {} is not valid JSON", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPolicy { .. } => None,
            ConfigError::TableRead { source, .. } => Some(source),
            ConfigError::TableParse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("RADAR_SCORING_POLICY");
        env::remove_var("RADAR_CLASSIFICATION_POLICY");
        env::remove_var("RADAR_CAVEAT_POLICY");
        env::remove_var("RADAR_UNKNOWN_MARKERS");
        env::remove_var("RADAR_CERTIFICATION_MAP");
        env::remove_var("RADAR_TRANSPARENCY_WEIGHTS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.comparison, ComparisonConfig::default());
    }

    #[test]
    fn policies_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("RADAR_SCORING_POLICY", "min-max");
        env::set_var("RADAR_CLASSIFICATION_POLICY", "any-blend");
        env::set_var("RADAR_CAVEAT_POLICY", "low-weight-low-score");
        env::set_var("RADAR_UNKNOWN_MARKERS", "unknown, n/a");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.comparison.scoring_policy, ScoringPolicyKind::MinMax);
        assert_eq!(
            config.comparison.classification_policy,
            ClassificationPolicy::AnyBlend
        );
        assert_eq!(
            config.comparison.caveat_policy,
            CaveatPolicy::LowWeightLowScore
        );
        assert!(config.comparison.unknown_markers.is_unknown(Some("N/A")));
    }

    #[test]
    fn rejects_unknown_policy_name() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RADAR_SCORING_POLICY", "zscore");

        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidPolicy { key, value }) => {
                assert_eq!(key, "RADAR_SCORING_POLICY");
                assert_eq!(value, "zscore");
            }
            other => panic!("expected invalid policy, got {other:?}"),
        }
    }

    #[test]
    fn missing_certification_map_is_an_error() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RADAR_CERTIFICATION_MAP", "/nonexistent/certifications.json");

        let result = AppConfig::load();
        reset_env();

        assert!(matches!(
            result,
            Err(ConfigError::TableRead {
                key: "RADAR_CERTIFICATION_MAP",
                ..
            })
        ));
    }

    #[test]
    fn transparency_weights_load_from_json_file() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = env::temp_dir().join(format!(
            "supplier-radar-transparency-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"levels": {"none": 0.5, "audits_verified": 1.0}, "max_score": 8}"#)
            .expect("table written");
        env::set_var("RADAR_TRANSPARENCY_WEIGHTS", &path);

        let config = AppConfig::load().expect("config loads");
        reset_env();
        std::fs::remove_file(&path).ok();

        let weights = &config.comparison.transparency_weights;
        assert_eq!(weights.max_score, 8.0);
        assert_eq!(weights.weight(Some("country_only")), 0.5);
        assert_eq!(weights.weight(Some("audits_verified")), 1.0);
    }

    #[test]
    fn malformed_transparency_weights_are_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = env::temp_dir().join(format!(
            "supplier-radar-transparency-bad-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "levels: none").expect("table written");
        env::set_var("RADAR_TRANSPARENCY_WEIGHTS", &path);

        let result = AppConfig::load();
        reset_env();
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(ConfigError::TableParse {
                key: "RADAR_TRANSPARENCY_WEIGHTS",
                ..
            })
        ));
    }
}
