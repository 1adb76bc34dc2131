//! Configuration types for Chatest.
//!
//! `AppConfig` represents the top-level `config.toml` in the data directory.
//! Every field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.chatest/config.toml` (or `$CHATEST_DATA_DIR/config.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite URL override. When unset, `{data_dir}/chatest.db` is used.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging and tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON objects instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Additionally export spans through OpenTelemetry, one line per span on stderr.
    #[serde(default)]
    pub otel: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            otel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert!(config.database_url.is_none());
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.json);
        assert!(!config.log.otel);
    }

    #[test]
    fn test_app_config_toml_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_app_config_toml_partial_log_section() {
        let config: AppConfig = toml::from_str(
            r#"
database_url = "sqlite:///tmp/chat.db"

[log]
json = true
"#,
        )
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("sqlite:///tmp/chat.db"));
        assert!(config.log.json);
        assert_eq!(config.log.level, "warn");
    }
}
