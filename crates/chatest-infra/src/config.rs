//! Data directory and configuration loading for Chatest.
//!
//! Reads `config.toml` from the data directory (`~/.chatest/` by default)
//! and deserializes it into [`AppConfig`]. A missing file means defaults; a
//! file that cannot be read or parsed is reported as a [`ConfigError`] so the
//! caller can warn once logging is up.

use std::path::{Path, PathBuf};

use chatest_types::config::AppConfig;

use crate::sqlite::pool::database_url_for;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CHATEST_DATA_DIR";

/// Resolve the data directory: `$CHATEST_DATA_DIR`, else `~/.chatest`,
/// else `./.chatest` when no home directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chatest")
}

/// A `config.toml` that exists but could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// A missing file yields [`AppConfig::default()`].
pub async fn load_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// [`load_config`], falling back to defaults on error.
///
/// Runs before the tracing subscriber exists, so the error is handed back
/// for the caller to log after initialization.
pub async fn load_config_or_default(data_dir: &Path) -> (AppConfig, Option<ConfigError>) {
    match load_config(data_dir).await {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}

/// The database URL to connect to: the configured override, or
/// `{data_dir}/chatest.db`.
pub fn resolve_database_url(config: &AppConfig, data_dir: &Path) -> String {
    config
        .database_url
        .clone()
        .unwrap_or_else(|| database_url_for(data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await.unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.log.level, "warn");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
database_url = "sqlite://elsewhere.db"

[log]
level = "debug"
otel = true
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await.unwrap();
        assert_eq!(config.database_url.as_deref(), Some("sqlite://elsewhere.db"));
        assert_eq!(config.log.level, "debug");
        assert!(config.log.otel);
        assert!(!config.log.json);
    }

    #[tokio::test]
    async fn load_config_malformed_toml_is_reported() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "log = [[[")
            .await
            .unwrap();

        let err = load_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse "));
        assert!(err.to_string().contains("config.toml"));
    }

    #[tokio::test]
    async fn load_config_unreadable_path_is_reported() {
        let tmp = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text
        tokio::fs::create_dir(tmp.path().join("config.toml"))
            .await
            .unwrap();

        let err = load_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn load_config_or_default_keeps_the_error() {
        let tmp = TempDir::new().unwrap();
        let (config, err) = load_config_or_default(tmp.path()).await;
        assert!(err.is_none());
        assert_eq!(config.log.level, "warn");

        tokio::fs::write(tmp.path().join("config.toml"), "log = [[[")
            .await
            .unwrap();
        let (config, err) = load_config_or_default(tmp.path()).await;
        assert!(matches!(err, Some(ConfigError::Parse { .. })));
        assert!(config.database_url.is_none());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn resolve_database_url_prefers_override() {
        let dir = Path::new("/data");
        let mut config = AppConfig::default();
        assert_eq!(
            resolve_database_url(&config, dir),
            "sqlite:///data/chatest.db?mode=rwc"
        );

        config.database_url = Some("sqlite://custom.db".to_string());
        assert_eq!(resolve_database_url(&config, dir), "sqlite://custom.db");
    }
}
