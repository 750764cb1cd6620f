// SPDX-License-Identifier: AGPL-3.0-or-later
//! Optional TOML configuration for the command-line front end

use preguntero_core::{ParseConfig, RenderConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "preguntero.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", config_path.display())]
    Missing { config_path: PathBuf },

    #[error("Failed to read config file at {}: {source}", config_path.display())]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", config_path.display())]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// `[parse]` and `[render]` tables; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub parse: ParseConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Load from a file, `None` when it does not exist
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(Some(config))
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used when present and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path)?.ok_or_else(|| ConfigError::Missing {
                config_path: path.to_path_buf(),
            }),
            None => Ok(Self::load_from_path(DEFAULT_CONFIG_FILE)?.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preguntero_core::PageGeometry;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("preguntero.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = AppConfig::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[parse]
answer_label = "**Answer:**"

[render]
language = "en"

[render.page]
margin_left = 36.0
"#,
        );
        let config = AppConfig::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config.parse.answer_label, "**Answer:**");
        assert_eq!(config.render.language, "en");
        assert_eq!(config.render.answer_label, RenderConfig::default().answer_label);
        assert_eq!(config.render.page.margin_left, 36.0);
        assert_eq!(config.render.page.width, PageGeometry::LETTER.width);
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        assert_eq!(AppConfig::load_from_path(&path).unwrap(), Some(AppConfig::default()));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[render\nlanguage = ");
        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::resolve(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_explicit_path_loads() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[render]\ndocument_title = \"Sheet\"\n");
        let config = AppConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.render.document_title, "Sheet");
    }
}
