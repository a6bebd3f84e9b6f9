//! Service configuration.
//!
//! Loaded from YAML; every field is optional:
//!
//! ```yaml
//! max_divisions: 64
//! reference_divisions: 64
//! default_space: display-p3
//! default_illuminant: d65
//! store:
//!   kind: file
//!   path: /var/cache/gamut
//! ```

use gamut_geometry::MAX_DIVISIONS;
use gamut_primaries::{ColorSpace, Illuminant};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was tried.
        path: PathBuf,
    },

    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where cache records live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Process memory; lost on exit.
    #[default]
    Memory,
    /// JSON documents under a directory.
    File {
        /// Store directory.
        path: PathBuf,
    },
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GamutConfig {
    /// Upper bound for requested divisions.
    pub max_divisions: u32,
    /// Divisions of the reference lattice; `max_divisions` when unset.
    pub reference_divisions: Option<u32>,
    /// Record store.
    pub store: StoreConfig,
    /// Space used when a request names none.
    pub default_space: ColorSpace,
    /// Illuminant used when a request names none.
    pub default_illuminant: Illuminant,
}

impl Default for GamutConfig {
    fn default() -> Self {
        Self {
            max_divisions: 64,
            reference_divisions: None,
            store: StoreConfig::Memory,
            default_space: ColorSpace::Srgb,
            default_illuminant: Illuminant::D65,
        }
    }
}

impl GamutConfig {
    /// Loads and validates a YAML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConfigNotFound`] for a missing file, otherwise I/O,
    /// parse or range errors.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates YAML text.
    ///
    /// # Errors
    ///
    /// Parse or range errors.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid, all-default config.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Divisions of the reference lattice.
    pub fn reference_divisions(&self) -> u32 {
        self.reference_divisions.unwrap_or(self.max_divisions)
    }

    /// Checks division bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when a division count is outside
    /// `1..=MAX_DIVISIONS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_divisions", self.max_divisions),
            ("reference_divisions", self.reference_divisions()),
        ] {
            if value == 0 || value > MAX_DIVISIONS {
                return Err(ConfigError::Invalid(format!(
                    "{name} = {value}, expected 1..={MAX_DIVISIONS}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GamutConfig::from_yaml_str("").unwrap();
        assert_eq!(c, GamutConfig::default());
        assert_eq!(c.reference_divisions(), 64);
    }

    #[test]
    fn test_full_yaml() {
        let c = GamutConfig::from_yaml_str(
            "max_divisions: 32\nreference_divisions: 16\ndefault_space: pro-photo\n\
             default_illuminant: d50\nstore:\n  kind: file\n  path: /tmp/gamut\n",
        )
        .unwrap();
        assert_eq!(c.max_divisions, 32);
        assert_eq!(c.reference_divisions(), 16);
        assert_eq!(c.default_space, ColorSpace::ProPhoto);
        assert_eq!(c.default_illuminant, Illuminant::D50);
        assert_eq!(c.store, StoreConfig::File { path: PathBuf::from("/tmp/gamut") });
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(GamutConfig::from_yaml_str("max_divisions: 0"), Err(ConfigError::Invalid(_))));
        assert!(matches!(GamutConfig::from_yaml_str("default_space: rec2020"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = GamutConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamut.yaml");
        std::fs::write(&path, "max_divisions: 8\n").unwrap();
        assert_eq!(GamutConfig::from_file(&path).unwrap().max_divisions, 8);
    }
}
