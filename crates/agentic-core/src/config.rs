use crate::error::{AgenticError, Result};
use crate::paths;
use crate::source::{BundledSource, ContentSource, HttpSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ConfigWarning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub message: String,
}

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Bundled,
    Remote,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project-level settings read from `.claude/agentic.yaml`. Every field is
/// optional in the file; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub skip_existing: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            skip_existing: false,
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.timeout_secs == 0 {
            warnings.push(ConfigWarning {
                message: "timeout_secs is 0; remote fetches would fail immediately".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            warnings.push(ConfigWarning {
                message: format!("base_url '{}' is not an http(s) URL", self.base_url),
            });
        }
        warnings
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the content source this config selects.
    pub fn open_source(&self) -> Result<Box<dyn ContentSource>> {
        match self.source {
            SourceKind::Bundled => Ok(Box::new(BundledSource)),
            SourceKind::Remote => {
                if self.timeout_secs == 0 {
                    return Err(AgenticError::InvalidConfig(
                        "timeout_secs must be greater than 0".to_string(),
                    ));
                }
                Ok(Box::new(HttpSource::new(&self.base_url, self.timeout())?))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
        std::fs::write(
            paths::config_path(dir.path()),
            "source: remote\nskip_existing: true\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.source, SourceKind::Remote);
        assert!(cfg.skip_existing);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
        std::fs::write(paths::config_path(dir.path()), "source: [nope\n").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(AgenticError::Yaml(_))
        ));
    }

    #[test]
    fn validate_flags_bad_values() {
        let cfg = Config {
            base_url: "ftp://mirror".to_string(),
            timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate().len(), 2);
        assert!(matches!(
            Config {
                source: SourceKind::Remote,
                ..cfg
            }
            .open_source(),
            Err(AgenticError::InvalidConfig(_))
        ));
    }

    #[test]
    fn bundled_source_by_default() {
        let src = Config::default().open_source().unwrap();
        assert_eq!(src.describe(), "bundled resources");
    }
}
