//! Configuration file support.
//!
//! Loads an optional `site.toml`. Every field has a default, so a missing
//! file yields a working configuration.

use crate::error::{Result, SiteError};
use crate::types::{ShowcaseEntry, default_showcase};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "public";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `build` writes the static files
    pub out_dir: PathBuf,
    /// Sites listed under "who's using it"; empty means the built-in list
    pub showcase: Vec<ShowcaseEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            showcase: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load config from a specific path.
    ///
    /// A missing file is not an error. An unreadable or malformed one is.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SiteError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = toml::from_str(&content).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "loaded config from {} ({} showcase entries)",
            path.display(),
            config.showcase.len()
        );
        Ok(config)
    }

    /// Showcase entries to render.
    pub fn showcase_entries(&self) -> Vec<ShowcaseEntry> {
        if self.showcase.is_empty() {
            default_showcase()
        } else {
            self.showcase.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert!(config.showcase.is_empty());
        assert_eq!(config.showcase_entries(), default_showcase());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("site.toml")).expect("load");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
out_dir = "dist"

[[showcase]]
name = "Acme"
url = "https://acme.test"
logo = "https://acme.test/logo.png"
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path).expect("load");
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.showcase.len(), 1);
        assert_eq!(
            config.showcase_entries()[0].logo.as_deref(),
            Some("https://acme.test/logo.png")
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        std::fs::write(&config_path, "out_dir = \"out\"\n").expect("write config");

        let config = SiteConfig::load_from_path(&config_path).expect("load");
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.showcase_entries(), default_showcase());
    }

    #[test]
    fn test_unreadable_config_is_error() {
        let temp = TempDir::new().expect("temp dir");
        // A directory where the file should be: exists, but cannot be read.
        let config_path = temp.path().join("site.toml");
        std::fs::create_dir(&config_path).expect("create dir");

        let err = SiteConfig::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, SiteError::ConfigRead { .. }));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        std::fs::write(&config_path, "out_dir = [").expect("write config");

        let err = SiteConfig::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
        assert!(err.to_string().contains("site.toml"));
    }
}
