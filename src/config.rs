use crate::domain::TagPattern;
use crate::error::{CzEmojiError, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "cz-emoji.toml";

/// Represents the complete configuration for cz-emoji.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Release tag naming pattern, must contain `{version}`
    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default)]
    pub bump: BumpConfig,
}

fn default_tag_format() -> String {
    "v{version}".to_string()
}

fn default_initial_version() -> String {
    "0.1.0".to_string()
}

/// Settings that shape the next-version computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    /// Version proposed when no release tag exists yet
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    /// Keep breaking changes on minor bumps while the major version is 0
    #[serde(default)]
    pub major_version_zero: bool,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            initial_version: default_initial_version(),
            major_version_zero: false,
        }
    }
}

impl BumpConfig {
    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_version).map_err(|e| {
            CzEmojiError::version(format!(
                "Invalid initial version '{}': {}",
                self.initial_version, e
            ))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_format: default_tag_format(),
            bump: BumpConfig::default(),
        }
    }
}

impl Config {
    /// Compiled tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_format.clone())
    }

    /// Check the values that are parsed lazily elsewhere
    pub fn validate(&self) -> Result<()> {
        self.tag_pattern()?;
        self.bump.initial_version()?;
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cz-emoji.toml` in current directory
/// 3. `cz-emoji.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| CzEmojiError::config(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tag_format, "v{version}");
        assert_eq!(config.bump.initial_version, "0.1.0");
        assert!(!config.bump.major_version_zero);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[bump]\nmajor_version_zero = true\n").unwrap();
        assert_eq!(config.tag_format, "v{version}");
        assert!(config.bump.major_version_zero);
        assert_eq!(config.bump.initial_version().unwrap(), Version::new(0, 1, 0));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            tag_format: "latest".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            bump: BumpConfig {
                initial_version: "one".to_string(),
                major_version_zero: false,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
