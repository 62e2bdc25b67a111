//! Configuration for the anka tools.
//!
//! Stored as TOML in `~/.config/anka/config.toml`. A missing file yields the
//! defaults. Holds saved birth profiles, the default profile, an optional
//! reference year for personal-year calculations, and the output format.

pub mod error;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anka_numerology::BirthProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

const CONFIG_DIR: &str = "anka";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding [`Config::reference_year`].
pub const REFERENCE_YEAR_ENV: &str = "ANKA_REFERENCE_YEAR";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Year used for the personal year instead of the clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, BirthProfile>,
}

impl Config {
    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        Ok(dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(CONFIG_DIR))
    }

    /// Default config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config: Config = toml::from_str(&content)?;
        debug!(
            path = %path.display(),
            profiles = config.profiles.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Add or replace a named profile. The first profile becomes the default.
    pub fn add_profile(&mut self, name: impl Into<String>, profile: BirthProfile) {
        let name = name.into();
        if self.default_profile.is_none() {
            self.default_profile = Some(name.clone());
        }
        self.profiles.insert(name, profile);
    }

    /// Remove a profile, clearing the default if it pointed there.
    pub fn remove_profile(&mut self, name: &str) -> bool {
        let removed = self.profiles.remove(name).is_some();
        if removed && self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        removed
    }

    /// Point the default at an existing profile.
    pub fn set_default_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::UnknownProfile(name.to_string()));
        }
        self.default_profile = Some(name.to_string());
        Ok(())
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Result<&BirthProfile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// The default profile, if one is set and still exists.
    pub fn default_profile(&self) -> Option<(&str, &BirthProfile)> {
        let name = self.default_profile.as_deref()?;
        self.profiles.get(name).map(|p| (name, p))
    }

    /// Reference year, with an environment value taking precedence.
    ///
    /// An unparsable environment value is ignored.
    pub fn resolve_reference_year(&self, env_value: Option<&str>) -> Option<i32> {
        env_value
            .and_then(|v| v.trim().parse().ok())
            .or(self.reference_year)
    }

    /// Reference year from [`REFERENCE_YEAR_ENV`] or the file.
    pub fn reference_year_from_env(&self) -> Option<i32> {
        let env = std::env::var(REFERENCE_YEAR_ENV).ok();
        self.resolve_reference_year(env.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_numerology::Gender;

    fn sam() -> BirthProfile {
        BirthProfile::parse("Sam", "1990-05-15", Gender::Male).unwrap()
    }

    #[test]
    fn first_profile_becomes_default() {
        let mut c = Config::default();
        c.add_profile("me", sam());
        c.add_profile("other", sam());
        assert_eq!(c.default_profile.as_deref(), Some("me"));
    }

    #[test]
    fn remove_clears_default() {
        let mut c = Config::default();
        c.add_profile("me", sam());
        assert!(c.remove_profile("me"));
        assert!(c.default_profile.is_none());
        assert!(!c.remove_profile("me"));
    }

    #[test]
    fn unknown_default_rejected() {
        let mut c = Config::default();
        let err = c.set_default_profile("ghost").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(ref n) if n == "ghost"));
    }

    #[test]
    fn env_year_wins() {
        let c = Config {
            reference_year: Some(2020),
            ..Config::default()
        };
        assert_eq!(c.resolve_reference_year(Some("2031")), Some(2031));
        assert_eq!(c.resolve_reference_year(Some("soon")), Some(2020));
        assert_eq!(c.resolve_reference_year(None), Some(2020));
        assert_eq!(Config::default().resolve_reference_year(None), None);
    }
}
