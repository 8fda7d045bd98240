use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Duration used when the configured one is unset or not positive.
pub const DEFAULT_DURATION_MS: i32 = 160;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Animation length in milliseconds. Zero or negative picks the default.
    #[serde(default)]
    pub duration: i32,

    /// Opacity factor the window starts from.
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Scale factor the animation blend starts from.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: 0,
            opacity: default_opacity(),
            scale: default_scale(),
        }
    }
}

fn default_opacity() -> f64 {
    0.0
}

fn default_scale() -> f64 {
    0.0
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("unminimize").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config.sanitized())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            std::fs::create_dir_all(config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        Ok(())
    }

    pub fn effective_duration(&self) -> i32 {
        if self.duration > 0 {
            self.duration
        } else {
            DEFAULT_DURATION_MS
        }
    }

    /// Replaces values the effect cannot use with something it can.
    pub fn sanitized(mut self) -> Self {
        if !self.opacity.is_finite() {
            warn!("Ignoring non-finite opacity {}", self.opacity);
            self.opacity = default_opacity();
        } else if !(0.0..=1.0).contains(&self.opacity) {
            warn!("Clamping opacity {} into [0, 1]", self.opacity);
            self.opacity = self.opacity.clamp(0.0, 1.0);
        }

        if !self.scale.is_finite() {
            warn!("Ignoring non-finite scale {}", self.scale);
            self.scale = default_scale();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_duration() {
        let mut config = Config::default();
        assert_eq!(config.effective_duration(), 160);
        config.duration = -5;
        assert_eq!(config.effective_duration(), 160);
        config.duration = 300;
        assert_eq!(config.effective_duration(), 300);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("scale = 0.5").unwrap();
        assert_eq!(config.duration, 0);
        assert_eq!(config.opacity, 0.0);
        assert_eq!(config.scale, 0.5);
    }

    #[test]
    fn test_sanitize_opacity() {
        let config = Config {
            duration: 100,
            opacity: 1.7,
            scale: f64::NAN,
        }
        .sanitized();
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.scale, 0.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unminimize").join("config.toml");
        let config = Config {
            duration: 250,
            opacity: 0.3,
            scale: 0.8,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "duration = \"slow\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
