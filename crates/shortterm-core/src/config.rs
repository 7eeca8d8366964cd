//! Configuration loading.
//!
//! Values come from a TOML file, then environment overrides, then command-line
//! flags (merged by [`TrialSettings::resolve`]).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::TrialError;

/// Top-level shortterm configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermConfig {
    /// Path of the result log. A leading `~/` is expanded.
    #[serde(default = "default_database")]
    pub database: String,
    /// Trials per run.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Numbers shown per trial.
    #[serde(default = "default_numbers")]
    pub numbers: usize,
    /// Lower bound of generated values.
    #[serde(default = "default_min")]
    pub min: i64,
    /// Exclusive upper bound of generated values.
    #[serde(default = "default_max")]
    pub max: i64,
    /// Use the full-screen terminal frontend.
    #[serde(default)]
    pub fullscreen: bool,
    /// Keys bound to each symbolic action.
    #[serde(default)]
    pub keys: KeyBindingsConfig,
}

/// Key names bound to each action, e.g. `["ctrl-c", "esc"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    #[serde(default = "default_quit_keys")]
    pub quit: Vec<String>,
    #[serde(default = "default_confirm_keys")]
    pub confirm: Vec<String>,
    #[serde(default = "default_erase_keys")]
    pub erase: Vec<String>,
}

fn default_database() -> String {
    "~/.config/short-term".to_string()
}
fn default_trials() -> usize {
    20
}
fn default_numbers() -> usize {
    7
}
fn default_min() -> i64 {
    10
}
fn default_max() -> i64 {
    99
}
fn default_quit_keys() -> Vec<String> {
    vec!["ctrl-c".to_string(), "esc".to_string()]
}
fn default_confirm_keys() -> Vec<String> {
    vec!["enter".to_string()]
}
fn default_erase_keys() -> Vec<String> {
    vec!["backspace".to_string()]
}

impl Default for ShortTermConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            trials: default_trials(),
            numbers: default_numbers(),
            min: default_min(),
            max: default_max(),
            fullscreen: false,
            keys: KeyBindingsConfig::default(),
        }
    }
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self {
            quit: default_quit_keys(),
            confirm: default_confirm_keys(),
            erase: default_erase_keys(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `shortterm.toml` in the current directory
/// 2. `~/.config/shortterm/config.toml`
///
/// Environment variable overrides: `SHORTTERM_DATABASE`, `SHORTTERM_FULLSCREEN`.
pub fn load_config_from(path: Option<&Path>) -> Result<ShortTermConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("shortterm.toml");
        if local.exists() {
            Some(local)
        } else {
            config_dir()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ShortTermConfig::default(),
    };

    if let Ok(database) = std::env::var("SHORTTERM_DATABASE") {
        config.database = database;
    }
    if let Ok(flag) = std::env::var("SHORTTERM_FULLSCREEN") {
        config.fullscreen = matches!(flag.as_str(), "1" | "true" | "yes");
    }

    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config(content: &str) -> Result<ShortTermConfig> {
    Ok(toml::from_str(content)?)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("shortterm"))
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, std::env::var("HOME").ok().as_deref())
}

/// Replace a leading `~/` with `home`. Without a home directory the path is
/// returned unchanged.
pub fn expand_home_with(path: &str, home: Option<&str>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

/// Parameters of a run after merging config and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSettings {
    pub trials: usize,
    pub numbers: usize,
    pub min: i64,
    pub max: i64,
    /// Report each trial's score and a run summary as the run progresses.
    pub dry: bool,
}

/// Flag values that override the config file when present.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub trials: Option<usize>,
    pub numbers: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub dry: bool,
}

impl TrialSettings {
    pub fn resolve(config: &ShortTermConfig, overrides: &SettingsOverrides) -> Self {
        Self {
            trials: overrides.trials.unwrap_or(config.trials),
            numbers: overrides.numbers.unwrap_or(config.numbers),
            min: overrides.min.unwrap_or(config.min),
            max: overrides.max.unwrap_or(config.max),
            dry: overrides.dry,
        }
    }

    /// Check that the number range can produce values at all.
    pub fn validate(&self) -> Result<(), TrialError> {
        if self.max <= 0 || self.min >= self.max {
            return Err(TrialError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for TrialSettings {
    fn default() -> Self {
        Self::resolve(&ShortTermConfig::default(), &SettingsOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ShortTermConfig::default();
        assert_eq!(config.database, "~/.config/short-term");
        assert_eq!(config.trials, 20);
        assert_eq!(config.numbers, 7);
        assert_eq!(config.min, 10);
        assert_eq!(config.max, 99);
        assert!(!config.fullscreen);
        assert_eq!(config.keys.confirm, vec!["enter"]);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config = parse_config(
            r#"
trials = 5
max = 1000

[keys]
quit = ["q"]
"#,
        )
        .unwrap();
        assert_eq!(config.trials, 5);
        assert_eq!(config.max, 1000);
        assert_eq!(config.numbers, 7);
        assert_eq!(config.keys.quit, vec!["q"]);
        assert_eq!(config.keys.erase, vec!["backspace"]);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(parse_config("trials = \"many\"").is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "numbers = 9\nmin = 0\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.numbers, 9);
        assert_eq!(config.min, 0);
    }

    #[test]
    fn expand_home_only_touches_tilde_prefix() {
        let home = Some("/home/tester");
        assert_eq!(
            expand_home_with("~/.config/short-term", home),
            PathBuf::from("/home/tester/.config/short-term")
        );
        assert_eq!(expand_home_with("/tmp/log", home), PathBuf::from("/tmp/log"));
        assert_eq!(expand_home_with("rel/~/x", home), PathBuf::from("rel/~/x"));
    }

    #[test]
    fn expand_home_without_home_is_unchanged() {
        assert_eq!(
            expand_home_with("~/.config/short-term", None),
            PathBuf::from("~/.config/short-term")
        );
    }

    #[test]
    fn flags_override_config() {
        let config = ShortTermConfig::default();
        let overrides = SettingsOverrides {
            trials: Some(3),
            min: Some(1),
            dry: true,
            ..Default::default()
        };
        let settings = TrialSettings::resolve(&config, &overrides);
        assert_eq!(settings.trials, 3);
        assert_eq!(settings.numbers, 7);
        assert_eq!(settings.min, 1);
        assert_eq!(settings.max, 99);
        assert!(settings.dry);
    }

    #[test]
    fn validate_checks_range() {
        assert!(TrialSettings::default().validate().is_ok());
        let inverted = TrialSettings {
            min: 99,
            max: 10,
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(TrialError::InvalidRange { min: 99, max: 10 })
        ));
        let non_positive = TrialSettings {
            min: -5,
            max: 0,
            ..Default::default()
        };
        assert!(non_positive.validate().is_err());
    }
}
