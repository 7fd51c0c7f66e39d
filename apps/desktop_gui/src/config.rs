use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

pub const CONFIG_FILE_NAME: &str = "cardfolio.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for ThemePreference {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ConfigError::InvalidValue {
                key: "theme",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardfolioSettings {
    pub theme: ThemePreference,
    pub hint_banner_ms: u64,
    pub toast_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for CardfolioSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            hint_banner_ms: 3000,
            toast_ms: 2000,
            window_width: 420.0,
            window_height: 720.0,
        }
    }
}

/// Defaults, then the config file, then `CARDFOLIO_*` environment variables.
/// An explicit `path` must exist; the implicit locations are optional.
pub fn load_settings(path: Option<&Path>) -> Result<CardfolioSettings, ConfigError> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => match default_config_path() {
            Some(path) => read_settings_file(&path)?,
            None => CardfolioSettings::default(),
        },
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("cardfolio").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn read_settings_file(path: &Path) -> Result<CardfolioSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_settings(raw: &str) -> Result<CardfolioSettings, toml::de::Error> {
    toml::from_str(raw)
}

pub fn apply_env_overrides(
    settings: &mut CardfolioSettings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup("CARDFOLIO_THEME") {
        match v.parse::<ThemePreference>() {
            Ok(theme) => settings.theme = theme,
            Err(err) => warn!(%err, "ignoring CARDFOLIO_THEME"),
        }
    }
    if let Some(v) = lookup("CARDFOLIO_HINT_BANNER_MS") {
        match v.trim().parse::<u64>() {
            Ok(ms) => settings.hint_banner_ms = ms,
            Err(_) => warn!(value = %v, "ignoring CARDFOLIO_HINT_BANNER_MS"),
        }
    }
    if let Some(v) = lookup("CARDFOLIO_TOAST_MS") {
        match v.trim().parse::<u64>() {
            Ok(ms) => settings.toast_ms = ms,
            Err(_) => warn!(value = %v, "ignoring CARDFOLIO_TOAST_MS"),
        }
    }
}
