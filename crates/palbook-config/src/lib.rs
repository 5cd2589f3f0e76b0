use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use palbook_core::rules::validate_horizon_days;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "palbook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_HORIZON_DAYS: i64 = 7;
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub horizon_days: i64,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid horizon_days value: {0}")]
    InvalidHorizonDays(i64),
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    horizon_days: Option<i64>,
    prompt: Option<String>,
}

/// Loads the config file, or defaults when no path was given and none
/// exists at the standard location. An explicit path must exist.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(horizon_days) = parsed.horizon_days {
        let horizon_days = validate_horizon_days(horizon_days)
            .map_err(|_| ConfigError::InvalidHorizonDays(horizon_days))?;
        config.horizon_days = horizon_days;
    }

    if let Some(prompt) = parsed.prompt {
        if prompt.is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }
        config.prompt = prompt;
    }

    Ok(config)
}
