//! The persisted workspace config
//!
//! One JSON file holds every workspace. The whole [Config] is held in memory and
//! rewritten to disk in full after every mutation.
use std::{fs, fs::create_dir_all, path::Path};

use serde::{Deserialize, Serialize};

use crate::CONFIG_PATH;

/// A named bundle of app entries and URLs
///
/// A workspace has no stable id: its position in [Config::workspaces] is the
/// hotkey binding (position 0 = key 1).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub apps: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub workspaces: Vec<Workspace>,
}

/// The two on-disk shapes the launcher accepts
///
/// Early versions stored a single flat `{urls, apps}` object. Those files are
/// migrated into one workspace named "Default" on load and persisted in the
/// current shape on the next save.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Current(Config),
    Legacy {
        #[serde(default)]
        urls: Vec<String>,
        #[serde(default)]
        apps: Vec<String>,
    },
}

impl From<ConfigFile> for Config {
    fn from(value: ConfigFile) -> Self {
        match value {
            ConfigFile::Current(config) => config,
            ConfigFile::Legacy { urls, apps } => Config {
                workspaces: vec![Workspace {
                    name: String::from("Default"),
                    urls,
                    apps,
                }],
            },
        }
    }
}

impl Config {
    /// Read the config from `path`
    ///
    /// A missing file is created and an empty config returned. An unreadable or
    /// unparsable file is treated the same as a missing one, except that the
    /// file on disk is left alone until the next save.
    pub fn load(path: &Path) -> Self {
        if !path.try_exists().is_ok_and(|v| v) {
            let default_config = Self::default();

            if let Some(parent) = path.parent() {
                let _ = create_dir_all(parent);
            }

            if let Err(e) = default_config.save(path) {
                log::warn!("Failed to write the default config to file: {e}");
            } else {
                log::info!("Created default config at: {}", path.display());
            }

            return default_config;
        }

        match read_config(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!(
                    "Failed to load config at: {}. Starting empty. Error: {e}",
                    path.display()
                );

                Self::default()
            }
        }
    }

    /// Write the whole config to `path`, pretty-printed
    ///
    /// Plain overwrite of the previous contents, no temp-file dance.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)?;

        Ok(())
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let json = fs::read_to_string(path)?;
    let file: ConfigFile = serde_json::from_str(&json)?;

    Ok(file.into())
}

/// Load the [Config] from its default location
pub fn load_config() -> Config {
    Config::load(&CONFIG_PATH)
}

/// Persist `config` to its default location
///
/// A failed write is logged and otherwise ignored; the in-memory config stays
/// authoritative for the rest of the session.
pub fn save_config(config: &Config) {
    if let Err(e) = config.save(&CONFIG_PATH) {
        log::warn!("Failed to save config: {e}");
    }
}

#[derive(Debug)]
pub enum ConfigError {
    SerdeErr(serde_json::Error),
    IoErr(std::io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerdeErr(e) => write!(f, "{e}"),
            Self::IoErr(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerdeErr(value)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::IoErr(value)
    }
}
