//! Global apptkit configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::bridge::Bridge;
use crate::error::{ApptError, ApptResult};
use crate::reminder::Reminder;

/// Global configuration at ~/.config/apptkit/config.toml
#[derive(Deserialize, Clone, Default)]
pub struct ApptConfig {
    /// Bridge name; the binary is `apptkit-bridge-<bridge>`.
    pub bridge: Option<String>,

    /// Reminder phrase applied when the caller doesn't pick one,
    /// e.g. "15 minutes before".
    pub default_reminder: Option<String>,
}

impl ApptConfig {
    pub fn config_path() -> ApptResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ApptError::Config("Could not determine config directory".into()))?
            .join("apptkit");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented default file on first
    /// use.
    pub fn load() -> ApptResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| ApptError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ApptError::Config(e.to_string()))
    }

    /// The configured bridge, or an error naming the config file.
    pub fn bridge(&self) -> ApptResult<Bridge> {
        let name = self.bridge.as_deref().ok_or_else(|| {
            let path = Self::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "~/.config/apptkit/config.toml".to_string());
            ApptError::Config(format!(
                "No bridge configured. Set `bridge` in {} or pass --bridge",
                path
            ))
        })?;

        Ok(Bridge::from_name(name))
    }

    /// The configured fallback reminder, mapped through the phrase
    /// vocabulary.
    pub fn default_reminder(&self) -> Option<Reminder> {
        self.default_reminder
            .as_deref()
            .map(Reminder::from_phrase)
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &Path) -> ApptResult<()> {
        let contents = "\
# apptkit configuration

# Which bridge talks to your device's calendars
# (the binary apptkit-bridge-<name> must be on your PATH):
# bridge = \"apple\"

# Reminder applied when `add` is called without --reminder:
# default_reminder = \"1 hour before\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApptError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ApptError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
