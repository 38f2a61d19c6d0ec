use crate::error::{JotError, Result};
use crate::model::palette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for jot, stored in config.json next to the notes data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Accent color applied to new notes when none is given.
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_color() -> String {
    palette::DEFAULT_COLOR.to_string()
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
        }
    }
}

impl JotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotError::Io)?;
        let config: JotConfig = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotError::Serialization)?;
        fs::write(config_path, content).map_err(JotError::Io)?;
        Ok(())
    }

    /// Set the default color from user input (palette name or hex token).
    pub fn set_default_color(&mut self, input: &str) -> Result<()> {
        let hex = palette::resolve(input)
            .ok_or_else(|| JotError::Api(format!("Unknown color: {}", input)))?;
        self.default_color = hex.to_string();
        Ok(())
    }
}
