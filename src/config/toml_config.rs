use crate::config::settings::{ColorMode, LogFormat, OutputFormat, Settings};
use crate::utils::error::{Result, XpError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk session file. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: Option<ColorMode>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// Load a session file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(XpError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a session file from a string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| XpError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Lay the file's values over the built-in defaults.
    pub fn into_settings(self) -> Settings {
        let mut settings = Settings::default();

        if let Some(display) = self.display {
            if let Some(color) = display.color {
                settings.display.color = color;
            }
            if let Some(format) = display.format {
                settings.display.format = format;
            }
        }

        if let Some(logging) = self.logging {
            if let Some(level) = logging.level {
                settings.logging.level = level;
            }
            if let Some(format) = logging.format {
                settings.logging.format = format;
            }
        }

        settings
    }
}
