use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tintgrid_engine::ColorPair;

use crate::error::ConfigError;

/// User settings, read from `<config_dir>/tintgrid/config.toml`.
///
/// Every section and field is optional in the file; missing values take the
/// defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub input: InputSettings,
    pub highlight: HighlightSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print JSON payloads
    pub pretty: bool,
    /// Echo the data grid next to the formatting grid
    pub include_data: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            include_data: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Single ASCII character; unset means sniff per file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Case-sensitive keyword highlighter
    #[default]
    Literal,
    /// Case-insensitive prompt parser (odd/even, row and column ranges)
    Prompt,
}

impl std::fmt::Display for HighlightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::Prompt => write!(f, "prompt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    pub mode: HighlightMode,
    /// Palette name used by conditional formatting
    pub condition_color: String,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            mode: HighlightMode::Literal,
            condition_color: "red".to_string(),
        }
    }
}

pub const DEFAULT_CONFIG: &str = r#"# tintgrid settings

[output]
# Pretty-print JSON payloads
pretty = true
# Include the data grid next to the formatting grid
include_data = true

[input]
# Force a CSV delimiter (single character). Unset = detect per file.
# delimiter = ";"

[highlight]
# "literal": case-sensitive keywords (blue/green/yellow, top N, bottom N)
# "prompt":  case-insensitive, adds odd/even, row ranges, column letters
mode = "literal"
# Color for conditional formatting: red, blue, green, yellow, orange,
# purple, pink, gray, black
condition_color = "red"
"#;

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tintgrid")
            .join("config.toml")
    }

    /// Load settings from the default location, falling back to defaults.
    ///
    /// A missing file is normal. An unreadable or invalid file is logged and
    /// ignored so a broken config never blocks a run.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}); using default settings", e, path.display());
                Self::default()
            }
        }
    }

    /// Load settings from an explicit path. Errors are returned, not swallowed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(d) = &self.input.delimiter {
            if d.len() != 1 || !d.is_ascii() {
                return Err(ConfigError::Validation(format!(
                    "input.delimiter must be a single ASCII character, got {d:?}"
                )));
            }
        }

        if ColorPair::by_name(&self.highlight.condition_color).is_none() {
            let known: Vec<&str> = ColorPair::names().collect();
            return Err(ConfigError::Validation(format!(
                "highlight.condition_color '{}' is not one of: {}",
                self.highlight.condition_color,
                known.join(", ")
            )));
        }

        Ok(())
    }

    /// Delimiter as a byte, if one is forced.
    pub fn delimiter(&self) -> Option<u8> {
        self.input
            .delimiter
            .as_deref()
            .and_then(|d| d.bytes().next())
    }

    /// Palette entry for conditional formatting. Unvalidated names read as red.
    pub fn condition_pair(&self) -> ColorPair {
        ColorPair::by_name(&self.highlight.condition_color).unwrap_or(tintgrid_engine::palette::RED)
    }
}
