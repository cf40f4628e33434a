use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::DEFAULT_HISTORY_LIMIT;
use crate::style::{Brush, MAX_PEN_WIDTH, Pen};

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup settings of the editing model.
///
/// Every field has a default, so a config file only needs the values it
/// changes:
///
/// ```json
/// { "pen": { "color": [255, 0, 0, 255], "width": 3 }, "history_limit": 50 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaintConfig {
    /// Pen given to new shapes, and restored by "New"
    pub pen: Pen,
    /// Brush given to new shapes, and restored by "New"
    pub brush: Brush,
    /// Maximum number of undo steps kept
    pub history_limit: usize,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            pen: Pen::default(),
            brush: Brush::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PaintConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: PaintConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !Pen::is_valid_width(self.pen.width) {
            return Err(ConfigError::Invalid(format!(
                "pen width {} is outside 1..={}",
                self.pen.width, MAX_PEN_WIDTH
            )));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
