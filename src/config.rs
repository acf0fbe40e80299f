//! Sheet configuration persistence
//!
//! Stores user preferences in `~/.config/sheetgrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::{Delimiter, Dialect, QuoteMode};

/// Settings shared by the codec, the edit cursor and the placeholder generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Field delimiter used for import and export
    #[serde(default)]
    pub delimiter: Delimiter,
    /// Quote handling ("lenient" or "strict")
    #[serde(default)]
    pub quoting: QuoteMode,
    /// Commit numeric-looking edits as numbers
    #[serde(default)]
    pub coerce_numbers: bool,
    #[serde(default = "default_placeholder_rows")]
    pub placeholder_rows: usize,
    #[serde(default = "default_placeholder_cols")]
    pub placeholder_cols: usize,
}

fn default_placeholder_rows() -> usize {
    20
}

fn default_placeholder_cols() -> usize {
    10
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            quoting: QuoteMode::default(),
            coerce_numbers: false,
            placeholder_rows: default_placeholder_rows(),
            placeholder_cols: default_placeholder_cols(),
        }
    }
}

impl SheetConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Codec dialect described by this config
    pub fn dialect(&self) -> Dialect {
        Dialect::new(self.delimiter, self.quoting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SheetConfig::default();
        assert_eq!(config.dialect(), Dialect::default());
        assert!(!config.coerce_numbers);
        assert_eq!((config.placeholder_rows, config.placeholder_cols), (20, 10));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SheetConfig = serde_yaml::from_str("quoting: strict\n").unwrap();
        assert_eq!(config.quoting, QuoteMode::Strict);
        assert_eq!(config.delimiter, Delimiter::Comma);
        assert_eq!(config.placeholder_rows, 20);
    }
}
