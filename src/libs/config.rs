//! Application configuration.
//!
//! A single JSON file in the platform data directory. Currently this only
//! carries the scanner validation settings; `rentrack init` runs the
//! interactive setup.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;

const CONFIG_FILE_NAME: &str = "config.json";

/// Validation settings for scanned codes (badges, serial barcodes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Shortest code accepted from the scanner.
    pub min_code_length: usize,
    /// Longest code accepted from the scanner.
    pub max_code_length: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            min_code_length: 1,
            max_code_length: 50,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup wizard for the scanner settings.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let min_code_length: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Minimum scan code length")
            .default(current.scanner.min_code_length)
            .interact_text()?;
        let max_code_length: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Maximum scan code length")
            .default(current.scanner.max_code_length)
            .interact_text()?;

        Ok(Config {
            scanner: ScannerConfig {
                min_code_length,
                max_code_length,
            },
        })
    }
}
