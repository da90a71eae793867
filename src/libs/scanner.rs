//! Scanned-code input for the rent/return workflow.
//!
//! Badge and serial scanners in keyboard-wedge mode type the code and send
//! Enter, so reading a scan is reading a line of input. Codes are validated
//! against a restricted character set and the configured length bounds
//! before any database lookup happens.

use crate::libs::config::ScannerConfig;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Outcome of one scan attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    /// A validated code, trimmed.
    Code(String),
    /// Empty input, treated as the operator backing out.
    Cancelled,
    /// Input that failed validation; the offending code is kept for the
    /// error message.
    Invalid(String),
}

pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Prompts for one scan and validates the result.
    pub fn read_code(&self, prompt: &str) -> Result<ScanResult> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        Ok(self.validate(&input))
    }

    /// Trims and checks a raw code against the configured constraints.
    /// Scanners only ever emit letters, digits, dashes and underscores;
    /// anything else means a misread or a stray keyboard.
    pub fn validate(&self, raw: &str) -> ScanResult {
        let code = raw.trim();
        if code.is_empty() {
            return ScanResult::Cancelled;
        }
        let length_ok = code.len() >= self.config.min_code_length && code.len() <= self.config.max_code_length;
        let charset_ok = code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !length_ok || !charset_ok {
            return ScanResult::Invalid(code.to_string());
        }
        ScanResult::Code(code.to_string())
    }
}
