// File: src/config.rs
// Purpose: Validation settings, loadable from cadastro-validation.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::messages::MessageCatalog;
use crate::rules::RuleContext;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub markup: MarkupConfig,

    #[serde(default)]
    pub rules: RuleConfig,

    #[serde(default)]
    pub messages: MessageCatalog,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Class names and selectors the DOM bindings look for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupConfig {
    /// Container wrapping one field and its error region (default: "form-group")
    #[serde(default = "default_group_class")]
    pub group_class: String,

    /// Error region inside the group (default: "error-message")
    #[serde(default = "default_error_message_class")]
    pub error_message_class: String,

    /// Class toggled on the group while the field is invalid (default: "error")
    #[serde(default = "default_error_state_class")]
    pub error_state_class: String,

    /// Which form descendants are validated
    #[serde(default = "default_field_selector")]
    pub field_selector: String,
}

/// Rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Minimum applicant age in whole years (default: 18). Any `u32` is
    /// honoured; values beyond any reachable age reject every birth date.
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u32,
}

/// Texts of the blocking notifications shown on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_invalid_submission")]
    pub invalid_submission: String,

    #[serde(default = "default_successful_submission")]
    pub successful_submission: String,
}

// Default values
fn default_group_class() -> String {
    "form-group".to_string()
}

fn default_error_message_class() -> String {
    "error-message".to_string()
}

fn default_error_state_class() -> String {
    "error".to_string()
}

fn default_field_selector() -> String {
    "input, select, textarea".to_string()
}

fn default_minimum_age() -> u32 {
    RuleContext::DEFAULT_MINIMUM_AGE
}

fn default_invalid_submission() -> String {
    "Por favor, corrija os erros no formulário antes de enviar.".to_string()
}

fn default_successful_submission() -> String {
    "Cadastro enviado com sucesso! Obrigado por se juntar a nós.".to_string()
}

// Default implementations
impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            group_class: default_group_class(),
            error_message_class: default_error_message_class(),
            error_state_class: default_error_state_class(),
            field_selector: default_field_selector(),
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            minimum_age: default_minimum_age(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            invalid_submission: default_invalid_submission(),
            successful_submission: default_successful_submission(),
        }
    }
}

impl MarkupConfig {
    /// CSS selector for the group container (".form-group")
    pub fn group_selector(&self) -> String {
        format!(".{}", self.group_class)
    }

    /// CSS selector for the error region (".error-message")
    pub fn error_message_selector(&self) -> String {
        format!(".{}", self.error_message_class)
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!("Loaded validation config from {:?}", path);
        Ok(config)
    }

    /// Load configuration from default path (./cadastro-validation.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("cadastro-validation.toml")
    }
}
