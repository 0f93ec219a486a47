//! Configuration for overlay generation

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::NumberFormat;

/// Errors that can occur when loading configuration or layout files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid {kind} '{value}'")]
    InvalidName { kind: &'static str, value: String },
}

/// Configuration options for overlay output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Attribute holding the point descriptor; its presence makes an element eligible
    pub descriptor_attribute: String,

    /// Attribute holding extra classes merged onto the overlay
    pub classes_attribute: String,

    /// Class tagging generated overlays, used to find and remove them
    pub overlay_class: String,

    /// Decimal places for coordinates; unset keeps full precision
    pub precision: Option<u32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            descriptor_attribute: "data-slurve".to_string(),
            classes_attribute: "data-slurve-classes".to_string(),
            overlay_class: "slurve-svg".to_string(),
            precision: None,
        }
    }
}

impl OverlayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: OverlayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that configured names are usable in markup and selectors
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, value) in [
            ("descriptor attribute", &self.descriptor_attribute),
            ("classes attribute", &self.classes_attribute),
        ] {
            if !is_css_ident(value) {
                return Err(ConfigError::InvalidName {
                    kind,
                    value: value.clone(),
                });
            }
        }
        if !is_css_ident(&self.overlay_class) {
            return Err(ConfigError::InvalidName {
                kind: "overlay class",
                value: self.overlay_class.clone(),
            });
        }
        Ok(())
    }

    /// Set the descriptor attribute name
    pub fn with_descriptor_attribute(mut self, name: impl Into<String>) -> Self {
        self.descriptor_attribute = name.into();
        self
    }

    /// Set the extra-classes attribute name
    pub fn with_classes_attribute(mut self, name: impl Into<String>) -> Self {
        self.classes_attribute = name.into();
        self
    }

    /// Set the overlay class
    pub fn with_overlay_class(mut self, class: impl Into<String>) -> Self {
        self.overlay_class = class.into();
        self
    }

    /// Round coordinates to `digits` decimal places
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Keep full coordinate precision
    pub fn without_precision(mut self) -> Self {
        self.precision = None;
        self
    }

    /// Number format derived from the precision setting
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.precision,
        }
    }
}

/// CSS identifier: an optional `-` (or `--`), then a letter or `_`, then
/// letters, digits, `_`, `-`. A leading digit, `-` plus digit, and a lone
/// `-` are all rejected.
fn is_css_ident(s: &str) -> bool {
    let rest = s.strip_prefix("--").or_else(|| s.strip_prefix('-')).unwrap_or(s);
    let mut chars = rest.chars();
    let start_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    start_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
