//! Host configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::theme::ThemeColor;
use crate::wasm::DEFAULT_COLOR;

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Adds evaluations and theme changes
    Verbose,
    /// Every token
    Debug,
}

impl Verbosity {
    /// Maps a `-v` repeat count to a level
    #[must_use]
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// `tracing` level name for this verbosity
    #[must_use]
    pub const fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Widget host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Base color the theme is derived from
    pub theme: String,
    /// Draw the clickable keypad
    pub show_keypad: bool,
    /// Log verbosity
    pub verbosity: Verbosity,
    /// Where logs go; no file means no logging in interactive mode
    pub log_file: Option<PathBuf>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_COLOR.to_string(),
            show_keypad: true,
            verbosity: Verbosity::Normal,
            log_file: None,
        }
    }
}

impl WidgetConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base color
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Show or hide the keypad
    #[must_use]
    pub const fn with_keypad(mut self, show: bool) -> Self {
        self.show_keypad = show;
        self
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Checks that the configuration can be applied
    pub fn validate(&self) -> WidgetResult<()> {
        ThemeColor::from_hex(&self.theme)
            .map_err(|_| WidgetError::config(format!("theme must be #rrggbb or #rgb, got {:?}", self.theme)))?;
        Ok(())
    }

    /// Default `EnvFilter` directive for this configuration
    #[must_use]
    pub fn log_filter(&self) -> String {
        format!("widget_calc={}", self.verbosity.level())
    }

    /// Serializes the configuration as pretty JSON
    pub fn to_json(&self) -> WidgetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::new();
        assert_eq!(config.theme, "#4b5563");
        assert!(config.show_keypad);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = WidgetConfig::new()
            .with_theme("#ffffff")
            .with_keypad(false)
            .with_verbosity(Verbosity::Debug)
            .with_log_file("calc.log");
        assert_eq!(config.theme, "#ffffff");
        assert!(!config.show_keypad);
        assert_eq!(config.log_file, Some(PathBuf::from("calc.log")));
        assert_eq!(config.log_filter(), "widget_calc=debug");
    }

    #[test]
    fn test_validate_rejects_bad_theme() {
        let err = WidgetConfig::new().with_theme("blue").validate().unwrap_err();
        assert!(matches!(err, WidgetError::Config { .. }));
        assert!(err.to_string().contains("blue"));
        assert!(err.to_string().contains("#rrggbb or #rgb"));
    }

    #[test]
    fn test_validate_accepts_short_theme() {
        assert!(WidgetConfig::new().with_theme("#444").validate().is_ok());
    }

    #[test]
    fn test_verbosity_from_count() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_count(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_count(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_count(9), Verbosity::Debug);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::Quiet.level(), "error");
        assert_eq!(Verbosity::Normal.level(), "warn");
        assert_eq!(Verbosity::Verbose.level(), "info");
    }

    #[test]
    fn test_json_roundtrip_with_defaults() {
        let json = WidgetConfig::new().with_theme("#000000").to_json().unwrap();
        let parsed: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme, "#000000");

        // missing fields fall back to defaults
        let partial: WidgetConfig = serde_json::from_str(r#"{"show_keypad":false}"#).unwrap();
        assert_eq!(partial.theme, "#4b5563");
        assert!(!partial.show_keypad);
    }
}
