//! Error types for the widget and its hosts
//!
//! The calculator itself never fails: bad keys are ignored and arithmetic
//! anomalies show up as `Infinity`/`NaN` text. These errors cover what
//! surrounds it: color input, terminal I/O and configuration.

use thiserror::Error;

/// Result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors that can occur around the calculator widget
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A color string that is not `#` followed by hex digits
    #[error("Invalid color: {value:?} (expected #rrggbb or #rgb)")]
    InvalidColor {
        /// The rejected input
        value: String,
    },

    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// History or configuration export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl WidgetError {
    /// Create an invalid color error
    #[must_use]
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
