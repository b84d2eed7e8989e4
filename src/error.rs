//! Error types for color conversion and comparison.

use thiserror::Error;

/// Result type alias for couleur operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised when a color value or selector is invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A hex color string is malformed.
    #[error("Invalid hex color {input:?}: {reason}")]
    Format {
        /// The string as it was passed in.
        input: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A numeric component lies outside its domain.
    #[error("Component {component} = {value} is outside {range}")]
    Range {
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: f64,
        /// The accepted domain, in interval notation.
        range: &'static str,
    },

    /// Unrecognized near-equality mode.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// Unrecognized palette format.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl ColorError {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        Self::Format {
            input: input.to_owned(),
            reason,
        }
    }

    pub(crate) fn range(component: &'static str, value: impl Into<f64>, range: &'static str) -> Self {
        Self::Range {
            component,
            value: value.into(),
            range,
        }
    }
}
