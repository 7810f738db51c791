//! Error types for spinline.
//!
//! All fallible operations return `Result<T, LineError>` instead of
//! panicking; the store is left untouched whenever a write is rejected.

use thiserror::Error;

use crate::store::Param;

/// Result type alias for spinline operations.
pub type LineResult<T> = Result<T, LineError>;

/// Unified error type for all spinline operations.
#[derive(Debug, Error)]
pub enum LineError {
    // ===== Validation Errors =====
    /// A parameter write fell outside the declared bounds.
    ///
    /// The store retains the prior value; the offending value and the
    /// declared bounds are carried for user-visible feedback.
    #[error("parameter '{param}' rejected: {value} is outside the declared bounds")]
    OutOfRange {
        /// Parameter that rejected the write.
        param: Param,
        /// The offending value.
        value: f64,
        /// Declared lower bound, if any.
        min: Option<f64>,
        /// Declared upper bound, if any.
        max: Option<f64>,
    },

    /// A parameter write carried a NaN or infinite value.
    #[error("parameter '{param}' rejected: value must be finite")]
    NonFinite {
        /// Parameter that rejected the write.
        param: Param,
    },

    // ===== Name Resolution Errors =====
    /// A name did not resolve to any input parameter.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// A name did not resolve to any derived quantity.
    #[error("unknown derived quantity '{0}'")]
    UnknownDerived(String),

    // ===== Configuration Errors =====
    /// Invalid scenario configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error came from a rejected parameter write.
    #[must_use]
    pub const fn is_rejected_write(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NonFinite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = LineError::OutOfRange {
            param: Param::OperationalDays,
            value: 400.0,
            min: Some(1.0),
            max: Some(366.0),
        };
        assert!(err.is_rejected_write());
        let msg = err.to_string();
        assert!(msg.contains("operational_days"));
        assert!(msg.contains("400"));
        assert!(msg.contains("bounds"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = LineError::NonFinite { param: Param::Dpf };
        assert!(err.is_rejected_write());
        let msg = err.to_string();
        assert!(msg.contains("dpf"));
        assert!(msg.contains("finite"));
    }

    #[test]
    fn test_unknown_parameter_display() {
        let err = LineError::UnknownParameter("spindle_count".to_string());
        assert!(!err.is_rejected_write());
        let msg = err.to_string();
        assert!(msg.contains("unknown parameter"));
        assert!(msg.contains("spindle_count"));
    }

    #[test]
    fn test_unknown_derived_display() {
        let err = LineError::UnknownDerived("melt_index".to_string());
        let msg = err.to_string();
        assert!(msg.contains("unknown derived quantity"));
        assert!(msg.contains("melt_index"));
    }

    #[test]
    fn test_error_config() {
        let err = LineError::config("bad scenario");
        assert!(!err.is_rejected_write());
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("bad scenario"));
    }

    #[test]
    fn test_error_debug() {
        let err = LineError::config("test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Config"));
    }
}
