//! FPP model error handling.
//!
//! Every failure the translator can produce is a [`TranslateError`]. The
//! variants split into the three translation classes (internal contract
//! violation, unknown variant tag, deliberately unsupported tag), the
//! location-map load failure, and boundary errors raised while reading inputs.
//! Use [`TranslateError::kind`] to classify an error without matching on its
//! payload.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = TranslateError> = std::result::Result<T, E>;

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

/// Type-safe classification of a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Translator invariant broken: a defect, never a user error.
    Internal,
    /// Tag is not a member of the closed variant set at this point.
    InvalidField,
    /// Tag is part of the grammar but excluded from this translation target.
    NotSupported,
    /// A location descriptor lacks a required field.
    MissingLocationField,
    /// An input file is missing, unreadable, or not JSON.
    Input,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Internal => "Internal",
            ErrorKind::InvalidField => "InvalidField",
            ErrorKind::NotSupported => "NotSupported",
            ErrorKind::MissingLocationField => "MissingLocationField",
            ErrorKind::Input => "Input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Unified error type for location loading and AST translation.
#[derive(Debug, Error, Diagnostic)]
pub enum TranslateError {
    #[error("Internal error: {message}")]
    #[diagnostic(
        code(fpp_model::internal),
        help("the input does not match the fpp-to-json contract this translator expects")
    )]
    Internal { message: String },

    #[error("The {field} field is not valid")]
    #[diagnostic(
        code(fpp_model::invalid_field),
        help("the producer emitted a tag this translator version does not know")
    )]
    InvalidField { field: String },

    #[error("The {field} field is not supported in fpp-to-json")]
    #[diagnostic(code(fpp_model::not_supported))]
    NotSupported { field: String },

    #[error("Location map for ID {id} is missing required field {field}")]
    #[diagnostic(code(fpp_model::location_map))]
    MissingLocationField { id: String, field: &'static str },

    #[error("File \"{}\" not found", path.display())]
    #[diagnostic(code(fpp_model::input))]
    FileNotFound { path: PathBuf },

    #[error("Could not read \"{}\"", path.display())]
    #[diagnostic(code(fpp_model::input))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{}\" is not valid JSON", path.display())]
    #[diagnostic(code(fpp_model::input))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TranslateError {
    pub fn internal(message: impl Into<String>) -> Self {
        TranslateError::Internal {
            message: message.into(),
        }
    }

    pub fn invalid_field(field: impl Into<String>) -> Self {
        TranslateError::InvalidField {
            field: field.into(),
        }
    }

    pub fn not_supported(field: impl Into<String>) -> Self {
        TranslateError::NotSupported {
            field: field.into(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::Internal { .. } => ErrorKind::Internal,
            TranslateError::InvalidField { .. } => ErrorKind::InvalidField,
            TranslateError::NotSupported { .. } => ErrorKind::NotSupported,
            TranslateError::MissingLocationField { .. } => ErrorKind::MissingLocationField,
            TranslateError::FileNotFound { .. }
            | TranslateError::Io { .. }
            | TranslateError::Json { .. } => ErrorKind::Input,
        }
    }
}

/// Builds a [`TranslateError::Internal`] with a formatted message.
///
/// ```rust
/// use fpp_model::{internal, ErrorKind};
/// let err = internal!("unknown location for AST node {}", 7);
/// assert_eq!(err.kind(), ErrorKind::Internal);
/// assert_eq!(err.to_string(), "Internal error: unknown location for AST node 7");
/// ```
#[macro_export]
macro_rules! internal {
    ($($arg:tt)*) => {
        $crate::errors::TranslateError::internal(format!($($arg)*))
    };
}

#[cfg(test)]
mod errors_tests {
    use miette::Report;

    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            TranslateError::invalid_field("DefBogus").to_string(),
            "The DefBogus field is not valid"
        );
        assert_eq!(
            TranslateError::not_supported("SpecInclude").to_string(),
            "The SpecInclude field is not supported in fpp-to-json"
        );
        let err = TranslateError::MissingLocationField {
            id: "12".to_string(),
            field: "pos",
        };
        assert_eq!(
            err.to_string(),
            "Location map for ID 12 is missing required field pos"
        );
    }

    #[test]
    fn kinds_are_distinct_per_class() {
        assert_eq!(internal!("x").kind(), ErrorKind::Internal);
        assert_eq!(TranslateError::invalid_field("x").kind(), ErrorKind::InvalidField);
        assert_eq!(TranslateError::not_supported("x").kind(), ErrorKind::NotSupported);
        let missing = TranslateError::FileNotFound {
            path: PathBuf::from("nope.json"),
        };
        assert_eq!(missing.kind(), ErrorKind::Input);
        assert_eq!(missing.to_string(), "File \"nope.json\" not found");
    }

    #[test]
    fn report_carries_diagnostic_code() {
        let report = Report::new(TranslateError::not_supported("SpecLoc"));
        let output = format!("{report:?}");
        assert!(output.contains("fpp_model::not_supported"));
        assert!(output.contains("SpecLoc"));
    }
}
