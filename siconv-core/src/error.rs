//! Conversion errors
//!
//! Errors never end the session. They are values reported back to the user,
//! each carrying a stable code and a hint for fixing the query.

use serde::Serialize;
use thiserror::Error;
use crate::RootUnit;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const MALFORMED_QUERY: &str = "MALFORMED_QUERY";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const NEGATIVE_NUMBER: &str = "NEGATIVE_NUMBER";
    pub const UNKNOWN_ROOT_UNIT: &str = "UNKNOWN_ROOT_UNIT";
    pub const UNKNOWN_PREFIX: &str = "UNKNOWN_PREFIX";
    pub const ROOT_UNIT_MISMATCH: &str = "ROOT_UNIT_MISMATCH";
}

/// Errors from splitting a query line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid input '{line}': expected 'Number UnitToConvertFrom = UnitToConvertTo'")]
    MalformedQuery { line: String },

    #[error("Invalid number '{token}'")]
    InvalidNumber { token: String },

    #[error("Negative number '{token}': quantities must be zero or greater")]
    NegativeNumber { token: String },
}

/// Errors from resolving a unit token
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("Invalid unit '{token}': no SI root unit (m, g, s, A, K, cd, mol) found")]
    UnknownRootUnit { token: String },

    #[error("Invalid prefix '{prefix}' in unit '{token}'")]
    UnknownPrefix { token: String, prefix: String },
}

/// Any failure of the conversion pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Mismatched root units: cannot convert '{source_unit}' to '{target_unit}'")]
    RootUnitMismatch {
        source_unit: RootUnit,
        target_unit: RootUnit,
    },
}

impl ConvertError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::Parse(ParseError::MalformedQuery { .. }) => codes::MALFORMED_QUERY,
            ConvertError::Parse(ParseError::InvalidNumber { .. }) => codes::INVALID_NUMBER,
            ConvertError::Parse(ParseError::NegativeNumber { .. }) => codes::NEGATIVE_NUMBER,
            ConvertError::Resolve(ResolveError::UnknownRootUnit { .. }) => codes::UNKNOWN_ROOT_UNIT,
            ConvertError::Resolve(ResolveError::UnknownPrefix { .. }) => codes::UNKNOWN_PREFIX,
            ConvertError::RootUnitMismatch { .. } => codes::ROOT_UNIT_MISMATCH,
        }
    }

    /// Suggestion for fixing the query
    pub fn suggestion(&self) -> &'static str {
        match self {
            ConvertError::Parse(ParseError::MalformedQuery { .. }) => {
                "Separate the four parts with single spaces, e.g. '1 kg = g'"
            }
            ConvertError::Parse(ParseError::InvalidNumber { .. }) => {
                "Use a plain decimal number such as 2.5 or 1e3"
            }
            ConvertError::Parse(ParseError::NegativeNumber { .. }) => {
                "Drop the minus sign"
            }
            ConvertError::Resolve(ResolveError::UnknownRootUnit { .. }) => {
                "End the unit with one of m, g, s, A, K, cd or mol"
            }
            ConvertError::Resolve(ResolveError::UnknownPrefix { .. }) => {
                "Use an SI prefix such as k, M, m, u or c (symbols are case sensitive)"
            }
            ConvertError::RootUnitMismatch { .. } => {
                "Both units must share the same root unit"
            }
        }
    }

    /// Serializable form for JSON output
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Structured error for machine consumption
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
    pub suggestion: &'static str,
}
