//! Error codes for the diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Line structure errors
//! - `E2xx` - Token and arc resolution errors

use std::fmt;

use deparc_core::document::DocumentError;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Line Errors (E1xx)
    // =========================================================================
    /// Malformed dependency line.
    ///
    /// A dependency line must have exactly three whitespace-separated fields:
    /// `<source> <label> <target>`.
    E100,

    // =========================================================================
    // Resolution Errors (E2xx)
    // =========================================================================
    /// Unresolved token reference.
    ///
    /// No token, or more than one token, matches the `(text, spec)` pair.
    E200,

    /// Invalid arc order.
    ///
    /// The source token does not come strictly before the target token.
    E201,

    /// Empty arc set.
    ///
    /// The input contains no dependency lines.
    E202,
}

impl ErrorCode {
    /// Returns the error code as a string (e.g., "E200").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E100 => "E100",
            Self::E200 => "E200",
            Self::E201 => "E201",
            Self::E202 => "E202",
        }
    }
}

impl From<&DocumentError> for ErrorCode {
    fn from(err: &DocumentError) -> Self {
        match err {
            DocumentError::MalformedLine { .. } => Self::E100,
            DocumentError::UnresolvedTokenReference { .. } => Self::E200,
            DocumentError::InvalidArcOrder { .. } => Self::E201,
            DocumentError::EmptyArcSet => Self::E202,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_from_document_error() {
        assert_eq!(
            ErrorCode::from(&DocumentError::EmptyArcSet),
            ErrorCode::E202
        );
        assert_eq!(
            ErrorCode::from(&DocumentError::MalformedLine {
                line: "a b".to_string(),
                fields: 2,
            }),
            ErrorCode::E100
        );
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }
}
