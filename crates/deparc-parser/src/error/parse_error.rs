//! The ParseError type returned by [`parse`](crate::parse).

use std::fmt;

use deparc_core::document::DocumentError;

use crate::error::Diagnostic;

/// Error type for parsing a dependency document.
///
/// Parsing stops at the first error, so a `ParseError` carries exactly one
/// [`Diagnostic`] together with the [`DocumentError`] that caused it.
#[derive(Debug)]
pub struct ParseError {
    diagnostic: Diagnostic,
    kind: DocumentError,
}

impl ParseError {
    pub fn new(diagnostic: Diagnostic, kind: DocumentError) -> Self {
        Self { diagnostic, kind }
    }

    /// The rendered diagnostic, with source spans.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// The underlying document error.
    pub fn kind(&self) -> &DocumentError {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_display_uses_diagnostic() {
        let err = ParseError::new(
            Diagnostic::error("zero dependencies read").with_code(ErrorCode::E202),
            DocumentError::EmptyArcSet,
        );
        assert_eq!(err.to_string(), "error[E202]: zero dependencies read");
        assert_eq!(err.kind(), &DocumentError::EmptyArcSet);
    }
}
