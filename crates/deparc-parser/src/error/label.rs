//! Spans annotated with a short message.

use crate::span::Span;

/// Whether a label marks the error itself or a related location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// The offending field or line.
    Primary,
    /// Context, such as the token line a reference was resolved against.
    Secondary,
}

/// A message attached to a byte range of the input.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    style: LabelStyle,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelStyle::Primary, span, message)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelStyle::Secondary, span, message)
    }

    fn new(style: LabelStyle, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_styles() {
        let field = Label::primary(Span::new(4..7), "no token matches this reference");
        assert!(field.is_primary());
        assert_eq!(field.span(), Span::new(4..7));

        let line = Label::secondary(Span::new(0..3), "tokens are declared here");
        assert_eq!(line.style(), LabelStyle::Secondary);
        assert!(!line.is_primary());
        assert_eq!(line.message(), "tokens are declared here");
    }
}
