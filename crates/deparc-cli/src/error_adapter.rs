//! Rendering of [`DepArcError`] through miette.
//!
//! Parse errors carry a [`Diagnostic`] with byte spans into the input, which
//! miette turns into an annotated source snippet. Every other error is shown
//! as a plain message with a `deparc::*` code.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use deparc::DepArcError;
use deparc_parser::{
    Span,
    error::{Diagnostic, LabelStyle},
};

/// A [`DepArcError`] viewed as a miette diagnostic.
#[derive(Debug)]
pub struct ErrorReport<'a> {
    err: &'a DepArcError,
}

impl<'a> ErrorReport<'a> {
    pub fn new(err: &'a DepArcError) -> Self {
        Self { err }
    }

    /// The parser diagnostic and the text it points into, if any.
    fn parse_diagnostic(&self) -> Option<(&'a Diagnostic, &'a str)> {
        match self.err {
            DepArcError::Parse { err, src } => Some((err.diagnostic(), src.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_diagnostic() {
            Some((diag, _)) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl Error for ErrorReport<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.err {
            DepArcError::Parse { .. } => None,
            other => other.source(),
        }
    }
}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let code = match self.err {
            DepArcError::Parse { err, .. } => {
                return err
                    .diagnostic()
                    .code()
                    .map(|code| Box::new(code) as Box<dyn fmt::Display>);
            }
            DepArcError::Io(_) => "deparc::io",
            DepArcError::Document(_) => "deparc::document",
            DepArcError::Config(_) => "deparc::config",
            DepArcError::Export(_) => "deparc::export",
        };
        Some(Box::new(code))
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let (diag, _) = self.parse_diagnostic()?;
        diag.help().map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self.err {
            DepArcError::Parse { src, .. } => Some(src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (diag, _) = self.parse_diagnostic()?;
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            match label.style() {
                LabelStyle::Primary => LabeledSpan::new_primary_with_span(message, span),
                LabelStyle::Secondary => LabeledSpan::new_with_span(message, span),
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Render `err` as a miette report, without colors when `plain` is set.
///
/// # Errors
///
/// Returns [`fmt::Error`] if miette fails to format the report.
pub fn render_report(err: &DepArcError, plain: bool) -> Result<String, fmt::Error> {
    let handler = if plain {
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
    } else {
        miette::GraphicalReportHandler::new()
    };

    let mut out = String::new();
    handler.render_report(&mut out, &ErrorReport::new(err))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(source: &str) -> DepArcError {
        let err = deparc_parser::parse(source).unwrap_err();
        DepArcError::new_parse_error(err, source)
    }

    #[test]
    fn test_parse_error_keeps_code_and_help() {
        let err = parse_error("A B\nA x C\n");
        let report = ErrorReport::new(&err);

        assert_eq!(report.to_string(), "0 candidates for token reference `C`");
        assert_eq!(report.code().unwrap().to_string(), "E200");
        assert!(report.help().is_some());
        assert!(report.source_code().is_some());
    }

    #[test]
    fn test_config_error_has_no_snippet() {
        let err = DepArcError::Config("bad color".to_string());
        let report = ErrorReport::new(&err);

        assert_eq!(report.to_string(), "Configuration error: bad color");
        assert_eq!(report.code().unwrap().to_string(), "deparc::config");
        assert!(report.source_code().is_none());
        assert!(report.labels().is_none());
    }

    #[test]
    fn test_labels_keep_style() {
        let source = "A B C\nC x A\n";
        let err = parse_error(source);
        let report = ErrorReport::new(&err);

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[0].offset(), source.rfind('A').unwrap());
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_empty_input_has_no_labels() {
        let err = parse_error("");
        let report = ErrorReport::new(&err);
        assert!(report.labels().is_none());
        assert_eq!(report.code().unwrap().to_string(), "E202");
    }

    #[test]
    fn test_plain_report_shows_snippet() {
        let err = parse_error("The dog\nThe det cat\n");
        let out = render_report(&err, true).unwrap();
        assert!(out.contains("no token matches this reference"));
        assert!(out.contains("tokens are declared here"));
        assert!(out.contains("E200"));
    }
}
