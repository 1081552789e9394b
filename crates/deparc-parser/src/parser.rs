//! Line parser for the dependency format.
//!
//! The format is line oriented: blank lines and lines starting with `#` are
//! skipped, the first remaining line lists the tokens, and every line after
//! it is a `<source> <label> <target>` dependency. Each content line is
//! split into whitespace-separated fields with `winnow`, keeping the byte
//! span of every field so errors can point at the offending word.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{preceded, repeat, terminated},
    error::{ContextError, ErrMode},
    stream::LocatingSlice,
    token::take_while,
};

use deparc_core::document::{Arc, Document, DocumentError, TokenRef, TokenSequence};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::{Span, Spanned},
};

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A non-blank, non-comment line split into fields.
#[derive(Debug)]
struct Line<'src> {
    text: &'src str,
    span: Span,
    fields: Vec<Spanned<&'src str>>,
}

/// Skip any run of whitespace.
fn blank(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

/// Parse one whitespace-delimited field with its span relative to the line.
fn field<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    take_while(1.., |c: char| !c.is_whitespace())
        .with_span()
        .map(|(text, range)| Spanned::new(text, Span::new(range)))
        .parse_next(input)
}

/// Parse every field of a line.
fn fields<'src>(input: &mut Input<'src>) -> IResult<Vec<Spanned<&'src str>>> {
    preceded(blank, repeat(0.., terminated(field, blank))).parse_next(input)
}

/// Split `source` into content lines, dropping blank and comment lines.
fn content_lines(source: &str) -> Result<Vec<Line<'_>>, ParseError> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw in source.split_inclusive('\n') {
        let line_offset = offset;
        offset += raw.len();

        let text = raw.trim_end_matches(['\n', '\r']);
        let trimmed = text.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let span = Span::new(line_offset..line_offset + text.len());
        let mut input = Input::new(text);
        let fields = fields(&mut input).map_err(|_| malformed_line(text, span, 0))?;
        let fields = fields
            .into_iter()
            .map(|f| Spanned::new(*f.inner(), f.span().shift(line_offset)))
            .collect();

        lines.push(Line { text, span, fields });
    }

    Ok(lines)
}

/// Parse a dependency document.
///
/// Stops at the first error. The returned [`ParseError`] carries a
/// diagnostic whose labels point into `source`.
///
/// # Errors
///
/// - `E100` if a dependency line does not have exactly three fields.
/// - `E200` if a token reference matches zero or several tokens.
/// - `E201` if an arc's source does not come before its target.
/// - `E202` if the input has no dependency lines.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let mut lines = content_lines(source)?.into_iter();

    let Some(token_line) = lines.next() else {
        debug!("No content lines in input");
        return Err(empty_arc_set(None));
    };

    let tokens = TokenSequence::from_words(token_line.fields.iter().map(|f| *f.inner()));
    debug!(tokens = tokens.len(); "Token line read");

    let mut arcs = Vec::new();
    for line in lines {
        let arc = parse_arc(&tokens, &token_line, &line)?;
        trace!(arc:? = arc; "Dependency read");
        arcs.push(arc);
    }
    debug!(arcs = arcs.len(); "Dependency lines read");

    Document::new(tokens, arcs).map_err(|err| match err {
        DocumentError::EmptyArcSet => empty_arc_set(Some(token_line.span)),
        other => {
            let diagnostic =
                Diagnostic::error(other.to_string()).with_code(ErrorCode::from(&other));
            ParseError::new(diagnostic, other)
        }
    })
}

/// Resolve one `<source> <label> <target>` line against the token line.
fn parse_arc(
    tokens: &TokenSequence,
    token_line: &Line<'_>,
    line: &Line<'_>,
) -> Result<Arc, ParseError> {
    let [source, label, target] = line.fields.as_slice() else {
        return Err(malformed_line(line.text, line.span, line.fields.len()));
    };

    let source_position = resolve(tokens, token_line, source)?;
    let target_position = resolve(tokens, token_line, target)?;

    Arc::new(source_position, target_position, *label.inner()).map_err(|err| {
        let diagnostic = Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E201)
            .with_label(target.span(), format!("must come after `{}`", source.inner()))
            .with_secondary_label(source.span(), "arc starts here")
            .with_help("write the earlier token first; the arc direction is always left to right");
        ParseError::new(diagnostic, err)
    })
}

fn resolve(
    tokens: &TokenSequence,
    token_line: &Line<'_>,
    reference: &Spanned<&str>,
) -> Result<usize, ParseError> {
    tokens
        .resolve(&TokenRef::parse(reference.inner()))
        .map_err(|err| {
            let (message, help) = match &err {
                DocumentError::UnresolvedTokenReference { candidates: 0, .. } => (
                    "no token matches this reference",
                    "references must repeat a token exactly, including any `_<number>` suffix",
                ),
                _ => (
                    "more than one token matches this reference",
                    "add a `_<number>` suffix to the tokens to tell them apart",
                ),
            };
            let diagnostic = Diagnostic::error(err.to_string())
                .with_code(ErrorCode::E200)
                .with_label(reference.span(), message)
                .with_secondary_label(token_line.span, "tokens are declared here")
                .with_help(help);
            ParseError::new(diagnostic, err)
        })
}

fn malformed_line(text: &str, span: Span, fields: usize) -> ParseError {
    let err = DocumentError::MalformedLine {
        line: text.to_string(),
        fields,
    };
    let diagnostic = Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E100)
        .with_label(span, format!("found {fields} fields"))
        .with_help("write one dependency per line as `<source> <label> <target>`");
    ParseError::new(diagnostic, err)
}

fn empty_arc_set(token_line: Option<Span>) -> ParseError {
    let err = DocumentError::EmptyArcSet;
    let mut diagnostic = Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E202)
        .with_help("add at least one `<source> <label> <target>` line after the token line");
    if let Some(span) = token_line {
        diagnostic = diagnostic.with_label(span, "no dependency lines follow these tokens");
    }
    ParseError::new(diagnostic, err)
}
