//! Tokens and exact-match token resolution.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    document::{Arc, DocumentError},
    measure::TextMeasure,
};

/// Splits `word` into its text and an optional numeric disambiguator.
///
/// The disambiguator is the run of ASCII digits after the last underscore,
/// and only counts when it reaches the end of the word: `cat_1` is
/// `("cat", Some("1"))`, `under_score` is `("under_score", None)`.
fn split_spec(word: &str) -> (&str, Option<&str>) {
    match word.rsplit_once('_') {
        Some((text, spec)) if !spec.is_empty() && spec.bytes().all(|b| b.is_ascii_digit()) => {
            (text, Some(spec))
        }
        _ => (word, None),
    }
}

/// A positioned unit of text in the sequence being diagrammed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    spec: Option<String>,
    position: usize,
}

impl Token {
    /// Creates a token from a raw input word, splitting off any `_<digits>` suffix.
    ///
    /// ```
    /// # use deparc_core::document::Token;
    /// let token = Token::from_word("cat_1", 1);
    /// assert_eq!(token.text(), "cat");
    /// assert_eq!(token.spec(), Some("1"));
    /// assert_eq!(token.position(), 1);
    /// ```
    pub fn from_word(word: &str, position: usize) -> Self {
        let (text, spec) = split_spec(word);
        Self {
            text: text.to_string(),
            spec: spec.map(str::to_string),
            position,
        }
    }

    /// The displayed text, without the disambiguating suffix.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spec(&self) -> Option<&str> {
        self.spec.as_deref()
    }

    /// Zero-based position in the sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if this token is exactly the one `reference` names.
    pub fn matches(&self, reference: &TokenRef<'_>) -> bool {
        self.text == reference.text && self.spec.as_deref() == reference.spec
    }

    /// Estimated rendered width of the token text.
    pub fn width(&self, measure: &dyn TextMeasure, font_size: f32) -> f32 {
        measure.text_width(&self.text, font_size)
    }
}

/// A reference to a token by its `(text, spec)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRef<'a> {
    text: &'a str,
    spec: Option<&'a str>,
}

impl<'a> TokenRef<'a> {
    pub fn new(text: &'a str, spec: Option<&'a str>) -> Self {
        Self { text, spec }
    }

    /// Parses a reference written the same way as a token word.
    ///
    /// ```
    /// # use deparc_core::document::TokenRef;
    /// assert_eq!(TokenRef::parse("sat_2"), TokenRef::new("sat", Some("2")));
    /// assert_eq!(TokenRef::parse("The"), TokenRef::new("The", None));
    /// ```
    pub fn parse(word: &'a str) -> Self {
        let (text, spec) = split_spec(word);
        Self { text, spec }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn spec(&self) -> Option<&'a str> {
        self.spec
    }
}

impl fmt::Display for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spec {
            Some(spec) => write!(f, "{}_{spec}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Ordered tokens with an index for exact `(text, spec)` resolution.
///
/// The token list is the single source of ordering; the index only maps a
/// key to the positions carrying it, in ascending order.
#[derive(Debug, Clone, Default)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    index: IndexMap<(String, Option<String>), Vec<usize>>,
}

impl TokenSequence {
    /// Builds a sequence from raw input words, positioned in iteration order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sequence = Self::default();
        for word in words {
            sequence.push_word(word.as_ref());
        }
        sequence
    }

    fn push_word(&mut self, word: &str) {
        let token = Token::from_word(word, self.tokens.len());
        self.index
            .entry((token.text.clone(), token.spec.clone()))
            .or_default()
            .push(token.position);
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Resolves a reference to the position of the single matching token.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnresolvedTokenReference`] when no token or
    /// more than one token matches.
    pub fn resolve(&self, reference: &TokenRef<'_>) -> Result<usize, DocumentError> {
        let candidates = self
            .index
            .get(&(
                reference.text.to_string(),
                reference.spec.map(str::to_string),
            ))
            .map(Vec::as_slice)
            .unwrap_or_default();

        match candidates {
            [position] => {
                debug_assert!(self.tokens[*position].matches(reference));
                Ok(*position)
            }
            _ => Err(DocumentError::UnresolvedTokenReference {
                reference: reference.to_string(),
                candidates: candidates.len(),
            }),
        }
    }

    /// Builds an arc between two token references written as input words.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnresolvedTokenReference`] if either word does
    /// not resolve to exactly one token, and [`DocumentError::InvalidArcOrder`]
    /// if the source does not precede the target.
    pub fn arc(&self, source: &str, label: &str, target: &str) -> Result<Arc, DocumentError> {
        let source = self.resolve(&TokenRef::parse(source))?;
        let target = self.resolve(&TokenRef::parse(target))?;
        Arc::new(source, target, label)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_spec() {
        assert_eq!(split_spec("cat_1"), ("cat", Some("1")));
        assert_eq!(split_spec("cat_12"), ("cat", Some("12")));
        assert_eq!(split_spec("a_b_3"), ("a_b", Some("3")));
        assert_eq!(split_spec("_7"), ("", Some("7")));
        assert_eq!(split_spec("under_score"), ("under_score", None));
        assert_eq!(split_spec("trailing_"), ("trailing_", None));
        assert_eq!(split_spec("plain"), ("plain", None));
        assert_eq!(split_spec("x_1a"), ("x_1a", None));
    }

    #[test]
    fn test_from_words_assigns_positions() {
        let tokens = TokenSequence::from_words(["The", "cat_1", "sat_2"]);
        assert_eq!(tokens.len(), 3);
        let positions: Vec<_> = tokens.iter().map(Token::position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(tokens.get(1).map(Token::text), Some("cat"));
        assert!(tokens.get(3).is_none());
    }

    #[test]
    fn test_resolve_exact_match() {
        let tokens = TokenSequence::from_words(["the_1", "dog", "the_2"]);
        assert_eq!(tokens.resolve(&TokenRef::parse("the_2")), Ok(2));
        assert_eq!(tokens.resolve(&TokenRef::parse("dog")), Ok(1));
    }

    #[test]
    fn test_resolve_spec_must_match_exactly() {
        let tokens = TokenSequence::from_words(["cat_1"]);
        assert_eq!(
            tokens.resolve(&TokenRef::parse("cat")),
            Err(DocumentError::UnresolvedTokenReference {
                reference: "cat".to_string(),
                candidates: 0,
            })
        );
        assert!(tokens.resolve(&TokenRef::parse("cat_01")).is_err());
    }

    #[test]
    fn test_resolve_ambiguous_reference() {
        let tokens = TokenSequence::from_words(["a", "b", "a"]);
        assert_eq!(
            tokens.resolve(&TokenRef::parse("a")),
            Err(DocumentError::UnresolvedTokenReference {
                reference: "a".to_string(),
                candidates: 2,
            })
        );
    }

    #[test]
    fn test_arc_rejects_backward_reference() {
        let tokens = TokenSequence::from_words(["A", "B"]);
        let err = tokens.arc("B", "x", "A").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidArcOrder { .. }));
    }

    #[test]
    fn test_token_ref_display_roundtrips_word() {
        assert_eq!(TokenRef::parse("cat_1").to_string(), "cat_1");
        assert_eq!(TokenRef::parse("cat").to_string(), "cat");
    }
}
