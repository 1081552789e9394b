//! Document model: tokens and the arcs between them.
//!
//! A [`Document`] is the validated input of the layout pipeline. It is
//! built once and never mutated; layout results live in separate values
//! indexed by token position and arc index.
//!
//! # Overview
//!
//! - [`Token`] / [`TokenRef`] - a positioned word and a reference to one
//! - [`TokenSequence`] - the ordered tokens plus an exact-match index
//! - [`Arc`] - a labeled relation from an earlier token to a later one
//! - [`ArcSet`] - the non-empty, validated arcs of a document
//! - [`DocumentError`] - the construction errors
//!
//! # Example
//!
//! ```
//! # use deparc_core::document::{Document, TokenSequence};
//! # fn main() -> Result<(), deparc_core::document::DocumentError> {
//! let tokens = TokenSequence::from_words(["The", "cat_1", "sat_2"]);
//! let det = tokens.arc("The", "det", "cat_1")?;
//! let nsubj = tokens.arc("cat_1", "nsubj", "sat_2")?;
//!
//! let document = Document::new(tokens, vec![det, nsubj])?;
//! assert_eq!(document.arcs().len(), 2);
//! # Ok(())
//! # }
//! ```

mod arc;
mod error;
mod token;

pub use arc::{Arc, ArcSet};
pub use error::DocumentError;
pub use token::{Token, TokenRef, TokenSequence};

/// A token sequence together with its validated arcs.
#[derive(Debug, Clone)]
pub struct Document {
    tokens: TokenSequence,
    arcs: ArcSet,
}

impl Document {
    /// Creates a document, validating `arcs` against `tokens`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EmptyArcSet`] when `arcs` is empty and
    /// [`DocumentError::UnresolvedTokenReference`] when an arc points past
    /// the end of the token sequence.
    pub fn new(tokens: TokenSequence, arcs: Vec<Arc>) -> Result<Self, DocumentError> {
        let arcs = ArcSet::new(&tokens, arcs)?;
        Ok(Self { tokens, arcs })
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn arcs(&self) -> &ArcSet {
        &self.arcs
    }
}
