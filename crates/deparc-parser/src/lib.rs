//! Parser for the line-oriented dependency arc format.
//!
//! ```text
//! # comment lines and blank lines are ignored
//! The cat_1 sat_2
//! The det cat_1
//! cat_1 nsubj sat_2
//! ```
//!
//! The first content line lists the tokens. A `_<digits>` suffix on a word
//! disambiguates repeated tokens and is not displayed. Every following line
//! is a dependency: source token, label, target token.
//!
//! # Example
//!
//! ```
//! let document = deparc_parser::parse("A B\nA rel B\n").unwrap();
//! assert_eq!(document.tokens().len(), 2);
//! assert_eq!(document.arcs().len(), 1);
//! ```

pub mod error;
mod parser;
mod span;

pub use parser::parse;
pub use span::{Span, Spanned};
