//! Error and diagnostic system for the dependency format parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans for rich error context
//! - [`ParseError`] for returning from [`parse`](crate::parse)
//!
//! # Example
//!
//! ```
//! # use deparc_parser::error::{Diagnostic, ErrorCode};
//! # use deparc_parser::Span;
//!
//! let diag = Diagnostic::error("2 candidates for token reference `the`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(0..3), "ambiguous reference")
//!     .with_help("add a `_<number>` suffix to tell the tokens apart");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelStyle};
pub use parse_error::ParseError;
