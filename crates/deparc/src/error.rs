//! Error types for deparc operations.
//!
//! This module provides the main error type [`DepArcError`] which wraps
//! the error conditions of every pipeline stage.

use std::io;

use thiserror::Error;

use deparc_core::document::DocumentError;
use deparc_parser::error::ParseError;

/// The main error type for deparc operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the parse error, so
/// its labelled spans can be rendered against the original input.
#[derive(Debug, Error)]
pub enum DepArcError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for DepArcError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DepArcError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// The underlying document error, if this error came from invalid input.
    pub fn document_error(&self) -> Option<&DocumentError> {
        match self {
            Self::Parse { err, .. } => Some(err.kind()),
            Self::Document(err) => Some(err),
            _ => None,
        }
    }
}
