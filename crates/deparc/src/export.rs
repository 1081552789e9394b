//! Export of rendered primitives into output formats.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Document
//!     ↓ layout
//! Levels + TokenLayout
//!     ↓ render
//! Ordered primitives
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`DepArcError::Export`] at the crate
//! boundary.
//!
//! [`DepArcError::Export`]: crate::DepArcError::Export

/// SVG export backend.
pub mod svg;

use std::io;

use deparc_core::{draw::Primitive, geometry::Size};

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Writes `primitives`, already in drawing order, to `writer`.
    ///
    /// `size` is the extent of the drawing, starting at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the primitives cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_primitives(
        &mut self,
        primitives: &[Primitive],
        size: Size,
        writer: &mut dyn io::Write,
    ) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
