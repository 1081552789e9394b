//! Drawing primitives for dependency diagrams.
//!
//! The layout pipeline ends in a flat, ordered list of [`Primitive`]s. Each
//! primitive is self-contained: it carries its own position, geometry and
//! an immutable style value, so any backend (SVG, canvas, PDF) can draw it
//! without consulting the layout again.
//!
//! # Layer-Based Ordering
//!
//! Every primitive belongs to a fixed [`DrawLayer`]. The
//! [`DrawOrderSequencer`] stably groups primitives by layer so that text
//! always ends up on top of label backgrounds, and label backgrounds on top
//! of curves.

mod fill;
mod layer;
mod primitive;
mod stroke;
mod text;

pub use fill::FillDefinition;
pub use layer::{DrawLayer, DrawOrderSequencer};
pub use primitive::{CurvePrimitive, PathCommand, Primitive, RectPrimitive, TextPrimitive};
pub use stroke::StrokeDefinition;
pub use text::{TextAnchor, TextDefinition};
