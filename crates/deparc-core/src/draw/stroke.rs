//! Stroke definitions for curve primitives.
//!
//! | Rust Property | SVG Attribute    | Example Values     |
//! |---------------|------------------|--------------------|
//! | `color`       | `stroke`         | `"black"`          |
//! | `width`       | `stroke-width`   | `1.0`              |
//!
//! Curves are never filled.

use crate::color::Color;

/// Defines how a curve is stroked.
///
/// # Examples
///
/// ```
/// use deparc_core::draw::StrokeDefinition;
/// use deparc_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("navy").unwrap(), 1.5);
/// assert_eq!(stroke.width(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    /// A 1px black line.
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}
