//! Fill style for filled shapes.

use crate::color::Color;

/// Fill style of a rectangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct FillDefinition {
    color: Color,
}

impl FillDefinition {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for FillDefinition {
    /// White, matching the page background the label plaques hide the curve against.
    fn default() -> Self {
        Self::new(Color::white())
    }
}
