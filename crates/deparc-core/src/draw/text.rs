//! Text style definitions.
//!
//! [`TextDefinition`] is an immutable style value attached to every text
//! primitive at construction. Variants are derived with the `with_*`
//! builders, which consume and return the definition.

use crate::color::Color;

/// Horizontal anchoring of text relative to its position.
///
/// Maps directly to the SVG `text-anchor` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    /// Centered on the position (default)
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Defines the visual style for text primitives.
///
/// # Default Values
///
/// | Property    | Default       |
/// |-------------|---------------|
/// | Font family | `"monospace"` |
/// | Font size   | `24`          |
/// | Color       | black         |
/// | Anchor      | middle        |
///
/// # Examples
///
/// ```
/// # use deparc_core::draw::{TextAnchor, TextDefinition};
/// let label = TextDefinition::default()
///     .with_font_size(20)
///     .with_anchor(TextAnchor::Middle);
/// assert_eq!(label.font_size(), 20);
/// assert_eq!(label.font_family(), "monospace");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Color,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Returns a copy with the given font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Returns a copy with the given font size in points.
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Returns a copy with the given text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with the given anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "monospace".to_string(),
            font_size: 24,
            color: Color::default(),
            anchor: TextAnchor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::default();
        assert_eq!(def.font_family(), "monospace");
        assert_eq!(def.font_size(), 24);
        assert_eq!(def.color(), Color::default());
        assert_eq!(def.anchor(), TextAnchor::Middle);
    }

    #[test]
    fn test_text_definition_builders_leave_original_untouched() {
        let base = TextDefinition::default();
        let derived = base
            .clone()
            .with_font_family("Helvetica")
            .with_font_size(12)
            .with_color(Color::new("navy").unwrap())
            .with_anchor(TextAnchor::Start);

        assert_eq!(base.font_family(), "monospace");
        assert_eq!(derived.font_family(), "Helvetica");
        assert_eq!(derived.font_size(), 12);
        assert_eq!(derived.anchor().to_svg_value(), "start");
        assert_ne!(derived.color(), base.color());
    }
}
