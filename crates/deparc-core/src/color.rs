//! CSS colors used by draw definitions.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
///
/// Accepts anything the `color` crate understands: named colors, hex
/// notation, and the `rgb()`/`hsl()` function forms.
///
/// # Examples
///
/// ```
/// use deparc_core::color::Color;
///
/// let navy: Color = "navy".parse().unwrap();
/// assert_eq!(navy.alpha(), 1.0);
///
/// let faded = Color::new("rgb(0 0 255 / 0.5)").unwrap();
/// assert!((faded.alpha() - 0.5).abs() < 1e-6);
///
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(DynamicColor);

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected string.
    pub fn new(css: &str) -> Result<Self, String> {
        css.parse()
    }

    pub fn black() -> Self {
        Self::named("black")
    }

    pub fn white() -> Self {
        Self::named("white")
    }

    fn named(name: &'static str) -> Self {
        Self::new(name).expect("CSS color keyword parses")
    }

    /// Opacity from 0.0 (transparent) to 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.0.components[3]
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(css: &str) -> Result<Self, Self::Err> {
        DynamicColor::from_str(css)
            .map(Self)
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_input() {
        let err = Color::new("grey-ish").unwrap_err();
        assert!(err.contains("`grey-ish`"), "unexpected message: {err}");
    }

    #[test]
    fn test_default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color, Color::black());
        assert_eq!(color.alpha(), 1.0);
        assert_ne!(color, Color::white());
    }

    #[test]
    fn test_named_colors_compare_equal() {
        assert_eq!(Color::new("red").unwrap(), Color::new("red").unwrap());
        assert_ne!(Color::new("red").unwrap(), Color::new("blue").unwrap());
    }

    #[test]
    fn test_display_is_css() {
        let shown = Color::new("#ff0000").unwrap().to_string();
        assert!(Color::new(&shown).is_ok(), "not reparseable: {shown}");
    }
}
