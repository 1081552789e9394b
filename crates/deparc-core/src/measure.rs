//! Text width measurement.
//!
//! Layout only needs to know how wide a piece of text is at a given font
//! size. That capability is the [`TextMeasure`] trait, so the layout
//! algorithm does not depend on how the width is obtained.
//!
//! Two implementations are provided:
//!
//! - [`CharWidthEstimate`] - character count × font size × a fixed factor.
//!   Deterministic and font-independent; this is the default.
//! - [`FontMetrics`] - shapes the text with `cosmic-text` against the fonts
//!   installed on the system.
//!
//! # Example
//!
//! ```
//! # use deparc_core::measure::{CharWidthEstimate, TextMeasure};
//! let measure = CharWidthEstimate::default();
//! assert_eq!(measure.text_width("cat", 20.0), 3.0 * 20.0 * 0.65);
//! ```

use std::{
    fmt,
    sync::{Mutex, OnceLock, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

/// Character width factor used when no font metrics are available.
pub const DEFAULT_CHAR_WIDTH_FACTOR: f32 = 0.65;

/// Measures the horizontal extent of a single line of text.
pub trait TextMeasure: fmt::Debug + Send + Sync {
    /// Returns the width of `text` rendered at `font_size`.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Estimates text width from the number of characters.
///
/// Every character is assumed to be `factor × font_size` wide, which is a
/// reasonable approximation for monospace fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharWidthEstimate {
    factor: f32,
}

impl CharWidthEstimate {
    /// Creates an estimate with a custom per-character width factor.
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl Default for CharWidthEstimate {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_WIDTH_FACTOR)
    }
}

impl TextMeasure for CharWidthEstimate {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.factor
    }
}

/// Measures text by shaping it with real font metrics.
///
/// All instances share one lazily initialised [`FontSystem`], since loading
/// the system font database is expensive.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    font_family: String,
}

impl FontMetrics {
    /// Creates a measurement backend for the given font family.
    ///
    /// # Arguments
    ///
    /// * `font_family` - The font family name (e.g., "monospace", "DejaVu Sans Mono")
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        FONT_SYSTEM
            .get_or_init(FontShaper::new)
            .shaped_width(text, &self.font_family, font_size)
    }
}

/// Owns the font system used by [`FontMetrics`].
struct FontShaper {
    font_system: Mutex<FontSystem>,
}

impl FontShaper {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Shape `text` and return the right edge of its widest layout run.
    ///
    /// Falls back to a character-count estimate when shaping yields no runs,
    /// e.g. when the requested family has no installed face.
    fn shaped_width(&self, text: &str, font_family: &str, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font_size, font_size * 1.15);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font_family));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|glyph| glyph.x + glyph.w))
            .fold(0.0_f32, f32::max);

        if width > 0.0 {
            width
        } else {
            CharWidthEstimate::default().text_width(text, font_size)
        }
    }
}

static FONT_SYSTEM: OnceLock<FontShaper> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_char_width_estimate_counts_characters() {
        let measure = CharWidthEstimate::default();
        assert_approx_eq!(f32, measure.text_width("The", 24.0), 3.0 * 24.0 * 0.65);
        assert_approx_eq!(f32, measure.text_width("", 24.0), 0.0);
    }

    #[test]
    fn test_char_width_estimate_counts_chars_not_bytes() {
        let measure = CharWidthEstimate::default();
        assert_approx_eq!(
            f32,
            measure.text_width("äö", 10.0),
            measure.text_width("ab", 10.0)
        );
    }

    #[test]
    fn test_char_width_estimate_custom_factor() {
        let measure = CharWidthEstimate::new(0.5);
        assert_approx_eq!(f32, measure.factor(), 0.5);
        assert_approx_eq!(f32, measure.text_width("abcd", 10.0), 20.0);
    }

    #[test]
    fn test_font_metrics_empty_text() {
        let measure = FontMetrics::new("monospace");
        assert_approx_eq!(f32, measure.text_width("", 20.0), 0.0);
    }

    #[test]
    fn test_font_metrics_positive_and_monotonic_in_size() {
        let measure = FontMetrics::new("monospace");
        let small = measure.text_width("nsubj", 10.0);
        let large = measure.text_width("nsubj", 20.0);
        assert!(small > 0.0, "width should be positive, got {small}");
        assert!(
            large > small,
            "larger font ({large}) should be wider than smaller font ({small})"
        );
    }
}
