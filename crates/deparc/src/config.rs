//! Configuration types for dependency diagram layout and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML or any other serde format. Every field has a default, so a partial
//! configuration file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Font sizes, spacing constants and the text measurement backend.
//! - [`StyleConfig`] - Font family and colors.
//!
//! # Example
//!
//! ```
//! # use deparc::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().font_size(), 24);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use deparc_core::{
    color::Color,
    measure::{CharWidthEstimate, DEFAULT_CHAR_WIDTH_FACTOR, FontMetrics, TextMeasure},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// How token and label widths are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// Character count × font size × `char_width_factor`.
    #[default]
    Estimate,
    /// Shape the text with the configured font family.
    Font,
}

/// Font sizes and spacing constants used by the layout passes.
///
/// Lengths are in drawing units (SVG user units).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    font_size: u16,
    label_font_size: u16,
    token_spacing: f32,
    level_height: f32,
    min_label_padding: f32,
    measure: MeasureKind,
    char_width_factor: f32,
}

impl LayoutConfig {
    /// Token font size.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Arc label font size.
    pub fn label_font_size(&self) -> u16 {
        self.label_font_size
    }

    /// Fixed gap between the edges of adjacent tokens before nudging.
    pub fn token_spacing(&self) -> f32 {
        self.token_spacing
    }

    /// Vertical distance between consecutive arc levels.
    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    /// Minimum horizontal room left on each side of an arc label.
    pub fn min_label_padding(&self) -> f32 {
        self.min_label_padding
    }

    pub fn measure(&self) -> MeasureKind {
        self.measure
    }

    pub fn char_width_factor(&self) -> f32 {
        self.char_width_factor
    }

    /// Builds the configured text measurement backend.
    ///
    /// `font_family` is only used by [`MeasureKind::Font`].
    pub fn text_measure(&self, font_family: &str) -> Box<dyn TextMeasure> {
        match self.measure {
            MeasureKind::Estimate => Box::new(CharWidthEstimate::new(self.char_width_factor)),
            MeasureKind::Font => Box::new(FontMetrics::new(font_family)),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 24,
            label_font_size: 20,
            token_spacing: 10.0,
            level_height: 20.0,
            min_label_padding: 10.0,
            measure: MeasureKind::default(),
            char_width_factor: DEFAULT_CHAR_WIDTH_FACTOR,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as strings until they are used, so an invalid color is
/// reported when rendering rather than when loading the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_family: String,
    text_color: String,
    arc_color: String,
    arc_width: f32,
    label_background: String,
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn arc_width(&self) -> f32 {
        self.arc_width
    }

    /// Returns the parsed token and label text [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text_color", &self.text_color)
    }

    /// Returns the parsed arc stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn arc_color(&self) -> Result<Color, String> {
        parse_color("arc_color", &self.arc_color)
    }

    /// Returns the parsed fill [`Color`] of the plaque behind arc labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn label_background(&self) -> Result<Color, String> {
        parse_color("label_background", &self.label_background)
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "monospace".to_string(),
            text_color: "black".to_string(),
            arc_color: "black".to_string(),
            arc_width: 1.0,
            label_background: "white".to_string(),
            background_color: None,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
}
