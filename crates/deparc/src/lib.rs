//! deparc - Labeled dependency arcs drawn over a token sequence.
//!
//! Parsing, layout, and rendering of dependency diagrams: a row of tokens
//! with labeled arcs drawn above them, stacked so that arcs sharing a
//! height never cross.

pub mod config;
pub mod export;
pub mod layout;
pub mod render;

mod error;

pub use deparc_core::{color, document, draw, geometry, measure};

pub use error::DepArcError;

use log::{debug, info, trace};

use deparc_core::{
    document::Document,
    draw::{FillDefinition, Primitive, StrokeDefinition, TextAnchor, TextDefinition},
    geometry::Size,
    measure::TextMeasure,
};

use config::AppConfig;
use export::Exporter;
use layout::{DiagramLayout, HorizontalLayoutEngine, LevelAssigner};
use render::{ArcGeometryBuilder, Renderer};

/// Room kept below the token baseline, as a fraction of the token font size.
const DESCENT_FACTOR: f32 = 0.3;

/// Builder for parsing and rendering dependency diagrams.
///
/// # Examples
///
/// ```rust
/// use deparc::{DiagramBuilder, config::AppConfig};
///
/// let source = "The cat_1 sat_2\nThe det cat_1\ncat_1 nsubj sat_2\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&document).expect("Failed to render");
/// assert!(svg.contains("nsubj"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a validated document.
    ///
    /// # Errors
    ///
    /// Returns [`DepArcError::Parse`] for malformed lines, unresolved token
    /// references, backward arcs, or an input without dependencies.
    pub fn parse(&self, source: &str) -> Result<Document, DepArcError> {
        info!("Parsing document");

        let document =
            deparc_parser::parse(source).map_err(|err| DepArcError::new_parse_error(err, source))?;

        debug!(
            tokens = document.tokens().len(),
            arcs = document.arcs().len();
            "Document parsed successfully"
        );
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Assign arc levels and place the tokens of `document`.
    pub fn layout(&self, document: &Document) -> DiagramLayout {
        let measure = self.text_measure();
        self.layout_with(document, measure.as_ref())
    }

    /// Render `document` into primitives, in drawing order.
    ///
    /// # Errors
    ///
    /// Returns [`DepArcError::Config`] if a configured color is invalid.
    pub fn render(&self, document: &Document) -> Result<Vec<Primitive>, DepArcError> {
        let measure = self.text_measure();
        let layout = self.layout_with(document, measure.as_ref());
        self.render_with(document, &layout, measure.as_ref())
    }

    /// Render `document` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`DepArcError::Config`] for invalid colors and
    /// [`DepArcError::Export`] if the SVG cannot be produced.
    pub fn render_svg(&self, document: &Document) -> Result<String, DepArcError> {
        let measure = self.text_measure();
        let layout = self.layout_with(document, measure.as_ref());
        let primitives = self.render_with(document, &layout, measure.as_ref())?;

        let size = self.drawing_size(&layout);

        let mut exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;
        let mut output = Vec::new();
        exporter.export_primitives(&primitives, size, &mut output)?;

        let svg = String::from_utf8(output)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Size of the drawing produced for `layout`.
    pub fn drawing_size(&self, layout: &DiagramLayout) -> Size {
        let font_size = f32::from(self.config.layout().font_size());
        layout.tokens().drawing_size(font_size * DESCENT_FACTOR)
    }

    fn text_measure(&self) -> Box<dyn TextMeasure> {
        self.config
            .layout()
            .text_measure(self.config.style().font_family())
    }

    fn layout_with(&self, document: &Document, measure: &dyn TextMeasure) -> DiagramLayout {
        let config = self.config.layout();
        info!("Assigning arc levels");
        let levels = LevelAssigner::new().assign(document.arcs());

        info!(max_level = levels.max_level(); "Placing tokens");
        let tokens = HorizontalLayoutEngine::new(measure)
            .with_font_size(f32::from(config.font_size()))
            .with_label_font_size(f32::from(config.label_font_size()))
            .with_token_spacing(config.token_spacing())
            .with_level_height(config.level_height())
            .with_min_label_padding(config.min_label_padding())
            .layout(document, &levels);

        DiagramLayout::new(levels, tokens)
    }

    fn render_with(
        &self,
        document: &Document,
        layout: &DiagramLayout,
        measure: &dyn TextMeasure,
    ) -> Result<Vec<Primitive>, DepArcError> {
        let config = self.config.layout();
        let style = self.config.style();

        let text_color = style.text_color().map_err(DepArcError::Config)?;
        let arc_color = style.arc_color().map_err(DepArcError::Config)?;
        let label_background = style.label_background().map_err(DepArcError::Config)?;

        let token_text = TextDefinition::default()
            .with_font_family(style.font_family())
            .with_font_size(config.font_size())
            .with_color(text_color)
            .with_anchor(TextAnchor::Middle);
        let label_text = token_text.clone().with_font_size(config.label_font_size());

        let geometry = ArcGeometryBuilder::new(measure)
            .with_font_size(f32::from(config.font_size()))
            .with_level_height(config.level_height())
            .with_stroke(StrokeDefinition::solid(arc_color, style.arc_width()))
            .with_background(FillDefinition::new(label_background))
            .with_label(label_text);

        info!("Rendering primitives");
        let primitives =
            Renderer::new(geometry, token_text).render(document, layout.levels(), layout.tokens());
        Ok(primitives)
    }
}
