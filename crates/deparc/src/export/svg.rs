//! SVG serialization of drawing primitives.

use std::io;

use log::{debug, info};
use svg::{
    self,
    node::{Text as SvgText, element as svg_element},
};

use deparc_core::{
    color::Color,
    draw::{CurvePrimitive, PathCommand, Primitive, RectPrimitive, TextPrimitive},
    geometry::Size,
};

use super::{Error, Exporter};
use crate::config::StyleConfig;

/// Builder for an [`Svg`] exporter.
///
/// ```
/// # use deparc::{config::StyleConfig, export::svg::SvgBuilder};
/// let style = StyleConfig::default();
/// let svg = SvgBuilder::new().with_style(&style).build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the configured background color is invalid.
    pub fn build(self) -> Result<Svg, Error> {
        let background_color = match self.style {
            Some(style) => style.background_color().map_err(Error::Render)?,
            None => None,
        };
        Ok(Svg { background_color })
    }
}

/// Serializes primitives into a standalone SVG 1.1 document.
#[derive(Debug)]
pub struct Svg {
    background_color: Option<Color>,
}

impl Svg {
    /// Builds the SVG document for `primitives` on a canvas of `size`.
    pub fn render_document(&self, primitives: &[Primitive], size: Size) -> svg::Document {
        let mut doc = svg::Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .set("version", "1.1")
            .set("baseProfile", "full")
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        if let Some(color) = self.background_color {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            );
        }

        for primitive in primitives {
            doc = match primitive {
                Primitive::Curve(curve) => doc.add(render_curve(curve)),
                Primitive::Rect(rect) => doc.add(render_rect(rect)),
                Primitive::Text(text) => doc.add(render_text(text)),
            };
        }

        doc
    }
}

impl Exporter for Svg {
    fn export_primitives(
        &mut self,
        primitives: &[Primitive],
        size: Size,
        writer: &mut dyn io::Write,
    ) -> Result<(), Error> {
        info!(primitives = primitives.len(); "Exporting SVG");
        let doc = self.render_document(primitives, size);
        svg::write(writer, &doc).map_err(Error::Io)?;
        debug!(width = size.width(), height = size.height(); "SVG written");
        Ok(())
    }
}

/// Formats path commands as SVG path data, e.g. `M10,20 L10,5`.
fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(p) => format!("M{},{}", p.x(), p.y()),
            PathCommand::LineTo(p) => format!("L{},{}", p.x(), p.y()),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => format!(
                "C{},{} {},{} {},{}",
                control1.x(),
                control1.y(),
                control2.x(),
                control2.y(),
                end.x(),
                end.y()
            ),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_curve(curve: &CurvePrimitive) -> svg_element::Path {
    let stroke = curve.stroke();
    svg_element::Path::new()
        .set("d", path_data(curve.commands()))
        .set("fill", "none")
        .set("stroke", stroke.color().to_string())
        .set("stroke-opacity", stroke.color().alpha())
        .set("stroke-width", stroke.width())
}

fn render_rect(rect: &RectPrimitive) -> svg_element::Rectangle {
    let origin = rect.origin();
    let size = rect.size();
    let color = rect.fill().color();
    svg_element::Rectangle::new()
        .set("x", origin.x())
        .set("y", origin.y())
        .set("width", size.width())
        .set("height", size.height())
        .set("fill", color.to_string())
        .set("fill-opacity", color.alpha())
}

fn render_text(text: &TextPrimitive) -> svg_element::Text {
    let definition = text.definition();
    let color = definition.color();
    svg_element::Text::new("")
        .set("x", text.position().x())
        .set("y", text.position().y())
        .set("text-anchor", definition.anchor().to_svg_value())
        .set("font-family", definition.font_family())
        .set("font-size", definition.font_size())
        .set("fill", color.to_string())
        .set("fill-opacity", color.alpha())
        .add(SvgText::new(text.content()))
}
