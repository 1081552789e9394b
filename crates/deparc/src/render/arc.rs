//! Geometry of a single arc.

use deparc_core::{
    document::Arc,
    draw::{
        CurvePrimitive, FillDefinition, PathCommand, RectPrimitive, StrokeDefinition,
        TextDefinition, TextPrimitive,
    },
    geometry::{GridPoint, Point, Size},
    measure::TextMeasure,
};

use crate::layout::TokenLayout;

/// Fraction of the foot-to-shelf distance covered by the straight lead-ins.
const LEAD_FRACTION: f32 = 0.6;
/// Horizontal margin on each side of the label inside its background.
const LABEL_MARGIN: f32 = 2.0;
/// Lifts the label baseline so the text sits centered on the shelf.
const LABEL_BASELINE_LIFT: f32 = 4.0;

/// The three primitives that draw one arc.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGeometry {
    curve: CurvePrimitive,
    background: RectPrimitive,
    label: TextPrimitive,
}

impl ArcGeometry {
    pub fn curve(&self) -> &CurvePrimitive {
        &self.curve
    }

    /// The plaque that hides the curve behind the label.
    pub fn background(&self) -> &RectPrimitive {
        &self.background
    }

    pub fn label(&self) -> &TextPrimitive {
        &self.label
    }

    /// Splits the geometry into curve, background and label, in that order.
    pub fn into_parts(self) -> (CurvePrimitive, RectPrimitive, TextPrimitive) {
        (self.curve, self.background, self.label)
    }
}

/// Builds the curve, label background and label of an arc.
///
/// The arc rises from a foot `font_size` above the token baseline to a
/// horizontal shelf `level × level_height` higher. Straight lead-ins cover
/// the lower part of the rise; two cubic segments meet at the shelf
/// midpoint, where the label sits on its background.
#[derive(Debug, Clone)]
pub struct ArcGeometryBuilder<'m> {
    measure: &'m dyn TextMeasure,
    font_size: f32,
    level_height: f32,
    stroke: StrokeDefinition,
    background: FillDefinition,
    label: TextDefinition,
}

impl<'m> ArcGeometryBuilder<'m> {
    /// Creates a builder with default sizes and styles.
    pub fn new(measure: &'m dyn TextMeasure) -> Self {
        Self {
            measure,
            font_size: 24.0,
            level_height: 20.0,
            stroke: StrokeDefinition::default(),
            background: FillDefinition::default(),
            label: TextDefinition::default().with_font_size(20),
        }
    }

    /// Set the token font size, which decides where the arc foot sits.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_level_height(mut self, level_height: f32) -> Self {
        self.level_height = level_height;
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_background(mut self, background: FillDefinition) -> Self {
        self.background = background;
        self
    }

    /// Set the label text style; its font size is the label font size.
    pub fn with_label(mut self, label: TextDefinition) -> Self {
        self.label = label;
        self
    }

    /// Builds the geometry of `arc` drawn at `level` over `layout`.
    pub fn build(&self, arc: &Arc, level: u32, layout: &TokenLayout) -> ArcGeometry {
        let label_font_size = f32::from(self.label.font_size());

        let from = layout.center(arc.source());
        let to = layout.center(arc.target());
        let mid = from + ((to - from) / 2.0).floor();

        let foot = layout.baseline() - self.font_size;
        let shelf = foot - level as f32 * self.level_height;
        let lead = shelf + (foot - shelf) * LEAD_FRACTION;

        let start = Point::new(from, foot);
        let end = Point::new(to, foot);
        let apex = Point::new(mid, shelf);
        let grid = |point: Point| GridPoint::from(point);

        let commands = vec![
            PathCommand::MoveTo(grid(start)),
            PathCommand::LineTo(grid(start.with_y(lead))),
            PathCommand::CubicTo {
                control1: grid(start.with_y(shelf)),
                control2: grid(start.with_y(shelf)),
                end: grid(apex),
            },
            PathCommand::CubicTo {
                control1: grid(end.with_y(shelf)),
                control2: grid(end.with_y(shelf)),
                end: grid(end.with_y(lead)),
            },
            PathCommand::LineTo(grid(end)),
        ];

        let label_width = self.measure.text_width(arc.label(), label_font_size);
        let background = RectPrimitive::centered(
            apex,
            Size::new(label_width + 2.0 * LABEL_MARGIN, label_font_size),
            self.background.clone(),
        );

        let label = TextPrimitive::new(
            apex.with_y(shelf + label_font_size / 2.0 - LABEL_BASELINE_LIFT),
            arc.label(),
            self.label.clone(),
        );

        ArcGeometry {
            curve: CurvePrimitive::new(commands, self.stroke.clone()),
            background,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use deparc_core::measure::CharWidthEstimate;

    use super::*;
    use crate::layout::{HorizontalLayoutEngine, LevelAssigner};

    fn geometry(source: &str, arc_index: usize) -> (ArcGeometry, TokenLayout) {
        let document = deparc_parser::parse(source).unwrap();
        let levels = LevelAssigner::new().assign(document.arcs());
        let measure = CharWidthEstimate::default();
        let layout = HorizontalLayoutEngine::new(&measure).layout(&document, &levels);
        let arc = document.arcs().get(arc_index).unwrap();
        let level = levels.get(arc_index).unwrap();
        let geometry = ArcGeometryBuilder::new(&measure).build(arc, level, &layout);
        (geometry, layout)
    }

    #[test]
    fn test_curve_command_sequence() {
        let (geometry, layout) = geometry("A B C\nA c B\nB d C\nA b C\n", 2);
        let from = layout.center(0);
        let to = layout.center(2);
        let foot = layout.baseline() - 24.0;
        let shelf = foot - 2.0 * 20.0;
        let lead = shelf + (foot - shelf) * 0.6;
        let mid = from + ((to - from) / 2.0).floor();
        let g = |x: f32, y: f32| GridPoint::new(x as i32, y as i32);

        assert_eq!(
            geometry.curve().commands(),
            &[
                PathCommand::MoveTo(g(from, foot)),
                PathCommand::LineTo(g(from, lead)),
                PathCommand::CubicTo {
                    control1: g(from, shelf),
                    control2: g(from, shelf),
                    end: g(mid, shelf),
                },
                PathCommand::CubicTo {
                    control1: g(to, shelf),
                    control2: g(to, shelf),
                    end: g(to, lead),
                },
                PathCommand::LineTo(g(to, foot)),
            ]
        );
    }

    #[test]
    fn test_higher_level_draws_higher() {
        let (low, _) = geometry("A B C\nA c B\nB d C\nA b C\n", 0);
        let (high, _) = geometry("A B C\nA c B\nB d C\nA b C\n", 2);
        let shelf_y = |g: &ArcGeometry| g.curve().commands()[2].end_point().y();
        assert!(shelf_y(&high) < shelf_y(&low));
    }

    #[test]
    fn test_label_background_is_centered_on_shelf() {
        let (geometry, layout) = geometry("A B\nA nsubj B\n", 0);
        let label_width = 5.0 * 20.0 * 0.65;
        let from = layout.center(0);
        let to = layout.center(1);
        let mid = from + ((to - from) / 2.0).floor();
        let shelf = layout.baseline() - 24.0 - 20.0;

        let background = geometry.background();
        assert_approx_eq!(f32, background.size().width(), label_width + 4.0);
        assert_approx_eq!(f32, background.size().height(), 20.0);
        assert_approx_eq!(f32, background.center().x(), mid);
        assert_approx_eq!(f32, background.center().y(), shelf);
    }

    #[test]
    fn test_label_position_and_style() {
        let (geometry, layout) = geometry("A B\nA nsubj B\n", 0);
        let shelf = layout.baseline() - 24.0 - 20.0;
        let label = geometry.label();
        assert_eq!(label.content(), "nsubj");
        assert_approx_eq!(f32, label.position().y(), shelf + 10.0 - 4.0);
        assert_eq!(label.definition().font_size(), 20);
    }
}
