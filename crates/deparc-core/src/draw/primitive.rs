//! The atomic renderable units of a diagram.

use crate::{
    draw::{DrawLayer, FillDefinition, StrokeDefinition, TextDefinition},
    geometry::{GridPoint, Point, Size},
};

/// One step of a curve's path.
///
/// The set mirrors the move/line/cubic subset shared by every common
/// vector format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo(GridPoint),
    LineTo(GridPoint),
    CubicTo {
        control1: GridPoint,
        control2: GridPoint,
        end: GridPoint,
    },
}

impl PathCommand {
    /// The point the pen rests on after this command.
    pub fn end_point(&self) -> GridPoint {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => *point,
            Self::CubicTo { end, .. } => *end,
        }
    }
}

/// A stroked, unfilled path.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePrimitive {
    commands: Vec<PathCommand>,
    stroke: StrokeDefinition,
}

impl CurvePrimitive {
    pub fn new(commands: Vec<PathCommand>, stroke: StrokeDefinition) -> Self {
        Self { commands, stroke }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

/// A filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    origin: Point,
    size: Size,
    fill: FillDefinition,
}

impl RectPrimitive {
    /// Creates a rectangle of `size` centered on `center`.
    pub fn centered(center: Point, size: Size, fill: FillDefinition) -> Self {
        Self {
            origin: center.corner_of(size),
            size,
            fill,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x() + self.size.width() / 2.0,
            self.origin.y() + self.size.height() / 2.0,
        )
    }

    pub fn fill(&self) -> &FillDefinition {
        &self.fill
    }
}

/// A single line of text.
///
/// `position` is the anchor point on the text baseline; how the text sits
/// horizontally around it is given by the definition's anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    position: Point,
    content: String,
    definition: TextDefinition,
}

impl TextPrimitive {
    pub fn new(position: Point, content: impl Into<String>, definition: TextDefinition) -> Self {
        Self {
            position,
            content: content.into(),
            definition,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

/// One atomic renderable unit of the output drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Curve(CurvePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    /// The fixed layer this kind of primitive is drawn on.
    pub fn layer(&self) -> DrawLayer {
        match self {
            Self::Curve(_) => DrawLayer::Curve,
            Self::Rect(_) => DrawLayer::LabelBackground,
            Self::Text(_) => DrawLayer::Text,
        }
    }
}

impl From<CurvePrimitive> for Primitive {
    fn from(curve: CurvePrimitive) -> Self {
        Self::Curve(curve)
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(rect: RectPrimitive) -> Self {
        Self::Rect(rect)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(text: TextPrimitive) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_rect_centered() {
        let rect = RectPrimitive::centered(
            Point::new(100.0, 40.0),
            Size::new(30.0, 20.0),
            FillDefinition::default(),
        );
        assert_approx_eq!(f32, rect.origin().x(), 85.0);
        assert_approx_eq!(f32, rect.origin().y(), 30.0);
        assert_approx_eq!(f32, rect.size().width(), 30.0);
        assert_approx_eq!(f32, rect.size().height(), 20.0);
        assert_eq!(rect.center(), Point::new(100.0, 40.0));
    }

    #[test]
    fn test_path_command_end_point() {
        let cubic = PathCommand::CubicTo {
            control1: GridPoint::new(0, 0),
            control2: GridPoint::new(1, 1),
            end: GridPoint::new(5, 6),
        };
        assert_eq!(cubic.end_point(), GridPoint::new(5, 6));
        assert_eq!(
            PathCommand::LineTo(GridPoint::new(2, 3)).end_point(),
            GridPoint::new(2, 3)
        );
    }

    #[test]
    fn test_primitive_layers() {
        let curve: Primitive = CurvePrimitive::new(Vec::new(), StrokeDefinition::default()).into();
        let rect: Primitive =
            RectPrimitive::centered(Point::default(), Size::default(), FillDefinition::default())
                .into();
        let text: Primitive =
            TextPrimitive::new(Point::default(), "x", TextDefinition::default()).into();

        assert_eq!(curve.layer(), DrawLayer::Curve);
        assert_eq!(rect.layer(), DrawLayer::LabelBackground);
        assert_eq!(text.layer(), DrawLayer::Text);
    }
}
