//! Geometric primitives for diagram layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`GridPoint`] - An integer coordinate, used for curve control points
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Coordinates follow the SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Arcs are drawn *above* the token baseline, so a higher arc level means a
//! smaller y value.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use deparc_core::geometry::Point;
/// let foot = Point::new(10.0, 20.0);
/// let shelf = foot.with_y(5.0);
/// assert_eq!(shelf.x(), 10.0);
/// assert_eq!(shelf.y(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Same x, new y.
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Top-left corner of a box of `size` centered on this point.
    pub fn corner_of(self, size: Size) -> Point {
        Point::new(self.x - size.width / 2.0, self.y - size.height / 2.0)
    }
}

/// An integer point.
///
/// Curve control points are emitted with integer coordinates so that the
/// same document always serializes to byte-identical path data.
///
/// ```
/// # use deparc_core::geometry::{GridPoint, Point};
/// let grid = GridPoint::from(Point::new(12.9, 40.2));
/// assert_eq!(grid, GridPoint::new(12, 40));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }
}

impl From<Point> for GridPoint {
    /// Truncates both coordinates toward zero.
    fn from(point: Point) -> Self {
        Self {
            x: point.x as i32,
            y: point.y as i32,
        }
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_with_y() {
        let point = Point::new(3.5, 4.2).with_y(2.0);
        assert_approx_eq!(f32, point.x(), 3.5);
        assert_approx_eq!(f32, point.y(), 2.0);
    }

    #[test]
    fn test_grid_point_truncates_toward_zero() {
        assert_eq!(GridPoint::from(Point::new(9.99, 0.5)), GridPoint::new(9, 0));
        assert_eq!(GridPoint::from(Point::new(-3.7, 2.0)), GridPoint::new(-3, 2));
    }

    #[test]
    fn test_corner_of_centered_box() {
        let corner = Point::new(50.0, 20.0).corner_of(Size::new(40.0, 10.0));
        assert_approx_eq!(f32, corner.x(), 30.0);
        assert_approx_eq!(f32, corner.y(), 15.0);
    }
}
