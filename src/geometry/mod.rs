//! .
//!
//! The origin of the coordinate system is the top-left corner of the canvas, `y` grows
//! downward. Units are canvas pixels.

use {
  euclid::{Box2D, Point2D, Rect, Size2D},
  std::fmt
};

pub mod color;
pub use color::Color;

/// Canvas coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct CanvasSpace;

pub type Point = Point2D<f64, CanvasSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
  /// Inner circle, two branches grow out of it.
  Pad,
  /// Leaf circle.
  Pear,
}

impl fmt::Display for ShapeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      ShapeKind::Pad => "pad",
      ShapeKind::Pear => "pear"
    })
  }
}

/// A filled circle, stored as its bounding square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shape {
  bounds: Rect<f64, CanvasSpace>,
  color: Color,
  kind: ShapeKind,
}

impl Shape {
  pub fn circle(center: Point, radius: f64, color: Color, kind: ShapeKind) -> Self {
    Self {
      bounds: Rect::new(
        Point2D::new(center.x - radius, center.y - radius),
        Size2D::new(radius * 2.0, radius * 2.0)
      ),
      color,
      kind
    }
  }

  /// Left edge of the bounding square.
  pub fn x(&self) -> f64 { self.bounds.origin.x }
  /// Top edge of the bounding square.
  pub fn y(&self) -> f64 { self.bounds.origin.y }
  pub fn width(&self) -> f64 { self.bounds.size.width }
  pub fn height(&self) -> f64 { self.bounds.size.height }
  pub fn color(&self) -> Color { self.color }
  pub fn kind(&self) -> ShapeKind { self.kind }

  pub fn radius(&self) -> f64 {
    self.bounds.size.width / 2.0
  }

  pub fn center(&self) -> Point {
    self.bounds.center()
  }
}

impl BoundingBox<f64, CanvasSpace> for Shape {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> {
    self.bounds.to_box2d()
  }
}

/// `kind x y width height color`
impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {:.3} {:.3} {:.3} {:.3} {}",
      self.kind, self.x(), self.y(), self.width(), self.height(), self.color)
  }
}
