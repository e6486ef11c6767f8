use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point, Primitive};
use crate::{Error, StrokeScalar};

/// Label assigned to a recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
  Line,
  Triangle,
  Square,
  Circle,
}

impl Shape {
  pub const ALL: [Shape; 4] = [Shape::Line, Shape::Triangle, Shape::Square, Shape::Circle];

  pub fn name(self) -> &'static str {
    match self {
      Shape::Line => "line",
      Shape::Triangle => "triangle",
      Shape::Square => "square",
      Shape::Circle => "circle",
    }
  }

  /// Idealized geometry for a stroke carrying this label.
  ///
  /// Lines run from the first to the last sample. The closed shapes are
  /// derived from the stroke's bounding box only:
  ///
  /// * squares fill the box,
  /// * circles are centred in the box with a radius of half its larger side,
  /// * triangles have their apex at the middle of the top edge and their base
  ///   along the bottom edge.
  ///
  /// Returns `None` for an empty stroke.
  ///
  /// ```rust
  /// # use scrawl::{Point, Primitive, Shape};
  /// let stroke = [Point::new([0., 0.]), Point::new([40., 20.]), Point::new([10., 30.])];
  /// assert_eq!(
  ///   Shape::Circle.idealize(&stroke),
  ///   Some(Primitive::Circle { center: Point::new([20., 15.]), radius: 20. })
  /// );
  /// ```
  pub fn idealize<T: StrokeScalar>(self, pts: &[Point<T>]) -> Option<Primitive<T>> {
    let bbox = BoundingBox::from_points(pts)?;
    let primitive = match self {
      Shape::Line => Primitive::Segment([*pts.first()?, *pts.last()?]),
      Shape::Square => Primitive::Rectangle(bbox),
      Shape::Circle => Primitive::Circle {
        center: bbox.center(),
        radius: bbox.size() / T::from_constant(2.0),
      },
      Shape::Triangle => Primitive::Triangle([
        Point::new([bbox.center()[0], bbox.min[1]]),
        bbox.max,
        Point::new([bbox.min[0], bbox.max[1]]),
      ]),
    };
    Some(primitive)
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Shape {
  type Err = Error;

  fn from_str(s: &str) -> Result<Shape, Error> {
    Shape::ALL
      .iter()
      .copied()
      .find(|shape| shape.name() == s)
      .ok_or(Error::UnknownShape)
  }
}
