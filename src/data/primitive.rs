#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point};
use crate::StrokeScalar;

/// Idealized geometry that replaces a recognized freehand stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Primitive<T> {
  Segment([Point<T>; 2]),
  Rectangle(BoundingBox<T>),
  Circle { center: Point<T>, radius: T },
  Triangle([Point<T>; 3]),
}

impl<T: StrokeScalar> Primitive<T> {
  /// Closed or open polyline tracing the primitive. Circles are approximated
  /// with `circle_segments` chords (at least 3).
  pub fn outline(&self, circle_segments: usize) -> Vec<Point<T>> {
    match self {
      Primitive::Segment(pts) => pts.to_vec(),
      Primitive::Rectangle(bbox) => vec![
        bbox.min,
        Point::new([bbox.max[0], bbox.min[1]]),
        bbox.max,
        Point::new([bbox.min[0], bbox.max[1]]),
        bbox.min,
      ],
      Primitive::Circle { center, radius } => {
        let n = circle_segments.max(3);
        let step = T::from_constant(std::f64::consts::TAU / n as f64);
        (0..=n)
          .map(|i| {
            let angle = step * T::from_constant(i as f64);
            Point::new([
              center[0] + *radius * angle.cos(),
              center[1] + *radius * angle.sin(),
            ])
          })
          .collect()
      }
      Primitive::Triangle([a, b, c]) => vec![*a, *b, *c, *a],
    }
  }

  pub fn is_closed(&self) -> bool {
    !matches!(self, Primitive::Segment(_))
  }
}
