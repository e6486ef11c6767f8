#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;
use crate::StrokeScalar;

/// Axis-aligned extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox<T> {
  pub min: Point<T>,
  pub max: Point<T>,
}

impl<T: StrokeScalar> BoundingBox<T> {
  /// $O(n)$ Smallest box containing every point. `None` for an empty slice.
  pub fn from_points(pts: &[Point<T>]) -> Option<BoundingBox<T>> {
    let (first, rest) = pts.split_first()?;
    let init = BoundingBox {
      min: *first,
      max: *first,
    };
    Some(rest.iter().fold(init, |bbox, pt| BoundingBox {
      min: Point::new([bbox.min[0].min(pt[0]), bbox.min[1].min(pt[1])]),
      max: Point::new([bbox.max[0].max(pt[0]), bbox.max[1].max(pt[1])]),
    }))
  }

  pub fn width(&self) -> T {
    self.max[0] - self.min[0]
  }

  pub fn height(&self) -> T {
    self.max[1] - self.min[1]
  }

  /// The larger of width and height. Used as the scale reference for a gesture.
  pub fn size(&self) -> T {
    self.width().max(self.height())
  }

  pub fn center(&self) -> Point<T> {
    let two = T::from_constant(2.0);
    Point::new([
      (self.min[0] + self.max[0]) / two,
      (self.min[1] + self.max[1]) / two,
    ])
  }

  /// `width / height`, or `None` for a box with no height.
  pub fn aspect_ratio(&self) -> Option<T> {
    let height = self.height();
    if height > T::zero() {
      Some(self.width() / height)
    } else {
      None
    }
  }

  pub fn is_degenerate(&self) -> bool {
    self.size() <= T::zero()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use test_strategy::proptest;

  #[test]
  fn empty_has_no_box() {
    let pts: Vec<Point<f64>> = vec![];
    assert_eq!(BoundingBox::from_points(&pts), None);
  }

  #[test]
  fn single_point_is_degenerate() {
    let bbox = BoundingBox::from_points(&[Point::new([3.0, 4.0])]).unwrap();
    assert!(bbox.is_degenerate());
    assert_eq!(bbox.center(), Point::new([3.0, 4.0]));
    assert_eq!(bbox.aspect_ratio(), None);
  }

  #[test]
  fn extent_of_rectangle() {
    let bbox = BoundingBox::from_points(&[
      Point::new([10.0, 5.0]),
      Point::new([-30.0, 25.0]),
      Point::new([0.0, -15.0]),
    ])
    .unwrap();
    assert_eq!(bbox.min, Point::new([-30.0, -15.0]));
    assert_eq!(bbox.max, Point::new([10.0, 25.0]));
    assert_eq!(bbox.width(), 40.0);
    assert_eq!(bbox.height(), 40.0);
    assert_eq!(bbox.size(), 40.0);
    assert_eq!(bbox.center(), Point::new([-10.0, 5.0]));
    assert_eq!(bbox.aspect_ratio(), Some(1.0));
  }

  #[proptest]
  fn contains_every_point(#[strategy(any_stroke(1..64))] pts: Vec<Point<f64>>) {
    let bbox = BoundingBox::from_points(&pts).unwrap();
    for pt in pts.iter() {
      assert!(bbox.min[0] <= pt[0] && pt[0] <= bbox.max[0]);
      assert!(bbox.min[1] <= pt[1] && pt[1] <= bbox.max[1]);
    }
  }
}
