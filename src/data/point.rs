use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::StrokeScalar;

/// A pointer sample in the caller's coordinate space.
///
/// All points handed to the recognizer in one call must share a coordinate
/// space. The recognizer never looks at the space itself, only at relative
/// distances.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: StrokeScalar> Point<T> {
  pub fn is_finite(&self) -> bool {
    self.array[0].is_finite() && self.array[1].is_finite()
  }

  pub fn distance(&self, other: &Point<T>) -> T {
    (self.array[0] - other.array[0]).hypot(self.array[1] - other.array[1])
  }

  /// Move the point by `(dx, dy)`.
  #[must_use]
  pub fn translate(&self, dx: T, dy: T) -> Point<T> {
    Point::new([self.array[0] + dx, self.array[1] + dy])
  }

  /// Scale the point about the origin.
  #[must_use]
  pub fn scale(&self, factor: T) -> Point<T> {
    Point::new([self.array[0] * factor, self.array[1] * factor])
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use ordered_float::OrderedFloat;
  use proptest::prelude::*;

  proptest! {
    #[test]
    fn distance_is_symmetric(pt1 in any_point(), pt2 in any_point()) {
      prop_assert_eq!(pt1.distance(&pt2), pt2.distance(&pt1));
    }

    #[test]
    fn translation_preserves_distance(pt1 in any_point(), pt2 in any_point(), dx in -1e3..1e3_f64, dy in -1e3..1e3_f64) {
      let before = pt1.distance(&pt2);
      let after = pt1.translate(dx, dy).distance(&pt2.translate(dx, dy));
      prop_assert!((before - after).abs() <= 1e-6 * (1.0 + before));
    }
  }

  #[test]
  fn distance_3_4_5() {
    let p = Point::new([0.0, 0.0]);
    let q = Point::new([3.0, 4.0]);
    assert_eq!(p.distance(&q), 5.0);
  }

  #[test]
  fn accessors() {
    let p = Point::from((1.5_f32, -2.5));
    assert_eq!(*p.x_coord(), 1.5);
    assert_eq!(*p.y_coord(), -2.5);
    assert_eq!(p[0], 1.5);
    assert_eq!(p.cast(f64::from), Point::new([1.5_f64, -2.5]));
  }

  #[test]
  fn finiteness() {
    assert!(Point::new([1.0_f64, 2.0]).is_finite());
    assert!(!Point::new([f64::NAN, 2.0]).is_finite());
    assert!(!Point::new([1.0, f64::INFINITY]).is_finite());
    assert!(Point::new([OrderedFloat(1.0_f64), OrderedFloat(2.0)]).is_finite());
  }

  #[test]
  fn random_points_are_unit_square() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::SmallRng::seed_from_u64(3);
    for _ in 0..100 {
      let pt: Point<f64> = rng.gen();
      assert!((0.0..1.0).contains(&pt[0]) && (0.0..1.0).contains(&pt[1]));
    }
  }

  #[test]
  fn scale_about_origin() {
    let p = Point::new([2.0_f64, -3.0]).scale(10.0);
    assert_eq!(p, Point::new([20.0, -30.0]));
  }
}
