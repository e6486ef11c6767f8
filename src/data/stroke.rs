use claims::debug_assert_ok;
use std::ops::Deref;

use super::{BoundingBox, Point, Primitive, Shape};
use crate::algorithms::recognition::Recognizer;
use crate::{Error, StrokeScalar};

/// Longest gesture accepted by [Stroke::new].
pub const MAX_STROKE_POINTS: usize = 1 << 20;

/// One pen-down to pen-up gesture, in sampling order.
///
/// Invariants:
/// * At least one point.
/// * Every coordinate is finite.
/// * No more than [MAX_STROKE_POINTS] points.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke<T> {
  points: Vec<Point<T>>,
}

impl<T: StrokeScalar> Stroke<T> {
  /// $O(n)$
  ///
  /// # Errors
  /// * [Error::InsufficientPoints] if `points` is empty.
  /// * [Error::NonFiniteCoordinate] if any coordinate is NaN or infinite.
  /// * [Error::StrokeTooLong] if there are more than [MAX_STROKE_POINTS] points.
  pub fn new(points: Vec<Point<T>>) -> Result<Stroke<T>, Error> {
    let stroke = Stroke { points };
    stroke.validate()?;
    Ok(stroke)
  }

  /// $O(1)$ Assume that the points form a valid stroke.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Stroke<T> {
    let stroke = Stroke { points };
    debug_assert_ok!(stroke.validate());
    stroke
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.is_empty() {
      return Err(Error::InsufficientPoints);
    }
    if self.points.len() > MAX_STROKE_POINTS {
      return Err(Error::StrokeTooLong);
    }
    if !self.points.iter().all(Point::is_finite) {
      return Err(Error::NonFiniteCoordinate);
    }
    Ok(())
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.points
  }

  pub fn start(&self) -> &Point<T> {
    &self.points[0]
  }

  pub fn end(&self) -> &Point<T> {
    &self.points[self.points.len() - 1]
  }

  /// $O(n)$ `None` only for an unchecked empty stroke.
  pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
    BoundingBox::from_points(&self.points)
  }

  /// Classify with the default [Recognizer].
  pub fn recognize(&self) -> Option<Shape> {
    self.recognize_with(&Recognizer::new())
  }

  pub fn recognize_with(&self, recognizer: &Recognizer) -> Option<Shape> {
    recognizer.recognize(&self.points)
  }

  /// Recognize the stroke and return the geometry it should be drawn as.
  pub fn idealize(&self) -> Option<(Shape, Primitive<T>)> {
    let shape = self.recognize()?;
    Some((shape, shape.idealize(&self.points)?))
  }
}

impl<T> Deref for Stroke<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.points
  }
}
