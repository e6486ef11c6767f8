use crate::data::{BoundingBox, Point};
use crate::StrokeScalar;

/// Scale reference and closure of a gesture.
///
/// Both thresholds derived here are proportional to the gesture's own
/// bounding box, so a tiny circle and a huge circle measure the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<T> {
  pub bbox: BoundingBox<T>,
  /// `max(width, height)` of the bounding box.
  pub size: T,
  /// Simplification tolerance, `size * tolerance_ratio`.
  pub tolerance: T,
  /// Distance between the first and the last sample.
  pub gap: T,
  /// `gap < size * closure_ratio`.
  pub is_closed: bool,
}

impl<T: StrokeScalar> Extent<T> {
  /// $O(n)$ `None` for an empty slice.
  pub fn measure(pts: &[Point<T>], tolerance_ratio: f64, closure_ratio: f64) -> Option<Extent<T>> {
    let bbox = BoundingBox::from_points(pts)?;
    let (first, last) = (pts.first()?, pts.last()?);
    let size = bbox.size();
    let gap = first.distance(last);
    Some(Extent {
      bbox,
      size,
      tolerance: size * T::from_constant(tolerance_ratio),
      gap,
      is_closed: gap < size * T::from_constant(closure_ratio),
    })
  }
}
