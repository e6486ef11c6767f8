use super::Extent;
use crate::algorithms::simplification::rdp::simplify_indices;
use crate::config::RecognizerConfig;
use crate::data::{BoundingBox, Point, Shape};
use crate::StrokeScalar;

/// Everything the rule cascade looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features<T> {
  /// Number of raw samples.
  pub point_count: usize,
  pub extent: Extent<T>,
  /// Points kept by simplification at `extent.tolerance`, endpoints included.
  pub vertex_count: usize,
  /// Mean relative distance from the inscribed circle, see [radial_deviation].
  pub radial_deviation: Option<T>,
}

impl<T: StrokeScalar> Features<T> {
  /// $O(n^2)$ worst case, dominated by simplification.
  pub fn measure(pts: &[Point<T>], config: &RecognizerConfig) -> Option<Features<T>> {
    let extent = Extent::measure(pts, config.tolerance_ratio, config.closure_ratio)?;
    let vertex_count = simplify_indices(pts, extent.tolerance).len();
    Some(Features {
      point_count: pts.len(),
      extent,
      vertex_count,
      radial_deviation: radial_deviation(pts, &extent.bbox),
    })
  }
}

/// $O(n)$ How far `pts` stray from the circle inscribed in `bbox`.
///
/// The circle is centered on the box with radius `(width + height) / 4`.
/// Returns the mean of `|d - r| / r` over all points, where `d` is the
/// distance to the center, or `None` when `bbox` is degenerate or `pts` is
/// empty.
pub fn radial_deviation<T>(pts: &[Point<T>], bbox: &BoundingBox<T>) -> Option<T>
where
  T: StrokeScalar,
{
  if pts.is_empty() || bbox.is_degenerate() {
    return None;
  }
  let radius = (bbox.width() + bbox.height()) / T::from_constant(4.0);
  let center = bbox.center();
  let total = pts
    .iter()
    .fold(T::zero(), |acc, pt| acc + (pt.distance(&center) - radius).abs());
  Some(total / T::from_constant(pts.len() as f64) / radius)
}

/// The rules of the classifier, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
  /// Fewer than `min_points` samples.
  TooShort,
  /// At most two vertices, or the stroke does not return to its start.
  Line,
  /// Closed with four vertices (three corners plus the repeated start).
  Triangle,
  /// Closed with five vertices.
  Square,
  /// Radial deviation within `circle_tolerance`.
  Circle,
  /// Closed with more than five vertices. Decided by aspect ratio.
  AspectFallback,
  /// No rule applied.
  Unmatched,
}

impl Rule {
  /// Rules that inspect [Features], by priority. The first rule returning a
  /// shape decides.
  pub const CASCADE: [Rule; 5] = [
    Rule::Line,
    Rule::Triangle,
    Rule::Square,
    Rule::Circle,
    Rule::AspectFallback,
  ];

  pub fn apply<T>(self, features: &Features<T>, config: &RecognizerConfig) -> Option<Shape>
  where
    T: StrokeScalar,
  {
    let closed = features.extent.is_closed;
    let vertices = features.vertex_count;
    match self {
      Rule::TooShort | Rule::Unmatched => None,
      Rule::Line if vertices <= 2 || !closed => Some(Shape::Line),
      Rule::Triangle if closed && vertices == 4 => Some(Shape::Triangle),
      Rule::Square if closed && vertices == 5 => Some(Shape::Square),
      Rule::Circle => match features.radial_deviation {
        Some(dev) if dev < T::from_constant(config.circle_tolerance) => Some(Shape::Circle),
        _ => None,
      },
      Rule::AspectFallback if closed && vertices > 5 => {
        let (low, high) = config.square_aspect;
        match features.extent.bbox.aspect_ratio() {
          Some(aspect) if aspect > T::from_constant(low) && aspect < T::from_constant(high) => {
            Some(Shape::Square)
          }
          _ => Some(Shape::Triangle),
        }
      }
      _ => None,
    }
  }
}

/// Run [Rule::CASCADE] and report the deciding rule.
pub fn classify<T>(features: &Features<T>, config: &RecognizerConfig) -> (Rule, Option<Shape>)
where
  T: StrokeScalar,
{
  Rule::CASCADE
    .iter()
    .find_map(|rule| rule.apply(features, config).map(|shape| (*rule, Some(shape))))
    .unwrap_or((Rule::Unmatched, None))
}
