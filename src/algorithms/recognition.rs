//! Gesture classification.
//!
//! A gesture is measured once ([Features]) and then run through an ordered
//! list of [Rules](Rule). The first rule that produces a shape decides.
//!
//! Measuring:
//! * The bounding box gives the scale reference `size = max(width, height)`.
//! * The stroke is simplified with [simplify_indices] at `size * tolerance_ratio`.
//!   Because the kept set includes both endpoints, a closed polygon with `k`
//!   corners simplifies to `k + 1` vertices.
//! * The stroke is closed when its endpoints are less than `size * closure_ratio`
//!   apart.
//! * The radial deviation compares the raw samples with the circle inscribed
//!   in the bounding box.
//!
//! [simplify_indices]: crate::algorithms::simplification::rdp::simplify_indices
use crate::config::RecognizerConfig;
use crate::data::{Point, Shape};
use crate::{Error, StrokeScalar};

mod classifier;
mod extent;

pub use classifier::{classify, radial_deviation, Features, Rule};
pub use extent::Extent;

/// Outcome of [Recognizer::explain].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recognition<T> {
  pub shape: Option<Shape>,
  /// The rule that decided. [Rule::Unmatched] when none did.
  pub rule: Rule,
  /// `None` when the stroke was rejected before measuring.
  pub features: Option<Features<T>>,
}

/// Classifier with a fixed [RecognizerConfig].
///
/// Recognizers hold no state between calls and can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Recognizer {
  config: RecognizerConfig,
}

impl Recognizer {
  pub const fn new() -> Recognizer {
    Recognizer {
      config: RecognizerConfig::new(),
    }
  }

  /// # Errors
  /// [Error::InvalidConfig] if `config` does not validate.
  pub fn with_config(config: RecognizerConfig) -> Result<Recognizer, Error> {
    config.validate()?;
    Ok(Recognizer { config })
  }

  pub fn config(&self) -> &RecognizerConfig {
    &self.config
  }

  /// $O(n^2)$ worst case. See [recognize].
  pub fn recognize<T>(&self, pts: &[Point<T>]) -> Option<Shape>
  where
    T: StrokeScalar,
  {
    self.explain(pts).shape
  }

  /// Classify `pts` and report how the decision was reached.
  pub fn explain<T>(&self, pts: &[Point<T>]) -> Recognition<T>
  where
    T: StrokeScalar,
  {
    let features = if pts.len() < self.config.min_points.max(1) {
      None
    } else {
      Features::measure(pts, &self.config)
    };
    let features = match features {
      Some(features) => features,
      None => {
        log::debug!(
          "stroke of {} points is too short (minimum {})",
          pts.len(),
          self.config.min_points
        );
        return Recognition {
          shape: None,
          rule: Rule::TooShort,
          features: None,
        };
      }
    };
    let (rule, shape) = classify(&features, &self.config);
    log::debug!(
      "{:?} by {:?}: {} points, {} vertices, closed: {}, radial deviation: {:?}",
      shape,
      rule,
      features.point_count,
      features.vertex_count,
      features.extent.is_closed,
      features.radial_deviation
    );
    Recognition {
      shape,
      rule,
      features: Some(features),
    }
  }
}

/// $O(n^2)$ Classify a gesture with the default configuration.
///
/// Returns `None` for strokes with fewer than
/// [MIN_POINTS](crate::config::MIN_POINTS) samples and for closed shapes that
/// match no rule. The result does not change when the gesture is uniformly
/// scaled or translated.
///
/// # Examples
///
/// ```rust
/// # use scrawl::{recognize, samples, Point, Shape};
/// let square = samples::square(Point::new([10., 10.]), 120., 12);
/// assert_eq!(recognize(&square), Some(Shape::Square));
///
/// let dot = vec![Point::new([1., 1.]); 3];
/// assert_eq!(recognize(&dot), None);
/// ```
pub fn recognize<T>(pts: &[Point<T>]) -> Option<Shape>
where
  T: StrokeScalar,
{
  Recognizer::new().recognize(pts)
}
