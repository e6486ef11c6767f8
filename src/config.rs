//! Tuning knobs for the shape recognizer.
//!
//! The defaults were calibrated by hand against mouse and touch input. They
//! are all relative to the gesture's own bounding box, so they do not depend
//! on the coordinate space of the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Strokes with fewer samples than this are never classified.
pub const MIN_POINTS: usize = 5;
/// Simplification tolerance as a fraction of the gesture size.
pub const TOLERANCE_RATIO: f64 = 0.05;
/// Start and end closer than this fraction of the gesture size close the shape.
pub const CLOSURE_RATIO: f64 = 0.3;
/// Largest mean radial deviation, relative to the radius, accepted as a circle.
pub const CIRCLE_TOLERANCE: f64 = 0.15;
/// Exclusive `width / height` window in which a noisy closed shape is a square.
pub const SQUARE_ASPECT: (f64, f64) = (0.7, 1.3);

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecognizerConfig {
  pub min_points: usize,
  pub tolerance_ratio: f64,
  pub closure_ratio: f64,
  pub circle_tolerance: f64,
  pub square_aspect: (f64, f64),
}

impl RecognizerConfig {
  pub const fn new() -> RecognizerConfig {
    RecognizerConfig {
      min_points: MIN_POINTS,
      tolerance_ratio: TOLERANCE_RATIO,
      closure_ratio: CLOSURE_RATIO,
      circle_tolerance: CIRCLE_TOLERANCE,
      square_aspect: SQUARE_ASPECT,
    }
  }

  #[must_use]
  pub fn with_min_points(mut self, min_points: usize) -> Self {
    self.min_points = min_points;
    self
  }

  #[must_use]
  pub fn with_tolerance_ratio(mut self, ratio: f64) -> Self {
    self.tolerance_ratio = ratio;
    self
  }

  #[must_use]
  pub fn with_closure_ratio(mut self, ratio: f64) -> Self {
    self.closure_ratio = ratio;
    self
  }

  #[must_use]
  pub fn with_circle_tolerance(mut self, tolerance: f64) -> Self {
    self.circle_tolerance = tolerance;
    self
  }

  #[must_use]
  pub fn with_square_aspect(mut self, low: f64, high: f64) -> Self {
    self.square_aspect = (low, high);
    self
  }

  /// # Errors
  /// [Error::InvalidConfig] if a ratio is not a positive finite number or if
  /// the square aspect window is empty.
  pub fn validate(&self) -> Result<(), Error> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    let (low, high) = self.square_aspect;
    if positive(self.tolerance_ratio)
      && positive(self.closure_ratio)
      && positive(self.circle_tolerance)
      && positive(low)
      && positive(high)
      && low < high
    {
      Ok(())
    } else {
      Err(Error::InvalidConfig)
    }
  }
}

impl Default for RecognizerConfig {
  fn default() -> Self {
    RecognizerConfig::new()
  }
}
