// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Recognize freehand pointer gestures as idealized geometric shapes.
//!
//! A gesture is an ordered list of [Points](data::Point) sampled between
//! pen-down and pen-up. [recognize] decides whether the gesture was meant to
//! be a [line](data::Shape::Line), [triangle](data::Shape::Triangle),
//! [square](data::Shape::Square) or [circle](data::Shape::Circle), or returns
//! `None` for a free-form scribble.
//!
//! ```rust
//! # use scrawl::{recognize, Point, Shape};
//! let stroke: Vec<Point<f64>> = (0..=30).map(|x| Point::new([x as f64 * 10., 0.])).collect();
//! assert_eq!(recognize(&stroke), Some(Shape::Line));
//! ```
use num_traits::Float;
use ordered_float::OrderedFloat;

pub mod algorithms;
pub mod config;
pub mod data;
pub mod samples;

#[cfg(test)]
pub mod testing;

#[doc(inline)]
pub use algorithms::recognition::{recognize, Recognition, Recognizer, Rule};
#[doc(inline)]
pub use algorithms::simplification::rdp::{simplify, simplify_indices};
pub use config::RecognizerConfig;
pub use data::{BoundingBox, Point, Primitive, Shape, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientPoints,
  NonFiniteCoordinate,
  StrokeTooLong,
  /// A tuning ratio is not a positive finite number, or the aspect window is empty.
  InvalidConfig,
  UnknownShape,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::StrokeTooLong => write!(
        f,
        "Stroke exceeds {} points",
        data::stroke::MAX_STROKE_POINTS
      ),
      Error::InvalidConfig => write!(f, "Invalid recognizer configuration"),
      Error::UnknownShape => write!(f, "Unknown shape name"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type accepted by the recognizer.
pub trait StrokeScalar: Float + std::fmt::Debug {
  fn from_constant(val: f64) -> Self;
  /// Twice the signed area of the triangle `p`, `q`, `r`. Positive when the
  /// points turn counter-clockwise.
  fn cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl StrokeScalar for $ty {
        fn from_constant(val: f64) -> Self {
          val as $ty
        }

        // Exact orientation from `geometry_predicates`. The rounded result
        // is zero iff the three points are colinear.
        fn cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Self {
          geometry_predicates::predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          ) as $ty
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl StrokeScalar for OrderedFloat<$ty> {
        fn from_constant(val: f64) -> Self {
          OrderedFloat(val as $ty)
        }

        fn cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Self {
          OrderedFloat(<$ty as StrokeScalar>::cross(
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
            &[r[0].into_inner(), r[1].into_inner()],
          ))
        }
      }
    )*
  };
}

floating_precision!(f32, f64);
wrapped_floating_precision!(f32, f64);
