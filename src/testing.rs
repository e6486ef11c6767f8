// This module contains strategies for:
//  * points
//  * raw strokes
//  * canonical gestures with a random pose
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Shape};
use crate::samples;

use proptest::collection::*;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

///////////////////////////////////////////////////////////////////////////////
// Points and strokes

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (-1e6..1e6_f64, -1e6..1e6_f64).prop_map(|(x, y)| Point::new([x, y]))
}

fn small_point() -> impl Strategy<Value = Point<f64>> {
  (-1e3..1e3_f64, -1e3..1e3_f64).prop_map(|(x, y)| Point::new([x, y]))
}

/// Unstructured strokes. Most of these are scribbles.
pub fn any_stroke(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(small_point(), size)
}

///////////////////////////////////////////////////////////////////////////////
// Poses

#[derive(Debug, Clone, Copy)]
pub struct Pose {
  pub scale: f64,
  pub dx: f64,
  pub dy: f64,
}

impl Pose {
  pub fn apply(&self, pts: &[Point<f64>]) -> Vec<Point<f64>> {
    pts
      .iter()
      .map(|pt| pt.scale(self.scale).translate(self.dx, self.dy))
      .collect()
  }
}

pub fn any_pose() -> impl Strategy<Value = Pose> {
  (0.05..50.0_f64, -1e4..1e4_f64, -1e4..1e4_f64).prop_map(|(scale, dx, dy)| Pose { scale, dx, dy })
}

///////////////////////////////////////////////////////////////////////////////
// Canonical gestures

/// A hand-drawn looking gesture of the given shape, with up to 2% jitter.
pub fn gesture(shape: Shape, seed: u64) -> Vec<Point<f64>> {
  let mut rng = SmallRng::seed_from_u64(seed);
  let origin = Point::new([0.0, 0.0]);
  match shape {
    Shape::Line => samples::jitter(
      &samples::segment(origin, Point::new([300.0, 40.0]), 30),
      3.0,
      &mut rng,
    ),
    Shape::Triangle => samples::jitter(&samples::triangle(origin, 200.0, 20), 2.0, &mut rng),
    Shape::Square => samples::jitter(&samples::square(origin, 200.0, 20), 2.0, &mut rng),
    Shape::Circle => samples::jitter(&samples::circle(origin, 100.0, 64), 2.0, &mut rng),
  }
}

pub fn any_gesture() -> impl Strategy<Value = (Shape, Vec<Point<f64>>)> {
  (prop::sample::select(Shape::ALL.to_vec()), any::<u64>())
    .prop_map(|(shape, seed)| (shape, gesture(shape, seed)))
}
