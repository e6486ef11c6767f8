//! Synthetic gestures.
//!
//! Generators for the strokes a user produces when drawing the recognized
//! shapes by hand. Samples are spaced evenly along each edge and include
//! every corner, so an un-jittered gesture is exact up to rounding. Use
//! [jitter] to add hand tremor.
//!
//! Screen coordinates are assumed: `y` grows downwards, so the triangle's
//! apex has the smallest `y`.
use rand::Rng;

use crate::data::Point;
use crate::StrokeScalar;

/// `steps + 1` evenly spaced points from `start` to `end`, both included.
pub fn segment<T>(start: Point<T>, end: Point<T>, steps: usize) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  polyline(&[start, end], steps)
}

/// Sample every edge of `vertices` with `per_edge` steps. Shared vertices
/// appear once.
pub fn polyline<T>(vertices: &[Point<T>], per_edge: usize) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  let per_edge = per_edge.max(1);
  let n = T::from_constant(per_edge as f64);
  let mut out = Vec::with_capacity(vertices.len().saturating_sub(1) * per_edge + 1);
  for edge in vertices.windows(2) {
    let (a, b) = (edge[0], edge[1]);
    for i in 0..per_edge {
      let t = T::from_constant(i as f64);
      // Multiply before dividing so integer-valued inputs stay exact.
      out.push(Point::new([
        a[0] + (b[0] - a[0]) * t / n,
        a[1] + (b[1] - a[1]) * t / n,
      ]));
    }
  }
  out.extend(vertices.last().copied());
  out
}

/// Like [polyline] but returns to the first vertex.
pub fn closed_polygon<T>(vertices: &[Point<T>], per_edge: usize) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  let mut ring = vertices.to_vec();
  ring.extend(vertices.first().copied());
  polyline(&ring, per_edge)
}

/// Axis-aligned square with its top-left corner at `origin`, drawn
/// clockwise on screen starting and ending at `origin`.
pub fn square<T>(origin: Point<T>, side: T, per_edge: usize) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  let zero = T::zero();
  closed_polygon(
    &[
      origin,
      origin.translate(side, zero),
      origin.translate(side, side),
      origin.translate(zero, side),
    ],
    per_edge,
  )
}

/// Isosceles triangle inscribed in the `side` x `side` box at `origin`,
/// starting and ending at the bottom-left corner.
pub fn triangle<T>(origin: Point<T>, side: T, per_edge: usize) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  let half = side / T::from_constant(2.0);
  closed_polygon(
    &[
      origin.translate(T::zero(), side),
      origin.translate(half, T::zero()),
      origin.translate(side, side),
    ],
    per_edge,
  )
}

/// `samples + 1` points around a full circle, starting and ending at angle 0.
pub fn circle<T>(center: Point<T>, radius: T, samples: usize) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  let samples = samples.max(3);
  (0..=samples)
    .map(|i| {
      let angle = T::from_constant(std::f64::consts::TAU * i as f64 / samples as f64);
      center.translate(radius * angle.cos(), radius * angle.sin())
    })
    .collect()
}

/// Displace every coordinate by a uniform offset in `[-amount, amount]`.
pub fn jitter<T, R>(pts: &[Point<T>], amount: f64, rng: &mut R) -> Vec<Point<T>>
where
  T: StrokeScalar,
  R: Rng + ?Sized,
{
  let amount = amount.abs();
  if !amount.is_finite() || amount == 0.0 {
    return pts.to_vec();
  }
  pts
    .iter()
    .map(|pt| {
      let dx = T::from_constant(rng.gen_range(-amount..=amount));
      let dy = T::from_constant(rng.gen_range(-amount..=amount));
      pt.translate(dx, dy)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::BoundingBox;

  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn segment_is_evenly_spaced() {
    let pts = segment(Point::new([0.0, 0.0]), Point::new([30.0, 0.0]), 3);
    assert_eq!(
      pts,
      vec![
        Point::new([0.0, 0.0]),
        Point::new([10.0, 0.0]),
        Point::new([20.0, 0.0]),
        Point::new([30.0, 0.0]),
      ]
    );
  }

  #[test]
  fn square_is_closed_and_exact() {
    let pts = square(Point::new([0.0, 0.0]), 200.0, 20);
    assert_eq!(pts.len(), 81);
    assert_eq!(pts.first(), pts.last());
    assert!(pts.contains(&Point::new([200.0, 200.0])));
    assert!(pts.contains(&Point::new([130.0, 200.0])));
  }

  #[test]
  fn triangle_corners() {
    let pts = triangle(Point::new([0.0, 0.0]), 200.0, 20);
    assert_eq!(pts.len(), 61);
    assert_eq!(pts[0], Point::new([0.0, 200.0]));
    assert_eq!(pts[20], Point::new([100.0, 0.0]));
    assert_eq!(pts[40], Point::new([200.0, 200.0]));
    assert_eq!(pts[60], Point::new([0.0, 200.0]));
  }

  #[test]
  fn circle_spans_diameter() {
    let pts: Vec<Point<f64>> = circle(Point::new([0.0, 0.0]), 100.0, 64);
    assert_eq!(pts.len(), 65);
    let bbox = BoundingBox::from_points(&pts).unwrap();
    assert!((bbox.width() - 200.0).abs() < 1e-9);
    assert!((bbox.height() - 200.0).abs() < 1e-9);
  }

  #[test]
  fn jitter_is_bounded() {
    let mut rng = SmallRng::seed_from_u64(7);
    let pts: Vec<Point<f64>> = square(Point::new([0.0, 0.0]), 200.0, 20);
    let noisy = jitter(&pts, 3.0, &mut rng);
    assert_eq!(noisy.len(), pts.len());
    for (a, b) in pts.iter().zip(noisy.iter()) {
      assert!((a[0] - b[0]).abs() <= 3.0);
      assert!((a[1] - b[1]).abs() <= 3.0);
    }
  }

  #[test]
  fn zero_jitter_is_identity() {
    let mut rng = SmallRng::seed_from_u64(7);
    let pts = circle(Point::new([1.0_f32, 1.0]), 5.0, 8);
    assert_eq!(jitter(&pts, 0.0, &mut rng), pts);
  }
}
