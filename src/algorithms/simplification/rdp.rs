use crate::data::Point;
use crate::StrokeScalar;

// https://en.wikipedia.org/wiki/Ramer%E2%80%93Douglas%E2%80%93Peucker_algorithm

/// $O(n^2)$ Ramer–Douglas–Peucker polyline simplification.
///
/// Returns the smallest ordered subsequence of `pts` such that every dropped
/// point lies within `epsilon` of the chord between the kept points on
/// either side of it. Distances are measured with [perpendicular_distance].
///
/// # Properties
/// * The first and last input points are always kept.
/// * Inputs with two or fewer points are returned unchanged.
/// * A negative or NaN `epsilon` behaves like `0`.
/// * Runs without recursion, so long strokes cannot overflow the stack.
///
/// # Examples
///
/// ```rust
/// # use scrawl::{simplify, Point};
/// let corner = vec![
///   Point::new([0., 0.]),
///   Point::new([5., 0.]),
///   Point::new([10., 0.]),
///   Point::new([10., 5.]),
///   Point::new([10., 10.]),
/// ];
/// assert_eq!(
///   simplify(&corner, 1.0),
///   vec![Point::new([0., 0.]), Point::new([10., 0.]), Point::new([10., 10.])]
/// );
/// ```
pub fn simplify<T>(pts: &[Point<T>], epsilon: T) -> Vec<Point<T>>
where
  T: StrokeScalar,
{
  simplify_indices(pts, epsilon)
    .into_iter()
    .map(|idx| pts[idx])
    .collect()
}

/// Like [simplify] but returns the indices of the kept points, in order.
pub fn simplify_indices<T>(pts: &[Point<T>], epsilon: T) -> Vec<usize>
where
  T: StrokeScalar,
{
  if pts.len() <= 2 {
    return (0..pts.len()).collect();
  }
  let epsilon = epsilon.max(T::zero());
  let last = pts.len() - 1;
  let mut kept = vec![false; pts.len()];
  kept[0] = true;
  kept[last] = true;

  // Index ranges still to be examined. Both endpoints of a range are kept.
  let mut pending = vec![(0, last)];
  while let Some((start, end)) = pending.pop() {
    if end <= start + 1 {
      continue;
    }
    let (max_index, max_dist) = farthest_from_chord(pts, start, end);
    if max_dist > epsilon {
      kept[max_index] = true;
      // Right half first so the left half is popped next.
      pending.push((max_index, end));
      pending.push((start, max_index));
    }
  }

  let indices: Vec<usize> = kept
    .iter()
    .enumerate()
    .filter_map(|(idx, &keep)| if keep { Some(idx) } else { None })
    .collect();
  log::trace!(
    "rdp: {} points -> {} vertices (epsilon {:?})",
    pts.len(),
    indices.len(),
    epsilon
  );
  indices
}

// Interior point of pts[start..=end] farthest from the chord start-end. Ties
// go to the lowest index. Returns (start, 0) when every interior point is on
// the chord.
fn farthest_from_chord<T>(pts: &[Point<T>], start: usize, end: usize) -> (usize, T)
where
  T: StrokeScalar,
{
  let (a, b) = (&pts[start], &pts[end]);
  let mut max_dist = T::zero();
  let mut max_index = start;
  for (idx, pt) in pts.iter().enumerate().take(end).skip(start + 1) {
    let dist = perpendicular_distance(pt, a, b);
    if dist > max_dist {
      max_dist = dist;
      max_index = idx;
    }
  }
  (max_index, max_dist)
}

/// Distance from `pt` to the line through `a` and `b`.
///
/// Computed as `|cross(b - a, pt - a)| / |ab|` with an exact orientation
/// predicate for the cross product. If `a` and `b` coincide this is the
/// distance from `pt` to `a`.
pub fn perpendicular_distance<T>(pt: &Point<T>, a: &Point<T>, b: &Point<T>) -> T
where
  T: StrokeScalar,
{
  let length = a.distance(b);
  if length == T::zero() {
    return pt.distance(a);
  }
  T::cross(&a.array, &b.array, &pt.array).abs() / length
}
