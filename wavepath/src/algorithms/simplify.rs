//! Douglas-Peucker reduction of a 1D sample sequence.
//!
//! Samples are embedded as `(v, 0)`; each range is measured against the
//! line through its first and last sample. Ranges are processed from an
//! explicit work stack so input size never bounds call depth.

use crate::geometry::math::sample_distance;

/// Interior index of maximum distance from the `start..=end` baseline,
/// ignoring points at zero distance. Ties keep the first index.
fn farthest(points: &[f64], start: usize, end: usize) -> Option<(usize, f64)> {
    let (s, e) = (points[start], points[end]);
    let mut best: Option<(usize, f64)> = None;
    let mut max_dist = 0.0;
    for i in (start + 1)..end {
        let d = sample_distance(points[i], s, e);
        if d > max_dist { max_dist = d; best = Some((i, d)); }
    }
    best
}

/// Mask of the samples kept for tolerance `epsilon`.
pub fn simplify_mask(points: &[f64], epsilon: f64) -> Vec<bool> {
    let n = points.len();
    let mut keep = vec![n <= 2; n];
    if n <= 2 { return keep; }
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];
    let mut splits = 0usize;
    while let Some((start, end)) = stack.pop() {
        if end - start < 2 { continue; }
        match farthest(points, start, end) {
            Some((idx, d)) if d > epsilon => {
                keep[idx] = true;
                splits += 1;
                stack.push((idx, end));
                stack.push((start, idx));
            }
            _ => {}
        }
    }
    log::trace!("simplify: n={} eps={} splits={}", n, epsilon, splits);
    keep
}

/// Reduce `points` to the samples that deviate more than `epsilon` from the
/// chord of their enclosing range. The first and last samples always stay;
/// sequences of two or fewer come back unchanged.
pub fn simplify(points: &[f64], epsilon: f64) -> Vec<f64> {
    if points.len() <= 2 { return points.to_vec(); }
    let keep = simplify_mask(points, epsilon);
    points.iter().zip(keep).filter_map(|(&p, k)| if k { Some(p) } else { None }).collect()
}

/// Indices of the samples [`simplify`] keeps, in order.
pub fn simplify_indices(points: &[f64], epsilon: f64) -> Vec<usize> {
    simplify_mask(points, epsilon)
        .into_iter()
        .enumerate()
        .filter_map(|(i, k)| if k { Some(i) } else { None })
        .collect()
}
