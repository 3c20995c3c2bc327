//! Linear rescaling of a value sequence into a target range.

use crate::geometry::tolerance::{near_zero, EPS_DENOM};
use crate::model::Range;

/// Min and max of `values` in one pass, or `None` when empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    let mut min = first;
    let mut max = first;
    for &v in rest {
        if v < min { min = v; } else if v > max { max = v; }
    }
    Some((min, max))
}

/// Rescale `values` linearly so that their min maps to `target_min` and
/// their max to `target_max`.
///
/// Constant input has no span to scale by; every element then maps to the
/// midpoint of the target range.
pub fn normalize(values: &[f64], target_min: f64, target_max: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    normalize_into(values, Range::new(target_min, target_max), &mut out);
    out
}

/// Same as [`normalize`] but appends into a caller-owned buffer.
pub fn normalize_into(values: &[f64], target: Range, out: &mut Vec<f64>) {
    let Some((min, max)) = min_max(values) else { return };
    let span = max - min;
    if near_zero(span, EPS_DENOM) {
        log::debug!("normalize: constant input of {} values, mapping to range midpoint", values.len());
        out.extend(std::iter::repeat(target.midpoint()).take(values.len()));
        return;
    }
    let target_span = target.span();
    out.extend(values.iter().map(|&v| target.min + ((v - min) / span) * target_span));
}
