use super::tolerance::{near_zero, EPS_LEN};

/// Distance from `(px, py)` to the infinite line through `(x1, y1)`-`(x2, y2)`.
///
/// The projection parameter is not clamped to `[0, 1]`, so points projecting
/// past either end are measured against the line's extension. A zero-length
/// baseline falls back to the distance from the start point.
pub fn line_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1; let dy = y2 - y1;
    let len_sq = dx*dx + dy*dy;
    if near_zero(len_sq, EPS_LEN) {
        let ex = px - x1; let ey = py - y1;
        return (ex*ex + ey*ey).sqrt();
    }
    let u = ((px - x1) * dx + (py - y1) * dy) / len_sq;
    let projx = x1 + u * dx; let projy = y1 + u * dy;
    let ex = projx - px; let ey = projy - py;
    (ex*ex + ey*ey).sqrt()
}

/// [`line_distance`] for 1D samples embedded as `(v, 0)`.
#[inline]
pub fn sample_distance(p: f64, start: f64, end: f64) -> f64 {
    line_distance(p, 0.0, start, 0.0, end, 0.0)
}
