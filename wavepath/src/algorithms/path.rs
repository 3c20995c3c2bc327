//! Smooth path through evenly spaced height samples.
//!
//! Each pair of neighbouring samples is joined by a cubic whose control
//! points sit halfway between the knots horizontally and at the knots'
//! own heights, giving horizontal tangents at every sample.

use crate::model::{PathCommand, PathData};

/// Heights are percentages of `height`, measured up from the bottom edge.
/// Fewer than two samples produce an empty path.
pub fn build_path(heights: &[f64], width: f64, height: f64, closed: bool) -> PathData {
    let n = heights.len();
    if n < 2 { return PathData::new(); }
    let step = width / (n - 1) as f64;
    let y_at = |h: f64| height * (1.0 - h / 100.0);

    let mut p = PathData::with_capacity(n + if closed { 3 } else { 0 });
    p.push(PathCommand::MoveTo { x: 0.0, y: y_at(heights[0]) });
    for (i, pair) in heights.windows(2).enumerate() {
        let x1 = i as f64 * step;
        let y1 = y_at(pair[0]);
        let x2 = (i + 1) as f64 * step;
        let y2 = y_at(pair[1]);
        let half = (x2 - x1) / 2.0;
        p.push(PathCommand::CubicTo { x1: x1 + half, y1, x2: x2 - half, y2, x: x2, y: y2 });
    }
    if closed {
        p.push(PathCommand::LineTo { x: width, y: height }); // bottom right
        p.push(PathCommand::LineTo { x: 0.0, y: height });   // bottom left
        p.push(PathCommand::Close);
    }
    p
}

/// [`build_path`] serialised to an SVG `d` string.
pub fn build_path_d(heights: &[f64], width: f64, height: f64, closed: bool) -> String {
    build_path(heights, width, height, closed).to_svg_d()
}
