pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod batch;
    pub mod normalize;
    pub mod path;
    pub mod simplify;
}
pub mod json;
pub mod svg;

use algorithms::{batch, normalize, path, simplify};
use geometry::limits;
pub use model::{PathCommand, PathData, PathOptions, Range};

/// Error code and message returned by the strict entry points.
pub type StrictError = (&'static str, String);

/// Normalizes `heights` into [2, 99] and builds the smooth path through them.
///
/// Empty and single-sample input give `""`. Constant input draws a flat line
/// at the middle of the range.
pub fn generate_normalized_path(heights: &[f64], svg_width: f64, svg_height: f64, closed: bool) -> String {
    let opts = PathOptions { width: svg_width, height: svg_height, closed, range: Range::NORMALIZED };
    generate_path_with(heights, &opts).to_svg_d()
}

/// Typed form of [`generate_normalized_path`] with a configurable target range.
pub fn generate_path_with(heights: &[f64], opts: &PathOptions) -> PathData {
    let mut norm = Vec::with_capacity(heights.len());
    normalize::normalize_into(heights, opts.range, &mut norm);
    path::build_path(&norm, opts.width, opts.height, opts.closed)
}

pub fn simplify_data(points: &[f64], epsilon: f64) -> Vec<f64> {
    simplify::simplify(points, epsilon)
}

pub fn process_array_in_batches<F: FnMut(&[f64])>(arr: &[f64], batch_size: usize, callback: F) -> usize {
    batch::process_in_batches(arr, batch_size, callback)
}

pub fn to_json(p: &PathData) -> serde_json::Value { json::to_json_impl(p) }

pub fn options_from_json(v: serde_json::Value) -> Result<PathOptions, StrictError> {
    json::options_from_json_impl(v)
}

// Strict variants: validate input shape and report coded errors

fn check_values(param: &'static str, values: &[f64]) -> Result<(), StrictError> {
    if values.len() > limits::MAX_POINTS {
        return Err(("too_many_points", format!("'{}' has {} values, max {}", param, values.len(), limits::MAX_POINTS)));
    }
    if let Some(i) = limits::first_non_finite(values) {
        return Err(("non_finite", format!("'{}[{}]' must be finite", param, i)));
    }
    Ok(())
}

fn check_dim(param: &'static str, v: f64) -> Result<(), StrictError> {
    if !v.is_finite() {
        return Err(("non_finite", format!("parameter '{}' must be finite", param)));
    }
    if !limits::in_dim_bounds(v) {
        return Err(("out_of_range", format!("parameter '{}' must be in (0, {}]", param, limits::SVG_DIM_MAX)));
    }
    Ok(())
}

pub(crate) fn check_options(opts: &PathOptions) -> Result<(), StrictError> {
    check_dim("width", opts.width)?;
    check_dim("height", opts.height)?;
    if !opts.range.min.is_finite() || !opts.range.max.is_finite() {
        return Err(("non_finite", "parameter 'range' must be finite".to_string()));
    }
    Ok(())
}

pub fn generate_normalized_path_strict(heights: &[f64], svg_width: f64, svg_height: f64, closed: bool) -> Result<String, StrictError> {
    let opts = PathOptions { width: svg_width, height: svg_height, closed, range: Range::NORMALIZED };
    generate_path_with_strict(heights, &opts).map(|p| p.to_svg_d())
}

pub fn generate_path_with_strict(heights: &[f64], opts: &PathOptions) -> Result<PathData, StrictError> {
    check_values("heights", heights)?;
    check_options(opts)?;
    Ok(generate_path_with(heights, opts))
}

pub fn simplify_data_strict(points: &[f64], epsilon: f64) -> Result<Vec<f64>, StrictError> {
    check_values("points", points)?;
    if !limits::in_epsilon_bounds(epsilon) {
        return Err(("out_of_range", "parameter 'epsilon' must be >= 0".to_string()));
    }
    Ok(simplify::simplify(points, epsilon))
}

pub fn process_array_in_batches_strict<F: FnMut(&[f64])>(arr: &[f64], batch_size: usize, callback: F) -> Result<usize, StrictError> {
    if batch_size == 0 {
        return Err(("out_of_range", "parameter 'batch_size' must be >= 1".to_string()));
    }
    Ok(batch::process_in_batches(arr, batch_size, callback))
}
