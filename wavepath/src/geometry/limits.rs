// Centralized ingestion limits for the strict entry points

// Sequence caps
pub const MAX_POINTS: usize = 4_000_000;

// Numeric bounds
pub const SVG_DIM_MAX: f64 = 1_000_000.0;

#[inline]
pub fn in_dim_bounds(v: f64) -> bool { v.is_finite() && v > 0.0 && v <= SVG_DIM_MAX }

// +inf is accepted: collapses every range to its endpoints
#[inline]
pub fn in_epsilon_bounds(e: f64) -> bool { e >= 0.0 }

/// Index of the first non-finite value, if any.
pub fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}
