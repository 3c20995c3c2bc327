// Centralized tolerances and float helpers

pub const EPS_LEN: f64 = f64::MIN_POSITIVE;   // zero-length baseline threshold
pub const EPS_DENOM: f64 = f64::MIN_POSITIVE; // denominator guard for range spans
pub const EPS_CMP: f64 = 1e-9;                // compare slack for tests/invariants

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() < eps }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }
