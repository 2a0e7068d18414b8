//! Scalar helpers
//!
//! Rounding here matches the conventions the rasterizer was built around:
//! `round_to_int` is floor(x + 0.5), which rounds halves toward positive
//! infinity for both signs, unlike `f64::round`.

/// Round to the nearest integer, halves toward positive infinity
pub fn round_to_int(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Largest integer less than or equal to `v`
pub fn floor_to_int(v: f64) -> i64 {
    v.floor() as i64
}

/// Smallest integer greater than or equal to `v`
pub fn ceil_to_int(v: f64) -> i64 {
    v.ceil() as i64
}

/// Pin a value to the unit interval [0,1]
pub fn pin_unit(v: f64) -> f64 {
    v.max(0.0).min(1.0)
}
