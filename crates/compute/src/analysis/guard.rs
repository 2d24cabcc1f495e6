//! Handling for near-identical inputs.
//!
//! A statistical estimate over points that all coincide has zero (or, after
//! rounding, undefined) dispersion and would produce a zero-width viewport.
//! Such inputs are detected up front and replaced by a fixed `2 * eps` window.

/// True when the values spread over less than `2 * eps`.
pub fn is_degenerate(spread: f64, eps: f64) -> bool {
    spread < 2.0 * eps
}

pub fn epsilon_interval(center: f64, eps: f64) -> (f64, f64) {
    (center - eps, center + eps)
}

/// Clamp `[lower, upper]` into `[min, max]` without collapsing it.
///
/// When clamping would leave less than `2 * eps` of width on one edge, that
/// edge is pinned to its limit and the other side is placed `2 * eps` away.
pub fn clamp_preserving_width(lower: f64, upper: f64, min: f64, max: f64, eps: f64) -> (f64, f64) {
    let width = 2.0 * eps;
    let lower = lower.max(min);
    let upper = upper.min(max);
    if lower > max - width {
        (max - width, max)
    } else if upper < min + width {
        (min, min + width)
    } else {
        (lower, upper)
    }
}
