//! Numeric helpers

/// Clamp `num` between `min` and `max`
///
/// The bounds may be given in either order.
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    num.min(hi).max(lo)
}

/// Clamp `num` to `[-distance, distance]`
pub fn clamp_distance(num: f64, distance: f64) -> f64 {
    clamp(num, -distance, distance)
}

/// Linear interpolation between `start` and `end`
///
/// `amount` is not clamped; values outside `0..=1` extrapolate.
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}
