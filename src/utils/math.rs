use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear blend between `low` and `high`, `lambda` is not clamped
#[inline]
pub fn lerp(low: f64, high: f64, lambda: f64) -> f64 {
    lambda * high + (1.0 - lambda) * low
}
