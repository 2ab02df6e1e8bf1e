use nalgebra::Vector3;

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation between two vectors, factor clamped to [0, 1]
#[inline]
pub fn lerp_vector(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Move `current` towards `target` by at most `max_delta`, never overshooting.
#[inline]
pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// True when `value` is zero up to machine precision
#[inline]
pub fn approximately_zero(value: f64) -> bool {
    value.abs() <= f64::EPSILON
}

/// Clamp each component of `v` to `[-|limit_i|, |limit_i|]`.
///
/// A NaN limit leaves its component unclamped.
pub fn clamp_components(v: &Vector3<f64>, limits: &Vector3<f64>) -> Vector3<f64> {
    v.zip_map(limits, clamp_symmetric)
}

#[inline]
fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    let limit = limit.abs();
    // f64::max/min ignore a NaN operand, unlike f64::clamp which panics
    value.max(-limit).min(limit)
}

/// Project `v` onto the horizontal (XZ) plane and normalize.
///
/// Returns the zero vector if the projection is degenerate (`v` is vertical).
pub fn horizontal_direction(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, 0.0, v.z)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::zeros)
}
