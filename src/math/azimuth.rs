//! Trigonometric helpers converting a compass azimuth into a steering angle
//! and a displacement vector for probe-line construction.

use super::Vector2;

/// Normalizes an azimuth to `[0, 180)`.
///
/// A line and its 180° complement define the same infinite direction, so
/// 30° and 210° produce identical sweeps.
#[must_use]
pub fn normalize(azimuth: f64) -> f64 {
    if azimuth > 180.0 {
        azimuth - 180.0
    } else {
        azimuth
    }
}

/// Returns the steering angle in radians for a normalized azimuth.
///
/// Azimuths at or past 90° are reflected (`180 − az`) so one displacement
/// formula covers both quadrants; the sign convention in
/// [`displacement`] callers restores the difference.
#[must_use]
pub fn steering_angle(az: f64) -> f64 {
    if az >= 90.0 {
        (180.0 - az).to_radians()
    } else {
        az.to_radians()
    }
}

/// Returns the displacement `(dx, dy)` of length `l` along a normalized
/// azimuth.
///
/// Both components are non-negative; callers apply the quadrant sign
/// convention (az ≥ 90: anchor ± `(−dx, +dy)` / `(+dx, −dy)`; az < 90:
/// `(−dx, −dy)` / `(+dx, +dy)`) when building the two probe endpoints.
#[must_use]
pub fn displacement(l: f64, az: f64) -> Vector2 {
    let angle = steering_angle(az);
    Vector2::new(l * angle.sin(), l * angle.cos())
}
