//! Angle normalization helpers in degrees.
//!
//! | Function | Input | Output Range |
//! |----------|-------|--------------|
//! | [`normalize_longitude`] | degrees | (-180°, 180°] |
//! | [`wrap_0_360`] | degrees | [0°, 360°) |
//!
//! [`angular_difference`] computes the shortest signed difference between two
//! longitudes, handling the wraparound at ±180°.

use crate::math::fmod;

/// Normalizes longitude to the range (-180°, 180°].
///
/// Wraps values outside the range by adding/subtracting 360°. Exactly -180°
/// maps to +180°.
///
/// ```
/// use oblique_core::utils::normalize_longitude;
///
/// assert_eq!(normalize_longitude(190.0), -170.0);
/// assert_eq!(normalize_longitude(-180.0), 180.0);
/// ```
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    let mut normalized = fmod(lon, 360.0);
    if normalized > 180.0 {
        normalized -= 360.0;
    } else if normalized <= -180.0 {
        normalized += 360.0;
    }
    normalized
}

/// Wraps an angle to [0°, 360°).
///
/// This is the floored modulo (`lon mod 360` with a non-negative result), not
/// Rust's `%` remainder.
#[inline]
pub fn wrap_0_360(angle: f64) -> f64 {
    let mut w = fmod(angle, 360.0);
    if w < 0.0 {
        w += 360.0;
    }
    // -1e-20 + 360 rounds to 360
    if w >= 360.0 {
        w = 0.0;
    }
    w
}

/// Computes the shortest signed angular difference `a - b` in degrees.
///
/// The result is in the range (-180°, 180°].
///
/// ```
/// use oblique_core::utils::angular_difference;
///
/// assert_eq!(angular_difference(90.0, 45.0), 45.0);
/// assert!((angular_difference(10.0, 350.0) - 20.0).abs() < 1e-12);
/// ```
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    normalize_longitude(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(181.0), -179.0);
        assert_eq!(normalize_longitude(-181.0), 179.0);
        assert_eq!(normalize_longitude(360.0), 0.0);
        assert_eq!(normalize_longitude(720.0), 0.0);
        assert_eq!(normalize_longitude(450.0), 90.0);
        assert_eq!(normalize_longitude(-540.0), 180.0);
    }

    #[test]
    fn test_wrap_0_360() {
        assert_eq!(wrap_0_360(0.0), 0.0);
        assert_eq!(wrap_0_360(360.0), 0.0);
        assert_eq!(wrap_0_360(-1.0), 359.0);
        assert_eq!(wrap_0_360(725.0), 5.0);
        assert_eq!(wrap_0_360(-1e-20), 0.0);
        assert!(wrap_0_360(-137.0) >= 0.0);
    }

    #[test]
    fn test_angular_difference() {
        assert_eq!(angular_difference(0.0, 0.0), 0.0);
        assert_eq!(angular_difference(45.0, 90.0), -45.0);
        assert!((angular_difference(-170.0, 170.0) - 20.0).abs() < 1e-12);
        assert!((angular_difference(350.0, 10.0) + 20.0).abs() < 1e-12);
    }
}
