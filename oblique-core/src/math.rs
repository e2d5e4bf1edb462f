#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `asin` with its argument clamped to [-1, 1].
///
/// Entries read from a composed rotation matrix can overshoot the unit
/// interval by a few ULP.
#[inline]
pub fn asin_safe(sin_value: f64) -> f64 {
    libm::asin(sin_value.clamp(-1.0, 1.0))
}

/// `atan2(y, x)` in degrees.
#[inline]
pub fn atan2_degrees(y: f64, x: f64) -> f64 {
    libm::atan2(y, x).to_degrees()
}

/// Sine and cosine of an angle given in degrees.
#[inline]
pub fn sincos_degrees(angle_degrees: f64) -> (f64, f64) {
    libm::sincos(angle_degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmod_keeps_sign_of_dividend() {
        assert_eq!(fmod(-1.0, 360.0), -1.0);
        assert_eq!(fmod(370.0, 360.0), 10.0);
    }

    #[test]
    fn test_asin_safe_clamping() {
        assert_eq!(asin_safe(1.0000000001), std::f64::consts::FRAC_PI_2);
        assert_eq!(asin_safe(-1.0000000001), -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_atan2_degrees_quadrants() {
        assert!((atan2_degrees(1.0, 0.0) - 90.0).abs() < 1e-12);
        assert!((atan2_degrees(0.0, -1.0) - 180.0).abs() < 1e-12);
        assert!((atan2_degrees(-1.0, 0.0) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_sincos_degrees() {
        let (s, c) = sincos_degrees(30.0);
        assert!((s - 0.5).abs() < 1e-15);
        assert!((c - 3.0_f64.sqrt() / 2.0).abs() < 1e-15);
    }
}
