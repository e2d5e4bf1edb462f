//! Assertions shared by the unit and integration tests.

use crate::matrix::RotationMatrix3;

/// Asserts two angles in degrees agree modulo 360 within `tolerance`.
#[track_caller]
pub fn assert_angle_close(a: f64, b: f64, tolerance: f64, ctx: &str) {
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = crate::utils::angular_difference(a, b).abs();
    assert!(
        d <= tolerance,
        "{}: |{} - {}| = {:e} (mod 360) exceeds {:e}",
        ctx,
        a,
        b,
        d,
        tolerance
    );
}

/// Asserts the entrywise maximum difference of two matrices is within `tolerance`.
#[track_caller]
pub fn assert_matrix_close(a: &RotationMatrix3, b: &RotationMatrix3, tolerance: f64, ctx: &str) {
    let d = a.max_difference(b);
    assert!(
        d <= tolerance,
        "{}: max difference {:e} exceeds {:e}\n{}{}",
        ctx,
        d,
        tolerance,
        a,
        b
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_angle_close_wraps() {
        assert_angle_close(179.9999999999, -180.0, 1e-9, "seam");
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_assert_matrix_close_fails() {
        assert_matrix_close(
            &RotationMatrix3::identity(),
            &RotationMatrix3::rotation_x(1.0),
            1e-6,
            "x",
        );
    }
}
