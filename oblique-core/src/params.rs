//! Pole parameter extraction.
//!
//! Inverts `R = Rz(lon_p) · Ry(90 − lat_p) · Rz(−lon_0)` to recover the three
//! oblique projection parameters from a proper rotation matrix.
//!
//! The branch is chosen from `r22 = cos(90 − lat_p) = sin(lat_p)`:
//!
//! | Case | Condition | Result |
//! |------|-----------|--------|
//! | [`PoleCase::North`] | `r22 ≈ +1` | `lat_p = 90`, `lon_p` from the residual Z rotation, `lon_0 = 0` |
//! | [`PoleCase::South`] | `r22 ≈ −1` | `lat_p = −90`, Y(180) removed first, then as above |
//! | [`PoleCase::General`] | otherwise | pole from column 2 of `R`, `lon_0` from column 2 of `Rᵀ` |
//!
//! In both polar cases `lon_p` and `lon_0` rotate about the same axis and
//! cannot be told apart. The whole Z rotation is folded into `lon_p`.
//!
//! ```
//! use oblique_core::{extract_parameters, RotationMatrix3};
//!
//! let r = RotationMatrix3::rotation_z(60.0)
//!     * RotationMatrix3::rotation_y(45.0)
//!     * RotationMatrix3::rotation_z(-120.0);
//! let p = extract_parameters(&r);
//! assert!((p.pole_longitude - 60.0).abs() < 1e-9);
//! assert!((p.pole_latitude - 45.0).abs() < 1e-9);
//! assert!((p.central_longitude - 120.0).abs() < 1e-9);
//! ```

use std::fmt;

use crate::constants::{DEGENERACY_TOLERANCE, ROTATION_TOLERANCE};
use crate::errors::{ObliqueError, ObliqueResult};
use crate::math::atan2_degrees;
use crate::matrix::RotationMatrix3;
use crate::utils::{normalize_longitude, wrap_0_360};

/// Which branch of the extractor a rotation falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PoleCase {
    /// Middle rotation is 0°; new pole at the north pole.
    North,
    /// Middle rotation is 180°; new pole at the south pole.
    South,
    /// Middle rotation strictly between 0° and 180°.
    General,
}

impl PoleCase {
    /// Classifies a rotation by its `r22` entry.
    pub fn of(rotation: &RotationMatrix3) -> Self {
        let r22 = rotation.get(2, 2);
        if (r22 - 1.0).abs() <= DEGENERACY_TOLERANCE {
            PoleCase::North
        } else if (r22 + 1.0).abs() <= DEGENERACY_TOLERANCE {
            PoleCase::South
        } else {
            PoleCase::General
        }
    }
}

impl fmt::Display for PoleCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PoleCase::North => "north (degenerate)",
            PoleCase::South => "south (degenerate)",
            PoleCase::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// Parameters of a general oblique transformation, all in degrees.
///
/// `pole_latitude` lies in [-90, 90]. Both longitudes lie in (-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObliqueParameters {
    /// `o_lon_p`: longitude of the new pole.
    pub pole_longitude: f64,
    /// `o_lat_p`: latitude of the new pole.
    pub pole_latitude: f64,
    /// `lon_0`: central longitude of the rotated frame.
    pub central_longitude: f64,
}

impl ObliqueParameters {
    pub fn new(pole_longitude: f64, pole_latitude: f64, central_longitude: f64) -> Self {
        Self {
            pole_longitude,
            pole_latitude,
            central_longitude,
        }
    }

    /// Rebuilds `Rz(lon_p) · Ry(90 − lat_p) · Rz(−lon_0)`.
    pub fn to_rotation(&self) -> RotationMatrix3 {
        RotationMatrix3::rotation_z(self.pole_longitude)
            * RotationMatrix3::rotation_y(90.0 - self.pole_latitude)
            * RotationMatrix3::rotation_z(-self.central_longitude)
    }

    /// The `+lon_0 +o_lat_p +o_lon_p` triple with three decimals.
    ///
    /// ```
    /// use oblique_core::ObliqueParameters;
    ///
    /// let p = ObliqueParameters::new(-55.0, 40.0, 120.0);
    /// assert_eq!(p.proj4_summary(), "+lon_0=120.000 +o_lat_p=40.000 +o_lon_p=-55.000");
    /// ```
    pub fn proj4_summary(&self) -> String {
        format!(
            "+lon_0={:.3} +o_lat_p={:.3} +o_lon_p={:.3}",
            self.central_longitude, self.pole_latitude, self.pole_longitude
        )
    }
}

impl fmt::Display for ObliqueParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pole_longitude = {:.9}, pole_latitude = {:.9}, central_longitude = {:.9}",
            self.pole_longitude, self.pole_latitude, self.central_longitude
        )
    }
}

/// Extracts `(lon_p, lat_p, lon_0)` from a proper rotation matrix.
///
/// The input is assumed orthonormal with determinant +1. Other matrices give
/// meaningless but finite results; use [`try_extract_parameters`] to check.
pub fn extract_parameters(rotation: &RotationMatrix3) -> ObliqueParameters {
    extract_with_case(rotation).1
}

/// Like [`extract_parameters`], also reporting the branch taken.
pub fn extract_with_case(rotation: &RotationMatrix3) -> (PoleCase, ObliqueParameters) {
    let case = PoleCase::of(rotation);

    let params = match case {
        PoleCase::North => {
            let lon_p = atan2_degrees(rotation.get(1, 0), rotation.get(0, 0));
            ObliqueParameters::new(normalize_longitude(lon_p), 90.0, 0.0)
        }
        PoleCase::South => {
            // Ry(180) is diag(-1, 1, -1) and its own inverse
            let flip =
                RotationMatrix3::from_array([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
            let rz = rotation * flip;
            let lon_p = atan2_degrees(rz.get(1, 0), rz.get(0, 0));
            ObliqueParameters::new(normalize_longitude(lon_p), -90.0, 0.0)
        }
        PoleCase::General => {
            let (lon_p, lat_p) = rotation.column(2).to_lonlat_degrees();
            let (lon, _) = rotation.transpose().column(2).to_lonlat_degrees();
            let lon_0 = normalize_longitude(wrap_0_360(lon) - 180.0);
            ObliqueParameters::new(normalize_longitude(lon_p), lat_p, lon_0)
        }
    };

    tracing::trace!(
        r22 = rotation.get(2, 2),
        ?case,
        lon_p = params.pole_longitude,
        lat_p = params.pole_latitude,
        lon_0 = params.central_longitude,
        "extracted oblique parameters"
    );

    (case, params)
}

/// Validates that `rotation` is a proper rotation, then extracts.
///
/// ```
/// use oblique_core::{try_extract_parameters, ObliqueError, RotationMatrix3};
///
/// let reflection = RotationMatrix3::from_array([
///     [-1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// assert!(matches!(
///     try_extract_parameters(&reflection),
///     Err(ObliqueError::InvalidRotation { .. })
/// ));
/// ```
pub fn try_extract_parameters(rotation: &RotationMatrix3) -> ObliqueResult<ObliqueParameters> {
    if !rotation.is_rotation_matrix(ROTATION_TOLERANCE) {
        return Err(ObliqueError::invalid_rotation(
            rotation.determinant(),
            rotation.orthogonality_error(),
        ));
    }
    Ok(extract_parameters(rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_cases() {
        assert_eq!(PoleCase::of(&RotationMatrix3::identity()), PoleCase::North);
        assert_eq!(PoleCase::of(&RotationMatrix3::rotation_y(180.0)), PoleCase::South);
        assert_eq!(PoleCase::of(&RotationMatrix3::rotation_y(30.0)), PoleCase::General);
    }

    #[test]
    fn test_north_case_longitude_is_normalized() {
        // atan2(-0.0, -1.0) is -180
        let r = RotationMatrix3::from_array([[-1.0, 0.0, 0.0], [-0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]);
        let p = extract_parameters(&r);
        assert_eq!(p.pole_longitude, 180.0);
        assert_eq!(p.pole_latitude, 90.0);
        assert_eq!(p.central_longitude, 0.0);
    }

    #[test]
    fn test_general_central_longitude_fold() {
        // lon_0 = 180 must come out as 180, not -180
        let p = ObliqueParameters::new(10.0, 20.0, 180.0);
        let back = extract_parameters(&p.to_rotation());
        assert!((back.central_longitude.abs() - 180.0).abs() < 1e-9);
        assert!(back.central_longitude > -180.0);
    }

    #[test]
    fn test_to_rotation_is_proper() {
        let p = ObliqueParameters::new(-34.5, 5.6, -15.8);
        assert!(p.to_rotation().is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_try_extract_rejects_scaled() {
        let m = RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.5]]);
        let err = try_extract_parameters(&m).unwrap_err();
        match err {
            ObliqueError::InvalidRotation { determinant, .. } => {
                assert!((determinant - 1.0).abs() < 1e-15)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_try_extract_rejects_nan() {
        let m = RotationMatrix3::from_array([[f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(try_extract_parameters(&m).is_err());
    }

    #[test]
    fn test_display_and_summary() {
        let p = ObliqueParameters::new(60.0, 45.0, 120.0);
        assert_eq!(
            p.proj4_summary(),
            "+lon_0=120.000 +o_lat_p=45.000 +o_lon_p=60.000"
        );
        assert!(p.to_string().contains("pole_latitude = 45.000000000"));
        assert_eq!(PoleCase::General.to_string(), "general");
    }
}
