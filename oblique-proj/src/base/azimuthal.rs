use oblique_core::constants::{DEG_TO_RAD, PI};
use oblique_core::math::asin_safe;

use crate::common::{check_finite, geo_from_radians, ANGLE_TOL};
use crate::coordinate::{GeoCoord, PlaneCoord};
use crate::error::{ProjError, ProjResult};

/// Cosine of the angular distance from the projection center, and the
/// unscaled plane direction `(x, y)` of the point.
fn center_geometry(native: GeoCoord, central_latitude: f64) -> (f64, f64, f64) {
    let (sin_lat0, cos_lat0) = libm::sincos(central_latitude * DEG_TO_RAD);
    let (sin_lat, cos_lat) = libm::sincos(native.lat_rad());
    let (sin_lon, cos_lon) = libm::sincos(native.lon_rad());

    let cos_c = sin_lat0 * sin_lat + cos_lat0 * cos_lat * cos_lon;
    let x = cos_lat * sin_lon;
    let y = cos_lat0 * sin_lat - sin_lat0 * cos_lat * cos_lon;
    (cos_c, x, y)
}

/// Inverse of the azimuthal direction for a point at angular distance `c`.
fn from_center(plane: PlaneCoord, rho: f64, c: f64, central_latitude: f64) -> GeoCoord {
    let lat0 = central_latitude * DEG_TO_RAD;
    if rho < ANGLE_TOL {
        return geo_from_radians(0.0, lat0);
    }

    let (sin_lat0, cos_lat0) = libm::sincos(lat0);
    let (sin_c, cos_c) = libm::sincos(c);

    let lat = asin_safe(cos_c * sin_lat0 + plane.y() * sin_c * cos_lat0 / rho);
    let lon = libm::atan2(
        plane.x() * sin_c,
        rho * cos_lat0 * cos_c - plane.y() * sin_lat0 * sin_c,
    );
    geo_from_radians(lon, lat)
}

pub(crate) fn project_ortho(native: GeoCoord, central_latitude: f64) -> ProjResult<PlaneCoord> {
    let (cos_c, x, y) = center_geometry(native, central_latitude);
    if cos_c < -ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "ortho projection: point on the far hemisphere",
        ));
    }
    Ok(PlaneCoord::new(x, y))
}

pub(crate) fn deproject_ortho(plane: PlaneCoord, central_latitude: f64) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "ortho deprojection")?;

    let rho = libm::hypot(plane.x(), plane.y());
    if rho > 1.0 + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "ortho deprojection: point outside the disc",
        ));
    }
    let c = asin_safe(rho);
    Ok(from_center(plane, rho, c, central_latitude))
}

pub(crate) fn project_aeqd(native: GeoCoord, central_latitude: f64) -> ProjResult<PlaneCoord> {
    let (cos_c, x, y) = center_geometry(native, central_latitude);
    let c = libm::acos(cos_c.clamp(-1.0, 1.0));

    if PI - c < ANGLE_TOL {
        return Err(ProjError::singularity(
            "aeqd projection undefined at the antipode of the center",
        ));
    }

    let k = if c < ANGLE_TOL { 1.0 } else { c / libm::sin(c) };
    Ok(PlaneCoord::new(k * x, k * y))
}

pub(crate) fn deproject_aeqd(plane: PlaneCoord, central_latitude: f64) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "aeqd deprojection")?;

    let rho = libm::hypot(plane.x(), plane.y());
    if rho > PI + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "aeqd deprojection: point beyond the antipode circle",
        ));
    }
    Ok(from_center(plane, rho, rho.min(PI), central_latitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ortho_center_and_limb() {
        let c = project_ortho(GeoCoord::new(0.0, 0.0), 0.0).unwrap();
        assert!(c.x().abs() < 1e-15 && c.y().abs() < 1e-15);

        let limb = project_ortho(GeoCoord::new(90.0, 0.0), 0.0).unwrap();
        assert!((limb.x() - 1.0).abs() < 1e-15);

        let pole = project_ortho(GeoCoord::new(0.0, 90.0), 0.0).unwrap();
        assert!((pole.y() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_ortho_far_side_rejected() {
        let err = project_ortho(GeoCoord::new(180.0, 0.0), 0.0).unwrap_err();
        assert!(matches!(err, ProjError::OutOfBounds { .. }));
        assert!(project_ortho(GeoCoord::new(0.0, -60.0), 45.0).is_err());
    }

    #[test]
    fn test_ortho_round_trip_tilted() {
        for &(lon, lat) in &[(10.0, 50.0), (-40.0, 20.0), (0.0, 89.0), (60.0, 30.0)] {
            let p = project_ortho(GeoCoord::new(lon, lat), 35.0).unwrap();
            let back = deproject_ortho(p, 35.0).unwrap();
            assert!((back.lon() - lon).abs() < 1e-9, "{} {}", lon, back.lon());
            assert!((back.lat() - lat).abs() < 1e-9, "{} {}", lat, back.lat());
        }
    }

    #[test]
    fn test_ortho_deproject_outside_disc() {
        assert!(deproject_ortho(PlaneCoord::new(0.8, 0.8), 0.0).is_err());
    }

    #[test]
    fn test_aeqd_distance_is_preserved() {
        // 90 degrees from the center is at radius pi/2
        let p = project_aeqd(GeoCoord::new(0.0, 0.0), 90.0).unwrap();
        assert!((libm::hypot(p.x(), p.y()) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_aeqd_antipode_singular() {
        let err = project_aeqd(GeoCoord::new(180.0, 0.0), 0.0).unwrap_err();
        assert!(matches!(err, ProjError::Singularity { .. }));
    }

    #[test]
    fn test_aeqd_round_trip() {
        for &(lon, lat) in &[(10.0, 50.0), (-170.0, -20.0), (100.0, -80.0)] {
            let p = project_aeqd(GeoCoord::new(lon, lat), 0.0).unwrap();
            let back = deproject_aeqd(p, 0.0).unwrap();
            assert!((back.lon() - lon).abs() < 1e-9);
            assert!((back.lat() - lat).abs() < 1e-9);
        }
    }
}
