//! Lambert conformal conic on the sphere (Snyder, Map Projections: A Working
//! Manual, eqs. 15-1 to 15-5).

use oblique_core::constants::{DEG_TO_RAD, HALF_PI, QUARTER_PI};

use crate::common::{check_finite, geo_from_radians, ANGLE_TOL};
use crate::coordinate::{GeoCoord, PlaneCoord};
use crate::error::{ProjError, ProjResult};

/// Cone constants derived from the central latitude and standard parallels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LambertCone {
    n: f64,
    f: f64,
    rho0: f64,
}

impl LambertCone {
    pub(crate) fn new(central_latitude: f64, standard_parallels: (f64, f64)) -> ProjResult<Self> {
        let lat0 = central_latitude * DEG_TO_RAD;
        let lat1 = standard_parallels.0 * DEG_TO_RAD;
        let lat2 = standard_parallels.1 * DEG_TO_RAD;

        if lat1.abs() >= HALF_PI - ANGLE_TOL || lat2.abs() >= HALF_PI - ANGLE_TOL {
            return Err(ProjError::invalid_parameter(
                "lcc: standard parallels must lie strictly between the poles",
            ));
        }
        if (lat1 + lat2).abs() < ANGLE_TOL {
            return Err(ProjError::invalid_parameter(
                "lcc: standard parallels symmetric about the equator",
            ));
        }

        let t1 = libm::tan(QUARTER_PI + lat1 / 2.0);
        let t2 = libm::tan(QUARTER_PI + lat2 / 2.0);

        let n = if (lat1 - lat2).abs() < ANGLE_TOL {
            libm::sin(lat1)
        } else {
            libm::log(libm::cos(lat1) / libm::cos(lat2)) / libm::log(t2 / t1)
        };

        let f = libm::cos(lat1) * libm::pow(t1, n) / n;
        let rho0 = Self::rho_for(n, f, lat0)?;

        Ok(Self { n, f, rho0 })
    }

    fn rho_for(n: f64, f: f64, lat: f64) -> ProjResult<f64> {
        // rho vanishes at the pole the cone opens toward and diverges at the other
        if (lat * n.signum() + HALF_PI).abs() < ANGLE_TOL {
            return Err(ProjError::singularity(
                "lcc projection undefined at the pole opposite the cone apex",
            ));
        }
        if (lat * n.signum() - HALF_PI).abs() < ANGLE_TOL {
            return Ok(0.0);
        }
        Ok(f / libm::pow(libm::tan(QUARTER_PI + lat / 2.0), n))
    }

    #[inline]
    pub(crate) fn n(&self) -> f64 {
        self.n
    }
}

pub(crate) fn project_lcc(native: GeoCoord, cone: &LambertCone) -> ProjResult<PlaneCoord> {
    let rho = LambertCone::rho_for(cone.n, cone.f, native.lat_rad())?;
    let theta = cone.n * native.lon_rad();
    let (sin_theta, cos_theta) = libm::sincos(theta);
    Ok(PlaneCoord::new(rho * sin_theta, cone.rho0 - rho * cos_theta))
}

pub(crate) fn deproject_lcc(plane: PlaneCoord, cone: &LambertCone) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "lcc deprojection")?;

    let sign = cone.n.signum();
    let dy = cone.rho0 - plane.y();
    let rho = sign * libm::hypot(plane.x(), dy);

    if rho.abs() < ANGLE_TOL {
        return Ok(geo_from_radians(0.0, sign * HALF_PI));
    }

    let theta = libm::atan2(sign * plane.x(), sign * dy);
    let lon = theta / cone.n;
    if lon.abs() > std::f64::consts::PI + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "lcc deprojection: point outside the cone opening",
        ));
    }

    let lat = 2.0 * libm::atan(libm::pow(cone.f / rho, 1.0 / cone.n)) - HALF_PI;
    Ok(geo_from_radians(lon, lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_cone() -> LambertCone {
        LambertCone::new(39.0, (33.0, 45.0)).unwrap()
    }

    #[test]
    fn test_cone_constant() {
        // n lies between sin(33) and sin(45)
        let cone = default_cone();
        assert!(cone.n() > 33.0_f64.to_radians().sin());
        assert!(cone.n() < 45.0_f64.to_radians().sin());
    }

    #[test]
    fn test_single_parallel_tangent_cone() {
        let cone = LambertCone::new(40.0, (40.0, 40.0)).unwrap();
        assert!((cone.n() - 40.0_f64.to_radians().sin()).abs() < 1e-15);
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let p = project_lcc(GeoCoord::new(0.0, 39.0), &default_cone()).unwrap();
        assert!(p.x().abs() < 1e-15);
        assert!(p.y().abs() < 1e-14);
    }

    #[test]
    fn test_north_pole_is_apex_south_pole_singular() {
        let cone = default_cone();
        assert!(project_lcc(GeoCoord::new(20.0, 90.0), &cone).is_ok());
        let err = project_lcc(GeoCoord::new(20.0, -90.0), &cone).unwrap_err();
        assert!(matches!(err, ProjError::Singularity { .. }));
    }

    #[test]
    fn test_round_trip() {
        let cone = default_cone();
        for &(lon, lat) in &[(0.0, 39.0), (-100.0, 10.0), (170.0, -25.0), (45.0, 80.0)] {
            let back = deproject_lcc(project_lcc(GeoCoord::new(lon, lat), &cone).unwrap(), &cone)
                .unwrap();
            assert!((back.lon() - lon).abs() < 1e-9, "{} {}", lon, back.lon());
            assert!((back.lat() - lat).abs() < 1e-9, "{} {}", lat, back.lat());
        }
    }

    #[test]
    fn test_southern_cone() {
        let cone = LambertCone::new(-39.0, (-33.0, -45.0)).unwrap();
        assert!(cone.n() < 0.0);
        let back =
            deproject_lcc(project_lcc(GeoCoord::new(30.0, -50.0), &cone).unwrap(), &cone).unwrap();
        assert!((back.lat() + 50.0).abs() < 1e-9);
        assert!((back.lon() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_parallels() {
        assert!(LambertCone::new(0.0, (30.0, -30.0)).is_err());
        assert!(LambertCone::new(0.0, (90.0, 45.0)).is_err());
    }
}
