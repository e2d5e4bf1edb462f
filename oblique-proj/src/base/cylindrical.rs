use oblique_core::constants::{HALF_PI, PI, QUARTER_PI};

use crate::common::{check_finite, geo_from_radians, ANGLE_TOL};
use crate::coordinate::{GeoCoord, PlaneCoord};
use crate::error::{ProjError, ProjResult};

pub(crate) fn project_eqc(native: GeoCoord) -> ProjResult<PlaneCoord> {
    Ok(PlaneCoord::new(native.lon_rad(), native.lat_rad()))
}

pub(crate) fn deproject_eqc(plane: PlaneCoord) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "eqc deprojection")?;
    if plane.y().abs() > HALF_PI + ANGLE_TOL || plane.x().abs() > PI + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "eqc deprojection: point outside projection boundary",
        ));
    }
    Ok(geo_from_radians(plane.x(), plane.y().clamp(-HALF_PI, HALF_PI)))
}

pub(crate) fn mercator_y(lat_rad: f64) -> ProjResult<f64> {
    if lat_rad.abs() >= HALF_PI - ANGLE_TOL {
        return Err(ProjError::singularity(
            "merc projection undefined at latitude +/-90",
        ));
    }
    Ok(libm::log(libm::tan(QUARTER_PI + lat_rad / 2.0)))
}

pub(crate) fn project_merc(native: GeoCoord) -> ProjResult<PlaneCoord> {
    let y = mercator_y(native.lat_rad())?;
    Ok(PlaneCoord::new(native.lon_rad(), y))
}

pub(crate) fn deproject_merc(plane: PlaneCoord) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "merc deprojection")?;
    if plane.x().abs() > PI + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "merc deprojection: |x| exceeds half the equator",
        ));
    }
    let lat = 2.0 * libm::atan(libm::exp(plane.y())) - HALF_PI;
    Ok(geo_from_radians(plane.x(), lat))
}

pub(crate) fn miller_y(lat_rad: f64) -> f64 {
    1.25 * libm::log(libm::tan(QUARTER_PI + 0.4 * lat_rad))
}

pub(crate) fn project_mill(native: GeoCoord) -> ProjResult<PlaneCoord> {
    Ok(PlaneCoord::new(native.lon_rad(), miller_y(native.lat_rad())))
}

pub(crate) fn deproject_mill(plane: PlaneCoord) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "mill deprojection")?;
    if plane.x().abs() > PI + ANGLE_TOL || plane.y().abs() > miller_y(HALF_PI) + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "mill deprojection: point outside projection boundary",
        ));
    }
    let lat = 2.5 * libm::atan(libm::exp(0.8 * plane.y())) - 0.625 * PI;
    Ok(geo_from_radians(plane.x(), lat.clamp(-HALF_PI, HALF_PI)))
}
