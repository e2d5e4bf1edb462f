use oblique_core::constants::{HALF_PI, PI, SQRT2};

use crate::common::{check_finite, geo_from_radians, newton_raphson_1d, NewtonConfig, ANGLE_TOL};
use crate::coordinate::{GeoCoord, PlaneCoord};
use crate::error::{ProjError, ProjResult};

const MOLLWEIDE_X: f64 = 2.0 * SQRT2 / PI;

pub(crate) fn project_moll(native: GeoCoord) -> ProjResult<PlaneCoord> {
    let lon = native.lon_rad();
    let gamma = solve_mollweide_gamma(native.lat_rad())?;

    let (sin_gamma, cos_gamma) = libm::sincos(gamma);
    Ok(PlaneCoord::new(
        MOLLWEIDE_X * lon * cos_gamma,
        SQRT2 * sin_gamma,
    ))
}

/// Solves `2γ + sin 2γ = π sin φ` for the auxiliary angle γ.
fn solve_mollweide_gamma(lat: f64) -> ProjResult<f64> {
    if lat.abs() >= HALF_PI - ANGLE_TOL {
        return Ok(lat.signum() * HALF_PI);
    }

    let pi_sin_lat = PI * libm::sin(lat);

    // Near the poles f'(γ) vanishes; start from the cubic expansion there.
    let initial = if lat.abs() > 1.4 {
        let eps = libm::cbrt(0.75 * PI * (1.0 - libm::sin(lat.abs())));
        lat.signum() * (HALF_PI - eps)
    } else {
        lat
    };

    const CONFIG: NewtonConfig = NewtonConfig::new((-HALF_PI, HALF_PI), "moll forward");
    newton_raphson_1d(
        initial,
        pi_sin_lat,
        |gamma| 2.0 * gamma + libm::sin(2.0 * gamma),
        |gamma| 2.0 + 2.0 * libm::cos(2.0 * gamma),
        &CONFIG,
    )
}

pub(crate) fn deproject_moll(plane: PlaneCoord) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "moll deprojection")?;

    let sin_gamma = plane.y() / SQRT2;
    if sin_gamma.abs() > 1.0 + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "moll deprojection: point outside projection boundary",
        ));
    }

    let gamma = libm::asin(sin_gamma.clamp(-1.0, 1.0));
    let cos_gamma = libm::cos(gamma);
    let lat = libm::asin(((2.0 * gamma + libm::sin(2.0 * gamma)) / PI).clamp(-1.0, 1.0));

    if cos_gamma.abs() < ANGLE_TOL {
        if plane.x().abs() > ANGLE_TOL {
            return Err(ProjError::out_of_bounds(
                "moll deprojection: point outside projection boundary",
            ));
        }
        return Ok(geo_from_radians(0.0, lat));
    }

    let lon = plane.x() / (MOLLWEIDE_X * cos_gamma);
    if lon.abs() > PI + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "moll deprojection: point outside projection boundary",
        ));
    }

    Ok(geo_from_radians(lon.clamp(-PI, PI), lat))
}

/// Parallel length relative to the equator, at 5° latitude steps from 0° to 90°.
const ROBINSON_X: [f64; 19] = [
    1.0000, 0.9986, 0.9954, 0.9900, 0.9822, 0.9730, 0.9600, 0.9427, 0.9216, 0.8962, 0.8679,
    0.8350, 0.7986, 0.7597, 0.7186, 0.6732, 0.6213, 0.5722, 0.5322,
];

/// Distance of the parallel from the equator relative to the pole line.
const ROBINSON_Y: [f64; 19] = [
    0.0000, 0.0620, 0.1240, 0.1860, 0.2480, 0.3100, 0.3720, 0.4340, 0.4958, 0.5571, 0.6176,
    0.6769, 0.7346, 0.7903, 0.8435, 0.8936, 0.9394, 0.9761, 1.0000,
];

const ROBINSON_FXC: f64 = 0.8487;
const ROBINSON_FYC: f64 = 1.3523;
const ROBINSON_STEP_DEG: f64 = 5.0;

/// Table interval and fraction for `|lat|` in degrees.
fn robinson_interval(abs_lat_deg: f64) -> (usize, f64) {
    let a = (abs_lat_deg / ROBINSON_STEP_DEG).clamp(0.0, 18.0);
    let i = (a.floor() as usize).min(17);
    (i, a - i as f64)
}

#[inline]
fn lerp(table: &[f64; 19], i: usize, t: f64) -> f64 {
    table[i] + t * (table[i + 1] - table[i])
}

pub(crate) fn project_robin(native: GeoCoord) -> ProjResult<PlaneCoord> {
    let (i, t) = robinson_interval(native.lat().abs());
    let x = ROBINSON_FXC * lerp(&ROBINSON_X, i, t) * native.lon_rad();
    let y = ROBINSON_FYC * lerp(&ROBINSON_Y, i, t) * native.lat().signum();
    Ok(PlaneCoord::new(x, if native.lat() == 0.0 { 0.0 } else { y }))
}

pub(crate) fn deproject_robin(plane: PlaneCoord) -> ProjResult<GeoCoord> {
    check_finite(plane.x(), plane.y(), "robin deprojection")?;

    let yy = plane.y().abs() / ROBINSON_FYC;
    if yy > 1.0 + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "robin deprojection: |y| beyond the pole line",
        ));
    }
    let yy = yy.min(1.0);

    let i = ROBINSON_Y
        .windows(2)
        .position(|w| yy <= w[1])
        .unwrap_or(17);
    let t = (yy - ROBINSON_Y[i]) / (ROBINSON_Y[i + 1] - ROBINSON_Y[i]);
    let lat_deg = ROBINSON_STEP_DEG * (i as f64 + t) * plane.y().signum();

    let lon = plane.x() / (ROBINSON_FXC * lerp(&ROBINSON_X, i, t));
    if lon.abs() > PI + ANGLE_TOL {
        return Err(ProjError::out_of_bounds(
            "robin deprojection: point outside projection boundary",
        ));
    }

    Ok(geo_from_radians(
        lon.clamp(-PI, PI),
        lat_deg.to_radians(),
    ))
}
