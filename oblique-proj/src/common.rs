use oblique_core::constants::RAD_TO_DEG;
use oblique_core::utils::normalize_longitude;

use crate::coordinate::GeoCoord;
use crate::error::{ProjError, ProjResult};

/// Angular tolerance in radians for singular points.
pub(crate) const ANGLE_TOL: f64 = 1e-10;

#[inline]
pub(crate) fn geo_from_radians(lon_rad: f64, lat_rad: f64) -> GeoCoord {
    GeoCoord::new(normalize_longitude(lon_rad * RAD_TO_DEG), lat_rad * RAD_TO_DEG)
}

#[inline]
pub(crate) fn check_finite(x: f64, y: f64, context: &str) -> ProjResult<()> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(ProjError::out_of_bounds(format!(
            "{}: non-finite input ({}, {})",
            context, x, y
        )));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_latitude(lat_deg: f64, context: &str) -> ProjResult<()> {
    if !(-90.0..=90.0).contains(&lat_deg) {
        return Err(ProjError::out_of_bounds(format!(
            "{}: latitude {} outside [-90, 90]",
            context, lat_deg
        )));
    }
    Ok(())
}

/// Configuration for Newton-Raphson 1D solver
pub(crate) struct NewtonConfig {
    pub bounds: (f64, f64),
    pub max_iter: usize,
    pub tol: f64,
    pub context: &'static str,
}

impl NewtonConfig {
    pub const DEFAULT_MAX_ITER: usize = 50;
    pub const DEFAULT_TOL: f64 = 1e-12;

    pub const fn new(bounds: (f64, f64), context: &'static str) -> Self {
        Self {
            bounds,
            max_iter: Self::DEFAULT_MAX_ITER,
            tol: Self::DEFAULT_TOL,
            context,
        }
    }
}

pub(crate) fn newton_raphson_1d<F, FP>(
    initial: f64,
    target: f64,
    f: F,
    f_prime: FP,
    config: &NewtonConfig,
) -> ProjResult<f64>
where
    F: Fn(f64) -> f64,
    FP: Fn(f64) -> f64,
{
    let mut x = initial.clamp(config.bounds.0, config.bounds.1);

    for _ in 0..config.max_iter {
        let f_val = f(x) - target;
        let f_prime_val = f_prime(x);

        if f_prime_val.abs() < 1e-15 {
            return Err(ProjError::convergence_failure(format!(
                "{}: derivative too small",
                config.context
            )));
        }

        let delta = f_val / f_prime_val;
        x -= delta;
        x = x.clamp(config.bounds.0, config.bounds.1);

        if delta.abs() < config.tol {
            return Ok(x);
        }
    }

    Err(ProjError::convergence_failure(format!(
        "{}: Newton-Raphson did not converge",
        config.context
    )))
}
