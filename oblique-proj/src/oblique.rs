//! General oblique transformation over a spherical base projection.
//!
//! An [`ObliqueProjection`] rotates the globe with
//! `R = Rz(lon_p) · Ry(90 − lat_p) · Rz(−lon_0)` and then applies its
//! [`BaseProjection`] in the rotated (native) frame, at native central
//! meridian 0. In the native frame the geographic north pole sits at
//! `(lon_p, lat_p)`. The rotation can be specified three ways, and exactly one of
//! them must be supplied to the builder:
//!
//! - new pole: `pole_longitude`, `pole_latitude`
//! - rotation about a point: `axis_azimuth`, `rotation_center_longitude`,
//!   `rotation_center_latitude`
//! - two points on the new equator: `point1_*`, `point2_*`
//!
//! The last two are resolved into the new-pole form when the projection is
//! built.

use oblique_core::constants::{DEG_TO_RAD, HALF_PI, RAD_TO_DEG};
use oblique_core::math::asin_safe;
use oblique_core::utils::normalize_longitude;
use oblique_core::{ObliqueParameters, RotationMatrix3};

use crate::base::BaseProjection;
use crate::common::{check_finite, check_latitude, ANGLE_TOL};
use crate::coordinate::{GeoCoord, Limits, ProjectedCoord};
use crate::error::{ProjError, ProjResult};
use crate::globe::Globe;
use crate::proj4::Proj4Params;

/// How the oblique rotation was specified. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObliqueMethod {
    NewPole {
        pole_longitude: f64,
        pole_latitude: f64,
    },
    RotateAboutPoint {
        axis_azimuth: f64,
        center_longitude: f64,
        center_latitude: f64,
    },
    EquatorPoints {
        point1: GeoCoord,
        point2: GeoCoord,
    },
}

impl ObliqueMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewPole { .. } => "new pole",
            Self::RotateAboutPoint { .. } => "rotate about point",
            Self::EquatorPoints { .. } => "new equator points",
        }
    }

    /// Resolves the method into the `(pole_longitude, pole_latitude)` form.
    pub fn resolve_pole(&self) -> ProjResult<(f64, f64)> {
        match *self {
            Self::NewPole {
                pole_longitude,
                pole_latitude,
            } => {
                if !(-90.0..=90.0).contains(&pole_latitude) {
                    return Err(ProjError::invalid_parameter(format!(
                        "pole latitude {} outside [-90, 90]",
                        pole_latitude
                    )));
                }
                Ok((normalize_longitude(pole_longitude), pole_latitude))
            }
            Self::RotateAboutPoint {
                axis_azimuth,
                center_longitude,
                center_latitude,
            } => pole_about_point(axis_azimuth, center_longitude, center_latitude),
            Self::EquatorPoints { point1, point2 } => pole_from_equator(point1, point2),
        }
    }

    fn proj4_params(&self, params: &mut Proj4Params) {
        match *self {
            Self::NewPole {
                pole_longitude,
                pole_latitude,
            } => {
                params.set("o_lon_p", pole_longitude);
                params.set("o_lat_p", pole_latitude);
            }
            Self::RotateAboutPoint {
                axis_azimuth,
                center_longitude,
                center_latitude,
            } => {
                params.set("o_alpha", axis_azimuth);
                params.set("o_lon_c", center_longitude);
                params.set("o_lat_c", center_latitude);
            }
            Self::EquatorPoints { point1, point2 } => {
                params.set("o_lon_1", point1.lon());
                params.set("o_lat_1", point1.lat());
                params.set("o_lon_2", point2.lon());
                params.set("o_lat_2", point2.lat());
            }
        }
    }
}

fn pole_about_point(alpha: f64, lon_c: f64, lat_c: f64) -> ProjResult<(f64, f64)> {
    let phic = lat_c * DEG_TO_RAD;
    if (phic.abs() - HALF_PI).abs() <= ANGLE_TOL {
        return Err(ProjError::invalid_parameter(format!(
            "rotation center latitude {} must not be a pole",
            lat_c
        )));
    }
    check_latitude(lat_c, "rotation center")?;

    let (sin_alpha, cos_alpha) = libm::sincos(alpha * DEG_TO_RAD);
    let (sin_phic, cos_phic) = libm::sincos(phic);

    let lamp = lon_c * DEG_TO_RAD + libm::atan2(-cos_alpha, -sin_alpha * sin_phic);
    let phip = asin_safe(cos_phic * sin_alpha);
    Ok((normalize_longitude(lamp * RAD_TO_DEG), phip * RAD_TO_DEG))
}

fn pole_from_equator(point1: GeoCoord, point2: GeoCoord) -> ProjResult<(f64, f64)> {
    let (lam1, phi1) = (point1.lon_rad(), point1.lat_rad());
    let (lam2, phi2) = (point2.lon_rad(), point2.lat_rad());

    if (phi1 - phi2).abs() <= ANGLE_TOL
        || phi1.abs() <= ANGLE_TOL
        || (phi1.abs() - HALF_PI).abs() <= ANGLE_TOL
        || (phi2.abs() - HALF_PI).abs() <= ANGLE_TOL
    {
        return Err(ProjError::invalid_parameter(format!(
            "equator points ({}, {}) and ({}, {}) do not define a new equator",
            point1.lon(),
            point1.lat(),
            point2.lon(),
            point2.lat()
        )));
    }
    check_latitude(point1.lat(), "first equator point")?;
    check_latitude(point2.lat(), "second equator point")?;

    let (sin_phi1, cos_phi1) = libm::sincos(phi1);
    let (sin_phi2, cos_phi2) = libm::sincos(phi2);

    let lamp = libm::atan2(
        cos_phi1 * sin_phi2 * libm::cos(lam1) - sin_phi1 * cos_phi2 * libm::cos(lam2),
        sin_phi1 * cos_phi2 * libm::sin(lam2) - cos_phi1 * sin_phi2 * libm::sin(lam1),
    );
    let phip = libm::atan(-libm::cos(lamp - lam1) / libm::tan(phi1));
    Ok((normalize_longitude(lamp * RAD_TO_DEG), phip * RAD_TO_DEG))
}

/// Builder for [`ObliqueProjection`].
///
/// ```
/// use oblique_proj::{BaseProjection, ObliqueProjectionBuilder, Projection};
///
/// let proj = ObliqueProjectionBuilder::new(BaseProjection::new(Projection::mollweide()))
///     .central_longitude(120.0)
///     .pole_longitude(-55.0)
///     .pole_latitude(40.0)
///     .build()
///     .unwrap();
/// assert_eq!(proj.parameters().pole_latitude, 40.0);
/// ```
#[derive(Debug, Clone)]
pub struct ObliqueProjectionBuilder {
    base: BaseProjection,
    central_longitude: Option<f64>,
    pole_longitude: Option<f64>,
    pole_latitude: Option<f64>,
    axis_azimuth: Option<f64>,
    rotation_center_longitude: Option<f64>,
    rotation_center_latitude: Option<f64>,
    point1_longitude: Option<f64>,
    point1_latitude: Option<f64>,
    point2_longitude: Option<f64>,
    point2_latitude: Option<f64>,
    false_easting: Option<f64>,
    false_northing: Option<f64>,
    globe: Option<Globe>,
}

impl ObliqueProjectionBuilder {
    pub fn new(base: impl Into<BaseProjection>) -> Self {
        Self {
            base: base.into(),
            central_longitude: None,
            pole_longitude: None,
            pole_latitude: None,
            axis_azimuth: None,
            rotation_center_longitude: None,
            rotation_center_latitude: None,
            point1_longitude: None,
            point1_latitude: None,
            point2_longitude: None,
            point2_latitude: None,
            false_easting: None,
            false_northing: None,
            globe: None,
        }
    }

    pub fn central_longitude(mut self, lon: f64) -> Self {
        self.central_longitude = Some(lon);
        self
    }

    pub fn pole_longitude(mut self, lon: f64) -> Self {
        self.pole_longitude = Some(lon);
        self
    }

    pub fn pole_latitude(mut self, lat: f64) -> Self {
        self.pole_latitude = Some(lat);
        self
    }

    pub fn new_pole(self, lon: f64, lat: f64) -> Self {
        self.pole_longitude(lon).pole_latitude(lat)
    }

    pub fn axis_azimuth(mut self, azimuth: f64) -> Self {
        self.axis_azimuth = Some(azimuth);
        self
    }

    pub fn rotation_center_longitude(mut self, lon: f64) -> Self {
        self.rotation_center_longitude = Some(lon);
        self
    }

    pub fn rotation_center_latitude(mut self, lat: f64) -> Self {
        self.rotation_center_latitude = Some(lat);
        self
    }

    pub fn rotate_about_point(self, azimuth: f64, lon: f64, lat: f64) -> Self {
        self.axis_azimuth(azimuth)
            .rotation_center_longitude(lon)
            .rotation_center_latitude(lat)
    }

    pub fn point1_longitude(mut self, lon: f64) -> Self {
        self.point1_longitude = Some(lon);
        self
    }

    pub fn point1_latitude(mut self, lat: f64) -> Self {
        self.point1_latitude = Some(lat);
        self
    }

    pub fn point2_longitude(mut self, lon: f64) -> Self {
        self.point2_longitude = Some(lon);
        self
    }

    pub fn point2_latitude(mut self, lat: f64) -> Self {
        self.point2_latitude = Some(lat);
        self
    }

    pub fn equator_points(self, point1: GeoCoord, point2: GeoCoord) -> Self {
        self.point1_longitude(point1.lon())
            .point1_latitude(point1.lat())
            .point2_longitude(point2.lon())
            .point2_latitude(point2.lat())
    }

    pub fn false_easting(mut self, x: f64) -> Self {
        self.false_easting = Some(x);
        self
    }

    pub fn false_northing(mut self, y: f64) -> Self {
        self.false_northing = Some(y);
        self
    }

    pub fn globe(mut self, globe: Globe) -> Self {
        self.globe = Some(globe);
        self
    }

    /// Checks that exactly one complete parameter set is present.
    pub fn validate(&self) -> ProjResult<()> {
        self.method().map(|_| ())
    }

    fn method(&self) -> ProjResult<ObliqueMethod> {
        let sets: [(&str, &[(&str, Option<f64>)]); 3] = [
            (
                "new pole",
                &[
                    ("pole_longitude", self.pole_longitude),
                    ("pole_latitude", self.pole_latitude),
                ],
            ),
            (
                "rotate about point",
                &[
                    ("axis_azimuth", self.axis_azimuth),
                    ("rotation_center_longitude", self.rotation_center_longitude),
                    ("rotation_center_latitude", self.rotation_center_latitude),
                ],
            ),
            (
                "new equator points",
                &[
                    ("point1_longitude", self.point1_longitude),
                    ("point1_latitude", self.point1_latitude),
                    ("point2_longitude", self.point2_longitude),
                    ("point2_latitude", self.point2_latitude),
                ],
            ),
        ];

        let mut complete = Vec::new();
        for (name, fields) in sets.iter() {
            let missing: Vec<&str> = fields
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| *field)
                .collect();
            if missing.is_empty() {
                complete.push(*name);
            } else if missing.len() < fields.len() {
                return Err(ProjError::invalid_configuration(format!(
                    "incomplete {} parameters: missing {}",
                    name,
                    missing.join(", ")
                )));
            }
        }

        if complete.len() > 1 {
            return Err(ProjError::invalid_configuration(format!(
                "conflicting oblique parameter sets: {}",
                complete.join(" and ")
            )));
        }

        if let (Some(pole_longitude), Some(pole_latitude)) =
            (self.pole_longitude, self.pole_latitude)
        {
            return Ok(ObliqueMethod::NewPole {
                pole_longitude,
                pole_latitude,
            });
        }
        if let (Some(axis_azimuth), Some(center_longitude), Some(center_latitude)) = (
            self.axis_azimuth,
            self.rotation_center_longitude,
            self.rotation_center_latitude,
        ) {
            return Ok(ObliqueMethod::RotateAboutPoint {
                axis_azimuth,
                center_longitude,
                center_latitude,
            });
        }
        if let (Some(lon1), Some(lat1), Some(lon2), Some(lat2)) = (
            self.point1_longitude,
            self.point1_latitude,
            self.point2_longitude,
            self.point2_latitude,
        ) {
            return Ok(ObliqueMethod::EquatorPoints {
                point1: GeoCoord::new(lon1, lat1),
                point2: GeoCoord::new(lon2, lat2),
            });
        }

        Err(ProjError::invalid_configuration(
            "no oblique parameters: give a new pole, a rotation about a point, or two equator points",
        ))
    }

    pub fn build(self) -> ProjResult<ObliqueProjection> {
        let method = self.method()?;

        let scalars = [
            ("central_longitude", self.central_longitude),
            ("pole_longitude", self.pole_longitude),
            ("pole_latitude", self.pole_latitude),
            ("axis_azimuth", self.axis_azimuth),
            ("rotation_center_longitude", self.rotation_center_longitude),
            ("rotation_center_latitude", self.rotation_center_latitude),
            ("point1_longitude", self.point1_longitude),
            ("point1_latitude", self.point1_latitude),
            ("point2_longitude", self.point2_longitude),
            ("point2_latitude", self.point2_latitude),
            ("false_easting", self.false_easting),
            ("false_northing", self.false_northing),
        ];
        for (name, value) in scalars {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ProjError::invalid_parameter(format!(
                        "{} must be finite, got {}",
                        name, v
                    )));
                }
            }
        }

        let mut base = self.base;
        if let Some(globe) = self.globe {
            base = base.with_globe(globe);
        }
        base.validate()?;

        let (pole_longitude, pole_latitude) = method.resolve_pole()?;
        let parameters = ObliqueParameters::new(
            pole_longitude,
            pole_latitude,
            normalize_longitude(self.central_longitude.unwrap_or(0.0)),
        );
        tracing::debug!(
            method = method.name(),
            base = base.name(),
            pole_longitude,
            pole_latitude,
            central_longitude = parameters.central_longitude,
            "resolved oblique rotation"
        );

        let rotation = parameters.to_rotation();
        let false_easting = self.false_easting.unwrap_or(0.0);
        let false_northing = self.false_northing.unwrap_or(0.0);

        let mut projection = ObliqueProjection {
            base,
            method,
            parameters,
            inverse_rotation: rotation.transpose(),
            rotation,
            central_longitude: self.central_longitude,
            false_easting,
            false_northing,
            explicit_false_origin: (self.false_easting, self.false_northing),
            boundary: Vec::new(),
            limits: Limits::new(0.0, 0.0, 0.0, 0.0),
        };
        projection.reset_extent();
        Ok(projection)
    }
}

/// An oblique transformation projection.
#[derive(Debug, Clone)]
pub struct ObliqueProjection {
    base: BaseProjection,
    method: ObliqueMethod,
    parameters: ObliqueParameters,
    rotation: RotationMatrix3,
    inverse_rotation: RotationMatrix3,
    central_longitude: Option<f64>,
    false_easting: f64,
    false_northing: f64,
    explicit_false_origin: (Option<f64>, Option<f64>),
    pub(crate) boundary: Vec<ProjectedCoord>,
    pub(crate) limits: Limits,
}

impl ObliqueProjection {
    pub fn builder(base: impl Into<BaseProjection>) -> ObliqueProjectionBuilder {
        ObliqueProjectionBuilder::new(base)
    }

    /// Builds the projection from extracted parameters: `lon_0` becomes the
    /// central longitude and `(lon_p, lat_p)` the new pole.
    pub fn from_parameters(
        base: impl Into<BaseProjection>,
        parameters: &ObliqueParameters,
    ) -> ProjResult<Self> {
        ObliqueProjectionBuilder::new(base)
            .central_longitude(parameters.central_longitude)
            .new_pole(parameters.pole_longitude, parameters.pole_latitude)
            .build()
    }

    #[inline]
    pub fn base(&self) -> &BaseProjection {
        &self.base
    }

    #[inline]
    pub fn globe(&self) -> &Globe {
        &self.base.globe
    }

    #[inline]
    pub fn method(&self) -> &ObliqueMethod {
        &self.method
    }

    /// Parameters in new-pole form, whatever method built the projection.
    #[inline]
    pub fn parameters(&self) -> &ObliqueParameters {
        &self.parameters
    }

    #[inline]
    pub fn rotation(&self) -> &RotationMatrix3 {
        &self.rotation
    }

    #[inline]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    #[inline]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// Geographic to native (rotated) longitude/latitude.
    pub fn to_native(&self, geo: GeoCoord) -> GeoCoord {
        let (lon, lat) = self.rotation.transform_lonlat(geo.lon(), geo.lat());
        GeoCoord::new(lon, lat)
    }

    pub fn from_native(&self, native: GeoCoord) -> GeoCoord {
        let (lon, lat) = self.inverse_rotation.transform_lonlat(native.lon(), native.lat());
        GeoCoord::new(lon, lat)
    }

    /// Projects native coordinates with the base projection and applies the
    /// false origin.
    pub fn project_native(&self, native: GeoCoord) -> ProjResult<ProjectedCoord> {
        let p = self.base.project_native(native)?;
        Ok(ProjectedCoord::new(
            p.x() + self.false_easting,
            p.y() + self.false_northing,
        ))
    }

    pub fn forward(&self, geo: GeoCoord) -> ProjResult<ProjectedCoord> {
        check_finite(geo.lon(), geo.lat(), "oblique forward")?;
        check_latitude(geo.lat(), "oblique forward")?;
        self.project_native(self.to_native(geo))
    }

    pub fn inverse(&self, projected: ProjectedCoord) -> ProjResult<GeoCoord> {
        check_finite(projected.x(), projected.y(), "oblique inverse")?;
        let native = self.base.deproject_native(ProjectedCoord::new(
            projected.x() - self.false_easting,
            projected.y() - self.false_northing,
        ))?;
        Ok(self.from_native(native))
    }

    /// Base parameter list overridden by the oblique one.
    pub fn proj4_params(&self) -> Proj4Params {
        let mut oblique = Proj4Params::new();
        oblique.set("proj", "ob_tran");
        oblique.set("o_proj", self.base.name());
        oblique.set("units", "m");
        self.method.proj4_params(&mut oblique);
        if let Some(lon_0) = self.central_longitude {
            oblique.set("lon_0", lon_0);
        }
        if let Some(x_0) = self.explicit_false_origin.0 {
            oblique.set("x_0", x_0);
        }
        if let Some(y_0) = self.explicit_false_origin.1 {
            oblique.set("y_0", y_0);
        }
        self.base.proj4_params().merged(&oblique)
    }

    /// `+proj=ob_tran +o_proj=<base> +lon_0 +o_lat_p +o_lon_p`, three decimals.
    pub fn summary(&self) -> String {
        format!(
            "+proj=ob_tran +o_proj={} {}",
            self.base.name(),
            self.parameters.proj4_summary()
        )
    }

    pub fn boundary(&self) -> &[ProjectedCoord] {
        &self.boundary
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Restores the base projection's boundary and limits.
    pub fn reset_extent(&mut self) {
        let (fe, fn_) = (self.false_easting, self.false_northing);
        self.boundary = self
            .base
            .boundary()
            .into_iter()
            .map(|p| ProjectedCoord::new(p.x() + fe, p.y() + fn_))
            .collect();
        self.limits = Limits::bounding(&self.boundary)
            .unwrap_or_else(|| Limits::new(fe, fe, fn_, fn_));
    }
}
