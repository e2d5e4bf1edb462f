//! Spherical base projections.
//!
//! A [`Projection`] maps native longitude/latitude (central meridian at 0) to
//! plane coordinates on the unit sphere. [`BaseProjection`] adds a central
//! longitude and a [`Globe`] and works in meters; it is usable on its own and
//! as the inner projection of an
//! [`ObliqueProjection`](crate::ObliqueProjection).
//!
//! | Variant | proj | Native domain |
//! |---------|------|---------------|
//! | [`PlateCarree`](Projection::PlateCarree) | `eqc` | whole sphere |
//! | [`Mercator`](Projection::Mercator) | `merc` | poles excluded |
//! | [`Miller`](Projection::Miller) | `mill` | whole sphere |
//! | [`Mollweide`](Projection::Mollweide) | `moll` | whole sphere |
//! | [`Robinson`](Projection::Robinson) | `robin` | whole sphere |
//! | [`Orthographic`](Projection::Orthographic) | `ortho` | near hemisphere |
//! | [`AzimuthalEquidistant`](Projection::AzimuthalEquidistant) | `aeqd` | antipode excluded |
//! | [`LambertConformal`](Projection::LambertConformal) | `lcc` | far pole excluded |

use oblique_core::constants::{HALF_PI, PI, SQRT2};
use oblique_core::utils::normalize_longitude;

use crate::common::{check_finite, check_latitude};
use crate::coordinate::{GeoCoord, Limits, PlaneCoord, ProjectedCoord};
use crate::error::{ProjError, ProjResult};
use crate::globe::Globe;
use crate::proj4::Proj4Params;

mod azimuthal;
mod conic;
mod cylindrical;
mod pseudocylindrical;

use azimuthal::{deproject_aeqd, deproject_ortho, project_aeqd, project_ortho};
use conic::{deproject_lcc, project_lcc, LambertCone};
use cylindrical::{deproject_eqc, deproject_merc, deproject_mill};
use cylindrical::{mercator_y, miller_y, project_eqc, project_merc, project_mill};
use pseudocylindrical::{deproject_moll, deproject_robin, project_moll, project_robin};

/// Samples used for curved boundary outlines.
const BOUNDARY_SAMPLES: usize = 360;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Projection {
    PlateCarree,
    Mercator {
        #[cfg_attr(feature = "serde", serde(default = "default_merc_min"))]
        min_latitude: f64,
        #[cfg_attr(feature = "serde", serde(default = "default_merc_max"))]
        max_latitude: f64,
    },
    Miller,
    Mollweide,
    Robinson,
    Orthographic {
        #[cfg_attr(feature = "serde", serde(default))]
        central_latitude: f64,
    },
    AzimuthalEquidistant {
        #[cfg_attr(feature = "serde", serde(default))]
        central_latitude: f64,
    },
    LambertConformal {
        #[cfg_attr(feature = "serde", serde(default = "default_lcc_lat"))]
        central_latitude: f64,
        #[cfg_attr(feature = "serde", serde(default = "default_lcc_parallels"))]
        standard_parallels: (f64, f64),
        #[cfg_attr(feature = "serde", serde(default = "default_lcc_cutoff"))]
        cutoff: f64,
    },
}

#[cfg(feature = "serde")]
fn default_merc_min() -> f64 {
    Projection::MERCATOR_MIN_LATITUDE
}

#[cfg(feature = "serde")]
fn default_merc_max() -> f64 {
    Projection::MERCATOR_MAX_LATITUDE
}

#[cfg(feature = "serde")]
fn default_lcc_lat() -> f64 {
    Projection::LCC_CENTRAL_LATITUDE
}

#[cfg(feature = "serde")]
fn default_lcc_parallels() -> (f64, f64) {
    Projection::LCC_STANDARD_PARALLELS
}

#[cfg(feature = "serde")]
fn default_lcc_cutoff() -> f64 {
    Projection::LCC_CUTOFF
}

impl Projection {
    pub const MERCATOR_MIN_LATITUDE: f64 = -80.0;
    pub const MERCATOR_MAX_LATITUDE: f64 = 84.0;
    pub const LCC_CENTRAL_LATITUDE: f64 = 39.0;
    pub const LCC_STANDARD_PARALLELS: (f64, f64) = (33.0, 45.0);
    pub const LCC_CUTOFF: f64 = -30.0;

    pub fn plate_carree() -> Self {
        Self::PlateCarree
    }

    pub fn mercator() -> Self {
        Self::Mercator {
            min_latitude: Self::MERCATOR_MIN_LATITUDE,
            max_latitude: Self::MERCATOR_MAX_LATITUDE,
        }
    }

    pub fn mercator_with_limits(min_latitude: f64, max_latitude: f64) -> Self {
        Self::Mercator {
            min_latitude,
            max_latitude,
        }
    }

    pub fn miller() -> Self {
        Self::Miller
    }

    pub fn mollweide() -> Self {
        Self::Mollweide
    }

    pub fn robinson() -> Self {
        Self::Robinson
    }

    pub fn orthographic(central_latitude: f64) -> Self {
        Self::Orthographic { central_latitude }
    }

    pub fn azimuthal_equidistant(central_latitude: f64) -> Self {
        Self::AzimuthalEquidistant { central_latitude }
    }

    pub fn lambert_conformal() -> Self {
        Self::LambertConformal {
            central_latitude: Self::LCC_CENTRAL_LATITUDE,
            standard_parallels: Self::LCC_STANDARD_PARALLELS,
            cutoff: Self::LCC_CUTOFF,
        }
    }

    pub fn lambert_conformal_with(
        central_latitude: f64,
        standard_parallels: (f64, f64),
        cutoff: f64,
    ) -> Self {
        Self::LambertConformal {
            central_latitude,
            standard_parallels,
            cutoff,
        }
    }

    /// The proj4 `proj=` name.
    pub fn proj_name(&self) -> &'static str {
        match self {
            Self::PlateCarree => "eqc",
            Self::Mercator { .. } => "merc",
            Self::Miller => "mill",
            Self::Mollweide => "moll",
            Self::Robinson => "robin",
            Self::Orthographic { .. } => "ortho",
            Self::AzimuthalEquidistant { .. } => "aeqd",
            Self::LambertConformal { .. } => "lcc",
        }
    }

    pub fn validate(&self) -> ProjResult<()> {
        match self {
            Self::Mercator {
                min_latitude,
                max_latitude,
            } => {
                let in_range = |lat: f64| lat > -90.0 && lat < 90.0;
                if !(in_range(*min_latitude) && in_range(*max_latitude))
                    || min_latitude >= max_latitude
                {
                    return Err(ProjError::invalid_parameter(format!(
                        "merc: latitude limits must satisfy -90 < min < max < 90, got ({}, {})",
                        min_latitude, max_latitude
                    )));
                }
            }
            Self::Orthographic { central_latitude }
            | Self::AzimuthalEquidistant { central_latitude } => {
                if !(-90.0..=90.0).contains(central_latitude) {
                    return Err(ProjError::invalid_parameter(format!(
                        "{}: central latitude {} outside [-90, 90]",
                        self.proj_name(),
                        central_latitude
                    )));
                }
            }
            Self::LambertConformal {
                central_latitude,
                standard_parallels,
                cutoff,
            } => {
                let cone = LambertCone::new(*central_latitude, *standard_parallels)?;
                if !(-90.0..=90.0).contains(cutoff) || cutoff * cone.n().signum() <= -90.0 {
                    return Err(ProjError::invalid_parameter(format!(
                        "lcc: cutoff latitude {} is not on the cone",
                        cutoff
                    )));
                }
            }
            Self::PlateCarree | Self::Miller | Self::Mollweide | Self::Robinson => {}
        }
        Ok(())
    }

    /// Projects native coordinates onto the unit-sphere plane.
    pub fn project(&self, native: GeoCoord) -> ProjResult<PlaneCoord> {
        match self {
            Self::PlateCarree => project_eqc(native),
            Self::Mercator { .. } => project_merc(native),
            Self::Miller => project_mill(native),
            Self::Mollweide => project_moll(native),
            Self::Robinson => project_robin(native),
            Self::Orthographic { central_latitude } => project_ortho(native, *central_latitude),
            Self::AzimuthalEquidistant { central_latitude } => {
                project_aeqd(native, *central_latitude)
            }
            Self::LambertConformal {
                central_latitude,
                standard_parallels,
                ..
            } => {
                let cone = LambertCone::new(*central_latitude, *standard_parallels)?;
                project_lcc(native, &cone)
            }
        }
    }

    pub fn deproject(&self, plane: PlaneCoord) -> ProjResult<GeoCoord> {
        match self {
            Self::PlateCarree => deproject_eqc(plane),
            Self::Mercator { .. } => deproject_merc(plane),
            Self::Miller => deproject_mill(plane),
            Self::Mollweide => deproject_moll(plane),
            Self::Robinson => deproject_robin(plane),
            Self::Orthographic { central_latitude } => deproject_ortho(plane, *central_latitude),
            Self::AzimuthalEquidistant { central_latitude } => {
                deproject_aeqd(plane, *central_latitude)
            }
            Self::LambertConformal {
                central_latitude,
                standard_parallels,
                ..
            } => {
                let cone = LambertCone::new(*central_latitude, *standard_parallels)?;
                deproject_lcc(plane, &cone)
            }
        }
    }

    /// Closed outline of the projected domain on the unit sphere.
    pub fn boundary(&self) -> Vec<PlaneCoord> {
        match self {
            Self::PlateCarree => rectangle(PI, HALF_PI, -HALF_PI),
            Self::Mercator {
                min_latitude,
                max_latitude,
            } => {
                let y_min = mercator_y(min_latitude.to_radians()).unwrap_or(-PI);
                let y_max = mercator_y(max_latitude.to_radians()).unwrap_or(PI);
                rectangle(PI, y_max, y_min)
            }
            Self::Miller => {
                let y = miller_y(HALF_PI);
                rectangle(PI, y, -y)
            }
            Self::Mollweide => ellipse(2.0 * SQRT2, SQRT2),
            Self::Orthographic { .. } => ellipse(1.0, 1.0),
            Self::AzimuthalEquidistant { .. } => ellipse(PI, PI),
            Self::Robinson => self.meridian_outline(),
            Self::LambertConformal { cutoff, .. } => self.cone_outline(*cutoff),
        }
    }

    /// Right edge meridian north to south, then the left edge back.
    fn meridian_outline(&self) -> Vec<PlaneCoord> {
        let mut ring: Vec<PlaneCoord> = (0..=180)
            .rev()
            .filter_map(|i| self.project(GeoCoord::new(180.0, i as f64 - 90.0)).ok())
            .collect();
        ring.extend(
            (0..=180).filter_map(|i| self.project(GeoCoord::new(-180.0, i as f64 - 90.0)).ok()),
        );
        close_ring(ring)
    }

    /// Arc along the cutoff parallel, then through the cone apex.
    fn cone_outline(&self, cutoff: f64) -> Vec<PlaneCoord> {
        let mut ring: Vec<PlaneCoord> = (0..=BOUNDARY_SAMPLES)
            .filter_map(|i| {
                let lon = -180.0 + 360.0 * i as f64 / BOUNDARY_SAMPLES as f64;
                self.project(GeoCoord::new(lon, cutoff)).ok()
            })
            .collect();
        let apex_lat = if cutoff < 0.0 { 90.0 } else { -90.0 };
        if let Ok(apex) = self.project(GeoCoord::new(0.0, apex_lat)) {
            ring.push(apex);
        }
        close_ring(ring)
    }

    pub fn proj4_params(&self, params: &mut Proj4Params) {
        match self {
            Self::Orthographic { central_latitude }
            | Self::AzimuthalEquidistant { central_latitude } => {
                params.set("lat_0", central_latitude);
            }
            Self::LambertConformal {
                central_latitude,
                standard_parallels,
                ..
            } => {
                params.set("lat_0", central_latitude);
                params.set("lat_1", standard_parallels.0);
                params.set("lat_2", standard_parallels.1);
            }
            Self::PlateCarree
            | Self::Mercator { .. }
            | Self::Miller
            | Self::Mollweide
            | Self::Robinson => {}
        }
    }
}

fn rectangle(half_width: f64, y_max: f64, y_min: f64) -> Vec<PlaneCoord> {
    vec![
        PlaneCoord::new(-half_width, y_min),
        PlaneCoord::new(-half_width, y_max),
        PlaneCoord::new(half_width, y_max),
        PlaneCoord::new(half_width, y_min),
        PlaneCoord::new(-half_width, y_min),
    ]
}

fn ellipse(a: f64, b: f64) -> Vec<PlaneCoord> {
    let ring = (0..BOUNDARY_SAMPLES)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / BOUNDARY_SAMPLES as f64;
            let (s, c) = libm::sincos(t);
            PlaneCoord::new(a * c, b * s)
        })
        .collect();
    close_ring(ring)
}

fn close_ring(mut ring: Vec<PlaneCoord>) -> Vec<PlaneCoord> {
    if let Some(&first) = ring.first() {
        if ring.last() != Some(&first) {
            ring.push(first);
        }
    }
    ring
}

/// A base projection with its own central longitude and globe.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseProjection {
    pub projection: Projection,
    #[cfg_attr(feature = "serde", serde(default))]
    pub central_longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub globe: Globe,
}

impl From<Projection> for BaseProjection {
    fn from(projection: Projection) -> Self {
        Self::new(projection)
    }
}

impl BaseProjection {
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            central_longitude: 0.0,
            globe: Globe::default(),
        }
    }

    pub fn with_central_longitude(mut self, central_longitude: f64) -> Self {
        self.central_longitude = central_longitude;
        self
    }

    pub fn with_globe(mut self, globe: Globe) -> Self {
        self.globe = globe;
        self
    }

    pub fn validate(&self) -> ProjResult<()> {
        if !self.central_longitude.is_finite() {
            return Err(ProjError::invalid_parameter(
                "central longitude must be finite",
            ));
        }
        self.globe.validate()?;
        self.projection.validate()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.projection.proj_name()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.globe.radius()
    }

    /// Projects native coordinates (central meridian at 0) to meters.
    pub fn project_native(&self, native: GeoCoord) -> ProjResult<ProjectedCoord> {
        check_finite(native.lon(), native.lat(), self.name())?;
        check_latitude(native.lat(), self.name())?;
        let plane = self.projection.project(native)?;
        let r = self.radius();
        Ok(ProjectedCoord::new(r * plane.x(), r * plane.y()))
    }

    pub fn deproject_native(&self, projected: ProjectedCoord) -> ProjResult<GeoCoord> {
        let r = self.radius();
        self.projection
            .deproject(PlaneCoord::new(projected.x() / r, projected.y() / r))
    }

    /// Projects geographic coordinates, applying the central longitude.
    pub fn project(&self, geo: GeoCoord) -> ProjResult<ProjectedCoord> {
        let lon = normalize_longitude(geo.lon() - self.central_longitude);
        self.project_native(GeoCoord::new(lon, geo.lat()))
    }

    pub fn deproject(&self, projected: ProjectedCoord) -> ProjResult<GeoCoord> {
        let native = self.deproject_native(projected)?;
        Ok(GeoCoord::new(
            normalize_longitude(native.lon() + self.central_longitude),
            native.lat(),
        ))
    }

    /// Closed boundary ring in meters.
    pub fn boundary(&self) -> Vec<ProjectedCoord> {
        let r = self.radius();
        self.projection
            .boundary()
            .into_iter()
            .map(|p| ProjectedCoord::new(r * p.x(), r * p.y()))
            .collect()
    }

    pub fn limits(&self) -> Limits {
        Limits::bounding(&self.boundary()).unwrap_or_else(|| Limits::new(0.0, 0.0, 0.0, 0.0))
    }

    /// `proj`, globe, projection specific keys, `lon_0`, `x_0`, `y_0`, `units`.
    pub fn proj4_params(&self) -> Proj4Params {
        let mut params = Proj4Params::new();
        params.set("proj", self.name());
        for (key, value) in self.globe.proj4_params() {
            params.set(key, value);
        }
        self.projection.proj4_params(&mut params);
        params.set("lon_0", self.central_longitude);
        params.set("x_0", 0.0);
        params.set("y_0", 0.0);
        params.set("units", "m");
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(projection: Projection) -> BaseProjection {
        BaseProjection::new(projection).with_globe(Globe::sphere(1.0).unwrap())
    }

    #[test]
    fn test_proj_names() {
        assert_eq!(Projection::plate_carree().proj_name(), "eqc");
        assert_eq!(Projection::mercator().proj_name(), "merc");
        assert_eq!(Projection::miller().proj_name(), "mill");
        assert_eq!(Projection::mollweide().proj_name(), "moll");
        assert_eq!(Projection::robinson().proj_name(), "robin");
        assert_eq!(Projection::orthographic(0.0).proj_name(), "ortho");
        assert_eq!(Projection::azimuthal_equidistant(0.0).proj_name(), "aeqd");
        assert_eq!(Projection::lambert_conformal().proj_name(), "lcc");
    }

    #[test]
    fn test_validate() {
        assert!(Projection::mercator().validate().is_ok());
        assert!(Projection::mercator_with_limits(10.0, -10.0).validate().is_err());
        assert!(Projection::mercator_with_limits(-90.0, 10.0).validate().is_err());
        assert!(Projection::orthographic(91.0).validate().is_err());
        assert!(Projection::lambert_conformal().validate().is_ok());
        assert!(Projection::lambert_conformal_with(39.0, (33.0, 45.0), -90.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_central_longitude_shifts() {
        let base = unit(Projection::plate_carree()).with_central_longitude(135.0);
        let p = base.project(GeoCoord::new(135.0, 10.0)).unwrap();
        assert!(p.x().abs() < 1e-15);

        let back = base.deproject(p).unwrap();
        assert!((back.lon() - 135.0).abs() < 1e-12);
    }

    #[test]
    fn test_wgs84_scaling() {
        let base = BaseProjection::new(Projection::plate_carree());
        let p = base.project(GeoCoord::new(180.0, 0.0)).unwrap();
        assert!((p.x() - PI * 6_378_137.0).abs() < 1e-6);
    }

    #[test]
    fn test_native_latitude_out_of_range() {
        let base = unit(Projection::mollweide());
        assert!(base.project_native(GeoCoord::new(0.0, 91.0)).is_err());
    }

    #[test]
    fn test_boundaries_are_closed() {
        let all = [
            Projection::plate_carree(),
            Projection::mercator(),
            Projection::miller(),
            Projection::mollweide(),
            Projection::robinson(),
            Projection::orthographic(30.0),
            Projection::azimuthal_equidistant(0.0),
            Projection::lambert_conformal(),
        ];
        for projection in all {
            let ring = projection.boundary();
            assert!(ring.len() >= 5, "{}", projection.proj_name());
            assert_eq!(ring.first(), ring.last(), "{}", projection.proj_name());
        }
    }

    #[test]
    fn test_limits() {
        let merc = unit(Projection::mercator_with_limits(-88.0, 88.0)).limits();
        assert!((merc.x_max - PI).abs() < 1e-12);
        assert!((merc.y_max - mercator_y(88.0_f64.to_radians()).unwrap()).abs() < 1e-12);

        let moll = unit(Projection::mollweide()).limits();
        assert!((moll.x_max - 2.0 * SQRT2).abs() < 1e-12);
        assert!((moll.y_max - SQRT2).abs() < 1e-12);

        let ortho = unit(Projection::orthographic(0.0)).limits();
        assert!((ortho.x_min + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lcc_outline_passes_through_apex() {
        let projection = Projection::lambert_conformal();
        let ring = projection.boundary();
        let apex = projection.project(GeoCoord::new(0.0, 90.0)).unwrap();
        assert!(ring.contains(&apex));
    }

    #[test]
    fn test_base_proj4_params() {
        let base = BaseProjection::new(Projection::lambert_conformal()).with_central_longitude(135.0);
        assert_eq!(
            base.proj4_params().to_string(),
            "+proj=lcc +ellps=WGS84 +lat_0=39 +lat_1=33 +lat_2=45 +lon_0=135 +x_0=0 +y_0=0 +units=m"
        );
    }
}
