//! Globe model.
//!
//! All projection math here is spherical. The sphere radius is the globe's
//! semimajor axis; the semiminor axis and ellipse name are carried only so
//! that proj4 parameter lists describe the same datum.

use oblique_core::constants::{WGS84_SEMI_MAJOR_AXIS, WGS84_SEMI_MINOR_AXIS};

use crate::error::{ProjError, ProjResult};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Globe {
    pub semimajor_axis: f64,
    pub semiminor_axis: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ellipse: Option<String>,
}

impl Default for Globe {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Globe {
    pub fn wgs84() -> Self {
        Self {
            semimajor_axis: WGS84_SEMI_MAJOR_AXIS,
            semiminor_axis: WGS84_SEMI_MINOR_AXIS,
            ellipse: Some("WGS84".to_string()),
        }
    }

    /// A sphere of the given radius in meters.
    pub fn sphere(radius: f64) -> ProjResult<Self> {
        let globe = Self {
            semimajor_axis: radius,
            semiminor_axis: radius,
            ellipse: None,
        };
        globe.validate()?;
        Ok(globe)
    }

    pub fn validate(&self) -> ProjResult<()> {
        if !(self.semimajor_axis.is_finite() && self.semimajor_axis > 0.0) {
            return Err(ProjError::invalid_parameter(format!(
                "globe semimajor axis must be positive, got {}",
                self.semimajor_axis
            )));
        }
        if !(self.semiminor_axis.is_finite()
            && self.semiminor_axis > 0.0
            && self.semiminor_axis <= self.semimajor_axis)
        {
            return Err(ProjError::invalid_parameter(format!(
                "globe semiminor axis must be in (0, {}], got {}",
                self.semimajor_axis, self.semiminor_axis
            )));
        }
        Ok(())
    }

    /// Radius of the sphere used by the projection math.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.semimajor_axis
    }

    /// `ellps=<name>` when named, `a=` and `b=` otherwise.
    pub fn proj4_params(&self) -> Vec<(String, String)> {
        match &self.ellipse {
            Some(name) => vec![("ellps".to_string(), name.clone())],
            None => vec![
                ("a".to_string(), format!("{}", self.semimajor_axis)),
                ("b".to_string(), format!("{}", self.semiminor_axis)),
            ],
        }
    }
}
