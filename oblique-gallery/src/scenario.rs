//! Named map scenarios.
//!
//! A scenario is plain data: a rotation, a base projection, an optional
//! extent and a figure size. Scenario files are JSON arrays of scenarios:
//!
//! ```json
//! [
//!   {
//!     "name": "tilted",
//!     "rotation": { "sequence": "Ry(-50) @ Rx(135) @ Ry(37) @ Rz(-137)" },
//!     "base": { "projection": { "type": "mollweide" } },
//!     "figure_size": [8, 4]
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use oblique_core::{extract_with_case, ObliqueParameters, PoleCase, RotationSequence};
use oblique_proj::{BaseProjection, ExtentCrs, ObliqueProjection};
use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (8.0, 4.0);

fn default_figure_size() -> (f64, f64) {
    DEFAULT_FIGURE_SIZE
}

/// How a scenario rotates the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSpec {
    /// Elementary rotations, converted with the pole parameter extractor.
    Sequence(RotationSequence),
    /// Oblique parameters given directly.
    Pole(ObliqueParameters),
}

impl RotationSpec {
    pub fn sequence(text: &str) -> GalleryResult<Self> {
        Ok(Self::Sequence(text.parse()?))
    }

    pub fn pole(pole_longitude: f64, pole_latitude: f64, central_longitude: f64) -> Self {
        Self::Pole(ObliqueParameters::new(
            pole_longitude,
            pole_latitude,
            central_longitude,
        ))
    }

    /// Oblique parameters, with the extractor case for sequences.
    pub fn resolve(&self) -> (Option<PoleCase>, ObliqueParameters) {
        match self {
            Self::Sequence(seq) => {
                let (case, params) = extract_with_case(&seq.compose());
                (Some(case), params)
            }
            Self::Pole(params) => (None, *params),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtentSpec {
    pub extent: [f64; 4],
    #[serde(default)]
    pub crs: ExtentCrs,
    #[serde(default)]
    pub use_base_crs: Option<bool>,
}

impl ExtentSpec {
    pub fn geodetic(extent: [f64; 4], use_base_crs: Option<bool>) -> Self {
        Self {
            extent,
            crs: ExtentCrs::Geodetic,
            use_base_crs,
        }
    }

    pub fn projected(extent: [f64; 4], use_base_crs: Option<bool>) -> Self {
        Self {
            extent,
            crs: ExtentCrs::Projected,
            use_base_crs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub rotation: RotationSpec,
    pub base: BaseProjection,
    #[serde(default)]
    pub extent: Option<ExtentSpec>,
    /// Width and height in inches.
    #[serde(default = "default_figure_size")]
    pub figure_size: (f64, f64),
}

impl Scenario {
    pub fn new(name: impl Into<String>, rotation: RotationSpec, base: BaseProjection) -> Self {
        Self {
            name: name.into(),
            rotation,
            base,
            extent: None,
            figure_size: DEFAULT_FIGURE_SIZE,
        }
    }

    pub fn with_extent(mut self, extent: ExtentSpec) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = (width, height);
        self
    }

    /// Checks that the name is usable as a file stem and the figure size is
    /// positive.
    pub fn validate(&self) -> GalleryResult<()> {
        let name = self.name.as_str();
        if name.is_empty() {
            return Err(GalleryError::invalid_scenario(name, "empty name"));
        }
        let separator = name.contains(|c: char| c == '/' || c == '\\');
        if separator || name.contains("..") || Path::new(name).is_absolute() {
            return Err(GalleryError::invalid_scenario(
                name,
                "name must not contain path separators or '..'",
            ));
        }
        let (width, height) = self.figure_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GalleryError::invalid_scenario(
                name,
                format!("figure size ({}, {}) must be finite and positive", width, height),
            ));
        }
        Ok(())
    }

    pub fn parameters(&self) -> ObliqueParameters {
        self.rotation.resolve().1
    }

    /// The oblique projection for this scenario, with its extent applied.
    pub fn build_projection(&self) -> GalleryResult<ObliqueProjection> {
        let params = self.parameters();
        let mut proj = ObliqueProjection::from_parameters(self.base.clone(), &params)
            .map_err(|e| GalleryError::scenario(&self.name, e))?;
        if let Some(spec) = &self.extent {
            proj.set_extent(spec.extent, spec.crs, spec.use_base_crs)
                .map_err(|e| GalleryError::scenario(&self.name, e))?;
        }
        Ok(proj)
    }

    /// `{name}: +proj=ob_tran +o_proj=… +lon_0 +o_lat_p +o_lon_p`.
    pub fn summary_line(&self) -> String {
        let params = self.parameters();
        format!(
            "{}: +proj=ob_tran +o_proj={} {}",
            self.name,
            self.base.name(),
            params.proj4_summary()
        )
    }
}

pub fn load_scenarios(path: &Path) -> GalleryResult<Vec<Scenario>> {
    let text = fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
    let scenarios: Vec<Scenario> =
        serde_json::from_str(&text).map_err(|e| GalleryError::json(path, e))?;
    validate_scenarios(&scenarios)?;
    tracing::debug!(path = %path.display(), count = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

/// Validates every scenario and rejects duplicate names.
pub fn validate_scenarios(scenarios: &[Scenario]) -> GalleryResult<()> {
    scenarios.iter().try_for_each(Scenario::validate)?;
    check_unique_names(scenarios)
}

pub fn check_unique_names(scenarios: &[Scenario]) -> GalleryResult<()> {
    let mut seen = HashSet::new();
    for s in scenarios {
        if !seen.insert(s.name.as_str()) {
            return Err(GalleryError::DuplicateName(s.name.clone()));
        }
    }
    Ok(())
}
