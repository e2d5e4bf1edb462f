//! Map extents for oblique projections.
//!
//! An extent replaces the projection's boundary ring and limits. Geodetic
//! extents are walked along their four edges and pushed through the
//! projection, so the resulting boundary follows the curved image of the
//! rectangle.

use crate::coordinate::{GeoCoord, Limits, ProjectedCoord};
use crate::error::{ProjError, ProjResult};
use crate::oblique::ObliqueProjection;

/// Samples per rectangle edge.
pub const EXTENT_SAMPLES: usize = 91;

/// Coordinate system of an extent rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExtentCrs {
    /// `(lon_min, lon_max, lat_min, lat_max)` in degrees.
    #[default]
    Geodetic,
    /// `(x_min, x_max, y_min, y_max)` in meters.
    Projected,
}

impl ExtentCrs {
    /// Whether the extent goes through the base coordinate system when
    /// `use_base_crs` is not given.
    pub fn default_use_base_crs(self) -> bool {
        match self {
            Self::Geodetic => true,
            Self::Projected => false,
        }
    }
}

/// `n` evenly spaced samples from `start` toward `end`, excluding `end`.
fn edge(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / n as f64;
    (0..n).map(move |i| start + step * i as f64)
}

/// Closed ring around `(x_min, x_max, y_min, y_max)` with `n` samples per
/// edge: up the left edge, along the top, down the right edge, back along
/// the bottom. Each edge starts at its corner; the ring has `4n + 1` points.
pub fn rectangle_ring(extent: [f64; 4], n: usize) -> Vec<(f64, f64)> {
    let [x_min, x_max, y_min, y_max] = extent;
    let mut ring = Vec::with_capacity(4 * n + 1);
    ring.extend(edge(y_min, y_max, n).map(|y| (x_min, y)));
    ring.extend(edge(x_min, x_max, n).map(|x| (x, y_max)));
    ring.extend(edge(y_max, y_min, n).map(|y| (x_max, y)));
    ring.extend(edge(x_max, x_min, n).map(|x| (x, y_min)));
    ring.push((x_min, y_min));
    ring
}

fn validate_extent(extent: [f64; 4], crs: ExtentCrs) -> ProjResult<()> {
    let [x_min, x_max, y_min, y_max] = extent;
    if extent.iter().any(|v| !v.is_finite()) {
        return Err(ProjError::invalid_parameter(format!(
            "extent {:?} is not finite",
            extent
        )));
    }
    if x_min >= x_max || y_min >= y_max {
        return Err(ProjError::invalid_parameter(format!(
            "extent {:?} must be ordered (min, max, min, max)",
            extent
        )));
    }
    if crs == ExtentCrs::Geodetic && (y_min < -90.0 || y_max > 90.0) {
        return Err(ProjError::invalid_parameter(format!(
            "geodetic extent latitudes ({}, {}) outside [-90, 90]",
            y_min, y_max
        )));
    }
    Ok(())
}

impl ObliqueProjection {
    /// Restricts the map to `extent`.
    ///
    /// For a geodetic extent, `use_base_crs` (default `true`) sends the
    /// rectangle through the full oblique transform; `false` treats it as
    /// already in the rotated frame and applies only the base projection.
    /// For a projected extent, `use_base_crs` (default `false`) sets the
    /// rectangle directly; `true` reads it in base projection coordinates
    /// and reprojects its edges.
    pub fn set_extent(
        &mut self,
        extent: [f64; 4],
        crs: ExtentCrs,
        use_base_crs: Option<bool>,
    ) -> ProjResult<()> {
        validate_extent(extent, crs)?;
        let use_base_crs = use_base_crs.unwrap_or_else(|| crs.default_use_base_crs());

        let ring = match (crs, use_base_crs) {
            (ExtentCrs::Projected, false) => {
                let [x_min, x_max, y_min, y_max] = extent;
                Limits::new(x_min, x_max, y_min, y_max).to_ring()
            }
            (ExtentCrs::Geodetic, true) => {
                self.walk(extent, |(lon, lat)| self.forward(GeoCoord::new(lon, lat)))
            }
            (ExtentCrs::Geodetic, false) => {
                self.walk(extent, |(lon, lat)| self.project_native(GeoCoord::new(lon, lat)))
            }
            (ExtentCrs::Projected, true) => self.walk(extent, |(x, y)| {
                let geo = self.base().deproject(ProjectedCoord::new(x, y))?;
                self.forward(geo)
            }),
        };

        if ring.len() < 3 {
            return Err(ProjError::out_of_bounds(format!(
                "extent {:?} leaves {} projectable boundary points",
                extent,
                ring.len()
            )));
        }

        let limits = Limits::bounding(&ring).ok_or_else(|| {
            ProjError::out_of_bounds(format!("extent {:?} has no bounding box", extent))
        })?;
        tracing::debug!(
            ?crs,
            use_base_crs,
            points = ring.len(),
            x_min = limits.x_min,
            x_max = limits.x_max,
            y_min = limits.y_min,
            y_max = limits.y_max,
            "set extent"
        );

        self.boundary = ring;
        self.limits = limits;
        Ok(())
    }

    fn walk<F>(&self, extent: [f64; 4], project: F) -> Vec<ProjectedCoord>
    where
        F: Fn((f64, f64)) -> ProjResult<ProjectedCoord>,
    {
        let mut ring: Vec<ProjectedCoord> = rectangle_ring(extent, EXTENT_SAMPLES)
            .into_iter()
            .filter_map(|point| match project(point) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(x = point.0, y = point.1, error = %e, "dropping extent point");
                    None
                }
            })
            .collect();

        if let Some(&first) = ring.first() {
            if ring.last() != Some(&first) {
                ring.push(first);
            }
        }
        ring
    }
}
