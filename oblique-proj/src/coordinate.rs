use oblique_core::constants::DEG_TO_RAD;

/// Longitude/latitude in degrees.
///
/// Used both for geographic positions and for positions in the rotated
/// (native) frame of an oblique projection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoord {
    lon: f64,
    lat: f64,
}

impl GeoCoord {
    #[inline]
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self {
            lon: lon_deg,
            lat: lat_deg,
        }
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon_rad(&self) -> f64 {
        self.lon * DEG_TO_RAD
    }

    #[inline]
    pub fn lat_rad(&self) -> f64 {
        self.lat * DEG_TO_RAD
    }
}

/// Map coordinates on the unit sphere, before scaling by the globe radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoord {
    x: f64,
    y: f64,
}

impl PlaneCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Projected map coordinates in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCoord {
    x: f64,
    y: f64,
}

impl ProjectedCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        libm::hypot(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned map limits in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Limits {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounding box of a set of points, `None` when empty.
    pub fn bounding(points: &[ProjectedCoord]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.x(), first.x(), first.y(), first.y());
        Some(points.iter().fold(init, |acc, p| {
            Self::new(
                acc.x_min.min(p.x()),
                acc.x_max.max(p.x()),
                acc.y_min.min(p.y()),
                acc.y_max.max(p.y()),
            )
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn contains(&self, p: &ProjectedCoord) -> bool {
        (self.x_min..=self.x_max).contains(&p.x()) && (self.y_min..=self.y_max).contains(&p.y())
    }

    /// Closed rectangular ring, clockwise from the lower left corner.
    pub fn to_ring(&self) -> Vec<ProjectedCoord> {
        vec![
            ProjectedCoord::new(self.x_min, self.y_min),
            ProjectedCoord::new(self.x_min, self.y_max),
            ProjectedCoord::new(self.x_max, self.y_max),
            ProjectedCoord::new(self.x_max, self.y_min),
            ProjectedCoord::new(self.x_min, self.y_min),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_coord_accessors() {
        let g = GeoCoord::new(180.0, -90.0);
        assert_eq!(g.lon(), 180.0);
        assert_eq!(g.lat(), -90.0);
        assert!((g.lon_rad() - std::f64::consts::PI).abs() < 1e-15);
        assert!((g.lat_rad() + std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_projected_distance() {
        let a = ProjectedCoord::new(0.0, 0.0);
        let b = ProjectedCoord::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_limits_bounding() {
        let pts = [
            ProjectedCoord::new(1.0, -2.0),
            ProjectedCoord::new(-3.0, 5.0),
            ProjectedCoord::new(0.5, 0.0),
        ];
        let l = Limits::bounding(&pts).unwrap();
        assert_eq!(l, Limits::new(-3.0, 1.0, -2.0, 5.0));
        assert_eq!(l.width(), 4.0);
        assert_eq!(l.height(), 7.0);
        assert!(l.contains(&ProjectedCoord::new(0.0, 0.0)));
        assert!(!l.contains(&ProjectedCoord::new(2.0, 0.0)));
        assert!(Limits::bounding(&[]).is_none());
    }

    #[test]
    fn test_limits_ring_is_closed() {
        let ring = Limits::new(-1.0, 1.0, -2.0, 2.0).to_ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[1], ProjectedCoord::new(-1.0, 2.0));
    }
}
