//! 3D Cartesian vectors on the unit sphere.
//!
//! Geographic positions are given as longitude/latitude, but rotating the globe
//! is cleanest in Cartesian form. The typical workflow is:
//!
//! 1. Convert lon/lat to Cartesian with [`from_lonlat_degrees`](Vector3::from_lonlat_degrees)
//! 2. Apply a [`RotationMatrix3`](crate::RotationMatrix3)
//! 3. Convert back with [`to_lonlat_degrees`](Vector3::to_lonlat_degrees)
//!
//! ```
//! use oblique_core::{RotationMatrix3, Vector3};
//!
//! let v = Vector3::from_lonlat_degrees(10.0, 20.0);
//! let rotated = RotationMatrix3::rotation_z(15.0) * v;
//! let (lon, lat) = rotated.to_lonlat_degrees();
//! assert!((lon - 25.0).abs() < 1e-12);
//! assert!((lat - 20.0).abs() < 1e-12);
//! ```
//!
//! # Coordinate Conventions
//!
//! - `+X` points at longitude 0 on the equator
//! - `+Y` points at longitude 90°E on the equator
//! - `+Z` points at the north pole
use std::fmt;

use crate::math::{asin_safe, atan2_degrees, sincos_degrees};

/// A 3D Cartesian vector.
///
/// Components are public for direct access.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Creates a unit vector from longitude and latitude in degrees.
    ///
    /// ```
    /// use oblique_core::Vector3;
    ///
    /// let pole = Vector3::from_lonlat_degrees(123.0, 90.0);
    /// assert!((pole.z - 1.0).abs() < 1e-15);
    ///
    /// let east = Vector3::from_lonlat_degrees(90.0, 0.0);
    /// assert!((east.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_lonlat_degrees(lon: f64, lat: f64) -> Self {
        let (sin_lon, cos_lon) = sincos_degrees(lon);
        let (sin_lat, cos_lat) = sincos_degrees(lat);
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Converts the vector to `(lon, lat)` in degrees.
    ///
    /// Longitude is `atan2(y, x)` in (-180°, 180°], latitude is
    /// `asin(z)` with `z` clamped to [-1, 1]. The vector is assumed to be of
    /// unit length. At the poles the longitude is whatever `atan2` returns for
    /// the residual x/y components.
    pub fn to_lonlat_degrees(&self) -> (f64, f64) {
        let lon = atan2_degrees(self.y, self.x);
        let lat = asin_safe(self.z).to_degrees();
        (lon, lat)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
