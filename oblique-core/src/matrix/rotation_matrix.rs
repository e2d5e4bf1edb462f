//! 3x3 rotation matrices for rotating the globe before projection.
//!
//! A rotation matrix is a 3x3 orthogonal matrix with determinant +1. Applied
//! to a unit vector on the sphere it moves that point to a new position while
//! preserving its length. Oblique projections are defined by exactly such a
//! rotation, taking geographic coordinates into the projection's native frame.
//!
//! # Rotation Convention (active, right-handed)
//!
//! The elementary rotations rotate the *vector*, counterclockwise when looking
//! from the positive axis toward the origin. Angles are in degrees:
//!
//! ```text
//! Rx(t) = | 1   0    0  |   Ry(t) = |  c  0  s |   Rz(t) = | c -s  0 |
//!         | 0   c   -s  |           |  0  1  0 |           | s  c  0 |
//!         | 0   s    c  |           | -s  0  c |           | 0  0  1 |
//! ```
//!
//! A positive rotation of 90 degrees about Z takes `[1, 0, 0]` to `[0, 1, 0]`,
//! i.e. it adds 90 degrees to every longitude.
//!
//! # Composing Transformations
//!
//! Rotations compose by multiplication, and the rightmost matrix acts first on
//! the vector. `Ry(-50) * Rx(135) * Rz(-137)` first spins the globe by -137
//! degrees about the polar axis, then tilts it about X, then about Y:
//!
//! ```
//! use oblique_core::RotationMatrix3;
//!
//! let r = RotationMatrix3::rotation_y(-50.0)
//!     * RotationMatrix3::rotation_x(135.0)
//!     * RotationMatrix3::rotation_z(-137.0);
//! assert!(r.is_rotation_matrix(1e-12));
//! ```
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element at
//! row `i`, column `j` is `matrix[(i, j)]` or `matrix.get(i, j)`.

use std::fmt;

use crate::math::sincos_degrees;

use super::Vector3;

/// A 3x3 rotation matrix.
///
/// Represents proper rotations (orthogonal with determinant +1). The type does
/// not enforce this; use [`is_rotation_matrix`](Self::is_rotation_matrix) to
/// check matrices built from raw elements.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from a row-major 3x3 array.
    ///
    /// This does not validate that the matrix is a proper rotation.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Rotation about the X axis by `angle_degrees`.
    ///
    /// ```
    /// use oblique_core::RotationMatrix3;
    ///
    /// // [0, 1, 0] rotates to [0, 0, 1]
    /// let v = RotationMatrix3::rotation_x(90.0).apply_to_vector([0.0, 1.0, 0.0]);
    /// assert!(v[0].abs() < 1e-15);
    /// assert!(v[1].abs() < 1e-15);
    /// assert!((v[2] - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotation_x(angle_degrees: f64) -> Self {
        let (s, c) = sincos_degrees(angle_degrees);
        Self::from_array([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation about the Y axis by `angle_degrees`.
    ///
    /// ```
    /// use oblique_core::RotationMatrix3;
    ///
    /// // [0, 0, 1] rotates to [1, 0, 0]
    /// let v = RotationMatrix3::rotation_y(90.0).apply_to_vector([0.0, 0.0, 1.0]);
    /// assert!((v[0] - 1.0).abs() < 1e-15);
    /// assert!(v[2].abs() < 1e-15);
    /// ```
    pub fn rotation_y(angle_degrees: f64) -> Self {
        let (s, c) = sincos_degrees(angle_degrees);
        Self::from_array([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation about the Z axis by `angle_degrees`.
    ///
    /// ```
    /// use oblique_core::RotationMatrix3;
    ///
    /// // [1, 0, 0] rotates to [0, 1, 0]
    /// let v = RotationMatrix3::rotation_z(90.0).apply_to_vector([1.0, 0.0, 0.0]);
    /// assert!(v[0].abs() < 1e-15);
    /// assert!((v[1] - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotation_z(angle_degrees: f64) -> Self {
        let (s, c) = sincos_degrees(angle_degrees);
        Self::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns column `j` as a vector.
    ///
    /// Column `j` is the image of the `j`-th basis vector; column 2 is where the
    /// original north pole ends up after the rotation.
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::new(
            self.elements[0][j],
            self.elements[1][j],
            self.elements[2][j],
        )
    }

    /// Multiplies this matrix by another, returning the product.
    ///
    /// The result applies `other` first, then `self`. Also available as the `*`
    /// operator on owned and borrowed matrices.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this rotation matrix to a 3D vector (`M * v`).
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * vector[0]
                + self.elements[0][1] * vector[1]
                + self.elements[0][2] * vector[2],
            self.elements[1][0] * vector[0]
                + self.elements[1][1] * vector[1]
                + self.elements[1][2] * vector[2],
            self.elements[2][0] * vector[0]
                + self.elements[2][1] * vector[1]
                + self.elements[2][2] * vector[2],
        ]
    }

    /// Computes the determinant of this matrix.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Returns the inverse rotation.
    ///
    /// For a proper rotation the inverse is the transpose, so no general
    /// inversion is performed.
    ///
    /// ```
    /// use oblique_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::rotation_z(30.0) * RotationMatrix3::rotation_x(40.0);
    /// let product = m * m.inverse();
    /// assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
    /// ```
    #[inline]
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    /// Largest absolute deviation of `M * Mᵀ` from the identity.
    pub fn orthogonality_error(&self) -> f64 {
        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
    }

    /// Checks whether this matrix is a proper rotation within a tolerance.
    ///
    /// Requires determinant +1 (not -1, which would be a reflection) and
    /// `M * Mᵀ = I`.
    ///
    /// ```
    /// use oblique_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::rotation_z(30.0) * RotationMatrix3::rotation_x(20.0);
    /// assert!(m.is_rotation_matrix(1e-14));
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        (self.determinant() - 1.0).abs() <= tolerance && self.orthogonality_error() <= tolerance
    }

    /// Returns the maximum absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }

    /// Rotates a point given as longitude/latitude in degrees.
    ///
    /// Returns the rotated longitude in (-180, 180] and latitude in [-90, 90].
    pub fn transform_lonlat(&self, lon_degrees: f64, lat_degrees: f64) -> (f64, f64) {
        let v = Vector3::from_lonlat_degrees(lon_degrees, lat_degrees);
        (self * v).to_lonlat_degrees()
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: RotationMatrix3) -> RotationMatrix3 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
