//! Rotation algebra and oblique projection parameters.
//!
//! An oblique projection draws a map on a rotated globe. The rotation is most
//! naturally described as a product of elementary rotations about the X, Y
//! and Z axes, but projection libraries expect three numbers instead: the
//! geographic position of the new pole (`o_lon_p`, `o_lat_p`) and a central
//! longitude (`lon_0`). This crate converts between the two.
//!
//! ```
//! use oblique_core::{extract_parameters, RotationSequence};
//!
//! let seq: RotationSequence = "Rz(60) @ Ry(45) @ Rz(-120)".parse().unwrap();
//! let params = extract_parameters(&seq.compose());
//! assert!((params.pole_latitude - 45.0).abs() < 1e-9);
//!
//! // The parameters rebuild the same rotation.
//! let rebuilt = params.to_rotation();
//! assert!(rebuilt.max_difference(&seq.compose()) < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: [`RotationMatrix3`] and [`Vector3`]
//! - [`rotation`]: [`Axis`], [`ElementaryRotation`], [`RotationSequence`] and its text form
//! - [`params`]: the pole parameter extractor
//! - [`utils`]: longitude normalization
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public value types. Rotation
//!   sequences serialize as their text form.

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod params;
pub mod rotation;
pub mod test_helpers;
pub mod utils;

pub use errors::{ObliqueError, ObliqueResult};
pub use matrix::{RotationMatrix3, Vector3};
pub use params::{
    extract_parameters, extract_with_case, try_extract_parameters, ObliqueParameters, PoleCase,
};
pub use rotation::{Axis, ElementaryRotation, RotationSequence};

/// Rotation about the X axis by `angle_degrees`.
#[inline]
pub fn rotation_x(angle_degrees: f64) -> RotationMatrix3 {
    RotationMatrix3::rotation_x(angle_degrees)
}

/// Rotation about the Y axis by `angle_degrees`.
#[inline]
pub fn rotation_y(angle_degrees: f64) -> RotationMatrix3 {
    RotationMatrix3::rotation_y(angle_degrees)
}

/// Rotation about the Z axis by `angle_degrees`.
#[inline]
pub fn rotation_z(angle_degrees: f64) -> RotationMatrix3 {
    RotationMatrix3::rotation_z(angle_degrees)
}
