//! Elementary rotations and rotation sequences.
//!
//! A [`RotationSequence`] is an ordered list of [`ElementaryRotation`]s written
//! left to right exactly as in the matrix product. The rightmost rotation acts
//! first on a vector:
//!
//! ```text
//! "Ry(-50) @ Rx(135) @ Ry(37) @ Rz(-137)"  =  Ry(-50) · Rx(135) · Ry(37) · Rz(-137)
//! ```
//!
//! # Text Form
//!
//! Terms are `R<axis>(<angle in degrees>)` with axis `x`, `y` or `z` (either
//! case). Terms are separated by `@`, `*` or whitespace. The empty string is
//! the empty sequence, which composes to the identity.
//!
//! ```
//! use oblique_core::{Axis, RotationSequence};
//!
//! let seq: RotationSequence = "Rx(-15) * Ry(36) rz(-139)".parse().unwrap();
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.rotations()[2].axis, Axis::Z);
//! assert_eq!(seq.to_string(), "Rx(-15) @ Ry(36) @ Rz(-139)");
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ObliqueError, ObliqueResult};
use crate::matrix::RotationMatrix3;
use crate::params::{extract_parameters, ObliqueParameters};

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Lower-case axis letter, as used in the text form.
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Elementary rotation matrix about this axis.
    pub fn rotation(self, angle_degrees: f64) -> RotationMatrix3 {
        match self {
            Axis::X => RotationMatrix3::rotation_x(angle_degrees),
            Axis::Y => RotationMatrix3::rotation_y(angle_degrees),
            Axis::Z => RotationMatrix3::rotation_z(angle_degrees),
        }
    }
}

impl FromStr for Axis {
    type Err = ObliqueError;

    fn from_str(s: &str) -> ObliqueResult<Self> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(ObliqueError::parse(s, format!("unknown axis '{}'", other))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A rotation by a signed angle in degrees about one principal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementaryRotation {
    pub axis: Axis,
    pub angle_degrees: f64,
}

impl ElementaryRotation {
    pub fn new(axis: Axis, angle_degrees: f64) -> Self {
        Self {
            axis,
            angle_degrees,
        }
    }

    pub fn matrix(&self) -> RotationMatrix3 {
        self.axis.rotation(self.angle_degrees)
    }
}

impl fmt::Display for ElementaryRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}({})", self.axis.letter(), self.angle_degrees)
    }
}

/// Ordered product of elementary rotations.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RotationSequence {
    rotations: Vec<ElementaryRotation>,
}

impl RotationSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rotations(rotations: Vec<ElementaryRotation>) -> Self {
        Self { rotations }
    }

    /// Appends a rotation on the right, i.e. one that acts before all others.
    ///
    /// ```
    /// use oblique_core::{Axis, RotationSequence};
    ///
    /// let seq = RotationSequence::new()
    ///     .then(Axis::X, 135.0)
    ///     .then(Axis::Z, -137.0);
    /// assert_eq!(seq.to_string(), "Rx(135) @ Rz(-137)");
    /// ```
    pub fn then(mut self, axis: Axis, angle_degrees: f64) -> Self {
        self.rotations.push(ElementaryRotation::new(axis, angle_degrees));
        self
    }

    pub fn rotations(&self) -> &[ElementaryRotation] {
        &self.rotations
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Multiplies the rotations left to right.
    pub fn compose(&self) -> RotationMatrix3 {
        self.rotations
            .iter()
            .fold(RotationMatrix3::identity(), |acc, r| acc * r.matrix())
    }

    /// Composes the sequence and extracts the oblique parameters.
    pub fn parameters(&self) -> ObliqueParameters {
        extract_parameters(&self.compose())
    }
}

static TERM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)R\s*([xyz])\s*\(\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?)\s*\)",
    )
    .unwrap()
});

static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[@*]?\s*$").unwrap());

impl FromStr for RotationSequence {
    type Err = ObliqueError;

    fn from_str(s: &str) -> ObliqueResult<Self> {
        let mut rotations = Vec::new();
        let mut cursor = 0;

        for caps in TERM_REGEX.captures_iter(s) {
            let whole = caps
                .get(0)
                .ok_or_else(|| ObliqueError::parse(s, "empty match"))?;
            let gap = &s[cursor..whole.start()];
            check_gap(s, gap, cursor == 0)?;

            let axis: Axis = caps[1].parse().map_err(|_| {
                ObliqueError::parse(s, format!("unknown axis '{}'", &caps[1]))
            })?;
            let angle: f64 = caps[2].parse().map_err(|_| {
                ObliqueError::parse(s, format!("invalid angle '{}'", &caps[2]))
            })?;
            if !angle.is_finite() {
                return Err(ObliqueError::parse(
                    s,
                    format!("angle '{}' is not finite", &caps[2]),
                ));
            }

            rotations.push(ElementaryRotation::new(axis, angle));
            cursor = whole.end();
        }

        let tail = &s[cursor..];
        if !tail.trim().is_empty() {
            return Err(ObliqueError::parse(
                s,
                format!("unexpected text '{}'", tail.trim()),
            ));
        }

        Ok(Self { rotations })
    }
}

fn check_gap(input: &str, gap: &str, leading: bool) -> ObliqueResult<()> {
    if leading {
        if gap.trim().is_empty() {
            return Ok(());
        }
    } else if SEPARATOR_REGEX.is_match(gap) && !gap.is_empty() {
        return Ok(());
    }

    if gap.is_empty() {
        Err(ObliqueError::parse(input, "missing separator between rotations"))
    } else {
        Err(ObliqueError::parse(
            input,
            format!("unexpected text '{}'", gap.trim()),
        ))
    }
}

impl TryFrom<String> for RotationSequence {
    type Error = ObliqueError;

    fn try_from(value: String) -> ObliqueResult<Self> {
        value.parse()
    }
}

impl From<RotationSequence> for String {
    fn from(seq: RotationSequence) -> String {
        seq.to_string()
    }
}

impl fmt::Display for RotationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rotation) in self.rotations.iter().enumerate() {
            if i > 0 {
                write!(f, " @ ")?;
            }
            write!(f, "{}", rotation)?;
        }
        Ok(())
    }
}
