//! Axis-aligned box dimensions.

use crate::factor::StackingFactor;
use crate::units::UnitSystem;
use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Advisory maximum side length for a single carton, in millimeters.
pub const MAX_SIDE_MM: f64 = 600.0;

/// Box dimensions (length, width, height) in millimeters.
///
/// Every component is finite and non-negative. Zero is allowed: a zero-size
/// box is degenerate rather than invalid, and pallet fitting reports zero
/// cartons for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Dimensions3D {
    extent: Vector3<f64>,
}

impl Dimensions3D {
    /// Creates dimensions from length, width and height in millimeters.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self> {
        for (axis, value) in [("length", length), ("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be finite and non-negative, got {}",
                    axis, value
                )));
            }
        }

        Ok(Self {
            extent: Vector3::new(length, width, height),
        })
    }

    /// Creates dimensions from values expressed in `system`.
    pub fn from_unit_system(
        length: f64,
        width: f64,
        height: f64,
        system: UnitSystem,
    ) -> Result<Self> {
        Self::new(
            system.length_to_mm(length),
            system.length_to_mm(width),
            system.length_to_mm(height),
        )
    }

    /// A zero-size box.
    pub fn zero() -> Self {
        Self {
            extent: Vector3::zeros(),
        }
    }

    /// Returns the length (x axis).
    pub fn length(&self) -> f64 {
        self.extent.x
    }

    /// Returns the width (y axis).
    pub fn width(&self) -> f64 {
        self.extent.y
    }

    /// Returns the height (z axis).
    pub fn height(&self) -> f64 {
        self.extent.z
    }

    /// Returns the dimensions as a vector.
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.extent
    }

    /// Returns `[length, width, height]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.extent.x, self.extent.y, self.extent.z]
    }

    /// Returns the enclosed volume in cubic millimeters.
    pub fn volume(&self) -> f64 {
        self.extent.x * self.extent.y * self.extent.z
    }

    /// Returns true if any axis is zero.
    pub fn is_degenerate(&self) -> bool {
        self.extent.iter().any(|&v| v == 0.0)
    }

    /// Returns true if any side is longer than `limit_mm`.
    pub fn exceeds_side(&self, limit_mm: f64) -> bool {
        self.extent.iter().any(|&v| v > limit_mm)
    }

    /// Bounding box of `factor` copies of this box stacked along each axis.
    ///
    /// Fails if the stack is too large to represent.
    pub fn stacked(&self, factor: &StackingFactor) -> Result<Self> {
        Self::from_extent(self.extent.component_mul(&factor.as_vector()))
    }

    /// Grows every axis by `2 × thickness_mm` (material on both sides).
    pub fn inflated(&self, thickness_mm: f64) -> Result<Self> {
        if !thickness_mm.is_finite() || thickness_mm < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "Material thickness must be finite and non-negative, got {}",
                thickness_mm
            )));
        }

        Self::from_extent(self.extent.add_scalar(2.0 * thickness_mm))
    }

    fn from_extent(extent: Vector3<f64>) -> Result<Self> {
        if extent.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "Dimensions overflow: {} x {} x {} mm",
                extent.x, extent.y, extent.z
            )));
        }
        Ok(Self { extent })
    }

    /// Expresses the dimensions in `system` for display.
    pub fn to_unit_system(&self, system: UnitSystem) -> [f64; 3] {
        self.to_array().map(|v| system.length_from_mm(v))
    }
}

impl Default for Dimensions3D {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<[f64; 3]> for Dimensions3D {
    type Error = Error;

    fn try_from(value: [f64; 3]) -> Result<Self> {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Dimensions3D> for [f64; 3] {
    fn from(dims: Dimensions3D) -> Self {
        dims.to_array()
    }
}

impl std::fmt::Display for Dimensions3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} x {} mm",
            self.extent.x, self.extent.y, self.extent.z
        )
    }
}
