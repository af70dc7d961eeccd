//! Carton dimension composition.

use palletize_core::{Dimensions3D, Result, StackingFactor};

/// Builds container dimensions from their contents.
///
/// Stacking and wall inflation do not commute: a container is always the
/// stack of its contents first, then wrapped in material.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionComposer;

impl DimensionComposer {
    /// Bounding box of `base` stacked `factor` times along each axis.
    pub fn compose(factor: &StackingFactor, base: &Dimensions3D) -> Result<Dimensions3D> {
        base.stacked(factor)
    }

    /// Adds `thickness_mm` of material on both sides of every axis.
    pub fn inflate(dims: &Dimensions3D, thickness_mm: f64) -> Result<Dimensions3D> {
        dims.inflated(thickness_mm)
    }

    /// Stacks `base` and wraps the stack. Returns `(content, outside)`.
    pub fn enclose(
        factor: &StackingFactor,
        base: &Dimensions3D,
        thickness_mm: f64,
    ) -> Result<(Dimensions3D, Dimensions3D)> {
        let content = Self::compose(factor, base)?;
        let outside = Self::inflate(&content, thickness_mm)?;
        Ok((content, outside))
    }
}
