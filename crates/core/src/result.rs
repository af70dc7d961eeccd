//! Packaging and pallet results.

use crate::dimensions::Dimensions3D;
use crate::factor::StackingFactor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packaging level, from the product itself up to the shipping carton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LevelKind {
    /// A single product unit.
    Unit,
    /// Inner case holding units.
    Inner,
    /// Outer case holding inner cases.
    Outer,
}

/// One level of the packaging hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackagingLevel {
    /// Which level this is.
    pub kind: LevelKind,

    /// Items of the level below held at this level (1 for units).
    pub count: u32,

    /// Arrangement of the items of the level below.
    pub factor: StackingFactor,

    /// Bounding box of the stacked contents, before material.
    pub content: Dimensions3D,

    /// Outside dimensions, material included.
    pub dimensions: Dimensions3D,

    /// Total weight in kilograms.
    pub weight_kg: f64,
}

impl PackagingLevel {
    /// Describes a bare product unit.
    pub fn unit(dimensions: Dimensions3D, weight_kg: f64) -> Self {
        Self {
            kind: LevelKind::Unit,
            count: 1,
            factor: StackingFactor::SINGLE,
            content: dimensions,
            dimensions,
            weight_kg,
        }
    }
}

/// How many outer cartons, and product units, fit on one pallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletResult {
    /// Cartons in one layer.
    pub cartons_per_layer: u64,
    /// Layers that fit within the usable height.
    pub layers: u64,
    /// Cartons on the whole pallet.
    pub total_cartons: u64,
    /// Product units on the whole pallet.
    pub total_units: u64,
}

impl PalletResult {
    /// A pallet with nothing on it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if not even one carton fits.
    pub fn is_empty(&self) -> bool {
        self.total_cartons == 0
    }
}

/// Full result of a packaging computation. All values are in millimeters
/// and kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackagingResult {
    /// The product unit, in canonical units.
    pub unit: PackagingLevel,
    /// Inner case.
    pub inner: PackagingLevel,
    /// Outer case.
    pub outer: PackagingLevel,
    /// Pallet fit of the outer case.
    pub pallet: PalletResult,
    /// Fraction of the usable pallet volume taken by cartons (0.0 - 1.0).
    pub pallet_utilization: f64,
}

impl PackagingResult {
    /// Stacking of units in the inner case.
    pub fn inner_factor(&self) -> StackingFactor {
        self.inner.factor
    }

    /// Stacking of inner cases in the outer case.
    pub fn outer_factor(&self) -> StackingFactor {
        self.outer.factor
    }

    /// Product units in one outer case.
    pub fn units_per_outer(&self) -> u64 {
        u64::from(self.inner.count) * u64::from(self.outer.count)
    }

    /// Total weight of all cartons on the pallet, pallet itself excluded.
    pub fn pallet_load_kg(&self) -> f64 {
        self.outer.weight_kg * self.pallet.total_cartons as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.pallet_utilization * 100.0)
    }
}
