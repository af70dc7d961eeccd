//! Positions of individual boxes inside a stack or on a pallet.

use crate::result::LevelKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The position of one box within its container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// What kind of box was placed (a unit in an inner, an inner in an outer,
    /// an outer on the pallet).
    pub level: LevelKind,

    /// Instance index (0-based) in generation order.
    pub instance: usize,

    /// Grid cell `[i, j, k]` along length, width and height.
    pub cell: [u32; 3],

    /// Minimum corner of the box in millimeters.
    pub position: [f64; 3],
}

impl Placement {
    /// Creates a new placement.
    pub fn new(level: LevelKind, instance: usize, cell: [u32; 3], position: [f64; 3]) -> Self {
        Self {
            level,
            instance,
            cell,
            position,
        }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.position[1]
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> f64 {
        self.position[2]
    }

    /// Returns the layer index (grid cell along the height axis).
    pub fn layer(&self) -> u32 {
        self.cell[2]
    }
}

/// Summary of a set of placements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of placements in each layer, indexed by layer.
    pub per_layer: Vec<usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            let layer = p.layer() as usize;
            if stats.per_layer.len() <= layer {
                stats.per_layer.resize(layer + 1, 0);
            }
            stats.per_layer[layer] += 1;
        }

        stats
    }
}
