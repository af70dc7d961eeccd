//! Corrugated board presets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common carton wall materials and their nominal thickness.
///
/// The engine only ever consumes a plain thickness in millimeters; this table
/// exists so callers can offer familiar choices and fall back to a custom
/// value for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MaterialPreset {
    /// B flute, 3 mm.
    BFlute,
    /// C flute, 4 mm.
    CFlute,
    /// E flute, 1.5 mm.
    EFlute,
    /// Double wall, 7 mm.
    DoubleWall,
}

impl MaterialPreset {
    /// Every preset, in display order.
    pub const ALL: [MaterialPreset; 4] = [
        MaterialPreset::BFlute,
        MaterialPreset::CFlute,
        MaterialPreset::EFlute,
        MaterialPreset::DoubleWall,
    ];

    /// Nominal wall thickness in millimeters.
    pub fn thickness_mm(self) -> f64 {
        match self {
            MaterialPreset::BFlute => 3.0,
            MaterialPreset::CFlute => 4.0,
            MaterialPreset::EFlute => 1.5,
            MaterialPreset::DoubleWall => 7.0,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MaterialPreset::BFlute => "B Flute (3 mm)",
            MaterialPreset::CFlute => "C Flute (4 mm)",
            MaterialPreset::EFlute => "E Flute (1.5 mm)",
            MaterialPreset::DoubleWall => "Double Wall (7 mm)",
        }
    }
}
