//! Pallet configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default pallet length (48 in).
pub const PALLET_LENGTH_MM: f64 = 1219.0;
/// Default pallet width (40 in).
pub const PALLET_WIDTH_MM: f64 = 1016.0;
/// Default maximum load height, deck included.
pub const PALLET_HEIGHT_MM: f64 = 1800.0;
/// Default height of the pallet deck itself.
pub const PALLET_BASE_HEIGHT_MM: f64 = 148.0;

/// Pallet footprint and height limits used for fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PalletConfig {
    /// Footprint length in millimeters.
    pub pallet_length_mm: f64,

    /// Footprint width in millimeters.
    pub pallet_width_mm: f64,

    /// Overall height limit, including the pallet deck.
    pub pallet_height_mm: f64,

    /// Height of the pallet deck.
    pub pallet_base_height_mm: f64,
}

impl Default for PalletConfig {
    fn default() -> Self {
        Self {
            pallet_length_mm: PALLET_LENGTH_MM,
            pallet_width_mm: PALLET_WIDTH_MM,
            pallet_height_mm: PALLET_HEIGHT_MM,
            pallet_base_height_mm: PALLET_BASE_HEIGHT_MM,
        }
    }
}

impl PalletConfig {
    /// Creates a configuration with the standard 48 x 40 in pallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the footprint length.
    pub fn with_length(mut self, mm: f64) -> Self {
        self.pallet_length_mm = mm;
        self
    }

    /// Sets the footprint width.
    pub fn with_width(mut self, mm: f64) -> Self {
        self.pallet_width_mm = mm;
        self
    }

    /// Sets the overall height limit.
    pub fn with_height(mut self, mm: f64) -> Self {
        self.pallet_height_mm = mm;
        self
    }

    /// Sets the deck height.
    pub fn with_base_height(mut self, mm: f64) -> Self {
        self.pallet_base_height_mm = mm;
        self
    }

    /// Height available for stacking cartons above the deck.
    pub fn usable_height_mm(&self) -> f64 {
        (self.pallet_height_mm - self.pallet_base_height_mm).max(0.0)
    }

    /// Footprint area in square millimeters.
    pub fn footprint_area(&self) -> f64 {
        self.pallet_length_mm * self.pallet_width_mm
    }

    /// Volume available for cartons in cubic millimeters.
    pub fn usable_volume(&self) -> f64 {
        self.footprint_area() * self.usable_height_mm()
    }

    /// Checks that every setting is finite and physically meaningful.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pallet_length_mm", self.pallet_length_mm),
            ("pallet_width_mm", self.pallet_width_mm),
            ("pallet_height_mm", self.pallet_height_mm),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let base = self.pallet_base_height_mm;
        if !base.is_finite() || base < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "pallet_base_height_mm must be non-negative, got {}",
                base
            )));
        }

        if base >= self.pallet_height_mm {
            return Err(Error::InvalidConfiguration(format!(
                "pallet_base_height_mm ({}) must be below pallet_height_mm ({})",
                base, self.pallet_height_mm
            )));
        }

        Ok(())
    }

    /// Parses a JSON document, filling unspecified options with defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
