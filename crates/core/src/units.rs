//! Metric / imperial conversion for lengths and masses.
//!
//! Everything inside the engine is expressed in millimeters and kilograms.
//! Conversion happens once at the input boundary, and again only when a
//! caller wants to display results in inches and pounds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Pounds in one kilogram.
pub const LB_PER_KG: f64 = 2.20462;

/// Converts millimeters to inches.
#[inline]
pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Converts inches to millimeters.
#[inline]
pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Converts kilograms to pounds.
#[inline]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Converts pounds to kilograms.
#[inline]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Unit system in which raw inputs are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// Millimeters and kilograms (canonical).
    #[default]
    Metric,
    /// Inches and pounds.
    Imperial,
}

impl UnitSystem {
    /// Converts a length in this system to millimeters.
    pub fn length_to_mm(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => in_to_mm(value),
        }
    }

    /// Converts a length in millimeters to this system.
    pub fn length_from_mm(self, mm: f64) -> f64 {
        match self {
            UnitSystem::Metric => mm,
            UnitSystem::Imperial => mm_to_in(mm),
        }
    }

    /// Converts a mass in this system to kilograms.
    pub fn mass_to_kg(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => lb_to_kg(value),
        }
    }

    /// Converts a mass in kilograms to this system.
    pub fn mass_from_kg(self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg_to_lb(kg),
        }
    }

    /// Short length unit label ("mm" or "in").
    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "mm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Short mass unit label ("kg" or "lb").
    pub fn mass_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversion() {
        assert_relative_eq!(in_to_mm(1.0), 25.4, epsilon = 1e-12);
        assert_relative_eq!(mm_to_in(254.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(mm_to_in(in_to_mm(48.0)), 48.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mass_conversion() {
        assert_relative_eq!(kg_to_lb(1.0), 2.20462, epsilon = 1e-12);
        assert_relative_eq!(lb_to_kg(2.20462), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metric_is_identity() {
        let metric = UnitSystem::Metric;
        assert_eq!(metric.length_to_mm(123.5), 123.5);
        assert_eq!(metric.mass_to_kg(0.75), 0.75);
        assert_eq!(metric.length_from_mm(10.0), 10.0);
        assert_eq!(metric.mass_from_kg(2.0), 2.0);
    }

    #[test]
    fn test_imperial_system() {
        let imperial = UnitSystem::Imperial;
        assert_relative_eq!(imperial.length_to_mm(40.0), 1016.0, epsilon = 1e-9);
        assert_relative_eq!(imperial.length_from_mm(1219.2), 48.0, epsilon = 1e-9);
        assert_relative_eq!(imperial.mass_to_kg(2.20462), 1.0, epsilon = 1e-12);
        assert_eq!(imperial.length_label(), "in");
        assert_eq!(imperial.mass_label(), "lb");
    }
}
