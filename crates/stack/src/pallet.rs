//! Pallet fitting.

use palletize_core::{Dimensions3D, PalletConfig, PalletResult, Result};

/// Tiles outer cartons onto a pallet footprint and stacks them in layers.
///
/// Cartons keep their orientation: the carton length runs along the pallet
/// length, and no layer mixes orientations.
#[derive(Debug, Clone, Copy)]
pub struct PalletFitter {
    config: PalletConfig,
}

impl PalletFitter {
    /// Creates a fitter for the given pallet.
    pub fn new(config: PalletConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the pallet configuration.
    pub fn config(&self) -> &PalletConfig {
        &self.config
    }

    /// Cartons along the pallet length, the pallet width, and layers.
    ///
    /// A carton with any zero dimension gets `[0, 0, 0]`.
    pub fn grid(&self, outer: &Dimensions3D) -> [u64; 3] {
        if outer.is_degenerate() {
            log::debug!("Degenerate carton {}, nothing fits", outer);
            return [0, 0, 0];
        }

        [
            floor_div(self.config.pallet_length_mm, outer.length()),
            floor_div(self.config.pallet_width_mm, outer.width()),
            floor_div(self.config.usable_height_mm(), outer.height()),
        ]
    }

    /// Fits `outer` cartons, each holding `units_per_carton` product units.
    pub fn fit(&self, outer: &Dimensions3D, units_per_carton: u64) -> PalletResult {
        let [along_length, along_width, layers] = self.grid(outer);
        let cartons_per_layer = along_length.saturating_mul(along_width);
        let total_cartons = cartons_per_layer.saturating_mul(layers);

        PalletResult {
            cartons_per_layer,
            layers,
            total_cartons,
            total_units: total_cartons.saturating_mul(units_per_carton),
        }
    }

    /// Share of the usable pallet volume occupied by the fitted cartons.
    pub fn utilization(&self, outer: &Dimensions3D, result: &PalletResult) -> f64 {
        let available = self.config.usable_volume();
        if available <= 0.0 {
            return 0.0;
        }
        (outer.volume() * result.total_cartons as f64 / available).min(1.0)
    }
}

impl Default for PalletFitter {
    fn default() -> Self {
        Self {
            config: PalletConfig::default(),
        }
    }
}

fn floor_div(space: f64, size: f64) -> u64 {
    // `as` saturates, so an absurdly small carton caps at u64::MAX
    (space / size).floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dims(l: f64, w: f64, h: f64) -> Dimensions3D {
        Dimensions3D::new(l, w, h).unwrap()
    }

    #[test]
    fn test_standard_pallet() {
        let fitter = PalletFitter::default();
        let result = fitter.fit(&dims(420.0, 174.0, 64.0), 8);

        assert_eq!(
            result,
            PalletResult {
                cartons_per_layer: 10,
                layers: 25,
                total_cartons: 250,
                total_units: 2000,
            }
        );
    }

    #[test]
    fn test_grid() {
        let fitter = PalletFitter::default();
        assert_eq!(fitter.grid(&dims(420.0, 174.0, 64.0)), [2, 5, 25]);
    }

    #[test]
    fn test_zero_dimension_yields_empty() {
        let fitter = PalletFitter::default();
        for outer in [
            dims(0.0, 174.0, 64.0),
            dims(420.0, 0.0, 64.0),
            dims(420.0, 174.0, 0.0),
            Dimensions3D::zero(),
        ] {
            assert_eq!(fitter.fit(&outer, 8), PalletResult::empty());
        }
    }

    #[test]
    fn test_oversized_carton_does_not_fit() {
        let fitter = PalletFitter::default();
        assert!(fitter.fit(&dims(1300.0, 500.0, 500.0), 1).is_empty());
        assert!(fitter.fit(&dims(500.0, 1100.0, 500.0), 1).is_empty());
        assert!(fitter.fit(&dims(500.0, 500.0, 1700.0), 1).is_empty());
    }

    #[test]
    fn test_exact_fit() {
        let config = PalletConfig::new()
            .with_length(1000.0)
            .with_width(1000.0)
            .with_height(1100.0)
            .with_base_height(100.0);
        let fitter = PalletFitter::new(config).unwrap();
        let result = fitter.fit(&dims(500.0, 250.0, 100.0), 1);

        assert_eq!(result.cartons_per_layer, 8);
        assert_eq!(result.layers, 10);
        assert_relative_eq!(fitter.utilization(&dims(500.0, 250.0, 100.0), &result), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_carton_saturates() {
        let fitter = PalletFitter::default();
        let result = fitter.fit(&dims(1e-300, 1e-300, 1e-300), 1000);
        assert_eq!(result.total_units, u64::MAX);
    }

    #[test]
    fn test_utilization() {
        let fitter = PalletFitter::default();
        let outer = dims(420.0, 174.0, 64.0);
        let result = fitter.fit(&outer, 8);
        let expected = 420.0 * 174.0 * 64.0 * 250.0 / (1219.0 * 1016.0 * 1652.0);
        assert_relative_eq!(fitter.utilization(&outer, &result), expected, epsilon = 1e-12);
        assert_eq!(fitter.utilization(&Dimensions3D::zero(), &PalletResult::empty()), 0.0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(PalletFitter::new(PalletConfig::new().with_length(0.0)).is_err());
    }
}
