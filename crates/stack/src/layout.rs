//! Box positions for stacks and pallet loads.
//!
//! Renderers draw from these; nothing here depends on how boxes are shown.

use crate::pallet::PalletFitter;
use palletize_core::{Dimensions3D, Error, LevelKind, Placement, Result, StackingFactor};

/// Largest number of boxes a single layout may contain.
pub const MAX_PLACEMENTS: u64 = 100_000;

/// Origins of the `factor` boxes of size `base` in a stack, x-major.
///
/// Box `(i, j, k)` sits at `(i·L, j·W, k·H)`. Fails when the stack holds
/// more than [`MAX_PLACEMENTS`] boxes.
pub fn stack_placements(
    level: LevelKind,
    factor: &StackingFactor,
    base: &Dimensions3D,
) -> Result<Vec<Placement>> {
    grid_placements(level, factor.to_array().map(u64::from), base, 0.0)
}

/// Origins of every carton on the pallet. The first layer rests on the deck,
/// at `z = pallet_base_height_mm`. Fails when more than [`MAX_PLACEMENTS`]
/// cartons fit.
pub fn pallet_placements(fitter: &PalletFitter, outer: &Dimensions3D) -> Result<Vec<Placement>> {
    let grid = fitter.grid(outer);
    grid_placements(
        LevelKind::Outer,
        grid,
        outer,
        fitter.config().pallet_base_height_mm,
    )
}

fn grid_placements(
    level: LevelKind,
    [nx, ny, nz]: [u64; 3],
    base: &Dimensions3D,
    z_offset: f64,
) -> Result<Vec<Placement>> {
    let total = nx.saturating_mul(ny).saturating_mul(nz);
    if total > MAX_PLACEMENTS {
        return Err(Error::InvalidConfiguration(format!(
            "Layout of {} x {} x {} boxes exceeds {} placements",
            nx, ny, nz, MAX_PLACEMENTS
        )));
    }
    let mut placements = Vec::with_capacity(total as usize);

    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let position = [
                    i as f64 * base.length(),
                    j as f64 * base.width(),
                    z_offset + k as f64 * base.height(),
                ];
                let cell = [i, j, k].map(|c| u32::try_from(c).unwrap_or(u32::MAX));
                placements.push(Placement::new(level, placements.len(), cell, position));
            }
        }
    }

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletize_core::PlacementStats;

    #[test]
    fn test_stack_placements() {
        let base = Dimensions3D::new(100.0, 80.0, 50.0).unwrap();
        let placements =
            stack_placements(LevelKind::Unit, &StackingFactor::new(2, 2, 1), &base).unwrap();

        let positions: Vec<[f64; 3]> = placements.iter().map(|p| p.position).collect();
        assert_eq!(
            positions,
            vec![
                [0.0, 0.0, 0.0],
                [0.0, 80.0, 0.0],
                [100.0, 0.0, 0.0],
                [100.0, 80.0, 0.0],
            ]
        );
        assert!(placements.iter().all(|p| p.level == LevelKind::Unit));
        assert_eq!(placements[3].instance, 3);
        assert_eq!(placements[3].cell, [1, 1, 0]);
    }

    #[test]
    fn test_stack_fills_composed_box() {
        let base = Dimensions3D::new(10.0, 20.0, 30.0).unwrap();
        let factor = StackingFactor::new(3, 2, 4);
        let outer = base.stacked(&factor).unwrap();

        for p in stack_placements(LevelKind::Inner, &factor, &base).unwrap() {
            assert!(p.x() + base.length() <= outer.length());
            assert!(p.y() + base.width() <= outer.width());
            assert!(p.z() + base.height() <= outer.height());
        }
    }

    #[test]
    fn test_pallet_placements() {
        let fitter = PalletFitter::default();
        let outer = Dimensions3D::new(420.0, 174.0, 64.0).unwrap();
        let placements = pallet_placements(&fitter, &outer).unwrap();

        assert_eq!(placements.len(), 250);
        assert_eq!(placements[0].position, [0.0, 0.0, 148.0]);

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.per_layer.len(), 25);
        assert!(stats.per_layer.iter().all(|&n| n == 10));

        let top = placements
            .iter()
            .map(|p| p.z() + outer.height())
            .fold(0.0_f64, f64::max);
        assert!(top <= 1800.0);
    }

    #[test]
    fn test_pallet_placements_degenerate() {
        let fitter = PalletFitter::default();
        assert!(pallet_placements(&fitter, &Dimensions3D::zero())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_pallet_placements_too_many_cartons() {
        let fitter = PalletFitter::default();
        let tiny = Dimensions3D::new(0.5, 0.5, 0.5).unwrap();
        assert_eq!(fitter.grid(&tiny), [2438, 2032, 3304]);
        assert!(matches!(
            pallet_placements(&fitter, &tiny),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_stack_placements_too_many_boxes() {
        let base = Dimensions3D::new(1.0, 1.0, 1.0).unwrap();
        let factor = StackingFactor::new(1000, 1000, 1);
        assert!(matches!(
            stack_placements(LevelKind::Unit, &factor, &base),
            Err(Error::InvalidConfiguration(_))
        ));
        let factor = StackingFactor::new(100, 100, 10);
        assert_eq!(
            stack_placements(LevelKind::Unit, &factor, &base).unwrap().len() as u64,
            MAX_PLACEMENTS
        );
    }
}
