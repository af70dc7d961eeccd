//! End-to-end packaging computation: unit → inner case → outer case → pallet.

use crate::composer::DimensionComposer;
use crate::pallet::PalletFitter;
use palletize_core::{
    Dimensions3D, Error, LevelKind, MaterialPreset, PackagingLevel, PackagingResult, PalletConfig,
    Result, StackingFactor, UnitSystem,
};

/// Everything needed to compute one packaging configuration.
///
/// Unit dimensions and weight are given in `unit_system`; material
/// thicknesses are always millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackagingInput {
    /// Product unit (length, width, height).
    pub unit_dims: [f64; 3],
    /// Product unit weight.
    pub unit_weight: f64,
    /// Unit system of `unit_dims` and `unit_weight`.
    pub unit_system: UnitSystem,
    /// Units in each inner case.
    pub units_per_inner: u32,
    /// Inner cases in each outer case.
    pub inners_per_outer: u32,
    /// Arrangement of units in the inner case.
    pub inner_factor: StackingFactor,
    /// Arrangement of inner cases in the outer case.
    pub outer_factor: StackingFactor,
    /// Inner case wall thickness in millimeters.
    pub inner_thickness_mm: f64,
    /// Outer case wall thickness in millimeters.
    pub outer_thickness_mm: f64,
}

impl PackagingInput {
    /// Starts an input for a single metric unit, one per case, no material.
    pub fn new(unit_dims: [f64; 3], unit_weight: f64) -> Self {
        Self {
            unit_dims,
            unit_weight,
            unit_system: UnitSystem::Metric,
            units_per_inner: 1,
            inners_per_outer: 1,
            inner_factor: StackingFactor::SINGLE,
            outer_factor: StackingFactor::SINGLE,
            inner_thickness_mm: 0.0,
            outer_thickness_mm: 0.0,
        }
    }

    /// Sets the unit system of the unit dimensions and weight.
    pub fn with_unit_system(mut self, system: UnitSystem) -> Self {
        self.unit_system = system;
        self
    }

    /// Sets the number of units per inner case and their arrangement.
    pub fn with_inner(mut self, units_per_inner: u32, factor: impl Into<StackingFactor>) -> Self {
        self.units_per_inner = units_per_inner;
        self.inner_factor = factor.into();
        self
    }

    /// Sets the number of inner cases per outer case and their arrangement.
    pub fn with_outer(mut self, inners_per_outer: u32, factor: impl Into<StackingFactor>) -> Self {
        self.inners_per_outer = inners_per_outer;
        self.outer_factor = factor.into();
        self
    }

    /// Sets the inner case wall thickness.
    pub fn with_inner_thickness(mut self, mm: f64) -> Self {
        self.inner_thickness_mm = mm;
        self
    }

    /// Sets the outer case wall thickness.
    pub fn with_outer_thickness(mut self, mm: f64) -> Self {
        self.outer_thickness_mm = mm;
        self
    }

    /// Uses a preset material for the inner case.
    pub fn with_inner_material(self, material: MaterialPreset) -> Self {
        self.with_inner_thickness(material.thickness_mm())
    }

    /// Uses a preset material for the outer case.
    pub fn with_outer_material(self, material: MaterialPreset) -> Self {
        self.with_outer_thickness(material.thickness_mm())
    }

    /// Checks every field, before any computation runs.
    pub fn validate(&self) -> Result<()> {
        check_nesting("units_per_inner", self.units_per_inner, &self.inner_factor)?;
        check_nesting("inners_per_outer", self.inners_per_outer, &self.outer_factor)?;

        for (axis, value) in ["length", "width", "height"].iter().zip(self.unit_dims) {
            check_non_negative(&format!("Unit {}", axis), value)?;
        }
        check_non_negative("Unit weight", self.unit_weight)?;
        check_non_negative("Inner thickness", self.inner_thickness_mm)?;
        check_non_negative("Outer thickness", self.outer_thickness_mm)?;

        Ok(())
    }
}

fn check_nesting(name: &str, count: u32, factor: &StackingFactor) -> Result<()> {
    if count < 1 {
        return Err(Error::InvalidConfiguration(format!(
            "{} must be at least 1",
            name
        )));
    }

    if !factor.is_factorization_of(u64::from(count)) {
        return Err(Error::InvalidConfiguration(format!(
            "Stacking {} does not arrange {} = {} items",
            factor, name, count
        )));
    }

    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Composes inner and outer cases and fits the outer case on a pallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagingPipeline {
    fitter: PalletFitter,
}

impl PackagingPipeline {
    /// Creates a pipeline for the given pallet.
    pub fn new(config: PalletConfig) -> Result<Self> {
        Ok(Self {
            fitter: PalletFitter::new(config)?,
        })
    }

    /// Returns the pallet configuration.
    pub fn config(&self) -> &PalletConfig {
        self.fitter.config()
    }

    /// Returns the pallet fitter.
    pub fn fitter(&self) -> &PalletFitter {
        &self.fitter
    }

    /// Runs the computation. Any validation failure aborts it as a whole.
    pub fn compute(&self, input: &PackagingInput) -> Result<PackagingResult> {
        input.validate()?;

        let system = input.unit_system;
        let [length, width, height] = input.unit_dims;
        let unit_dims = Dimensions3D::from_unit_system(length, width, height, system)?;
        let unit_weight = system.mass_to_kg(input.unit_weight);
        let unit = PackagingLevel::unit(unit_dims, unit_weight);

        let inner = Self::enclose(
            LevelKind::Inner,
            &unit,
            input.units_per_inner,
            input.inner_factor,
            input.inner_thickness_mm,
        )?;
        let outer = Self::enclose(
            LevelKind::Outer,
            &inner,
            input.inners_per_outer,
            input.outer_factor,
            input.outer_thickness_mm,
        )?;

        let units_per_outer = u64::from(input.units_per_inner) * u64::from(input.inners_per_outer);
        let pallet = self.fitter.fit(&outer.dimensions, units_per_outer);
        let pallet_utilization = self.fitter.utilization(&outer.dimensions, &pallet);

        log::debug!(
            "Inner {} ({} kg), outer {} ({} kg): {} cartons x {} layers, {} units",
            inner.dimensions,
            inner.weight_kg,
            outer.dimensions,
            outer.weight_kg,
            pallet.cartons_per_layer,
            pallet.layers,
            pallet.total_units
        );

        Ok(PackagingResult {
            unit,
            inner,
            outer,
            pallet,
            pallet_utilization,
        })
    }

    fn enclose(
        kind: LevelKind,
        below: &PackagingLevel,
        count: u32,
        factor: StackingFactor,
        thickness_mm: f64,
    ) -> Result<PackagingLevel> {
        let (content, dimensions) =
            DimensionComposer::enclose(&factor, &below.dimensions, thickness_mm)?;

        let weight_kg = below.weight_kg * f64::from(count);
        if !weight_kg.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "{:?} weight overflows: {} kg x {}",
                kind, below.weight_kg, count
            )));
        }

        Ok(PackagingLevel {
            kind,
            count,
            factor,
            content,
            dimensions,
            weight_kg,
        })
    }
}

/// Runs [`PackagingPipeline::compute`] against the standard pallet.
pub fn compute_packaging(input: &PackagingInput) -> Result<PackagingResult> {
    PackagingPipeline::default().compute(input)
}
