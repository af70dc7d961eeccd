//! JSON request / response layer.

use crate::factors::FactorEnumerator;
use crate::layout::{pallet_placements, stack_placements};
use crate::pipeline::{PackagingInput, PackagingPipeline};
use palletize_core::{
    Error, LevelKind, MaterialPreset, PackagingResult, PalletConfig, Placement, Result,
    StackingFactor, UnitSystem,
};
use serde::{Deserialize, Serialize};

/// API version from Cargo.toml.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wall material: a preset, a custom thickness, or both (thickness wins).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequest {
    /// Named preset.
    #[serde(default)]
    pub preset: Option<MaterialPreset>,

    /// Custom thickness in millimeters.
    #[serde(default)]
    pub thickness_mm: Option<f64>,
}

impl MaterialRequest {
    /// Resolved wall thickness; no material at all is zero.
    pub fn thickness_mm(&self) -> f64 {
        self.thickness_mm
            .or_else(|| self.preset.map(MaterialPreset::thickness_mm))
            .unwrap_or(0.0)
    }
}

/// A packaging computation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Unit system of `dimensions` and `weight`.
    #[serde(default)]
    pub unit_system: UnitSystem,

    /// Product unit [length, width, height].
    pub dimensions: [f64; 3],

    /// Product unit weight.
    pub weight: f64,

    /// Units per inner case.
    pub units_per_inner: f64,

    /// Inner cases per outer case.
    pub inners_per_outer: f64,

    /// Stacking of units in the inner case. First enumerated option if absent.
    #[serde(default)]
    pub inner_factor: Option<StackingFactor>,

    /// Stacking of inner cases in the outer case. First enumerated option if absent.
    #[serde(default)]
    pub outer_factor: Option<StackingFactor>,

    /// Inner case material.
    #[serde(default)]
    pub inner_material: MaterialRequest,

    /// Outer case material.
    #[serde(default)]
    pub outer_material: MaterialRequest,

    /// Pallet overrides.
    #[serde(default)]
    pub pallet: Option<PalletConfig>,

    /// Include box positions in the response.
    #[serde(default)]
    pub include_layout: bool,
}

impl PackagingRequest {
    /// Converts the request into a pipeline input.
    pub fn to_input(&self) -> Result<PackagingInput> {
        let units_per_inner = nesting_count("units_per_inner", self.units_per_inner)?;
        let inners_per_outer = nesting_count("inners_per_outer", self.inners_per_outer)?;

        let inner_factor = match self.inner_factor {
            Some(factor) => factor,
            None => first_factor(units_per_inner)?,
        };
        let outer_factor = match self.outer_factor {
            Some(factor) => factor,
            None => first_factor(inners_per_outer)?,
        };

        Ok(PackagingInput::new(self.dimensions, self.weight)
            .with_unit_system(self.unit_system)
            .with_inner(units_per_inner, inner_factor)
            .with_outer(inners_per_outer, outer_factor)
            .with_inner_thickness(self.inner_material.thickness_mm())
            .with_outer_thickness(self.outer_material.thickness_mm()))
    }
}

/// Box positions for every level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutResponse {
    /// Units inside one inner case.
    pub inner: Vec<Placement>,
    /// Inner cases inside one outer case.
    pub outer: Vec<Placement>,
    /// Outer cases on the pallet.
    pub pallet: Vec<Placement>,
}

/// Response for packaging requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingResponse {
    /// API version.
    pub version: String,

    /// Whether the computation succeeded.
    pub success: bool,

    /// Error message if failed.
    pub error: Option<String>,

    /// Computation result.
    pub result: Option<PackagingResult>,

    /// Box positions, when requested.
    #[serde(default)]
    pub layout: Option<LayoutResponse>,
}

impl PackagingResponse {
    fn failure(err: &Error) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(err.to_string()),
            result: None,
            layout: None,
        }
    }
}

/// Runs a request.
pub fn solve(request: &PackagingRequest) -> Result<PackagingResponse> {
    let pipeline = PackagingPipeline::new(request.pallet.unwrap_or_default())?;
    let result = pipeline.compute(&request.to_input()?)?;

    let layout = if request.include_layout {
        Some(LayoutResponse {
            inner: stack_placements(
                LevelKind::Unit,
                &result.inner.factor,
                &result.unit.dimensions,
            )?,
            outer: stack_placements(
                LevelKind::Inner,
                &result.outer.factor,
                &result.inner.dimensions,
            )?,
            pallet: pallet_placements(pipeline.fitter(), &result.outer.dimensions)?,
        })
    } else {
        None
    };

    Ok(PackagingResponse {
        version: API_VERSION.to_string(),
        success: true,
        error: None,
        result: Some(result),
        layout,
    })
}

/// Parses a JSON request, runs it and returns the JSON response.
///
/// Failures are reported inside the response with `success: false`.
pub fn solve_json(json: &str) -> Result<String> {
    let response = match serde_json::from_str::<PackagingRequest>(json) {
        Ok(request) => solve(&request).unwrap_or_else(|e| PackagingResponse::failure(&e)),
        Err(e) => PackagingResponse::failure(&Error::Serialization(format!("Invalid JSON: {}", e))),
    };

    Ok(serde_json::to_string(&response)?)
}

fn nesting_count(name: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidConfiguration(format!(
            "{} must be a positive whole number, got {}",
            name, value
        )));
    }
    Ok(value as u32)
}

fn first_factor(count: u32) -> Result<StackingFactor> {
    FactorEnumerator::default()
        .enumerate(i64::from(count))?
        .first()
        .copied()
        .ok_or_else(|| Error::InvalidCount(format!("no stacking for {}", count)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MAX_PLACEMENTS;

    const REFERENCE: &str = r#"{
        "dimensions": [100, 80, 50],
        "weight": 0.5,
        "units_per_inner": 4,
        "inners_per_outer": 2,
        "inner_factor": [2, 2, 1],
        "outer_factor": [2, 1, 1],
        "inner_material": { "preset": "b_flute" },
        "outer_material": { "thickness_mm": 4 }
    }"#;

    #[test]
    fn test_solve_json_reference() {
        let response: PackagingResponse =
            serde_json::from_str(&solve_json(REFERENCE).unwrap()).unwrap();

        assert!(response.success);
        assert!(response.layout.is_none());
        let result = response.result.unwrap();
        assert_eq!(result.outer.dimensions.to_array(), [420.0, 174.0, 64.0]);
        assert_eq!(result.pallet.total_units, 2000);
    }

    #[test]
    fn test_default_factor_is_first_option() {
        let request: PackagingRequest = serde_json::from_str(
            r#"{"dimensions": [10, 10, 10], "weight": 1, "units_per_inner": 6, "inners_per_outer": 1}"#,
        )
        .unwrap();
        let input = request.to_input().unwrap();
        assert_eq!(input.inner_factor, StackingFactor::new(1, 1, 6));
        assert_eq!(input.outer_factor, StackingFactor::SINGLE);
        assert_eq!(input.inner_thickness_mm, 0.0);
    }

    #[test]
    fn test_invalid_count() {
        let json = r#"{"dimensions": [10, 10, 10], "weight": 1, "units_per_inner": 2.5, "inners_per_outer": 1}"#;
        let response: PackagingResponse = serde_json::from_str(&solve_json(json).unwrap()).unwrap();
        assert!(!response.success);
        assert!(response.error.unwrap().contains("units_per_inner"));
    }

    #[test]
    fn test_invalid_json() {
        let response: PackagingResponse =
            serde_json::from_str(&solve_json("{ not json").unwrap()).unwrap();
        assert!(!response.success);
        assert!(response.error.unwrap().contains("Invalid JSON"));
    }

    #[test]
    fn test_layout_included() {
        let json = REFERENCE.replacen('{', r#"{ "include_layout": true,"#, 1);
        let response: PackagingResponse = serde_json::from_str(&solve_json(&json).unwrap()).unwrap();
        let layout = response.layout.unwrap();
        assert_eq!(layout.inner.len(), 4);
        assert_eq!(layout.outer.len(), 2);
        assert_eq!(layout.pallet.len(), 250);
    }

    #[test]
    fn test_layout_too_large_is_rejected() {
        let json = r#"{
            "dimensions": [5, 5, 5],
            "weight": 0.01,
            "units_per_inner": 1,
            "inners_per_outer": 1,
            "include_layout": true
        }"#;
        let response: PackagingResponse = serde_json::from_str(&solve_json(json).unwrap()).unwrap();
        assert!(!response.success);
        assert!(response.error.unwrap().contains("placements"));

        let without_layout = json.replace(r#""include_layout": true"#, r#""include_layout": false"#);
        let response: PackagingResponse =
            serde_json::from_str(&solve_json(&without_layout).unwrap()).unwrap();
        assert!(response.success);
        assert!(response.result.unwrap().pallet.total_cartons > MAX_PLACEMENTS);
    }

    #[test]
    fn test_overflow_reported_as_failure() {
        let json = r#"{
            "dimensions": [1e308, 10, 10],
            "weight": 1,
            "units_per_inner": 2,
            "inners_per_outer": 1,
            "inner_factor": [2, 1, 1]
        }"#;
        let output = solve_json(json).unwrap();
        let response: PackagingResponse = serde_json::from_str(&output).unwrap();
        assert!(!response.success);
        assert!(response.result.is_none());
    }

    #[test]
    fn test_pallet_override() {
        let json = REFERENCE.replacen('{', r#"{ "pallet": {"pallet_width_mm": 800},"#, 1);
        let response: PackagingResponse = serde_json::from_str(&solve_json(&json).unwrap()).unwrap();
        assert_eq!(response.result.unwrap().pallet.cartons_per_layer, 8);
    }

    #[test]
    fn test_material_request() {
        assert_eq!(MaterialRequest::default().thickness_mm(), 0.0);
        let both = MaterialRequest {
            preset: Some(MaterialPreset::CFlute),
            thickness_mm: Some(2.5),
        };
        assert_eq!(both.thickness_mm(), 2.5);
    }
}
