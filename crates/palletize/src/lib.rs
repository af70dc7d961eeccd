//! # Palletize
//!
//! Deterministic carton and pallet packing calculator.
//!
//! Given a product unit's dimensions and weight, how many units go into an
//! inner case, how many inner cases go into an outer case, and the wall
//! thickness of each, this crate computes the case dimensions and weights and
//! how many outer cases (and units) fit on a pallet.
//!
//! ## Quick Start
//!
//! ```
//! use palletize::{compute_packaging, enumerate_factors, PackagingInput, StackingFactor};
//!
//! // Offer the valid arrangements of 4 units, then pick one.
//! let options = enumerate_factors(4)?;
//! assert!(options.contains(&StackingFactor::new(2, 2, 1)));
//!
//! let input = PackagingInput::new([100.0, 80.0, 50.0], 0.5)
//!     .with_inner(4, (2, 2, 1))
//!     .with_outer(2, (2, 1, 1))
//!     .with_inner_thickness(3.0)
//!     .with_outer_thickness(4.0);
//!
//! let result = compute_packaging(&input)?;
//! assert_eq!(result.outer.dimensions.to_array(), [420.0, 174.0, 64.0]);
//! assert_eq!(result.pallet.total_units, 2000);
//! # Ok::<(), palletize::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support and the JSON request layer

/// Core value types.
pub use palletize_core as core;

/// Stacking, composition and pallet fitting.
pub use palletize_stack as stack;

// Re-export commonly used types at root level
pub use palletize_core::{
    Dimensions3D, Error, LevelKind, MaterialPreset, PackagingLevel, PackagingResult, PalletConfig,
    PalletResult, Placement, Result, StackingFactor, UnitSystem,
};
pub use palletize_stack::{
    compute_packaging, enumerate_factors, DimensionComposer, FactorEnumerator, PackagingInput,
    PackagingPipeline, PalletFitter,
};

#[cfg(feature = "serde")]
pub use palletize_stack::request::{solve_json, PackagingRequest, PackagingResponse};
