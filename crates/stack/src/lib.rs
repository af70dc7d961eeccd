//! # Palletize Stack
//!
//! Stacking, carton composition and pallet fitting for the palletize
//! packaging calculator.
//!
//! The computation is a pure function of its input: enumerate the ways a
//! count of items can be stacked along three axes, compose unit → inner case
//! → outer case dimensions and weights, then tile the outer case onto the
//! pallet footprint in layers.

pub mod composer;
pub mod factors;
pub mod layout;
pub mod pallet;
pub mod pipeline;

#[cfg(feature = "serde")]
pub mod request;

// Re-exports
pub use composer::DimensionComposer;
pub use factors::{enumerate_factors, factor_count, EnumerationStrategy, FactorEnumerator};
pub use layout::{pallet_placements, stack_placements, MAX_PLACEMENTS};
pub use pallet::PalletFitter;
pub use pipeline::{compute_packaging, PackagingInput, PackagingPipeline};
pub use palletize_core::{
    Dimensions3D, Error, PackagingResult, PalletConfig, PalletResult, Result, StackingFactor,
};
