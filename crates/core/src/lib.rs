//! # Palletize Core
//!
//! Core types for the palletize packaging calculator.
//!
//! This crate provides the value types shared by the stacking and pallet
//! fitting algorithms: box dimensions, stacking factors, unit conversion,
//! pallet configuration and result types.
//!
//! ## Core Components
//!
//! - **Geometry**: `Dimensions3D`, `StackingFactor`
//! - **Units**: `UnitSystem` and metric/imperial conversion helpers
//! - **Configuration**: `PalletConfig`, `MaterialPreset`
//! - **Results**: `PackagingLevel`, `PalletResult`, `PackagingResult`, `Placement`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod dimensions;
pub mod error;
pub mod factor;
pub mod material;
pub mod placement;
pub mod result;
pub mod units;

// Re-exports
pub use config::PalletConfig;
pub use dimensions::{Dimensions3D, MAX_SIDE_MM};
pub use error::{Error, Result};
pub use factor::StackingFactor;
pub use material::MaterialPreset;
pub use placement::{Placement, PlacementStats};
pub use result::{LevelKind, PackagingLevel, PackagingResult, PalletResult};
pub use units::UnitSystem;
