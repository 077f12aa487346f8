//! # bls12-tower
//!
//! Representation and serialization layer for the BLS12-381 extension field
//! tower.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bls12-tower = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support, including `std::error::Error`
//! - `alloc`: Heap-backed hex and big integer conversions without `std`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bls12-tower-api`]: Error type and the level-agnostic tower traits
//! - [`bls12-tower-internal`]: Limb arithmetic and big-endian limb packing
//! - [`bls12-tower-algorithms`]: `Fe`, the `Fe2`/`Fe6`/`Fe12` tower and the
//!   wide accumulators
//!
//! ## Example
//!
//! ```
//! use bls12_tower::prelude::*;
//!
//! let one = Fe::one();
//! assert!(one.is_valid());
//! assert_eq!(Fe::from_canonical_bytes(&one.to_canonical_bytes()).unwrap(), one);
//!
//! let x = Fe2::from_coeffs(one, Fe::zero());
//! assert!(x.is_one());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bls12_tower_algorithms as algorithms;
pub use bls12_tower_api as api;
pub use bls12_tower_internal as internal;

pub use bls12_tower_algorithms::{Ext, Fe, Fe12, Fe2, Fe6, Wfe, Wfe2, Wfe6};

/// Common imports for bls12-tower users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{TowerField, WideReduce};

    // Re-export the tower
    pub use crate::{Ext, Fe, Fe12, Fe2, Fe6, Wfe, Wfe2, Wfe6};
}
