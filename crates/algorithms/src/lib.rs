//! Field representation layer for BLS12-381
//!
//! This crate provides the base prime field element of BLS12-381, the
//! quadratic, cubic and quadratic extensions stacked on top of it, and the
//! double-width accumulator tower used for deferred Montgomery reduction.
//!
//! # Non-canonical values
//!
//! The unchecked constructors (`Fe::from_bytes`, `Fe::from_big`,
//! `Fe::set_string` and friends) never reduce modulo `p` and never validate.
//! A value `>= p` is stored as given. Callers that need a canonical element
//! must gate on `Fe::is_valid`, or use `Fe::from_canonical_bytes`.
//!
//! Comparisons, parity and sign tests are not constant-time.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Elliptic curve field layers
pub mod ec;
pub use ec::bls12_381::{Ext, Fe, Fe12, Fe2, Fe6, Wfe, Wfe2, Wfe6};
