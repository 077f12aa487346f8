//! Public API traits and types for the bls12-tower library
//!
//! This crate provides the public API surface shared by every level of the
//! field tower: the error type and the traits that let algorithms above the
//! representation layer stay oblivious to which tower level they operate on.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{TowerField, WideReduce};
