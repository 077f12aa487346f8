//! Internal utilities for the bls12-tower library
//!
//! Limb arithmetic primitives and fixed-width byte packing shared by the
//! field implementations. Nothing here knows about a particular modulus.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod endian;
pub mod limbs;

pub use limbs::{adc, mac, sbb};
