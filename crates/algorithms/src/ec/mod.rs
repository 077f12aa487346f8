//! Elliptic curve field layers
//!
//! Curve and pairing arithmetic live above this crate; what is kept here is
//! the representation of the fields they are defined over.

pub mod bls12_381;
