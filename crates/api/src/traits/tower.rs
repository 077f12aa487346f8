//! Level-agnostic contract of the extension field tower.
//!
//! The base field and each extension above it expose the same shape of
//! operations, so code written against [`TowerField`] works unchanged on
//! `Fe`, `Fe2`, `Fe6` and `Fe12` elements.

use crate::Result;
use rand::{CryptoRng, RngCore};

/// An element of one level of the field tower.
///
/// Elements are plain fixed-size values. Identity layouts are part of the
/// compatibility surface: `one()` is the sub-field's one in the first
/// coordinate and zero everywhere else.
pub trait TowerField: Copy + PartialEq + Sized {
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity, in Montgomery form
    fn one() -> Self;

    /// True iff every limb of every coordinate is zero
    fn is_zero(&self) -> bool;

    /// True iff the element equals `one()`
    fn is_one(&self) -> bool;

    /// Sample each coordinate independently and uniformly below the modulus.
    ///
    /// Errors from the byte source are returned as-is; no retry is attempted.
    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self>;

    /// Convert every coordinate out of the Montgomery domain
    fn from_mont(value: &Self) -> Self;
}

/// Collapse a double-width accumulator of shape `W` back into a tower element.
pub trait WideReduce<W>: Sized {
    /// Reduce each wide coordinate into the matching normal-width coordinate
    fn from_wide(wide: &W) -> Self;
}
