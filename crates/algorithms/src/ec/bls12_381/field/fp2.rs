//! Quadratic extension `Fe2 = Fe[u] / (u^2 + 1)`, encoded as `c0 + c1*u`.

use core::ops::Mul;

use bls12_tower_api::WideReduce;

use super::ext::Ext;
use super::fp::Fe;
use super::wide::Wfe2;

/// Element `c0 + c1*u` of the quadratic extension
pub type Fe2 = Ext<Fe, 2>;

impl Ext<Fe, 2> {
    /// `1 + u`, the cubic non-residue that `Fe6` is built over (`v^3 = 1 + u`)
    pub const NON_RESIDUE: Fe2 = Ext([Fe::ONE, Fe::ONE]);

    /// Build from the two base field coordinates
    pub const fn from_coeffs(c0: Fe, c1: Fe) -> Fe2 {
        Ext([c0, c1])
    }

    /// Parity sign: the residue parity of `c0`, or of `c1` when `c0` is zero.
    ///
    /// True means even. See [`Fe::sign`].
    pub fn sign(&self) -> bool {
        if !self.0[0].is_zero() {
            return self.0[0].sign();
        }
        self.0[1].sign()
    }

    /// Big-endian sign: `c1.sign_be()` unless `c1` is zero, then `c0.sign_be()`.
    pub fn sign_be(&self) -> bool {
        if !self.0[1].is_zero() {
            return self.0[1].sign_be();
        }
        self.0[0].sign_be()
    }

    /// Product through a single lazy reduction per coordinate
    pub fn mul(&self, rhs: &Fe2) -> Fe2 {
        Fe2::from_wide(&Wfe2::mul_wide(self, rhs))
    }

    /// Square this element
    pub fn square(&self) -> Fe2 {
        self.mul(self)
    }
}

impl<'a, 'b> Mul<&'b Fe2> for &'a Fe2 {
    type Output = Fe2;
    #[inline]
    fn mul(self, rhs: &'b Fe2) -> Fe2 { Ext::<Fe, 2>::mul(self, rhs) }
}

impl Mul<Fe2> for Fe2 {
    type Output = Fe2;
    #[inline]
    fn mul(self, rhs: Fe2) -> Fe2 { &self * &rhs }
}
