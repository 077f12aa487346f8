//! Double-width accumulators for lazy reduction.
//!
//! A [`Wfe`] holds an unreduced 768-bit product of two base field elements.
//! Several products can be summed with [`Wfe::add_wide`] before a single
//! Montgomery reduction (`Fe::from_wide`) brings the result back to normal
//! width. [`Wfe2`] and [`Wfe6`] mirror the shape of `Fe2` and `Fe6` so
//! extension multiplications can accumulate per coordinate.
//!
//! These values carry no canonicality invariant.

use core::fmt;

use bls12_tower_internal::{adc, mac};

use super::ext::Ext;
use super::fp::Fe;

/// Number of 64-bit limbs in a wide accumulator
pub const WIDE_NUM_LIMBS: usize = 12;

/// A 768-bit unreduced accumulator, least significant limb first
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Wfe(pub(crate) [u64; WIDE_NUM_LIMBS]);

/// Accumulator shaped like `Fe2`
pub type Wfe2 = Ext<Wfe, 2>;

/// Accumulator shaped like `Fe6`
pub type Wfe6 = Ext<Wfe2, 3>;

impl Wfe {
    /// The zero accumulator
    pub const ZERO: Wfe = Wfe([0; WIDE_NUM_LIMBS]);

    /// Create from raw limbs
    pub const fn from_raw_unchecked(limbs: [u64; WIDE_NUM_LIMBS]) -> Wfe {
        Wfe(limbs)
    }

    /// The raw limbs, least significant first
    pub const fn limbs(&self) -> &[u64; WIDE_NUM_LIMBS] {
        &self.0
    }

    /// Copy all twelve limbs of `other` into `self`
    #[inline]
    pub fn set(&mut self, other: &Wfe) -> &mut Self {
        self.0 = other.0;
        self
    }

    /// 768-bit sum without reduction; the carry out of the top limb is dropped
    #[inline]
    pub const fn add_wide(&self, rhs: &Wfe) -> Wfe {
        let mut out = [0u64; WIDE_NUM_LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < WIDE_NUM_LIMBS {
            let (limb, c) = adc(self.0[i], rhs.0[i], carry);
            out[i] = limb;
            carry = c;
            i += 1;
        }
        Wfe(out)
    }

    /// Full schoolbook product of two 384-bit integers
    #[inline]
    pub const fn mul_wide(a: &Fe, b: &Fe) -> Wfe {
        let a = &a.0;
        let b = &b.0;

        let (t0, carry) = mac(0, a[0], b[0], 0);
        let (t1, carry) = mac(0, a[0], b[1], carry);
        let (t2, carry) = mac(0, a[0], b[2], carry);
        let (t3, carry) = mac(0, a[0], b[3], carry);
        let (t4, carry) = mac(0, a[0], b[4], carry);
        let (t5, t6) = mac(0, a[0], b[5], carry);

        let (t1, carry) = mac(t1, a[1], b[0], 0);
        let (t2, carry) = mac(t2, a[1], b[1], carry);
        let (t3, carry) = mac(t3, a[1], b[2], carry);
        let (t4, carry) = mac(t4, a[1], b[3], carry);
        let (t5, carry) = mac(t5, a[1], b[4], carry);
        let (t6, t7) = mac(t6, a[1], b[5], carry);

        let (t2, carry) = mac(t2, a[2], b[0], 0);
        let (t3, carry) = mac(t3, a[2], b[1], carry);
        let (t4, carry) = mac(t4, a[2], b[2], carry);
        let (t5, carry) = mac(t5, a[2], b[3], carry);
        let (t6, carry) = mac(t6, a[2], b[4], carry);
        let (t7, t8) = mac(t7, a[2], b[5], carry);

        let (t3, carry) = mac(t3, a[3], b[0], 0);
        let (t4, carry) = mac(t4, a[3], b[1], carry);
        let (t5, carry) = mac(t5, a[3], b[2], carry);
        let (t6, carry) = mac(t6, a[3], b[3], carry);
        let (t7, carry) = mac(t7, a[3], b[4], carry);
        let (t8, t9) = mac(t8, a[3], b[5], carry);

        let (t4, carry) = mac(t4, a[4], b[0], 0);
        let (t5, carry) = mac(t5, a[4], b[1], carry);
        let (t6, carry) = mac(t6, a[4], b[2], carry);
        let (t7, carry) = mac(t7, a[4], b[3], carry);
        let (t8, carry) = mac(t8, a[4], b[4], carry);
        let (t9, t10) = mac(t9, a[4], b[5], carry);

        let (t5, carry) = mac(t5, a[5], b[0], 0);
        let (t6, carry) = mac(t6, a[5], b[1], carry);
        let (t7, carry) = mac(t7, a[5], b[2], carry);
        let (t8, carry) = mac(t8, a[5], b[3], carry);
        let (t9, carry) = mac(t9, a[5], b[4], carry);
        let (t10, t11) = mac(t10, a[5], b[5], carry);

        Wfe([t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11])
    }

    /// Square of a 384-bit integer, cross terms computed once and doubled
    #[inline]
    pub const fn square_wide(a: &Fe) -> Wfe {
        let a = &a.0;

        let (t1, carry) = mac(0, a[0], a[1], 0);
        let (t2, carry) = mac(0, a[0], a[2], carry);
        let (t3, carry) = mac(0, a[0], a[3], carry);
        let (t4, carry) = mac(0, a[0], a[4], carry);
        let (t5, t6) = mac(0, a[0], a[5], carry);

        let (t3, carry) = mac(t3, a[1], a[2], 0);
        let (t4, carry) = mac(t4, a[1], a[3], carry);
        let (t5, carry) = mac(t5, a[1], a[4], carry);
        let (t6, t7) = mac(t6, a[1], a[5], carry);

        let (t5, carry) = mac(t5, a[2], a[3], 0);
        let (t6, carry) = mac(t6, a[2], a[4], carry);
        let (t7, t8) = mac(t7, a[2], a[5], carry);

        let (t7, carry) = mac(t7, a[3], a[4], 0);
        let (t8, t9) = mac(t8, a[3], a[5], carry);

        let (t9, t10) = mac(t9, a[4], a[5], 0);

        let t11 = t10 >> 63;
        let t10 = (t10 << 1) | (t9 >> 63);
        let t9 = (t9 << 1) | (t8 >> 63);
        let t8 = (t8 << 1) | (t7 >> 63);
        let t7 = (t7 << 1) | (t6 >> 63);
        let t6 = (t6 << 1) | (t5 >> 63);
        let t5 = (t5 << 1) | (t4 >> 63);
        let t4 = (t4 << 1) | (t3 >> 63);
        let t3 = (t3 << 1) | (t2 >> 63);
        let t2 = (t2 << 1) | (t1 >> 63);
        let t1 = t1 << 1;

        let (t0, carry) = mac(0, a[0], a[0], 0);
        let (t1, carry) = adc(t1, 0, carry);
        let (t2, carry) = mac(t2, a[1], a[1], carry);
        let (t3, carry) = adc(t3, 0, carry);
        let (t4, carry) = mac(t4, a[2], a[2], carry);
        let (t5, carry) = adc(t5, 0, carry);
        let (t6, carry) = mac(t6, a[3], a[3], carry);
        let (t7, carry) = adc(t7, 0, carry);
        let (t8, carry) = mac(t8, a[4], a[4], carry);
        let (t9, carry) = adc(t9, 0, carry);
        let (t10, carry) = mac(t10, a[5], a[5], carry);
        let (t11, _) = adc(t11, 0, carry);

        Wfe([t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11])
    }
}

impl Wfe2 {
    /// Unreduced product of two `Fe2` elements, using `u^2 = -1`.
    ///
    /// `c0 = a0*b0 + (-a1)*b1` and `c1 = a0*b1 + a1*b0`, each the sum of two
    /// products, so both coordinates stay inside the reduction bound.
    pub fn mul_wide(a: &Ext<Fe, 2>, b: &Ext<Fe, 2>) -> Wfe2 {
        let [a0, a1] = &a.0;
        let [b0, b1] = &b.0;
        let c0 = Wfe::mul_wide(a0, b0).add_wide(&Wfe::mul_wide(&a1.neg(), b1));
        let c1 = Wfe::mul_wide(a0, b1).add_wide(&Wfe::mul_wide(a1, b0));
        Ext([c0, c1])
    }
}

impl fmt::Debug for Wfe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Wfe(0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}

impl zeroize::DefaultIsZeroes for Wfe {}
