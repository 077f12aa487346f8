//! Generic composition of tower levels.
//!
//! Every extension level is `N` coordinates of the level below, so the
//! structural operations are written once here and shared by `Fe2`, `Fe6`,
//! `Fe12` and the wide accumulator shapes. Only the multiplicative structure
//! (the non-residue of each level) differs, and that lives outside this file.

use core::fmt;
use core::ops::{Add, Index, IndexMut, Neg, Sub};

use bls12_tower_api::{Result as CoreResult, TowerField, WideReduce};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};

/// An element `c[0] + c[1]*x + ... + c[N-1]*x^(N-1)` over the sub-level `F`.
///
/// `N` must be at least 1. Coordinates are stored lowest power first, which is
/// also the encoding order.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ext<F, const N: usize>(pub [F; N]);

impl<F: Copy, const N: usize> Ext<F, N> {
    /// Build from coordinates, lowest power first
    pub const fn new(coeffs: [F; N]) -> Self {
        Ext(coeffs)
    }

    /// The coordinates, lowest power first
    pub const fn coeffs(&self) -> &[F; N] {
        &self.0
    }

    /// Deep copy of every coordinate of `other` into `self`
    #[inline]
    pub fn set(&mut self, other: &Self) -> &mut Self {
        self.0 = other.0;
        self
    }
}

impl<F: TowerField, const N: usize> Ext<F, N> {
    /// Overwrite `self` with a uniform sample; untouched on error
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> CoreResult<&mut Self> {
        let sampled = <Self as TowerField>::random(rng)?;
        Ok(self.set(&sampled))
    }
}

impl<F: TowerField, const N: usize> TowerField for Ext<F, N> {
    fn zero() -> Self {
        Ext([F::zero(); N])
    }

    fn one() -> Self {
        let mut coeffs = [F::zero(); N];
        coeffs[0] = F::one();
        Ext(coeffs)
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(F::is_zero)
    }

    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1..].iter().all(F::is_zero)
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> CoreResult<Self> {
        // Coordinates are drawn in order; the first failure aborts the whole sample
        let mut coeffs = [F::zero(); N];
        for coeff in coeffs.iter_mut() {
            *coeff = F::random(&mut *rng)?;
        }
        Ok(Ext(coeffs))
    }

    fn from_mont(value: &Self) -> Self {
        Ext(value.0.map(|c| F::from_mont(&c)))
    }
}

impl<F, W, const N: usize> WideReduce<Ext<W, N>> for Ext<F, N>
where
    F: WideReduce<W>,
{
    fn from_wide(wide: &Ext<W, N>) -> Self {
        Ext(core::array::from_fn(|i| F::from_wide(&wide.0[i])))
    }
}

impl<F: Default, const N: usize> Default for Ext<F, N> {
    fn default() -> Self {
        Ext(core::array::from_fn(|_| F::default()))
    }
}

impl<F: zeroize::DefaultIsZeroes, const N: usize> zeroize::DefaultIsZeroes for Ext<F, N> {}

impl<F, const N: usize> Index<usize> for Ext<F, N> {
    type Output = F;
    #[inline]
    fn index(&self, i: usize) -> &F { &self.0[i] }
}

impl<F, const N: usize> IndexMut<usize> for Ext<F, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut F { &mut self.0[i] }
}

impl<F: ConstantTimeEq, const N: usize> ConstantTimeEq for Ext<F, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl<F: fmt::Debug, const N: usize> fmt::Debug for Ext<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// Addition in an extension is coordinate-wise at every level
impl<F: Copy + Add<Output = F>, const N: usize> Add for Ext<F, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Ext(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<F: Copy + Sub<Output = F>, const N: usize> Sub for Ext<F, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Ext(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<F: Copy + Neg<Output = F>, const N: usize> Neg for Ext<F, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Ext(self.0.map(|c| -c))
    }
}
