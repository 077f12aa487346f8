//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab
//!
//! [`Fe`] is the unit of storage and of canonicality for the whole tower.
//! It is a plain 384-bit integer in six little-endian limbs; field semantics
//! (Montgomery form, reduction) only apply where an operation says so.
//!
//! **The unchecked constructors never reduce.** `from_bytes`, `from_big` and
//! `set_string` store whatever integer they are given, including values
//! `>= p`. Gate on [`Fe::is_valid`] or use [`Fe::from_canonical_bytes`] when
//! the input is untrusted.

// Standard library imports
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use alloc::string::String;

// External crate imports
use bls12_tower_api::{Result as CoreResult, TowerField, WideReduce};
use bls12_tower_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};
use bls12_tower_internal::{adc, mac, sbb};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::wide::Wfe;
use crate::error::{to_core_result, Error, Result};

// ============================================================================
// Field Constants
// ============================================================================

/// Number of 64-bit limbs in a base field element
pub const FP_NUM_LIMBS: usize = 6;

/// Fixed big-endian byte width of a base field element
pub const FP_BYTE_SIZE: usize = 48;

/// Field modulus p
const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// Montgomery R = 2^384 mod p
const R: Fe = Fe([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fe = Fe([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// p is 381 bits wide, so only the low 5 bits of the leading byte can be set
const TOP_BYTE_MASK: u8 = 0x1f;

// ============================================================================
// Field Element Type
// ============================================================================

/// A 384-bit integer in six limbs, least significant limb first.
///
/// As a field element the stored integer is `aR mod p` with `R = 2^384`.
/// Equality (`==`) is exact limb equality and is not constant-time; use
/// [`ConstantTimeEq`] where timing matters.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fe(pub(crate) [u64; 6]);

impl Fe {
    /// The integer 0
    pub const ZERO: Fe = Fe([0, 0, 0, 0, 0, 0]);

    /// Montgomery encoding of 1, i.e. `R mod p`
    pub const ONE: Fe = R;

    /// The field modulus p itself (an invalid element)
    pub const MODULUS: Fe = Fe(MODULUS);

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fe {
        Fe::ZERO
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fe {
        R
    }

    /// Create from limbs without checking canonicity
    pub const fn from_raw_unchecked(limbs: [u64; 6]) -> Fe {
        Fe(limbs)
    }

    /// The raw limbs, least significant first
    pub const fn limbs(&self) -> &[u64; 6] {
        &self.0
    }

    /// Copy every limb of `other` into `self`
    #[inline]
    pub fn set(&mut self, other: &Fe) -> &mut Self {
        self.0 = other.0;
        self
    }
}

// ============================================================================
// Encoding
// ============================================================================

impl Fe {
    /// Decode a big-endian integer without reduction.
    ///
    /// Inputs shorter than 48 bytes are left-padded with zeros. For longer
    /// inputs only the leading 48 bytes are read and the rest is discarded.
    pub fn from_bytes(bytes: &[u8]) -> Fe {
        let len = bytes.len().min(FP_BYTE_SIZE);
        let mut padded = [0u8; FP_BYTE_SIZE];
        padded[FP_BYTE_SIZE - len..].copy_from_slice(&bytes[..len]);
        Fe(limbs_from_be_bytes(&padded))
    }

    /// In-place form of [`Fe::from_bytes`]
    pub fn set_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.0 = Fe::from_bytes(bytes).0;
        self
    }

    /// Encode as exactly 48 big-endian bytes, no conversion out of Montgomery form
    pub fn to_bytes(&self) -> [u8; FP_BYTE_SIZE] {
        let mut out = [0u8; FP_BYTE_SIZE];
        limbs_to_be_bytes(&self.0, &mut out);
        out
    }

    /// Encode a non-negative big integer through its big-endian bytes
    pub fn from_big(n: &BigUint) -> Fe {
        Fe::from_bytes(&n.to_bytes_be())
    }

    /// In-place form of [`Fe::from_big`]
    pub fn set_big(&mut self, n: &BigUint) -> &mut Self {
        self.0 = Fe::from_big(n).0;
        self
    }

    /// The stored integer as a big integer
    pub fn to_big(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes())
    }

    /// Parse hex (optional `0x` prefix) into `self`.
    ///
    /// On malformed hex `self` is left untouched.
    pub fn set_string(&mut self, s: &str) -> Result<&mut Self> {
        let decoded: Fe = s.parse()?;
        Ok(self.set(&decoded))
    }

    /// `0x` followed by 96 lowercase hex digits, most significant limb first
    pub fn to_hex_string(&self) -> String {
        alloc::format!("{}", self)
    }

    /// Decode exactly 48 bytes, reject values `>= p` and convert into
    /// Montgomery form.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Fe> {
        if bytes.len() != FP_BYTE_SIZE {
            return Err(Error::Length {
                context: "Fe::from_canonical_bytes",
                expected: FP_BYTE_SIZE,
                actual: bytes.len(),
            });
        }
        let raw = Fe::from_bytes(bytes);
        if !raw.is_valid() {
            return Err(Error::NonCanonical {
                context: "Fe::from_canonical_bytes",
            });
        }
        Ok(Fe::to_mont(&raw))
    }

    /// Convert out of Montgomery form and encode as 48 big-endian bytes
    pub fn to_canonical_bytes(&self) -> [u8; FP_BYTE_SIZE] {
        Fe::from_mont(self).to_bytes()
    }
}

impl FromStr for Fe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Fe> {
        let payload = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(payload).map_err(|err| match Error::from(err) {
            Error::Decoding { details, .. } => Error::Decoding {
                context: "Fe::from_str",
                details,
            },
            other => other,
        })?;
        Ok(Fe::from_bytes(&bytes))
    }
}

// ============================================================================
// Predicates and Ordering
// ============================================================================

impl Fe {
    /// True iff the integer is strictly less than p
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self < Fe::MODULUS
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4] | self.0[5]) == 0
    }

    /// Check if element is the Montgomery encoding of 1
    #[inline]
    pub fn is_one(&self) -> bool {
        *self == R
    }

    /// Bit 0 of the raw integer is set.
    ///
    /// This reads the stored limbs directly; for the parity of the residue,
    /// convert out of Montgomery form first.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 != 0
    }

    /// Bit 0 of the raw integer is clear. See [`Fe::is_odd`].
    #[inline]
    pub fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    /// True iff the residue (out of Montgomery form) is even
    pub fn sign(&self) -> bool {
        Fe::from_mont(self).is_even()
    }

    /// True iff the negation of the residue `a` is not smaller than `a`
    /// under limb order, i.e. `p - a >= a`. Zero is its own negation and
    /// yields true.
    pub fn sign_be(&self) -> bool {
        let z = Fe::from_mont(self);
        let neg_z = z.neg();
        neg_z >= z
    }
}

impl Ord for Fe {
    /// Compares as 384-bit integers, most significant limb first
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..FP_NUM_LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Fe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Bit-level Operations
// ============================================================================

impl Fe {
    /// Shift left by one bit, returning the bit shifted out of the top limb
    #[inline]
    pub fn mul2(&mut self) -> u64 {
        let out = self.0[5] >> 63;
        self.0[5] = (self.0[5] << 1) | (self.0[4] >> 63);
        self.0[4] = (self.0[4] << 1) | (self.0[3] >> 63);
        self.0[3] = (self.0[3] << 1) | (self.0[2] >> 63);
        self.0[2] = (self.0[2] << 1) | (self.0[1] >> 63);
        self.0[1] = (self.0[1] << 1) | (self.0[0] >> 63);
        self.0[0] <<= 1;
        out
    }

    /// Shift right by one bit, feeding the low bit of `carry` into bit 383
    #[inline]
    pub fn div2(&mut self, carry: u64) {
        self.0[0] = (self.0[0] >> 1) | (self.0[1] << 63);
        self.0[1] = (self.0[1] >> 1) | (self.0[2] << 63);
        self.0[2] = (self.0[2] >> 1) | (self.0[3] << 63);
        self.0[3] = (self.0[3] >> 1) | (self.0[4] << 63);
        self.0[4] = (self.0[4] >> 1) | (self.0[5] << 63);
        self.0[5] = (self.0[5] >> 1) | (carry << 63);
    }
}

// ============================================================================
// Sampling
// ============================================================================

impl Fe {
    /// Uniform integer in `[0, p)` by rejection sampling 381-bit candidates.
    ///
    /// The result is stored as drawn (it is uniform in either domain).
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Fe> {
        let mut bytes = [0u8; FP_BYTE_SIZE];
        let sampled = loop {
            rng.try_fill_bytes(&mut bytes)?;
            bytes[0] &= TOP_BYTE_MASK;
            let candidate = Fe::from_bytes(&bytes);
            if candidate.is_valid() {
                break candidate;
            }
        };
        bytes.zeroize();
        Ok(sampled)
    }

    /// Overwrite `self` with a uniform sample; untouched on error
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> Result<&mut Self> {
        let sampled = Fe::random(rng)?;
        Ok(self.set(&sampled))
    }
}

// ============================================================================
// Field Operations
// ============================================================================

impl Fe {
    /// Performs modular reduction after addition
    #[inline]
    const fn subtract_p(&self) -> Fe {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);
        let (r4, borrow) = sbb(self.0[4], MODULUS[4], borrow);
        let (r5, borrow) = sbb(self.0[5], MODULUS[5], borrow);

        // Use borrow as mask for conditional select
        let r0 = (self.0[0] & borrow) | (r0 & !borrow);
        let r1 = (self.0[1] & borrow) | (r1 & !borrow);
        let r2 = (self.0[2] & borrow) | (r2 & !borrow);
        let r3 = (self.0[3] & borrow) | (r3 & !borrow);
        let r4 = (self.0[4] & borrow) | (r4 & !borrow);
        let r5 = (self.0[5] & borrow) | (r5 & !borrow);

        Fe([r0, r1, r2, r3, r4, r5])
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fe) -> Fe {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);
        let (d4, carry) = adc(self.0[4], rhs.0[4], carry);
        let (d5, _) = adc(self.0[5], rhs.0[5], carry);

        (&Fe([d0, d1, d2, d3, d4, d5])).subtract_p()
    }

    /// Double a field element
    #[inline]
    pub const fn double(&self) -> Fe {
        self.add(self)
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fe) -> Fe {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element; zero maps to zero
    #[inline]
    pub const fn neg(&self) -> Fe {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, borrow) = sbb(MODULUS[3], self.0[3], borrow);
        let (d4, borrow) = sbb(MODULUS[4], self.0[4], borrow);
        let (d5, _) = sbb(MODULUS[5], self.0[5], borrow);

        // Mask if zero
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4] | self.0[5]) == 0)
            as u64)
            .wrapping_sub(1);

        Fe([
            d0 & mask,
            d1 & mask,
            d2 & mask,
            d3 & mask,
            d4 & mask,
            d5 & mask,
        ])
    }

    /// Multiply two field elements (Montgomery product)
    #[inline]
    pub const fn mul(&self, rhs: &Fe) -> Fe {
        let wide = Wfe::mul_wide(self, rhs);
        Fe::montgomery_reduce(&wide.0)
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fe {
        let wide = Wfe::square_wide(self);
        Fe::montgomery_reduce(&wide.0)
    }

    /// Convert out of Montgomery form: `aR -> a`
    #[inline]
    pub const fn from_mont(value: &Fe) -> Fe {
        let v = &value.0;
        Fe::montgomery_reduce(&[v[0], v[1], v[2], v[3], v[4], v[5], 0, 0, 0, 0, 0, 0])
    }

    /// Convert into Montgomery form: `a -> aR`
    #[inline]
    pub const fn to_mont(value: &Fe) -> Fe {
        value.mul(&R2)
    }

    /// Reduce a double-width accumulator: `t -> t * R^-1 mod p`.
    ///
    /// Exact while `t < p * 2^384`, which holds for the sum of up to eight
    /// products of canonical elements.
    #[inline]
    pub const fn from_wide(wide: &Wfe) -> Fe {
        Fe::montgomery_reduce(&wide.0)
    }

    /// Montgomery reduction algorithm
    #[inline(always)]
    pub(crate) const fn montgomery_reduce(t: &[u64; 12]) -> Fe {
        // Round 1
        let k = t[0].wrapping_mul(INV);
        let (_, carry) = mac(t[0], k, MODULUS[0], 0);
        let (r1, carry) = mac(t[1], k, MODULUS[1], carry);
        let (r2, carry) = mac(t[2], k, MODULUS[2], carry);
        let (r3, carry) = mac(t[3], k, MODULUS[3], carry);
        let (r4, carry) = mac(t[4], k, MODULUS[4], carry);
        let (r5, carry) = mac(t[5], k, MODULUS[5], carry);
        let (r6, r7) = adc(t[6], 0, carry);

        // Round 2
        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry) = mac(r5, k, MODULUS[4], carry);
        let (r6, carry) = mac(r6, k, MODULUS[5], carry);
        let (r7, r8) = adc(t[7], r7, carry);

        // Round 3
        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry) = mac(r6, k, MODULUS[4], carry);
        let (r7, carry) = mac(r7, k, MODULUS[5], carry);
        let (r8, r9) = adc(t[8], r8, carry);

        // Round 4
        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, carry) = mac(r7, k, MODULUS[4], carry);
        let (r8, carry) = mac(r8, k, MODULUS[5], carry);
        let (r9, r10) = adc(t[9], r9, carry);

        // Round 5
        let k = r4.wrapping_mul(INV);
        let (_, carry) = mac(r4, k, MODULUS[0], 0);
        let (r5, carry) = mac(r5, k, MODULUS[1], carry);
        let (r6, carry) = mac(r6, k, MODULUS[2], carry);
        let (r7, carry) = mac(r7, k, MODULUS[3], carry);
        let (r8, carry) = mac(r8, k, MODULUS[4], carry);
        let (r9, carry) = mac(r9, k, MODULUS[5], carry);
        let (r10, r11) = adc(t[10], r10, carry);

        // Round 6
        let k = r5.wrapping_mul(INV);
        let (_, carry) = mac(r5, k, MODULUS[0], 0);
        let (r6, carry) = mac(r6, k, MODULUS[1], carry);
        let (r7, carry) = mac(r7, k, MODULUS[2], carry);
        let (r8, carry) = mac(r8, k, MODULUS[3], carry);
        let (r9, carry) = mac(r9, k, MODULUS[4], carry);
        let (r10, carry) = mac(r10, k, MODULUS[5], carry);
        let (r11, _) = adc(t[11], r11, carry);

        (&Fe([r6, r7, r8, r9, r10, r11])).subtract_p()
    }
}

// ============================================================================
// Tower Contract
// ============================================================================

impl TowerField for Fe {
    fn zero() -> Self {
        Fe::ZERO
    }

    fn one() -> Self {
        Fe::ONE
    }

    fn is_zero(&self) -> bool {
        Fe::is_zero(self)
    }

    fn is_one(&self) -> bool {
        Fe::is_one(self)
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> CoreResult<Self> {
        to_core_result(Fe::random(rng), "Fe::random")
    }

    fn from_mont(value: &Self) -> Self {
        Fe::from_mont(value)
    }
}

impl WideReduce<Wfe> for Fe {
    fn from_wide(wide: &Wfe) -> Self {
        Fe::from_wide(wide)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for Fe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Fe({})", self)
    }
}

impl zeroize::DefaultIsZeroes for Fe {}

impl ConstantTimeEq for Fe {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fe {
    type Output = Fe;
    #[inline]
    fn neg(self) -> Fe { self.neg() }
}

impl Neg for Fe {
    type Output = Fe;
    #[inline]
    fn neg(self) -> Fe { -&self }
}

impl<'a, 'b> Add<&'b Fe> for &'a Fe {
    type Output = Fe;
    #[inline]
    fn add(self, rhs: &'b Fe) -> Fe { self.add(rhs) }
}

impl<'a, 'b> Sub<&'b Fe> for &'a Fe {
    type Output = Fe;
    #[inline]
    fn sub(self, rhs: &'b Fe) -> Fe { self.sub(rhs) }
}

impl<'a, 'b> Mul<&'b Fe> for &'a Fe {
    type Output = Fe;
    #[inline]
    fn mul(self, rhs: &'b Fe) -> Fe { self.mul(rhs) }
}

impl<'b> Add<&'b Fe> for Fe {
    type Output = Fe;
    #[inline]
    fn add(self, rhs: &'b Fe) -> Fe { &self + rhs }
}

impl Add<Fe> for Fe {
    type Output = Fe;
    #[inline]
    fn add(self, rhs: Fe) -> Fe { &self + &rhs }
}

impl<'b> Sub<&'b Fe> for Fe {
    type Output = Fe;
    #[inline]
    fn sub(self, rhs: &'b Fe) -> Fe { &self - rhs }
}

impl Sub<Fe> for Fe {
    type Output = Fe;
    #[inline]
    fn sub(self, rhs: Fe) -> Fe { &self - &rhs }
}

impl<'b> Mul<&'b Fe> for Fe {
    type Output = Fe;
    #[inline]
    fn mul(self, rhs: &'b Fe) -> Fe { &self * rhs }
}

impl Mul<Fe> for Fe {
    type Output = Fe;
    #[inline]
    fn mul(self, rhs: Fe) -> Fe { &self * &rhs }
}

impl AddAssign<Fe> for Fe {
    #[inline]
    fn add_assign(&mut self, rhs: Fe) { *self = &*self + &rhs; }
}

impl<'b> AddAssign<&'b Fe> for Fe {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fe) { *self = &*self + rhs; }
}

impl SubAssign<Fe> for Fe {
    #[inline]
    fn sub_assign(&mut self, rhs: Fe) { *self = &*self - &rhs; }
}

impl<'b> SubAssign<&'b Fe> for Fe {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fe) { *self = &*self - rhs; }
}

impl MulAssign<Fe> for Fe {
    #[inline]
    fn mul_assign(&mut self, rhs: Fe) { *self = &*self * &rhs; }
}

impl<'b> MulAssign<&'b Fe> for Fe {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fe) { *self = &*self * rhs; }
}
