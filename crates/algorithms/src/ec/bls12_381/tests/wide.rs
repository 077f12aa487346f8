//! Double-width accumulator tests

use super::super::field::ext::Ext;
use super::super::field::fp::Fe;
use super::super::field::fp2::Fe2;
use super::super::field::fp6::Fe6;
use super::super::field::wide::{Wfe, Wfe2, Wfe6, WIDE_NUM_LIMBS};
use super::{test_rng, FUZZ};

use bls12_tower_api::{TowerField, WideReduce};
use num_bigint::BigUint;

fn wide_to_big(w: &Wfe) -> BigUint {
    w.limbs()
        .iter()
        .rev()
        .fold(BigUint::from(0u32), |acc, limb| (acc << 64u32) + *limb)
}

// ============================================================================
// Wfe
// ============================================================================

#[test]
fn test_mul_wide_is_full_product() {
    let mut rng = test_rng(40);
    for _ in 0..FUZZ {
        let a = Fe::random(&mut rng).unwrap();
        let b = Fe::random(&mut rng).unwrap();
        let w = Wfe::mul_wide(&a, &b);
        assert_eq!(wide_to_big(&w), a.to_big() * b.to_big());
    }

    // Non-canonical inputs are multiplied as plain integers
    let max = Fe::from_raw_unchecked([u64::MAX; 6]);
    let w = Wfe::mul_wide(&max, &max);
    assert_eq!(wide_to_big(&w), max.to_big() * max.to_big());
}

#[test]
fn test_square_wide_matches_mul_wide() {
    let mut rng = test_rng(41);
    for _ in 0..FUZZ {
        let a = Fe::random(&mut rng).unwrap();
        assert_eq!(Wfe::square_wide(&a), Wfe::mul_wide(&a, &a));
    }

    let max = Fe::from_raw_unchecked([u64::MAX; 6]);
    assert_eq!(Wfe::square_wide(&max), Wfe::mul_wide(&max, &max));
}

#[test]
fn test_from_wide_matches_mul() {
    let mut rng = test_rng(42);
    for _ in 0..FUZZ {
        let a = Fe::random(&mut rng).unwrap();
        let b = Fe::random(&mut rng).unwrap();
        assert_eq!(Fe::from_wide(&Wfe::mul_wide(&a, &b)), a * b);
        assert_eq!(Fe::from_wide(&Wfe::square_wide(&a)), a.square());
        assert_eq!(<Fe as WideReduce<Wfe>>::from_wide(&Wfe::mul_wide(&a, &b)), a * b);
    }
}

#[test]
fn test_add_wide_defers_reduction() {
    let mut rng = test_rng(43);
    for _ in 0..FUZZ {
        let a = Fe::random(&mut rng).unwrap();
        let b = Fe::random(&mut rng).unwrap();
        let c = Fe::random(&mut rng).unwrap();
        let d = Fe::random(&mut rng).unwrap();

        let acc = Wfe::mul_wide(&a, &b).add_wide(&Wfe::mul_wide(&c, &d));
        assert_eq!(Fe::from_wide(&acc), a * b + c * d);
    }
}

#[test]
fn test_add_wide_eight_products() {
    let mut rng = test_rng(44);
    let mut acc = Wfe::ZERO;
    let mut expected = Fe::zero();
    for _ in 0..8 {
        let a = Fe::random(&mut rng).unwrap();
        let b = Fe::random(&mut rng).unwrap();
        acc = acc.add_wide(&Wfe::mul_wide(&a, &b));
        expected += a * b;
    }
    assert_eq!(Fe::from_wide(&acc), expected);
}

#[test]
fn test_add_wide_carries_across_limbs() {
    let mut low = [0u64; WIDE_NUM_LIMBS];
    low[0] = u64::MAX;
    let one = Wfe::from_raw_unchecked({
        let mut l = [0u64; WIDE_NUM_LIMBS];
        l[0] = 1;
        l
    });

    let sum = Wfe::from_raw_unchecked(low).add_wide(&one);
    let mut expected = [0u64; WIDE_NUM_LIMBS];
    expected[1] = 1;
    assert_eq!(sum.limbs(), &expected);

    // The carry out of the top limb is dropped
    let max = Wfe::from_raw_unchecked([u64::MAX; WIDE_NUM_LIMBS]);
    assert_eq!(max.add_wide(&one), Wfe::ZERO);
}

#[test]
fn test_wfe_set() {
    let mut rng = test_rng(45);
    let a = Fe::random(&mut rng).unwrap();
    let w = Wfe::mul_wide(&a, &a);

    let mut copy = Wfe::ZERO;
    copy.set(&w);
    assert_eq!(copy, w);

    copy = copy.add_wide(&w);
    assert_ne!(copy, w);
}

#[test]
fn test_wfe_zeroize() {
    use zeroize::Zeroize;

    let mut w = Wfe::mul_wide(&Fe::one(), &Fe::one());
    assert_ne!(w, Wfe::ZERO);
    w.zeroize();
    assert_eq!(w, Wfe::ZERO);

    let mut w2 = Wfe2::mul_wide(&Fe2::one(), &Fe2::one());
    w2.zeroize();
    assert_eq!(w2, Wfe2::default());
}

// ============================================================================
// Wfe2 and Wfe6
// ============================================================================

#[test]
fn test_wfe2_mul_wide_formula() {
    let mut rng = test_rng(46);
    for _ in 0..FUZZ {
        let a = Fe2::random(&mut rng).unwrap();
        let b = Fe2::random(&mut rng).unwrap();

        let c0 = a[0] * b[0] - a[1] * b[1];
        let c1 = a[0] * b[1] + a[1] * b[0];
        assert_eq!(Fe2::from_wide(&Wfe2::mul_wide(&a, &b)), Fe2::from_coeffs(c0, c1));
        assert_eq!(a * b, Fe2::from_coeffs(c0, c1));
    }
}

#[test]
fn test_wfe2_set() {
    let mut rng = test_rng(47);
    let a = Fe2::random(&mut rng).unwrap();
    let w = Wfe2::mul_wide(&a, &a);

    let mut copy = Wfe2::default();
    copy.set(&w);
    assert_eq!(copy, w);
    assert_eq!(copy[0], w[0]);
    assert_eq!(copy[1], w[1]);
}

#[test]
fn test_wfe6_reduces_per_coordinate() {
    let mut rng = test_rng(48);
    let a = Fe6::random(&mut rng).unwrap();
    let b = Fe6::random(&mut rng).unwrap();

    let w: Wfe6 = Ext([
        Wfe2::mul_wide(&a[0], &b[0]),
        Wfe2::mul_wide(&a[1], &b[1]),
        Wfe2::mul_wide(&a[2], &b[2]),
    ]);
    let expected = Fe6::from_coeffs(a[0] * b[0], a[1] * b[1], a[2] * b[2]);
    assert_eq!(Fe6::from_wide(&w), expected);

    let mut copy = Wfe6::default();
    copy.set(&w);
    assert_eq!(copy, w);
    assert_eq!(Fe6::from_wide(&copy), expected);
}

#[test]
fn test_from_wide_of_zero() {
    assert!(Fe::from_wide(&Wfe::ZERO).is_zero());
    assert!(Fe2::from_wide(&Wfe2::default()).is_zero());
    assert!(Fe6::from_wide(&Wfe6::default()).is_zero());
}
