//! Equivalence tests between `ui512::U512` and `num_bigint::BigUint`.

mod common;

use common::{to_biguint, to_uint};
use core::cmp::Ordering;
use num_bigint::BigUint;
use num_integer::Integer as _;
use proptest::prelude::*;
use ui512::{Limb, NonZero, U512, Word};

prop_compose! {
    fn uint()(bytes in any::<[u8; 64]>()) -> U512 {
        U512::from_le_slice(&bytes)
    }
}

prop_compose! {
    /// Values whose high limbs are often zero, to exercise the short-operand
    /// dispatch in multiplication and division.
    fn uint_short()(bytes in any::<[u8; 64]>(), len in 0usize..=64) -> U512 {
        let mut bytes = bytes;
        bytes[len..].fill(0);
        U512::from_le_slice(&bytes)
    }
}

prop_compose! {
    fn nonzero_uint()(a in uint_short()) -> NonZero<U512> {
        NonZero::new(a).unwrap_or(NonZero::new(U512::ONE).unwrap())
    }
}

prop_compose! {
    fn nonzero_limb()(x in any::<Word>()) -> NonZero<Limb> {
        if x == 0 {
            NonZero::new(Limb::ONE).unwrap()
        } else {
            NonZero::new(Limb(x)).unwrap()
        }
    }
}

proptest! {
    #[test]
    fn encoding_roundtrip(a in uint()) {
        prop_assert_eq!(a, to_uint(&to_biguint(&a)));
        prop_assert_eq!(a, U512::from_be_slice(&a.to_be_bytes()));
        prop_assert_eq!(a, U512::from_le_slice(&a.to_le_bytes()));
    }

    #[test]
    fn bits(a in uint()) {
        prop_assert_eq!(to_biguint(&a).bits() as u32, a.bits());
    }

    #[test]
    fn cmp(a in uint(), b in uint()) {
        let expected = to_biguint(&a).cmp(&to_biguint(&b));
        prop_assert_eq!(expected, a.cmp_vartime(&b));
        prop_assert_eq!(expected, a.cmp(&b));
    }

    #[test]
    fn wrapping_add_matches_reference(a in uint(), b in uint()) {
        let expected = (to_biguint(&a) + to_biguint(&b)) % (BigUint::from(1u8) << 512);
        prop_assert_eq!(to_uint(&expected), a.wrapping_add(&b));
    }

    #[test]
    fn add_then_sub_roundtrip(a in uint(), b in uint()) {
        let (sum, carry) = a.carrying_add(&b, Limb::ZERO);
        let (diff, borrow) = sum.borrowing_sub(&b, Limb::ZERO);
        prop_assert_eq!(diff, a);
        // the add overflowed exactly when the sub borrows back
        prop_assert_eq!(carry.is_zero(), borrow.is_zero());
    }

    #[test]
    fn widening_mul_matches_reference(a in uint(), b in uint()) {
        let expected = to_biguint(&a) * to_biguint(&b);
        let (lo, hi) = a.widening_mul(&b);
        let actual = (to_biguint(&hi) << 512) | to_biguint(&lo);
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn widening_mul_short_operands(a in uint_short(), b in uint_short()) {
        let expected = to_biguint(&a) * to_biguint(&b);
        let (lo, hi) = a.widening_mul(&b);
        let actual = (to_biguint(&hi) << 512) | to_biguint(&lo);
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn widening_mul_commutes(a in uint(), b in uint()) {
        prop_assert_eq!(a.widening_mul(&b), b.widening_mul(&a));
    }

    #[test]
    fn widening_mul_limb_matches_reference(a in uint(), b in any::<Word>()) {
        let expected = to_biguint(&a) * b;
        let (lo, hi) = a.widening_mul_limb(Limb(b));
        let actual = (BigUint::from(hi.0) << 512) | to_biguint(&lo);
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn div_rem_identity(a in uint(), b in nonzero_uint()) {
        let (q, r) = a.div_rem(&b);

        // remainder is within range
        prop_assert_eq!(r.cmp_vartime(b.as_ref()), Ordering::Less);

        // reconstruct the dividend with the crate's own multiply and add
        let (lo, hi) = q.widening_mul(b.as_ref());
        prop_assert!(hi.is_zero());
        let (sum, carry) = lo.carrying_add(&r, Limb::ZERO);
        prop_assert!(carry.is_zero());
        prop_assert_eq!(sum, a);
    }

    #[test]
    fn div_rem_matches_reference(a in uint(), b in nonzero_uint()) {
        let (expected_q, expected_r) = to_biguint(&a).div_rem(&to_biguint(b.as_ref()));
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(q, to_uint(&expected_q));
        prop_assert_eq!(r, to_uint(&expected_r));
    }

    #[test]
    fn div_rem_near_operands(a in uint(), delta in any::<u64>()) {
        // dividend and divisor of similar magnitude stress the trial-digit
        // refinement
        let b = a.saturating_sub(&U512::from_u64(delta));
        if b.is_nonzero() {
            let b = NonZero::new(b).unwrap();
            let (expected_q, expected_r) = to_biguint(&a).div_rem(&to_biguint(b.as_ref()));
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q, to_uint(&expected_q));
            prop_assert_eq!(r, to_uint(&expected_r));
        }
    }

    #[test]
    fn div_rem_limb_matches_reference(a in uint(), b in nonzero_limb()) {
        let (expected_q, expected_r) = to_biguint(&a).div_rem(&BigUint::from(b.as_ref().0));
        let (q, r) = a.div_rem_limb(b);
        prop_assert_eq!(q, to_uint(&expected_q));
        prop_assert_eq!(BigUint::from(r.0), expected_r);
        prop_assert!(r < *b.as_ref());
    }

    #[test]
    fn div_rem_limb_identity(a in uint(), b in nonzero_limb()) {
        let (q, r) = a.div_rem_limb(b);

        // q * b + r reconstructs the dividend without overflowing
        let (lo, hi) = q.widening_mul_limb(*b.as_ref());
        prop_assert!(hi.is_zero());
        let (sum, carry) = lo.carrying_add(&U512::from_limb(r), Limb::ZERO);
        prop_assert!(carry.is_zero());
        prop_assert_eq!(sum, a);
    }

    #[test]
    fn mul_by_power_of_two_matches_shifts(a in uint(), k in 0u32..512) {
        let two_k = U512::ONE.shl(k);
        let (lo, hi) = a.widening_mul(&two_k);
        prop_assert_eq!(lo, a.unbounded_shl(k));
        prop_assert_eq!(hi, a.unbounded_shr(512 - k));
    }

    #[test]
    fn div_by_power_of_two_matches_shift_and_mask(a in uint(), k in 0u32..512) {
        let two_k = NonZero::new(U512::ONE.shl(k)).unwrap();
        let (q, r) = a.div_rem(&two_k);
        prop_assert_eq!(q, a.unbounded_shr(k));
        let mask = two_k.as_ref().wrapping_sub(&U512::ONE);
        prop_assert_eq!(r, a.bitand(&mask));
    }

    #[test]
    fn div_by_one_and_self(a in uint()) {
        prop_assert_eq!(a.div_rem(&NonZero::new(U512::ONE).unwrap()), (a, U512::ZERO));
        if a.is_nonzero() {
            let nz = NonZero::new(a).unwrap();
            prop_assert_eq!(a.div_rem(&nz), (U512::ONE, U512::ZERO));
        }
    }

    #[test]
    fn checked_div_rem_zero_divisor(a in uint()) {
        prop_assert_eq!(a.checked_div_rem(&U512::ZERO), None);
        prop_assert_eq!(a.checked_div_rem_limb(Limb::ZERO), None);
    }

    #[test]
    fn shl_matches_reference(a in uint(), shift in 0u32..1024) {
        let expected = (to_biguint(&a) << shift as usize) % (BigUint::from(1u8) << 512);
        prop_assert_eq!(to_uint(&expected), a.unbounded_shl(shift));
    }

    #[test]
    fn shr_matches_reference(a in uint(), shift in 0u32..1024) {
        let expected = to_biguint(&a) >> shift as usize;
        prop_assert_eq!(to_uint(&expected), a.unbounded_shr(shift));
    }
}

#[test]
fn div_rem_is_deterministic_across_threads() {
    let a = U512::from_be_hex(
        "C4FE55D0A8E1B2739DB01846AD52F7C8330E6B9A1F5D20C47E88A6D4935B17F0\
         6612DFA90B38C5E1824F70D6A3E9051C7BBD5409F2861E37A50C49D8E2B36714",
    );
    let b = NonZero::new(U512::from_u128(0xFFEE_DDCC_BBAA_9988_7766_5544_3322_1100)).unwrap();

    let expected = a.div_rem(&b);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || a.div_rem(&b)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[cfg(feature = "rand_core")]
mod random {
    use super::*;
    use rand_core::SeedableRng;

    #[test]
    fn div_rem_random_values() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);

        for i in 0u32..200 {
            // sweep divisor magnitudes so every significant-limb count is hit
            let a = U512::random(&mut rng);
            let b = match NonZero::new(U512::random(&mut rng).unbounded_shr(i * 5 % 512)) {
                Some(b) => b,
                None => continue,
            };

            let (expected_q, expected_r) = to_biguint(&a).div_rem(&to_biguint(b.as_ref()));
            let (q, r) = a.div_rem(&b);
            assert_eq!(q, to_uint(&expected_q), "a = {a}, b = {b}");
            assert_eq!(r, to_uint(&expected_r), "a = {a}, b = {b}");
        }
    }

    #[test]
    fn mul_random_values_match_reference() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(2);

        for _ in 0..200 {
            let a = U512::random(&mut rng);
            let b = U512::random(&mut rng);
            let (lo, hi) = a.widening_mul(&b);
            let expected = to_biguint(&a) * to_biguint(&b);
            assert_eq!((to_biguint(&hi) << 512) | to_biguint(&lo), expected);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use super::*;

    #[test]
    fn bincode_roundtrip() {
        let a = U512::from_be_hex(
            "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
             0000000000000000000000000000000000000000000000000123456789ABCDEF",
        );

        let encoded = bincode::serialize(&a).unwrap();
        let decoded: U512 = bincode::deserialize(&encoded).unwrap();
        assert_eq!(a, decoded);
    }
}
