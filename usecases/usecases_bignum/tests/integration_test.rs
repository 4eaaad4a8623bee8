//! Integration tests for usecases_bignum crate
//!
//! These tests drive the session end to end under both backends.

use std::cmp::Ordering;

use infrastructure_bignum_encoding::{BufferOptions, Endian, WordOrder};
use infrastructure_numeric_backends::BackendKind;
use proptest::prelude::*;
use usecases_bignum::*;

fn sessions() -> Vec<BignumSession> {
    [BackendKind::General, BackendKind::Restricted]
        .into_iter()
        .map(|kind| BignumSession::new(SessionConfig::new(kind).with_seed(17)))
        .collect()
}

#[test]
fn test_registry_lifecycle() {
    for mut session in sessions() {
        let h = session.create();
        assert!(session.get(h).unwrap().is_zero());
        session.destroy(h).unwrap();
        assert_eq!(session.get(h), Err(BignumError::InvalidHandle(h)));
        assert_eq!(session.destroy(h), Err(BignumError::InvalidHandle(h)));
        assert_eq!(session.live_count(), 0);
    }
}

#[test]
fn test_minimum_negative_through_handles() {
    for mut session in sessions() {
        let a = session.create_from_i64(-128);
        let b = session.create_from_i64(-1);
        let h = session.and(a, b).unwrap();
        assert_eq!(session.to_string(h, 10).unwrap(), "-128");
        let c = session.create_from_i64(127);
        let h = session.xor(c, b).unwrap();
        assert_eq!(session.to_string(h, 16).unwrap(), "-80");
    }
}

#[test]
fn test_bitwise_beyond_native_width() {
    for mut session in sessions() {
        // -(2^128) | (2^64 - 1)
        let a = session.create_from_digits("-100000000000000000000000000000000", 16).unwrap();
        let b = session.create_from_digits("ffffffffffffffff", 16).unwrap();
        let h = session.or(a, b).unwrap();
        assert_eq!(
            session.to_string(h, 16).unwrap(),
            "-ffffffffffffffff0000000000000001"
        );
    }
}

#[test]
fn test_jacobi_table() {
    for mut session in sessions() {
        let cases = [(1, 3, 1), (2, 3, -1), (0, 5, 0), (4, 15, 1)];
        for (a, n, expected) in cases {
            let ha = session.create_from_i64(a);
            let hn = session.create_from_i64(n);
            assert_eq!(session.jacobi(ha, hn).unwrap(), expected);
        }
        let one = session.create_from_i64(1);
        let four = session.create_from_i64(4);
        assert!(matches!(session.jacobi(one, four), Err(BignumError::InvalidArgument(_))));
    }
}

#[test]
fn test_difficulty_field() {
    for mut session in sessions() {
        let h = session.create();
        session.set_compact(h, 0x1b04_04cb).unwrap();
        let shifted = session.create_from_digits("404cb", 16).unwrap();
        assert_eq!(session.bit_length(h).unwrap(), session.bit_length(shifted).unwrap() + 8 * 24);
        assert_eq!(session.compare_i64(h, 0).unwrap(), Ordering::Greater);
        let before = session.get(h).unwrap().clone();
        session.set_compact(h, 0x1b04_04cb).unwrap();
        assert_eq!(session.get(h).unwrap(), &before);
    }
}

#[test]
fn test_buffers_and_mpint() {
    for mut session in sessions() {
        let opts = BufferOptions {
            endian: Endian::Little,
            size: 2,
            order: WordOrder::Forward,
        };
        let h = session.from_buffer(&[0x34, 0x12, 0x78, 0x56], &opts).unwrap();
        assert_eq!(session.to_buffer(h, &opts).unwrap(), vec![0x34, 0x12, 0x78, 0x56]);

        let n = session.create_from_i64(-0x1234);
        let mpint = session.to_mpint(n).unwrap();
        assert_eq!(mpint, vec![0, 0, 0, 2, 0xed, 0xcc]);
        let (back, consumed) = session.from_mpint(&mpint).unwrap();
        assert_eq!(consumed, 6);
        assert_eq!(session.compare(back, n).unwrap(), Ordering::Equal);
        assert!(matches!(session.to_buffer(n, &opts), Err(BignumError::InvalidArgument(_))));
    }
}

#[test]
fn test_modular_arithmetic() {
    for mut session in sessions() {
        let a = session.create_from_i64(17);
        let m = session.create_from_i64(3120);
        let inverse = session.invert(a, m).unwrap();
        assert_eq!(session.to_string(inverse, 10).unwrap(), "2753");
        let e = session.create_from_i64(65537);
        let p = session.powm(a, e, m).unwrap();
        assert_eq!(session.compare_i64(p, 3120).unwrap(), Ordering::Less);
        let zero = session.create();
        assert!(matches!(session.powm(a, e, zero), Err(BignumError::ArithmeticError(_))));
        assert!(matches!(session.div(a, zero), Err(BignumError::ArithmeticError(_))));
    }
}

#[test]
fn test_primality_under_both_backends() {
    for mut session in sessions() {
        let p = session.random_prime(96).unwrap();
        assert_eq!(session.bit_length(p).unwrap(), 96);
        assert_ne!(session.probable_prime(p, 20).unwrap(), Primality::Composite);
        let n = session.create_from_i64(1_373_653);
        assert_eq!(session.probable_prime(n, 20).unwrap(), Primality::Composite);
    }
}

#[test]
fn test_shifts_and_next_prime_under_both_backends() {
    for mut session in sessions() {
        let base = session.create_from_i64(2);
        let big = session.pow(base, 1024).unwrap();
        let sixteen = session.create_from_i64(16);
        let shifted = session.shift_right(big, 4).unwrap();
        let divided = session.div(big, sixteen).unwrap();
        assert_eq!(session.compare(shifted, divided).unwrap(), Ordering::Equal);
        let back = session.shift_left(shifted, 4).unwrap();
        assert_eq!(session.compare(back, big).unwrap(), Ordering::Equal);

        let n = session.create_from_digits("9987704933", 10).unwrap();
        let p = session.next_prime(n).unwrap();
        assert_eq!(session.to_string(p, 10).unwrap(), "9987704953");
        assert_eq!(session.to_i64(p).unwrap(), 9_987_704_953);
        assert!(session.to_i64(big).is_err());
    }
}

proptest! {
    #[test]
    fn prop_shift_right_truncates_like_division(a in any::<i64>(), bits in 0u32..70) {
        let mut session = BignumSession::default();
        let h = session.create_from_i64(a);
        let shifted = session.shift_right(h, bits).unwrap();
        let expected = (i128::from(a) / (1i128 << bits)) as i64;
        prop_assert_eq!(session.to_i64(shifted).unwrap(), expected);
    }

    #[test]
    fn prop_random_range_stays_in_bounds(lo in -1_000_000i64..1_000_000, width in 1i64..1_000_000, seed in any::<u64>()) {
        let mut session = BignumSession::new(SessionConfig::default().with_seed(seed));
        let hl = session.create_from_i64(lo);
        let hh = session.create_from_i64(lo + width);
        let h = session.random_range(hl, hh).unwrap();
        let sample = session.to_i64(h).unwrap();
        prop_assert!(lo <= sample && sample < lo + width);
    }

    #[test]
    fn prop_session_bitwise_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let mut session = BignumSession::default();
        let ha = session.create_from_i64(a);
        let hb = session.create_from_i64(b);
        for (op, expected) in [(BitwiseOp::And, a & b), (BitwiseOp::Or, a | b), (BitwiseOp::Xor, a ^ b)] {
            let h = session.bitwise(op, ha, hb).unwrap();
            prop_assert_eq!(session.compare_i64(h, expected).unwrap(), Ordering::Equal);
        }
    }

    #[test]
    fn prop_bit_queries_match_native(x in any::<i64>(), index in 0u64..80) {
        let mut session = BignumSession::default();
        let h = session.create_from_i64(x);
        let expected = if index >= 64 { x < 0 } else { (x >> index) & 1 == 1 };
        prop_assert_eq!(session.is_bit_set(h, index).unwrap(), expected);
    }
}
