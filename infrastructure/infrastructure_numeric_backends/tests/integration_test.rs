//! Integration tests for infrastructure_numeric_backends crate
//!
//! Both engines must agree with each other and with native integers on
//! every operation they share.

use entities_bignum::BigValue;
use infrastructure_numeric_backends::*;
use proptest::prelude::*;

fn v(x: i64) -> BigValue {
    BigValue::from_i64(x)
}

fn both() -> [Box<dyn NumericBackend>; 2] {
    [backend_for(BackendKind::General), backend_for(BackendKind::Restricted)]
}

fn native_gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}

fn native_powm(base: i64, exp: u32, m: i64) -> i64 {
    let m = i128::from(m.abs());
    let mut result = 1i128 % m;
    let mut b = i128::from(base).rem_euclid(m);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    result as i64
}

#[test]
fn test_large_numeral_round_trip_decimal_and_hex() {
    let text = "-123456789012345678901234567890123456789";
    for backend in both() {
        let value = backend.parse(text, 10).unwrap();
        assert_eq!(backend.format(&value, 10).unwrap(), text);
        let hex = backend.format(&value, 16).unwrap();
        assert_eq!(backend.parse(&hex, 16).unwrap(), value);
    }
}

#[test]
fn test_pow_large() {
    for backend in both() {
        let value = backend.pow(&v(2), 100);
        assert_eq!(
            backend.format(&value, 10).unwrap(),
            "1267650600228229401496703205376"
        );
        assert_eq!(backend.pow(&v(-3), 3), v(-27));
        assert_eq!(backend.pow(&v(5), 0), v(1));
    }
}

#[test]
fn test_invert_identity() {
    for backend in both() {
        let inverse = backend.invert(&v(17), &v(3120)).unwrap();
        assert_eq!(inverse, v(2753));
        assert_eq!(backend.invert(&v(5), &v(1)).unwrap(), BigValue::zero());
    }
}

#[test]
fn test_shift_right_matches_division_by_power_of_two() {
    for backend in both() {
        let big = backend.pow(&v(2), 1024);
        let sixteen = v(16);
        assert_eq!(backend.shift_right(&big, 4), backend.div(&big, &sixteen).unwrap());
        assert_eq!(backend.shift_left(&backend.shift_right(&big, 4), 4), big);
        let negative = backend.neg(&big);
        assert_eq!(
            backend.shift_right(&negative, 5),
            backend.div(&negative, &v(32)).unwrap()
        );
        assert!(backend.capabilities().supports(Operation::ShiftRight));
    }
}

proptest! {
    #[test]
    fn prop_ring_operations_match_native(a in -(1i64 << 40)..(1i64 << 40), b in -(1i64 << 40)..(1i64 << 40)) {
        for backend in both() {
            prop_assert_eq!(backend.add(&v(a), &v(b)), v(a + b));
            prop_assert_eq!(backend.sub(&v(a), &v(b)), v(a - b));
            prop_assert_eq!(backend.mul(&v(a), &v(b)).to_string(), (i128::from(a) * i128::from(b)).to_string());
            prop_assert_eq!(backend.neg(&v(a)), v(-a));
            prop_assert_eq!(backend.abs(&v(a)), v(a.abs()));
            prop_assert_eq!(backend.gcd(&v(a), &v(b)), v(native_gcd(a, b)));
            if b != 0 {
                prop_assert_eq!(backend.div(&v(a), &v(b)).unwrap(), v(a / b));
                prop_assert_eq!(backend.rem(&v(a), &v(b)).unwrap(), v(a % b));
            }
        }
    }

    #[test]
    fn prop_powm_matches_native(base in any::<i32>(), exp in 0u32..200, m in 1i64..1_000_000) {
        for backend in both() {
            let result = backend.powm(&v(i64::from(base)), &v(i64::from(exp)), &v(m)).unwrap();
            prop_assert_eq!(result, v(native_powm(i64::from(base), exp, m)));
        }
    }

    #[test]
    fn prop_decimal_parse_matches_native(x in any::<i64>()) {
        for backend in both() {
            prop_assert_eq!(backend.parse(&x.to_string(), 10).unwrap(), v(x));
            prop_assert_eq!(backend.format(&v(x), 10).unwrap(), x.to_string());
        }
    }

    #[test]
    fn prop_general_root_truncates_toward_zero(x in -1_000_000i64..1_000_000) {
        let backend = GeneralBackend::new();
        let r = backend.root(&v(x), 3).unwrap().to_i64().unwrap();
        prop_assert!((r.abs()).pow(3) <= x.abs());
        prop_assert!((r.abs() + 1).pow(3) > x.abs());
        prop_assert!(r == 0 || (r < 0) == (x < 0));
    }
}
