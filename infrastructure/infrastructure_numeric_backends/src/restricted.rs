//! Restricted Backend
//!
//! Delegates to num-bigint. Only radices 2, 10 and 16 are accepted, and
//! square and k-th roots are refused with `UnsupportedOperation`.
//!
//! Values cross the boundary as little-endian magnitude bytes plus a sign,
//! using the encoding crate's byte helpers.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use entities_bignum::{BigValue, BignumError, Result};
use infrastructure_bignum_encoding::{bytes_to_integer, integer_to_bytes};
use num_bigint::{BigInt, Sign};
use num_integer::Integer as _;
use num_traits::{One, Signed, Zero};

use crate::backend::{check_divisor, check_powm_arguments, require_radix, validate_numeral, NumericBackend};
use crate::capabilities::{BackendKind, Capabilities, Operation, RadixSupport};

const RADICES: &[u32] = &[2, 10, 16];
const MISSING: &[Operation] = &[Operation::Sqrt, Operation::Root];

/// num-bigint-backed engine with a reduced surface
#[derive(Debug, Clone, Copy, Default)]
pub struct RestrictedBackend;

impl RestrictedBackend {
    pub fn new() -> Self {
        Self
    }
}

fn to_bigint(value: &BigValue) -> BigInt {
    let (bytes, negative) = integer_to_bytes(value);
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_bytes_le(sign, &bytes)
}

fn from_bigint(value: &BigInt) -> BigValue {
    let (sign, bytes) = value.to_bytes_le();
    bytes_to_integer(&bytes, sign == Sign::Minus)
}

fn unsupported(operation: Operation) -> BignumError {
    BignumError::UnsupportedOperation {
        operation: operation.name(),
        backend: BackendKind::Restricted.name(),
    }
}

fn not_invertible(a: &BigValue, modulus: &BigValue) -> BignumError {
    BignumError::arithmetic(format!("{} is not invertible modulo {}", a, modulus))
}

impl NumericBackend for RestrictedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Restricted
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            kind: BackendKind::Restricted,
            radices: RadixSupport::Listed(RADICES),
            missing: MISSING,
        }
    }

    fn parse(&self, text: &str, base: u32) -> Result<BigValue> {
        require_radix(&self.capabilities(), base)?;
        validate_numeral(text, base)?;
        BigInt::parse_bytes(text.as_bytes(), base)
            .map(|parsed| from_bigint(&parsed))
            .ok_or_else(|| BignumError::parse(base, format!("malformed numeral {:?}", text)))
    }

    fn format(&self, value: &BigValue, base: u32) -> Result<String> {
        require_radix(&self.capabilities(), base)?;
        Ok(to_bigint(value).to_str_radix(base))
    }

    fn add(&self, a: &BigValue, b: &BigValue) -> BigValue {
        from_bigint(&(to_bigint(a) + to_bigint(b)))
    }

    fn sub(&self, a: &BigValue, b: &BigValue) -> BigValue {
        from_bigint(&(to_bigint(a) - to_bigint(b)))
    }

    fn mul(&self, a: &BigValue, b: &BigValue) -> BigValue {
        from_bigint(&(to_bigint(a) * to_bigint(b)))
    }

    fn div(&self, a: &BigValue, b: &BigValue) -> Result<BigValue> {
        check_divisor(b)?;
        Ok(from_bigint(&(to_bigint(a) / to_bigint(b))))
    }

    fn rem(&self, a: &BigValue, b: &BigValue) -> Result<BigValue> {
        check_divisor(b)?;
        Ok(from_bigint(&(to_bigint(a) % to_bigint(b))))
    }

    fn neg(&self, a: &BigValue) -> BigValue {
        from_bigint(&-to_bigint(a))
    }

    fn abs(&self, a: &BigValue) -> BigValue {
        from_bigint(&to_bigint(a).abs())
    }

    fn pow(&self, base: &BigValue, exponent: u32) -> BigValue {
        from_bigint(&to_bigint(base).pow(exponent))
    }

    fn powm(&self, base: &BigValue, exponent: &BigValue, modulus: &BigValue) -> Result<BigValue> {
        check_powm_arguments(exponent, modulus)?;
        let m = to_bigint(modulus).abs();
        if m.is_one() {
            return Ok(BigValue::zero());
        }
        let b = to_bigint(base).mod_floor(&m);
        Ok(from_bigint(&b.modpow(&to_bigint(exponent), &m)))
    }

    fn gcd(&self, a: &BigValue, b: &BigValue) -> BigValue {
        from_bigint(&to_bigint(a).gcd(&to_bigint(b)))
    }

    fn invert(&self, a: &BigValue, modulus: &BigValue) -> Result<BigValue> {
        let m = to_bigint(modulus).abs();
        if m.is_zero() {
            return Err(BignumError::arithmetic("inverse modulo zero"));
        }
        if m.is_one() {
            return Ok(BigValue::zero());
        }
        let reduced = to_bigint(a).mod_floor(&m);
        if reduced.is_zero() {
            return Err(not_invertible(a, modulus));
        }
        let egcd = reduced.extended_gcd(&m);
        if !egcd.gcd.is_one() {
            return Err(not_invertible(a, modulus));
        }
        Ok(from_bigint(&egcd.x.mod_floor(&m)))
    }

    fn sqrt(&self, _a: &BigValue) -> Result<BigValue> {
        Err(unsupported(Operation::Sqrt))
    }

    fn root(&self, _a: &BigValue, _k: u32) -> Result<BigValue> {
        Err(unsupported(Operation::Root))
    }

    fn shift_left(&self, a: &BigValue, bits: u32) -> BigValue {
        let a = to_bigint(a);
        from_bigint(&BigInt::from_biguint(a.sign(), a.magnitude() << bits))
    }

    fn shift_right(&self, a: &BigValue, bits: u32) -> BigValue {
        let a = to_bigint(a);
        from_bigint(&BigInt::from_biguint(a.sign(), a.magnitude() >> bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64) -> BigValue {
        BigValue::from_i64(x)
    }

    #[test]
    fn test_bigint_conversion_keeps_sign() {
        for x in [0i64, 1, -1, 255, -256, i64::MIN, i64::MAX] {
            assert_eq!(from_bigint(&to_bigint(&v(x))), v(x));
        }
    }

    #[test]
    fn test_only_three_radices() {
        let backend = RestrictedBackend::new();
        assert_eq!(backend.parse("-ff", 16).unwrap(), v(-255));
        assert_eq!(backend.parse("1010", 2).unwrap(), v(10));
        assert_eq!(backend.parse("12345", 10).unwrap(), v(12345));
        assert!(matches!(backend.parse("17", 8), Err(BignumError::ParseError { base: 8, .. })));
        assert!(backend.format(&v(7), 8).is_err());
        assert_eq!(backend.format(&v(-255), 16).unwrap(), "-ff");
    }

    #[test]
    fn test_parse_rejects_plus_sign() {
        let backend = RestrictedBackend::new();
        assert!(backend.parse("+5", 10).is_err());
    }

    #[test]
    fn test_roots_unsupported() {
        let backend = RestrictedBackend::new();
        assert_eq!(
            backend.sqrt(&v(16)),
            Err(BignumError::UnsupportedOperation {
                operation: "sqrt",
                backend: "restricted",
            })
        );
        assert!(matches!(
            backend.root(&v(27), 3),
            Err(BignumError::UnsupportedOperation { operation: "root", .. })
        ));
    }

    #[test]
    fn test_modular_operations() {
        let backend = RestrictedBackend::new();
        assert_eq!(backend.powm(&v(4), &v(13), &v(-497)).unwrap(), v(445));
        assert_eq!(backend.powm(&v(-2), &v(3), &v(5)).unwrap(), v(2));
        assert_eq!(backend.invert(&v(-3), &v(11)).unwrap(), v(7));
        assert!(backend.invert(&v(6), &v(9)).is_err());
    }

    #[test]
    fn test_shift_right_truncates_toward_zero() {
        let backend = RestrictedBackend::new();
        assert_eq!(backend.shift_right(&v(-37), 2), v(-9));
        assert_eq!(backend.shift_right(&v(-1), 1), BigValue::zero());
        assert_eq!(backend.shift_left(&v(-37), 2), v(-148));
    }

    #[test]
    fn test_truncating_division() {
        let backend = RestrictedBackend::new();
        assert_eq!(backend.div(&v(-7), &v(2)).unwrap(), v(-3));
        assert_eq!(backend.rem(&v(-7), &v(2)).unwrap(), v(-1));
    }
}
