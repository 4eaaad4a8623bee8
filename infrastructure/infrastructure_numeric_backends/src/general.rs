//! General Backend
//!
//! Delegates to malachite. Offers every operation and radix 2 through 36.

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
use malachite::base::num::arithmetic::traits::{FloorRoot, FloorSqrt, Gcd, ModInverse, ModPow, Pow};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::{FromStringBase, ToStringBase};
use malachite::{Integer, Natural};

use crate::backend::{
    check_divisor, check_powm_arguments, check_root_arguments, require_radix, validate_numeral,
    NumericBackend,
};
use crate::capabilities::{BackendKind, Capabilities, RadixSupport};

/// malachite-backed engine
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralBackend;

impl GeneralBackend {
    pub fn new() -> Self {
        Self
    }
}

// Reduce `a` into [0, m) for a positive modulus m.
fn reduce(a: &BigValue, modulus: &Natural) -> Natural {
    let m = Integer::from(modulus.clone());
    let mut r = a.as_integer() % &m;
    if r < Integer::ZERO {
        r += &m;
    }
    BigValue::from_integer(r).magnitude()
}

impl NumericBackend for GeneralBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::General
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            kind: BackendKind::General,
            radices: RadixSupport::Range { min: 2, max: 36 },
            missing: &[],
        }
    }

    fn parse(&self, text: &str, base: u32) -> Result<BigValue> {
        require_radix(&self.capabilities(), base)?;
        validate_numeral(text, base)?;
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let magnitude = Natural::from_string_base(base as u8, &digits.to_ascii_lowercase())
            .ok_or_else(|| BignumError::parse(base, format!("malformed numeral {:?}", text)))?;
        Ok(BigValue::from_sign_and_magnitude(negative, magnitude))
    }

    fn format(&self, value: &BigValue, base: u32) -> Result<String> {
        require_radix(&self.capabilities(), base)?;
        let digits = value.magnitude().to_string_base(base as u8);
        Ok(if value.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        })
    }

    fn add(&self, a: &BigValue, b: &BigValue) -> BigValue {
        BigValue::from_integer(a.as_integer() + b.as_integer())
    }

    fn sub(&self, a: &BigValue, b: &BigValue) -> BigValue {
        BigValue::from_integer(a.as_integer() - b.as_integer())
    }

    fn mul(&self, a: &BigValue, b: &BigValue) -> BigValue {
        BigValue::from_integer(a.as_integer() * b.as_integer())
    }

    fn div(&self, a: &BigValue, b: &BigValue) -> Result<BigValue> {
        check_divisor(b)?;
        Ok(BigValue::from_integer(a.as_integer() / b.as_integer()))
    }

    fn rem(&self, a: &BigValue, b: &BigValue) -> Result<BigValue> {
        check_divisor(b)?;
        Ok(BigValue::from_integer(a.as_integer() % b.as_integer()))
    }

    fn neg(&self, a: &BigValue) -> BigValue {
        BigValue::from_integer(-a.as_integer())
    }

    fn abs(&self, a: &BigValue) -> BigValue {
        BigValue::from_sign_and_magnitude(false, a.magnitude())
    }

    fn pow(&self, base: &BigValue, exponent: u32) -> BigValue {
        BigValue::from_integer(base.as_integer().clone().pow(u64::from(exponent)))
    }

    fn powm(&self, base: &BigValue, exponent: &BigValue, modulus: &BigValue) -> Result<BigValue> {
        check_powm_arguments(exponent, modulus)?;
        let m = modulus.magnitude();
        if m == Natural::ONE {
            return Ok(BigValue::zero());
        }
        let result = reduce(base, &m).mod_pow(exponent.magnitude(), m);
        Ok(BigValue::from_sign_and_magnitude(false, result))
    }

    fn gcd(&self, a: &BigValue, b: &BigValue) -> BigValue {
        BigValue::from_sign_and_magnitude(false, a.magnitude().gcd(b.magnitude()))
    }

    fn invert(&self, a: &BigValue, modulus: &BigValue) -> Result<BigValue> {
        let m = modulus.magnitude();
        if m == Natural::ZERO {
            return Err(BignumError::arithmetic("inverse modulo zero"));
        }
        if m == Natural::ONE {
            return Ok(BigValue::zero());
        }
        let reduced = reduce(a, &m);
        if reduced == Natural::ZERO {
            return Err(BignumError::arithmetic(format!("{} is not invertible modulo {}", a, modulus)));
        }
        reduced
            .mod_inverse(m)
            .map(|inverse| BigValue::from_sign_and_magnitude(false, inverse))
            .ok_or_else(|| BignumError::arithmetic(format!("{} is not invertible modulo {}", a, modulus)))
    }

    fn sqrt(&self, a: &BigValue) -> Result<BigValue> {
        if a.is_negative() {
            return Err(BignumError::invalid_argument("square root of a negative value"));
        }
        Ok(BigValue::from_sign_and_magnitude(false, a.magnitude().floor_sqrt()))
    }

    fn root(&self, a: &BigValue, k: u32) -> Result<BigValue> {
        check_root_arguments(a, k)?;
        let root = a.magnitude().floor_root(u64::from(k));
        Ok(BigValue::from_sign_and_magnitude(a.is_negative(), root))
    }

    fn shift_left(&self, a: &BigValue, bits: u32) -> BigValue {
        BigValue::from_sign_and_magnitude(a.is_negative(), a.magnitude() << u64::from(bits))
    }

    fn shift_right(&self, a: &BigValue, bits: u32) -> BigValue {
        BigValue::from_sign_and_magnitude(a.is_negative(), a.magnitude() >> u64::from(bits))
    }
}
