//! Numeric Backend Interface
//!
//! Every delegated operation goes through [`NumericBackend`]. Implementations
//! forward to their library, wrap the result in a `BigValue`, and turn the
//! library's failure modes into `BignumError`.
//!
//! Shared conventions:
//! - `div` and `rem` truncate toward zero; the remainder takes the sign of
//!   the dividend
//! - `powm` and `invert` use `|modulus|` and answer in `[0, |modulus|)`
//! - `gcd` is never negative

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

use crate::capabilities::{BackendKind, Capabilities};

/// Arithmetic and radix conversion offered by a backing library
pub trait NumericBackend: Send {
    /// Which library this is
    fn kind(&self) -> BackendKind;

    /// What this backend supports
    fn capabilities(&self) -> Capabilities;

    /// Parse `text` (optional leading `-`) in `base`
    fn parse(&self, text: &str, base: u32) -> Result<BigValue>;

    /// Format `value` in `base`, lowercase digits
    fn format(&self, value: &BigValue, base: u32) -> Result<String>;

    fn add(&self, a: &BigValue, b: &BigValue) -> BigValue;

    fn sub(&self, a: &BigValue, b: &BigValue) -> BigValue;

    fn mul(&self, a: &BigValue, b: &BigValue) -> BigValue;

    /// Truncating quotient; `ArithmeticError` on a zero divisor
    fn div(&self, a: &BigValue, b: &BigValue) -> Result<BigValue>;

    /// Truncating remainder; `ArithmeticError` on a zero divisor
    fn rem(&self, a: &BigValue, b: &BigValue) -> Result<BigValue>;

    fn neg(&self, a: &BigValue) -> BigValue;

    fn abs(&self, a: &BigValue) -> BigValue;

    fn pow(&self, base: &BigValue, exponent: u32) -> BigValue;

    /// `base^exponent mod |modulus|`
    fn powm(&self, base: &BigValue, exponent: &BigValue, modulus: &BigValue) -> Result<BigValue>;

    fn gcd(&self, a: &BigValue, b: &BigValue) -> BigValue;

    /// Modular inverse in `[0, |modulus|)`
    fn invert(&self, a: &BigValue, modulus: &BigValue) -> Result<BigValue>;

    /// Floor square root of a non-negative value
    fn sqrt(&self, a: &BigValue) -> Result<BigValue>;

    /// `k`-th root truncated toward zero
    fn root(&self, a: &BigValue, k: u32) -> Result<BigValue>;

    /// `a * 2^bits`
    fn shift_left(&self, a: &BigValue, bits: u32) -> BigValue;

    /// `a / 2^bits` truncated toward zero; the sign is kept
    fn shift_right(&self, a: &BigValue, bits: u32) -> BigValue;
}

/// Check that `text` is a well-formed numeral in `base`
///
/// Accepts one optional leading `-` followed by at least one digit valid
/// for `base` (either letter case). The caller is responsible for checking
/// that `base` itself is supported.
pub fn validate_numeral(text: &str, base: u32) -> Result<()> {
    if !(2..=36).contains(&base) {
        return Err(BignumError::parse(base, "base must be between 2 and 36"));
    }
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return Err(BignumError::parse(base, "no digits"));
    }
    if let Some(bad) = digits.chars().find(|c| c.to_digit(base).is_none()) {
        return Err(BignumError::parse(base, format!("invalid digit {:?}", bad)));
    }
    Ok(())
}

/// Reject a base outside the backend's radix set
pub fn require_radix(capabilities: &Capabilities, base: u32) -> Result<()> {
    if capabilities.radices.contains(base) {
        Ok(())
    } else {
        Err(BignumError::parse(
            base,
            format!("base {} is not supported by the {} backend", base, capabilities.kind),
        ))
    }
}

pub(crate) fn check_divisor(divisor: &BigValue) -> Result<()> {
    if divisor.is_zero() {
        Err(BignumError::arithmetic("division by zero"))
    } else {
        Ok(())
    }
}

pub(crate) fn check_powm_arguments(exponent: &BigValue, modulus: &BigValue) -> Result<()> {
    if exponent.is_negative() {
        return Err(BignumError::invalid_argument("powm exponent must not be negative"));
    }
    if modulus.is_zero() {
        return Err(BignumError::arithmetic("powm modulus is zero"));
    }
    Ok(())
}

pub(crate) fn check_root_arguments(a: &BigValue, k: u32) -> Result<()> {
    if k == 0 {
        return Err(BignumError::invalid_argument("zeroth root is undefined"));
    }
    if a.is_negative() && k % 2 == 0 {
        return Err(BignumError::invalid_argument("even root of a negative value"));
    }
    Ok(())
}
