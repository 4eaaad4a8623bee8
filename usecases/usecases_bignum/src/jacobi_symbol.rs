//! Jacobi Symbol
//!
//! Iterative Jacobi symbol J(a, n) for odd `n >= 3` and `0 <= a < n`,
//! following the quadratic reciprocity recurrence (Handbook of Applied
//! Cryptography, algorithm 2.149) without recursion.

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

use std::cmp::Ordering;

use entities_bignum::{BigValue, BignumError, Handle, Result};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::BitAccess;
use malachite::Natural;

use crate::value_registry::ValueRegistry;

/// Low three bits of `n`
fn mod_8(n: &Natural) -> u8 {
    (0..3).fold(0, |acc, bit| acc | (u8::from(n.get_bit(bit)) << bit))
}

fn check_arguments(a: &BigValue, n: &BigValue) -> Result<()> {
    if !n.is_bit_set(0) {
        return Err(BignumError::invalid_argument(format!("jacobi modulus {} is even", n)));
    }
    if n.compare_i64(3) == Ordering::Less {
        return Err(BignumError::invalid_argument(format!("jacobi modulus {} is below 3", n)));
    }
    if a.is_negative() {
        return Err(BignumError::invalid_argument(format!("jacobi operand {} is negative", a)));
    }
    if a.compare(n) != Ordering::Less {
        return Err(BignumError::invalid_argument(format!(
            "jacobi operand {} is not below modulus {}",
            a, n
        )));
    }
    Ok(())
}

/// Compute J(a, n)
///
/// # Arguments
///
/// * `a` - Operand, `0 <= a < n`
/// * `n` - Odd modulus, `n >= 3`
///
/// # Returns
///
/// * `Ok(-1 | 0 | 1)` - The symbol; `0` exactly when `gcd(a, n) > 1`
/// * `Err(BignumError::InvalidArgument)` - Even modulus, modulus below 3,
///   negative operand, or operand not below the modulus
///
/// # Examples
///
/// ```
/// use entities_bignum::BigValue;
/// use usecases_bignum::jacobi_symbol::jacobi;
///
/// assert_eq!(jacobi(&BigValue::from_i64(2), &BigValue::from_i64(3)).unwrap(), -1);
/// assert!(jacobi(&BigValue::from_i64(1), &BigValue::from_i64(4)).is_err());
/// ```
pub fn jacobi(a: &BigValue, n: &BigValue) -> Result<i8> {
    check_arguments(a, n)?;

    let mut a1 = a.magnitude();
    let mut n1 = n.magnitude();
    let mut sign: i8 = 1;

    loop {
        // Only reachable after a reduction with a common factor, or for a = 0
        if a1 == Natural::ZERO {
            return Ok(0);
        }
        if a1 == Natural::ONE {
            return Ok(sign);
        }

        let shift = a1.trailing_zeros().unwrap_or(0);
        let odd = a1 >> shift;
        let n_low = mod_8(&n1);

        if shift % 2 == 1 && (n_low == 3 || n_low == 5) {
            sign = -sign;
        }
        if n_low % 4 == 3 && mod_8(&odd) % 4 == 3 {
            sign = -sign;
        }
        if odd == Natural::ONE {
            return Ok(sign);
        }

        a1 = &n1 % &odd;
        n1 = odd;
    }
}

/// J(a, n) for two registered values
pub fn jacobi_symbol(registry: &ValueRegistry, a: Handle, n: Handle) -> Result<i8> {
    jacobi(registry.get(a)?, registry.get(n)?)
}
