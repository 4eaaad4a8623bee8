//! Primality
//!
//! Probable-prime testing and random prime generation. Small candidates
//! are settled exactly by trial division; larger ones go through
//! Solovay–Strassen rounds built on the Jacobi symbol and the backend's
//! modular exponentiation.

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

use entities_bignum::{BigValue, BignumError, Result};
use infrastructure_bignum_encoding::be_bytes_to_magnitude;
use infrastructure_numeric_backends::NumericBackend;

use crate::jacobi_symbol::jacobi;
use crate::random::RandomSource;

const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Values below this square of the next prime after 251 are decided exactly
const TRIAL_DIVISION_LIMIT: i64 = 257 * 257;

/// Rounds used when generating primes
pub const DEFAULT_ROUNDS: u32 = 25;

/// Outcome of a primality test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primality {
    Composite,
    /// Passed every round; composite with probability at most `2^-rounds`
    ProbablyPrime,
    /// Proven by trial division
    Prime,
}

impl Primality {
    pub fn is_composite(self) -> bool {
        self == Primality::Composite
    }
}

/// Test `|n|` for primality
///
/// # Arguments
///
/// * `backend` - Engine used for the modular arithmetic
/// * `random` - Source of round witnesses
/// * `n` - Candidate; the sign is ignored
/// * `rounds` - Solovay–Strassen rounds for candidates beyond trial division
pub fn probable_prime(
    backend: &dyn NumericBackend,
    random: &mut RandomSource,
    n: &BigValue,
    rounds: u32,
) -> Result<Primality> {
    let n = backend.abs(n);
    if n.compare_i64(2) == Ordering::Less {
        return Ok(Primality::Composite);
    }

    for p in SMALL_PRIMES {
        let p = BigValue::from_u64(u64::from(p));
        if n == p {
            return Ok(Primality::Prime);
        }
        if backend.rem(&n, &p)?.is_zero() {
            return Ok(Primality::Composite);
        }
    }
    if n.compare_i64(TRIAL_DIVISION_LIMIT) == Ordering::Less {
        return Ok(Primality::Prime);
    }

    let one = BigValue::from_i64(1);
    let two = BigValue::from_i64(2);
    let three = BigValue::from_i64(3);
    let n_minus_one = backend.sub(&n, &one);
    let half = backend.div(&n_minus_one, &two)?;
    // witnesses from [2, n - 2]
    let span = backend.sub(&n, &three);

    for _ in 0..rounds {
        let witness = backend.add(&random.below(&span)?, &two);
        let symbol = jacobi(&witness, &n)?;
        if symbol == 0 {
            return Ok(Primality::Composite);
        }
        let expected = if symbol == 1 { &one } else { &n_minus_one };
        if &backend.powm(&witness, &half, &n)? != expected {
            return Ok(Primality::Composite);
        }
    }
    Ok(Primality::ProbablyPrime)
}

/// Random probable prime of exactly `bits` bits
///
/// # Returns
///
/// * `Ok(BigValue)` - A value with its top bit at position `bits - 1`
/// * `Err(BignumError::InvalidArgument)` - `bits < 2`
pub fn random_prime(backend: &dyn NumericBackend, random: &mut RandomSource, bits: u64) -> Result<BigValue> {
    if bits < 2 {
        return Err(BignumError::invalid_argument(format!("no prime has {} bits", bits)));
    }
    let len = ((bits + 7) / 8) as usize;
    let top = ((bits - 1) % 8) as u32;
    loop {
        let mut bytes = random.bytes(len);
        bytes[0] &= u8::MAX >> (7 - top);
        bytes[0] |= 1 << top;
        bytes[len - 1] |= 1;
        let candidate = BigValue::from_sign_and_magnitude(false, be_bytes_to_magnitude(&bytes));
        if !probable_prime(backend, random, &candidate, DEFAULT_ROUNDS)?.is_composite() {
            return Ok(candidate);
        }
    }
}

/// Smallest probable prime strictly greater than `n`
///
/// Every value below 2 yields 2.
pub fn next_prime(backend: &dyn NumericBackend, random: &mut RandomSource, n: &BigValue) -> Result<BigValue> {
    let two = BigValue::from_i64(2);
    if n.compare(&two) == Ordering::Less {
        return Ok(two);
    }
    let mut candidate = backend.add(n, &BigValue::from_i64(1));
    if !candidate.is_bit_set(0) {
        candidate = backend.add(&candidate, &BigValue::from_i64(1));
    }
    while probable_prime(backend, random, &candidate, DEFAULT_ROUNDS)?.is_composite() {
        candidate = backend.add(&candidate, &two);
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_numeric_backends::{GeneralBackend, RestrictedBackend};

    fn test(n: i64) -> Primality {
        let mut random = RandomSource::new(Some(3));
        probable_prime(&GeneralBackend::new(), &mut random, &BigValue::from_i64(n), 20).unwrap()
    }

    fn parse(text: &str) -> BigValue {
        GeneralBackend::new().parse(text, 10).unwrap()
    }

    #[test]
    fn test_small_values_are_exact() {
        assert_eq!(test(0), Primality::Composite);
        assert_eq!(test(1), Primality::Composite);
        assert_eq!(test(2), Primality::Prime);
        assert_eq!(test(97), Primality::Prime);
        assert_eq!(test(-97), Primality::Prime);
        assert_eq!(test(91), Primality::Composite);
        assert_eq!(test(65_537), Primality::Prime);
        assert_eq!(test(1_000_003), Primality::ProbablyPrime);
        assert_eq!(test(257 * 257), Primality::Composite);
        assert_eq!(test(65_521), Primality::Prime);
    }

    #[test]
    fn test_pseudoprimes_rejected() {
        // 1373653 = 829 * 1657, 2152302898747 = 6763 * 10627 * 29947
        assert_eq!(test(1_373_653), Primality::Composite);
        assert_eq!(test(2_152_302_898_747), Primality::Composite);
        assert_eq!(test(1_000_003 * 1_000_033), Primality::Composite);
    }

    #[test]
    fn test_large_values() {
        let mersenne = parse("170141183460469231731687303715884105727");
        let composite = parse("170141183460469231731687303715884105729");
        for backend in [&GeneralBackend::new() as &dyn NumericBackend, &RestrictedBackend::new()] {
            let mut random = RandomSource::new(Some(11));
            assert_eq!(
                probable_prime(backend, &mut random, &mersenne, 20).unwrap(),
                Primality::ProbablyPrime
            );
            assert_eq!(
                probable_prime(backend, &mut random, &composite, 20).unwrap(),
                Primality::Composite
            );
        }
    }

    #[test]
    fn test_random_prime_bit_length() {
        let backend = GeneralBackend::new();
        let mut random = RandomSource::new(Some(5));
        for bits in [2u64, 8, 17, 64, 130] {
            let prime = random_prime(&backend, &mut random, bits).unwrap();
            assert_eq!(prime.bit_length(), bits);
            assert!(!probable_prime(&backend, &mut random, &prime, 20).unwrap().is_composite());
        }
        assert!(random_prime(&backend, &mut random, 1).is_err());
    }

    #[test]
    fn test_next_prime() {
        let cases: [(i64, i64); 9] = [
            (-7, 2),
            (1, 2),
            (2, 3),
            (3, 5),
            (15_313, 15_319),
            (222_919, 222_931),
            (611_939, 611_951),
            (961_748_927, 961_748_941),
            (9_987_704_933, 9_987_704_953),
        ];
        for backend in [&GeneralBackend::new() as &dyn NumericBackend, &RestrictedBackend::new()] {
            let mut random = RandomSource::new(Some(5));
            for (n, expected) in cases {
                let next = next_prime(backend, &mut random, &BigValue::from_i64(n)).unwrap();
                assert_eq!(next, BigValue::from_i64(expected), "next prime after {}", n);
            }
        }
    }
}
