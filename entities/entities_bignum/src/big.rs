//! Big Integer Values
//!
//! Provides the arbitrary precision signed integer every operation works on.
//!
//! This module uses the `malachite` crate. A malachite `Integer` is stored
//! as a sign plus an unbounded `Natural` magnitude, so zero is always
//! non-negative and a negative zero cannot be constructed.

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
use std::fmt;

use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::logic::traits::{BitAccess, SignificantBits};
use malachite::{Integer, Natural};

/// Arbitrary precision signed integer
///
/// Wraps malachite's `Integer`. Values are immutable from the point of view
/// of every operation except the registry's compact decode, which replaces
/// a value wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigValue {
    value: Integer,
}

impl BigValue {
    /// The additive identity
    pub fn zero() -> Self {
        Self::default()
    }

    /// Create a value from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a value from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a value from a sign and a magnitude
    ///
    /// A zero magnitude always yields the non-negative zero, whatever the
    /// requested sign.
    pub fn from_sign_and_magnitude(negative: bool, magnitude: Natural) -> Self {
        let value = Integer::from(magnitude);
        Self {
            value: if negative { -value } else { value },
        }
    }

    /// Create from Integer (for backend use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Get the internal Integer value (for backend use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Consume the value, returning the internal Integer
    pub fn into_integer(self) -> Integer {
        self.value
    }

    /// Absolute value as a `Natural`
    pub fn magnitude(&self) -> Natural {
        UnsignedAbs::unsigned_abs(&self.value)
    }

    /// Convert to i64, or `None` when out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64, or `None` when negative or out of range
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// True for values strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < Integer::from(0)
    }

    /// True for the additive identity
    pub fn is_zero(&self) -> bool {
        self.value == Integer::from(0)
    }

    /// Number of significant bits of the magnitude (0 for zero)
    pub fn bit_length(&self) -> u64 {
        (&self.value).significant_bits()
    }

    /// Test one bit of the value
    ///
    /// Negative values answer with two's complement semantics, as if
    /// infinitely sign extended: `(-1).is_bit_set(1000)` is true.
    pub fn is_bit_set(&self, index: u64) -> bool {
        self.value.get_bit(index)
    }

    /// Three-way signed comparison
    pub fn compare(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Three-way comparison against a native integer
    pub fn compare_i64(&self, other: i64) -> Ordering {
        self.value.cmp(&Integer::from(other))
    }
}

impl fmt::Display for BigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<i64> for BigValue {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigValue {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigValue {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<Integer> for BigValue {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
