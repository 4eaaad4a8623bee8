//! Two's Complement Buffers
//!
//! Bridges the sign-magnitude storage of `BigValue` and the fixed-width
//! two's complement byte form that bitwise operators and the mpint wire
//! format need.
//!
//! ## Layout
//!
//! Buffers are big-endian: byte 0 carries the sign bit. The minimal encoding
//! of a value is its magnitude bytes plus at most one extra leading byte
//! (`0x00` or `0xFF`) so that the top bit always states the sign.
//!
//! | value | minimal encoding |
//! |------:|------------------|
//! | 0     | `00`             |
//! | 127   | `7f`             |
//! | 128   | `00 80`          |
//! | -1    | `ff`             |
//! | -128  | `80`             |
//! | -129  | `ff 7f`          |

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

use entities_bignum::BigValue;

use crate::common::{be_bytes_to_magnitude, magnitude_to_be_bytes};

const SIGN_MASK: u8 = 0x80;

/// Transient two's complement encoding of one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwosComplementBuffer {
    bytes: Vec<u8>,
}

impl TwosComplementBuffer {
    /// Minimal encoding of `value`
    pub fn from_value(value: &BigValue) -> Self {
        let mut bytes = magnitude_to_be_bytes(value);
        if value.is_negative() {
            negate_in_place(&mut bytes);
            if bytes[0] & SIGN_MASK == 0 {
                bytes.insert(0, 0xFF);
            }
        } else if bytes.first().map_or(true, |lead| lead & SIGN_MASK != 0) {
            bytes.insert(0, 0x00);
        }
        Self { bytes }
    }

    /// Take ownership of an already encoded buffer
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encoded bytes, sign byte first
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Release the underlying bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Width in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for an empty buffer (decodes to zero)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when the sign bit of the leading byte is set
    pub fn is_negative(&self) -> bool {
        self.bytes.first().is_some_and(|lead| lead & SIGN_MASK != 0)
    }

    /// Grow to `width` bytes by replicating the sign bit
    ///
    /// Zero padding would turn a negative operand into a large positive
    /// one, so the fill byte is `0xFF` for negative buffers. Buffers already
    /// at least `width` wide are left untouched.
    pub fn sign_extend(&mut self, width: usize) {
        if self.bytes.len() >= width {
            return;
        }
        let fill = if self.is_negative() { 0xFF } else { 0x00 };
        let missing = width - self.bytes.len();
        self.bytes.splice(0..0, std::iter::repeat(fill).take(missing));
    }

    /// True for the most negative pattern of the current width (`80 00 .. 00`)
    pub fn is_minimum_negative(&self) -> bool {
        self.bytes
            .split_first()
            .is_some_and(|(lead, rest)| *lead == SIGN_MASK && rest.iter().all(|byte| *byte == 0))
    }

    /// Grow a minimum-negative pattern by one `0xFF` byte
    ///
    /// The magnitude of `80 00 .. 00` needs every bit of the buffer, leaving
    /// none for the sign in a sign-magnitude reading. After widening, the
    /// magnitude fits below the sign bit. Returns whether the buffer grew.
    pub fn widen_minimum_negative(&mut self) -> bool {
        if self.is_minimum_negative() {
            self.bytes.insert(0, 0xFF);
            true
        } else {
            false
        }
    }

    /// Decode back into sign-magnitude form
    pub fn to_value(&self) -> BigValue {
        if !self.is_negative() {
            return BigValue::from_sign_and_magnitude(false, be_bytes_to_magnitude(&self.bytes));
        }
        let mut magnitude = self.bytes.clone();
        negate_in_place(&mut magnitude);
        BigValue::from_sign_and_magnitude(true, be_bytes_to_magnitude(&magnitude))
    }
}

/// Minimal big-endian two's complement encoding of `value`
pub fn to_twos_complement(value: &BigValue) -> Vec<u8> {
    TwosComplementBuffer::from_value(value).into_bytes()
}

/// Decode a big-endian two's complement buffer of any width
///
/// An empty buffer decodes to zero.
pub fn from_twos_complement(bytes: &[u8]) -> BigValue {
    TwosComplementBuffer::from_bytes(bytes.to_vec()).to_value()
}

// Bitwise NOT plus one, over the full width. Callers never pass an all-zero
// negative pattern, so the final carry is always absorbed.
fn negate_in_place(bytes: &mut [u8]) {
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        let (sum, overflow) = (!*byte).overflowing_add(u8::from(carry));
        *byte = sum;
        carry = overflow;
    }
}
