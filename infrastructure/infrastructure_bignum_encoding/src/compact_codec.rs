//! Compact Codec Module
//!
//! Provides the 32-bit compact encoding used by proof-of-work difficulty
//! fields: a floating-point-like packing of a big integer.
//!
//! ## Format
//!
//! ```text
//!  31        24 23 22                      0
//! +------------+--+-------------------------+
//! |    size    |s |  mantissa (3 bytes)     |
//! +------------+--+-------------------------+
//! ```
//!
//! - `size`: byte length of the magnitude
//! - `s`: sign flag
//! - mantissa: the 3 most significant magnitude bytes, left-padded with zero
//!
//! Decoding is exact. Encoding is lossy: magnitude bytes beyond the first
//! three are truncated (not rounded), so only values already representable
//! in the format survive `decode(encode(x)) == x`.

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
use malachite::Natural;

use crate::common::magnitude_to_be_bytes;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const MANTISSA_BYTES: u32 = 3;
const MAX_SIZE: usize = 0xFF;

/// Packed 32-bit compact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactBits(u32);

impl CompactBits {
    /// Wrap raw compact bits
    pub const fn from_raw(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw compact bits
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Byte length of the encoded magnitude
    pub const fn size(self) -> u32 {
        self.0 >> 24
    }

    /// Sign flag
    pub const fn is_negative(self) -> bool {
        self.0 & SIGN_BIT != 0
    }

    /// Low 23 mantissa bits
    pub const fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }
}

impl From<u32> for CompactBits {
    fn from(bits: u32) -> Self {
        Self::from_raw(bits)
    }
}

/// Compact codec
pub struct CompactCodec;

impl CompactCodec {
    /// Unpack compact bits into a value
    ///
    /// A set sign flag on a zero magnitude yields plain zero.
    pub fn decode(bits: CompactBits) -> BigValue {
        let size = bits.size();
        let word = bits.mantissa();
        let magnitude = if size <= MANTISSA_BYTES {
            Natural::from(word >> (8 * (MANTISSA_BYTES - size)))
        } else {
            Natural::from(word) << u64::from(8 * (size - MANTISSA_BYTES))
        };
        BigValue::from_sign_and_magnitude(bits.is_negative(), magnitude)
    }

    /// Pack a value into compact bits (lossy)
    ///
    /// Keeps the three most significant magnitude bytes. When the top
    /// mantissa bit would collide with the sign flag, the mantissa is
    /// shifted down one byte and the size bumped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the magnitude is too long for the
    /// one-byte size field.
    pub fn encode(value: &BigValue) -> Result<CompactBits> {
        let bytes = magnitude_to_be_bytes(value);
        if bytes.len() > MAX_SIZE {
            return Err(BignumError::invalid_argument(format!(
                "magnitude of {} bytes exceeds the compact size field",
                bytes.len()
            )));
        }

        let mut size = bytes.len() as u32;
        let mut word = bytes
            .iter()
            .take(MANTISSA_BYTES as usize)
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
        if size < MANTISSA_BYTES {
            word <<= 8 * (MANTISSA_BYTES - size);
        }
        if word & SIGN_BIT != 0 {
            if size == MAX_SIZE as u32 {
                return Err(BignumError::invalid_argument(
                    "magnitude does not fit the compact size field after normalisation",
                ));
            }
            word >>= 8;
            size += 1;
        }

        let mut bits = (size << 24) | word;
        if value.is_negative() && word != 0 {
            bits |= SIGN_BIT;
        }
        Ok(CompactBits(bits))
    }
}
