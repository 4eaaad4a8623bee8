//! Common Encoding/Decoding Utilities
//!
//! Provides shared helpers for moving between a `BigValue` magnitude and raw
//! bytes. Every codec in this crate builds on these functions.
//!
//! ## Overview
//!
//! Magnitudes are extracted with malachite's base-2^8 digit conversion, so
//! no division loop is involved. Two byte orders are offered:
//! - little-endian (`integer_to_bytes` / `bytes_to_integer`), zero as `[0]`
//! - big-endian (`magnitude_to_be_bytes` / `be_bytes_to_magnitude`), zero as
//!   an empty vector, which is what the two's complement and compact codecs
//!   want

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
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::Natural;

const BITS_PER_BYTE: u64 = 8;

/// Extract the magnitude bytes (little-endian) and sign of a value
///
/// # Arguments
///
/// * `value` - The value to split
///
/// # Returns
///
/// * `(bytes, is_negative)` - Byte vector (little-endian, zero as `[0]`) and sign flag
pub fn integer_to_bytes(value: &BigValue) -> (Vec<u8>, bool) {
    let mut bytes: Vec<u8> =
        <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_asc(&value.magnitude(), BITS_PER_BYTE);
    if bytes.is_empty() {
        bytes.push(0);
    }
    (bytes, value.is_negative())
}

/// Rebuild a value from little-endian magnitude bytes and a sign
///
/// # Arguments
///
/// * `bytes` - Magnitude, least significant byte first
/// * `is_negative` - Whether the value is negative
///
/// # Returns
///
/// The reconstructed value; a zero magnitude is always non-negative
pub fn bytes_to_integer(bytes: &[u8], is_negative: bool) -> BigValue {
    let magnitude =
        <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(BITS_PER_BYTE, bytes.iter().copied())
            .unwrap_or(Natural::ZERO);
    BigValue::from_sign_and_magnitude(is_negative, magnitude)
}

/// Magnitude bytes, most significant first, without leading zeros
///
/// Zero yields an empty vector.
pub fn magnitude_to_be_bytes(value: &BigValue) -> Vec<u8> {
    <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_desc(&value.magnitude(), BITS_PER_BYTE)
}

/// Interpret big-endian bytes as an unsigned magnitude
///
/// Leading zero bytes are allowed and ignored.
pub fn be_bytes_to_magnitude(bytes: &[u8]) -> Natural {
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(BITS_PER_BYTE, bytes.iter().copied())
        .unwrap_or(Natural::ZERO)
}
