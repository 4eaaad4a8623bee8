//! Buffer Codec Module
//!
//! Provides conversion between values and raw byte buffers:
//! - word-structured unsigned buffers with configurable word size,
//!   byte order within a word, and word order
//! - SSH `mpint` strings (RFC 4251 section 5): 4-byte big-endian length
//!   followed by the minimal two's complement body

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

use crate::common::{be_bytes_to_magnitude, magnitude_to_be_bytes};
use crate::twos_complement::{from_twos_complement, to_twos_complement};

const MPINT_LENGTH_BYTES: usize = 4;

/// Byte order inside one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Most significant byte first
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// Order of the words themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
    /// Most significant word first
    #[default]
    Forward,
    /// Least significant word first
    Backward,
}

/// Layout of an unsigned buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Byte order within each word
    pub endian: Endian,
    /// Word size in bytes
    pub size: usize,
    /// Word order
    pub order: WordOrder,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            size: 1,
            order: WordOrder::Forward,
        }
    }
}

impl BufferOptions {
    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BignumError::invalid_argument("word size must be at least one byte"));
        }
        Ok(())
    }
}

/// Buffer codec
pub struct BufferCodec;

impl BufferCodec {
    /// Interpret a buffer as an unsigned value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the word size is zero or the buffer
    /// length is not a multiple of it.
    pub fn from_buffer(buffer: &[u8], options: &BufferOptions) -> Result<BigValue> {
        options.validate()?;
        if buffer.len() % options.size != 0 {
            return Err(BignumError::invalid_argument(format!(
                "buffer length ({}) must be a multiple of size ({})",
                buffer.len(),
                options.size
            )));
        }

        let mut words: Vec<Vec<u8>> = buffer
            .chunks(options.size)
            .map(|word| match options.endian {
                Endian::Big => word.to_vec(),
                Endian::Little => word.iter().rev().copied().collect(),
            })
            .collect();
        if options.order == WordOrder::Backward {
            words.reverse();
        }

        Ok(BigValue::from_sign_and_magnitude(false, be_bytes_to_magnitude(&words.concat())))
    }

    /// Write a non-negative value as a buffer
    ///
    /// The buffer holds the fewest whole words that fit the magnitude; zero
    /// is one zero word.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for negative values or a zero word size.
    pub fn to_buffer(value: &BigValue, options: &BufferOptions) -> Result<Vec<u8>> {
        options.validate()?;
        if value.is_negative() {
            return Err(BignumError::invalid_argument(
                "negative values have no unsigned buffer form",
            ));
        }

        let magnitude = magnitude_to_be_bytes(value);
        let word_count = magnitude.len().div_ceil(options.size).max(1);
        let mut padded = vec![0u8; word_count * options.size - magnitude.len()];
        padded.extend_from_slice(&magnitude);

        let mut words: Vec<&[u8]> = padded.chunks(options.size).collect();
        if options.order == WordOrder::Backward {
            words.reverse();
        }

        let mut buffer = Vec::with_capacity(padded.len());
        for word in words {
            match options.endian {
                Endian::Big => buffer.extend_from_slice(word),
                Endian::Little => buffer.extend(word.iter().rev()),
            }
        }
        Ok(buffer)
    }

    /// Encode as an SSH mpint string
    ///
    /// Zero has an empty body. Negative values are two's complement.
    pub fn to_mpint(value: &BigValue) -> Vec<u8> {
        let body = if value.is_zero() {
            Vec::new()
        } else {
            to_twos_complement(value)
        };
        let mut encoded = Vec::with_capacity(MPINT_LENGTH_BYTES + body.len());
        encoded.extend_from_slice(&(body.len() as u32).to_be_bytes());
        encoded.extend_from_slice(&body);
        encoded
    }

    /// Decode an SSH mpint string
    ///
    /// # Returns
    ///
    /// * `Ok((value, bytes_consumed))` - Decoded value and bytes read
    /// * `Err(InvalidArgument)` - Input shorter than its declared length
    pub fn from_mpint(data: &[u8]) -> Result<(BigValue, usize)> {
        let Some(header) = data.get(..MPINT_LENGTH_BYTES) else {
            return Err(BignumError::invalid_argument("mpint shorter than its length field"));
        };
        let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        let end = MPINT_LENGTH_BYTES + length;
        let Some(body) = data.get(MPINT_LENGTH_BYTES..end) else {
            return Err(BignumError::invalid_argument(format!(
                "mpint declares {} body bytes but only {} are present",
                length,
                data.len() - MPINT_LENGTH_BYTES
            )));
        };
        Ok((from_twos_complement(body), end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(endian: Endian, size: usize, order: WordOrder) -> BufferOptions {
        BufferOptions { endian, size, order }
    }

    #[test]
    fn test_from_buffer_default_is_big_endian() {
        let value = BufferCodec::from_buffer(&[0x01, 0x02, 0x03], &BufferOptions::default()).unwrap();
        assert_eq!(value, BigValue::from_i64(0x010203));
    }

    #[test]
    fn test_from_buffer_little_endian_words() {
        let opts = options(Endian::Little, 2, WordOrder::Forward);
        let value = BufferCodec::from_buffer(&[0x02, 0x01, 0x04, 0x03], &opts).unwrap();
        assert_eq!(value, BigValue::from_i64(0x01020304));
    }

    #[test]
    fn test_from_buffer_backward_order() {
        let opts = options(Endian::Big, 2, WordOrder::Backward);
        let value = BufferCodec::from_buffer(&[0x03, 0x04, 0x01, 0x02], &opts).unwrap();
        assert_eq!(value, BigValue::from_i64(0x01020304));
    }

    #[test]
    fn test_from_buffer_rejects_partial_word() {
        let opts = options(Endian::Big, 4, WordOrder::Forward);
        let err = BufferCodec::from_buffer(&[1, 2, 3], &opts).unwrap_err();
        assert!(matches!(err, BignumError::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_word_size_is_rejected() {
        let opts = options(Endian::Big, 0, WordOrder::Forward);
        assert!(BufferCodec::from_buffer(&[], &opts).is_err());
        assert!(BufferCodec::to_buffer(&BigValue::zero(), &opts).is_err());
    }

    #[test]
    fn test_to_buffer_pads_to_whole_words() {
        let opts = options(Endian::Big, 4, WordOrder::Forward);
        let buffer = BufferCodec::to_buffer(&BigValue::from_i64(0x010203), &opts).unwrap();
        assert_eq!(buffer, vec![0x00, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_to_buffer_zero_is_one_word() {
        let opts = options(Endian::Little, 2, WordOrder::Forward);
        assert_eq!(BufferCodec::to_buffer(&BigValue::zero(), &opts).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_to_buffer_layouts() {
        let value = BigValue::from_i64(0x01020304);
        let little = options(Endian::Little, 2, WordOrder::Forward);
        assert_eq!(BufferCodec::to_buffer(&value, &little).unwrap(), vec![0x02, 0x01, 0x04, 0x03]);
        let backward = options(Endian::Big, 2, WordOrder::Backward);
        assert_eq!(BufferCodec::to_buffer(&value, &backward).unwrap(), vec![0x03, 0x04, 0x01, 0x02]);
    }

    #[test]
    fn test_to_buffer_rejects_negative() {
        let err = BufferCodec::to_buffer(&BigValue::from_i64(-1), &BufferOptions::default()).unwrap_err();
        assert!(matches!(err, BignumError::InvalidArgument(_)));
    }

    #[test]
    fn test_mpint_known_vectors() {
        // RFC 4251 section 5 examples
        assert_eq!(BufferCodec::to_mpint(&BigValue::zero()), vec![0, 0, 0, 0]);
        assert_eq!(BufferCodec::to_mpint(&BigValue::from_i64(0x80)), vec![0, 0, 0, 2, 0x00, 0x80]);
        assert_eq!(BufferCodec::to_mpint(&BigValue::from_i64(-0x1234)), vec![0, 0, 0, 2, 0xed, 0xcc]);
        assert_eq!(BufferCodec::to_mpint(&BigValue::from_i64(-0xdeadbeef)), vec![0, 0, 0, 5, 0xff, 0x21, 0x52, 0x41, 0x11]);
    }

    #[test]
    fn test_from_mpint() {
        let (value, consumed) = BufferCodec::from_mpint(&[0, 0, 0, 2, 0xed, 0xcc, 0x99]).unwrap();
        assert_eq!(value, BigValue::from_i64(-0x1234));
        assert_eq!(consumed, 6);

        let (zero, consumed) = BufferCodec::from_mpint(&[0, 0, 0, 0]).unwrap();
        assert!(zero.is_zero());
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_from_mpint_truncated() {
        assert!(BufferCodec::from_mpint(&[0, 0, 0]).is_err());
        assert!(BufferCodec::from_mpint(&[0, 0, 0, 3, 0x01]).is_err());
    }
}
