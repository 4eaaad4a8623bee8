//! Bitwise Bridge
//!
//! AND, OR and XOR over signed big integers with the semantics of native
//! two's-complement integers.
//!
//! Values are stored as sign and magnitude, so every operation takes the
//! same path through the explicit byte form:
//!
//! 1. encode each operand as a minimal big-endian two's-complement buffer
//! 2. sign-extend the shorter buffer to the longer one's width
//! 3. combine eight-byte words for the bulk, then the leftover bytes
//! 4. widen a result that is exactly the minimum negative pattern by one
//!    `0xFF` byte
//! 5. decode back to sign and magnitude
//!
//! There is no fast path for two non-negative operands; the byte form is
//! used unconditionally and the result sign is whatever the buffer implies.

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

use entities_bignum::{BigValue, Handle, Result};
use infrastructure_bignum_encoding::TwosComplementBuffer;
use tracing::trace;

use crate::value_registry::ValueRegistry;

const WORD_BYTES: usize = 8;

/// Bitwise operator applied by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

impl BitwiseOp {
    pub const fn name(self) -> &'static str {
        match self {
            BitwiseOp::And => "and",
            BitwiseOp::Or => "or",
            BitwiseOp::Xor => "xor",
        }
    }

    fn word(self, a: u64, b: u64) -> u64 {
        match self {
            BitwiseOp::And => a & b,
            BitwiseOp::Or => a | b,
            BitwiseOp::Xor => a ^ b,
        }
    }

    fn byte(self, a: u8, b: u8) -> u8 {
        match self {
            BitwiseOp::And => a & b,
            BitwiseOp::Or => a | b,
            BitwiseOp::Xor => a ^ b,
        }
    }
}

/// Combine two equal-width buffers
fn combine(op: BitwiseOp, left: &[u8], right: &[u8]) -> Vec<u8> {
    debug_assert_eq!(left.len(), right.len());
    let mut out = Vec::with_capacity(left.len());

    let left_words = left.chunks_exact(WORD_BYTES);
    let right_words = right.chunks_exact(WORD_BYTES);
    let (left_tail, right_tail) = (left_words.remainder(), right_words.remainder());

    for (l, r) in left_words.zip(right_words) {
        let mut lw = [0u8; WORD_BYTES];
        let mut rw = [0u8; WORD_BYTES];
        lw.copy_from_slice(l);
        rw.copy_from_slice(r);
        let combined = op.word(u64::from_be_bytes(lw), u64::from_be_bytes(rw));
        out.extend_from_slice(&combined.to_be_bytes());
    }
    out.extend(left_tail.iter().zip(right_tail).map(|(&l, &r)| op.byte(l, r)));
    out
}

/// Apply `op` to two values
///
/// # Arguments
///
/// * `op` - Operator to apply
/// * `a` - Left operand
/// * `b` - Right operand
///
/// # Returns
///
/// The signed result, equal to what native two's-complement integers of
/// unbounded width would produce
///
/// # Examples
///
/// ```
/// use entities_bignum::BigValue;
/// use usecases_bignum::bitwise_bridge::{apply, BitwiseOp};
///
/// let result = apply(BitwiseOp::And, &BigValue::from_i64(-6), &BigValue::from_i64(13));
/// assert_eq!(result, BigValue::from_i64(-6 & 13));
/// ```
pub fn apply(op: BitwiseOp, a: &BigValue, b: &BigValue) -> BigValue {
    let mut left = TwosComplementBuffer::from_value(a);
    let mut right = TwosComplementBuffer::from_value(b);

    let size = left.len().max(right.len());
    left.sign_extend(size);
    right.sign_extend(size);
    trace!(op = op.name(), size, "aligned operands");

    let mut result = TwosComplementBuffer::from_bytes(combine(op, left.as_bytes(), right.as_bytes()));
    if result.widen_minimum_negative() {
        trace!(op = op.name(), size = result.len(), "widened minimum negative result");
    }
    result.to_value()
}

fn apply_handles(registry: &mut ValueRegistry, op: BitwiseOp, a: Handle, b: Handle) -> Result<Handle> {
    let value = apply(op, registry.get(a)?, registry.get(b)?);
    Ok(registry.insert(value))
}

/// Bitwise AND of two registered values, registered as a new value
pub fn and(registry: &mut ValueRegistry, a: Handle, b: Handle) -> Result<Handle> {
    apply_handles(registry, BitwiseOp::And, a, b)
}

/// Bitwise OR of two registered values, registered as a new value
pub fn or(registry: &mut ValueRegistry, a: Handle, b: Handle) -> Result<Handle> {
    apply_handles(registry, BitwiseOp::Or, a, b)
}

/// Bitwise XOR of two registered values, registered as a new value
pub fn xor(registry: &mut ValueRegistry, a: Handle, b: Handle) -> Result<Handle> {
    apply_handles(registry, BitwiseOp::Xor, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bignum::BignumError;
    use proptest::prelude::*;

    fn v(x: i64) -> BigValue {
        BigValue::from_i64(x)
    }

    fn check_native(a: i64, b: i64) {
        assert_eq!(apply(BitwiseOp::And, &v(a), &v(b)), v(a & b), "{} & {}", a, b);
        assert_eq!(apply(BitwiseOp::Or, &v(a), &v(b)), v(a | b), "{} | {}", a, b);
        assert_eq!(apply(BitwiseOp::Xor, &v(a), &v(b)), v(a ^ b), "{} ^ {}", a, b);
    }

    #[test]
    fn test_every_sign_combination() {
        check_native(12, 10);
        check_native(12, -10);
        check_native(-12, 10);
        check_native(-12, -10);
    }

    #[test]
    fn test_unequal_widths_sign_extend() {
        // -1 is one byte wide; the other operand spans several words
        check_native(-1, 0x1234_5678_9abc_def0);
        check_native(0x7fff_ffff_ffff, -2);
        check_native(-0x1_0000_0000, 0xff);
        check_native(i64::MIN, -1);
    }

    #[test]
    fn test_zero_operands() {
        check_native(0, 0);
        check_native(0, -1);
        check_native(-1, 0);
    }

    #[test]
    fn test_single_byte_minimum_negative_decodes_to_minus_128() {
        // -128 & -1 = 0x80 in a one-byte buffer
        assert_eq!(apply(BitwiseOp::And, &v(-128), &v(-1)), v(-128));
        // 0x80 | 0x00 padded from -128 and 0
        assert_eq!(apply(BitwiseOp::Or, &v(-128), &v(0)), v(-128));
        // 0x7f ^ 0xff = 0x80
        assert_eq!(apply(BitwiseOp::Xor, &v(127), &v(-1)), v(-128));
    }

    #[test]
    fn test_wider_than_native() {
        // 2^100 - 1 and -(2^64) share bits 64..99
        let mut ones = vec![0x0f];
        ones.extend(std::iter::repeat(0xff).take(12));
        let all_ones = TwosComplementBuffer::from_bytes(ones).to_value();
        let minus_two_64 = TwosComplementBuffer::from_bytes(vec![0xff, 0, 0, 0, 0, 0, 0, 0, 0]).to_value();
        let and = apply(BitwiseOp::And, &all_ones, &minus_two_64);
        assert_eq!(and.bit_length(), 100);
        assert!(!and.is_bit_set(63));
        assert!(and.is_bit_set(64));
        assert!(and.is_bit_set(99));
    }

    #[test]
    fn test_registry_operations() {
        let mut registry = ValueRegistry::new();
        let a = registry.insert(v(-6));
        let b = registry.insert(v(13));
        let h = and(&mut registry, a, b).unwrap();
        assert_eq!(registry.get(h).unwrap(), &v(-6 & 13));
        let h = or(&mut registry, a, b).unwrap();
        assert_eq!(registry.get(h).unwrap(), &v(-6 | 13));
        let h = xor(&mut registry, a, b).unwrap();
        assert_eq!(registry.get(h).unwrap(), &v(-6 ^ 13));
        // operands untouched
        assert_eq!(registry.get(a).unwrap(), &v(-6));
        assert_eq!(registry.get(b).unwrap(), &v(13));
    }

    #[test]
    fn test_stale_operand() {
        let mut registry = ValueRegistry::new();
        let a = registry.insert(v(1));
        let b = registry.insert(v(2));
        registry.destroy(b).unwrap();
        assert_eq!(and(&mut registry, a, b), Err(BignumError::InvalidHandle(b)));
        assert_eq!(registry.live_count(), 1);
    }

    proptest! {
        #[test]
        fn prop_matches_native_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(apply(BitwiseOp::And, &v(a), &v(b)), v(a & b));
            prop_assert_eq!(apply(BitwiseOp::Or, &v(a), &v(b)), v(a | b));
            prop_assert_eq!(apply(BitwiseOp::Xor, &v(a), &v(b)), v(a ^ b));
        }

        #[test]
        fn prop_matches_native_small(a in any::<i8>(), b in any::<i8>()) {
            let (a, b) = (i64::from(a), i64::from(b));
            prop_assert_eq!(apply(BitwiseOp::And, &v(a), &v(b)), v(a & b));
            prop_assert_eq!(apply(BitwiseOp::Xor, &v(a), &v(b)), v(a ^ b));
        }
    }
}
