//! Compact Values
//!
//! Moves 32-bit compact encodings in and out of the registry.
//!
//! [`decode_into`] is the one registry operation that mutates a value in
//! place instead of registering a new one: the target handle keeps its
//! number and its previous value is discarded.

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

use entities_bignum::{Handle, Result};
use infrastructure_bignum_encoding::{CompactBits, CompactCodec};
use tracing::debug;

use crate::value_registry::ValueRegistry;

/// Overwrite the value at `handle` with the decoding of `bits`
///
/// Decoding depends only on `bits`, so repeating the call leaves the same
/// value behind.
///
/// # Arguments
///
/// * `registry` - Registry holding the target
/// * `handle` - Live handle to overwrite
/// * `bits` - Compact encoding
///
/// # Returns
///
/// * `Ok(())` - The value was replaced
/// * `Err(BignumError::InvalidHandle)` - `handle` is not live
pub fn decode_into(registry: &mut ValueRegistry, handle: Handle, bits: u32) -> Result<()> {
    let value = CompactCodec::decode(CompactBits::from_raw(bits));
    registry.replace(handle, value)?;
    debug!(%handle, bits = format_args!("{:#010x}", bits), "decoded compact value in place");
    Ok(())
}

/// Compact encoding of the value at `handle`
///
/// Precision beyond three significant bytes is truncated.
pub fn encode_from(registry: &ValueRegistry, handle: Handle) -> Result<u32> {
    Ok(CompactCodec::encode(registry.get(handle)?)?.raw())
}
