//! Infrastructure Layer: Bignum Encoding
//!
//! Provides byte-level encodings of big integers. Every conversion between
//! the sign-magnitude `BigValue` and an external byte layout lives here.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure
//! layer. It holds no state: every function is a pure conversion.
//!
//! ## Codecs
//!
//! - **[`twos_complement`](twos_complement/index.html)**: fixed-width two's
//!   complement buffers with sign extension and minimum-negative widening.
//!   Used by the bitwise bridge.
//!
//! - **[`compact_codec`](compact_codec/index.html)**: 32-bit compact
//!   (size + sign + 3-byte mantissa) difficulty encoding.
//!
//! - **[`buffer_codec`](buffer_codec/index.html)**: word-structured unsigned
//!   buffers and SSH mpint strings.
//!
//! ## See Also
//!
//! - [`entities_bignum`](../entities_bignum/index.html): `BigValue` and error types

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

mod common;

pub mod buffer_codec;
pub mod compact_codec;
pub mod twos_complement;

pub use buffer_codec::{BufferCodec, BufferOptions, Endian, WordOrder};
pub use compact_codec::{CompactBits, CompactCodec};
pub use twos_complement::{from_twos_complement, to_twos_complement, TwosComplementBuffer};

// Re-export byte conversion helpers for in-memory representations
pub use common::{be_bytes_to_magnitude, bytes_to_integer, integer_to_bytes, magnitude_to_be_bytes};
