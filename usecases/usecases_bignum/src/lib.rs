//! Use Cases Layer: Bignum
//!
//! Handle-level big integer operations: the value registry, the sign-aware
//! bitwise bridge, the Jacobi symbol, compact values, primality and the
//! session that ties them to a numeric backend.
//!
//! ## Overview
//!
//! The `usecases_bignum` crate is part of the use cases layer. Every value
//! lives in a [`ValueRegistry`] and is addressed by an opaque `Handle`.
//! Operations read their operands from the registry and register their
//! result under a new handle.
//!
//! ## Modules
//!
//! - **[`value_registry`](value_registry/index.html)**: arena of live values with never-reused handles
//! - **[`bitwise_bridge`](bitwise_bridge/index.html)**: AND, OR, XOR with two's-complement semantics
//! - **[`jacobi_symbol`](jacobi_symbol/index.html)**: iterative Jacobi symbol
//! - **[`compact`](compact/index.html)**: in-place compact decoding and compact encoding
//! - **[`primality`](primality/index.html)**: Solovay–Strassen testing and random primes
//! - **[`random`](random/index.html)**: lazily seeded random source
//! - **[`config`](config/index.html)**: backend and seed selection
//! - **[`session`](session/index.html)**: the handle-level surface
//!
//! ## Concurrency
//!
//! Nothing here is synchronized. A session is a plain owned value; callers
//! sharing one across threads wrap it in a mutex, as the API facades do.
//!
//! ## See Also
//!
//! - [`infrastructure_numeric_backends`](../infrastructure_numeric_backends/index.html): delegated arithmetic
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): byte codecs
//! - [`api_facades`](../api_facades/index.html): process-wide session

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

pub mod bitwise_bridge;
pub mod compact;
pub mod config;
pub mod jacobi_symbol;
pub mod primality;
pub mod random;
pub mod session;
pub mod value_registry;

pub use bitwise_bridge::BitwiseOp;
pub use config::SessionConfig;
pub use primality::Primality;
pub use random::RandomSource;
pub use session::BignumSession;
pub use value_registry::ValueRegistry;

pub use entities_bignum::{BigValue, BignumError, Handle, Result};
