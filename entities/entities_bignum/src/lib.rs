//! Entities Layer: Big Integer Values
//!
//! Provides the fundamental types shared by every other layer:
//! - [`BigValue`]: an arbitrary precision signed integer
//! - [`Handle`]: an opaque identifier for a registered value
//! - [`BignumError`]: the error kinds returned by all operations
//!
//! ## Architecture
//!
//! This crate has no knowledge of registries, backends or codecs. Inner
//! layers only ever see `BigValue` by reference; ownership lives in the
//! use cases layer (`usecases_bignum::ValueRegistry`).

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

pub mod big;
pub mod error;
pub mod handle;

pub use big::BigValue;
pub use error::{BignumError, Result};
pub use handle::Handle;
