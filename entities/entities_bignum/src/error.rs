//! Error Kinds
//!
//! Every fallible operation in the workspace returns [`BignumError`].
//! Nothing is retried: all operations are deterministic local computations.

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

use crate::handle::Handle;

/// Errors returned by registry, codec, backend and number theory operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BignumError {
    /// Handle was never issued or has already been destroyed
    #[error("invalid handle {0}")]
    InvalidHandle(Handle),
    /// Malformed numeral text or a base the backend does not accept
    #[error("cannot parse base {base} numeral: {reason}")]
    ParseError { base: u32, reason: String },
    /// Precondition violation, e.g. an even Jacobi modulus
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Division by zero or a non-invertible modular inverse
    #[error("arithmetic error: {0}")]
    ArithmeticError(String),
    /// Operation not offered by the selected backend
    #[error("{operation} is not supported by the {backend} backend")]
    UnsupportedOperation {
        operation: &'static str,
        backend: &'static str,
    },
}

impl BignumError {
    /// Shorthand for [`BignumError::ParseError`]
    pub fn parse(base: u32, reason: impl Into<String>) -> Self {
        Self::ParseError {
            base,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`BignumError::InvalidArgument`]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Shorthand for [`BignumError::ArithmeticError`]
    pub fn arithmetic(reason: impl Into<String>) -> Self {
        Self::ArithmeticError(reason.into())
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, BignumError>;
