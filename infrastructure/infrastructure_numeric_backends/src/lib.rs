//! Infrastructure Layer: Numeric Backends
//!
//! Provides the arithmetic engines behind the handle registry. Each engine
//! implements [`NumericBackend`] and describes itself with [`Capabilities`].
//!
//! ## Overview
//!
//! The `infrastructure_numeric_backends` crate is part of the infrastructure
//! layer. Delegated arithmetic (parse, format, add through root) is answered
//! here; the bitwise bridge, the Jacobi symbol and the compact codec never
//! depend on which engine is selected.
//!
//! ## Backends
//!
//! - **[`general`](general/index.html)**: malachite, every operation, radix 2 through 36
//! - **[`restricted`](restricted/index.html)**: num-bigint, radix 2, 10 and 16, no roots
//!
//! ## See Also
//!
//! - [`entities_bignum`](../entities_bignum/index.html): `BigValue` and error types
//! - [`usecases_bignum`](../usecases_bignum/index.html): the session that owns a backend

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

pub mod backend;
pub mod capabilities;
pub mod general;
pub mod restricted;

pub use backend::{require_radix, validate_numeral, NumericBackend};
pub use capabilities::{BackendKind, Capabilities, Operation, RadixSupport};
pub use general::GeneralBackend;
pub use restricted::RestrictedBackend;

/// Construct the engine for `kind`
///
/// # Arguments
///
/// * `kind` - Which backing library to use
///
/// # Returns
///
/// A boxed backend ready to be owned by a session
pub fn backend_for(kind: BackendKind) -> Box<dyn NumericBackend> {
    match kind {
        BackendKind::General => Box::new(GeneralBackend::new()),
        BackendKind::Restricted => Box::new(RestrictedBackend::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_for_reports_kind() {
        assert_eq!(backend_for(BackendKind::General).kind(), BackendKind::General);
        assert_eq!(backend_for(BackendKind::Restricted).kind(), BackendKind::Restricted);
    }

    #[test]
    fn test_capabilities_differ() {
        let general = backend_for(BackendKind::General).capabilities();
        let restricted = backend_for(BackendKind::Restricted).capabilities();
        assert!(general.supports(Operation::Root));
        assert!(!restricted.supports(Operation::Root));
        assert!(general.radices.contains(8));
        assert!(!restricted.radices.contains(8));
    }
}
