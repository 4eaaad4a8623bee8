//! Backend Capabilities
//!
//! Describes what a numeric backend can do, so callers detect gaps at the
//! boundary instead of discovering them mid-computation.

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

use std::fmt;
use std::str::FromStr;

use entities_bignum::BignumError;

/// Selects one of the backing numeric libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// malachite: every operation, radix 2 through 36
    #[default]
    General,
    /// num-bigint: radix 2, 10 and 16 only; no roots
    Restricted,
}

impl BackendKind {
    /// Short lowercase name used in messages and configuration
    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::General => "general",
            BackendKind::Restricted => "restricted",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = BignumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(BackendKind::General),
            "restricted" => Ok(BackendKind::Restricted),
            other => Err(BignumError::invalid_argument(format!("unknown backend {:?}", other))),
        }
    }
}

/// Delegated operations a backend may or may not offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Parse,
    Format,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    Abs,
    Pow,
    PowMod,
    Gcd,
    Invert,
    Sqrt,
    Root,
    ShiftLeft,
    ShiftRight,
}

impl Operation {
    /// Operation name as reported in `UnsupportedOperation`
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Parse => "parse",
            Operation::Format => "format",
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Rem => "rem",
            Operation::Neg => "neg",
            Operation::Abs => "abs",
            Operation::Pow => "pow",
            Operation::PowMod => "powm",
            Operation::Gcd => "gcd",
            Operation::Invert => "invert",
            Operation::Sqrt => "sqrt",
            Operation::Root => "root",
            Operation::ShiftLeft => "shift_left",
            Operation::ShiftRight => "shift_right",
        }
    }
}

/// Radices accepted by parse and format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixSupport {
    /// Every radix in `min..=max`
    Range { min: u32, max: u32 },
    /// Only the listed radices
    Listed(&'static [u32]),
}

impl RadixSupport {
    /// True if `base` is accepted
    pub fn contains(&self, base: u32) -> bool {
        match self {
            RadixSupport::Range { min, max } => (*min..=*max).contains(&base),
            RadixSupport::Listed(radices) => radices.contains(&base),
        }
    }
}

/// Capability description of one backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Backend described
    pub kind: BackendKind,
    /// Radices for parse and format
    pub radices: RadixSupport,
    /// Operations this backend refuses with `UnsupportedOperation`
    pub missing: &'static [Operation],
}

impl Capabilities {
    /// True if `operation` is available
    pub fn supports(&self, operation: Operation) -> bool {
        !self.missing.contains(&operation)
    }

    /// Check `operation`, producing the boundary error when missing
    pub fn require(&self, operation: Operation) -> Result<(), BignumError> {
        if self.supports(operation) {
            Ok(())
        } else {
            Err(BignumError::UnsupportedOperation {
                operation: operation.name(),
                backend: self.kind.name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("general".parse::<BackendKind>().unwrap(), BackendKind::General);
        assert_eq!(" Restricted ".parse::<BackendKind>().unwrap(), BackendKind::Restricted);
        assert!("gmp".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_radix_support() {
        let range = RadixSupport::Range { min: 2, max: 36 };
        assert!(range.contains(2));
        assert!(range.contains(36));
        assert!(!range.contains(37));
        assert!(!range.contains(1));

        let listed = RadixSupport::Listed(&[2, 10, 16]);
        assert!(listed.contains(16));
        assert!(!listed.contains(8));
    }

    #[test]
    fn test_require_reports_operation_and_backend() {
        let caps = Capabilities {
            kind: BackendKind::Restricted,
            radices: RadixSupport::Listed(&[10]),
            missing: &[Operation::Sqrt],
        };
        assert!(caps.require(Operation::Add).is_ok());
        assert_eq!(
            caps.require(Operation::Sqrt),
            Err(BignumError::UnsupportedOperation {
                operation: "sqrt",
                backend: "restricted",
            })
        );
    }
}
