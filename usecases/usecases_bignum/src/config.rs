//! Session Configuration
//!
//! Selects the numeric backend and the random seed for a session.
//!
//! ## Environment
//!
//! - `BIGNUM_BACKEND`: `general` or `restricted`
//! - `BIGNUM_RNG_SEED`: unsigned 64-bit seed; unset means system entropy

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

use std::env;

use entities_bignum::{BignumError, Result};
use infrastructure_numeric_backends::BackendKind;

pub const BACKEND_VAR: &str = "BIGNUM_BACKEND";
pub const RNG_SEED_VAR: &str = "BIGNUM_RNG_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Backing numeric library
    pub backend: BackendKind,
    /// Fixed seed for reproducible random values
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(backend: BackendKind) -> Self {
        Self { backend, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Read the configuration from the process environment
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Returns
    ///
    /// * `Err(BignumError::InvalidArgument)` - A variable is set to an
    ///   unrecognised value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(backend) = lookup(BACKEND_VAR) {
            config.backend = backend.parse()?;
        }
        if let Some(seed) = lookup(RNG_SEED_VAR) {
            let seed = seed.trim().parse::<u64>().map_err(|e| {
                BignumError::invalid_argument(format!("{} {:?}: {}", RNG_SEED_VAR, seed, e))
            })?;
            config.rng_seed = Some(seed);
        }
        Ok(config)
    }
}
