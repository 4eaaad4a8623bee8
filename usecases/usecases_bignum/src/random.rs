//! Random Source
//!
//! Random state owned by a session. The generator is seeded on first use,
//! from the configured seed when there is one and from system entropy
//! otherwise, and never re-seeded afterwards.

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

use std::cmp::Ordering;

use entities_bignum::{BigValue, BignumError, Result};
use infrastructure_bignum_encoding::be_bytes_to_magnitude;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

#[derive(Debug)]
pub struct RandomSource {
    seed: Option<u64>,
    rng: Option<StdRng>,
}

impl RandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed, rng: None }
    }

    /// True once the generator has been seeded
    pub fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }

    fn rng(&mut self) -> &mut StdRng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| {
            debug!(seeded = seed.is_some(), "initializing random source");
            match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            }
        })
    }

    /// `len` uniformly random bytes
    pub fn bytes(&mut self, len: usize) -> Vec<u8> {
        let mut buffer = vec![0u8; len];
        self.rng().fill_bytes(&mut buffer);
        buffer
    }

    /// Uniform value in `[0, bound)` by rejection sampling
    ///
    /// # Returns
    ///
    /// * `Ok(BigValue)` - The sample
    /// * `Err(BignumError::InvalidArgument)` - `bound` is not positive
    pub fn below(&mut self, bound: &BigValue) -> Result<BigValue> {
        if bound.is_negative() || bound.is_zero() {
            return Err(BignumError::invalid_argument(format!("random bound {} is not positive", bound)));
        }
        let bits = bound.bit_length();
        let len = ((bits + 7) / 8) as usize;
        let top_mask = match bits % 8 {
            0 => 0xFF,
            used => (1u8 << used) - 1,
        };
        let limit = bound.magnitude();
        loop {
            let mut candidate = self.bytes(len);
            candidate[0] &= top_mask;
            let magnitude = be_bytes_to_magnitude(&candidate);
            if magnitude < limit {
                return Ok(BigValue::from_sign_and_magnitude(false, magnitude));
            }
        }
    }

    /// Uniform value in `[lo, hi)`
    ///
    /// # Arguments
    ///
    /// * `lo` - Inclusive lower end, may be negative
    /// * `hi` - Exclusive upper end
    ///
    /// # Returns
    ///
    /// * `Ok(BigValue)` - The sample
    /// * `Err(BignumError::InvalidArgument)` - `hi` is not above `lo`
    pub fn range(&mut self, lo: &BigValue, hi: &BigValue) -> Result<BigValue> {
        if hi.compare(lo) != Ordering::Greater {
            return Err(BignumError::invalid_argument(format!("random range [{}, {}) is empty", lo, hi)));
        }
        let width = BigValue::from_integer(hi.as_integer() - lo.as_integer());
        let offset = self.below(&width)?;
        Ok(BigValue::from_integer(offset.into_integer() + lo.as_integer()))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(None)
    }
}
