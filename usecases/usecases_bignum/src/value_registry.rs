//! Value Registry
//!
//! Owns every live `BigValue` and hands out opaque [`Handle`]s for them.
//!
//! Storage is a dense arena indexed by handle. Destroying a handle leaves a
//! tombstone in its slot, so handle validation is a single index check and
//! a handle number is never issued twice for the lifetime of the registry.
//! A registry may start numbering above zero, which lets a replacement
//! registry carry on where an earlier one stopped.

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

use entities_bignum::{BigValue, BignumError, Handle, Result};
use infrastructure_numeric_backends::NumericBackend;
use tracing::debug;

/// Arena of owned values addressed by handle
#[derive(Debug, Default)]
pub struct ValueRegistry {
    /// Raw number of the handle stored in `slots[0]`
    first: u64,
    /// `None` marks a destroyed handle
    slots: Vec<Option<BigValue>>,
    live: usize,
}

impl ValueRegistry {
    /// Create an empty registry; the first handle issued is `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose first handle is `first`
    ///
    /// Handles below `first` are never live in this registry. A `first`
    /// past `u32::MAX` gives a registry whose handle space is already spent.
    ///
    /// # Examples
    ///
    /// ```
    /// use usecases_bignum::ValueRegistry;
    ///
    /// let mut old = ValueRegistry::new();
    /// let stale = old.create();
    /// let mut registry = ValueRegistry::starting_at(old.next_raw());
    /// assert!(registry.create() > stale);
    /// assert!(registry.get(stale).is_err());
    /// ```
    pub fn starting_at(first: u64) -> Self {
        Self {
            first,
            ..Self::default()
        }
    }

    /// Raw number the next issued handle will carry
    pub fn next_raw(&self) -> u64 {
        self.first + self.slots.len() as u64
    }

    fn slot_index(&self, handle: Handle) -> Option<usize> {
        u64::from(handle.raw())
            .checked_sub(self.first)
            .and_then(|offset| usize::try_from(offset).ok())
    }

    /// Register a new zero value
    ///
    /// # Returns
    ///
    /// The handle of the new value
    ///
    /// # Panics
    ///
    /// Panics once `u32::MAX + 1` handles have been issued. Handles are
    /// never reused, so the handle space is a hard limit of the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use usecases_bignum::ValueRegistry;
    ///
    /// let mut registry = ValueRegistry::new();
    /// let handle = registry.create();
    /// assert!(registry.get(handle).unwrap().is_zero());
    /// ```
    pub fn create(&mut self) -> Handle {
        self.insert(BigValue::zero())
    }

    /// Register a computed value under the next handle
    ///
    /// # Panics
    ///
    /// Same handle-space limit as [`ValueRegistry::create`].
    pub fn insert(&mut self, value: BigValue) -> Handle {
        let raw = match u32::try_from(self.next_raw()) {
            Ok(raw) => raw,
            Err(_) => panic!("handle space exhausted after {} values", self.next_raw()),
        };
        let handle = Handle::from_raw(raw);
        debug!(%handle, bits = value.bit_length(), "registered value");
        self.slots.push(Some(value));
        self.live += 1;
        handle
    }

    /// Parse `text` in `base` with `backend` and register the result
    ///
    /// # Arguments
    ///
    /// * `backend` - Engine whose radix rules apply
    /// * `text` - Numeral with an optional leading `-`
    /// * `base` - Radix
    ///
    /// # Returns
    ///
    /// * `Ok(Handle)` - The new value's handle
    /// * `Err(BignumError::ParseError)` - Unsupported base or invalid digit
    pub fn create_from_digits(&mut self, backend: &dyn NumericBackend, text: &str, base: u32) -> Result<Handle> {
        let value = backend.parse(text, base)?;
        Ok(self.insert(value))
    }

    /// Borrow the value behind `handle`
    pub fn get(&self, handle: Handle) -> Result<&BigValue> {
        self.slot_index(handle)
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
            .ok_or(BignumError::InvalidHandle(handle))
    }

    /// Overwrite the value behind a live handle, returning the old value
    pub fn replace(&mut self, handle: Handle, value: BigValue) -> Result<BigValue> {
        let index = self.slot_index(handle).ok_or(BignumError::InvalidHandle(handle))?;
        let slot = self
            .slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(BignumError::InvalidHandle(handle))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Release the value behind `handle`
    ///
    /// Destroying a handle that is not live (never issued, or already
    /// destroyed) is an `InvalidHandle` error.
    pub fn destroy(&mut self, handle: Handle) -> Result<()> {
        let index = self.slot_index(handle).ok_or(BignumError::InvalidHandle(handle))?;
        let slot = self
            .slots
            .get_mut(index)
            .filter(|slot| slot.is_some())
            .ok_or(BignumError::InvalidHandle(handle))?;
        *slot = None;
        self.live -= 1;
        debug!(%handle, "destroyed value");
        Ok(())
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_ok()
    }

    /// Number of live values
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Number of handles this registry has issued, destroyed ones included
    pub fn issued_count(&self) -> usize {
        self.slots.len()
    }
}
