//! Bignum Session
//!
//! Ties a [`ValueRegistry`], a numeric backend and a [`RandomSource`]
//! together and exposes every operation at the handle level.
//!
//! Operations that produce a value register it under a fresh handle and
//! leave their operands untouched. The only exception is
//! [`BignumSession::set_compact`], which overwrites its target in place.
//!
//! Delegated operations check the backend's [`Capabilities`] first, so a
//! gap surfaces as `UnsupportedOperation` before any work is done. The
//! bitwise bridge, the Jacobi symbol and the compact codec do not depend
//! on the backend and behave identically under both.

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

use entities_bignum::{BigValue, BignumError, Handle, Result};
use infrastructure_bignum_encoding::{BufferCodec, BufferOptions};
use infrastructure_numeric_backends::{backend_for, BackendKind, Capabilities, NumericBackend, Operation};
use tracing::debug;

use crate::bitwise_bridge::{self, BitwiseOp};
use crate::compact;
use crate::config::SessionConfig;
use crate::jacobi_symbol;
use crate::primality::{self, Primality};
use crate::random::RandomSource;
use crate::value_registry::ValueRegistry;

pub struct BignumSession {
    registry: ValueRegistry,
    backend: Box<dyn NumericBackend>,
    random: RandomSource,
}

impl BignumSession {
    /// Create a session with the configured backend and seed
    ///
    /// # Examples
    ///
    /// ```
    /// use usecases_bignum::{BignumSession, SessionConfig};
    ///
    /// let mut session = BignumSession::new(SessionConfig::default());
    /// let a = session.create_from_digits("-12", 10).unwrap();
    /// let b = session.create_from_digits("a", 16).unwrap();
    /// let c = session.and(a, b).unwrap();
    /// assert_eq!(session.to_string(c, 10).unwrap(), "0");
    /// ```
    pub fn new(config: SessionConfig) -> Self {
        Self::with_backend(backend_for(config.backend), config.rng_seed)
    }

    /// Create a session whose first handle is `first_handle`
    ///
    /// Used when one session replaces another, so that handles issued by
    /// the earlier session can never name a value in this one.
    pub fn continuing_from(config: SessionConfig, first_handle: u64) -> Self {
        let mut session = Self::new(config);
        session.registry = ValueRegistry::starting_at(first_handle);
        session
    }

    /// Create a session around an already constructed backend
    pub fn with_backend(backend: Box<dyn NumericBackend>, rng_seed: Option<u64>) -> Self {
        debug!(backend = %backend.kind(), seeded = rng_seed.is_some(), "creating bignum session");
        Self {
            registry: ValueRegistry::new(),
            backend,
            random: RandomSource::new(rng_seed),
        }
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Radices and operations offered by the active backend
    pub fn capabilities(&self) -> Capabilities {
        self.backend.capabilities()
    }

    pub fn registry(&self) -> &ValueRegistry {
        &self.registry
    }

    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    fn require(&self, operation: Operation) -> Result<()> {
        self.backend.capabilities().require(operation)
    }

    fn unary<F>(&mut self, operation: Operation, a: Handle, f: F) -> Result<Handle>
    where
        F: FnOnce(&dyn NumericBackend, &BigValue) -> Result<BigValue>,
    {
        self.require(operation)?;
        let value = f(self.backend.as_ref(), self.registry.get(a)?)?;
        Ok(self.registry.insert(value))
    }

    fn binary<F>(&mut self, operation: Operation, a: Handle, b: Handle, f: F) -> Result<Handle>
    where
        F: FnOnce(&dyn NumericBackend, &BigValue, &BigValue) -> Result<BigValue>,
    {
        self.require(operation)?;
        let value = f(self.backend.as_ref(), self.registry.get(a)?, self.registry.get(b)?)?;
        Ok(self.registry.insert(value))
    }

    // Registry

    pub fn create(&mut self) -> Handle {
        self.registry.create()
    }

    pub fn create_from_i64(&mut self, value: i64) -> Handle {
        self.registry.insert(BigValue::from_i64(value))
    }

    pub fn create_from_u64(&mut self, value: u64) -> Handle {
        self.registry.insert(BigValue::from_u64(value))
    }

    /// Parse `text` in `base` under the active backend's radix rules
    pub fn create_from_digits(&mut self, text: &str, base: u32) -> Result<Handle> {
        self.require(Operation::Parse)?;
        self.registry.create_from_digits(self.backend.as_ref(), text, base)
    }

    pub fn get(&self, handle: Handle) -> Result<&BigValue> {
        self.registry.get(handle)
    }

    pub fn destroy(&mut self, handle: Handle) -> Result<()> {
        self.registry.destroy(handle)
    }

    /// Format the value at `handle` in `base`, lowercase digits
    pub fn to_string(&self, handle: Handle, base: u32) -> Result<String> {
        self.require(Operation::Format)?;
        self.backend.format(self.registry.get(handle)?, base)
    }

    // Delegated arithmetic

    pub fn add(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        self.binary(Operation::Add, a, b, |backend, x, y| Ok(backend.add(x, y)))
    }

    pub fn sub(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        self.binary(Operation::Sub, a, b, |backend, x, y| Ok(backend.sub(x, y)))
    }

    pub fn mul(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        self.binary(Operation::Mul, a, b, |backend, x, y| Ok(backend.mul(x, y)))
    }

    /// Truncating quotient
    pub fn div(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        self.binary(Operation::Div, a, b, |backend, x, y| backend.div(x, y))
    }

    /// Truncating remainder, sign of the dividend
    pub fn rem(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        self.binary(Operation::Rem, a, b, |backend, x, y| backend.rem(x, y))
    }

    pub fn neg(&mut self, a: Handle) -> Result<Handle> {
        self.unary(Operation::Neg, a, |backend, x| Ok(backend.neg(x)))
    }

    pub fn abs(&mut self, a: Handle) -> Result<Handle> {
        self.unary(Operation::Abs, a, |backend, x| Ok(backend.abs(x)))
    }

    pub fn pow(&mut self, base: Handle, exponent: u32) -> Result<Handle> {
        self.unary(Operation::Pow, base, |backend, x| Ok(backend.pow(x, exponent)))
    }

    /// `base^exponent mod |modulus|`, in `[0, |modulus|)`
    pub fn powm(&mut self, base: Handle, exponent: Handle, modulus: Handle) -> Result<Handle> {
        self.require(Operation::PowMod)?;
        let value = self.backend.powm(
            self.registry.get(base)?,
            self.registry.get(exponent)?,
            self.registry.get(modulus)?,
        )?;
        Ok(self.registry.insert(value))
    }

    pub fn gcd(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        self.binary(Operation::Gcd, a, b, |backend, x, y| Ok(backend.gcd(x, y)))
    }

    /// Modular inverse of `a` in `[0, |modulus|)`
    pub fn invert(&mut self, a: Handle, modulus: Handle) -> Result<Handle> {
        self.binary(Operation::Invert, a, modulus, |backend, x, m| backend.invert(x, m))
    }

    pub fn sqrt(&mut self, a: Handle) -> Result<Handle> {
        self.unary(Operation::Sqrt, a, |backend, x| backend.sqrt(x))
    }

    /// `k`-th root truncated toward zero
    pub fn root(&mut self, a: Handle, k: u32) -> Result<Handle> {
        self.unary(Operation::Root, a, |backend, x| backend.root(x, k))
    }

    /// `a * 2^bits`
    pub fn shift_left(&mut self, a: Handle, bits: u32) -> Result<Handle> {
        self.unary(Operation::ShiftLeft, a, |backend, x| Ok(backend.shift_left(x, bits)))
    }

    /// `a / 2^bits` truncated toward zero
    pub fn shift_right(&mut self, a: Handle, bits: u32) -> Result<Handle> {
        self.unary(Operation::ShiftRight, a, |backend, x| Ok(backend.shift_right(x, bits)))
    }

    // Queries

    /// Value at `handle` as an `i64`
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The value fits
    /// * `Err(BignumError::InvalidArgument)` - The value is outside the `i64` range
    pub fn to_i64(&self, handle: Handle) -> Result<i64> {
        let value = self.registry.get(handle)?;
        value
            .to_i64()
            .ok_or_else(|| BignumError::invalid_argument(format!("{} does not fit in an i64", value)))
    }

    pub fn compare(&self, a: Handle, b: Handle) -> Result<Ordering> {
        Ok(self.registry.get(a)?.compare(self.registry.get(b)?))
    }

    pub fn compare_i64(&self, a: Handle, other: i64) -> Result<Ordering> {
        Ok(self.registry.get(a)?.compare_i64(other))
    }

    /// Bits in the magnitude; zero for zero
    pub fn bit_length(&self, a: Handle) -> Result<u64> {
        Ok(self.registry.get(a)?.bit_length())
    }

    /// Bit `index` of the two's-complement form
    pub fn is_bit_set(&self, a: Handle, index: u64) -> Result<bool> {
        Ok(self.registry.get(a)?.is_bit_set(index))
    }

    // Bitwise bridge

    pub fn and(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        bitwise_bridge::and(&mut self.registry, a, b)
    }

    pub fn or(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        bitwise_bridge::or(&mut self.registry, a, b)
    }

    pub fn xor(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        bitwise_bridge::xor(&mut self.registry, a, b)
    }

    pub fn bitwise(&mut self, op: BitwiseOp, a: Handle, b: Handle) -> Result<Handle> {
        match op {
            BitwiseOp::And => self.and(a, b),
            BitwiseOp::Or => self.or(a, b),
            BitwiseOp::Xor => self.xor(a, b),
        }
    }

    // Number theory

    pub fn jacobi(&self, a: Handle, n: Handle) -> Result<i8> {
        jacobi_symbol::jacobi_symbol(&self.registry, a, n)
    }

    pub fn probable_prime(&mut self, n: Handle, rounds: u32) -> Result<Primality> {
        let n = self.registry.get(n)?;
        primality::probable_prime(self.backend.as_ref(), &mut self.random, n, rounds)
    }

    pub fn random_prime(&mut self, bits: u64) -> Result<Handle> {
        let prime = primality::random_prime(self.backend.as_ref(), &mut self.random, bits)?;
        Ok(self.registry.insert(prime))
    }

    pub fn next_prime(&mut self, n: Handle) -> Result<Handle> {
        let n = self.registry.get(n)?;
        let prime = primality::next_prime(self.backend.as_ref(), &mut self.random, n)?;
        Ok(self.registry.insert(prime))
    }

    /// Uniform value in `[lo, hi)`
    pub fn random_range(&mut self, lo: Handle, hi: Handle) -> Result<Handle> {
        let value = self.random.range(self.registry.get(lo)?, self.registry.get(hi)?)?;
        Ok(self.registry.insert(value))
    }

    /// Uniform value in `[0, bound)`
    pub fn random_below(&mut self, bound: Handle) -> Result<Handle> {
        let value = self.random.below(self.registry.get(bound)?)?;
        Ok(self.registry.insert(value))
    }

    // Codecs

    /// Decode `bits` into the value at `handle`, in place
    pub fn set_compact(&mut self, handle: Handle, bits: u32) -> Result<()> {
        compact::decode_into(&mut self.registry, handle, bits)
    }

    pub fn get_compact(&self, handle: Handle) -> Result<u32> {
        compact::encode_from(&self.registry, handle)
    }

    pub fn from_buffer(&mut self, buffer: &[u8], options: &BufferOptions) -> Result<Handle> {
        let value = BufferCodec::from_buffer(buffer, options)?;
        Ok(self.registry.insert(value))
    }

    pub fn to_buffer(&self, handle: Handle, options: &BufferOptions) -> Result<Vec<u8>> {
        BufferCodec::to_buffer(self.registry.get(handle)?, options)
    }

    pub fn to_mpint(&self, handle: Handle) -> Result<Vec<u8>> {
        Ok(BufferCodec::to_mpint(self.registry.get(handle)?))
    }

    /// Decode one mpint; returns the handle and the bytes consumed
    pub fn from_mpint(&mut self, data: &[u8]) -> Result<(Handle, usize)> {
        let (value, consumed) = BufferCodec::from_mpint(data)?;
        Ok((self.registry.insert(value), consumed))
    }
}

impl Default for BignumSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
