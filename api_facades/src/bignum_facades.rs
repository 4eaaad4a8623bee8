//! Bignum Facades
//!
//! One [`BignumSession`] per process, created on first use from the
//! environment (see [`SessionConfig::from_env`]) and guarded by a mutex.
//! A rejected environment is kept as the session state, and every facade
//! call reports it until [`configure`] installs a working session.
//!
//! Every mutation of the session completes within a single call, so a
//! poisoned lock still guards a consistent session and is recovered rather
//! than propagated.

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

use std::sync::{Mutex, MutexGuard, PoisonError};

use entities_bignum::{Handle, Result};
use tracing::{debug, warn};
use usecases_bignum::{BignumSession, SessionConfig};

lazy_static::lazy_static! {
    static ref SESSION: Mutex<Result<BignumSession>> = Mutex::new(open_session(SessionConfig::from_env(), 0));
}

fn open_session(config: Result<SessionConfig>, first_handle: u64) -> Result<BignumSession> {
    match config {
        Ok(config) => Ok(BignumSession::continuing_from(config, first_handle)),
        Err(err) => {
            warn!(error = %err, "bignum environment configuration rejected");
            Err(err)
        }
    }
}

fn state() -> MutexGuard<'static, Result<BignumSession>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn live<R>(f: impl FnOnce(&mut BignumSession) -> Result<R>) -> Result<R> {
    match state().as_mut() {
        Ok(session) => f(session),
        Err(err) => Err(err.clone()),
    }
}

/// Run `f` against the process-wide session
///
/// Gives access to every session operation that has no dedicated facade.
///
/// # Returns
///
/// * `Ok(R)` - What `f` returned
/// * `Err(BignumError)` - The session could not be configured; `f` is not run
///
/// # Deadlocks
///
/// The session lock is held while `f` runs. Calling [`with_session`],
/// [`configure`] or any `bignum_*` function from inside `f` never returns.
pub fn with_session<R>(f: impl FnOnce(&mut BignumSession) -> R) -> Result<R> {
    live(|session| Ok(f(session)))
}

/// Replace the process-wide session
///
/// Every handle issued by the previous session becomes invalid. Numbering
/// carries on after the last handle the previous session issued, so an old
/// handle fails with `InvalidHandle` instead of naming a new value.
pub fn configure(config: SessionConfig) {
    debug!(backend = %config.backend, "replacing bignum session");
    let mut state = state();
    let first_handle = state.as_ref().map_or(0, |session| session.registry().next_raw());
    *state = open_session(Ok(config), first_handle);
}

/// Replace the process-wide session using the environment
///
/// A rejected environment leaves the current session in place.
pub fn configure_from_env() -> Result<()> {
    configure(SessionConfig::from_env()?);
    Ok(())
}

/// New zero value
pub fn bignum_create() -> Result<u32> {
    live(|session| Ok(session.create().raw()))
}

/// Parse `text` in `base` into a new value
pub fn bignum_from_string(text: &str, base: u32) -> Result<u32> {
    live(|session| session.create_from_digits(text, base).map(Handle::raw))
}

pub fn bignum_destroy(handle: u32) -> Result<()> {
    live(|session| session.destroy(Handle::from_raw(handle)))
}

pub fn bignum_to_string(handle: u32, base: u32) -> Result<String> {
    live(|session| session.to_string(Handle::from_raw(handle), base))
}

pub fn bignum_and(a: u32, b: u32) -> Result<u32> {
    live(|session| session.and(Handle::from_raw(a), Handle::from_raw(b)).map(Handle::raw))
}

pub fn bignum_or(a: u32, b: u32) -> Result<u32> {
    live(|session| session.or(Handle::from_raw(a), Handle::from_raw(b)).map(Handle::raw))
}

pub fn bignum_xor(a: u32, b: u32) -> Result<u32> {
    live(|session| session.xor(Handle::from_raw(a), Handle::from_raw(b)).map(Handle::raw))
}

/// Jacobi symbol of two values
pub fn bignum_jacobi(a: u32, n: u32) -> Result<i8> {
    live(|session| session.jacobi(Handle::from_raw(a), Handle::from_raw(n)))
}

/// Decode compact `bits` into `handle` in place
pub fn bignum_set_compact(handle: u32, bits: u32) -> Result<()> {
    live(|session| session.set_compact(Handle::from_raw(handle), bits))
}

pub fn bignum_get_compact(handle: u32) -> Result<u32> {
    live(|session| session.get_compact(Handle::from_raw(handle)))
}
