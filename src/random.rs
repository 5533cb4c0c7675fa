// src/random.rs
//! Cryptographically secure size selection and byte generation
//!
//! Both functions take any `TryRngCore`, so the binary passes `OsRng`
//! and tests pass seeded or deliberately failing sources. Every failure
//! of the source is surfaced as `GrandError::Random`; nothing retries.

use rand::TryRngCore;

use crate::error::{GrandError, Result};
use crate::size::SizeRange;

/// Draw one length uniformly from `range`, inclusive on both ends
///
/// A fixed range returns its only value without touching the source.
pub fn select_size<R: TryRngCore + ?Sized>(rng: &mut R, range: SizeRange) -> Result<usize> {
    if range.is_fixed() {
        return Ok(range.min());
    }
    let span = (range.max() - range.min()) as u64 + 1;
    let draw = uniform_below(rng, span)?;
    Ok(range.min() + draw as usize)
}

/// Fill all of `buf` with secure random bytes
pub fn fill_random<R: TryRngCore + ?Sized>(rng: &mut R, buf: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(buf).map_err(random_error)
}

/// Unbiased draw in `[0, bound)` by rejection sampling
fn uniform_below<R: TryRngCore + ?Sized>(rng: &mut R, bound: u64) -> Result<u64> {
    debug_assert!(bound > 0);
    // 2^64 mod bound; accepted draws cover an exact multiple of `bound`
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let v = rng.try_next_u64().map_err(random_error)?;
        if v >= threshold {
            return Ok(v % bound);
        }
    }
}

fn random_error<E: std::fmt::Display>(err: E) -> GrandError {
    GrandError::Random(err.to_string())
}
