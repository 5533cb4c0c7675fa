// tests/common.rs
//! Shared test utilities — logging setup and scripted randomness sources

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng, TryRngCore};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Deterministic source so failures are reproducible
#[allow(dead_code)]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Source whose every call fails, like an unavailable entropy device
#[allow(dead_code)]
pub struct FailingRng;

impl TryRngCore for FailingRng {
    type Error = std::io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(unavailable())
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(unavailable())
    }

    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(unavailable())
    }
}

/// Seeded source that starts failing after `fills_left` byte fills
#[allow(dead_code)]
pub struct FlakyRng {
    inner: StdRng,
    fills_left: usize,
}

#[allow(dead_code)]
impl FlakyRng {
    pub fn new(seed: u64, fills_left: usize) -> Self {
        Self {
            inner: seeded(seed),
            fills_left,
        }
    }
}

impl TryRngCore for FlakyRng {
    type Error = std::io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Ok(self.inner.next_u32())
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok(self.inner.next_u64())
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        if self.fills_left == 0 {
            return Err(unavailable());
        }
        self.fills_left -= 1;
        self.inner.fill_bytes(dst);
        Ok(())
    }
}

fn unavailable() -> std::io::Error {
    std::io::Error::other("entropy source unavailable")
}
