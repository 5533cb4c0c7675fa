// src/config.rs
//! Validated run settings
//!
//! There is no config file and no environment lookup: everything comes
//! from the command line, and anything missing falls back to `consts`.

use std::io::Write;

use rand::TryRngCore;

use crate::consts::DEFAULT_COUNT;
use crate::encoding::EncodingName;
use crate::error::{GrandError, Result};
use crate::generate::Generator;
use crate::size::SizeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub encoding: EncodingName,
    pub size: SizeRange,
    pub count: u64,
}

impl Config {
    pub fn new(encoding: EncodingName, size: SizeRange, count: u64) -> Result<Self> {
        if count == 0 {
            return Err(GrandError::InvalidCount);
        }
        Ok(Self {
            encoding,
            size,
            count,
        })
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.encoding, self.size)
    }

    /// Generate and write all `count` lines
    pub fn run<R, W>(&self, rng: &mut R, out: &mut W) -> Result<()>
    where
        R: TryRngCore + ?Sized,
        W: Write + ?Sized,
    {
        self.generator().run(rng, self.count, out)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: EncodingName::default(),
            size: SizeRange::default(),
            count: DEFAULT_COUNT,
        }
    }
}

/// Parse a line count; it must be a positive integer
pub fn parse_count(s: &str) -> Result<u64> {
    let n: i64 = s.parse().map_err(|_| GrandError::CountParse)?;
    if n < 1 {
        return Err(GrandError::InvalidCount);
    }
    Ok(n as u64)
}
