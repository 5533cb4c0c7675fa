// src/generate.rs
//! The generation loop — draw a size, fill, encode, emit one line
//!
//! Both scratch buffers are sized once for the range maximum and reused
//! for every line. They are wiped when the generator is dropped.

use std::io::Write;

use rand::TryRngCore;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::encoding::{Encoder, EncodingName};
use crate::error::{GrandError, Result};
use crate::random::{fill_random, select_size};
use crate::size::SizeRange;

pub struct Generator {
    encoder: &'static dyn Encoder,
    range: SizeRange,
    raw: Zeroizing<Vec<u8>>,
    encoded: Zeroizing<Vec<u8>>,
}

impl Generator {
    pub fn new(encoding: EncodingName, range: SizeRange) -> Self {
        debug!(encoding = %encoding, size = %range, "creating generator");
        Self::with_encoder(encoding.encoder(), range)
    }

    /// Build a generator around any `'static` encoder
    pub fn with_encoder(encoder: &'static dyn Encoder, range: SizeRange) -> Self {
        let raw = Zeroizing::new(vec![0u8; range.max()]);
        let encoded = Zeroizing::new(vec![0u8; encoder.encoded_len(range.max())]);
        debug!(
            raw_capacity = raw.len(),
            encoded_capacity = encoded.len(),
            "allocated scratch buffers"
        );
        Self {
            encoder,
            range,
            raw,
            encoded,
        }
    }

    pub fn range(&self) -> SizeRange {
        self.range
    }

    /// Produce one encoded string without writing it anywhere
    ///
    /// The slice borrows the output buffer and is overwritten by the next call.
    pub fn next_line<R: TryRngCore + ?Sized>(&mut self, rng: &mut R) -> Result<&[u8]> {
        let len = select_size(rng, self.range)?;
        let raw = &mut self.raw[..len];
        fill_random(rng, raw)?;
        let end = self.encoder.encoded_len(len);
        self.encoder.encode(&mut self.encoded[..], raw)?;
        trace!(size = len, encoded_len = end, "encoded random bytes");
        Ok(&self.encoded[..end])
    }

    /// Write `count` lines to `out`, flushing after each
    ///
    /// Stops at the first failure; lines already written are left as they are.
    pub fn run<R, W>(&mut self, rng: &mut R, count: u64, out: &mut W) -> Result<()>
    where
        R: TryRngCore + ?Sized,
        W: Write + ?Sized,
    {
        if count == 0 {
            return Err(GrandError::InvalidCount);
        }
        for i in 0..count {
            let line = self.next_line(rng)?;
            out.write_all(line)?;
            out.write_all(b"\n")?;
            out.flush()?;
            trace!(line = i + 1, of = count, "emitted");
        }
        debug!(count, "generation complete");
        Ok(())
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print buffer contents
        f.debug_struct("Generator")
            .field("range", &self.range)
            .field("raw_capacity", &self.raw.len())
            .field("encoded_capacity", &self.encoded.len())
            .finish()
    }
}
