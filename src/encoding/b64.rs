// src/encoding/b64.rs
use base64::engine::{Config, GeneralPurpose};
use base64::Engine;

use super::{output_slice, Encoder};
use crate::error::{GrandError, Result};

/// Base64 over one of the `base64` crate's general-purpose engines
///
/// The engine decides both the alphabet and whether `=` padding is written.
#[derive(Debug, Clone)]
pub struct Base64Encoder {
    engine: GeneralPurpose,
}

impl Base64Encoder {
    pub const fn new(engine: GeneralPurpose) -> Self {
        Self { engine }
    }

    pub fn is_padded(&self) -> bool {
        self.engine.config().encode_padding()
    }
}

impl Encoder for Base64Encoder {
    fn encoded_len(&self, n: usize) -> usize {
        // only overflows far beyond MAX_SIZE
        base64::encoded_len(n, self.is_padded()).unwrap_or(usize::MAX)
    }

    fn encode(&self, dst: &mut [u8], src: &[u8]) -> Result<usize> {
        let needed = self.encoded_len(src.len());
        let actual = dst.len();
        let out = output_slice(dst, needed)?;
        self.engine
            .encode_slice(src, out)
            .map_err(|_| GrandError::BufferTooSmall { needed, actual })
    }
}
