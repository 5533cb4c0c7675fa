// src/encoding/b32.rs
use data_encoding::Encoding;

use super::{output_slice, Encoder};
use crate::error::Result;

/// Base32 over one of the `data-encoding` presets
///
/// Covers the RFC 4648 standard and extended-hex alphabets, padded or raw.
#[derive(Debug, Clone)]
pub struct Base32Encoder {
    encoding: Encoding,
}

impl Base32Encoder {
    pub const fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }
}

impl Encoder for Base32Encoder {
    #[inline]
    fn encoded_len(&self, n: usize) -> usize {
        self.encoding.encode_len(n)
    }

    fn encode(&self, dst: &mut [u8], src: &[u8]) -> Result<usize> {
        let needed = self.encoded_len(src.len());
        // encode_mut requires an exactly sized output
        let out = output_slice(dst, needed)?;
        self.encoding.encode_mut(src, out);
        Ok(needed)
    }
}
