// src/encoding/b16.rs
use super::{output_slice, Encoder};
use crate::error::{GrandError, Result};

/// Lowercase hexadecimal, two characters per byte
#[derive(Debug, Clone, Copy, Default)]
pub struct HexEncoder;

impl Encoder for HexEncoder {
    #[inline]
    fn encoded_len(&self, n: usize) -> usize {
        n * 2
    }

    fn encode(&self, dst: &mut [u8], src: &[u8]) -> Result<usize> {
        let needed = self.encoded_len(src.len());
        let actual = dst.len();
        let out = output_slice(dst, needed)?;
        hex::encode_to_slice(src, out)
            .map_err(|_| GrandError::BufferTooSmall { needed, actual })?;
        Ok(needed)
    }
}
