// src/encoding/mod.rs
//! Byte-to-text encoders behind one `Encoder` contract
//!
//! Hex, base64 and base32 expose different APIs in their crates; each
//! gets a thin `Encoder` impl here so callers never special-case one.

mod b16;
mod b32;
mod b64;
mod registry;

pub use b16::HexEncoder;
pub use b32::Base32Encoder;
pub use b64::Base64Encoder;
pub use registry::{resolve, EncodingName};

use crate::error::{GrandError, Result};

/// A stateless, injective byte-to-text encoding
pub trait Encoder: Send + Sync {
    /// Exact number of output bytes for `n` input bytes
    fn encoded_len(&self, n: usize) -> usize;

    /// Encode `src` into the front of `dst`, returning the bytes written
    ///
    /// `dst` must hold at least `encoded_len(src.len())` bytes.
    fn encode(&self, dst: &mut [u8], src: &[u8]) -> Result<usize>;

    fn encode_to_string(&self, src: &[u8]) -> Result<String> {
        let mut buf = vec![0u8; self.encoded_len(src.len())];
        let written = self.encode(&mut buf, src)?;
        buf.truncate(written);
        // every alphabet here is ASCII
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// The leading `needed` bytes of `dst`, or `BufferTooSmall`
pub(crate) fn output_slice(dst: &mut [u8], needed: usize) -> Result<&mut [u8]> {
    let actual = dst.len();
    dst.get_mut(..needed)
        .ok_or(GrandError::BufferTooSmall { needed, actual })
}
