// src/encoding/registry.rs
//! Name → encoder lookup
//!
//! The set of names is closed: lookup is an exact, case-sensitive match and
//! an unknown name is an error, never a fallback to some default.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use data_encoding::{BASE32, BASE32HEX, BASE32HEX_NOPAD, BASE32_NOPAD};
use tracing::debug;

use super::{Base32Encoder, Base64Encoder, Encoder, HexEncoder};
use crate::error::{GrandError, Result};

static HEX: HexEncoder = HexEncoder;
static B64_STANDARD: Base64Encoder = Base64Encoder::new(STANDARD);
static B64_STANDARD_RAW: Base64Encoder = Base64Encoder::new(STANDARD_NO_PAD);
static B64_URL_SAFE: Base64Encoder = Base64Encoder::new(URL_SAFE);
static B64_URL_SAFE_RAW: Base64Encoder = Base64Encoder::new(URL_SAFE_NO_PAD);
static B32_STANDARD: Base32Encoder = Base32Encoder::new(BASE32);
static B32_STANDARD_RAW: Base32Encoder = Base32Encoder::new(BASE32_NOPAD);
static B32_HEX: Base32Encoder = Base32Encoder::new(BASE32HEX);
static B32_HEX_RAW: Base32Encoder = Base32Encoder::new(BASE32HEX_NOPAD);

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodingName {
    #[default]
    Hex,
    B64s,
    B64sr,
    B64u,
    B64ur,
    B32s,
    B32sr,
    B32h,
    B32hr,
}

impl EncodingName {
    /// Every supported encoding, in the order shown in help text
    pub const ALL: [EncodingName; 9] = [
        EncodingName::Hex,
        EncodingName::B64s,
        EncodingName::B64sr,
        EncodingName::B64u,
        EncodingName::B64ur,
        EncodingName::B32s,
        EncodingName::B32sr,
        EncodingName::B32h,
        EncodingName::B32hr,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EncodingName::Hex => "hex",
            EncodingName::B64s => "b64s",
            EncodingName::B64sr => "b64sr",
            EncodingName::B64u => "b64u",
            EncodingName::B64ur => "b64ur",
            EncodingName::B32s => "b32s",
            EncodingName::B32sr => "b32sr",
            EncodingName::B32h => "b32h",
            EncodingName::B32hr => "b32hr",
        }
    }

    /// One-line human description of the alphabet and padding
    pub fn description(self) -> &'static str {
        match self {
            EncodingName::Hex => "base16",
            EncodingName::B64s => "base64, standard alphabet",
            EncodingName::B64sr => "base64, standard alphabet, no padding",
            EncodingName::B64u => "base64, url safe alphabet",
            EncodingName::B64ur => "base64, url safe alphabet, no padding",
            EncodingName::B32s => "base32, standard alphabet",
            EncodingName::B32sr => "base32, standard alphabet, no padding",
            EncodingName::B32h => "base32, extended hex alphabet",
            EncodingName::B32hr => "base32, extended hex alphabet, no padding",
        }
    }

    pub fn encoder(self) -> &'static dyn Encoder {
        match self {
            EncodingName::Hex => &HEX,
            EncodingName::B64s => &B64_STANDARD,
            EncodingName::B64sr => &B64_STANDARD_RAW,
            EncodingName::B64u => &B64_URL_SAFE,
            EncodingName::B64ur => &B64_URL_SAFE_RAW,
            EncodingName::B32s => &B32_STANDARD,
            EncodingName::B32sr => &B32_STANDARD_RAW,
            EncodingName::B32h => &B32_HEX,
            EncodingName::B32hr => &B32_HEX_RAW,
        }
    }
}

impl FromStr for EncodingName {
    type Err = GrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| GrandError::UnknownEncoding(s.to_owned()))
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the encoder registered under `name`
pub fn resolve(name: &str) -> Result<&'static dyn Encoder> {
    let encoding: EncodingName = name.parse()?;
    debug!(encoding = %encoding, "resolved encoder");
    Ok(encoding.encoder())
}
