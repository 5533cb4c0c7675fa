// src/lib.rs
//! grand — cryptographically-secure random byte strings
//!
//! Features:
//! - Fixed sizes or uniformly drawn sizes from an inclusive range
//! - Hex, base64 and base32 output behind one `Encoder` trait
//! - Reusable, zeroized scratch buffers

pub mod config;
pub mod consts;
pub mod encoding;
pub mod error;
pub mod generate;
pub mod random;
pub mod size;

// Re-export everything users need at the crate root
pub use config::{parse_count, Config};
pub use encoding::{resolve, Encoder, EncodingName};
pub use error::{GrandError, Result, SizeError};
pub use generate::Generator;
pub use random::{fill_random, select_size};
pub use size::SizeRange;
