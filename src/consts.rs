// src/consts.rs
//! Shared constants — defaults and hard limits

/// Encoding used when `-e` is not given
pub const DEFAULT_ENCODING: &str = "hex";

/// Byte length used when `-s` is not given
pub const DEFAULT_SIZE: usize = 16;

/// Number of lines emitted when `-n` is not given
pub const DEFAULT_COUNT: u64 = 1;

/// Largest accepted byte length (1 GiB)
// keeps both scratch buffers allocatable and encoded lengths far from usize overflow
pub const MAX_SIZE: usize = 1 << 30;

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
