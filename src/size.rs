// src/size.rs
//! Size expressions — a single byte length or an inclusive `min-max` range
//!
//! Parsing and validation are pure; a `SizeRange` that exists is always valid.

use std::fmt;
use std::str::FromStr;

use crate::consts::{DEFAULT_SIZE, MAX_SIZE};
use crate::error::SizeError;

/// Validated inclusive range of byte lengths, `1 <= min <= max <= MAX_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeRange {
    min: usize,
    max: usize,
}

impl SizeRange {
    pub const DEFAULT: SizeRange = SizeRange {
        min: DEFAULT_SIZE,
        max: DEFAULT_SIZE,
    };

    /// Build a range from already-parsed bounds
    pub fn new(min: usize, max: usize) -> Result<Self, SizeError> {
        Self::validate(to_i64(min), to_i64(max), true)
    }

    /// A degenerate range that always selects `size`
    pub fn fixed(size: usize) -> Result<Self, SizeError> {
        let size = to_i64(size);
        Self::validate(size, size, false)
    }

    /// Parse `"N"` or `"MIN-MAX"`, cutting on the first `-`
    pub fn parse(s: &str) -> Result<Self, SizeError> {
        match s.split_once('-') {
            Some((min, max)) => {
                let min = parse_int(min)?;
                let max = parse_int(max)?;
                Self::validate(min, max, true)
            }
            None => {
                let size = parse_int(s)?;
                Self::validate(size, size, false)
            }
        }
    }

    fn validate(min: i64, max: i64, is_range: bool) -> Result<Self, SizeError> {
        if min < 1 {
            return Err(if is_range {
                SizeError::MinNotPositive
            } else {
                SizeError::NotPositive
            });
        }
        if max < min {
            return Err(SizeError::MaxLessThanMin);
        }
        if max > MAX_SIZE as i64 {
            return Err(SizeError::TooLarge);
        }
        // both bounds are now within 1..=MAX_SIZE
        Ok(SizeRange {
            min: min as usize,
            max: max as usize,
        })
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// True when only one length can ever be selected
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Whether `len` lies inside the inclusive range
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for SizeRange {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

fn parse_int(s: &str) -> Result<i64, SizeError> {
    s.parse::<i64>().map_err(|_| SizeError::Parse)
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
