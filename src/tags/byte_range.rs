//! Byte range values.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A sub-range of a segment resource, as carried by `#EXT-X-BYTERANGE`
/// and by the `BYTERANGE` attribute of `#EXT-X-MAP`.
///
/// The offset is optional: an omitted offset means the range starts where
/// the previous one ended, which is distinct from an explicit offset of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteRange {
    /// Length of the range in bytes.
    pub length: u64,
    /// Byte offset from the start of the resource, when specified.
    pub offset: Option<u64>,
}

impl ByteRange {
    /// Create a range with an explicit offset.
    pub fn new(length: u64, offset: u64) -> Self {
        Self {
            length,
            offset: Some(offset),
        }
    }

    /// Create a range contiguous with the previous one.
    pub fn contiguous(length: u64) -> Self {
        Self {
            length,
            offset: None,
        }
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{}@{}", self.length, offset),
            None => write!(f, "{}", self.length),
        }
    }
}

impl FromStr for ByteRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (length, offset) = match s.split_once('@') {
            Some((length, offset)) => (length, Some(offset)),
            None => (s, None),
        };
        let length = length
            .parse()
            .map_err(|_| Error::invalid_byte_range(format!("bad length in {:?}", s)))?;
        let offset = match offset {
            Some(offset) => Some(
                offset
                    .parse()
                    .map_err(|_| Error::invalid_byte_range(format!("bad offset in {:?}", s)))?,
            ),
            None => None,
        };
        Ok(Self { length, offset })
    }
}
