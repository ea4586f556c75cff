//! Media initialization section metadata.

use std::fmt;

use super::ByteRange;

/// The media initialization section a segment depends on, rendered as the
/// value of `#EXT-X-MAP`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    /// Resource holding the initialization section.
    pub uri: String,
    /// Sub-range of the resource, when the section is a slice of a
    /// larger file.
    pub byte_range: Option<ByteRange>,
}

impl Map {
    /// Create a map for the given resource.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            byte_range: None,
        }
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "URI=\"{}\"", self.uri)?;
        if let Some(ref byte_range) = self.byte_range {
            write!(f, ",BYTERANGE=\"{}\"", byte_range)?;
        }
        Ok(())
    }
}
