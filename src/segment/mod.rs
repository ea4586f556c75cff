//! Media segment model and codec.
//!
//! A [`Segment`] is one playable chunk of a media playlist: the run of
//! tags that ends in a URI line. [`decode_segment`] assembles one from a
//! token stream, [`Segments`] drives a whole stream, and
//! [`write_segments`] renders segments back to canonical text.

mod decode;
mod duration;
mod write;

pub use decode::{decode_segment, Segments};
pub use duration::{parse_duration, write_duration};
pub use write::write_segments;

use std::time::Duration;

use chrono::{DateTime, FixedOffset};

use crate::tags::{ByteRange, DateRange, Key, Map};

/// Segment duration tag, `#EXTINF`.
pub const TAG_SEGMENT_DURATION: &str = "#EXTINF";
/// Byte range tag, `#EXT-X-BYTERANGE`.
pub const TAG_BYTE_RANGE: &str = "#EXT-X-BYTERANGE";
/// Discontinuity marker tag, `#EXT-X-DISCONTINUITY`.
pub const TAG_DISCONTINUITY: &str = "#EXT-X-DISCONTINUITY";
/// Encryption key tag, `#EXT-X-KEY`.
pub const TAG_KEY: &str = "#EXT-X-KEY";
/// Media initialization section tag, `#EXT-X-MAP`.
pub const TAG_MAP: &str = "#EXT-X-MAP";
/// Date range tag, `#EXT-X-DATERANGE`.
pub const TAG_DATE_RANGE: &str = "#EXT-X-DATERANGE";
/// Program date time tag, `#EXT-X-PROGRAM-DATE-TIME`.
pub const TAG_PROGRAM_DATE_TIME: &str = "#EXT-X-PROGRAM-DATE-TIME";

/// One media segment of a playlist.
///
/// Built incrementally by [`decode_segment`] in source order and completed
/// at the URI line. `key`, `map` and `date_range` are pass-through fields:
/// the decoder never sets them, but the encoder renders them when present.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Segment duration. Must be non-zero to encode.
    pub duration: Duration,
    /// Resource the segment plays from. Must be non-empty to encode.
    pub uri: String,
    /// Sub-range of the resource, when the segment is a slice of a
    /// larger file. `None` means the whole resource.
    pub byte_range: Option<ByteRange>,
    /// An encoding or timeline break precedes this segment.
    pub discontinuity: bool,
    /// Encryption key metadata. Never set by the decoder.
    pub key: Option<Key>,
    /// Media initialization section. Never set by the decoder.
    pub map: Option<Map>,
    /// Date range metadata. Never set by the decoder.
    pub date_range: Option<DateRange>,
    /// Absolute timestamp of the segment's first sample.
    pub program_date_time: Option<DateTime<FixedOffset>>,
}

impl Segment {
    /// Create a segment with the two mandatory fields.
    pub fn new(duration: Duration, uri: impl Into<String>) -> Self {
        Self {
            duration,
            uri: uri.into(),
            ..Self::default()
        }
    }
}
