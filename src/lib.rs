//! # m3u8-segment
//!
//! Decoder and encoder for the media segment portion of HLS playlists
//! (RFC 8216 §4.4.4): the ordered runs of tags and URI lines that
//! describe the playable chunks of a stream.
//!
//! Text is lexed into typed tokens, segment runs are decoded into
//! [`Segment`] records, and records are rendered back to canonical text
//! with the exact numeric formatting reference playlists use.
//!
//! ## Quick Start
//!
//! ```
//! use m3u8_segment::segments;
//!
//! let playlist = "#EXTINF:9.967\nsegment-0.ts\n#EXTINF:10.000\nsegment-1.ts\n";
//! let segments: Vec<_> = segments(playlist).collect::<Result<_, _>>()?;
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].uri, "segment-0.ts");
//! assert_eq!(segments[0].duration.as_micros(), 9_967_000);
//! # Ok::<(), m3u8_segment::Error>(())
//! ```
//!
//! ## Encoding
//!
//! ```
//! use std::time::Duration;
//! use m3u8_segment::{write_segments, Segment};
//!
//! let segment = Segment::new(Duration::from_secs(10), "a.ts");
//! let mut out = Vec::new();
//! write_segments(&mut out, &[segment])?;
//!
//! assert_eq!(out, b"#EXTINF:10.000\na.ts\n");
//! # Ok::<(), m3u8_segment::Error>(())
//! ```
//!
//! Unrecognized tags fail decoding with [`Error::Unsupported`] rather
//! than being dropped; playlists using features this crate does not
//! model are rejected loudly, never silently thinned out.

pub mod error;
pub mod lexer;
pub mod segment;
pub mod tags;

pub use error::{Error, Result};
pub use lexer::{Lexer, Token};
pub use segment::{
    decode_segment, parse_duration, write_duration, write_segments, Segment, Segments,
};
pub use tags::{ByteRange, DateRange, Key, KeyMethod, Map};

/// Lex playlist text and iterate its segments.
///
/// Convenience for [`Segments::new`] over a [`Lexer`]. The token stream
/// is expected to be positioned at the segment portion of a media
/// playlist; header tags such as `#EXT-X-VERSION` fail decoding as
/// unsupported.
pub fn segments(input: &str) -> Segments<'_, Lexer<'_>> {
    Segments::new(Lexer::new(input))
}
