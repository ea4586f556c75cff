//! Typed values for the tags a segment carries.
//!
//! [`ByteRange`] is both parsed and rendered by the segment codec. The
//! remaining types are pass-through metadata: the decoder never populates
//! them (see [`crate::segment::decode_segment`]), but a playlist producer
//! can attach them to a [`crate::Segment`] and the encoder renders them.

mod byte_range;
mod date_range;
mod key;
mod map;

pub use byte_range::ByteRange;
pub use date_range::DateRange;
pub use key::{Key, KeyMethod};
pub use map::Map;
