//! Date range metadata.

use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::error::{Error, Result};
use crate::segment::write_duration;

/// A date range associated with a segment, rendered as the value of
/// `#EXT-X-DATERANGE`.
///
/// Carried opaquely through decoding and encoding; only rendering
/// inspects it. Timestamps render in RFC 3339 form with fixed
/// millisecond precision, durations as seconds with 3 decimals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// Unique identifier for the range. Required.
    pub id: String,
    /// Client-defined classification.
    pub class: Option<String>,
    /// When the range starts.
    pub start_date: DateTime<FixedOffset>,
    /// When the range ends.
    pub end_date: Option<DateTime<FixedOffset>>,
    /// Duration of the range.
    pub duration: Option<Duration>,
    /// Expected duration, for ranges whose actual end is not yet known.
    pub planned_duration: Option<Duration>,
    /// The range ends where the next range of the same class begins.
    pub end_on_next: bool,
}

impl DateRange {
    /// Create a date range with the required attributes only.
    pub fn new(id: impl Into<String>, start_date: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.into(),
            class: None,
            start_date,
            end_date: None,
            duration: None,
            planned_duration: None,
            end_on_next: false,
        }
    }

    /// Render the attribute list, checking structural rules first.
    ///
    /// An empty `id` and `end_on_next` without a `class` are rejected.
    pub fn render(&self) -> Result<String> {
        if self.id.is_empty() {
            return Err(Error::date_range("missing ID"));
        }
        if self.end_on_next && self.class.is_none() {
            return Err(Error::date_range("END-ON-NEXT requires CLASS"));
        }
        let mut out = String::new();
        write!(out, "ID=\"{}\"", self.id).unwrap();
        if let Some(ref class) = self.class {
            write!(out, ",CLASS=\"{}\"", class).unwrap();
        }
        write!(out, ",START-DATE=\"{}\"", format_date(&self.start_date)).unwrap();
        if let Some(ref end_date) = self.end_date {
            write!(out, ",END-DATE=\"{}\"", format_date(end_date)).unwrap();
        }
        if let Some(duration) = self.duration {
            write!(out, ",DURATION={}", write_duration(duration)).unwrap();
        }
        if let Some(planned) = self.planned_duration {
            write!(out, ",PLANNED-DURATION={}", write_duration(planned)).unwrap();
        }
        if self.end_on_next {
            out.push_str(",END-ON-NEXT=YES");
        }
        Ok(out)
    }
}

fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
