//! Segment encoding.

use std::fmt::Write as _;
use std::io;

use chrono::SecondsFormat;

use crate::error::{Error, Result};

use super::{
    write_duration, Segment, TAG_BYTE_RANGE, TAG_DATE_RANGE, TAG_DISCONTINUITY, TAG_KEY, TAG_MAP,
    TAG_PROGRAM_DATE_TIME, TAG_SEGMENT_DURATION,
};

/// Render segments to canonical playlist text, in input order.
///
/// Returns the total number of bytes written. Each segment is validated
/// and rendered into a buffer before any of its bytes reach the sink, so
/// a failure aborts the batch at a segment boundary: a segment with an
/// empty URI is [`Error::MissingUri`], a zero duration is
/// [`Error::ZeroDuration`], and a date range that will not render is
/// [`Error::DateRange`].
pub fn write_segments<W: io::Write>(w: &mut W, segments: &[Segment]) -> Result<usize> {
    let mut written = 0;
    for segment in segments {
        let lines = render_segment(segment)?;
        w.write_all(lines.as_bytes())?;
        written += lines.len();
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(segments = segments.len(), bytes = written, "encoded segments");
    Ok(written)
}

/// Render one segment's lines. Only non-default fields produce a line;
/// the duration and URI lines always close the segment.
fn render_segment(segment: &Segment) -> Result<String> {
    if segment.uri.is_empty() {
        return Err(Error::MissingUri);
    }
    if segment.duration.is_zero() {
        return Err(Error::ZeroDuration(segment.uri.clone()));
    }
    let mut out = String::new();
    if segment.discontinuity {
        out.push_str(TAG_DISCONTINUITY);
        out.push('\n');
    }
    if let Some(ref date_range) = segment.date_range {
        writeln!(out, "{}:{}", TAG_DATE_RANGE, date_range.render()?).unwrap();
    }
    if let Some(ref byte_range) = segment.byte_range {
        writeln!(out, "{}:{}", TAG_BYTE_RANGE, byte_range).unwrap();
    }
    if let Some(ref key) = segment.key {
        writeln!(out, "{}:{}", TAG_KEY, key).unwrap();
    }
    if let Some(ref map) = segment.map {
        writeln!(out, "{}:{}", TAG_MAP, map).unwrap();
    }
    if let Some(ref date_time) = segment.program_date_time {
        writeln!(
            out,
            "{}:{}",
            TAG_PROGRAM_DATE_TIME,
            date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
        .unwrap();
    }
    writeln!(
        out,
        "{}:{}",
        TAG_SEGMENT_DURATION,
        write_duration(segment.duration)
    )
    .unwrap();
    out.push_str(&segment.uri);
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{ByteRange, DateRange, Key, KeyMethod, Map};
    use chrono::DateTime;
    use std::time::Duration;

    fn encode(segments: &[Segment]) -> Result<(String, usize)> {
        let mut out = Vec::new();
        let written = write_segments(&mut out, segments)?;
        Ok((String::from_utf8(out).unwrap(), written))
    }

    #[test]
    fn minimal_segment_golden() {
        let segments = [Segment::new(Duration::from_secs(10), "a.ts")];
        let (text, written) = encode(&segments).unwrap();
        assert_eq!(text, "#EXTINF:10.000\na.ts\n");
        assert_eq!(written, text.len());
    }

    #[test]
    fn full_segment_line_order() {
        let mut segment = Segment::new(Duration::from_micros(9_967_000), "main.ts");
        segment.discontinuity = true;
        segment.date_range = Some(DateRange::new(
            "splice",
            DateTime::parse_from_rfc3339("2014-03-05T11:15:00Z").unwrap(),
        ));
        segment.byte_range = Some(ByteRange::new(75232, 0));
        segment.key = Some(Key::new(KeyMethod::None));
        segment.map = Some(Map::new("init.mp4"));
        segment.program_date_time =
            Some(DateTime::parse_from_rfc3339("2010-02-19T14:54:23.031+08:00").unwrap());
        let (text, _) = encode(&[segment]).unwrap();
        assert_eq!(
            text,
            "#EXT-X-DISCONTINUITY\n\
             #EXT-X-DATERANGE:ID=\"splice\",START-DATE=\"2014-03-05T11:15:00.000Z\"\n\
             #EXT-X-BYTERANGE:75232@0\n\
             #EXT-X-KEY:METHOD=NONE\n\
             #EXT-X-MAP:URI=\"init.mp4\"\n\
             #EXT-X-PROGRAM-DATE-TIME:2010-02-19T14:54:23.031+08:00\n\
             #EXTINF:9.967\n\
             main.ts\n"
        );
    }

    #[test]
    fn segments_written_in_order() {
        let segments = [
            Segment::new(Duration::from_micros(9_967_000), "first.ts"),
            Segment::new(Duration::from_secs(10), "second.ts"),
        ];
        let (text, written) = encode(&segments).unwrap();
        assert_eq!(text, "#EXTINF:9.967\nfirst.ts\n#EXTINF:10.000\nsecond.ts\n");
        assert_eq!(written, text.len());
    }

    #[test]
    fn empty_uri_rejected_before_output() {
        let segments = [Segment::new(Duration::from_secs(10), "")];
        let mut out = Vec::new();
        let result = write_segments(&mut out, &segments);
        assert!(matches!(result, Err(Error::MissingUri)));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_duration_rejected_before_output() {
        let segments = [Segment::new(Duration::ZERO, "a.ts")];
        let mut out = Vec::new();
        let result = write_segments(&mut out, &segments);
        match result {
            Err(Error::ZeroDuration(uri)) => assert_eq!(uri, "a.ts"),
            other => panic!("expected zero duration, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn failure_stops_at_segment_boundary() {
        let segments = [
            Segment::new(Duration::from_secs(10), "ok.ts"),
            Segment::new(Duration::ZERO, "bad.ts"),
        ];
        let mut out = Vec::new();
        let result = write_segments(&mut out, &segments);
        assert!(matches!(result, Err(Error::ZeroDuration(_))));
        // The first segment made it out whole; the failing one wrote nothing.
        assert_eq!(out, b"#EXTINF:10.000\nok.ts\n");
    }

    #[test]
    fn bad_date_range_aborts() {
        let mut segment = Segment::new(Duration::from_secs(10), "a.ts");
        let mut range = DateRange::new(
            "x",
            DateTime::parse_from_rfc3339("2014-03-05T11:15:00Z").unwrap(),
        );
        range.end_on_next = true; // no CLASS
        segment.date_range = Some(range);
        let mut out = Vec::new();
        assert!(matches!(
            write_segments(&mut out, &[segment]),
            Err(Error::DateRange(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn contiguous_byte_range_renders_bare_length() {
        let mut segment = Segment::new(Duration::from_secs(10), "a.ts");
        segment.byte_range = Some(ByteRange::contiguous(69864));
        let (text, _) = encode(&[segment]).unwrap();
        assert!(text.contains("#EXT-X-BYTERANGE:69864\n"));
    }

    #[test]
    fn explicit_zero_byte_range_renders() {
        let mut segment = Segment::new(Duration::from_secs(10), "a.ts");
        segment.byte_range = Some(ByteRange::new(0, 0));
        let (text, _) = encode(&[segment]).unwrap();
        assert!(text.contains("#EXT-X-BYTERANGE:0@0\n"));
    }
}
