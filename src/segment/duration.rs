//! Segment duration literals.
//!
//! `#EXTINF` durations are decimal seconds with optional fractional
//! digits. Decoding keeps integer-second literals exact and truncates
//! everything else to whole microseconds, which is the resolution HLS
//! timing derived from a 90 kHz media clock actually carries. Encoding
//! always renders exactly 3 decimals to stay byte-identical with
//! reference playlists.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::lexer::Token;

const MICROS_PER_SEC: f64 = 1_000_000.0;

/// Parse a duration literal token into a [`Duration`].
///
/// Accepts [`Token::Number`] and [`Token::AttrName`], since tokenizers
/// disagree on how to classify a bare integer field. Any other token kind,
/// and any literal that does not parse as a non-negative decimal seconds
/// value, is [`Error::InvalidDuration`].
pub fn parse_duration(token: &Token<'_>) -> Result<Duration> {
    let literal = match token {
        Token::Number(text) | Token::AttrName(text) => *text,
        other => return Err(Error::invalid_duration(other.to_string())),
    };
    match literal.split_once('.') {
        // Integer seconds, exact.
        None => parse_whole_seconds(literal),
        // All-zero fraction, still exact; the empty fraction "10." counts.
        Some((whole, frac)) if frac.bytes().all(|b| b == b'0') => parse_whole_seconds(whole),
        Some(_) => {
            let seconds: f64 = literal
                .parse()
                .map_err(|_| Error::invalid_duration(literal))?;
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(Error::invalid_duration(literal));
            }
            // Truncate, never round.
            Ok(Duration::from_micros((seconds * MICROS_PER_SEC) as u64))
        }
    }
}

fn parse_whole_seconds(literal: &str) -> Result<Duration> {
    let seconds: u64 = literal
        .parse()
        .map_err(|_| Error::invalid_duration(literal))?;
    Ok(Duration::from_secs(seconds))
}

/// Render a duration as seconds with exactly 3 decimal digits.
pub fn write_duration(duration: Duration) -> String {
    format!("{:.3}", duration.as_micros() as f64 / MICROS_PER_SEC)
}
