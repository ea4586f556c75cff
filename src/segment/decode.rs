//! Segment decoding.

use crate::error::{Error, Result};
use crate::lexer::Token;

use super::{
    parse_duration, Segment, TAG_BYTE_RANGE, TAG_DISCONTINUITY, TAG_KEY, TAG_SEGMENT_DURATION,
};

/// Decode one segment from a token stream.
///
/// `leading` is the tag that opened the segment, already pulled off the
/// stream by the caller; it runs through the same tag dispatch as tags
/// read inside the loop. Tokens are then consumed until the URI line
/// completes the segment. Every other outcome is an error: a lexer
/// [`Token::Error`] propagates as [`Error::Lex`], an unrecognized tag is
/// [`Error::Unsupported`], and a stream that ends without a URI is
/// [`Error::MissingUri`]. Stray value tokens between tags are skipped.
pub fn decode_segment<'s, I>(tokens: &mut I, leading: Token<'s>) -> Result<Segment>
where
    I: Iterator<Item = Token<'s>>,
{
    let mut segment = Segment::default();
    if let Token::Tag(name) = leading {
        apply_tag(&mut segment, name, tokens)?;
    }
    loop {
        match tokens.next() {
            Some(Token::Uri(uri)) => {
                segment.uri = uri.to_string();
                #[cfg(feature = "tracing")]
                tracing::trace!(uri = %segment.uri, duration = ?segment.duration, "decoded segment");
                return Ok(segment);
            }
            Some(Token::Tag(name)) => apply_tag(&mut segment, name, tokens)?,
            Some(Token::Error(message)) => return Err(Error::Lex(message)),
            // Value tokens in tag position, e.g. an #EXTINF title.
            Some(Token::String(_) | Token::Number(_) | Token::AttrName(_)) => {}
            None => return Err(Error::MissingUri),
        }
    }
}

/// Apply one tag's effect to the segment under construction, consuming
/// the tag's operand token where it has one.
fn apply_tag<'s, I>(segment: &mut Segment, name: &'s str, tokens: &mut I) -> Result<()>
where
    I: Iterator<Item = Token<'s>>,
{
    match name {
        // Last value wins on repetition.
        TAG_SEGMENT_DURATION => {
            let operand = operand(tokens)?;
            segment.duration = parse_duration(&operand)?;
        }
        TAG_BYTE_RANGE => {
            let operand = operand(tokens)?;
            let Token::String(value) = operand else {
                return Err(Error::invalid_byte_range(operand.to_string()));
            };
            segment.byte_range = Some(value.parse()?);
        }
        TAG_DISCONTINUITY => segment.discontinuity = true,
        TAG_KEY => return Err(Error::unsupported(name)),
        _ => return Err(Error::unsupported(name)),
    }
    Ok(())
}

/// Pull a tag's operand token, propagating a lexer failure. A stream that
/// ends here also ends without a URI, hence [`Error::MissingUri`].
fn operand<'s, I>(tokens: &mut I) -> Result<Token<'s>>
where
    I: Iterator<Item = Token<'s>>,
{
    match tokens.next() {
        Some(Token::Error(message)) => Err(Error::Lex(message)),
        Some(token) => Ok(token),
        None => Err(Error::MissingUri),
    }
}

/// Iterator over the segments of a token stream.
///
/// Yields one `Result<Segment>` per tag run. After yielding an error the
/// iterator is fused; resuming past a broken segment is the caller's
/// decision, with a fresh decode over the remaining tokens.
#[derive(Debug)]
pub struct Segments<'s, I>
where
    I: Iterator<Item = Token<'s>>,
{
    tokens: I,
    done: bool,
}

impl<'s, I> Segments<'s, I>
where
    I: Iterator<Item = Token<'s>>,
{
    /// Wrap a token stream.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            done: false,
        }
    }
}

impl<'s, I> Iterator for Segments<'s, I>
where
    I: Iterator<Item = Token<'s>>,
{
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.tokens.next()? {
                leading @ Token::Tag(_) => {
                    let result = decode_segment(&mut self.tokens, leading);
                    self.done = result.is_err();
                    return Some(result);
                }
                // A tagless segment: representable when decoded,
                // rejected at encode time.
                Token::Uri(uri) => {
                    return Some(Ok(Segment {
                        uri: uri.to_string(),
                        ..Segment::default()
                    }))
                }
                Token::Error(message) => {
                    self.done = true;
                    return Some(Err(Error::Lex(message)));
                }
                Token::String(_) | Token::Number(_) | Token::AttrName(_) => {}
            }
        }
    }
}
