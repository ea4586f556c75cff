//! Token types for the playlist lexer.

use std::fmt;

/// A lexical item from a media playlist.
///
/// Every variant except [`Token::Error`] borrows its text from the input.
/// An `Error` token owns its message and is terminal: the lexer emits
/// nothing after it, and a decoder must abort the segment it is building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// A tag name up to but excluding the colon (e.g. `#EXTINF`).
    Tag(&'src str),
    /// A URI line.
    Uri(&'src str),
    /// A standalone value field or a quoted attribute value, quotes
    /// stripped.
    String(&'src str),
    /// A numeric-shaped field: ASCII digits and dots only.
    Number(&'src str),
    /// An attribute name, the part before `=` in an attribute list.
    AttrName(&'src str),
    /// A lexing failure, carrying the line and reason.
    Error(String),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tag(text) => write!(f, "tag {}", text),
            Token::Uri(text) => write!(f, "uri {}", text),
            Token::String(text) => write!(f, "string {}", text),
            Token::Number(text) => write!(f, "number {}", text),
            Token::AttrName(text) => write!(f, "attribute name {}", text),
            Token::Error(message) => write!(f, "error {}", message),
        }
    }
}
