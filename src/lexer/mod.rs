//! Line-oriented lexer for media playlist text.
//!
//! This module turns raw playlist text into the token sequence the
//! segment decoder consumes. Tag lines yield a [`Token::Tag`] followed by
//! the tokens of their value portion, other non-comment lines yield a
//! [`Token::Uri`], and a malformed line yields a single terminal
//! [`Token::Error`].

mod token;
pub use token::Token;

use std::collections::VecDeque;
use std::iter::Enumerate;
use std::str::Lines;

use crate::segment::TAG_SEGMENT_DURATION;

/// A lexer over playlist text.
///
/// Tokens are produced lazily, line by line. The sequence is finite and
/// non-restartable: after a [`Token::Error`] the lexer yields nothing.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    lines: Enumerate<Lines<'src>>,
    line_no: usize,
    queue: VecDeque<Token<'src>>,
    done: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer for the given playlist text.
    pub fn new(input: &'src str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            line_no: 0,
            queue: VecDeque::new(),
            done: false,
        }
    }

    /// Queue the tokens of one tag line.
    fn lex_tag_line(&mut self, line: &'src str) {
        let (name, value) = match line.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (line, None),
        };
        self.queue.push_back(Token::Tag(name));
        let Some(value) = value else { return };
        if name == TAG_SEGMENT_DURATION {
            self.lex_duration_value(value);
        } else {
            self.lex_attribute_list(value);
        }
    }

    /// The duration tag's value has its own form: `<duration>[,<title>]`.
    /// The title runs to the end of the line and may contain commas.
    fn lex_duration_value(&mut self, value: &'src str) {
        let (duration, title) = match value.split_once(',') {
            Some((duration, title)) => (duration, Some(title)),
            None => (value, None),
        };
        if !duration.is_empty() {
            self.queue.push_back(classify_field(duration));
        }
        if let Some(title) = title {
            if !title.is_empty() {
                self.queue.push_back(Token::String(title));
            }
        }
    }

    /// Scan an attribute list: comma-separated fields, each either a
    /// standalone value or `name=value` with an optionally quoted value.
    fn lex_attribute_list(&mut self, value: &'src str) {
        let mut rest = value;
        while !rest.is_empty() {
            if let Some((name, tail)) = split_attr_name(rest) {
                self.queue.push_back(Token::AttrName(name));
                rest = tail;
                if let Some(tail) = rest.strip_prefix('"') {
                    let Some(end) = tail.find('"') else {
                        self.push_error("unterminated quoted value");
                        return;
                    };
                    self.queue.push_back(Token::String(&tail[..end]));
                    rest = &tail[end + 1..];
                    match rest.strip_prefix(',') {
                        Some(tail) => rest = tail,
                        None if rest.is_empty() => {}
                        None => {
                            self.push_error(format!(
                                "expected , after quoted value, found {:?}",
                                rest
                            ));
                            return;
                        }
                    }
                    continue;
                }
                let (field, tail) = split_field(rest);
                if !field.is_empty() {
                    self.queue.push_back(classify_field(field));
                }
                rest = tail;
            } else {
                // Standalone fields are never numbers; byte range values
                // like 8000@1024 or a bare 8000 must stay strings.
                let (field, tail) = split_field(rest);
                if !field.is_empty() {
                    self.queue.push_back(Token::String(field));
                }
                rest = tail;
            }
        }
    }

    fn push_error(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        self.queue
            .push_back(Token::Error(format!("line {}: {}", self.line_no, reason)));
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if let Some(token) = self.queue.pop_front() {
                if matches!(token, Token::Error(_)) {
                    self.done = true;
                }
                return Some(token);
            }
            let (index, line) = self.lines.next()?;
            self.line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("#EXT") {
                self.lex_tag_line(line);
            } else if line.starts_with('#') {
                // Comment line.
                continue;
            } else {
                return Some(Token::Uri(line));
            }
        }
    }
}

/// Split one comma-terminated field off the front of `rest`.
fn split_field(rest: &str) -> (&str, &str) {
    match rest.split_once(',') {
        Some((field, tail)) => (field, tail),
        None => (rest, ""),
    }
}

/// Split a leading `name=` off `rest` when `name` is a nonempty run of
/// ASCII alphanumerics and dashes.
fn split_attr_name(rest: &str) -> Option<(&str, &str)> {
    let end = rest
        .bytes()
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'-'))?;
    if end == 0 || rest.as_bytes()[end] != b'=' {
        return None;
    }
    Some((&rest[..end], &rest[end + 1..]))
}

/// Classify a field in number position.
fn classify_field(field: &str) -> Token<'_> {
    if field.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        Token::Number(field)
    } else {
        Token::String(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_and_uri_lines() {
        let tokens: Vec<_> = Lexer::new("#EXTINF:9.967\nsegment-0.ts\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXTINF"),
                Token::Number("9.967"),
                Token::Uri("segment-0.ts"),
            ]
        );
    }

    #[test]
    fn test_duration_with_title() {
        let tokens: Vec<_> = Lexer::new("#EXTINF:10,Episode 1, part two\nvideo.ts\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXTINF"),
                Token::Number("10"),
                Token::String("Episode 1, part two"),
                Token::Uri("video.ts"),
            ]
        );
    }

    #[test]
    fn test_duration_trailing_comma() {
        let tokens: Vec<_> = Lexer::new("#EXTINF:6.006,\nfirst.ts\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXTINF"),
                Token::Number("6.006"),
                Token::Uri("first.ts"),
            ]
        );
    }

    #[test]
    fn test_tag_without_value() {
        let tokens: Vec<_> = Lexer::new("#EXT-X-DISCONTINUITY\n").collect();
        assert_eq!(tokens, vec![Token::Tag("#EXT-X-DISCONTINUITY")]);
    }

    #[test]
    fn test_attribute_list() {
        let line = "#EXT-X-KEY:METHOD=AES-128,URI=\"https://example.com/key?id=1\",IV=0x1234\n";
        let tokens: Vec<_> = Lexer::new(line).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXT-X-KEY"),
                Token::AttrName("METHOD"),
                Token::String("AES-128"),
                Token::AttrName("URI"),
                Token::String("https://example.com/key?id=1"),
                Token::AttrName("IV"),
                Token::String("0x1234"),
            ]
        );
    }

    #[test]
    fn test_numeric_attribute_value() {
        let tokens: Vec<_> = Lexer::new("#EXT-X-DATERANGE:ID=\"ad\",DURATION=59.993\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXT-X-DATERANGE"),
                Token::AttrName("ID"),
                Token::String("ad"),
                Token::AttrName("DURATION"),
                Token::Number("59.993"),
            ]
        );
    }

    #[test]
    fn test_byte_range_values_are_strings() {
        let tokens: Vec<_> = Lexer::new("#EXT-X-BYTERANGE:75232@0\n#EXT-X-BYTERANGE:69864\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXT-X-BYTERANGE"),
                Token::String("75232@0"),
                Token::Tag("#EXT-X-BYTERANGE"),
                Token::String("69864"),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let tokens: Vec<_> = Lexer::new("\n# produced by packager\n#EXTINF:6.000\n\nmain.ts\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXTINF"),
                Token::Number("6.000"),
                Token::Uri("main.ts"),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let tokens: Vec<_> = Lexer::new("#EXTINF:6.000\r\nmain.ts\r\n").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Tag("#EXTINF"),
                Token::Number("6.000"),
                Token::Uri("main.ts"),
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_is_terminal() {
        let mut lexer = Lexer::new("#EXT-X-KEY:METHOD=AES-128,URI=\"oops\nnext.ts\n");
        assert_eq!(lexer.next(), Some(Token::Tag("#EXT-X-KEY")));
        assert_eq!(lexer.next(), Some(Token::AttrName("METHOD")));
        assert_eq!(lexer.next(), Some(Token::String("AES-128")));
        assert_eq!(lexer.next(), Some(Token::AttrName("URI")));
        match lexer.next() {
            Some(Token::Error(message)) => {
                assert_eq!(message, "line 1: unterminated quoted value");
            }
            other => panic!("expected error token, got {:?}", other),
        }
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_junk_after_quoted_value() {
        let tokens: Vec<_> = Lexer::new("#EXT-X-MAP:URI=\"init.mp4\"x\n").collect();
        match tokens.last() {
            Some(Token::Error(message)) => {
                assert!(message.starts_with("line 1:"), "message: {}", message);
            }
            other => panic!("expected error token, got {:?}", other),
        }
    }

    #[test]
    fn test_error_reports_line_number() {
        let tokens: Vec<_> = Lexer::new("#EXTINF:6.000\nmain.ts\n#EXT-X-KEY:URI=\"open\n").collect();
        match tokens.last() {
            Some(Token::Error(message)) => {
                assert_eq!(message, "line 3: unterminated quoted value");
            }
            other => panic!("expected error token, got {:?}", other),
        }
    }
}
