//! JSON tokenizer.
//!
//! Splits a byte buffer into a flat sequence of classified, located spans in
//! a single O(n) pass with no backtracking. Tokens borrow their spans from
//! the input; nothing is decoded here — string escape interpretation and
//! number grammar validation are deliberately deferred to whoever reads the
//! token contents (the parser, or accessor-time conversion).

use crate::error::{JsonError, Result};

/// Token classification. Closed set, matched exhaustively downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// A string span, including both quotes, escapes uninterpreted.
    String,
    /// A maximal run over `{+, -, ., 0-9, e, E}`. Grammar not validated:
    /// `1.2.3` is a legal *token*; conversion to a numeric type rejects it.
    Number,
    /// A maximal run of space, tab, CR, LF.
    Whitespace,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::ArrayOpen => "'['",
            TokenKind::ArrayClose => "']'",
            TokenKind::ObjectOpen => "'{'",
            TokenKind::ObjectClose => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Whitespace => "whitespace",
        };
        f.write_str(name)
    }
}

/// One classified span of the source buffer.
///
/// Immutable once produced. `text` is the exact byte slice the token covers
/// (for strings, quotes included), `offset` its start in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
    pub offset: usize,
    /// True when the scan reached the end of the buffer without a definitive
    /// terminator — a number run that may continue, for instance. Only
    /// meaningful to callers feeding incremental input; `tokenize` itself
    /// treats the buffer as complete.
    pub possibly_truncated: bool,
}

/// Tokenize a complete buffer.
///
/// The first unrecognizable byte aborts with `UnexpectedByte`; a literal or
/// string cut off by the end of the buffer aborts with `DataTruncated`.
pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let token = match input[pos] {
            b'[' => structural(input, pos, TokenKind::ArrayOpen),
            b']' => structural(input, pos, TokenKind::ArrayClose),
            b'{' => structural(input, pos, TokenKind::ObjectOpen),
            b'}' => structural(input, pos, TokenKind::ObjectClose),
            b':' => structural(input, pos, TokenKind::Colon),
            b',' => structural(input, pos, TokenKind::Comma),
            b't' => read_literal(input, pos, b"true", TokenKind::True)?,
            b'f' => read_literal(input, pos, b"false", TokenKind::False)?,
            b'n' => read_literal(input, pos, b"null", TokenKind::Null)?,
            b'"' => read_string(input, pos)?,
            b'-' | b'0'..=b'9' => read_number(input, pos),
            b' ' | b'\t' | b'\r' | b'\n' => read_whitespace(input, pos),
            found => {
                return Err(JsonError::UnexpectedByte { offset: pos, found });
            }
        };
        pos += token.text.len();
        tokens.push(token);
    }

    Ok(tokens)
}

fn structural(input: &[u8], pos: usize, kind: TokenKind) -> Token<'_> {
    Token {
        kind,
        text: &input[pos..pos + 1],
        offset: pos,
        possibly_truncated: false,
    }
}

/// Match `true`, `false`, or `null` byte-for-byte.
///
/// A strict prefix cut off by the buffer end is a truncation, not a lexical
/// error; a mismatching byte fails at its own offset.
fn read_literal<'a>(
    input: &'a [u8],
    pos: usize,
    literal: &'static [u8],
    kind: TokenKind,
) -> Result<Token<'a>> {
    for (i, &expected) in literal.iter().enumerate() {
        match input.get(pos + i) {
            None => return Err(JsonError::DataTruncated),
            Some(&found) if found != expected => {
                return Err(JsonError::UnexpectedByte {
                    offset: pos + i,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(Token {
        kind,
        text: &input[pos..pos + literal.len()],
        offset: pos,
        possibly_truncated: false,
    })
}

/// Scan a string span up to the unescaped closing quote.
///
/// Advances 2 past any backslash to skip the escaped byte without
/// interpreting it. Escape validity and UTF-8 decoding happen later, when
/// the parser turns the span into text.
fn read_string(input: &[u8], pos: usize) -> Result<Token<'_>> {
    let mut i = pos + 1;
    loop {
        match input.get(i) {
            None => return Err(JsonError::DataTruncated),
            Some(b'\\') => i += 2,
            Some(b'"') => {
                return Ok(Token {
                    kind: TokenKind::String,
                    text: &input[pos..i + 1],
                    offset: pos,
                    possibly_truncated: false,
                });
            }
            Some(_) => i += 1,
        }
    }
}

/// Greedily consume the maximal run of number-ish bytes.
///
/// The run reaching the buffer end is ambiguous (more digits could follow in
/// a longer buffer), so the token is flagged `possibly_truncated` there.
fn read_number(input: &[u8], pos: usize) -> Token<'_> {
    let mut i = pos;
    while let Some(&b) = input.get(i) {
        match b {
            b'+' | b'-' | b'.' | b'0'..=b'9' | b'e' | b'E' => i += 1,
            _ => break,
        }
    }
    Token {
        kind: TokenKind::Number,
        text: &input[pos..i],
        offset: pos,
        possibly_truncated: i == input.len(),
    }
}

fn read_whitespace(input: &[u8], pos: usize) -> Token<'_> {
    let mut i = pos;
    while let Some(&b) = input.get(i) {
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            _ => break,
        }
    }
    Token {
        kind: TokenKind::Whitespace,
        text: &input[pos..i],
        offset: pos,
        possibly_truncated: i == input.len(),
    }
}
