//! Recursive-descent JSON parser.
//!
//! Consumes the tokenizer's output and builds a [`Value`] tree, validating
//! structural well-formedness:
//!
//! ```text
//! value   := array | object | "true" | "false" | "null" | STRING | NUMBER
//! array   := '[' (value (',' value)*)? ']'
//! object  := '{' (member (',' member)*)? '}'
//! member  := STRING ':' value
//! ```
//!
//! # Key design decisions
//!
//! - **Peek before committing**: empty containers are detected by one-token
//!   lookahead for the matching close, never by attempting an element parse
//!   and interpreting the failure.
//! - **Duplicate keys are appended**, never merged or rejected; the parser
//!   does not deduplicate.
//! - **Escape decoding happens here**, when a string token becomes text.
//!   The tokenizer only delimits spans.
//! - **Numbers stay textual**: a number token is stored verbatim as a digit
//!   string; conversion to a numeric type is an accessor-time concern.
//!
//! The first structural or lexical error aborts the whole parse with its
//! byte offset. There is no recovery and no partial result.

use crate::error::{JsonError, Result};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::types::{Number, Object, Value};

/// Maximum container nesting depth.
///
/// Recursion during parsing is proportional to document depth, so input
/// nested deeper than this fails with `DepthLimitExceeded` instead of
/// overflowing the call stack. A document nested exactly this deep parses.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Token kinds that can start a value.
const VALUE_START: &[TokenKind] = &[
    TokenKind::ObjectOpen,
    TokenKind::ArrayOpen,
    TokenKind::String,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
];

const AFTER_ELEMENT: &[TokenKind] = &[TokenKind::Comma, TokenKind::ArrayClose];
const AFTER_MEMBER: &[TokenKind] = &[TokenKind::Comma, TokenKind::ObjectClose];
const MEMBER_KEY: &[TokenKind] = &[TokenKind::String];
const MEMBER_COLON: &[TokenKind] = &[TokenKind::Colon];
/// Nothing is valid after the root value.
const END_OF_DOCUMENT: &[TokenKind] = &[];

/// Parse a complete JSON document into a [`Value`].
///
/// The buffer must hold exactly one root value, surrounded by optional
/// whitespace; anything else is an error.
pub fn parse(input: &[u8]) -> Result<Value> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    let value = parser.parse_value()?;

    // Exactly one root value per document.
    if let Some(token) = parser.peek() {
        return Err(JsonError::UnexpectedToken {
            offset: token.offset,
            expected: END_OF_DOCUMENT,
            found: token.kind,
        });
    }

    Ok(value)
}

/// Parse a document held in a `&str`. Equivalent to [`parse`] on its bytes.
pub fn parse_str(input: &str) -> Result<Value> {
    parse(input.as_bytes())
}

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Next non-whitespace token, without consuming it.
    fn peek(&mut self) -> Option<&Token<'a>> {
        while let Some(token) = self.tokens.get(self.pos) {
            if token.kind == TokenKind::Whitespace {
                self.pos += 1;
            } else {
                return Some(token);
            }
        }
        None
    }

    /// Consume and return the next non-whitespace token.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek().copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token, requiring `kind`. Running out of tokens is a
    /// truncation; the wrong kind reports the full expected set.
    fn expect(&mut self, kind: TokenKind, expected: &'static [TokenKind]) -> Result<Token<'a>> {
        let token = self.next().ok_or(JsonError::DataTruncated)?;
        if token.kind != kind {
            return Err(JsonError::UnexpectedToken {
                offset: token.offset,
                expected,
                found: token.kind,
            });
        }
        Ok(token)
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = *self.peek().ok_or(JsonError::DataTruncated)?;
        match token.kind {
            TokenKind::ObjectOpen => self.parse_object(),
            TokenKind::ArrayOpen => self.parse_array(),
            TokenKind::True => {
                self.pos += 1;
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.pos += 1;
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.pos += 1;
                Ok(Value::Null)
            }
            TokenKind::String => {
                self.pos += 1;
                Ok(Value::String(decode_string(&token)?))
            }
            TokenKind::Number => {
                self.pos += 1;
                Ok(Value::Number(Number::from_raw(decode_number(&token)?)))
            }
            found => Err(JsonError::UnexpectedToken {
                offset: token.offset,
                expected: VALUE_START,
                found,
            }),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1; // consume '['

        let mut items = Vec::new();

        // Peek for the empty form before committing to an element.
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::ArrayClose {
                self.pos += 1;
                self.leave();
                return Ok(Value::Array(items));
            }
        }

        loop {
            items.push(self.parse_value()?);

            let token = self.next().ok_or(JsonError::DataTruncated)?;
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::ArrayClose => break,
                found => {
                    return Err(JsonError::UnexpectedToken {
                        offset: token.offset,
                        expected: AFTER_ELEMENT,
                        found,
                    });
                }
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1; // consume '{'

        let mut object = Object::new();

        if let Some(token) = self.peek() {
            if token.kind == TokenKind::ObjectClose {
                self.pos += 1;
                self.leave();
                return Ok(Value::Object(object));
            }
        }

        loop {
            let key_token = self.expect(TokenKind::String, MEMBER_KEY)?;
            let key = decode_string(&key_token)?;

            self.expect(TokenKind::Colon, MEMBER_COLON)?;

            // Duplicate keys are appended as-is; the model keeps them all.
            object.insert(key, self.parse_value()?);

            let token = self.next().ok_or(JsonError::DataTruncated)?;
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::ObjectClose => break,
                found => {
                    return Err(JsonError::UnexpectedToken {
                        offset: token.offset,
                        expected: AFTER_MEMBER,
                        found,
                    });
                }
            }
        }

        self.leave();
        Ok(Value::Object(object))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(JsonError::DepthLimitExceeded {
                limit: MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Decode a string token's span (quotes included) into text.
///
/// Handles the standard escapes `\\ \" \/ \b \f \n \r \t`. `\uXXXX` is
/// signaled as unsupported rather than half-decoded: UTF-16 surrogate-pair
/// handling is a documented non-goal of this crate. Unescaped control bytes
/// and invalid UTF-8 inside the quotes are `DataCorrupted`.
fn decode_string(token: &Token<'_>) -> Result<String> {
    let span = &token.text[1..token.text.len() - 1];
    let mut out = Vec::with_capacity(span.len());
    let mut i = 0;

    while i < span.len() {
        let b = span[i];
        if b == b'\\' {
            let escape = span.get(i + 1).copied().ok_or(JsonError::DataTruncated)?;
            let decoded = match escape {
                b'"' => b'"',
                b'\\' => b'\\',
                b'/' => b'/',
                b'b' => 0x08,
                b'f' => 0x0C,
                b'n' => b'\n',
                b'r' => b'\r',
                b't' => b'\t',
                b'u' => {
                    return Err(JsonError::DataCorrupted {
                        offset: token.offset + 1 + i,
                        reason: "\\u escapes are not supported".to_string(),
                    });
                }
                other => {
                    return Err(JsonError::DataCorrupted {
                        offset: token.offset + 1 + i,
                        reason: format!("invalid escape sequence \\{}", other as char),
                    });
                }
            };
            out.push(decoded);
            i += 2;
        } else if b < 0x20 {
            return Err(JsonError::DataCorrupted {
                offset: token.offset + 1 + i,
                reason: format!("unescaped control byte 0x{b:02x} in string"),
            });
        } else {
            out.push(b);
            i += 1;
        }
    }

    String::from_utf8(out).map_err(|_| JsonError::DataCorrupted {
        offset: token.offset,
        reason: "string is not valid UTF-8".to_string(),
    })
}

/// Store a number token's span verbatim. The span is ASCII by construction,
/// but the conversion still propagates rather than assuming.
fn decode_number(token: &Token<'_>) -> Result<String> {
    std::str::from_utf8(token.text)
        .map(str::to_string)
        .map_err(|_| JsonError::DataCorrupted {
            offset: token.offset,
            reason: "number span is not valid UTF-8".to_string(),
        })
}
