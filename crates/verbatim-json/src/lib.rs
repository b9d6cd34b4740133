//! # verbatim-json
//!
//! A lossless JSON codec: bytes → tokens → [`Value`] → bytes, without ever
//! passing the document through a map/float-based representation.
//!
//! Conventional JSON libraries lose information in three places: they
//! reorder object keys, collapse duplicate keys, and round numbers through
//! floating point. This crate keeps all three intact:
//!
//! - objects are ordered sequences of pairs, duplicates preserved;
//! - numbers keep their exact source text until an accessor asks for a
//!   typed conversion;
//! - `write(parse(doc))` reproduces every number byte-for-byte.
//!
//! ## Quick start
//!
//! ```rust
//! use verbatim_json::{parse, write_compact};
//!
//! let value = parse(br#"{"a":0.100000000000000000001,"a":2}"#).unwrap();
//! assert_eq!(value["a"].as_number().unwrap().as_str(), "0.100000000000000000001");
//! assert_eq!(write_compact(&value), r#"{"a":0.100000000000000000001,"a":2}"#);
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] — bytes → located, classified token spans
//! - [`decoder`] — tokens → [`Value`] tree (recursive descent)
//! - [`encoder`] — [`Value`] tree → JSON text, with [`WriteOptions`]
//! - [`types`] — the value model and typed accessors
//! - [`error`] — the error taxonomy shared by all stages
//!
//! Everything is a pure function over immutable input; there is no global
//! state, and independent documents can be processed concurrently.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod types;

pub use decoder::{parse, parse_str, MAX_NESTING_DEPTH};
pub use encoder::{write, write_compact, WriteOptions};
pub use error::{JsonError, Result};
pub use lexer::{tokenize, Token, TokenKind};
pub use types::{Number, Object, Value};
