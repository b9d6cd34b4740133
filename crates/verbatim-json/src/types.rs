//! The in-memory value model.
//!
//! A parsed document is a tree of [`Value`] nodes. Two properties set this
//! model apart from the usual map/float representation:
//!
//! - [`Number`] stores the exact digit string from the source. Nothing is
//!   converted to a binary float at parse time, so re-serializing a parsed
//!   number reproduces its input bytes verbatim. Typed conversion happens
//!   only when an accessor asks for it, and fails explicitly on overflow or
//!   invalid grammar instead of truncating through an intermediate float.
//! - [`Object`] stores an append-ordered vector of `(key, value)` pairs.
//!   Insertion order is observable, duplicate keys are kept, and equality
//!   is order-sensitive. Lookups are O(n) in the member count, which is the
//!   deliberate trade for order and duplicate fidelity.

use crate::error::{JsonError, Result};

/// A JSON document value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order, duplicates preserved.
    Object(Object),
}

/// A JSON number, stored as its exact source text.
///
/// The digit string keeps sign, integer part, fraction, and exponent exactly
/// as written (`-1E10` stays `-1E10`, never `-10000000000`). Equality and
/// hashing compare the text, so `1.0` and `1` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    digits: String,
}

/// An ordered, duplicate-tolerant JSON object.
///
/// Backed by a `Vec<(String, Value)>` rather than a hash map: member order
/// is semantically significant here and duplicate keys are legal. Two
/// objects are equal only if they hold the same pairs in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Object {
    members: Vec<(String, Value)>,
}

static NULL: Value = Value::Null;

impl Value {
    /// Human-readable variant name, used in `TypeMismatch` errors.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string content, or `TypeMismatch` for any other variant.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", other)),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(mismatch("number", other)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(mismatch("array", other)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(mismatch("object", other)),
        }
    }

    /// Shorthand for [`Number::as_i64`] on a number value.
    pub fn as_i64(&self) -> Result<i64> {
        self.as_number()?.as_i64()
    }

    /// Shorthand for [`Number::as_u64`] on a number value.
    pub fn as_u64(&self) -> Result<u64> {
        self.as_number()?.as_u64()
    }

    /// Shorthand for [`Number::as_f64`] on a number value.
    pub fn as_f64(&self) -> Result<f64> {
        self.as_number()?.as_f64()
    }

    /// Element or member count of a container.
    ///
    /// Fails with `TypeMismatch` on scalars — use [`Value::is_null`] or the
    /// typed accessors for those.
    pub fn count(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            Value::Object(obj) => Ok(obj.len()),
            other => Err(mismatch("array or object", other)),
        }
    }

    /// First value for `key` in an object, `MissingValue` if absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_object()?.get(key).ok_or(JsonError::MissingValue)
    }

    /// Every value for `key` in insertion order (empty if absent).
    pub fn get_all(&self, key: &str) -> Result<Vec<&Value>> {
        Ok(self.as_object()?.get_all(key))
    }

    /// Array element at `index`, bounds-checked.
    pub fn get_index(&self, index: usize) -> Result<&Value> {
        self.as_array()?.get(index).ok_or(JsonError::MissingValue)
    }
}

fn mismatch(expected: &'static str, found: &Value) -> JsonError {
    JsonError::TypeMismatch {
        expected,
        found: found.kind_name(),
    }
}

/// Convenience indexing for objects.
///
/// Collapses both `MissingValue` and `TypeMismatch` to `&Value::Null` —
/// ergonomic for drilling into documents of known shape, but it silently
/// defaults where [`Value::get`] would report the precise error. This is the
/// only place in the crate where an error becomes a silent default.
impl std::ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Convenience indexing for arrays; same null-collapse trade as `Index<&str>`.
impl std::ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl Number {
    /// Wrap a digit string after checking it against the RFC 8259 number
    /// grammar. Returns `None` for anything a JSON writer could not emit.
    pub fn from_digits(digits: impl Into<String>) -> Option<Number> {
        let digits = digits.into();
        if is_valid_number_grammar(&digits) {
            Some(Number { digits })
        } else {
            None
        }
    }

    /// Internal constructor for the parser: the token span is stored
    /// verbatim, grammar validation is deferred to accessor calls.
    pub(crate) fn from_raw(digits: String) -> Number {
        Number { digits }
    }

    /// Build a number from a float. Returns `None` for NaN and infinities,
    /// which have no JSON representation.
    ///
    /// Formatting goes through `Display`, which is locale-independent:
    /// always `.` as the decimal separator, no grouping.
    pub fn from_f64(f: f64) -> Option<Number> {
        if f.is_finite() {
            Some(Number {
                digits: f.to_string(),
            })
        } else {
            None
        }
    }

    /// The exact source text of the number. This is the lossless accessor:
    /// no binary intermediate, arbitrary precision preserved.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Parse the digit string as `i64`, directly — never through a float.
    ///
    /// A digit string that is not integer-shaped (fraction, exponent, or
    /// invalid grammar) is `TypeMismatch`; an integer-shaped string that
    /// does not fit is `NumberOutOfRange`.
    pub fn as_i64(&self) -> Result<i64> {
        if !is_integer_shaped(&self.digits) {
            return Err(JsonError::TypeMismatch {
                expected: "integer",
                found: "non-integer number",
            });
        }
        self.digits
            .parse()
            .map_err(|_| JsonError::NumberOutOfRange {
                digits: self.digits.clone(),
                target: "i64",
            })
    }

    /// Parse the digit string as `u64`; see [`Number::as_i64`].
    pub fn as_u64(&self) -> Result<u64> {
        if !is_integer_shaped(&self.digits) {
            return Err(JsonError::TypeMismatch {
                expected: "integer",
                found: "non-integer number",
            });
        }
        self.digits
            .parse()
            .map_err(|_| JsonError::NumberOutOfRange {
                digits: self.digits.clone(),
                target: "u64",
            })
    }

    /// Parse the digit string as `f64`.
    ///
    /// This is the one accessor where precision loss is on the table, and
    /// the caller asked for it explicitly. Invalid grammar (possible for
    /// tokens like `1.2.3`, which the tokenizer accepts as spans) is
    /// `TypeMismatch`.
    pub fn as_f64(&self) -> Result<f64> {
        if !is_valid_number_grammar(&self.digits) {
            return Err(JsonError::TypeMismatch {
                expected: "number",
                found: "malformed digit string",
            });
        }
        self.digits
            .parse()
            .map_err(|_| JsonError::TypeMismatch {
                expected: "number",
                found: "malformed digit string",
            })
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Integer-shaped: optional `-`, then digits only. No fraction, no exponent.
fn is_integer_shaped(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

/// RFC 8259 number grammar: `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_valid_number_grammar(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;

    if b.get(i) == Some(&b'-') {
        i += 1;
    }
    // Integer part: 0, or a nonzero digit followed by digits.
    match b.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            while matches!(b.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return false,
    }
    // Fraction.
    if b.get(i) == Some(&b'.') {
        i += 1;
        if !matches!(b.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(b.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }
    // Exponent.
    if matches!(b.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        if !matches!(b.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(b.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }
    i == b.len()
}

impl Object {
    pub fn new() -> Object {
        Object {
            members: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Object {
        Object {
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append a member. Never merges: inserting an existing key adds a
    /// duplicate pair at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.members.push((key.into(), value.into()));
    }

    /// Does at least one member carry this key? O(n).
    pub fn contains_key(&self, key: &str) -> bool {
        self.members.iter().any(|(k, _)| k == key)
    }

    /// First value for `key`, in insertion order. O(n).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Every value for `key`, in insertion order. Empty if absent.
    pub fn get_all(&self, key: &str) -> Vec<&Value> {
        self.members
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Keys actually present, in insertion order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(k, _)| k.as_str())
    }

    /// All members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Object {
        Object {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        // Exposes the pair slice directly for callers that want tuples.
        self.members.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(Number {
            digits: n.to_string(),
        })
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Value {
        Value::Number(Number {
            digits: n.to_string(),
        })
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::from(i64::from(n))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Value {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
