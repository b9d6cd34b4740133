//! JSON writer.
//!
//! Serializes a [`Value`] tree back to JSON text. The one rule that makes
//! the pipeline lossless: numbers are emitted exactly as their stored digit
//! string, with no reformatting or normalization. Combined with the ordered,
//! duplicate-preserving object model, `write(parse(doc))` reproduces every
//! number byte-for-byte and every member in its original position.
//!
//! Writing never fails: the variant set is closed, so there is no
//! "unrecognized value" case to defend against.

use crate::types::{Object, Value};

/// Formatting options. All independent and composable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// 2-space indentation, one member/element per line, `": "` after keys.
    pub pretty: bool,
    /// Emit object members in lexicographic key order instead of insertion
    /// order. This deliberately breaks the order-preservation contract, so
    /// it is opt-in only. The sort is stable: duplicate keys keep their
    /// relative order.
    pub sort_keys: bool,
    /// Escape `/` as `\/` in strings — conservative JSON-in-HTML practice.
    /// On by default.
    pub escape_slashes: bool,
}

impl Default for WriteOptions {
    fn default() -> WriteOptions {
        WriteOptions {
            pretty: false,
            sort_keys: false,
            escape_slashes: true,
        }
    }
}

/// Serialize a value tree to JSON text.
pub fn write(value: &Value, options: &WriteOptions) -> String {
    let mut out = String::new();
    write_value(value, options, 0, &mut out);
    out
}

/// Serialize with default options (compact, insertion order, `\/`).
pub fn write_compact(value: &Value) -> String {
    write(value, &WriteOptions::default())
}

fn write_value(value: &Value, options: &WriteOptions, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(n.as_str()),
        Value::String(s) => write_string(s, options, out),
        Value::Array(items) => write_array(items, options, depth, out),
        Value::Object(obj) => write_object(obj, options, depth, out),
    }
}

fn write_array(items: &[Value], options: &WriteOptions, depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if options.pretty {
            out.push('\n');
            push_indent(depth + 1, out);
        }
        write_value(item, options, depth + 1, out);
    }
    if options.pretty {
        out.push('\n');
        push_indent(depth, out);
    }
    out.push(']');
}

fn write_object(obj: &Object, options: &WriteOptions, depth: usize, out: &mut String) {
    if obj.is_empty() {
        out.push_str("{}");
        return;
    }

    let mut members: Vec<(&str, &Value)> = obj.iter().collect();
    if options.sort_keys {
        // Stable: duplicate keys keep their relative insertion order.
        members.sort_by_key(|(k, _)| *k);
    }

    out.push('{');
    for (i, (key, value)) in members.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if options.pretty {
            out.push('\n');
            push_indent(depth + 1, out);
        }
        write_string(key, options, out);
        out.push(':');
        if options.pretty {
            out.push(' ');
        }
        write_value(value, options, depth + 1, out);
    }
    if options.pretty {
        out.push('\n');
        push_indent(depth, out);
    }
    out.push('}');
}

/// Emit a string with quotes, re-escaping the quote, the backslash, every
/// control character below 0x20 (named escapes where JSON has them, `\u00XX`
/// otherwise), and optionally the forward slash.
fn write_string(s: &str, options: &WriteOptions, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' if options.escape_slashes => out.push_str("\\/"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
