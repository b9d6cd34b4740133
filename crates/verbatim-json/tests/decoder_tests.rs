use verbatim_json::{parse, parse_str, JsonError, TokenKind, Value, MAX_NESTING_DEPTH};

// ============================================================================
// Primitive values
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(parse_str("null").unwrap(), Value::Null);
}

#[test]
fn parse_booleans() {
    assert_eq!(parse_str("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_str("false").unwrap(), Value::Bool(false));
}

#[test]
fn parse_number_keeps_source_text() {
    let value = parse_str("0.100000000000000000001").unwrap();
    assert_eq!(
        value.as_number().unwrap().as_str(),
        "0.100000000000000000001"
    );

    let value = parse_str("-1E10").unwrap();
    assert_eq!(value.as_number().unwrap().as_str(), "-1E10");
}

#[test]
fn parse_string_decodes_standard_escapes() {
    let value = parse_str(r#""a\"b\\c\/d\b\f\n\r\t""#).unwrap();
    assert_eq!(value.as_str().unwrap(), "a\"b\\c/d\u{08}\u{0C}\n\r\t");
}

#[test]
fn parse_string_with_unicode_text() {
    // Raw multi-byte UTF-8 inside the quotes is fine; only `\uXXXX` is not.
    let value = parse_str("\"café\"").unwrap();
    assert_eq!(value.as_str().unwrap(), "café");
}

#[test]
fn unicode_escape_is_signaled_as_unsupported() {
    let err = parse_str("\"\\u0041\"").unwrap_err();
    assert!(matches!(err, JsonError::DataCorrupted { .. }));
}

#[test]
fn invalid_escape_is_corrupted() {
    let err = parse_str(r#""\q""#).unwrap_err();
    assert!(matches!(err, JsonError::DataCorrupted { offset: 1, .. }));
}

#[test]
fn invalid_utf8_in_string_is_corrupted() {
    let err = parse(b"\"\xff\"").unwrap_err();
    assert!(matches!(err, JsonError::DataCorrupted { .. }));
}

#[test]
fn unescaped_control_byte_is_corrupted() {
    let err = parse(b"\"a\x01b\"").unwrap_err();
    assert!(matches!(err, JsonError::DataCorrupted { offset: 2, .. }));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parse_empty_array() {
    assert_eq!(parse_str("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(parse_str(" [ ] ").unwrap(), Value::Array(vec![]));
}

#[test]
fn parse_array_of_values() {
    let value = parse_str(r#"[1, "two", true, null]"#).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].as_i64().unwrap(), 1);
    assert_eq!(items[1].as_str().unwrap(), "two");
    assert_eq!(items[2].as_bool().unwrap(), true);
    assert!(items[3].is_null());
}

#[test]
fn parse_nested_arrays() {
    let value = parse_str("[[1],[],[2,3]]").unwrap();
    assert_eq!(value.count().unwrap(), 3);
    assert_eq!(value[2][1].as_i64().unwrap(), 3);
}

#[test]
fn trailing_comma_is_an_error_at_the_close_bracket() {
    let err = parse_str("[1,2,]").unwrap_err();
    match err {
        JsonError::UnexpectedToken {
            offset,
            expected,
            found,
        } => {
            // The `]` at offset 5 is not a valid value start.
            assert_eq!(offset, 5);
            assert_eq!(found, TokenKind::ArrayClose);
            assert!(expected.contains(&TokenKind::Number));
            assert!(expected.contains(&TokenKind::ObjectOpen));
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn truncated_array_is_data_truncated() {
    assert_eq!(parse_str("[1,2").unwrap_err(), JsonError::DataTruncated);
    assert_eq!(parse_str("[1,").unwrap_err(), JsonError::DataTruncated);
    assert_eq!(parse_str("[").unwrap_err(), JsonError::DataTruncated);
}

// ============================================================================
// Objects: order and duplicates
// ============================================================================

#[test]
fn parse_empty_object() {
    let value = parse_str("{}").unwrap();
    assert_eq!(value.count().unwrap(), 0);
}

#[test]
fn object_preserves_insertion_order() {
    let value = parse_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn object_preserves_duplicate_keys() {
    let value = parse_str(r#"{"a":1,"a":2,"b":3}"#).unwrap();
    let obj = value.as_object().unwrap();

    let keys: Vec<&str> = obj.keys().collect();
    assert_eq!(keys, vec!["a", "a", "b"]);

    // First match wins for `get`.
    assert_eq!(value.get("a").unwrap().as_i64().unwrap(), 1);

    // `get_all` returns every match in insertion order.
    let all: Vec<i64> = value
        .get_all("a")
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(all, vec![1, 2]);
}

#[test]
fn object_equality_is_order_sensitive() {
    let ab = parse_str(r#"{"a":1,"b":2}"#).unwrap();
    let ba = parse_str(r#"{"b":2,"a":1}"#).unwrap();
    assert_ne!(ab, ba);
    assert_eq!(ab, parse_str(r#"{"a":1,"b":2}"#).unwrap());
}

#[test]
fn object_key_must_be_a_string() {
    let err = parse_str("{1:2}").unwrap_err();
    match err {
        JsonError::UnexpectedToken {
            expected, found, ..
        } => {
            assert_eq!(found, TokenKind::Number);
            assert_eq!(expected, &[TokenKind::String]);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn object_member_needs_colon() {
    let err = parse_str(r#"{"a" 1}"#).unwrap_err();
    assert!(matches!(
        err,
        JsonError::UnexpectedToken {
            found: TokenKind::Number,
            ..
        }
    ));
}

#[test]
fn truncated_object_is_data_truncated() {
    assert_eq!(parse_str(r#"{"a":1"#).unwrap_err(), JsonError::DataTruncated);
    assert_eq!(parse_str(r#"{"a":"#).unwrap_err(), JsonError::DataTruncated);
}

// ============================================================================
// Document shape
// ============================================================================

#[test]
fn empty_input_is_truncated() {
    assert_eq!(parse_str("").unwrap_err(), JsonError::DataTruncated);
    assert_eq!(parse_str("   ").unwrap_err(), JsonError::DataTruncated);
}

#[test]
fn exactly_one_root_value() {
    let err = parse_str("1 2").unwrap_err();
    assert!(matches!(
        err,
        JsonError::UnexpectedToken {
            offset: 2,
            found: TokenKind::Number,
            ..
        }
    ));

    // Trailing whitespace after the root is fine.
    assert!(parse_str("1 \n").is_ok());
}

#[test]
fn number_grammar_is_deferred_to_conversion() {
    // `1.2.3` tokenizes as one span and parses as a stored digit string;
    // only typed conversion rejects it.
    let value = parse_str("1.2.3").unwrap();
    assert_eq!(value.as_number().unwrap().as_str(), "1.2.3");
    assert!(matches!(
        value.as_f64().unwrap_err(),
        JsonError::TypeMismatch { .. }
    ));
}

// ============================================================================
// Depth limit
// ============================================================================

#[test]
fn nesting_at_the_limit_parses() {
    let doc = format!(
        "{}1{}",
        "[".repeat(MAX_NESTING_DEPTH),
        "]".repeat(MAX_NESTING_DEPTH)
    );
    assert!(parse_str(&doc).is_ok());
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    let depth = MAX_NESTING_DEPTH + 1;
    let doc = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(
        parse_str(&doc).unwrap_err(),
        JsonError::DepthLimitExceeded {
            limit: MAX_NESTING_DEPTH
        }
    );
}
