//! Property-based tests - pragmatic approach testing core encoding guarantees
//!
//! These tests complement the integration tests by verifying properties
//! across a wide range of generated inputs: literal round-trips under a
//! test-local PostgreSQL-grammar parser, separator placement, and NULL
//! propagation at arbitrary indirection depth.

use proptest::prelude::*;
use sql_literal::{encode_to_string, Dialect, SqlType, SqlValue};

/// Parses a single-quoted string literal back, undoing quote doubling.
fn parse_string_literal(lit: &str) -> String {
    let inner = lit
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .expect("literal quotes");
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\'' {
            assert_eq!(chars.next(), Some('\''), "lone quote inside literal");
        }
        out.push(c);
    }
    out
}

/// Parses a `'{"..",".."}'` text-array literal back into its elements,
/// undoing element-grammar escaping.
fn parse_text_array(lit: &str) -> Vec<String> {
    let inner = lit
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .expect("literal quotes");
    let inner = inner
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .expect("array delimiters");
    let mut elems = Vec::new();
    let mut chars = inner.chars();
    while let Some(open) = chars.next() {
        assert_eq!(open, '"', "elements are always quoted");
        let mut s = String::new();
        loop {
            match chars.next().expect("unterminated element") {
                '\\' => s.push(chars.next().expect("dangling escape")),
                '\'' => {
                    assert_eq!(chars.next(), Some('\''), "lone quote inside element");
                    s.push('\'');
                }
                '"' => break,
                ch => s.push(ch),
            }
        }
        elems.push(s);
        match chars.next() {
            Some(',') | None => {}
            other => panic!("expected separator, found {other:?}"),
        }
    }
    elems
}

/// Strings without NUL bytes; the encoder drops NULs by documented policy,
/// so they are excluded from exact round-trip properties.
fn nul_free_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>().prop_filter("no NUL", |c| *c != '\0'), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_i64_roundtrip(n in any::<i64>()) {
        let text = encode_to_string(&Dialect::postgres(), &SqlValue::from(n)).unwrap();
        prop_assert_eq!(text.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn prop_f64_roundtrip_bit_exact(n in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = encode_to_string(&Dialect::postgres(), &SqlValue::from(n)).unwrap();
        prop_assert_eq!(text.parse::<f64>().unwrap().to_bits(), n.to_bits());
    }

    #[test]
    fn prop_string_roundtrip_under_parse(s in nul_free_string()) {
        let text = encode_to_string(&Dialect::postgres(), &SqlValue::from(s.clone())).unwrap();
        prop_assert_eq!(parse_string_literal(&text), s);
    }

    #[test]
    fn prop_text_array_roundtrip_under_parse(
        elems in prop::collection::vec(nul_free_string(), 0..12)
    ) {
        let value = SqlValue::from(elems.clone());
        let text = encode_to_string(&Dialect::postgres(), &value).unwrap();
        prop_assert_eq!(parse_text_array(&text), elems);
    }

    #[test]
    fn prop_separator_count(xs in prop::collection::vec(any::<i32>(), 0..30)) {
        let n = xs.len();
        let text = encode_to_string(&Dialect::postgres(), &SqlValue::from(xs)).unwrap();
        prop_assert!(
            text.starts_with("'{") && text.ends_with("}'"),
            "array literal must be brace-delimited: {:?}",
            text
        );
        let body = &text[2..text.len() - 2];
        let separators = body.matches(',').count();
        prop_assert_eq!(separators, n.saturating_sub(1));
        // None trailing before the closing delimiter.
        prop_assert!(!body.ends_with(','));
    }

    #[test]
    fn prop_null_at_any_depth(depth in 1usize..6) {
        let mut v = SqlValue::null(SqlType::Text);
        for _ in 1..depth {
            v = SqlValue::some(v);
        }
        // An absent layer underneath present wrappers is still NULL.
        let text = encode_to_string(&Dialect::postgres(), &v).unwrap();
        prop_assert_eq!(text, "NULL");
    }

    #[test]
    fn prop_empty_array_never_null(xs in prop::collection::vec(any::<i64>(), 0..5)) {
        let text = encode_to_string(&Dialect::postgres(), &SqlValue::from(xs)).unwrap();
        prop_assert!(text != "NULL");
    }
}
