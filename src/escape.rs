//! Scalar rendering and string escaping.
//!
//! Two escaping grammars exist. Top-level string literals are wrapped in the
//! dialect literal quote with the quote char doubled (or backslash-escaped
//! under [`Dialect::backslash_escapes`]). Strings in array element position
//! use the stricter element grammar: wrapped in the element quote, with the
//! literal quote doubled and the element quote and backslash escaped by a
//! backslash.
//!
//! Embedded NUL bytes are dropped in both grammars; the target text format
//! cannot represent them. All other characters, including multi-byte
//! sequences, are copied verbatim. Because text values are `String`,
//! invalid UTF-8 is unrepresentable by construction and codepoint alignment
//! is guaranteed by iterating `char`s; raw bytes take the [`SqlValue::Bytes`]
//! path, which hex-encodes and never needs character escaping.
//!
//! Floats render via `Display`, which produces the shortest decimal text
//! that re-parses to the identical bit pattern. Non-finite values render
//! the `NaN` / `Infinity` / `-Infinity` tokens, quoted at top level and
//! bare in element position.

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::value::SqlValue;

/// Timestamp rendering format: microsecond precision with a numeric UTC
/// offset, parseable by both PostgreSQL and MySQL.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

#[inline]
pub(crate) fn append_null(dialect: &Dialect, buf: &mut String) {
    buf.push_str(&dialect.null_token);
}

/// Renders a scalar in top-level literal position.
pub(crate) fn append_scalar(dialect: &Dialect, buf: &mut String, value: &SqlValue) -> Result<()> {
    match value {
        SqlValue::Bool(b) => buf.push_str(if *b { "TRUE" } else { "FALSE" }),
        SqlValue::Int16(n) => buf.push_str(&n.to_string()),
        SqlValue::Int32(n) => buf.push_str(&n.to_string()),
        SqlValue::Int64(n) => buf.push_str(&n.to_string()),
        SqlValue::Float32(f) => append_f32(dialect, buf, *f, true),
        SqlValue::Float64(f) => append_f64(dialect, buf, *f, true),
        SqlValue::Text(s) => append_string(dialect, buf, s),
        SqlValue::Bytes(b) => append_bytes(dialect, buf, b),
        SqlValue::Timestamp(ts) => {
            buf.push(dialect.literal_quote);
            buf.push_str(&ts.format(TIMESTAMP_FORMAT).to_string());
            buf.push(dialect.literal_quote);
        }
        SqlValue::BigInt(n) => buf.push_str(&n.to_string()),
        other => {
            return Err(Error::invariant(format!(
                "scalar routine invoked with {}",
                other.sql_type()
            )))
        }
    }
    Ok(())
}

/// Renders a scalar in array element position.
pub(crate) fn append_elem_scalar(
    dialect: &Dialect,
    buf: &mut String,
    value: &SqlValue,
) -> Result<()> {
    match value {
        SqlValue::Float32(f) => append_f32(dialect, buf, *f, false),
        SqlValue::Float64(f) => append_f64(dialect, buf, *f, false),
        SqlValue::Text(s) => append_elem_string(dialect, buf, s),
        SqlValue::Bytes(b) => append_elem_bytes(dialect, buf, b),
        SqlValue::Timestamp(ts) => {
            buf.push(dialect.elem_quote);
            buf.push_str(&ts.format(TIMESTAMP_FORMAT).to_string());
            buf.push(dialect.elem_quote);
        }
        other => return append_scalar(dialect, buf, other),
    }
    Ok(())
}

/// Appends a top-level string literal, quote-wrapped and escaped.
pub(crate) fn append_string(dialect: &Dialect, buf: &mut String, s: &str) {
    buf.push(dialect.literal_quote);
    for ch in s.chars() {
        if ch == '\0' {
            continue;
        }
        if ch == dialect.literal_quote {
            if dialect.backslash_escapes {
                buf.push('\\');
            } else {
                buf.push(ch);
            }
            buf.push(ch);
        } else if ch == '\\' && dialect.backslash_escapes {
            buf.push_str("\\\\");
        } else {
            buf.push(ch);
        }
    }
    buf.push(dialect.literal_quote);
}

/// Appends a string in array element position under the stricter element
/// grammar: literal quote doubles, element quote and backslash take a
/// backslash escape.
pub(crate) fn append_elem_string(dialect: &Dialect, buf: &mut String, s: &str) {
    buf.push(dialect.elem_quote);
    for ch in s.chars() {
        if ch == '\0' {
            continue;
        }
        if ch == dialect.literal_quote {
            buf.push(ch);
            buf.push(ch);
        } else if ch == dialect.elem_quote {
            buf.push('\\');
            buf.push(ch);
        } else if ch == '\\' {
            buf.push_str("\\\\");
        } else {
            buf.push(ch);
        }
    }
    buf.push(dialect.elem_quote);
}

fn append_f32(dialect: &Dialect, buf: &mut String, v: f32, quoted: bool) {
    if v.is_finite() {
        buf.push_str(&v.to_string());
    } else {
        append_nonfinite(dialect, buf, v.is_nan(), v.is_sign_positive(), quoted);
    }
}

fn append_f64(dialect: &Dialect, buf: &mut String, v: f64, quoted: bool) {
    if v.is_finite() {
        buf.push_str(&v.to_string());
    } else {
        append_nonfinite(dialect, buf, v.is_nan(), v.is_sign_positive(), quoted);
    }
}

fn append_nonfinite(dialect: &Dialect, buf: &mut String, nan: bool, positive: bool, quoted: bool) {
    let token = if nan {
        "NaN"
    } else if positive {
        "Infinity"
    } else {
        "-Infinity"
    };
    if quoted {
        buf.push(dialect.literal_quote);
        buf.push_str(token);
        buf.push(dialect.literal_quote);
    } else {
        buf.push_str(token);
    }
}

/// Appends a byte-sequence literal: `'\xDEADBEEF'` for the quote-doubling
/// grammar, `X'DEADBEEF'` for the backslash grammar.
fn append_bytes(dialect: &Dialect, buf: &mut String, bytes: &[u8]) {
    if dialect.backslash_escapes {
        buf.push('X');
        buf.push(dialect.literal_quote);
        buf.push_str(&hex::encode(bytes));
        buf.push(dialect.literal_quote);
    } else {
        buf.push(dialect.literal_quote);
        buf.push_str("\\x");
        buf.push_str(&hex::encode(bytes));
        buf.push(dialect.literal_quote);
    }
}

/// Byte sequence in element position: `"\\xDEADBEEF"`. The doubled
/// backslash survives the array parser's element unescaping.
fn append_elem_bytes(dialect: &Dialect, buf: &mut String, bytes: &[u8]) {
    buf.push(dialect.elem_quote);
    buf.push_str("\\\\x");
    buf.push_str(&hex::encode(bytes));
    buf.push(dialect.elem_quote);
}
