//! Composite (array) literal encoding.
//!
//! The generic path iterates a collection's items through an
//! already-resolved element routine, joining with the dialect separator and
//! wrapping in the dialect delimiters. At top level the whole array literal
//! is additionally wrapped in the literal quote; nested arrays recurse
//! through the same encoder unquoted, so `[[1,2],[3]]` renders as
//! `'{{1,2},{3}}'`.
//!
//! An empty collection renders as the bare delimiter pair (`'{}'`), never
//! as NULL: present-but-empty and absent are distinct and must round-trip
//! distinctly. Absent collections are intercepted by the indirection
//! resolver before any routine here runs.
//!
//! The fast paths cover the common homogeneous primitive-element shapes
//! (text, i32, i64, f64) without per-element dispatch. Their output is
//! byte-identical to the generic path; the registry's tests assert that
//! equivalence.

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::escape;
use crate::registry::Appender;
use crate::value::SqlValue;

/// Generic composite encoder: renders `items` through `elem`, separated and
/// delimited per dialect. `quoted` wraps the result in the literal quote
/// (top-level position); element position passes `false`.
pub(crate) fn append_array(
    dialect: &Dialect,
    buf: &mut String,
    items: &[SqlValue],
    elem: &Appender,
    quoted: bool,
) -> Result<()> {
    if quoted {
        buf.push(dialect.literal_quote);
    }
    buf.push(dialect.array_open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.push(dialect.separator);
        }
        elem(dialect, buf, item)?;
    }
    buf.push(dialect.array_close);
    if quoted {
        buf.push(dialect.literal_quote);
    }
    Ok(())
}

fn expect_items<'a>(value: &'a SqlValue, shape: &str) -> Result<&'a [SqlValue]> {
    match value {
        SqlValue::Array { items, .. } => Ok(items),
        SqlValue::Optional { value: None, .. } => Err(Error::invariant(format!(
            "absent collection reached the {shape} fast path"
        ))),
        other => Err(Error::invariant(format!(
            "{shape} fast path invoked with {}",
            other.sql_type()
        ))),
    }
}

macro_rules! delimited {
    ($dialect:ident, $buf:ident, $items:ident, $item:ident => $render:block) => {{
        $buf.push($dialect.literal_quote);
        $buf.push($dialect.array_open);
        for (i, $item) in $items.iter().enumerate() {
            if i > 0 {
                $buf.push($dialect.separator);
            }
            $render
        }
        $buf.push($dialect.array_close);
        $buf.push($dialect.literal_quote);
        Ok(())
    }};
}

/// Fast path for `text[]`.
pub(crate) fn append_text_array(dialect: &Dialect, buf: &mut String, value: &SqlValue) -> Result<()> {
    let items = expect_items(value, "text[]")?;
    delimited!(dialect, buf, items, item => {
        match item {
            SqlValue::Text(s) => escape::append_elem_string(dialect, buf, s),
            other => {
                return Err(Error::invariant(format!(
                    "text[] holds {}",
                    other.sql_type()
                )))
            }
        }
    })
}

/// Fast path for `int32[]`.
pub(crate) fn append_int32_array(
    dialect: &Dialect,
    buf: &mut String,
    value: &SqlValue,
) -> Result<()> {
    let items = expect_items(value, "int32[]")?;
    delimited!(dialect, buf, items, item => {
        match item {
            SqlValue::Int32(n) => buf.push_str(&n.to_string()),
            other => {
                return Err(Error::invariant(format!(
                    "int32[] holds {}",
                    other.sql_type()
                )))
            }
        }
    })
}

/// Fast path for `int64[]`.
pub(crate) fn append_int64_array(
    dialect: &Dialect,
    buf: &mut String,
    value: &SqlValue,
) -> Result<()> {
    let items = expect_items(value, "int64[]")?;
    delimited!(dialect, buf, items, item => {
        match item {
            SqlValue::Int64(n) => buf.push_str(&n.to_string()),
            other => {
                return Err(Error::invariant(format!(
                    "int64[] holds {}",
                    other.sql_type()
                )))
            }
        }
    })
}

/// Fast path for `float64[]`.
pub(crate) fn append_float64_array(
    dialect: &Dialect,
    buf: &mut String,
    value: &SqlValue,
) -> Result<()> {
    let items = expect_items(value, "float64[]")?;
    delimited!(dialect, buf, items, item => {
        match item {
            SqlValue::Float64(_) => escape::append_elem_scalar(dialect, buf, item)?,
            other => {
                return Err(Error::invariant(format!(
                    "float64[] holds {}",
                    other.sql_type()
                )))
            }
        }
    })
}
