//! The dispatch registry: type descriptor to appender routine.
//!
//! The registry is process-wide shared state with a monotonic lifecycle:
//! initialized empty on first use, populated lazily as descriptors are
//! first encoded, never torn down. Reads vastly outnumber writes (the same
//! small set of field shapes recurs across every row of a bulk operation),
//! so the cache is a read-optimized concurrent map. Routines are stored as
//! `Arc` closures; insertion is atomic, so a reader never observes a
//! partially-built routine. Two threads racing on first use of the same
//! descriptor may both build the routine; construction is pure, so the
//! loser's work is discarded without harm.
//!
//! Resolution is position-aware: a string at top level escapes differently
//! from a string inside an array literal, so `(descriptor, position)` is
//! the cache key. Building a routine for an array descriptor resolves the
//! element routine first and closes over it; the four common primitive
//! element shapes short-circuit to fast paths instead.
//!
//! Custom types participate through [`register_appender`]; an unregistered
//! custom descriptor resolves to [`Error::UnsupportedType`] rather than
//! rendering anything.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::array;
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::escape;
use crate::value::{SqlType, SqlValue};

/// An encoding routine: appends the literal text of `value` to `buf`.
///
/// Routines are pure: they never mutate the value, never retain the buffer,
/// and are safe to invoke concurrently for distinct values.
pub type Appender =
    Arc<dyn Fn(&Dialect, &mut String, &SqlValue) -> Result<()> + Send + Sync + 'static>;

/// Where a routine's output lands, which decides the escaping grammar and
/// whether the array literal is quote-wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Position {
    Literal,
    Element,
}

static REGISTRY: OnceLock<DashMap<(SqlType, Position), Appender>> = OnceLock::new();

fn registry() -> &'static DashMap<(SqlType, Position), Appender> {
    REGISTRY.get_or_init(DashMap::new)
}

/// Resolves the appender routine for a top-level descriptor, building and
/// caching it on first use.
pub(crate) fn resolve(ty: &SqlType) -> Result<Appender> {
    resolve_at(ty, Position::Literal)
}

fn resolve_at(ty: &SqlType, pos: Position) -> Result<Appender> {
    if let Some(cached) = registry().get(&(ty.clone(), pos)) {
        return Ok(cached.clone());
    }
    let built = build(ty, pos)?;
    // First-use-wins: a racing builder's entry is kept, ours discarded.
    let entry = registry()
        .entry((ty.clone(), pos))
        .or_insert(built)
        .clone();
    Ok(entry)
}

/// Registers an appender routine for a custom type, for both top-level and
/// element positions. Re-registering replaces the previous routine.
///
/// The routine receives the whole [`SqlValue::Custom`] value and decides
/// its own rendering, including any element-grammar differences.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use sql_literal::{encode_to_string, register_appender, Dialect, SqlType, SqlValue};
///
/// register_appender(
///     SqlType::Custom("lower_text".to_string()),
///     Arc::new(|dialect, buf, value| {
///         let SqlValue::Custom { inner, .. } = value else {
///             return Err(sql_literal::Error::invariant("expected custom value"));
///         };
///         sql_literal::encode(dialect, buf, &SqlValue::Text(
///             inner.as_str().unwrap_or_default().to_lowercase(),
///         ))
///     }),
/// );
///
/// let v = SqlValue::Custom {
///     type_name: "lower_text".to_string(),
///     inner: Box::new(SqlValue::from("HeLLo")),
/// };
/// assert_eq!(encode_to_string(&Dialect::postgres(), &v).unwrap(), "'hello'");
/// ```
pub fn register_appender(ty: SqlType, appender: Appender) {
    let reg = registry();
    reg.insert((ty.clone(), Position::Literal), appender.clone());
    reg.insert((ty, Position::Element), appender);
}

fn build(ty: &SqlType, pos: Position) -> Result<Appender> {
    match ty {
        SqlType::Optional(inner) => {
            let inner_ap = resolve_at(inner, pos)?;
            Ok(Arc::new(move |dialect, buf, value| match value {
                SqlValue::Optional { value: None, .. } => {
                    escape::append_null(dialect, buf);
                    Ok(())
                }
                SqlValue::Optional {
                    value: Some(inner), ..
                } => inner_ap(dialect, buf, inner),
                // Already-unwrapped values pass straight through.
                other => inner_ap(dialect, buf, other),
            }))
        }
        SqlType::Array(elem) => {
            if pos == Position::Literal {
                if let Some(fast) = fast_path(elem) {
                    return Ok(fast);
                }
            }
            generic_array_routine(elem, pos == Position::Literal)
        }
        SqlType::Custom(name) => Err(Error::unsupported_type(name.clone())),
        scalar => {
            let kind = scalar.clone();
            Ok(match pos {
                Position::Literal => Arc::new(move |dialect, buf, value| {
                    check_kind(&kind, value)?;
                    escape::append_scalar(dialect, buf, value)
                }),
                Position::Element => Arc::new(move |dialect, buf, value| {
                    check_kind(&kind, value)?;
                    escape::append_elem_scalar(dialect, buf, value)
                }),
            })
        }
    }
}

fn check_kind(expected: &SqlType, value: &SqlValue) -> Result<()> {
    let actual = value.sql_type();
    if actual == *expected {
        Ok(())
    } else {
        Err(Error::invariant(format!(
            "routine for {expected} invoked with {actual}"
        )))
    }
}

/// The generic recursive composite routine: resolves the element routine in
/// element position and closes over it.
fn generic_array_routine(elem: &SqlType, quoted: bool) -> Result<Appender> {
    let elem_ap = resolve_at(elem, Position::Element)?;
    Ok(Arc::new(move |dialect, buf, value| match value {
        SqlValue::Array { items, .. } => array::append_array(dialect, buf, items, &elem_ap, quoted),
        SqlValue::Optional { value: None, .. } => Err(Error::invariant(
            "absent collection reached the composite encoder",
        )),
        other => Err(Error::invariant(format!(
            "composite routine invoked with {}",
            other.sql_type()
        ))),
    }))
}

/// The closed fast-path table, mirroring the four common primitive-element
/// collection shapes.
fn fast_path(elem: &SqlType) -> Option<Appender> {
    match elem {
        SqlType::Text => Some(Arc::new(array::append_text_array)),
        SqlType::Int32 => Some(Arc::new(array::append_int32_array)),
        SqlType::Int64 => Some(Arc::new(array::append_int64_array)),
        SqlType::Float64 => Some(Arc::new(array::append_float64_array)),
        _ => None,
    }
}
