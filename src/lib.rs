//! # sql_literal
//!
//! A dialect-aware SQL literal encoder: typed runtime values in, exact
//! literal text out, appended straight into a growing output buffer.
//!
//! ## What it does
//!
//! This crate sits at the boundary between a query-building layer and the
//! textual wire protocol: given a value of unknown static shape (a
//! primitive, an optional/nullable wrapper, or a homogeneous collection),
//! it produces bytes a SQL engine parses back into the equivalent value,
//! with correct quoting, escaping, and NULL handling.
//!
//! ## Key Features
//!
//! - **Typed dispatch**: a value's structural [`SqlType`] descriptor selects
//!   its encoding routine through a process-wide, lazily-populated,
//!   concurrency-safe registry — no per-value shape analysis on the hot path
//! - **Array literals**: recursive composite encoding for collections,
//!   collections of collections, and collections of optional elements,
//!   with fast paths for the common primitive element shapes
//! - **Character-exact escaping**: dialect quoting rules, NUL bytes
//!   dropped, multi-byte text copied codepoint-aligned, floats rendered at
//!   shortest round-trip precision
//! - **NULL discipline**: absence at any indirection depth renders the
//!   dialect NULL token; a present-but-empty array renders `'{}'`, never
//!   NULL
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sql_literal = "0.1"
//! ```
//!
//! ### Encoding values
//!
//! ```rust
//! use sql_literal::{encode, encode_to_string, Dialect, SqlValue};
//!
//! let dialect = Dialect::postgres();
//!
//! // Scalars
//! assert_eq!(encode_to_string(&dialect, &SqlValue::from(42i32)).unwrap(), "42");
//! assert_eq!(encode_to_string(&dialect, &SqlValue::from("it's")).unwrap(), "'it''s'");
//!
//! // Arrays
//! let tags = SqlValue::from(vec!["rust", "sql"]);
//! assert_eq!(encode_to_string(&dialect, &tags).unwrap(), r#"'{"rust","sql"}'"#);
//!
//! // Absence, at any depth
//! let absent = SqlValue::from(None::<i64>);
//! assert_eq!(encode_to_string(&dialect, &absent).unwrap(), "NULL");
//!
//! // Appending into a statement under construction
//! let mut stmt = String::from("WHERE id = ");
//! encode(&dialect, &mut stmt, &SqlValue::from(7i64)).unwrap();
//! assert_eq!(stmt, "WHERE id = 7");
//! ```
//!
//! ### Building values with the sql_value! macro
//!
//! ```rust
//! use sql_literal::{sql_value, SqlType};
//!
//! let ids = sql_value!([SqlType::Int64; 1, 2, 3]);
//! let missing = sql_value!(null: SqlType::Text);
//! ```
//!
//! ## Scope
//!
//! The crate renders literals, nothing more: no statement assembly, no
//! placeholder substitution, no connections, no schema reflection. The
//! identifier-quoting primitive [`append_ident`] (with the [`Safe`] and
//! [`Ident`] wrappers) is carried for callers splicing literals into
//! statements by hand.
//!
//! ## Concurrency
//!
//! Encoding is a synchronous, CPU-bound transformation with no I/O. The
//! dispatch registry is shared process-wide and safe under concurrent
//! first-use; the output buffer is exclusively the caller's for the
//! duration of one call. See [`registry`] docs for the discipline.
//!
//! ## Errors
//!
//! Encoding fails only for descriptors the registry refuses
//! ([`Error::UnsupportedType`]) or internal invariant violations
//! ([`Error::InvariantViolation`]). On failure the buffer may hold a
//! partial write; discard it. See the [`error`] module.

pub mod array;
pub mod dialect;
pub mod error;
pub mod escape;
pub mod macros;
pub mod registry;
pub mod value;

pub use dialect::{append_ident, Dialect, Ident, Safe};
pub use error::{Error, Result};
pub use registry::{register_appender, Appender};
pub use value::{SqlType, SqlValue};

/// Appends the SQL literal representation of `value` to `buf`.
///
/// This is the sole core operation. It resolves indirection (absence at any
/// optional layer appends the dialect NULL token and returns), looks up or
/// builds the appender routine for the value's descriptor, and invokes it.
///
/// # Examples
///
/// ```rust
/// use sql_literal::{encode, Dialect, SqlValue};
///
/// let mut buf = String::from("VALUES (");
/// encode(&Dialect::postgres(), &mut buf, &SqlValue::from(vec![1i32, 2, 3])).unwrap();
/// buf.push(')');
/// assert_eq!(buf, "VALUES ('{1,2,3}')");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if no routine exists for the value's
/// descriptor, or [`Error::InvariantViolation`] if the value was constructed
/// inconsistently (e.g. an array item contradicting the array's element
/// descriptor). On error the buffer may contain a partial write.
pub fn encode(dialect: &Dialect, buf: &mut String, value: &SqlValue) -> Result<()> {
    match value.unwrap_indirection() {
        None => {
            buf.push_str(&dialect.null_token);
            Ok(())
        }
        Some(inner) => {
            let appender = registry::resolve(&inner.sql_type())?;
            appender(dialect, buf, inner)
        }
    }
}

/// Encodes `value` into a freshly allocated string.
///
/// Convenience wrapper over [`encode`] for callers that are not appending
/// into an existing statement buffer.
///
/// # Examples
///
/// ```rust
/// use sql_literal::{encode_to_string, Dialect, SqlValue};
///
/// let text = encode_to_string(&Dialect::postgres(), &SqlValue::from(true)).unwrap();
/// assert_eq!(text, "TRUE");
/// ```
///
/// # Errors
///
/// Same failure modes as [`encode`].
pub fn encode_to_string(dialect: &Dialect, value: &SqlValue) -> Result<String> {
    let mut buf = String::with_capacity(32);
    encode(dialect, &mut buf, value)?;
    Ok(buf)
}
