//! Error types for SQL literal encoding.
//!
//! Encoding is deterministic, so every error here is either a shape the
//! registry refuses to encode or a defect in the caller's value
//! construction. Retrying an encode reproduces the same failure.
//!
//! ## Error Categories
//!
//! - **Unsupported types**: the dispatch registry could not find or build
//!   an appender routine for a type descriptor. This is surfaced rather
//!   than silently rendered as `NULL` or an empty string, because a
//!   silently mis-encoded literal corrupts the statement it is spliced
//!   into.
//! - **Invariant violations**: an internal defensive check tripped, such
//!   as the composite encoder receiving an absent collection that the
//!   indirection resolver should have intercepted, or an array item whose
//!   shape contradicts the array's element descriptor. These indicate a
//!   programming error, not a data error.
//!
//! On failure the output buffer may contain a partial write; callers must
//! discard it.
//!
//! ## Examples
//!
//! ```rust
//! use sql_literal::{encode_to_string, Dialect, Error, SqlValue};
//!
//! let value = SqlValue::Custom {
//!     type_name: "geometry".to_string(),
//!     inner: Box::new(SqlValue::from("POINT(0 0)")),
//! };
//!
//! match encode_to_string(&Dialect::postgres(), &value) {
//!     Err(Error::UnsupportedType { type_name }) => assert_eq!(type_name, "geometry"),
//!     other => panic!("expected UnsupportedType, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding a value
/// into SQL literal text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The dispatch registry has no appender routine for this type
    /// descriptor and could not construct one.
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: String },

    /// An internal encoding invariant was violated. This is a bug in the
    /// caller's value construction (or in this crate), never a data error.
    #[error("encoding invariant violated: {0}")]
    InvariantViolation(String),

    /// Generic message, used by custom appender routines.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported-type error for a descriptor the registry
    /// cannot encode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sql_literal::Error;
    ///
    /// let err = Error::unsupported_type("geometry");
    /// assert!(err.to_string().contains("geometry"));
    /// ```
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Error::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Creates an invariant-violation error. Used by internal defensive
    /// checks that should be unreachable through the public API.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }

    /// Creates a generic error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sql_literal::Error;
    ///
    /// let err = Error::message("custom appender failed");
    /// assert!(err.to_string().contains("custom appender failed"));
    /// ```
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
