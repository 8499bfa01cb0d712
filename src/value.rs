//! Typed runtime values and their structural type descriptors.
//!
//! This module provides [`SqlValue`], a closed tagged enum representing any
//! value the encoder can render, and [`SqlType`], the structural descriptor
//! the dispatch registry keys its appender cache on.
//!
//! The descriptor of a value is derived, never stored separately, so two
//! values of structurally identical shape always dispatch through the same
//! cached routine.
//!
//! ## Core Types
//!
//! - [`SqlValue`]: a scalar, an optional wrapper, a homogeneous array, or a
//!   branded custom value
//! - [`SqlType`]: the recursive shape tag (`Int32`, `Optional(Text)`,
//!   `Array(Array(Float64))`, ...)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use sql_literal::{SqlType, SqlValue};
//!
//! // From primitives
//! let n = SqlValue::from(42i32);
//! let s = SqlValue::from("hello");
//! let xs = SqlValue::from(vec![1i64, 2, 3]);
//!
//! // Typed absence: an absent optional still knows its inner shape
//! let absent = SqlValue::null(SqlType::Text);
//! assert!(absent.is_absent());
//!
//! // Typed emptiness: an empty array is present, not NULL
//! let empty = SqlValue::array(SqlType::Text, vec![]);
//! assert!(!empty.is_absent());
//! ```
//!
//! ### Deriving Descriptors
//!
//! ```rust
//! use sql_literal::{SqlType, SqlValue};
//!
//! let xs = SqlValue::from(vec![1i32, 2]);
//! assert_eq!(xs.sql_type(), SqlType::Array(Box::new(SqlType::Int32)));
//! ```

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::fmt;

/// Structural type descriptor for a [`SqlValue`].
///
/// This is the dispatch registry's cache key: two values with structurally
/// identical descriptors always encode via the same routine. Descriptors
/// are cheap to clone and hash.
///
/// # Examples
///
/// ```rust
/// use sql_literal::SqlType;
///
/// let ty = SqlType::Array(Box::new(SqlType::Optional(Box::new(SqlType::Int64))));
/// assert_eq!(ty.to_string(), "int64?[]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SqlType {
    Bool,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
    Bytes,
    Timestamp,
    BigInt,
    /// Optional-of-T: one layer of nullable indirection.
    Optional(Box<SqlType>),
    /// Homogeneous collection of T.
    Array(Box<SqlType>),
    /// An extension type resolved only through explicitly registered
    /// appender routines (see [`register_appender`](crate::register_appender)).
    Custom(String),
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Bool => f.write_str("bool"),
            SqlType::Int16 => f.write_str("int16"),
            SqlType::Int32 => f.write_str("int32"),
            SqlType::Int64 => f.write_str("int64"),
            SqlType::Float32 => f.write_str("float32"),
            SqlType::Float64 => f.write_str("float64"),
            SqlType::Text => f.write_str("text"),
            SqlType::Bytes => f.write_str("bytes"),
            SqlType::Timestamp => f.write_str("timestamp"),
            SqlType::BigInt => f.write_str("bigint"),
            SqlType::Optional(inner) => write!(f, "{}?", inner),
            SqlType::Array(inner) => write!(f, "{}[]", inner),
            SqlType::Custom(name) => f.write_str(name),
        }
    }
}

/// A dynamically-shaped value ready for literal encoding.
///
/// Scalars carry their payload directly. `Optional` and `Array` carry an
/// element descriptor so absent and empty values stay fully typed. The
/// descriptor derived by [`SqlValue::sql_type`] is immutable for the life
/// of the value.
///
/// # Examples
///
/// ```rust
/// use sql_literal::{SqlType, SqlValue};
///
/// let v = SqlValue::some(SqlValue::from(7i32));
/// assert_eq!(v.sql_type(), SqlType::Optional(Box::new(SqlType::Int32)));
/// assert!(!v.is_absent());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    BigInt(BigInt),
    /// One layer of nullable indirection. `elem` keeps the descriptor
    /// derivable when the value is absent.
    Optional {
        elem: SqlType,
        value: Option<Box<SqlValue>>,
    },
    /// Homogeneous collection. `elem` keeps empty arrays fully typed.
    /// Invariant: every item's descriptor equals `elem` (checked
    /// defensively during encoding).
    Array { elem: SqlType, items: Vec<SqlValue> },
    /// A branded extension value, dispatched by `type_name` through
    /// explicitly registered appender routines.
    Custom {
        type_name: String,
        inner: Box<SqlValue>,
    },
}

impl SqlValue {
    /// Creates an absent optional of the given inner type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sql_literal::{SqlType, SqlValue};
    ///
    /// let v = SqlValue::null(SqlType::Int32);
    /// assert!(v.is_absent());
    /// ```
    #[must_use]
    pub fn null(elem: SqlType) -> Self {
        SqlValue::Optional { elem, value: None }
    }

    /// Wraps a value in one present optional layer.
    #[must_use]
    pub fn some(inner: SqlValue) -> Self {
        SqlValue::Optional {
            elem: inner.sql_type(),
            value: Some(Box::new(inner)),
        }
    }

    /// Creates an array with an explicit element descriptor.
    ///
    /// The descriptor is required so empty arrays stay typed; it must match
    /// the items' own descriptors, which the encoder verifies defensively.
    #[must_use]
    pub fn array(elem: SqlType, items: Vec<SqlValue>) -> Self {
        SqlValue::Array { elem, items }
    }

    /// Derives the structural type descriptor of this value.
    #[must_use]
    pub fn sql_type(&self) -> SqlType {
        match self {
            SqlValue::Bool(_) => SqlType::Bool,
            SqlValue::Int16(_) => SqlType::Int16,
            SqlValue::Int32(_) => SqlType::Int32,
            SqlValue::Int64(_) => SqlType::Int64,
            SqlValue::Float32(_) => SqlType::Float32,
            SqlValue::Float64(_) => SqlType::Float64,
            SqlValue::Text(_) => SqlType::Text,
            SqlValue::Bytes(_) => SqlType::Bytes,
            SqlValue::Timestamp(_) => SqlType::Timestamp,
            SqlValue::BigInt(_) => SqlType::BigInt,
            SqlValue::Optional { elem, .. } => SqlType::Optional(Box::new(elem.clone())),
            SqlValue::Array { elem, .. } => SqlType::Array(Box::new(elem.clone())),
            SqlValue::Custom { type_name, .. } => SqlType::Custom(type_name.clone()),
        }
    }

    /// The indirection resolver: unwraps any number of optional layers.
    ///
    /// Returns `None` if the value is absent at **any** layer, which the
    /// encoder renders as the dialect NULL token. Otherwise returns the
    /// fully unwrapped inner value. Depth is handled by iteration; an
    /// optional-of-optional needs no special casing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sql_literal::{SqlType, SqlValue};
    ///
    /// let v = SqlValue::some(SqlValue::some(SqlValue::from(5i32)));
    /// assert_eq!(v.unwrap_indirection(), Some(&SqlValue::Int32(5)));
    ///
    /// let absent = SqlValue::some(SqlValue::null(SqlType::Int32));
    /// assert_eq!(absent.unwrap_indirection(), None);
    /// ```
    #[must_use]
    pub fn unwrap_indirection(&self) -> Option<&SqlValue> {
        let mut v = self;
        loop {
            match v {
                SqlValue::Optional { value: None, .. } => return None,
                SqlValue::Optional {
                    value: Some(inner), ..
                } => v = inner,
                _ => return Some(v),
            }
        }
    }

    /// Returns `true` if the value is absent at any indirection layer.
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.unwrap_indirection().is_none()
    }

    /// Returns `true` if the value is an array (after no unwrapping).
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, SqlValue::Array { .. })
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is any integer scalar, returns it widened to `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sql_literal::SqlValue;
    ///
    /// assert_eq!(SqlValue::from(7i16).as_i64(), Some(7));
    /// assert_eq!(SqlValue::from("x").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int16(n) => Some(i64::from(*n)),
            SqlValue::Int32(n) => Some(i64::from(*n)),
            SqlValue::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a float scalar, returns it widened to `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Float32(f) => Some(f64::from(*f)),
            SqlValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a text scalar, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns its items.
    #[inline]
    #[must_use]
    pub fn as_items(&self) -> Option<&[SqlValue]> {
        match self {
            SqlValue::Array { items, .. } => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i16> for SqlValue {
    fn from(value: i16) -> Self {
        SqlValue::Int16(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int32(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int64(value)
    }
}

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        SqlValue::Float32(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float64(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl From<BigInt> for SqlValue {
    fn from(value: BigInt) -> Self {
        SqlValue::BigInt(value)
    }
}

impl From<Vec<i32>> for SqlValue {
    fn from(value: Vec<i32>) -> Self {
        SqlValue::Array {
            elem: SqlType::Int32,
            items: value.into_iter().map(SqlValue::Int32).collect(),
        }
    }
}

impl From<Vec<i64>> for SqlValue {
    fn from(value: Vec<i64>) -> Self {
        SqlValue::Array {
            elem: SqlType::Int64,
            items: value.into_iter().map(SqlValue::Int64).collect(),
        }
    }
}

impl From<Vec<f64>> for SqlValue {
    fn from(value: Vec<f64>) -> Self {
        SqlValue::Array {
            elem: SqlType::Float64,
            items: value.into_iter().map(SqlValue::Float64).collect(),
        }
    }
}

impl From<Vec<String>> for SqlValue {
    fn from(value: Vec<String>) -> Self {
        SqlValue::Array {
            elem: SqlType::Text,
            items: value.into_iter().map(SqlValue::Text).collect(),
        }
    }
}

impl From<Vec<&str>> for SqlValue {
    fn from(value: Vec<&str>) -> Self {
        SqlValue::Array {
            elem: SqlType::Text,
            items: value.iter().map(|s| SqlValue::from(*s)).collect(),
        }
    }
}

impl From<Option<bool>> for SqlValue {
    fn from(value: Option<bool>) -> Self {
        SqlValue::Optional {
            elem: SqlType::Bool,
            value: value.map(|v| Box::new(SqlValue::Bool(v))),
        }
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        SqlValue::Optional {
            elem: SqlType::Int32,
            value: value.map(|v| Box::new(SqlValue::Int32(v))),
        }
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(value: Option<i64>) -> Self {
        SqlValue::Optional {
            elem: SqlType::Int64,
            value: value.map(|v| Box::new(SqlValue::Int64(v))),
        }
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(value: Option<f64>) -> Self {
        SqlValue::Optional {
            elem: SqlType::Float64,
            value: value.map(|v| Box::new(SqlValue::Float64(v))),
        }
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Optional {
            elem: SqlType::Text,
            value: value.map(|v| Box::new(SqlValue::Text(v))),
        }
    }
}

impl From<Option<&str>> for SqlValue {
    fn from(value: Option<&str>) -> Self {
        SqlValue::Optional {
            elem: SqlType::Text,
            value: value.map(|v| Box::new(SqlValue::from(v))),
        }
    }
}
