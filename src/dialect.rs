//! Dialect configuration for literal encoding.
//!
//! A [`Dialect`] carries the quoting, escaping, and delimiter parameters the
//! encoder reads on every call. The core never owns or mutates one; callers
//! pass a borrowed dialect per call and may share a single instance across
//! threads.
//!
//! ## Examples
//!
//! ```rust
//! use sql_literal::{encode_to_string, Dialect, SqlValue};
//!
//! let pg = Dialect::postgres();
//! assert_eq!(encode_to_string(&pg, &SqlValue::from("it's")).unwrap(), "'it''s'");
//!
//! let my = Dialect::mysql();
//! assert_eq!(encode_to_string(&my, &SqlValue::from("it's")).unwrap(), r"'it\'s'");
//!
//! // Builder-style overrides
//! let custom = Dialect::postgres().with_null_token("null");
//! let absent = SqlValue::from(None::<i32>);
//! assert_eq!(encode_to_string(&custom, &absent).unwrap(), "null");
//! ```

/// Quoting and escaping parameters for one SQL dialect.
///
/// The defaults ([`Dialect::postgres`]) follow PostgreSQL's literal grammar:
/// single-quoted literals with quote doubling, `{}`-delimited array content
/// with double-quoted elements, and an uppercase `NULL` token.
///
/// # Examples
///
/// ```rust
/// use sql_literal::Dialect;
///
/// let dialect = Dialect::postgres()
///     .with_separator(',')
///     .with_null_token("NULL");
/// assert_eq!(dialect, Dialect::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    /// Quote character wrapping top-level literals and whole array literals.
    pub literal_quote: char,
    /// Quote character wrapping string elements inside array literals.
    pub elem_quote: char,
    /// Opening delimiter of array content.
    pub array_open: char,
    /// Closing delimiter of array content.
    pub array_close: char,
    /// Separator between array elements.
    pub separator: char,
    /// Token emitted for absence at any indirection layer.
    pub null_token: String,
    /// Quote character for identifiers.
    pub ident_quote: char,
    /// Escape quotes and backslashes with a backslash instead of doubling
    /// the quote (MySQL-style string grammar).
    pub backslash_escapes: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::postgres()
    }
}

impl Dialect {
    /// PostgreSQL literal grammar. This is the default dialect.
    #[must_use]
    pub fn postgres() -> Self {
        Dialect {
            literal_quote: '\'',
            elem_quote: '"',
            array_open: '{',
            array_close: '}',
            separator: ',',
            null_token: "NULL".to_string(),
            ident_quote: '"',
            backslash_escapes: false,
        }
    }

    /// MySQL literal grammar: backslash escaping in strings, backtick
    /// identifiers. Array parameters keep the PostgreSQL defaults since
    /// MySQL has no native array literals; they only matter if a caller
    /// encodes arrays anyway.
    #[must_use]
    pub fn mysql() -> Self {
        Dialect {
            ident_quote: '`',
            backslash_escapes: true,
            ..Self::postgres()
        }
    }

    /// Sets the element separator for array literals.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the NULL token text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sql_literal::Dialect;
    ///
    /// let dialect = Dialect::postgres().with_null_token("null");
    /// assert_eq!(dialect.null_token, "null");
    /// ```
    #[must_use]
    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_token = token.into();
        self
    }

    /// Sets the open/close delimiters of array content.
    #[must_use]
    pub fn with_array_delimiters(mut self, open: char, close: char) -> Self {
        self.array_open = open;
        self.array_close = close;
        self
    }

    /// Sets the quote character for string elements inside array literals.
    #[must_use]
    pub fn with_element_quote(mut self, quote: char) -> Self {
        self.elem_quote = quote;
        self
    }

    /// Sets the identifier quote character.
    #[must_use]
    pub fn with_ident_quote(mut self, quote: char) -> Self {
        self.ident_quote = quote;
        self
    }

    /// Enables or disables MySQL-style backslash escaping.
    #[must_use]
    pub fn with_backslash_escapes(mut self, enabled: bool) -> Self {
        self.backslash_escapes = enabled;
        self
    }
}

/// Appends a quoted identifier (table or column name) to the buffer.
///
/// Embedded identifier-quote characters are doubled. This is the identifier
/// primitive the literal encoder itself never calls; it sits alongside the
/// literal entry points for callers assembling full statements.
///
/// # Examples
///
/// ```rust
/// use sql_literal::{append_ident, Dialect};
///
/// let mut buf = String::new();
/// append_ident(&Dialect::postgres(), &mut buf, "user \"admin\"");
/// assert_eq!(buf, r#""user ""admin""""#);
///
/// let mut buf = String::new();
/// append_ident(&Dialect::mysql(), &mut buf, "order");
/// assert_eq!(buf, "`order`");
/// ```
pub fn append_ident(dialect: &Dialect, buf: &mut String, ident: &str) {
    buf.push(dialect.ident_quote);
    for ch in ident.chars() {
        if ch == dialect.ident_quote {
            buf.push(ch);
        }
        buf.push(ch);
    }
    buf.push(dialect.ident_quote);
}

/// A fragment of SQL that is appended verbatim, with no quoting.
///
/// The caller asserts the content is already safe.
///
/// # Examples
///
/// ```rust
/// use sql_literal::Safe;
///
/// let mut buf = String::from("ORDER BY ");
/// Safe("created_at DESC".to_string()).append(&mut buf);
/// assert_eq!(buf, "ORDER BY created_at DESC");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Safe(pub String);

impl Safe {
    /// Appends the raw fragment to the buffer.
    pub fn append(&self, buf: &mut String) {
        buf.push_str(&self.0);
    }
}

/// A SQL identifier, appended with dialect identifier quoting.
///
/// # Examples
///
/// ```rust
/// use sql_literal::{Dialect, Ident};
///
/// let mut buf = String::new();
/// Ident("users".to_string()).append(&Dialect::postgres(), &mut buf);
/// assert_eq!(buf, r#""users""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    /// Appends the quoted identifier to the buffer.
    pub fn append(&self, dialect: &Dialect, buf: &mut String) {
        append_ident(dialect, buf, &self.0);
    }
}
