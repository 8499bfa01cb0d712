/// Builds a [`SqlValue`](crate::SqlValue) from literal-like syntax.
///
/// Three forms are accepted:
///
/// - `sql_value!(null: <SqlType expr>)` — a typed absent optional
/// - `sql_value!([<SqlType expr>; e1, e2, ...])` — a typed array (the
///   element descriptor is explicit so empty arrays stay typed)
/// - `sql_value!(expr)` — anything with a `From` conversion into `SqlValue`
///
/// # Examples
///
/// ```rust
/// use sql_literal::{sql_value, SqlType, SqlValue};
///
/// let absent = sql_value!(null: SqlType::Text);
/// assert!(absent.is_absent());
///
/// let xs = sql_value!([SqlType::Int32; 1, 2, 3]);
/// assert_eq!(xs, SqlValue::from(vec![1i32, 2, 3]));
///
/// let empty = sql_value!([SqlType::Text;]);
/// assert_eq!(empty.as_items(), Some(&[][..]));
///
/// let s = sql_value!("hello");
/// assert_eq!(s.as_str(), Some("hello"));
/// ```
#[macro_export]
macro_rules! sql_value {
    // Typed absence
    (null: $ty:expr) => {
        $crate::SqlValue::null($ty)
    };

    // Typed array, possibly empty
    ([ $ty:expr; $($elem:expr),* $(,)? ]) => {
        $crate::SqlValue::array($ty, vec![$($crate::SqlValue::from($elem)),*])
    };

    // One present optional layer
    (some $inner:expr) => {
        $crate::SqlValue::some($crate::SqlValue::from($inner))
    };

    // Anything convertible
    ($other:expr) => {
        $crate::SqlValue::from($other)
    };
}
