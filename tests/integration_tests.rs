use chrono::TimeZone;
use num_bigint::BigInt;
use sql_literal::{
    append_ident, encode, encode_to_string, Dialect, Error, Ident, Safe, SqlType, SqlValue,
};
use std::sync::Arc;

fn pg() -> Dialect {
    Dialect::postgres()
}

#[test]
fn test_integer_sequence() {
    let v = SqlValue::from(vec![1i32, 2, 3]);
    assert_eq!(encode_to_string(&pg(), &v).unwrap(), "'{1,2,3}'");
}

#[test]
fn test_empty_string_sequence_is_not_null() {
    let v = SqlValue::array(SqlType::Text, vec![]);
    assert_eq!(encode_to_string(&pg(), &v).unwrap(), "'{}'");
}

#[test]
fn test_nil_string_sequence_is_null() {
    let v = SqlValue::null(SqlType::Array(Box::new(SqlType::Text)));
    assert_eq!(encode_to_string(&pg(), &v).unwrap(), "NULL");
}

#[test]
fn test_string_sequence_escaping() {
    let v = SqlValue::from(vec!["a'b", "c\"d"]);
    assert_eq!(
        encode_to_string(&pg(), &v).unwrap(),
        "'{\"a''b\",\"c\\\"d\"}'"
    );
}

#[test]
fn test_nested_optional_absent_outer() {
    for inner in [
        SqlType::Int32,
        SqlType::Text,
        SqlType::Array(Box::new(SqlType::Float64)),
        SqlType::Optional(Box::new(SqlType::Bool)),
    ] {
        let v = SqlValue::null(inner);
        assert_eq!(encode_to_string(&pg(), &v).unwrap(), "NULL");
    }
}

#[test]
fn test_scalar_coverage() {
    let d = pg();
    assert_eq!(encode_to_string(&d, &SqlValue::from(7i16)).unwrap(), "7");
    assert_eq!(
        encode_to_string(&d, &SqlValue::from(-100i64)).unwrap(),
        "-100"
    );
    assert_eq!(
        encode_to_string(&d, &SqlValue::from(1.5f32)).unwrap(),
        "1.5"
    );
    assert_eq!(
        encode_to_string(&d, &SqlValue::from(true)).unwrap(),
        "TRUE"
    );
    assert_eq!(
        encode_to_string(&d, &SqlValue::from("naïve")).unwrap(),
        "'naïve'"
    );
    assert_eq!(
        encode_to_string(&d, &SqlValue::Bytes(vec![0x01, 0xff])).unwrap(),
        r"'\x01ff'"
    );
}

#[test]
fn test_timestamp_literal() {
    let ts = chrono::Utc
        .with_ymd_and_hms(2024, 6, 1, 12, 0, 30)
        .unwrap();
    assert_eq!(
        encode_to_string(&pg(), &SqlValue::from(ts)).unwrap(),
        "'2024-06-01 12:00:30.000000+00:00'"
    );
}

#[test]
fn test_bigint_literal() {
    let n: BigInt = "-99999999999999999999999999".parse().unwrap();
    assert_eq!(
        encode_to_string(&pg(), &SqlValue::from(n)).unwrap(),
        "-99999999999999999999999999"
    );
}

#[test]
fn test_nested_arrays() {
    let inner_ty = SqlType::Array(Box::new(SqlType::Text));
    let v = SqlValue::array(
        inner_ty,
        vec![
            SqlValue::from(vec!["a", "b"]),
            SqlValue::from(Vec::<String>::new()),
        ],
    );
    assert_eq!(
        encode_to_string(&pg(), &v).unwrap(),
        r#"'{{"a","b"},{}}'"#
    );
}

#[test]
fn test_array_of_optionals_mixed() {
    let elem_ty = SqlType::Optional(Box::new(SqlType::Text));
    let v = SqlValue::array(
        elem_ty,
        vec![
            SqlValue::some(SqlValue::from("x")),
            SqlValue::null(SqlType::Text),
        ],
    );
    assert_eq!(encode_to_string(&pg(), &v).unwrap(), "'{\"x\",NULL}'");
}

#[test]
fn test_mysql_string_escaping() {
    let d = Dialect::mysql();
    assert_eq!(
        encode_to_string(&d, &SqlValue::from(r"a'b\c")).unwrap(),
        r"'a\'b\\c'"
    );
}

#[test]
fn test_custom_null_token() {
    let d = pg().with_null_token("null");
    let v = SqlValue::from(None::<String>);
    assert_eq!(encode_to_string(&d, &v).unwrap(), "null");
}

#[test]
fn test_custom_separator_and_delimiters() {
    let d = pg().with_separator(';').with_array_delimiters('[', ']');
    let v = SqlValue::from(vec![1i64, 2]);
    assert_eq!(encode_to_string(&d, &v).unwrap(), "'[1;2]'");
}

#[test]
fn test_identifier_helpers() {
    let mut buf = String::from("SELECT ");
    Ident("name".to_string()).append(&pg(), &mut buf);
    buf.push_str(" FROM ");
    append_ident(&pg(), &mut buf, "users");
    buf.push(' ');
    Safe("LIMIT 1".to_string()).append(&mut buf);
    assert_eq!(buf, "SELECT \"name\" FROM \"users\" LIMIT 1");
}

#[test]
fn test_registered_custom_type() {
    sql_literal::register_appender(
        SqlType::Custom("money_cents".to_string()),
        Arc::new(|dialect, buf, value| {
            let SqlValue::Custom { inner, .. } = value else {
                return Err(Error::invariant("expected custom value"));
            };
            encode(dialect, buf, inner)
        }),
    );

    let v = SqlValue::Custom {
        type_name: "money_cents".to_string(),
        inner: Box::new(SqlValue::from(1999i64)),
    };
    assert_eq!(encode_to_string(&pg(), &v).unwrap(), "1999");
}

#[test]
fn test_unregistered_custom_type_fails() {
    let v = SqlValue::Custom {
        type_name: "never_registered".to_string(),
        inner: Box::new(SqlValue::from(0i32)),
    };
    assert_eq!(
        encode_to_string(&pg(), &v).unwrap_err(),
        Error::unsupported_type("never_registered")
    );
}

#[test]
fn test_statement_assembly_end_to_end() {
    let d = pg();
    let mut stmt = String::from("INSERT INTO ");
    append_ident(&d, &mut stmt, "events");
    stmt.push_str(" (tags, score) VALUES (");
    encode(&d, &mut stmt, &SqlValue::from(vec!["new", "urgent"])).unwrap();
    stmt.push_str(", ");
    encode(&d, &mut stmt, &SqlValue::from(0.75f64)).unwrap();
    stmt.push(')');
    assert_eq!(
        stmt,
        r#"INSERT INTO "events" (tags, score) VALUES ('{"new","urgent"}', 0.75)"#
    );
}
