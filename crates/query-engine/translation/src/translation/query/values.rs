//! Handle the translation of literal values.

use query_engine_sql::sql;

/// Convert an object id token into a SQL value. Tokens that read as a
/// finite number are emitted bare, everything else becomes a string literal.
pub(crate) fn translate_object_id(token: &str) -> sql::ast::Value {
    if token.parse::<f64>().is_ok_and(f64::is_finite) {
        sql::ast::Value::Number(token.to_string())
    } else {
        sql::ast::Value::String(token.to_string())
    }
}
