//! Translate the sort order.

use query_engine_sql::sql;

/// The sort expression is appended as given.
pub(crate) fn translate_order_by(order_by_fields: Option<&str>) -> sql::ast::OrderBy {
    match order_by_fields {
        None => sql::helpers::empty_order_by(),
        Some(order_by_fields) => sql::ast::OrderBy {
            elements: vec![sql::ast::Expression::RawSql(order_by_fields.to_string())],
        },
    }
}
