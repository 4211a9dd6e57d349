//! Handle filtering/where clauses translation.

use query_engine_metadata::metadata::FieldName;
use query_engine_sql::sql;

use super::values;

/// Translate the attribute filter and the object id list into a WHERE clause.
///
/// The attribute filter is the caller's own SQL and is used untouched. Object ids
/// only filter when the dataset has an id field; otherwise they are ignored.
pub(crate) fn translate_where(
    where_: Option<&str>,
    object_ids: Option<&[String]>,
    id_field: Option<&FieldName>,
) -> sql::ast::Where {
    let mut predicates = vec![];

    if let Some(where_) = where_ {
        predicates.push(sql::ast::Expression::RawSql(where_.to_string()));
    }

    if let (Some(id_field), Some(object_ids)) = (id_field, object_ids) {
        predicates.push(sql::helpers::in_list(
            sql::ast::ColumnName(id_field.to_string()),
            object_ids
                .iter()
                .map(|token| values::translate_object_id(token))
                .collect(),
        ));
    }

    sql::ast::Where(sql::helpers::conjunction(predicates))
}
