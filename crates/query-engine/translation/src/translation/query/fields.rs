//! Handle the select list.

use query_engine_metadata::metadata::FieldName;
use query_engine_sql::sql;

use crate::translation::request::OutFields;

/// Translate the requested output fields into a select list.
/// The geometry field, when bound, is always appended, even after `*`,
/// so the result conversion can rely on it being there.
pub(crate) fn translate_fields(
    out_fields: &OutFields,
    geometry_field: Option<&FieldName>,
) -> sql::ast::SelectList {
    let select_list = match out_fields {
        OutFields::All => sql::ast::SelectList::SelectStar,
        OutFields::Fields(fields) => sql::ast::SelectList::SelectColumns(
            fields
                .iter()
                .map(|field| sql::ast::ColumnName(field.clone()))
                .collect(),
        ),
    };

    match geometry_field {
        None => select_list,
        Some(geometry_field) => sql::helpers::append_column(
            select_list,
            sql::ast::ColumnName(geometry_field.to_string()),
        ),
    }
}
