use query_engine_sql::sql::ast::*;
use query_engine_sql::sql::convert::select_to_sql;
use query_engine_sql::sql::helpers;

fn my_index() -> From {
    From::Table {
        reference: TableName("my-index".to_string()),
    }
}

#[test]
fn it_converts_simple_select() {
    let select = helpers::star_select(my_index());
    insta::assert_snapshot!(select_to_sql(&select).sql, @"SELECT * FROM my-index");
}

#[test]
fn it_appends_a_column_to_select_star() {
    let mut select = helpers::star_select(my_index());
    select.select_list = helpers::append_column(
        select.select_list,
        ColumnName("location".to_string()),
    );
    insta::assert_snapshot!(select_to_sql(&select).sql, @"SELECT *, location FROM my-index");
}

#[test]
fn it_converts_in_lists_and_order_by() {
    let mut select = helpers::star_select(my_index());
    select.select_list = SelectList::SelectColumns(vec![
        ColumnName("id".to_string()),
        ColumnName("name".to_string()),
    ]);
    select.where_ = Where(helpers::in_list(
        ColumnName("id".to_string()),
        vec![
            Value::Number("1".to_string()),
            Value::String("b".to_string()),
        ],
    ));
    select.order_by = OrderBy {
        elements: vec![Expression::RawSql("name DESC".to_string())],
    };
    insta::assert_snapshot!(
        select_to_sql(&select).sql,
        @"SELECT id, name FROM my-index WHERE id IN (1,'b') ORDER BY name DESC"
    );
}

#[test]
fn single_predicates_are_not_parenthesized() {
    let expression = helpers::conjunction(vec![Expression::RawSql("a = 1 OR b = 2".to_string())]);
    assert_eq!(expression, Expression::RawSql("a = 1 OR b = 2".to_string()));
}

#[test]
fn conjoined_raw_sql_is_parenthesized() {
    let mut select = helpers::star_select(my_index());
    select.where_ = Where(helpers::conjunction(vec![
        Expression::RawSql("a = 1 OR b = 2".to_string()),
        helpers::in_list(
            ColumnName("id".to_string()),
            vec![Value::Number("7".to_string())],
        ),
    ]));
    insta::assert_snapshot!(
        select_to_sql(&select).sql,
        @"SELECT * FROM my-index WHERE (a = 1 OR b = 2) AND id IN (7)"
    );
}

#[test]
fn no_predicates_means_no_where_clause() {
    let mut select = helpers::star_select(my_index());
    select.where_ = Where(helpers::conjunction(vec![]));
    assert_eq!(select_to_sql(&select).sql, "SELECT * FROM my-index");
}

#[test]
fn constant_false_is_rendered_as_a_where_clause() {
    let mut select = helpers::star_select(my_index());
    select.where_ = Where(Expression::Value(Value::Bool(false)));
    insta::assert_snapshot!(select_to_sql(&select).sql, @"SELECT * FROM my-index WHERE false");
}
