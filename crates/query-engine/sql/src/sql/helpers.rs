//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// SELECTs //

/// Build a simple select * from a table, the rest are empty.
pub fn star_select(from: From) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: Where(empty_where()),
        order_by: empty_order_by(),
    }
}

/// Append a column to an existing select list.
pub fn append_column(select_list: SelectList, column: ColumnName) -> SelectList {
    SelectList::SelectListComposite(
        Box::new(select_list),
        Box::new(SelectList::SelectColumns(vec![column])),
    )
}

// Expressions //

/// `column IN (values...)`
pub fn in_list(column: ColumnName, values: Vec<Value>) -> Expression {
    Expression::BinaryArrayOperation {
        left: Box::new(Expression::ColumnReference(column)),
        operator: BinaryArrayOperator::In,
        right: values.into_iter().map(Expression::Value).collect(),
    }
}

/// Join predicates with `AND`. Returns the empty `WHERE` expression when there are
/// no predicates.
///
/// Raw SQL operands are parenthesized when there is more than one predicate, so
/// `a = 1 OR b = 2` joined with an id list renders as `(a = 1 OR b = 2) AND id IN (..)`
/// rather than the bare text followed by `AND`. This is a deliberate change: a raw
/// filter on its own is still emitted unmodified.
pub fn conjunction(predicates: Vec<Expression>) -> Expression {
    let wrap = predicates.len() > 1;
    predicates
        .into_iter()
        .map(|predicate| match predicate {
            Expression::RawSql(_) if wrap => Expression::Nested(Box::new(predicate)),
            other => other,
        })
        .reduce(|left, right| Expression::And {
            left: Box::new(left),
            right: Box::new(right),
        })
        .unwrap_or_else(empty_where)
}
