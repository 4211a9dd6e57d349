//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::SQL;

/// Print a SELECT statement.
pub fn select_to_sql(select: &Select) -> SQL {
    let mut sql = SQL::new();
    select.to_sql(&mut sql);
    sql
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        sql.append_syntax(" ");

        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        self.order_by.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectStar => sql.append_syntax("*"),
            SelectList::SelectColumns(columns) => {
                for (index, column) in columns.iter().enumerate() {
                    column.to_sql(sql);
                    if index < (columns.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectListComposite(first, second) => {
                first.to_sql(sql);
                sql.append_syntax(", ");
                second.to_sql(sql);
            }
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match self {
            From::Table { reference } => reference.to_sql(sql),
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, element) in self.elements.iter().enumerate() {
                element.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Expression::And { left, right } => {
                left.to_sql(sql);
                sql.append_syntax(" AND ");
                right.to_sql(sql);
            }
            Expression::BinaryArrayOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                sql.append_syntax("(");
                for (index, item) in right.iter().enumerate() {
                    item.to_sql(sql);
                    if index < (right.len() - 1) {
                        sql.append_syntax(",");
                    }
                }
                sql.append_syntax(")");
            }
            Expression::Nested(expression) => {
                sql.append_syntax("(");
                expression.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::RawSql(raw) => sql.append_syntax(raw),
            Expression::ColumnReference(column) => column.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
        }
    }
}

impl BinaryArrayOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryArrayOperator::In => sql.append_syntax(" IN "),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Value::Bool(value) => sql.append_syntax(if *value { "true" } else { "false" }),
            Value::Number(number) => sql.append_syntax(number),
            Value::String(string) => sql.append_string_literal(string),
        }
    }
}

impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let TableName(name) = self;
        sql.append_identifier(name);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_identifier(name);
    }
}
