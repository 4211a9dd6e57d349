//! Type definitions of a SQL AST representation.

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub order_by: OrderBy,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    /// `*`
    SelectStar,
    /// An explicit list of columns.
    SelectColumns(Vec<ColumnName>),
    /// Two select lists printed one after the other. Columns are not deduplicated.
    SelectListComposite(Box<SelectList>, Box<SelectList>),
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    /// Select from a table (or index) of the data store
    Table { reference: TableName },
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<Expression>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// AND clause
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A binary operation on a scalar expression and an array of scalar expressions
    BinaryArrayOperation {
        left: Box<Expression>,
        operator: BinaryArrayOperator,
        right: Vec<Expression>,
    },
    /// An expression wrapped in parentheses
    Nested(Box<Expression>),
    /// Raw SQL written by a user which is opaque to us
    RawSql(String),
    /// A column reference
    ColumnReference(ColumnName),
    /// An irreducible value
    Value(Value),
}

/// A binary operator when the rhs is an array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryArrayOperator {
    In,
}

/// Value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    /// A numeric literal, printed exactly as given.
    Number(String),
    /// A string literal, printed single-quoted.
    String(String),
}

/// A table (or index) name. Printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A column name. Printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);
