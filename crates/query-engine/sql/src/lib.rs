//! SQL AST and its rendering to the SQL dialect understood by the search index.

pub mod sql;
