//! Describe the query we send to the data store.

use super::ast::Select;
use super::convert::select_to_sql;
use super::string::SQL;

/// Definition of an execution plan to be run against the data store.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// Advisory page size for the data store. We never page through results.
    pub fetch_size: u32,
    /// The SQL query.
    pub query: Select,
    /// A structured, data store specific filter applied alongside the SQL query.
    pub filter: Option<serde_json::Value>,
}

impl ExecutionPlan {
    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> SQL {
        select_to_sql(&self.query)
    }
}
