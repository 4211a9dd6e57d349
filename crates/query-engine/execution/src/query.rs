//! Execute an execution plan against the data store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};

use query_engine_sql::sql;

use crate::error::Error;

/// The request body of a SQL query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendQuery {
    pub fetch_size: u32,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

impl BackendQuery {
    pub fn from_plan(plan: &sql::execution_plan::ExecutionPlan) -> Self {
        BackendQuery {
            fetch_size: plan.fetch_size,
            query: plan.query_sql().sql,
            filter: plan.filter.clone(),
        }
    }
}

/// A tabular query result. Every row has one value per column, in column order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendResult {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// A column descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default, rename = "type")]
    pub r#type: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            r#type: None,
        }
    }
}

/// Something that can run a SQL query, e.g. a client for the data store.
///
/// A single call, no retries and no paging: `fetch_size` is only a hint.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn query(&self, query: &BackendQuery) -> Result<BackendResult, Error>;

    /// Check that the data store can be reached.
    async fn health(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Execute a query against the data store.
pub async fn execute<E: QueryExecutor + ?Sized>(
    executor: &E,
    plan: &sql::execution_plan::ExecutionPlan,
) -> Result<BackendResult, Error> {
    let query = BackendQuery::from_plan(plan);

    tracing::debug!(
        generated_sql = query.query.as_str(),
        fetch_size = query.fetch_size,
        filter = ?query.filter,
    );

    let result = executor
        .query(&query)
        .instrument(info_span!("Execute query"))
        .await?;

    tracing::debug!(
        columns = result.columns.len(),
        rows = result.rows.len(),
        "query returned"
    );

    Ok(result)
}
