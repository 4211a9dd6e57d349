//! A query executor that answers from memory and remembers what it was asked.

use std::sync::Mutex;

use async_trait::async_trait;

use query_engine_execution::error::Error;
use query_engine_execution::query::{BackendQuery, BackendResult, QueryExecutor};

/// What the mock answers with.
pub enum Reply {
    Result(BackendResult),
    /// An error body from the data store, with the status nested in it.
    Response { status: Option<u16>, message: String },
    /// A failure that carries no status at all.
    Other(String),
}

pub struct MockExecutor {
    reply: Reply,
    calls: Mutex<Vec<BackendQuery>>,
}

impl MockExecutor {
    pub fn new(reply: Reply) -> Self {
        MockExecutor {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(result: BackendResult) -> Self {
        Self::new(Reply::Result(result))
    }

    pub fn failing_with_status(status: Option<u16>, message: &str) -> Self {
        Self::new(Reply::Response {
            status,
            message: message.to_string(),
        })
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Reply::Other(message.to_string()))
    }

    /// Every query received so far, in order.
    pub fn calls(&self) -> Vec<BackendQuery> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn sole_call(&self) -> BackendQuery {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one query, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn query(&self, query: &BackendQuery) -> Result<BackendResult, Error> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.clone());
        }
        match &self.reply {
            Reply::Result(result) => Ok(result.clone()),
            Reply::Response { status, message } => Err(Error::Response {
                status: *status,
                message: message.clone(),
            }),
            Reply::Other(message) => Err(Error::Other(message.clone().into())),
        }
    }
}
