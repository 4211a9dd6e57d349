//! A client for the Elasticsearch SQL API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::error::Error;
use crate::query::{BackendQuery, BackendResult, QueryExecutor};

/// How to authenticate against the cluster.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    ApiKey(String),
    Basic { username: String, password: String },
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authorization::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Authorization::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

/// Runs SQL queries against an Elasticsearch node.
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    http: reqwest::Client,
    node: Url,
    authorization: Option<Authorization>,
}

impl ElasticsearchClient {
    pub fn new(
        node: &Url,
        authorization: Option<Authorization>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        // make sure relative joins keep any path prefix of the node
        let mut node = node.clone();
        if !node.path().ends_with('/') {
            let path = format!("{}/", node.path());
            node.set_path(&path);
        }

        Ok(ElasticsearchClient {
            http: builder.build()?,
            node,
            authorization,
        })
    }

    /// The endpoint SQL queries are posted to.
    pub fn sql_endpoint(&self) -> Result<Url, Error> {
        let mut endpoint = self
            .node
            .join("_sql")
            .map_err(|err| Error::Decode(err.to_string()))?;
        endpoint.set_query(Some("format=json"));
        Ok(endpoint)
    }

    /// Check that the node answers.
    pub async fn ping(&self) -> Result<(), Error> {
        let response = self
            .authorize(self.http.get(self.node.clone()))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await?;
            Err(response_error(status, &body))
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.authorization {
            None => request,
            Some(Authorization::ApiKey(key)) => {
                request.header(reqwest::header::AUTHORIZATION, format!("ApiKey {key}"))
            }
            Some(Authorization::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

#[async_trait]
impl QueryExecutor for ElasticsearchClient {
    async fn query(&self, query: &BackendQuery) -> Result<BackendResult, Error> {
        let response = self
            .authorize(self.http.post(self.sql_endpoint()?))
            .json(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(response_error(status, &body));
        }

        response
            .json::<BackendResult>()
            .await
            .map_err(|err| Error::Decode(err.to_string()))
    }

    async fn health(&self) -> Result<(), Error> {
        self.ping().await
    }
}

/// The body of an error response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorCause>,
    #[serde(default)]
    status: Option<u16>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorCause {
    Text(String),
    Detailed {
        #[serde(default, rename = "type")]
        r#type: Option<String>,
        #[serde(default)]
        reason: Option<String>,
    },
}

/// Turn an error response into an error. The status code is only taken from the
/// body, so a body we cannot read carries no status.
fn response_error(status_code: StatusCode, body: &str) -> Error {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();

    let status = parsed.as_ref().and_then(|body| body.status);
    let message = parsed
        .and_then(|body| body.error)
        .and_then(|cause| match cause {
            ErrorCause::Text(text) => Some(text),
            ErrorCause::Detailed { r#type, reason } => reason.or(r#type),
        })
        .or_else(|| Some(body.trim().to_string()).filter(|body| !body.is_empty()))
        .unwrap_or_else(|| status_code.to_string());

    Error::Response { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(error: Error) -> (Option<u16>, String) {
        match error {
            Error::Response { status, message } => (status, message),
            other => panic!("expected a response error, got {other:?}"),
        }
    }

    #[test]
    fn reads_nested_status_and_reason() {
        let body = r#"{"error":{"root_cause":[],"type":"verification_exception","reason":"Found 1 problem\nline 1:8: Unknown column [nope]"},"status":400}"#;
        let (status, message) = parts(response_error(StatusCode::BAD_REQUEST, body));
        assert_eq!(status, Some(400));
        assert_eq!(message, "Found 1 problem\nline 1:8: Unknown column [nope]");
    }

    #[test]
    fn falls_back_to_type_and_text() {
        let body = r#"{"error":{"type":"index_not_found_exception"},"status":404}"#;
        assert_eq!(
            parts(response_error(StatusCode::NOT_FOUND, body)),
            (Some(404), "index_not_found_exception".to_string())
        );

        let body = r#"{"error":"no handler found"}"#;
        assert_eq!(
            parts(response_error(StatusCode::BAD_REQUEST, body)),
            (None, "no handler found".to_string())
        );
    }

    #[test]
    fn unreadable_bodies_carry_no_status() {
        let (status, message) = parts(response_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"));
        assert_eq!(status, None);
        assert_eq!(message, "<html>bad gateway</html>");

        let (status, message) = parts(response_error(StatusCode::SERVICE_UNAVAILABLE, ""));
        assert_eq!(status, None);
        assert_eq!(message, "503 Service Unavailable");
    }

    #[test]
    fn sql_endpoint_keeps_path_prefix() {
        let node = Url::parse("http://localhost:9200").unwrap();
        let client = ElasticsearchClient::new(&node, None, None).unwrap();
        assert_eq!(
            client.sql_endpoint().unwrap().as_str(),
            "http://localhost:9200/_sql?format=json"
        );

        let node = Url::parse("https://search.example.com/elastic").unwrap();
        let client = ElasticsearchClient::new(&node, None, None).unwrap();
        assert_eq!(
            client.sql_endpoint().unwrap().as_str(),
            "https://search.example.com/elastic/_sql?format=json"
        );
    }

    #[test]
    fn authorization_is_redacted() {
        let authorization = Authorization::Basic {
            username: "elastic".to_string(),
            password: "changeme".to_string(),
        };
        assert!(!format!("{authorization:?}").contains("changeme"));
        assert!(!format!("{:?}", Authorization::ApiKey("secret".to_string())).contains("secret"));
    }
}
