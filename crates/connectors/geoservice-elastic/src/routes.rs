//! The HTTP surface of the provider.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use query_engine_execution::query::QueryExecutor;
use query_engine_translation::translation::request::{GeoserviceQuery, QueryRequest, RequestParams};

use crate::connector::Provider;
use crate::error::{self, QueryError};
use crate::response::FeatureCollection;

/// Shared by every request.
pub struct ServerState<E> {
    pub provider: Provider<E>,
    pub metrics: Arc<prometheus::Registry>,
}

impl<E> Clone for ServerState<E> {
    fn clone(&self) -> Self {
        ServerState {
            provider: self.provider.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

pub fn create_router<E: QueryExecutor + 'static>(
    provider: Provider<E>,
    metrics: prometheus::Registry,
) -> Router {
    Router::new()
        .route("/health", get(get_health::<E>))
        .route("/metrics", get(get_metrics::<E>))
        .route("/:id/query", get(get_query::<E>))
        .with_state(ServerState {
            provider,
            metrics: Arc::new(metrics),
        })
}

async fn get_query<E: QueryExecutor + 'static>(
    State(state): State<ServerState<E>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<FeatureCollection>, ServerError> {
    let query = parse_query(params)?;
    let request = QueryRequest {
        query,
        params: RequestParams { id: id.into() },
    };

    let collection = state.provider.get_data(&request).await?;
    Ok(Json(collection))
}

async fn get_health<E: QueryExecutor + 'static>(
    State(state): State<ServerState<E>>,
) -> Result<StatusCode, ServerError> {
    state
        .provider
        .health_check()
        .await
        .map_err(|err| ServerError::Unavailable(err.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_metrics<E: QueryExecutor + 'static>(
    State(state): State<ServerState<E>>,
) -> Result<String, ServerError> {
    let encoder = prometheus::TextEncoder::new();
    encoder
        .encode_to_string(&state.metrics.gather())
        .map_err(|err| ServerError::Query(error::unclassified(err)))
}

/// Query string values are all text; the request model accepts the text forms.
fn parse_query(params: HashMap<String, String>) -> Result<GeoserviceQuery, ServerError> {
    let object: serde_json::Map<String, serde_json::Value> = params
        .into_iter()
        .map(|(key, value)| (key, serde_json::Value::String(value)))
        .collect();
    serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|err| ServerError::BadRequest(err.to_string()))
}

pub enum ServerError {
    BadRequest(String),
    Unavailable(String),
    Query(QueryError),
}

impl From<QueryError> for ServerError {
    fn from(value: QueryError) -> Self {
        ServerError::Query(value)
    }
}

#[derive(Serialize)]
struct JsonErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u16>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            ServerError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            ServerError::Unavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message, None),
            ServerError::Query(err) => {
                let code = err.code();
                let status = code
                    .and_then(|code| StatusCode::from_u16(code).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, err.to_string(), code)
            }
        };

        (status, Json(JsonErrorResponse { message, code })).into_response()
    }
}
