//! Transient state used by the provider.
//!
//! This is initialized on startup.

use thiserror::Error;
use tracing::{info_span, Instrument};

use geoservice_elastic_configuration as configuration;
use query_engine_execution::client::{self, ElasticsearchClient};
use query_engine_execution::metrics;

/// State for our provider.
#[derive(Debug)]
pub struct State<E = ElasticsearchClient> {
    pub metrics: metrics::Metrics,
    pub executor: E,
}

/// Create a client for the cluster and wrap it inside a provider State.
pub async fn create_state(
    connection: &configuration::ResolvedConnection,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics = async {
        metrics::Metrics::initialize(metrics_registry).map_err(InitializationError::MetricsError)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    let executor = ElasticsearchClient::new(
        &connection.node,
        connection.authorization.as_ref().map(client_authorization),
        connection.request_timeout,
    )
    .map_err(InitializationError::UnableToCreateClient)?;

    Ok(State { metrics, executor })
}

/// Wrap any query executor inside a provider State.
pub async fn create_state_with_executor<E>(
    executor: E,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State<E>, InitializationError> {
    let metrics = async {
        metrics::Metrics::initialize(metrics_registry).map_err(InitializationError::MetricsError)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    Ok(State { metrics, executor })
}

fn client_authorization(authorization: &configuration::Authorization) -> client::Authorization {
    match authorization {
        configuration::Authorization::ApiKey(key) => client::Authorization::ApiKey(key.clone()),
        configuration::Authorization::Basic { username, password } => {
            client::Authorization::Basic {
                username: username.clone(),
                password: password.clone(),
            }
        }
    }
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize the Elasticsearch client: {0}")]
    UnableToCreateClient(query_engine_execution::error::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
