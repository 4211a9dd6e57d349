//! This defines the geoservice `Provider` for Elasticsearch, and the setup that builds it
//! from a configuration directory or from registration options.

use std::path::Path;
use std::sync::Arc;

use tracing::{info_span, Instrument};

use geoservice_elastic_configuration as configuration;
use geoservice_elastic_configuration::environment::Environment;
use query_engine_execution::client::ElasticsearchClient;
use query_engine_execution::query::QueryExecutor;
use query_engine_metadata::metadata::Metadata;
use query_engine_translation::translation::geometry::{GeometryNormalizer, StandardNormalizer};
use query_engine_translation::translation::request::QueryRequest;

use super::error::QueryError;
use super::health;
use super::query;
use super::response::FeatureCollection;
use super::state;

/// Answers geoservice queries against one cluster.
///
/// Cheap to clone: the field bindings and the state are shared and never mutated.
pub struct Provider<E = ElasticsearchClient> {
    metadata: Arc<Metadata>,
    state: Arc<state::State<E>>,
    normalizer: Arc<dyn GeometryNormalizer>,
}

impl<E> Clone for Provider<E> {
    fn clone(&self) -> Self {
        Provider {
            metadata: Arc::clone(&self.metadata),
            state: Arc::clone(&self.state),
            normalizer: Arc::clone(&self.normalizer),
        }
    }
}

impl Provider {
    /// Build a provider from registration options (`conn`, `idFieldMap`, `geometryFieldMap`).
    pub async fn register(
        options: serde_json::Value,
        environment: impl Environment,
        metrics: &mut prometheus::Registry,
    ) -> Result<Self, SetupError> {
        GeoserviceSetup::new(environment)
            .register(options, metrics)
            .await
    }
}

impl<E: QueryExecutor> Provider<E> {
    pub fn new(metadata: Metadata, state: state::State<E>) -> Self {
        Provider {
            metadata: Arc::new(metadata),
            state: Arc::new(state),
            normalizer: Arc::new(StandardNormalizer),
        }
    }

    /// Replace the geometry normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl GeometryNormalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn state(&self) -> &state::State<E> {
        &self.state
    }

    /// Execute a query
    pub async fn get_data(&self, request: &QueryRequest) -> Result<FeatureCollection, QueryError> {
        query::get_data(&self.metadata, &self.state, self.normalizer.as_ref(), request).await
    }

    /// Check that the data store can be reached.
    pub async fn health_check(&self) -> Result<(), query_engine_execution::error::Error> {
        health::health_check(&self.state.executor).await
    }
}

/// Builds providers, reading secrets from the given environment.
pub struct GeoserviceSetup<Env: Environment> {
    environment: Env,
}

impl<Env: Environment> GeoserviceSetup<Env> {
    pub fn new(environment: Env) -> Self {
        Self { environment }
    }

    /// Read the configuration directory and resolve its secrets.
    pub async fn parse_configuration(
        &self,
        configuration_dir: impl AsRef<Path> + Send,
    ) -> Result<configuration::Configuration, SetupError> {
        // Validation errors are not logged here, the caller decides what to do with them.
        let parsed_configuration = configuration::parse_configuration(configuration_dir)
            .instrument(info_span!("parse configuration"))
            .await?;

        Ok(configuration::make_runtime_configuration(
            parsed_configuration,
            &self.environment,
        )?)
    }

    /// Validate registration options and resolve their secrets.
    pub fn parse_registration_options(
        &self,
        options: serde_json::Value,
    ) -> Result<configuration::Configuration, SetupError> {
        let parsed_configuration = configuration::parse_registration_options(options)?;
        Ok(configuration::make_runtime_configuration(
            parsed_configuration,
            &self.environment,
        )?)
    }

    /// Initialize the provider's in-memory state.
    ///
    /// This creates the cluster client and registers the provider's metrics.
    pub async fn try_init_state(
        &self,
        configuration: configuration::Configuration,
        metrics: &mut prometheus::Registry,
    ) -> Result<Provider, SetupError> {
        let state = state::create_state(&configuration.connection, metrics)
            .instrument(info_span!("Initialise state"))
            .await
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "geoservice",
                    event.name = "Initialization error",
                    name = "Initialization error",
                    body = %err,
                    error = true,
                );
                err
            })?;

        Ok(Provider::new(configuration.metadata, state))
    }

    /// Build a provider from registration options, logging why when it cannot be built.
    pub async fn register(
        &self,
        options: serde_json::Value,
        metrics: &mut prometheus::Registry,
    ) -> Result<Provider, SetupError> {
        let result = match self.parse_registration_options(options) {
            Ok(configuration) => self.try_init_state(configuration, metrics).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            tracing::error!("Provider registration error: {err}");
        }
        result
    }
}

/// The provider could not be built.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    InvalidOptions(#[from] configuration::error::ConfigurationError),
    #[error(transparent)]
    ParseConfiguration(#[from] configuration::error::ParseConfigurationError),
    #[error(transparent)]
    MakeRuntimeConfiguration(#[from] configuration::error::MakeRuntimeConfigurationError),
    #[error(transparent)]
    Initialization(#[from] state::InitializationError),
}
