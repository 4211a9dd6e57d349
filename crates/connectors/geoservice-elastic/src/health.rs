//! Health check endpoint for the provider.

use query_engine_execution::error::Error;
use query_engine_execution::query::QueryExecutor;

/// Check the health of the provider.
///
/// For the Elasticsearch client this asks the node for its banner, so it fails
/// when the cluster cannot be reached or rejects our credentials.
pub async fn health_check<E: QueryExecutor + ?Sized>(executor: &E) -> Result<(), Error> {
    executor.health().await.map_err(|err| {
        tracing::error!(
            meta.signal_type = "log",
            event.domain = "geoservice",
            event.name = "Health check error",
            name = "Health check error",
            body = %err,
            error = true,
        );
        err
    })
}
