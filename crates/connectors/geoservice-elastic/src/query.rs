//! Answer a geoservice query.

use tracing::{info_span, Instrument};

use query_engine_execution::{convert, query::QueryExecutor};
use query_engine_metadata::metadata::{FieldName, Metadata};
use query_engine_translation::translation::geometry::GeometryNormalizer;
use query_engine_translation::translation::query::translate;
use query_engine_translation::translation::request::QueryRequest;

use crate::error::{self, QueryError};
use crate::response::{CollectionMetadata, FeatureCollection};
use crate::state::State;

/// Translate the request, run it, and turn the rows into features.
///
/// Exactly one query is sent to the data store per call.
pub async fn get_data<E: QueryExecutor>(
    metadata: &Metadata,
    state: &State<E>,
    normalizer: &dyn GeometryNormalizer,
    request: &QueryRequest,
) -> Result<FeatureCollection, QueryError> {
    let result = run(metadata, state, normalizer, request).await;

    match &result {
        Ok(collection) => state.metrics.record_success(collection.features.len()),
        Err(_) => state.metrics.record_error(),
    }

    result
}

async fn run<E: QueryExecutor>(
    metadata: &Metadata,
    state: &State<E>,
    normalizer: &dyn GeometryNormalizer,
    request: &QueryRequest,
) -> Result<FeatureCollection, QueryError> {
    let plan = async { translate(metadata, request, normalizer) }
        .instrument(info_span!("Translate query", dataset = %request.params.id))
        .await
        .map_err(error::unclassified)?;

    let result = query_engine_execution::query::execute(&state.executor, &plan.execution_plan)
        .await
        .map_err(error::classify)?;

    let geometry_field = plan.bindings.geometry_field.as_ref().map(FieldName::as_str);
    let features = async { convert::rows_to_features(result, geometry_field) }
        .instrument(info_span!("Convert results"))
        .await
        .map_err(|err| error::classify(err.into()))?;

    Ok(FeatureCollection {
        features,
        metadata: CollectionMetadata {
            id_field: plan.bindings.id_field.map(|field| field.to_string()),
        },
        filters_applied: plan.filters_applied,
    })
}
