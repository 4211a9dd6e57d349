//! Common functions used across test cases.

use serde_json::{json, Value};

use geoservice_elastic::connector::Provider;
use geoservice_elastic::response::FeatureCollection;
use geoservice_elastic::state;
use query_engine_metadata::metadata::Metadata;
use query_engine_translation::translation::request::QueryRequest;
use tests_common::executor::MockExecutor;

/// Field bindings for `my-index`, as most tests register them.
pub fn my_index_metadata() -> Metadata {
    Metadata {
        id_fields: [("my-index", "id")].into(),
        geometry_fields: [("my-index", "location")].into(),
    }
}

/// A provider answering from the given mock, with its own metrics registry.
pub async fn create_provider(
    metadata: Metadata,
    executor: MockExecutor,
) -> (Provider<MockExecutor>, prometheus::Registry) {
    tests_common::init_logging();

    let mut registry = prometheus::Registry::new();
    let state = state::create_state_with_executor(executor, &mut registry)
        .await
        .unwrap();
    (Provider::new(metadata, state), registry)
}

/// A request for `my-index` with the given query parameters.
pub fn request(query: Value) -> QueryRequest {
    serde_json::from_value(json!({ "query": query, "params": { "id": "my-index" } })).unwrap()
}

/// The features of a collection as `{geometry, properties}` pairs.
pub fn features(collection: &FeatureCollection) -> Value {
    collection
        .features
        .iter()
        .map(|feature| {
            json!({
                "geometry": feature.geometry,
                "properties": feature.properties,
            })
        })
        .collect()
}

/// What the glacier fixture looks like once converted with `location` as the geometry field.
pub fn glacier_features() -> Value {
    json!([
        {
            "geometry": { "type": "Point", "coordinates": [-144.67, 64.48] },
            "properties": { "id": "AK64", "name": "GLACIER CREEK" }
        },
        {
            "geometry": { "type": "Point", "coordinates": [-102.84, 43.08] },
            "properties": { "id": "SD43", "name": "SANDOZ" }
        }
    ])
}

/// The single query the mock received, as it would be sent over the wire.
pub fn sent_query(provider: &Provider<MockExecutor>) -> Value {
    serde_json::to_value(provider.state().executor.sole_call()).unwrap()
}
