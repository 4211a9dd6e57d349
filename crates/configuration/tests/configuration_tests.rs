use std::collections::HashMap;

use serde_json::json;

use geoservice_elastic_configuration::environment::Variable;
use geoservice_elastic_configuration::error::ParseConfigurationError;
use geoservice_elastic_configuration::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration,
    ParsedConfiguration,
};

async fn write_raw(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("configuration.json"), contents)
        .await
        .unwrap();
    dir
}

#[tokio::test]
async fn parses_a_configuration_directory() {
    let dir = write_raw(
        &json!({
            "version": 1,
            "conn": { "node": { "variable": "ES_NODE" } },
            "idFieldMap": { "fires": "fireId" },
            "geometryFieldMap": { "fires": "location" }
        })
        .to_string(),
    )
    .await;

    let parsed = parse_configuration(dir.path()).await.unwrap();
    let environment = HashMap::from([(
        Variable::from("ES_NODE"),
        "http://elasticsearch:9200".to_string(),
    )]);
    let configuration = make_runtime_configuration(parsed, environment).unwrap();

    assert_eq!(
        configuration.connection.node.as_str(),
        "http://elasticsearch:9200/"
    );
    let bindings = configuration.metadata.bindings(&"fires".into());
    assert_eq!(bindings.id_field.unwrap().as_str(), "fireId");
    assert_eq!(bindings.geometry_field.unwrap().as_str(), "location");
}

#[tokio::test]
async fn round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested");
    let mut parsed = ParsedConfiguration::initial();
    parsed.metadata.geometry_fields = [("my-index", "location")].into();

    write_parsed_configuration(parsed.clone(), &out).await.unwrap();

    assert_eq!(parse_configuration(&out).await.unwrap(), parsed);
}

#[tokio::test]
async fn reports_parse_errors_with_a_location() {
    let dir = write_raw("{\n  \"conn\": {\n}").await;

    let error = parse_configuration(dir.path()).await.unwrap_err();
    match error {
        ParseConfigurationError::ParseError { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn reports_invalid_field_maps() {
    let dir = write_raw(&json!({ "conn": { "node": "http://es:9200" }, "idFieldMap": [] }).to_string()).await;

    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(error
        .to_string()
        .ends_with("invalid \"idFieldMap\", must be of type object"));
}

#[tokio::test]
async fn rejects_unknown_versions() {
    let dir = write_raw(&json!({ "version": 2, "conn": { "node": "http://es:9200" } }).to_string()).await;

    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(matches!(
        error,
        ParseConfigurationError::UnsupportedVersion(2)
    ));
}

#[tokio::test]
async fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let error = parse_configuration(dir.path().join("absent"))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ParseConfigurationError::IoErrorButStringified(_)
    ));
}

#[test]
fn schema_describes_the_options() {
    let schema = serde_json::to_value(
        geoservice_elastic_configuration::configuration::generate_latest_schema(),
    )
    .unwrap();
    let properties = &schema["properties"];
    assert!(properties.get("conn").is_some());
    assert!(properties.get("idFieldMap").is_some());
    assert!(properties.get("geometryFieldMap").is_some());
}
