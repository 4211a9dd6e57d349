use std::fs;
use std::path::PathBuf;

use query_engine_metadata::metadata::Metadata;
use query_engine_translation::translation;
use query_engine_translation::translation::geometry::StandardNormalizer;

/// Translate the request of a golden file test against the shared metadata.
pub fn test_translation(testname: &str) -> anyhow::Result<translation::query::QueryPlan> {
    let directory = PathBuf::from("tests/goldenfiles");

    let metadata: Metadata =
        serde_json::from_str(&fs::read_to_string(directory.join("metadata.json"))?)?;

    let request = serde_json::from_str(&fs::read_to_string(
        directory.join(testname).join("request.json"),
    )?)?;

    Ok(translation::query::translate(
        &metadata,
        &request,
        &StandardNormalizer,
    )?)
}

/// The generated SQL of a golden file test.
pub fn test_sql(testname: &str) -> String {
    test_translation(testname)
        .unwrap()
        .execution_plan
        .query_sql()
        .sql
}
