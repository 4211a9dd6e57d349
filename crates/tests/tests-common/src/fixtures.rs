//! Canned data store responses.

use serde_json::json;

use query_engine_execution::query::{BackendResult, Column};

fn columns() -> Vec<Column> {
    vec![
        Column::new("id"),
        Column::new("location"),
        Column::new("name"),
    ]
}

/// Two glaciers, with WKT points in the `location` column.
pub fn glaciers() -> BackendResult {
    BackendResult {
        columns: columns(),
        rows: vec![
            vec![json!("AK64"), json!("POINT (-144.67 64.48)"), json!("GLACIER CREEK")],
            vec![json!("SD43"), json!("POINT (-102.84 43.08)"), json!("SANDOZ")],
        ],
    }
}

/// The glaciers, with the geometry column stored as GeoJSON objects instead.
pub fn glaciers_as_geojson() -> BackendResult {
    BackendResult {
        columns: columns(),
        rows: vec![
            vec![
                json!("AK64"),
                json!({ "type": "Point", "coordinates": [-144.67, 64.48] }),
                json!("GLACIER CREEK"),
            ],
            vec![
                json!("SD43"),
                json!({ "type": "Point", "coordinates": [-102.84, 43.08] }),
                json!("SANDOZ"),
            ],
        ],
    }
}

/// A row that is missing a value.
pub fn ragged() -> BackendResult {
    BackendResult {
        columns: columns(),
        rows: vec![vec![json!("AK64"), json!("POINT (-144.67 64.48)")]],
    }
}

pub fn empty() -> BackendResult {
    BackendResult {
        columns: columns(),
        rows: Vec::new(),
    }
}
