//! The geoservice request as it reaches the provider.
//!
//! Geoservice parameters usually arrive as query-string text, so every field
//! accepts its textual form as well as its natural JSON form. Empty strings
//! count as absent.

use serde::{Deserialize, Deserializer};

use query_engine_metadata::metadata::DatasetId;

/// The page size used when the request does not name one.
pub const DEFAULT_RESULT_RECORD_COUNT: u32 = 1000;

/// A request for the features of one dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: GeoserviceQuery,
    pub params: RequestParams,
}

/// Path parameters of the request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestParams {
    /// The dataset to query.
    pub id: DatasetId,
}

/// Geoservice query parameters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoserviceQuery {
    /// Attribute filter in the data store's own SQL syntax. Passed through as is.
    #[serde(default, rename = "where", deserialize_with = "non_empty_string")]
    pub where_: Option<String>,
    #[serde(default)]
    pub out_fields: OutFields,
    /// Sort expression, passed through as is.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub order_by_fields: Option<String>,
    #[serde(default, deserialize_with = "object_ids")]
    pub object_ids: Option<Vec<String>>,
    #[serde(default, deserialize_with = "non_empty_value")]
    pub geometry: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub spatial_rel: Option<String>,
    #[serde(default, rename = "inSR", deserialize_with = "non_empty_value")]
    pub in_sr: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "positive_count")]
    pub result_record_count: Option<u32>,
}

impl GeoserviceQuery {
    /// The advisory page size for the data store.
    pub fn fetch_size(&self) -> u32 {
        self.result_record_count
            .unwrap_or(DEFAULT_RESULT_RECORD_COUNT)
    }
}

/// The fields requested in the output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutFields {
    #[default]
    All,
    Fields(Vec<String>),
}

impl<'de> Deserialize<'de> for OutFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            List(Vec<String>),
        }

        let fields: Vec<String> = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.split(',').map(str::to_string).collect(),
            Raw::List(list) => list,
        };
        let fields: Vec<String> = fields
            .iter()
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if fields.is_empty() || fields.iter().any(|field| field == "*") {
            Ok(OutFields::All)
        } else {
            Ok(OutFields::Fields(fields))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }
}

fn non_empty_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

fn non_empty_value<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<serde_json::Value>, D::Error> {
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.filter(|value| match value {
        serde_json::Value::Null => false,
        serde_json::Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }))
}

/// Object ids arrive as a comma separated string, a list, or a single number.
fn object_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<String>>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Scalar>),
        Single(Scalar),
    }

    let tokens: Vec<String> = match Option::<Raw>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Raw::Single(Scalar::Text(text))) => text.split(',').map(str::to_string).collect(),
        Some(Raw::Single(number)) => vec![number.into_text()],
        Some(Raw::List(list)) => list.into_iter().map(Scalar::into_text).collect(),
    };
    let tokens: Vec<String> = tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    Ok(if tokens.is_empty() { None } else { Some(tokens) })
}

/// Zero means "not given", like an empty string.
fn positive_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let count = match Option::<Scalar>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Scalar::Number(number)) => number
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid record count {number}")))?,
        Some(Scalar::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(Scalar::Text(text)) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid record count '{text}'")))?,
    };
    let count = u32::try_from(count).map_err(serde::de::Error::custom)?;
    Ok(if count == 0 { None } else { Some(count) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(query: serde_json::Value) -> GeoserviceQuery {
        serde_json::from_value(query).unwrap()
    }

    #[test]
    fn defaults() {
        let query = parse(json!({}));
        assert_eq!(query, GeoserviceQuery::default());
        assert_eq!(query.out_fields, OutFields::All);
        assert_eq!(query.fetch_size(), 1000);
    }

    #[test]
    fn query_string_forms() {
        let query = parse(json!({
            "where": "foo='bar'",
            "outFields": "id, name",
            "orderByFields": "name DESC",
            "objectIds": "1, 2,a",
            "geometry": "-123,45,-120,49",
            "spatialRel": "esriSpatialRelWithin",
            "inSR": "4326",
            "resultRecordCount": "25"
        }));

        assert_eq!(query.where_.as_deref(), Some("foo='bar'"));
        assert_eq!(
            query.out_fields,
            OutFields::Fields(vec!["id".to_string(), "name".to_string()])
        );
        assert_eq!(query.order_by_fields.as_deref(), Some("name DESC"));
        assert_eq!(
            query.object_ids,
            Some(vec!["1".to_string(), "2".to_string(), "a".to_string()])
        );
        assert_eq!(query.geometry, Some(json!("-123,45,-120,49")));
        assert_eq!(query.in_sr, Some(json!("4326")));
        assert_eq!(query.fetch_size(), 25);
    }

    #[test]
    fn json_forms() {
        let query = parse(json!({
            "outFields": ["*"],
            "objectIds": [1, "b"],
            "resultRecordCount": 10
        }));
        assert_eq!(query.out_fields, OutFields::All);
        assert_eq!(query.object_ids, Some(vec!["1".to_string(), "b".to_string()]));
        assert_eq!(query.fetch_size(), 10);

        let query = parse(json!({ "objectIds": 42 }));
        assert_eq!(query.object_ids, Some(vec!["42".to_string()]));
    }

    #[test]
    fn object_id_tokens_are_trimmed() {
        let query = parse(json!({ "objectIds": "a, b,,c " }));
        assert_eq!(
            query.object_ids,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );

        let query = parse(json!({ "objectIds": " , " }));
        assert_eq!(query.object_ids, None);
    }

    #[test]
    fn empty_values_are_absent() {
        let query = parse(json!({
            "where": "",
            "orderByFields": " ",
            "objectIds": "",
            "geometry": "",
            "outFields": "",
            "resultRecordCount": 0
        }));
        assert_eq!(query, GeoserviceQuery::default());
    }

    #[test]
    fn full_request() {
        let request: QueryRequest = serde_json::from_value(json!({
            "query": { "where": "acres > 10" },
            "params": { "id": "fires" }
        }))
        .unwrap();
        assert_eq!(request.params.id, DatasetId::from("fires"));
        assert_eq!(request.query.where_.as_deref(), Some("acres > 10"));
    }
}
