//! Checks on the shape of registration options, run before they are deserialized.

use serde_json::Value;

use crate::error::ConfigurationError;
use crate::version1::ParsedConfiguration;

const CONN: &str = "conn";
const ID_FIELD_MAP: &str = "idFieldMap";
const GEOMETRY_FIELD_MAP: &str = "geometryFieldMap";

/// Reject options that are missing a connection, or that carry field maps of the wrong shape.
pub fn validate_registration(options: &Value) -> Result<(), ConfigurationError> {
    validate_conn(options.get(CONN))?;
    validate_field_map(ID_FIELD_MAP, options.get(ID_FIELD_MAP))?;
    validate_field_map(GEOMETRY_FIELD_MAP, options.get(GEOMETRY_FIELD_MAP))
}

/// Validate and then deserialize the options a provider is registered with.
pub fn parse_registration_options(
    options: Value,
) -> Result<ParsedConfiguration, ConfigurationError> {
    validate_registration(&options)?;
    serde_json::from_value(options).map_err(|err| ConfigurationError::Invalid {
        field: CONN.to_string(),
        message: err.to_string(),
    })
}

fn validate_conn(conn: Option<&Value>) -> Result<(), ConfigurationError> {
    match conn {
        None | Some(Value::Null) => Err(ConfigurationError::MissingConnection),
        Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(ConfigurationError::NotAnObject {
            field: CONN.to_string(),
        }),
    }
}

fn validate_field_map(name: &str, map: Option<&Value>) -> Result<(), ConfigurationError> {
    match map {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(entries)) => {
            match entries.iter().find(|(_, value)| !value.is_string()) {
                Some((key, _)) => Err(ConfigurationError::NotAString {
                    map: name.to_string(),
                    key: key.clone(),
                }),
                None => Ok(()),
            }
        }
        Some(_) => Err(ConfigurationError::NotAnObject {
            field: name.to_string(),
        }),
    }
}
