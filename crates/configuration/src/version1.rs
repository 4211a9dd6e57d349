//! The on-disk configuration format, which doubles as the provider's registration options.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use query_engine_metadata::metadata;

use crate::connection_settings::ConnectionSettings;
use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::validate::validate_registration;

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";

/// Everything needed to connect to a cluster and to find the id and geometry fields of each
/// dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    #[serde(default = "current_version")]
    pub version: u32,
    pub conn: ConnectionSettings,
    #[serde(flatten)]
    pub metadata: metadata::Metadata,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl ParsedConfiguration {
    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            conn: ConnectionSettings::empty(),
            metadata: metadata::Metadata::empty(),
        }
    }

    pub fn initial() -> Self {
        ParsedConfiguration::empty()
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let raw: serde_json::Value = serde_json::from_str(&configuration_file_contents).map_err(
        |error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        },
    )?;

    validate_registration(&raw).map_err(|error| ParseConfigurationError::ValidationError {
        file_path: configuration_file.clone(),
        error,
    })?;

    let parsed_config: ParsedConfiguration =
        serde_json::from_value(raw).map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion(
            parsed_config.version,
        ));
    }

    tracing::debug!(
        file = %configuration_file.display(),
        "Parsed configuration"
    );

    Ok(parsed_config)
}

/// Write the parsed configuration into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
