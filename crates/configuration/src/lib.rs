pub mod configuration;
pub mod connection_settings;
pub mod environment;
pub mod error;
pub mod to_runtime_configuration;
pub mod validate;
pub mod values;
pub mod version1;

pub use configuration::{Authorization, Configuration, ResolvedConnection};
pub use connection_settings::{AuthSettings, ConnectionSettings};
pub use to_runtime_configuration::make_runtime_configuration;
pub use validate::parse_registration_options;
pub use version1::{parse_configuration, write_parsed_configuration, ParsedConfiguration};
