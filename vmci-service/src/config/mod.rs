// Configuration Module
// Models and parsing for the centralized version configuration

pub mod error;
pub mod models;
pub mod parser;

// Re-export key types
pub use error::ConfigError;
pub use models::{PreReleaseImage, VersionDescriptor, VersionsConfig};
pub use parser::ConfigParser;
