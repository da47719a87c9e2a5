// VMCI Service Library
// Core service for CI version-matrix generation and VM installation monitoring

pub mod config;
pub mod matrix;
pub mod monitor;
pub mod runners;

// Re-export commonly used types
pub use config::{ConfigError, ConfigParser, PreReleaseImage, VersionDescriptor, VersionsConfig};

// Re-export matrix types
pub use matrix::{JobMatrix, MatrixEntry};

// Re-export monitor types
pub use monitor::{
    InstallWatcher, MonitorConfig, MonitorOutcome, MonitorReport, MultipassProbe, SessionLog,
    VmProbe,
};

// Re-export runner types
pub use runners::{CommandOutput, ShellRunner};
