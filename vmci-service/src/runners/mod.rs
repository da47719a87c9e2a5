// Runners Module
// Bounded shell command execution with captured output

pub mod shell;

// Re-export key types
pub use shell::{CommandOutput, ShellRunner};
