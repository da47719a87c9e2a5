// Monitor Module
// Polls a VM's installation until completion or timeout

pub mod probe;
pub mod session;
pub mod watcher;

// Re-export key types
pub use probe::{MultipassProbe, VmProbe};
pub use session::SessionLog;
pub use watcher::{InstallWatcher, MonitorConfig, MonitorOutcome, MonitorReport};
