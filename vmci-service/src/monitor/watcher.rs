// Installation Watcher
// Fixed-cadence poll loop around the VM probes

use crate::monitor::probe::VmProbe;
use crate::monitor::session::SessionLog;
use std::io;
use std::time::Duration;

/// Poll cadence, ceilings, and probe targets for one monitoring session.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Name of the target virtual machine.
    pub vm_name: String,
    /// Fixed delay between polls.
    pub poll_interval: Duration,
    /// Polls attempted before the session times out.
    pub max_polls: u32,
    /// Bound on each individual remote command.
    pub command_timeout: Duration,
    /// String whose presence in the install log signals completion.
    pub completion_marker: String,
    /// Path of the installation log inside the VM.
    pub install_log: String,
    /// Process name pattern for the provisioning tool.
    pub installer_pattern: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            vm_name: "iiab-lokole-test".to_string(),
            poll_interval: Duration::from_secs(120),
            max_polls: 90,
            command_timeout: Duration::from_secs(30),
            completion_marker: "RECAP".to_string(),
            install_log: "/opt/iiab/iiab/iiab-install.log".to_string(),
            installer_pattern: "ansible-playbook".to_string(),
        }
    }
}

impl MonitorConfig {
    /// Default configuration for a specific VM.
    pub fn for_vm(vm_name: impl Into<String>) -> Self {
        Self {
            vm_name: vm_name.into(),
            ..Self::default()
        }
    }
}

/// Terminal state of a monitoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorOutcome {
    /// Completion marker observed before the poll ceiling.
    Complete,
    /// Poll ceiling reached without completion.
    TimedOut,
}

/// What happened during one monitoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorReport {
    pub outcome: MonitorOutcome,
    /// Polls performed, including the final one.
    pub polls: u32,
}

impl MonitorReport {
    pub fn succeeded(&self) -> bool {
        self.outcome == MonitorOutcome::Complete
    }
}

/// Polls the VM probes at a fixed cadence until the installation
/// completes or the poll ceiling is reached.
pub struct InstallWatcher {
    config: MonitorConfig,
}

impl InstallWatcher {
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Run the monitoring loop to a terminal state.
    ///
    /// Probe failures are non-fatal and read as negative findings; only
    /// session-log I/O errors propagate.
    pub async fn run(&self, probe: &dyn VmProbe, log: &SessionLog) -> io::Result<MonitorReport> {
        let mut polls = 0;

        while polls < self.config.max_polls {
            polls += 1;
            log.log(&format!("Poll #{}: checking installation status...", polls))?;

            if probe.installation_complete().await {
                log.log("Installation COMPLETE!")?;
                return Ok(MonitorReport {
                    outcome: MonitorOutcome::Complete,
                    polls,
                });
            }

            if probe.installer_running().await {
                log.log("   installation still in progress...")?;
            } else {
                log.log("   installation process not detected")?;
            }

            let status = probe.vm_status().await;
            log.log(&format!("   VM status: {}", status))?;

            // Skip the final sleep; there is no poll left to wait for
            if polls < self.config.max_polls {
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }

        log.log("Maximum polling time reached")?;
        Ok(MonitorReport {
            outcome: MonitorOutcome::TimedOut,
            polls,
        })
    }
}
