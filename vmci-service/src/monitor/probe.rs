// VM Probes
// Best-effort checks against the target VM via the multipass CLI

use crate::monitor::watcher::MonitorConfig;
use crate::runners::ShellRunner;

/// Checks performed on every poll of a monitoring session.
///
/// All three are best-effort: a failed or timed-out command reads as
/// "not complete" / "not running" / "Unknown" and never aborts the
/// session.
#[async_trait::async_trait]
pub trait VmProbe: Send + Sync {
    /// Whether the completion marker has appeared in the installation log.
    async fn installation_complete(&self) -> bool;

    /// Whether the provisioning process is still visible inside the VM.
    async fn installer_running(&self) -> bool;

    /// Human-readable VM status for the session log.
    async fn vm_status(&self) -> String;
}

/// Probe backed by the `multipass` CLI.
pub struct MultipassProbe {
    vm_name: String,
    install_log: String,
    completion_marker: String,
    installer_pattern: String,
    runner: ShellRunner,
}

impl MultipassProbe {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            vm_name: config.vm_name.clone(),
            install_log: config.install_log.clone(),
            completion_marker: config.completion_marker.clone(),
            installer_pattern: config.installer_pattern.clone(),
            runner: ShellRunner::new(config.command_timeout),
        }
    }

    fn completion_check(&self) -> String {
        format!(
            "multipass exec {} -- bash -c \"grep -q {} {} 2>/dev/null\"",
            self.vm_name, self.completion_marker, self.install_log
        )
    }

    fn process_check(&self) -> String {
        format!(
            "multipass exec {} -- bash -c \"pgrep -f {} > /dev/null\"",
            self.vm_name, self.installer_pattern
        )
    }

    fn status_query(&self) -> String {
        format!("multipass list | grep {}", self.vm_name)
    }
}

#[async_trait::async_trait]
impl VmProbe for MultipassProbe {
    async fn installation_complete(&self) -> bool {
        self.runner.run(&self.completion_check()).await.success()
    }

    async fn installer_running(&self) -> bool {
        self.runner.run(&self.process_check()).await.success()
    }

    async fn vm_status(&self) -> String {
        let output = self.runner.run(&self.status_query()).await;
        parse_status_field(&output.stdout)
    }
}

/// Second whitespace-separated field of a `multipass list` line,
/// which is the VM state column.
fn parse_status_field(stdout: &str) -> String {
    stdout
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown".to_string())
}
