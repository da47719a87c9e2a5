// Shell Runner
// Executes one bounded shell invocation and captures its output

use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Output of a single shell invocation.
///
/// A missing exit code means the command never ran to completion
/// (spawn failure or timeout); callers treat that the same as a
/// non-zero exit.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command completed with exit code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn not_run(stderr: String) -> Self {
        CommandOutput {
            exit_code: None,
            stdout: String::new(),
            stderr,
        }
    }
}

/// Runs shell scripts with a per-invocation timeout.
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Execute `sh -c <script>`, kill it if the timeout elapses.
    ///
    /// Never returns an error: spawn failures and timeouts are
    /// reported through the output so a failed probe stays non-fatal.
    pub async fn run(&self, script: &str) -> CommandOutput {
        let mut cmd = Command::new("sh");
        cmd.arg("-c");
        cmd.arg(script);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                return CommandOutput::not_run(format!("Failed to spawn shell process: {}", e))
            }
        };

        let mut stdout_pipe = child.stdout.take().expect("stdout was piped");
        let mut stderr_pipe = child.stderr.take().expect("stderr was piped");

        let stdout_handle = tokio::spawn(async move {
            let mut output = String::new();
            let _ = stdout_pipe.read_to_string(&mut output).await;
            output
        });

        let stderr_handle = tokio::spawn(async move {
            let mut output = String::new();
            let _ = stderr_pipe.read_to_string(&mut output).await;
            output
        });

        let wait_result = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(result) => result,
            Err(_) => {
                let _ = child.kill().await;
                return CommandOutput::not_run(format!(
                    "Command timed out after {:?}",
                    self.timeout
                ));
            }
        };

        CommandOutput {
            exit_code: wait_result.ok().and_then(|s| s.code()),
            stdout: stdout_handle.await.unwrap_or_default(),
            stderr: stderr_handle.await.unwrap_or_default(),
        }
    }
}
