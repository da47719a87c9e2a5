// monitor-installation
// Watches a VM installation until the completion marker appears or the
// poll ceiling is reached

use clap::Parser;
use color_eyre::Result;
use vmci_service::{InstallWatcher, MonitorConfig, MultipassProbe, SessionLog};

/// Monitor a VM installation until it completes or times out.
#[derive(Parser)]
#[command(name = "monitor-installation", version)]
struct Args {
    /// Name of the target virtual machine
    #[arg(default_value = "iiab-lokole-test")]
    vm_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = MonitorConfig::for_vm(args.vm_name);
    let log = SessionLog::create_in(".")?;

    log.log("Starting automated monitoring cycle")?;
    log.log(&"=".repeat(80))?;
    log.log(&format!("VM: {}", config.vm_name))?;
    log.log(&format!("Log file: {}", log.path().display()))?;
    log.log(&"=".repeat(80))?;
    log.log(&format!(
        "Polling every {} minutes for completion...",
        config.poll_interval.as_secs() / 60
    ))?;

    let probe = MultipassProbe::new(&config);
    let watcher = InstallWatcher::new(config);

    let report = tokio::select! {
        report = watcher.run(&probe, &log) => report?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nMonitoring interrupted by user");
            std::process::exit(1);
        }
    };

    log.log("Monitoring complete!")?;
    log.log(&format!("Full log saved to: {}", log.path().display()))?;

    if report.succeeded() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
